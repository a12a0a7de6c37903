//! Language detection and tokenizer selection

use super::lexical::{self, LanguageDef, LexicalTokenizer};
use super::{PlainTokenizer, Tokenizer};
use std::path::Path;
use tracing::debug;

/// Language name for a file, based on its extension
#[must_use]
pub fn language_for_path(path: &Path) -> Option<&'static str> {
    let extension = path.extension().and_then(|e| e.to_str())?;
    let lang = match extension.to_ascii_lowercase().as_str() {
        "rs" => "rust",
        "py" | "pyw" => "python",
        "js" | "mjs" | "cjs" | "jsx" => "javascript",
        "ts" | "mts" | "cts" => "typescript",
        "tsx" => "tsx",
        "c" | "h" => "c",
        "cc" | "cpp" | "cxx" | "hpp" | "hh" => "cpp",
        "go" => "go",
        "json" => "json",
        "toml" => "toml",
        "sh" | "bash" | "zsh" => "shell",
        "md" | "markdown" => "markdown",
        _ => return None,
    };
    Some(lang)
}

/// Lexical table for a language name
#[must_use]
pub fn language_def(name: &str) -> Option<LanguageDef> {
    let def = match name {
        "rust" => lexical::RUST,
        "python" => lexical::PYTHON,
        "javascript" => lexical::JAVASCRIPT,
        "typescript" | "tsx" => lexical::TYPESCRIPT,
        "c" => lexical::C,
        "cpp" => lexical::CPP,
        "go" => lexical::GO,
        "json" => lexical::JSON,
        "toml" => lexical::TOML,
        "shell" => lexical::SHELL,
        "markdown" => lexical::MARKDOWN,
        _ => return None,
    };
    Some(def)
}

/// Pick the best available tokenizer for `path`.
///
/// Tree-sitter grammars win when compiled in; otherwise the lexical table
/// for the language; otherwise plain text.
#[must_use]
pub fn tokenizer_for_path(path: &Path) -> Box<dyn Tokenizer> {
    let Some(lang) = language_for_path(path) else {
        return Box::new(PlainTokenizer);
    };

    match super::treesitter::TreeSitterTokenizer::for_language(lang) {
        Ok(tokenizer) => {
            debug!(target: "syntax", lang, "using tree-sitter tokenizer");
            return Box::new(tokenizer);
        }
        Err(err) => debug!(target: "syntax", lang, %err, "tree-sitter unavailable"),
    }

    match language_def(lang) {
        Some(def) => Box::new(LexicalTokenizer::new(def)),
        None => Box::new(PlainTokenizer),
    }
}
