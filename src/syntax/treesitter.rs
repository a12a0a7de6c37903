//! Tree-sitter backed tokenizer
//!
//! Grammars are bundled behind the `treesitter` feature; without it every
//! language lookup fails and callers fall back to the lexical tokenizer.
//! TOML has no bundled grammar and always uses the lexical tokenizer.

use super::{plain_spans, spans_from_kinds, TokenKind, TokenSpan, Tokenizer};
use crate::constants::errors;
use crate::error::{EditorError, ErrorType, Result};
use std::borrow::Cow;
use streaming_iterator::StreamingIterator;
use tree_sitter::{Language, Parser, Query, QueryCursor};

/// Load a bundled grammar by language name (e.g., "rust")
#[allow(unused_variables)]
pub fn load_language(lang_name: &str) -> Result<Language> {
    #[cfg(feature = "treesitter")]
    {
        let language: Option<Language> = match lang_name {
            "rust" => Some(tree_sitter_rust::LANGUAGE.into()),
            "python" => Some(tree_sitter_python::LANGUAGE.into()),
            "javascript" => Some(tree_sitter_javascript::LANGUAGE.into()),
            "typescript" => Some(tree_sitter_typescript::LANGUAGE_TYPESCRIPT.into()),
            "tsx" => Some(tree_sitter_typescript::LANGUAGE_TSX.into()),
            "c" => Some(tree_sitter_c::LANGUAGE.into()),
            "cpp" => Some(tree_sitter_cpp::LANGUAGE.into()),
            "go" => Some(tree_sitter_go::LANGUAGE.into()),
            "json" => Some(tree_sitter_json::LANGUAGE.into()),
            "shell" => Some(tree_sitter_bash::LANGUAGE.into()),
            "markdown" => Some(tree_sitter_md::LANGUAGE.into()),
            _ => None,
        };
        if let Some(language) = language {
            return Ok(language);
        }
    }

    Err(EditorError::new(
        ErrorType::Internal,
        errors::LANGUAGE_NOT_FOUND,
        format!("Language {lang_name} not found or feature not enabled"),
    ))
}

/// Bundled highlights query for a language.
///
/// TypeScript and C++ queries only extend their base grammar, so the base
/// query comes first.
#[allow(unused_variables)]
pub fn load_highlights(lang_name: &str) -> Result<Cow<'static, str>> {
    #[cfg(feature = "treesitter")]
    {
        let query: Option<Cow<'static, str>> = match lang_name {
            "rust" => Some(tree_sitter_rust::HIGHLIGHTS_QUERY.into()),
            "python" => Some(tree_sitter_python::HIGHLIGHTS_QUERY.into()),
            "javascript" => Some(tree_sitter_javascript::HIGHLIGHT_QUERY.into()),
            "typescript" | "tsx" => Some(
                format!(
                    "{}\n{}",
                    tree_sitter_javascript::HIGHLIGHT_QUERY,
                    tree_sitter_typescript::HIGHLIGHTS_QUERY
                )
                .into(),
            ),
            "c" => Some(tree_sitter_c::HIGHLIGHT_QUERY.into()),
            "cpp" => Some(
                format!(
                    "{}\n{}",
                    tree_sitter_c::HIGHLIGHT_QUERY,
                    tree_sitter_cpp::HIGHLIGHT_QUERY
                )
                .into(),
            ),
            "go" => Some(tree_sitter_go::HIGHLIGHTS_QUERY.into()),
            "json" => Some(tree_sitter_json::HIGHLIGHTS_QUERY.into()),
            "shell" => Some(tree_sitter_bash::HIGHLIGHT_QUERY.into()),
            "markdown" => Some(tree_sitter_md::HIGHLIGHT_QUERY_BLOCK.into()),
            _ => None,
        };
        if let Some(query) = query {
            return Ok(query);
        }
    }

    Err(EditorError::new(
        ErrorType::Internal,
        errors::LANGUAGE_NOT_FOUND,
        format!("No highlights query for {lang_name}"),
    ))
}

pub struct TreeSitterTokenizer {
    parser: Parser,
    query: Query,
    query_cursor: QueryCursor,
    name: String,
}

impl TreeSitterTokenizer {
    pub fn for_language(lang_name: &str) -> Result<Self> {
        let language = load_language(lang_name)?;
        let source = load_highlights(lang_name)?;

        let mut parser = Parser::new();
        parser.set_language(&language).map_err(|e| {
            EditorError::new(ErrorType::Internal, errors::LANGUAGE_ERROR, e.to_string())
        })?;
        let query = Query::new(&language, &source).map_err(|e| {
            EditorError::new(ErrorType::Internal, errors::QUERY_ERROR, e.to_string())
        })?;

        Ok(Self {
            parser,
            query,
            query_cursor: QueryCursor::new(),
            name: lang_name.to_string(),
        })
    }

    /// Highlight kind per byte of `bytes`; `None` if parsing failed
    fn byte_kinds(&mut self, bytes: &[u8]) -> Option<Vec<TokenKind>> {
        let tree = self.parser.parse(bytes, None)?;
        let mut kinds = vec![TokenKind::Plain; bytes.len()];

        // Destructure to split borrows
        let TreeSitterTokenizer {
            query,
            query_cursor,
            ..
        } = self;
        query_cursor.set_byte_range(0..bytes.len());
        let names = query.capture_names();
        let mut matches = query_cursor.matches(query, tree.root_node(), bytes);

        while let Some(m) = matches.next() {
            for capture in m.captures {
                let Some(name) = names.get(capture.index as usize) else {
                    continue;
                };
                let kind = TokenKind::from_capture(name);
                if kind == TokenKind::Plain {
                    continue;
                }
                let range = capture.node.byte_range();
                let end = range.end.min(bytes.len());
                // First capture wins for a byte
                for slot in kinds.iter_mut().take(end).skip(range.start) {
                    if *slot == TokenKind::Plain {
                        *slot = kind;
                    }
                }
            }
        }
        Some(kinds)
    }
}

impl Tokenizer for TreeSitterTokenizer {
    fn tokenize(&mut self, line: &str) -> Vec<TokenSpan> {
        if line.is_empty() {
            return Vec::new();
        }
        let Some(byte_kinds) = self.byte_kinds(line.as_bytes()) else {
            return plain_spans(line);
        };

        let char_kinds: Vec<TokenKind> = line
            .char_indices()
            .map(|(byte, _)| byte_kinds.get(byte).copied().unwrap_or(TokenKind::Plain))
            .collect();
        spans_from_kinds(&char_kinds)
    }

    fn name(&self) -> &str {
        &self.name
    }
}
