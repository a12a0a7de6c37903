//! Keyword/string/comment tokenizer driven by a static language table
//!
//! Works line by line with no state carried between lines, so block
//! comments and multi-line strings only highlight on their first line.

use super::{merge_adjacent, TokenKind, TokenSpan, Tokenizer};
use crate::movement::is_word_char;

const OPERATOR_CHARS: &str = "+-*/%=<>!&|^~?:@";
const PUNCTUATION_CHARS: &str = "()[]{},;.";

/// Static description of a language's surface syntax
#[derive(Debug, Clone, Copy)]
pub struct LanguageDef {
    pub name: &'static str,
    pub keywords: &'static [&'static str],
    pub types: &'static [&'static str],
    pub constants: &'static [&'static str],
    pub line_comment: Option<&'static str>,
    pub string_delims: &'static [char],
    /// Treat identifiers starting with an uppercase letter as types
    pub capitalized_types: bool,
}

pub const RUST: LanguageDef = LanguageDef {
    name: "rust",
    keywords: &[
        "as", "async", "await", "break", "const", "continue", "crate", "dyn", "else", "enum",
        "extern", "fn", "for", "if", "impl", "in", "let", "loop", "match", "mod", "move", "mut",
        "pub", "ref", "return", "self", "Self", "static", "struct", "super", "trait", "type",
        "unsafe", "use", "where", "while",
    ],
    types: &[
        "bool", "char", "str", "u8", "u16", "u32", "u64", "u128", "usize", "i8", "i16", "i32",
        "i64", "i128", "isize", "f32", "f64",
    ],
    constants: &["true", "false", "None", "Some", "Ok", "Err"],
    line_comment: Some("//"),
    string_delims: &['"'],
    capitalized_types: true,
};

pub const PYTHON: LanguageDef = LanguageDef {
    name: "python",
    keywords: &[
        "and", "as", "assert", "async", "await", "break", "class", "continue", "def", "del",
        "elif", "else", "except", "finally", "for", "from", "global", "if", "import", "in", "is",
        "lambda", "nonlocal", "not", "or", "pass", "raise", "return", "try", "while", "with",
        "yield",
    ],
    types: &["int", "float", "str", "bytes", "bool", "list", "dict", "set", "tuple", "object"],
    constants: &["True", "False", "None"],
    line_comment: Some("#"),
    string_delims: &['"', '\''],
    capitalized_types: true,
};

pub const JAVASCRIPT: LanguageDef = LanguageDef {
    name: "javascript",
    keywords: &[
        "async", "await", "break", "case", "catch", "class", "const", "continue", "default",
        "delete", "do", "else", "export", "extends", "finally", "for", "function", "if", "import",
        "in", "instanceof", "let", "new", "of", "return", "static", "switch", "this", "throw",
        "try", "typeof", "var", "void", "while", "yield",
    ],
    types: &[],
    constants: &["true", "false", "null", "undefined", "NaN"],
    line_comment: Some("//"),
    string_delims: &['"', '\'', '`'],
    capitalized_types: true,
};

pub const TYPESCRIPT: LanguageDef = LanguageDef {
    name: "typescript",
    keywords: &[
        "abstract", "as", "async", "await", "break", "case", "catch", "class", "const",
        "continue", "declare", "default", "do", "else", "enum", "export", "extends", "finally",
        "for", "function", "if", "implements", "import", "in", "interface", "keyof", "let", "new",
        "of", "private", "protected", "public", "readonly", "return", "static", "switch", "this",
        "throw", "try", "type", "typeof", "var", "while",
    ],
    types: &["any", "boolean", "number", "string", "unknown", "never", "void", "object"],
    constants: &["true", "false", "null", "undefined"],
    line_comment: Some("//"),
    string_delims: &['"', '\'', '`'],
    capitalized_types: true,
};

pub const C: LanguageDef = LanguageDef {
    name: "c",
    keywords: &[
        "break", "case", "const", "continue", "default", "do", "else", "enum", "extern", "for",
        "goto", "if", "inline", "register", "return", "sizeof", "static", "struct", "switch",
        "typedef", "union", "volatile", "while", "#include", "#define", "#ifdef", "#ifndef",
        "#endif", "#if", "#else", "#pragma",
    ],
    types: &[
        "char", "double", "float", "int", "long", "short", "signed", "unsigned", "void",
        "size_t", "bool",
    ],
    constants: &["NULL", "true", "false"],
    line_comment: Some("//"),
    string_delims: &['"', '\''],
    capitalized_types: false,
};

pub const CPP: LanguageDef = LanguageDef {
    name: "cpp",
    keywords: &[
        "auto", "break", "case", "catch", "class", "const", "constexpr", "continue", "default",
        "delete", "do", "else", "enum", "explicit", "extern", "for", "friend", "if", "inline",
        "namespace", "new", "noexcept", "operator", "private", "protected", "public", "return",
        "sizeof", "static", "struct", "switch", "template", "this", "throw", "try", "typedef",
        "typename", "using", "virtual", "while", "#include", "#define", "#ifdef", "#ifndef",
        "#endif", "#if", "#else", "#pragma",
    ],
    types: &[
        "bool", "char", "double", "float", "int", "long", "short", "signed", "unsigned", "void",
        "size_t", "string",
    ],
    constants: &["nullptr", "true", "false", "NULL"],
    line_comment: Some("//"),
    string_delims: &['"', '\''],
    capitalized_types: true,
};

pub const GO: LanguageDef = LanguageDef {
    name: "go",
    keywords: &[
        "break", "case", "chan", "const", "continue", "default", "defer", "else", "fallthrough",
        "for", "func", "go", "goto", "if", "import", "interface", "map", "package", "range",
        "return", "select", "struct", "switch", "type", "var",
    ],
    types: &[
        "bool", "byte", "error", "float32", "float64", "int", "int8", "int16", "int32", "int64",
        "rune", "string", "uint", "uint8", "uint16", "uint32", "uint64", "uintptr",
    ],
    constants: &["true", "false", "nil", "iota"],
    line_comment: Some("//"),
    string_delims: &['"', '\'', '`'],
    capitalized_types: false,
};

pub const JSON: LanguageDef = LanguageDef {
    name: "json",
    keywords: &[],
    types: &[],
    constants: &["true", "false", "null"],
    line_comment: None,
    string_delims: &['"'],
    capitalized_types: false,
};

pub const TOML: LanguageDef = LanguageDef {
    name: "toml",
    keywords: &[],
    types: &[],
    constants: &["true", "false"],
    line_comment: Some("#"),
    string_delims: &['"', '\''],
    capitalized_types: false,
};

pub const SHELL: LanguageDef = LanguageDef {
    name: "shell",
    keywords: &[
        "if", "then", "else", "elif", "fi", "for", "while", "until", "do", "done", "case", "esac",
        "in", "function", "return", "export", "local", "readonly", "source", "exit",
    ],
    types: &[],
    constants: &["true", "false"],
    line_comment: Some("#"),
    string_delims: &['"', '\''],
    capitalized_types: false,
};

pub const MARKDOWN: LanguageDef = LanguageDef {
    name: "markdown",
    keywords: &[],
    types: &[],
    constants: &[],
    line_comment: None,
    string_delims: &['`'],
    capitalized_types: false,
};

/// Tokenizer over a [`LanguageDef`]
#[derive(Debug, Clone, Copy)]
pub struct LexicalTokenizer {
    def: LanguageDef,
}

impl LexicalTokenizer {
    #[must_use]
    pub fn new(def: LanguageDef) -> Self {
        LexicalTokenizer { def }
    }

    fn starts_with_at(chars: &[char], i: usize, pattern: &str) -> bool {
        let mut idx = i;
        for p in pattern.chars() {
            if chars.get(idx) != Some(&p) {
                return false;
            }
            idx += 1;
        }
        true
    }

    fn classify_word(&self, word: &str, next_non_space: Option<char>) -> TokenKind {
        let def = &self.def;
        if def.keywords.contains(&word) {
            TokenKind::Keyword
        } else if def.constants.contains(&word) {
            TokenKind::Constant
        } else if def.types.contains(&word) {
            TokenKind::Type
        } else if next_non_space == Some('(') {
            TokenKind::Function
        } else if def.capitalized_types && word.starts_with(|c: char| c.is_uppercase()) {
            TokenKind::Type
        } else {
            TokenKind::Plain
        }
    }

    fn scan(&self, chars: &[char]) -> Vec<TokenSpan> {
        let mut spans = Vec::new();
        let mut i = 0;

        while i < chars.len() {
            let start = i;
            let c = chars[i];

            let kind = if self
                .def
                .line_comment
                .is_some_and(|marker| Self::starts_with_at(chars, i, marker))
            {
                i = chars.len();
                TokenKind::Comment
            } else if self.def.string_delims.contains(&c) {
                i += 1;
                while i < chars.len() && chars[i] != c {
                    // Skip escaped characters
                    i += if chars[i] == '\\' { 2 } else { 1 };
                }
                i = (i + 1).min(chars.len());
                TokenKind::String
            } else if c.is_ascii_digit() {
                while i < chars.len() && (is_word_char(chars[i]) || chars[i] == '.') {
                    i += 1;
                }
                TokenKind::Number
            } else if is_word_char(c) || (c == '#' && chars.get(i + 1).is_some_and(|n| n.is_alphabetic())) {
                i += 1;
                while i < chars.len() && is_word_char(chars[i]) {
                    i += 1;
                }
                let word: String = chars[start..i].iter().collect();
                let next = chars[i..].iter().copied().find(|c| !c.is_whitespace());
                self.classify_word(&word, next)
            } else if c.is_whitespace() {
                while i < chars.len() && chars[i].is_whitespace() {
                    i += 1;
                }
                TokenKind::Plain
            } else if OPERATOR_CHARS.contains(c) {
                i += 1;
                TokenKind::Operator
            } else if PUNCTUATION_CHARS.contains(c) {
                i += 1;
                TokenKind::Punctuation
            } else {
                i += 1;
                TokenKind::Plain
            };

            spans.push(TokenSpan::new(start, i, kind));
        }

        merge_adjacent(spans)
    }
}

impl Tokenizer for LexicalTokenizer {
    fn tokenize(&mut self, line: &str) -> Vec<TokenSpan> {
        let chars: Vec<char> = line.chars().collect();
        self.scan(&chars)
    }

    fn name(&self) -> &str {
        self.def.name
    }
}
