use super::lexical::{self, LexicalTokenizer};
use super::*;
use std::path::Path;

fn kinds_of(spans: &[TokenSpan], line: &str) -> Vec<(String, TokenKind)> {
    let chars: Vec<char> = line.chars().collect();
    spans
        .iter()
        .map(|s| (chars[s.start..s.end].iter().collect(), s.kind))
        .collect()
}

#[test]
fn test_plain_tokenizer_single_span() {
    let mut t = PlainTokenizer;
    assert_eq!(t.tokenize("héllo"), vec![TokenSpan::new(0, 5, TokenKind::Plain)]);
    assert!(t.tokenize("").is_empty());
}

#[test]
fn test_covers_line() {
    let spans = [
        TokenSpan::new(0, 2, TokenKind::Keyword),
        TokenSpan::new(2, 5, TokenKind::Plain),
    ];
    assert!(covers_line(&spans, 5));
    assert!(!covers_line(&spans, 6));
    assert!(!covers_line(&spans[1..], 5));
    assert!(covers_line(&[], 0));
}

#[test]
fn test_merge_adjacent() {
    let merged = merge_adjacent(vec![
        TokenSpan::new(0, 1, TokenKind::Plain),
        TokenSpan::new(1, 3, TokenKind::Plain),
        TokenSpan::new(3, 3, TokenKind::String),
        TokenSpan::new(3, 4, TokenKind::Keyword),
    ]);
    assert_eq!(
        merged,
        vec![
            TokenSpan::new(0, 3, TokenKind::Plain),
            TokenSpan::new(3, 4, TokenKind::Keyword),
        ]
    );
}

#[test]
fn test_capture_mapping() {
    assert_eq!(TokenKind::from_capture("keyword.return"), TokenKind::Keyword);
    assert_eq!(TokenKind::from_capture("string"), TokenKind::String);
    assert_eq!(TokenKind::from_capture("comment.documentation"), TokenKind::Comment);
    assert_eq!(TokenKind::from_capture("function.macro"), TokenKind::Function);
    assert_eq!(TokenKind::from_capture("type.builtin"), TokenKind::Type);
    assert_eq!(TokenKind::from_capture("constant.builtin"), TokenKind::Constant);
    assert_eq!(TokenKind::from_capture("punctuation.bracket"), TokenKind::Punctuation);
    assert_eq!(TokenKind::from_capture("variable"), TokenKind::Plain);
}

#[test]
fn test_rust_line() {
    let line = "let x = foo(42); // done";
    let mut t = LexicalTokenizer::new(lexical::RUST);
    let spans = t.tokenize(line);
    assert!(covers_line(&spans, line.chars().count()));

    let kinds = kinds_of(&spans, line);
    assert_eq!(kinds[0], ("let".to_string(), TokenKind::Keyword));
    assert!(kinds.contains(&("foo".to_string(), TokenKind::Function)));
    assert!(kinds.contains(&("42".to_string(), TokenKind::Number)));
    assert!(kinds.contains(&("=".to_string(), TokenKind::Operator)));
    assert_eq!(
        kinds.last().unwrap(),
        &("// done".to_string(), TokenKind::Comment)
    );
}

#[test]
fn test_string_with_escape() {
    let line = r#"s = "a\"b" + c"#;
    let mut t = LexicalTokenizer::new(lexical::PYTHON);
    let kinds = kinds_of(&t.tokenize(line), line);
    assert!(kinds.contains(&(r#""a\"b""#.to_string(), TokenKind::String)));
}

#[test]
fn test_unterminated_string_runs_to_end() {
    let line = "x = 'open";
    let mut t = LexicalTokenizer::new(lexical::PYTHON);
    let spans = t.tokenize(line);
    assert!(covers_line(&spans, 9));
    assert_eq!(spans.last().unwrap().kind, TokenKind::String);
}

#[test]
fn test_trailing_backslash_in_string() {
    let line = "\"abc\\";
    let mut t = LexicalTokenizer::new(lexical::RUST);
    let spans = t.tokenize(line);
    assert!(covers_line(&spans, 5));
}

#[test]
fn test_python_constants_and_types() {
    let line = "def f(x: int) -> None:";
    let mut t = LexicalTokenizer::new(lexical::PYTHON);
    let kinds = kinds_of(&t.tokenize(line), line);
    assert_eq!(kinds[0], ("def".to_string(), TokenKind::Keyword));
    assert!(kinds.contains(&("f".to_string(), TokenKind::Function)));
    assert!(kinds.contains(&("int".to_string(), TokenKind::Type)));
    assert!(kinds.contains(&("None".to_string(), TokenKind::Constant)));
}

#[test]
fn test_c_preprocessor_directive() {
    let line = "#include <stdio.h>";
    let mut t = LexicalTokenizer::new(lexical::C);
    let kinds = kinds_of(&t.tokenize(line), line);
    assert_eq!(kinds[0], ("#include".to_string(), TokenKind::Keyword));
}

#[test]
fn test_non_ascii_offsets_are_chars() {
    let line = "// переменная";
    let mut t = LexicalTokenizer::new(lexical::RUST);
    assert_eq!(
        t.tokenize(line),
        vec![TokenSpan::new(0, 13, TokenKind::Comment)]
    );
}

#[test]
fn test_language_detection() {
    assert_eq!(language_for_path(Path::new("src/main.rs")), Some("rust"));
    assert_eq!(language_for_path(Path::new("a.PY")), Some("python"));
    assert_eq!(language_for_path(Path::new("x.h")), Some("c"));
    assert_eq!(language_for_path(Path::new("Cargo.toml")), Some("toml"));
    assert_eq!(language_for_path(Path::new("run.sh")), Some("shell"));
    assert_eq!(language_for_path(Path::new("app.ts")), Some("typescript"));
    assert_eq!(language_for_path(Path::new("view.tsx")), Some("tsx"));
    assert_eq!(language_for_path(Path::new("README")), None);
    assert_eq!(language_for_path(Path::new("data.xyz")), None);
}

#[test]
fn test_tokenizer_for_unknown_path_is_plain() {
    let t = tokenizer_for_path(Path::new("notes.txt"));
    assert_eq!(t.name(), "plain");
}

#[test]
fn test_tokenizer_for_known_path() {
    let t = tokenizer_for_path(Path::new("app.go"));
    assert_eq!(t.name(), "go");
}

#[cfg(not(feature = "treesitter"))]
#[test]
fn test_treesitter_unavailable_without_feature() {
    assert!(treesitter::TreeSitterTokenizer::for_language("rust").is_err());
    let t = tokenizer_for_path(Path::new("lib.rs"));
    assert_eq!(t.name(), "rust");
}

#[cfg(feature = "treesitter")]
#[test]
fn test_treesitter_rust_line_covers() {
    let mut t = treesitter::TreeSitterTokenizer::for_language("rust").unwrap();
    let line = "fn main() { let s = \"hi\"; }";
    let spans = t.tokenize(line);
    assert!(covers_line(&spans, line.chars().count()));
    assert!(spans.iter().any(|s| s.kind == TokenKind::Keyword));
    assert!(spans.iter().any(|s| s.kind == TokenKind::String));
}

#[cfg(feature = "treesitter")]
#[test]
fn test_treesitter_bundled_grammars_load() {
    let samples = [
        ("python", "def f(x): return \"s\""),
        ("javascript", "const x = \"hi\";"),
        ("typescript", "let n: number = 1;"),
        ("tsx", "const el = <div>hi</div>;"),
        ("c", "int main(void) { return 0; }"),
        ("cpp", "class A { public: int x; };"),
        ("go", "func main() { x := \"s\" }"),
        ("json", "{\"key\": [1, true]}"),
        ("shell", "echo \"$HOME\" # note"),
        ("markdown", "# Title"),
    ];
    for (lang, line) in samples {
        let mut t = treesitter::TreeSitterTokenizer::for_language(lang)
            .unwrap_or_else(|e| panic!("{lang}: {e}"));
        let spans = t.tokenize(line);
        assert!(covers_line(&spans, line.chars().count()), "{lang}");
    }
}

#[cfg(feature = "treesitter")]
#[test]
fn test_treesitter_javascript_highlights() {
    let mut t = tokenizer_for_path(Path::new("app.js"));
    let line = "const s = \"hi\";";
    let spans = t.tokenize(line);
    assert!(spans.iter().any(|s| s.kind == TokenKind::Keyword));
    assert!(spans.iter().any(|s| s.kind == TokenKind::String));
}

#[test]
fn test_toml_always_lexical() {
    assert!(treesitter::TreeSitterTokenizer::for_language("toml").is_err());
    let t = tokenizer_for_path(Path::new("Cargo.toml"));
    assert_eq!(t.name(), "toml");
}
