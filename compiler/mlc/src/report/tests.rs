use super::*;
use ml_ir::{IntKind, Position};
use ml_lexer::WarningKind;

fn span(file: &str, start: usize, end: usize) -> Span {
    let mut from = Position::start_of(file);
    from.offset = start;
    let mut to = from.clone();
    to.offset = end;
    Span::new(from, to)
}

fn render(source: &mut SourceText, report: &Report<'static, DiagnosticSpan>) -> String {
    let mut out = Vec::new();
    if let Err(err) = source.write(report, &mut out) {
        panic!("render failed: {err}");
    }
    String::from_utf8_lossy(&out).into_owned()
}

// === Source decoding ===

#[test]
fn utf8_source_uses_byte_indexing() {
    let source = SourceText::new("a.ml", "let caf\u{e9} = 1".as_bytes());
    assert!(matches!(source.index_type, IndexType::Byte));
}

#[test]
fn non_utf8_source_is_read_as_latin1() {
    let source = SourceText::new("a.ml", b"let x = \xe9");
    assert!(matches!(source.index_type, IndexType::Char));
}

// === Errors ===

#[test]
fn error_report_names_the_problem() {
    let mut source = SourceText::new("a.ml", b"let x = 1 (* open").with_color(false);
    let err = LexError::unterminated_comment(span("a.ml", 10, 12), 1);
    let report = source.error_report(&err);
    let text = render(&mut source, &report);
    assert!(text.contains("comment not terminated"), "{text}");
    assert!(text.contains("comment opened here"), "{text}");
    assert!(text.contains("inside a comment"), "{text}");
    assert!(text.contains("a.ml"), "{text}");
}

#[test]
fn string_in_comment_labels_both_openers() {
    let mut source = SourceText::new("a.ml", b"(* \"open *)").with_color(false);
    let err =
        LexError::unterminated_string_in_comment(span("a.ml", 0, 2), span("a.ml", 3, 4), 1);
    let report = source.error_report(&err);
    let text = render(&mut source, &report);
    assert!(text.contains("comment opened here"), "{text}");
    assert!(text.contains("string literal starts here"), "{text}");
}

#[test]
fn best_suggestion_becomes_help() {
    let mut source = SourceText::new("a.ml", b"99999999999999999999").with_color(false);
    let err = LexError::literal_overflow(span("a.ml", 0, 20), IntKind::Int);
    let report = source.error_report(&err);
    let text = render(&mut source, &report);
    assert!(text.contains("`L` suffix"), "{text}");
}

#[test]
fn renamed_file_is_noted() {
    let mut source = SourceText::new("a.ml", b"# 1 \"b.ml\"\n\x01").with_color(false);
    let err = LexError::illegal_character(span("b.ml", 11, 12), 1);
    let report = source.error_report(&err);
    let text = render(&mut source, &report);
    assert!(text.contains("reported as b.ml"), "{text}");
}

// === Warnings ===

#[test]
fn warning_report_uses_warning_text() {
    let mut source = SourceText::new("a.ml", b"x *) y").with_color(false);
    let warning = Warning {
        span: span("a.ml", 2, 4),
        kind: WarningKind::CommentNotEnd,
    };
    let report = source.warning_report(&warning);
    let text = render(&mut source, &report);
    assert!(text.contains("this is not the end of a comment"), "{text}");
    assert!(!text.contains("reported as"), "{text}");
}
