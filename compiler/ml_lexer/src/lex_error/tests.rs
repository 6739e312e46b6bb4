use super::*;
use ml_ir::Position;

fn span(start: usize, end: usize) -> Span {
    let origin = Position::start_of("test.ml");
    Span::new(origin.shifted(start), origin.shifted(end))
}

// === Construction ===

#[test]
fn unterminated_string_construction() {
    let err = LexError::unterminated_string(span(3, 4));
    assert_eq!(err.span, span(3, 4));
    assert_eq!(err.kind, LexErrorKind::UnterminatedString);
    assert_eq!(err.context, LexErrorContext::InsideString);
    assert!(!err.suggestions.is_empty());
}

#[test]
fn quotation_shares_unterminated_string_kind() {
    let err = LexError::unterminated_quotation(span(0, 4));
    assert_eq!(err.kind, LexErrorKind::UnterminatedString);
    assert_eq!(err.context, LexErrorContext::InsideQuotation);
}

#[test]
fn string_in_comment_is_anchored_at_comment() {
    let err = LexError::unterminated_string_in_comment(span(0, 2), span(5, 6), 3);
    assert_eq!(err.span, span(0, 2));
    assert_eq!(err.context, LexErrorContext::InsideComment { depth: 3 });
    assert_eq!(
        err.kind,
        LexErrorKind::UnterminatedStringInComment {
            string_start: span(5, 6)
        }
    );
}

#[test]
fn overflow_suggests_wider_kind_only_when_one_exists() {
    assert!(!LexError::literal_overflow(span(0, 3), IntKind::Int)
        .suggestions
        .is_empty());
    assert!(LexError::literal_overflow(span(0, 3), IntKind::Int64)
        .suggestions
        .is_empty());
}

#[test]
fn fluent_builders() {
    let err = LexError::illegal_character(span(0, 1), b'\x01')
        .with_context(LexErrorContext::InsideQuotation)
        .with_suggestion(LexSuggestion::text("remove it", 2));
    assert_eq!(err.context, LexErrorContext::InsideQuotation);
    assert_eq!(err.suggestions.len(), 1);
    assert_eq!(err.suggestions[0].priority, 2);
}

// === Messages ===

#[test]
fn illegal_escape_lists_valid_escapes() {
    let err = LexError::illegal_escape(span(0, 2), "\\q");
    let help = &err.suggestions[0].message;
    assert!(help.contains("\\\""), "{help}");
    assert!(help.contains("\\xhh"), "{help}");
    assert!(help.contains("\\ddd (up to \\255)"), "{help}");
}

#[test]
fn messages() {
    assert_eq!(
        LexError::illegal_character(span(0, 1), b'\x01').to_string(),
        "illegal character (\\x01)"
    );
    assert_eq!(
        LexError::illegal_escape(span(0, 4), "\\q").to_string(),
        "illegal backslash escape in string or character (\\q)"
    );
    assert_eq!(
        LexError::keyword_as_label(span(0, 5), "let").to_string(),
        "`let` is a keyword, it cannot be used as label name"
    );
    assert_eq!(
        LexError::literal_overflow(span(0, 30), IntKind::Int64).to_string(),
        "integer literal exceeds the range of representable integers of type int64"
    );
    assert_eq!(
        LexError::unterminated_comment(span(0, 2), 2).to_string(),
        "comment not terminated"
    );
}

#[test]
fn warning_display() {
    let w = Warning {
        span: span(4, 6),
        kind: WarningKind::CommentNotEnd,
    };
    assert_eq!(
        w.to_string(),
        "test.ml:1:4-6: warning: this is not the end of a comment"
    );
}

#[test]
fn errors_hash_by_value() {
    use std::collections::HashSet;
    let mut set = HashSet::new();
    set.insert(LexError::unterminated_string(span(0, 1)));
    set.insert(LexError::unterminated_string(span(0, 1)));
    set.insert(LexError::unterminated_quotation(span(0, 1)));
    assert_eq!(set.len(), 2);
}
