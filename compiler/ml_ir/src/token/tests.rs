use super::*;
use crate::Position;
use pretty_assertions::assert_eq;

#[test]
fn int_kind_widths() {
    assert_eq!(IntKind::Int.bits(), 63);
    assert_eq!(IntKind::Int32.bits(), 32);
    assert_eq!(IntKind::Int64.bits(), 64);
    assert_eq!(IntKind::NativeInt.bits(), 64);
    assert_eq!(IntKind::Int.suffix(), None);
    assert_eq!(IntKind::Int64.suffix(), Some('L'));
    assert_eq!(IntKind::NativeInt.to_string(), "nativeint");
}

#[test]
fn keywords_and_punctuation_have_spellings() {
    assert_eq!(TokenKind::Let.fixed_spelling(), Some("let"));
    assert_eq!(TokenKind::LBracketAt3.fixed_spelling(), Some("[@@@"));
    assert_eq!(TokenKind::GreaterRBrace.fixed_spelling(), Some(">}"));
    assert_eq!(TokenKind::Lident("x".into()).fixed_spelling(), None);
    assert_eq!(TokenKind::Eof.fixed_spelling(), None);
}

#[test]
fn display_round_trips_simple_tokens() {
    assert_eq!(TokenKind::Lident("foo'".into()).to_string(), "foo'");
    assert_eq!(TokenKind::Label("x".into()).to_string(), "~x:");
    assert_eq!(TokenKind::OptLabel("y".into()).to_string(), "?y:");
    assert_eq!(TokenKind::Int(-3).to_string(), "-3");
    assert_eq!(TokenKind::Int32(7).to_string(), "7l");
    assert_eq!(TokenKind::Int64(7).to_string(), "7L");
    assert_eq!(TokenKind::NativeInt(7).to_string(), "7n");
    assert_eq!(TokenKind::Char(b'\n').to_string(), "'\\n'");
    assert_eq!(TokenKind::Infix3("*=".into()).to_string(), "*=");
    assert_eq!(TokenKind::ColonEqual.to_string(), ":=");
}

#[test]
fn display_strings() {
    let plain = TokenKind::String {
        text: b"a\"b".to_vec(),
        delimiter: None,
    };
    assert_eq!(plain.to_string(), "\"a\\\"b\"");

    let quoted = TokenKind::String {
        text: b"raw".to_vec(),
        delimiter: Some("id".into()),
    };
    assert_eq!(quoted.to_string(), "{id|raw|id}");
}

#[test]
fn display_names() {
    assert_eq!(TokenKind::Int64(1).display_name(), "integer");
    assert_eq!(TokenKind::Comment(String::new()).display_name(), "comment");
    assert_eq!(TokenKind::Match.display_name(), "match");
    assert_eq!(TokenKind::Eof.display_name(), "end of file");
}

#[test]
fn predicates() {
    assert!(TokenKind::Comment("x".into()).is_comment());
    assert!(!TokenKind::Lident("x".into()).is_comment());
    assert!(TokenKind::Eof.is_eof());
}

#[test]
fn token_debug_shows_kind_and_span() {
    let start = Position::start_of("t.ml");
    let tok = Token::new(TokenKind::Let, crate::Span::new(start.clone(), start.shifted(3)));
    assert_eq!(format!("{tok:?}"), "Let @ 1:0:0..1:3:3");
}
