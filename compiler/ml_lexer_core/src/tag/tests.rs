use super::*;

// === TokenTag discriminants ===

#[test]
fn repr_u8_semantic_ranges() {
    assert_eq!(TokenTag::Blank as u8, 0);
    assert_eq!(TokenTag::Underscore as u8, 8);
    assert_eq!(TokenTag::Int as u8, 16);
    assert_eq!(TokenTag::CharNewline as u8, 24);
    assert_eq!(TokenTag::StringOpen as u8, 32);
    assert_eq!(TokenTag::Prefix as u8, 40);
    assert_eq!(TokenTag::AmperAmper as u8, 64);
    assert_eq!(TokenTag::Star as u8, 109);
    assert_eq!(TokenTag::IllegalChar as u8, 240);
    assert_eq!(TokenTag::Eof as u8, 255);
}

#[test]
fn tag_is_one_byte() {
    assert_eq!(std::mem::size_of::<TokenTag>(), 1);
}

// === Lexeme ===

#[test]
fn fixed_lexemes() {
    assert_eq!(TokenTag::LBracketAt3.lexeme(), Some("[@@@"));
    assert_eq!(TokenTag::CommentOpenAmbiguous.lexeme(), Some("(*)"));
    assert_eq!(TokenTag::GreaterRBracket.lexeme(), Some(">]"));
    assert_eq!(TokenTag::QuestionQuestion.lexeme(), Some("??"));
}

#[test]
fn variable_tags_have_no_lexeme() {
    for tag in [
        TokenTag::Lowercase,
        TokenTag::Label,
        TokenTag::Int,
        TokenTag::Float,
        TokenTag::Infix0,
        TokenTag::QuotedStringOpen,
        TokenTag::LineDirective,
        TokenTag::Eof,
    ] {
        assert_eq!(tag.lexeme(), None, "{tag:?}");
    }
}

#[test]
fn shebang_lines() {
    assert_eq!(ShebangTag::ThreeLines.lines(), 3);
    assert_eq!(ShebangTag::OneLine.lines(), 1);
    assert_eq!(ShebangTag::Absent.lines(), 0);
}
