use super::*;

// === Reserved keyword tests ===

#[test]
fn binding_keywords() {
    assert_eq!(lookup("let"), Some(TokenKind::Let));
    assert_eq!(lookup("rec"), Some(TokenKind::Rec));
    assert_eq!(lookup("nonrec"), Some(TokenKind::Nonrec));
    assert_eq!(lookup("and"), Some(TokenKind::And));
    assert_eq!(lookup("in"), Some(TokenKind::In));
}

#[test]
fn control_keywords() {
    assert_eq!(lookup("match"), Some(TokenKind::Match));
    assert_eq!(lookup("with"), Some(TokenKind::With));
    assert_eq!(lookup("function"), Some(TokenKind::Function));
    assert_eq!(lookup("downto"), Some(TokenKind::Downto));
    assert_eq!(lookup("done"), Some(TokenKind::Done));
}

#[test]
fn module_and_class_keywords() {
    assert_eq!(lookup("module"), Some(TokenKind::Module));
    assert_eq!(lookup("functor"), Some(TokenKind::Functor));
    assert_eq!(lookup("sig"), Some(TokenKind::Sig));
    assert_eq!(lookup("exception"), Some(TokenKind::Exception));
    assert_eq!(lookup("constraint"), Some(TokenKind::Constraint));
    assert_eq!(lookup("initializer"), Some(TokenKind::Initializer));
}

#[test]
fn operator_keywords_carry_precedence_class() {
    for op in ["mod", "land", "lor", "lxor"] {
        assert_eq!(lookup(op), Some(TokenKind::Infix3(op.to_owned())), "{op}");
    }
    for op in ["lsl", "lsr", "asr"] {
        assert_eq!(lookup(op), Some(TokenKind::Infix4(op.to_owned())), "{op}");
    }
}

// === Non-keyword tests ===

#[test]
fn non_keywords() {
    assert_eq!(lookup("x"), None);
    assert_eq!(lookup("lets"), None);
    assert_eq!(lookup("Let"), None);
    assert_eq!(lookup("_let"), None);
    assert_eq!(lookup("initializers"), None);
    assert_eq!(lookup(""), None);
}

#[test]
fn every_keyword_roundtrips_through_spelling() {
    let all = [
        "and", "as", "assert", "begin", "class", "constraint", "do", "done", "downto", "else",
        "end", "exception", "external", "false", "for", "fun", "function", "functor", "if",
        "in", "include", "inherit", "initializer", "lazy", "let", "match", "method", "module",
        "mutable", "new", "nonrec", "object", "of", "open", "or", "private", "rec", "sig",
        "struct", "then", "to", "true", "try", "type", "val", "virtual", "when", "while",
        "with",
    ];
    for word in all {
        let kind = lookup(word);
        assert_eq!(
            kind.as_ref().and_then(TokenKind::fixed_spelling),
            Some(word),
            "{word}"
        );
    }
}

// === Override layer ===

#[test]
fn override_wins_over_fixed_table() {
    let keywords = Keywords::new()
        .with_override("test", TokenKind::Let)
        .with_override("let", TokenKind::Lident("let".to_owned()));
    assert_eq!(keywords.lookup("test"), Some(TokenKind::Let));
    assert_eq!(
        keywords.lookup("let"),
        Some(TokenKind::Lident("let".to_owned()))
    );
    assert_eq!(keywords.lookup("match"), Some(TokenKind::Match));
    assert_eq!(keywords.lookup("other"), None);
    assert_eq!(keywords.override_count(), 2);
}

#[test]
fn reserved_covers_both_layers() {
    let keywords: Keywords = [("expect", TokenKind::Assert)].into_iter().collect();
    assert!(keywords.is_reserved("expect"));
    assert!(keywords.is_reserved("let"));
    assert!(keywords.is_reserved("mod"));
    assert!(!keywords.is_reserved("x"));
}
