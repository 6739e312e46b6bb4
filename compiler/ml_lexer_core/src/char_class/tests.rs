use super::*;
use proptest::prelude::*;

// === Identifier classes ===

#[test]
fn underscore_is_lowercase_and_identchar() {
    assert!(is_lowercase(b'_'));
    assert!(!is_uppercase(b'_'));
    assert!(is_identchar(b'_'));
}

#[test]
fn latin1_letters() {
    // ß starts a lowercase identifier, À an uppercase one
    assert!(is_lowercase(0xDF));
    assert!(is_uppercase(0xC0));
    // × and ÷ are excluded from both
    assert!(!is_uppercase(0xD7));
    assert!(!is_lowercase(0xF7));
    assert!(!is_identchar(0xD7));
    assert!(!is_identchar(0xF7));
}

#[test]
fn quote_and_digits_continue_but_do_not_start() {
    for b in [b'\'', b'0', b'9'] {
        assert!(is_identchar(b));
        assert!(!is_lowercase(b));
        assert!(!is_uppercase(b));
    }
}

// === Operators ===

#[test]
fn symbolchars() {
    for b in b"!$%&*+-./:<=>?@^|~" {
        assert!(is_symbolchar(*b), "{}", *b as char);
    }
    for b in b"#()[]{};,`'\"_" {
        assert!(!is_symbolchar(*b), "{}", *b as char);
    }
}

// === Blanks and digits ===

#[test]
fn blanks() {
    assert!(is_blank(b' '));
    assert!(is_blank(b'\t'));
    assert!(is_blank(0x0C));
    assert!(!is_blank(b'\n'));
    assert!(!is_blank(b'\r'));
}

#[test]
fn digit_classes() {
    assert!(is_hex(b'f') && is_hex(b'F') && !is_hex(b'g'));
    assert!(is_octal(b'7') && !is_octal(b'8'));
    assert!(is_binary(b'1') && !is_binary(b'2'));
    assert!(is_named_escape(b' ') && !is_named_escape(b'a'));
}

proptest! {
    #[test]
    fn uppercase_and_lowercase_are_disjoint(b in any::<u8>()) {
        prop_assert!(!(is_lowercase(b) && is_uppercase(b)));
    }

    #[test]
    fn identifier_starts_continue(b in any::<u8>()) {
        if is_lowercase(b) || is_uppercase(b) {
            prop_assert!(is_identchar(b));
        }
    }
}
