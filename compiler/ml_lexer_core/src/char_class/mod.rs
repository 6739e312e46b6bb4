//! Byte classification for the ML lexical grammar.
//!
//! Source text is treated as Latin-1: every byte is one character, and the
//! accented letters `0xC0..=0xFF` take part in identifiers. A 256-entry
//! table maps each byte to its set of classes so the scanner never does
//! more than one load per classification.

use bitflags::bitflags;

bitflags! {
    /// Lexical classes a byte belongs to.
    #[derive(Clone, Copy, Debug, PartialEq, Eq)]
    pub struct ByteClass: u8 {
        /// ` `, `\t`, form feed.
        const BLANK = 1 << 0;
        /// Starts a lowercase identifier: `a-z`, `_`, `ß-ö`, `ø-ÿ`.
        const LOWERCASE = 1 << 1;
        /// Starts a capitalized identifier: `A-Z`, `À-Ö`, `Ø-Þ`.
        const UPPERCASE = 1 << 2;
        /// Continues an identifier.
        const IDENTCHAR = 1 << 3;
        /// Operator character: `! $ % & * + - . / : < = > ? @ ^ | ~`.
        const SYMBOLCHAR = 1 << 4;
        /// `0-9`.
        const DECIMAL = 1 << 5;
        /// `0-9 a-f A-F`.
        const HEX = 1 << 6;
        /// Byte that ends a plain run inside a comment body.
        const COMMENT_STOP = 1 << 7;
    }
}

const fn classify(b: u8) -> ByteClass {
    let mut bits = 0u8;
    if matches!(b, b' ' | b'\t' | 0x0C) {
        bits |= ByteClass::BLANK.bits();
    }
    if matches!(b, b'a'..=b'z' | b'_' | 0xDF..=0xF6 | 0xF8..=0xFF) {
        bits |= ByteClass::LOWERCASE.bits();
    }
    if matches!(b, b'A'..=b'Z' | 0xC0..=0xD6 | 0xD8..=0xDE) {
        bits |= ByteClass::UPPERCASE.bits();
    }
    if matches!(
        b,
        b'A'..=b'Z' | b'a'..=b'z' | b'_' | b'\'' | b'0'..=b'9' | 0xC0..=0xD6 | 0xD8..=0xF6 | 0xF8..=0xFF
    ) {
        bits |= ByteClass::IDENTCHAR.bits();
    }
    if matches!(
        b,
        b'!' | b'$'
            | b'%'
            | b'&'
            | b'*'
            | b'+'
            | b'-'
            | b'.'
            | b'/'
            | b':'
            | b'<'
            | b'='
            | b'>'
            | b'?'
            | b'@'
            | b'^'
            | b'|'
            | b'~'
    ) {
        bits |= ByteClass::SYMBOLCHAR.bits();
    }
    if b.is_ascii_digit() {
        bits |= ByteClass::DECIMAL.bits();
    }
    if b.is_ascii_hexdigit() {
        bits |= ByteClass::HEX.bits();
    }
    if matches!(b, b'(' | b'*' | b'"' | b'{' | b'\'' | b'\r' | b'\n') {
        bits |= ByteClass::COMMENT_STOP.bits();
    }
    ByteClass::from_bits_retain(bits)
}

#[allow(
    clippy::cast_possible_truncation,
    reason = "the index stays below 256 so it always fits in u8"
)]
static CLASS_TABLE: [ByteClass; 256] = {
    let mut table = [ByteClass::empty(); 256];
    let mut i = 0;
    while i < 256 {
        table[i] = classify(i as u8);
        i += 1;
    }
    table
};

/// All classes of `b`.
#[inline]
pub fn class_of(b: u8) -> ByteClass {
    CLASS_TABLE[b as usize]
}

#[inline]
pub fn is_blank(b: u8) -> bool {
    class_of(b).contains(ByteClass::BLANK)
}

#[inline]
pub fn is_lowercase(b: u8) -> bool {
    class_of(b).contains(ByteClass::LOWERCASE)
}

#[inline]
pub fn is_uppercase(b: u8) -> bool {
    class_of(b).contains(ByteClass::UPPERCASE)
}

#[inline]
pub fn is_identchar(b: u8) -> bool {
    class_of(b).contains(ByteClass::IDENTCHAR)
}

#[inline]
pub fn is_symbolchar(b: u8) -> bool {
    class_of(b).contains(ByteClass::SYMBOLCHAR)
}

#[inline]
pub fn is_decimal(b: u8) -> bool {
    class_of(b).contains(ByteClass::DECIMAL)
}

#[inline]
pub fn is_hex(b: u8) -> bool {
    class_of(b).contains(ByteClass::HEX)
}

#[inline]
pub fn is_octal(b: u8) -> bool {
    matches!(b, b'0'..=b'7')
}

#[inline]
pub fn is_binary(b: u8) -> bool {
    matches!(b, b'0' | b'1')
}

/// Named escapes valid after a backslash: `\\ \' \" n t b r` and space.
#[inline]
pub fn is_named_escape(b: u8) -> bool {
    matches!(b, b'\\' | b'\'' | b'"' | b'n' | b't' | b'b' | b'r' | b' ')
}

#[cfg(test)]
mod tests;
