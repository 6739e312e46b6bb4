//! Literal and escape decoding.
//!
//! Pure helpers that turn raw lexemes into token payloads. The scanner has
//! already checked every lexeme's shape, so these only convert and
//! range-check.

use ml_ir::IntKind;

/// Decode bytes as Latin-1, one `char` per byte.
pub(crate) fn latin1(bytes: &[u8]) -> String {
    bytes.iter().copied().map(char::from).collect()
}

/// Drop `_` digit separators; only allocates a new buffer if one is present.
pub(crate) fn strip_underscores(text: &str) -> String {
    if text.contains('_') {
        text.replace('_', "")
    } else {
        text.to_owned()
    }
}

// ─── Integers ───

/// Parse digits skipping underscores, without allocation.
fn parse_int_skip_underscores(digits: &[u8], radix: u32) -> Option<u64> {
    let mut result: u64 = 0;
    for &b in digits {
        if b == b'_' {
            continue;
        }
        let digit = char::from(b).to_digit(radix)?;
        result = result.checked_mul(u64::from(radix))?;
        result = result.checked_add(u64::from(digit))?;
    }
    Some(result)
}

/// Radix prefix and the digits after it.
fn split_radix(lexeme: &[u8]) -> (&[u8], u32) {
    match lexeme {
        [b'0', b'x' | b'X', rest @ ..] => (rest, 16),
        [b'0', b'o' | b'O', rest @ ..] => (rest, 8),
        [b'0', b'b' | b'B', rest @ ..] => (rest, 2),
        _ => (lexeme, 10),
    }
}

/// Reinterpret the low `bits` bits of `value` as two's complement.
fn sign_extend(value: u64, bits: u32) -> i64 {
    let shift = 64 - bits;
    i64::from_ne_bytes((value << shift).to_ne_bytes()) >> shift
}

/// Value of an integer literal (suffix already removed) of width `kind`.
///
/// Decimal literals may reach the magnitude of the minimum value, which
/// wraps to it. Hexadecimal, octal and binary literals may use every bit
/// and are read as two's complement. `None` means overflow.
pub(crate) fn int_value(lexeme: &[u8], kind: IntKind) -> Option<i64> {
    let (digits, radix) = split_radix(lexeme);
    let magnitude = parse_int_skip_underscores(digits, radix)?;
    let bits = kind.bits();
    let limit = if radix == 10 {
        1u64 << (bits - 1)
    } else {
        u64::MAX >> (64 - bits)
    };
    (magnitude <= limit).then(|| sign_extend(magnitude, bits))
}

// ─── Escapes ───

/// Byte denoted by a named escape `\c`.
pub(crate) fn char_for_backslash(c: u8) -> u8 {
    match c {
        b'n' => b'\n',
        b'r' => b'\r',
        b'b' => 0x08,
        b't' => b'\t',
        other => other,
    }
}

/// Byte denoted by `\ddd`; `None` above 255.
pub(crate) fn char_for_decimal(digits: &[u8]) -> Option<u8> {
    let value = digits
        .iter()
        .fold(0u32, |acc, &d| acc * 10 + u32::from(d.wrapping_sub(b'0')));
    u8::try_from(value).ok()
}

fn hex_digit(b: u8) -> u8 {
    match b {
        b'0'..=b'9' => b - b'0',
        b'a'..=b'f' => b - b'a' + 10,
        b'A'..=b'F' => b - b'A' + 10,
        _ => 0,
    }
}

/// Byte denoted by `\xhh`.
pub(crate) fn char_for_hex(digits: &[u8]) -> u8 {
    digits.iter().fold(0u8, |acc, &d| (acc << 4) | hex_digit(d))
}

// ─── Line directives ───

/// A parsed `# line "file"` directive.
#[derive(Clone, Debug, PartialEq, Eq)]
pub(crate) struct LineDirective {
    /// Number of the line after the directive.
    pub line: u32,
    /// New logical file name, if one was given.
    pub file: Option<String>,
}

/// Parse a line directive lexeme: `#`, blanks, digits, blanks, an
/// optional `"name"`, then anything up to the newline.
///
/// Line numbers too large for `u32` saturate.
pub(crate) fn parse_line_directive(lexeme: &[u8]) -> LineDirective {
    let is_blank = |b: &u8| *b == b' ' || *b == b'\t';
    let rest = lexeme.get(1..).unwrap_or_default();
    let blanks = rest.iter().take_while(|b| is_blank(b)).count();
    let rest = &rest[blanks..];
    let digits = rest.iter().take_while(|b| b.is_ascii_digit()).count();
    let line = rest[..digits].iter().fold(0u32, |acc, &d| {
        acc.saturating_mul(10).saturating_add(u32::from(d - b'0'))
    });

    let rest = &rest[digits..];
    let blanks = rest.iter().take_while(|b| is_blank(b)).count();
    let file = match &rest[blanks..] {
        [b'"', name @ ..] => name
            .iter()
            .position(|&b| matches!(b, b'"' | b'\n' | b'\r'))
            .filter(|&end| name[end] == b'"')
            .map(|end| latin1(&name[..end])),
        _ => None,
    };
    LineDirective { line, file }
}
