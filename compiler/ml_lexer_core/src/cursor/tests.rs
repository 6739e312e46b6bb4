use super::*;
use pretty_assertions::assert_eq;
use proptest::prelude::*;

// === Basic Navigation ===

#[test]
fn current_and_advance() {
    let mut c = Cursor::new(b"abc", true);
    assert_eq!(c.current(), Some(b'a'));
    c.advance();
    assert_eq!(c.current(), Some(b'b'));
    c.advance_n(2);
    assert_eq!(c.current(), None);
    assert_eq!(c.pos(), 3);
}

#[test]
fn peek_does_not_move() {
    let mut c = Cursor::new(b"ab", true);
    assert_eq!(c.peek(), Some(b'b'));
    assert_eq!(c.pos(), 0);
}

// === Starvation ===

#[test]
fn reading_past_open_buffer_starves() {
    let mut c = Cursor::new(b"ab", false);
    assert_eq!(c.peek_at(1), Some(b'b'));
    assert!(!c.is_starved());
    assert_eq!(c.peek_at(2), None);
    assert!(c.is_starved());
}

#[test]
fn reading_past_complete_buffer_is_eof() {
    let mut c = Cursor::new(b"ab", true);
    assert_eq!(c.peek_at(2), None);
    assert!(!c.is_starved());
    c.advance_n(2);
    assert!(c.is_eof());
}

#[test]
fn is_eof_starves_on_open_buffer() {
    let mut c = Cursor::new(b"", false);
    assert!(!c.is_eof());
    assert!(c.is_starved());
}

#[test]
fn absorb_carries_probe_starvation() {
    let mut c = Cursor::new(b"a", false);
    let mut probe = c;
    probe.peek_at(3);
    assert!(!c.is_starved());
    c.absorb(&probe);
    assert!(c.is_starved());
}

#[test]
fn eat_while_at_buffer_end_starves() {
    let mut c = Cursor::new(b"abc", false);
    assert_eq!(c.eat_while(|b| b.is_ascii_lowercase()), 3);
    assert!(c.is_starved());

    let mut done = Cursor::new(b"abc", true);
    assert_eq!(done.eat_while(|b| b.is_ascii_lowercase()), 3);
    assert!(!done.is_starved());
}

// === Newlines ===

#[test]
fn newline_len_accepts_carriage_returns() {
    let mut c = Cursor::new(b"x\r\r\ny", true);
    assert_eq!(c.newline_len(1), Some(3));
    assert_eq!(c.newline_len(0), None);
}

#[test]
fn lone_carriage_return_is_not_a_newline() {
    let mut c = Cursor::new(b"\rx", true);
    assert_eq!(c.newline_len(0), None);
}

// === Plain runs ===

#[test]
fn plain_runs_never_starve() {
    let mut c = Cursor::new(b"hello", false);
    assert_eq!(c.eat_plain_until(|b| b == b'*'), 5);
    assert!(!c.is_starved());
}

#[test]
fn skip_to_string_delim_stops_at_each_delimiter() {
    for (src, expected) in [
        (&b"ab\"c"[..], 2),
        (&b"ab\\c"[..], 2),
        (&b"ab\nc"[..], 2),
        (&b"ab\rc"[..], 2),
        (&b"abc"[..], 3),
    ] {
        let mut c = Cursor::new(src, false);
        assert_eq!(c.skip_to_string_delim(), expected);
        assert!(!c.is_starved());
    }
}

#[test]
fn skip_to3_finds_earliest() {
    let mut c = Cursor::new(b"xx|yy\n", true);
    assert_eq!(c.skip_to3(b'|', b'\r', b'\n'), 2);
    c.advance();
    assert_eq!(c.skip_to3(b'|', b'\r', b'\n'), 2);
    assert_eq!(c.current(), Some(b'\n'));
}

proptest! {
    #[test]
    fn memchr_skip_matches_scalar(bytes in proptest::collection::vec(any::<u8>(), 0..128)) {
        let mut fast = Cursor::new(&bytes, true);
        let mut slow = Cursor::new(&bytes, true);
        prop_assert_eq!(
            fast.skip_to_string_delim(),
            slow.eat_plain_until(|b| matches!(b, b'"' | b'\\' | b'\n' | b'\r'))
        );
    }
}
