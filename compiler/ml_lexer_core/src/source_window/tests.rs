use super::*;
use pretty_assertions::assert_eq;

#[test]
fn push_appends_and_tracks_end() {
    let mut w = SourceWindow::new();
    assert!(w.push(b"let "));
    assert!(w.push(b"x"));
    assert_eq!(w.base(), 0);
    assert_eq!(w.end(), 5);
    assert_eq!(w.slice(0, 5), b"let x");
    assert!(!w.is_complete());
}

#[test]
fn close_rejects_later_chunks() {
    let mut w = SourceWindow::new();
    w.push(b"a");
    w.close();
    assert!(w.is_complete());
    assert!(!w.push(b"b"));
    assert_eq!(w.end(), 1);
}

#[test]
fn release_keeps_absolute_offsets() {
    let mut w = SourceWindow::new();
    w.push(b"abcdef");
    w.release_before(4);
    assert_eq!(w.base(), 4);
    assert_eq!(w.end(), 6);
    assert_eq!(w.slice(4, 6), b"ef");

    w.push(b"gh");
    assert_eq!(w.slice(5, 8), b"fgh");
}

#[test]
fn release_is_clamped() {
    let mut w = SourceWindow::new();
    w.push(b"ab");
    w.release_before(1);
    w.release_before(0);
    assert_eq!(w.base(), 1);
    w.release_before(10);
    assert_eq!(w.base(), 2);
    assert_eq!(w.end(), 2);
}

#[test]
fn cursor_is_relative_to_offset() {
    let mut w = SourceWindow::new();
    w.push(b"xyz");
    w.release_before(1);
    let mut c = w.cursor_at(1);
    assert_eq!(c.current(), Some(b'y'));
    assert_eq!(c.peek_at(1), Some(b'z'));
    assert_eq!(c.peek_at(2), None);
    assert!(c.is_starved());
}

#[test]
fn complete_window_never_starves() {
    let w = SourceWindow::complete(b"q");
    let mut c = w.cursor_at(0);
    assert_eq!(c.peek_at(5), None);
    assert!(!c.is_starved());
}
