use super::*;
use pretty_assertions::assert_eq;

fn pos(line: u32, bol: usize, offset: usize) -> Position {
    Position {
        file: Arc::from("a.ml"),
        line,
        bol,
        offset,
    }
}

#[test]
fn start_of_file() {
    let p = Position::start_of("main.ml");
    assert_eq!(&*p.file, "main.ml");
    assert_eq!(p.line, 1);
    assert_eq!(p.bol, 0);
    assert_eq!(p.offset, 0);
    assert_eq!(p.column(), 0);
}

#[test]
fn column_is_offset_minus_line_start() {
    assert_eq!(pos(3, 20, 27).column(), 7);
}

#[test]
fn shifted_keeps_line() {
    let p = pos(2, 10, 12).shifted(3);
    assert_eq!(p, pos(2, 10, 15));
}

#[test]
fn span_len_and_point() {
    let span = Span::new(pos(1, 0, 4), pos(1, 0, 9));
    assert_eq!(span.len(), 5);
    assert!(!span.is_empty());
    assert_eq!(span.to_range(), 4..9);

    let point = Span::point(pos(1, 0, 4));
    assert!(point.is_empty());
}

#[test]
fn span_to_covers_both() {
    let a = Span::new(pos(1, 0, 0), pos(1, 0, 2));
    let b = Span::new(pos(2, 5, 7), pos(2, 5, 9));
    let joined = a.to(&b);
    assert_eq!(joined.start, a.start);
    assert_eq!(joined.end, b.end);
}

#[test]
fn display_single_and_multi_line() {
    let one = Span::new(pos(1, 0, 4), pos(1, 0, 9));
    assert_eq!(one.to_string(), "a.ml:1:4-9");

    let two = Span::new(pos(1, 0, 4), pos(3, 20, 22));
    assert_eq!(two.to_string(), "a.ml:1:4-3:2");
}

#[test]
fn debug_is_compact() {
    let span = Span::new(pos(1, 0, 4), pos(2, 6, 8));
    assert_eq!(format!("{span:?}"), "1:4:4..2:2:8");
}
