use super::*;

#[test]
fn point_covers_nothing() {
    let span = Span::point(9);
    assert_eq!(span.to_range(), 9..9);
    assert_eq!(Span::point(0), Span::DUMMY);
    assert_eq!(Span::default(), Span::DUMMY);
}

#[test]
fn from_range_round_trips() {
    let span = Span::from_range(3..8);
    assert_eq!((span.start, span.end), (3, 8));
    assert_eq!(span.to_range(), 3..8);
    assert_eq!(&"let x = 1"[Span::from_range(4..5).to_range()], "x");
}

#[test]
fn debug_is_a_range() {
    assert_eq!(format!("{:?}", Span::from_range(1..2)), "1..2");
}
