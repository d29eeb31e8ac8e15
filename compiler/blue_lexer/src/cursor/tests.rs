use super::Cursor;

#[test]
fn starts_at_line_one_column_one() {
    let cursor = Cursor::new("ab");
    assert_eq!(cursor.current(), Some('a'));
    assert_eq!(cursor.peek(), Some('b'));
    assert_eq!((cursor.line(), cursor.column()), (1, 1));
}

#[test]
fn newline_resets_column() {
    let mut cursor = Cursor::new("a\nb");
    cursor.bump();
    assert_eq!((cursor.line(), cursor.column()), (1, 2));
    cursor.bump();
    assert_eq!((cursor.line(), cursor.column()), (2, 1));
    assert_eq!(cursor.current(), Some('b'));
}

#[test]
fn multibyte_chars_count_once_for_columns() {
    let mut cursor = Cursor::new("éx");
    cursor.bump();
    assert_eq!(cursor.pos(), 2);
    assert_eq!(cursor.char_pos(), 1);
    assert_eq!(cursor.column(), 2);
    assert_eq!(cursor.current(), Some('x'));
}

#[test]
fn eat_while_stops_at_predicate_failure() {
    let mut cursor = Cursor::new("123abc");
    cursor.eat_while(|c| c.is_ascii_digit());
    assert_eq!(cursor.slice_from(0), "123");
    assert_eq!(cursor.current(), Some('a'));
}

#[test]
fn bump_at_end_is_none() {
    let mut cursor = Cursor::new("");
    assert_eq!(cursor.current(), None);
    assert_eq!(cursor.peek(), None);
    assert_eq!(cursor.bump(), None);
    assert_eq!(cursor.pos(), 0);
}
