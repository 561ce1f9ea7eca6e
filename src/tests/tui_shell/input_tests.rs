use super::*;

#[test]
fn typing_and_backspace() {
    let mut input = Input::default();
    for c in "pika".chars() {
        input.insert_char(c);
    }
    assert_eq!(input.buf, "pika");
    assert_eq!(input.cursor, 4);

    input.backspace();
    assert_eq!(input.buf, "pik");
    input.clear();
    assert_eq!(input.buf, "");
    assert_eq!(input.cursor, 0);
    input.backspace();
    assert_eq!(input.cursor, 0);
}

#[test]
fn cursor_counts_characters_not_bytes() {
    let mut input = Input::default();
    input.set("salamèche");
    assert_eq!(input.cursor, 9);

    for _ in 0..3 {
        input.move_left();
    }
    input.backspace();
    assert_eq!(input.buf, "salamche");
    input.insert_char('é');
    assert_eq!(input.buf, "salaméche");
    input.delete();
    assert_eq!(input.buf, "salaméhe");
    assert_eq!(input.cursor, 6);
}

#[test]
fn movement_is_clamped() {
    let mut input = Input::default();
    input.set("ab");
    input.move_right();
    assert_eq!(input.cursor, 2);
    input.delete();
    assert_eq!(input.buf, "ab");
    input.move_left();
    input.move_left();
    input.move_left();
    assert_eq!(input.cursor, 0);
    input.insert_char('x');
    assert_eq!(input.buf, "xab");
}
