//! Plain text output tests

use ansi2::{convert, to_text, Format, Overflow, RenderOptions};

fn text(input: &str) -> String {
    to_text(input, None).unwrap()
}

#[test]
fn plain_input_is_unchanged() {
    assert_eq!(text("hello\nworld  \n"), "hello\nworld  \n");
}

#[test]
fn styles_are_stripped() {
    assert_eq!(text("\x1b[1;38;2;1;2;3mbold\x1b[0m plain"), "bold plain");
}

#[test]
fn short_lines_do_not_wrap() {
    assert_eq!(to_text("A\nB", Some(1)).unwrap(), "A\nB");
}

#[test]
fn long_lines_wrap_at_width() {
    assert_eq!(to_text("abcdefg", Some(3)).unwrap(), "abc\ndef\ng");
}

#[test]
fn wide_glyphs_are_not_split() {
    assert_eq!(to_text("日本", Some(3)).unwrap(), "日\n本");
}

#[test]
fn truncate_cuts_long_lines() {
    let options = RenderOptions {
        width: Some(3),
        overflow: Overflow::Truncate,
        ..Default::default()
    };
    assert_eq!(convert("abcdef\nxy", Format::Text, &options).unwrap(), "abc\nxy");
}

#[test]
fn carriage_return_overwrites() {
    assert_eq!(text("abc\rX"), "Xbc");
}

#[test]
fn cursor_forward_pads_with_spaces() {
    assert_eq!(text("a\x1b[3Cb"), "a   b");
}

#[test]
fn tab_moves_to_next_stop() {
    assert_eq!(text("a\tb"), "a       b");
}

#[test]
fn erase_line_clears_text() {
    assert_eq!(text("abc\x1b[2K"), "");
    assert_eq!(text("abc\x1b[2D\x1b[K"), "a");
}

#[test]
fn cursor_up_rewrites_previous_line() {
    assert_eq!(text("one\ntwo\x1b[A\rONE"), "ONE\ntwo");
}

#[test]
fn unrecognized_sequences_are_dropped() {
    assert_eq!(text("a\x1b]0;title\x07b\x1b[?25lc"), "abc");
}

#[test]
fn truncated_sequence_keeps_following_text() {
    assert_eq!(text("ok\x1b[3"), "ok[3");
}

#[test]
fn zero_width_is_rejected() {
    assert!(to_text("x", Some(0)).is_err());
}
