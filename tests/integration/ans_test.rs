//! ANS output tests

use ansi2::to_ans;

fn ans(input: &str) -> String {
    to_ans(input, None, false).unwrap()
}

fn compressed(input: &str) -> String {
    to_ans(input, None, true).unwrap()
}

#[test]
fn plain_input_is_unchanged() {
    let input = "no escapes here\n  indented  \n";
    assert_eq!(ans(input), input);
    assert_eq!(compressed(input), input);
}

#[test]
fn single_style_round_trips() {
    assert_eq!(ans("\x1b[31mHi\x1b[0m"), "\x1b[31mHi\x1b[0m");
}

#[test]
fn missing_final_reset_is_added() {
    assert_eq!(ans("\x1b[4mopen"), "\x1b[4mopen\x1b[0m");
}

#[test]
fn redundant_sequences_are_dropped() {
    assert_eq!(
        ans("\x1b[31m\x1b[31mX\x1b[1m\x1b[22mY\x1b[0m\x1b[0m"),
        "\x1b[31mXY\x1b[0m"
    );
}

#[test]
fn uncompressed_changes_reset_first() {
    assert_eq!(
        ans("\x1b[1mA\x1b[31mB\x1b[0m"),
        "\x1b[1mA\x1b[0;1;31mB\x1b[0m"
    );
}

#[test]
fn compressed_changes_use_difference() {
    assert_eq!(
        compressed("\x1b[1mA\x1b[31mB\x1b[0m"),
        "\x1b[1mA\x1b[31mB\x1b[0m"
    );
}

#[test]
fn extended_colors_use_shortest_form() {
    assert_eq!(
        ans("\x1b[38;5;1mr\x1b[38:5:196mR\x1b[48;2;1;2;3mb\x1b[0m"),
        "\x1b[31mr\x1b[0;38;5;196mR\x1b[0;38;5;196;48;2;1;2;3mb\x1b[0m"
    );
}

#[test]
fn style_carries_across_lines() {
    assert_eq!(ans("\x1b[32ma\nb\x1b[0m"), "\x1b[32ma\nb\x1b[0m");
}

#[test]
fn unrecognized_sequences_are_kept_in_place() {
    let input = "a\x1b]0;title\x07b\x1b[?25lc";
    assert_eq!(ans(input), input);
}

#[test]
fn wraps_at_width() {
    assert_eq!(to_ans("abcdef", Some(3), false).unwrap(), "abc\ndef");
}

#[test]
fn cursor_movement_is_flattened() {
    assert_eq!(ans("ab\x1b[1Dc"), "ac");
}

#[test]
fn hyperlinks_are_written_back() {
    let open = "\x1b]8;;http://example.com\x1b\\";
    let close = "\x1b]8;;\x1b\\";
    let out = ans(&format!("go {open}link{close}!"));
    assert_eq!(
        out,
        format!("go \x1b[4m{open}link\x1b[0m{close}!")
    );
    assert_eq!(ansi2::to_text(&out, None).unwrap(), "go link!");
}
