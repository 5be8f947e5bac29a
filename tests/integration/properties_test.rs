//! Property tests over arbitrary escape-laden input

use ansi2::document::{layout_with, runs, Document};
use ansi2::terminal::Style;
use ansi2::{prepare, to_ans, to_text, Overflow};
use proptest::prelude::*;
use unicode_width::UnicodeWidthStr;

/// Text mixed with SGR, cursor and stray escape bytes.
fn noisy_input() -> impl Strategy<Value = String> {
    prop::collection::vec(
        prop_oneof![
            "[a-zA-Z0-9 ]{1,8}",
            Just("\n".to_string()),
            Just("\r".to_string()),
            Just("\t".to_string()),
            "\x1b\\[[0-9;]{0,8}m",
            "\x1b\\[[0-9]{0,2}[ABCDGKJ]",
            Just("\x1b".to_string()),
            Just("日本".to_string()),
        ],
        0..24,
    )
    .prop_map(|parts| parts.concat())
}

/// Text mixed with SGR sequences only.
fn styled_input() -> impl Strategy<Value = String> {
    prop::collection::vec(
        prop_oneof![
            "[a-z ]{1,6}",
            Just("\n".to_string()),
            "\x1b\\[(0|1|2|3|4|7|9|22|31|42|39|49|38;5;[0-9]{1,3}|48;2;[0-9]{1,3};[0-9]{1,3};[0-9]{1,3})m",
        ],
        0..16,
    )
    .prop_map(|parts| parts.concat())
}

/// What each occupied cell shows, line by line.
fn visible_cells(doc: &Document) -> Vec<Vec<(Option<char>, Style)>> {
    doc.lines
        .iter()
        .map(|line| {
            line.cells[..line.occupied()]
                .iter()
                .map(|cell| (cell.visible_char(), cell.style))
                .collect()
        })
        .collect()
}

proptest! {
    #[test]
    fn text_output_has_no_escapes(input in noisy_input()) {
        let text = to_text(&input, None).unwrap();
        prop_assert!(!text.contains('\x1b'));
    }

    #[test]
    fn wrapped_lines_fit_width(input in noisy_input(), width in 2usize..20) {
        let text = to_text(&input, Some(width)).unwrap();
        for line in text.split('\n') {
            prop_assert!(line.width() <= width, "{:?} wider than {}", line, width);
        }
    }

    #[test]
    fn plain_text_survives_ans(input in "[a-zA-Z0-9 .,]{0,30}(\n[a-zA-Z0-9 .,]{0,30}){0,4}") {
        prop_assert_eq!(to_ans(&input, None, false).unwrap(), input.clone());
        prop_assert_eq!(to_ans(&input, None, true).unwrap(), input);
    }

    #[test]
    fn ans_output_keeps_visible_text(input in styled_input(), compress in any::<bool>()) {
        let ans = to_ans(&input, None, compress).unwrap();
        prop_assert_eq!(to_text(&ans, None).unwrap(), to_text(&input, None).unwrap());
    }

    #[test]
    fn ans_output_keeps_every_cell_style(input in styled_input(), compress in any::<bool>()) {
        let ans = to_ans(&input, None, compress).unwrap();
        let original = prepare(&input, None, Overflow::Wrap).unwrap();
        let rebuilt = prepare(&ans, None, Overflow::Wrap).unwrap();
        prop_assert_eq!(visible_cells(&rebuilt), visible_cells(&original));
    }

    #[test]
    fn ans_output_is_stable(input in styled_input(), compress in any::<bool>()) {
        let once = to_ans(&input, None, compress).unwrap();
        let twice = to_ans(&once, None, compress).unwrap();
        prop_assert_eq!(once, twice);
    }

    #[test]
    fn plain_text_survives_text(input in "[ -~]{0,30}(\n[ -~]{0,30}){0,4}") {
        prop_assert_eq!(to_text(&input, None).unwrap(), input);
    }

    #[test]
    fn adjacent_runs_differ_in_style(input in styled_input()) {
        let doc = prepare(&input, None, Overflow::Wrap).unwrap();
        for line in &doc.lines {
            let styles: Vec<_> = runs(&line.cells).map(|r| r.style).collect();
            for pair in styles.windows(2) {
                prop_assert_ne!(pair[0], pair[1]);
            }
        }
    }

    #[test]
    fn layout_is_idempotent(input in noisy_input(), width in 1usize..16) {
        let doc = prepare(&input, Some(width), Overflow::Wrap).unwrap();
        prop_assert_eq!(layout_with(&doc, Some(width), Overflow::Wrap), doc);
    }
}
