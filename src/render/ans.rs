//! ANS renderer.
//!
//! Writes the document back out as text with SGR sequences. Only style
//! transitions between runs produce escape codes, so plain input comes
//! back unchanged. Unrecognized sequences kept by the builder are written
//! back at their columns.

use tracing::debug;

use crate::document::{runs, Document};
use crate::terminal::{Color, Style};

const RESET: &str = "\x1b[0m";

/// Render a laid-out document as an ANSI stream.
///
/// Without `compress` every style change is written as a reset followed by
/// the full new style. With `compress` the shorter of that and the
/// attribute-by-attribute difference is used.
pub fn render(document: &Document, compress: bool) -> String {
    let mut out = String::new();
    let mut current = Style::default();
    let mut transitions = 0;

    for (row, line) in document.lines.iter().enumerate() {
        if row > 0 {
            out.push('\n');
        }

        let mut controls: Vec<_> = line.controls.iter().collect();
        controls.sort_by_key(|c| c.col);
        let mut controls = controls.into_iter().peekable();

        for run in runs(&line.cells[..line.occupied()]) {
            if let Some(sgr) = transition(&current, &run.style, compress) {
                out.push_str(&sgr);
                current = run.style;
                transitions += 1;
            }
            for (i, cell) in run.cells.iter().enumerate() {
                while let Some(control) = controls.next_if(|c| c.col <= run.col + i) {
                    out.push_str(&control.raw);
                }
                if let Some(c) = cell.visible_char() {
                    out.push(c);
                }
            }
        }
        for control in controls {
            out.push_str(&control.raw);
        }
    }

    if !current.is_default() {
        out.push_str(RESET);
    }
    debug!(transitions, compress, "Rendered ANS");
    out
}

/// SGR sequence moving from `from` to `to`, `None` when they match.
fn transition(from: &Style, to: &Style, compress: bool) -> Option<String> {
    if from == to {
        return None;
    }
    if to.is_default() {
        return Some(RESET.to_string());
    }

    let mut full = if from.is_default() {
        Vec::new()
    } else {
        vec!["0".to_string()]
    };
    full.extend(full_codes(to));

    let codes = if compress {
        let diff = diff_codes(from, to);
        if diff.join(";").len() <= full.join(";").len() {
            diff
        } else {
            full
        }
    } else {
        full
    };
    Some(format!("\x1b[{}m", codes.join(";")))
}

/// Codes that build `style` from the default style.
fn full_codes(style: &Style) -> Vec<String> {
    let flags = [
        (style.bold, "1"),
        (style.faint, "2"),
        (style.italic, "3"),
        (style.underline, "4"),
        (style.blink, "5"),
        (style.inverse, "7"),
        (style.hidden, "8"),
        (style.strikethrough, "9"),
    ];
    let mut codes: Vec<String> = flags
        .iter()
        .filter(|(on, _)| *on)
        .map(|(_, code)| code.to_string())
        .collect();
    codes.extend(color_code(style.fg, true));
    codes.extend(color_code(style.bg, false));
    codes
}

/// Codes that turn `from` into `to` without a reset.
fn diff_codes(from: &Style, to: &Style) -> Vec<String> {
    let mut codes = Vec::new();

    // 22 clears both intensities, so a single one cannot be turned off alone.
    let intensity_off = (from.bold && !to.bold) || (from.faint && !to.faint);
    if intensity_off {
        codes.push("22".to_string());
    }
    if to.bold && (intensity_off || !from.bold) {
        codes.push("1".to_string());
    }
    if to.faint && (intensity_off || !from.faint) {
        codes.push("2".to_string());
    }

    let toggles = [
        (from.italic, to.italic, "3", "23"),
        (from.underline, to.underline, "4", "24"),
        (from.blink, to.blink, "5", "25"),
        (from.inverse, to.inverse, "7", "27"),
        (from.hidden, to.hidden, "8", "28"),
        (from.strikethrough, to.strikethrough, "9", "29"),
    ];
    for (was, is, on, off) in toggles {
        if was != is {
            codes.push(if is { on } else { off }.to_string());
        }
    }

    if from.fg != to.fg {
        codes.push(color_code(to.fg, true).unwrap_or_else(|| "39".to_string()));
    }
    if from.bg != to.bg {
        codes.push(color_code(to.bg, false).unwrap_or_else(|| "49".to_string()));
    }
    codes
}

/// Shortest code selecting `color`; `None` for the default color.
fn color_code(color: Color, foreground: bool) -> Option<String> {
    let (base, bright, extended) = if foreground {
        (30, 90, 38)
    } else {
        (40, 100, 48)
    };
    match color {
        Color::Default => None,
        Color::Indexed(n @ 0..=7) => Some((base + n as u16).to_string()),
        Color::Indexed(n @ 8..=15) => Some((bright + n as u16 - 8).to_string()),
        Color::Indexed(n) => Some(format!("{extended};5;{n}")),
        Color::Rgb(r, g, b) => Some(format!("{extended};2;{r};{g};{b}")),
    }
}
