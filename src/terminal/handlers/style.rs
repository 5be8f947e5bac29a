//! SGR (Select Graphic Rendition) handler.
//!
//! Handles CSI m sequences for text styling:
//! - Colors (foreground and background)
//! - Attributes (bold, faint, italic, underline, blink, inverse, hidden, strike)
//! - 256-color and RGB color support, in both `;` and `:` forms

use std::slice::Iter;

use tracing::trace;
use vte::Params;

use super::super::performer::EventCollector;
use super::super::types::{Color, ParseEvent, StyleChange};

impl EventCollector<'_> {
    /// Handle SGR - CSI m.
    /// A malformed extended color invalidates the whole sequence.
    pub fn handle_sgr(&mut self, params: &Params) {
        let groups: Vec<&[u16]> = params.iter().collect();
        match sgr_changes(&groups) {
            Some(changes) => self.emit(ParseEvent::SetStyle(changes)),
            None => {
                trace!(params = ?groups, "Malformed SGR sequence");
                self.unrecognized();
            }
        }
    }
}

/// Decode SGR parameter groups into style changes, left to right.
///
/// Each group is one `;`-separated parameter with its `:` subparameters.
/// Returns `None` when an extended color is truncated or uses an unknown
/// color space.
pub(crate) fn sgr_changes(groups: &[&[u16]]) -> Option<Vec<StyleChange>> {
    if groups.is_empty() {
        return Some(vec![StyleChange::Reset]);
    }

    let mut changes = Vec::with_capacity(groups.len());
    let mut iter = groups.iter();

    while let Some(group) = iter.next() {
        let Some((&code, sub)) = group.split_first() else {
            continue;
        };
        match code {
            0 => changes.push(StyleChange::Reset),
            1 => changes.push(StyleChange::Bold(true)),
            2 => changes.push(StyleChange::Faint(true)),
            3 => changes.push(StyleChange::Italic(true)),
            // 4:0 turns underline off; other underline styles render the same
            4 => changes.push(StyleChange::Underline(sub.first() != Some(&0))),
            5 | 6 => changes.push(StyleChange::Blink(true)),
            7 => changes.push(StyleChange::Inverse(true)),
            8 => changes.push(StyleChange::Hidden(true)),
            9 => changes.push(StyleChange::Strikethrough(true)),
            21 => changes.push(StyleChange::Underline(true)),
            22 => {
                changes.push(StyleChange::Bold(false));
                changes.push(StyleChange::Faint(false));
            }
            23 => changes.push(StyleChange::Italic(false)),
            24 => changes.push(StyleChange::Underline(false)),
            25 => changes.push(StyleChange::Blink(false)),
            27 => changes.push(StyleChange::Inverse(false)),
            28 => changes.push(StyleChange::Hidden(false)),
            29 => changes.push(StyleChange::Strikethrough(false)),
            30..=37 => changes.push(StyleChange::Foreground(Color::Indexed((code - 30) as u8))),
            38 => changes.push(StyleChange::Foreground(extended_color(sub, &mut iter)?)),
            39 => changes.push(StyleChange::Foreground(Color::Default)),
            40..=47 => changes.push(StyleChange::Background(Color::Indexed((code - 40) as u8))),
            48 => changes.push(StyleChange::Background(extended_color(sub, &mut iter)?)),
            49 => changes.push(StyleChange::Background(Color::Default)),
            // Underline color: consumed so its arguments are not misread
            58 => {
                extended_color(sub, &mut iter)?;
            }
            59 => {}
            90..=97 => {
                changes.push(StyleChange::Foreground(Color::Indexed((code - 90 + 8) as u8)))
            }
            100..=107 => {
                changes.push(StyleChange::Background(Color::Indexed((code - 100 + 8) as u8)))
            }
            _ => trace!(code, "Unsupported SGR parameter"),
        }
    }

    Some(changes)
}

/// Parse an extended color (38/48/58) in either form:
/// - colon: `38:5:N`, `38:2:R:G:B`, `38:2:CS:R:G:B`
/// - semicolon: `38;5;N`, `38;2;R;G;B`
///
/// Out-of-range values give `Color::Default`.
fn extended_color(sub: &[u16], rest: &mut Iter<'_, &[u16]>) -> Option<Color> {
    if let Some((&mode, args)) = sub.split_first() {
        return match mode {
            5 => args.first().map(|&n| indexed(n)),
            2 => {
                // An optional color space id precedes the components.
                let rgb = if args.len() >= 4 { &args[1..4] } else { args };
                match rgb {
                    [r, g, b] => Some(rgb_color(*r, *g, *b)),
                    _ => None,
                }
            }
            _ => None,
        };
    }

    match next(rest)? {
        5 => next(rest).map(indexed),
        2 => {
            let r = next(rest)?;
            let g = next(rest)?;
            let b = next(rest)?;
            Some(rgb_color(r, g, b))
        }
        _ => None,
    }
}

fn next(rest: &mut Iter<'_, &[u16]>) -> Option<u16> {
    rest.next().and_then(|group| group.first().copied())
}

fn indexed(n: u16) -> Color {
    u8::try_from(n).map_or(Color::Default, Color::Indexed)
}

fn rgb_color(r: u16, g: u16, b: u16) -> Color {
    match (u8::try_from(r), u8::try_from(g), u8::try_from(b)) {
        (Ok(r), Ok(g), Ok(b)) => Color::Rgb(r, g, b),
        _ => Color::Default,
    }
}
