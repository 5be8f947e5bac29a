//! Layout engine.
//!
//! Fits a document to a fixed column width: long lines are hard-wrapped
//! (or truncated) and every line is padded with blank cells to exactly
//! the target width.

use tracing::debug;

use super::{Cell, Content, Control, Document, Line, Overflow};

/// Lay out `document`, wrapping lines longer than `width`.
///
/// Without a width the document's longest line sets it.
pub fn layout(document: &Document, width: Option<usize>) -> Document {
    layout_with(document, width, Overflow::Wrap)
}

/// Lay out `document` with an explicit overflow policy.
pub fn layout_with(document: &Document, width: Option<usize>, overflow: Overflow) -> Document {
    let target = width.unwrap_or_else(|| {
        document
            .lines
            .iter()
            .map(Line::occupied)
            .max()
            .unwrap_or(0)
    });

    let mut lines = Vec::with_capacity(document.lines.len());
    for line in &document.lines {
        let mut pieces = split(line, target);
        if overflow == Overflow::Truncate && pieces.len() > 1 {
            pieces.truncate(1);
            // Controls past the cut stay at the end of the kept part.
            pieces[0].controls = line
                .controls
                .iter()
                .map(|c| Control {
                    col: c.col.min(target),
                    raw: c.raw.clone(),
                })
                .collect();
        }
        for mut piece in pieces {
            if piece.cells.len() < target {
                piece.cells.resize(target, Cell::blank());
            }
            lines.push(piece);
        }
    }

    debug!(
        width = target,
        lines = lines.len(),
        ?overflow,
        "Laid out document"
    );

    Document {
        lines,
        width: target,
        overflow: Some(overflow),
    }
}

/// Split the occupied part of `line` into pieces of at most `width`
/// columns. A double-width glyph never straddles a boundary; if not even
/// one fits, it gets a piece of its own.
fn split(line: &Line, width: usize) -> Vec<Line> {
    let occupied = line.occupied();
    let cells = &line.cells[..occupied];

    let mut bounds = Vec::new();
    let mut start = 0;
    while start < occupied {
        let mut end = (start + width).min(occupied);
        if end < occupied && cells[end].content == Content::Continuation {
            end -= 1;
        }
        if end <= start {
            end = (start + 2).min(occupied);
        }
        bounds.push((start, end));
        start = end;
    }
    if bounds.is_empty() {
        bounds.push((0, 0));
    }

    let last = bounds.len() - 1;
    let mut pieces: Vec<Line> = bounds
        .iter()
        .enumerate()
        .map(|(i, &(start, end))| Line {
            cells: cells[start..end].to_vec(),
            wrapped: if i == 0 { line.wrapped } else { true },
            controls: Vec::new(),
        })
        .collect();

    for control in &line.controls {
        let index = bounds
            .iter()
            .position(|&(start, end)| control.col >= start && control.col < end)
            .unwrap_or(last);
        let (start, end) = bounds[index];
        pieces[index].controls.push(Control {
            col: control.col.saturating_sub(start).min(width.max(end - start)),
            raw: control.raw.clone(),
        });
    }

    pieces
}
