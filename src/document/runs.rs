//! Merged-run traversal shared by every renderer.
//!
//! A run is a maximal stretch of adjacent cells with the same style. All
//! four output formats walk lines through [`runs`], so run boundaries are
//! identical whichever format is produced.

use super::{Cell, Content};
use crate::terminal::{Span, Style};

/// A maximal stretch of same-style cells within one line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Run<'a> {
    /// Column of the first cell
    pub col: usize,
    pub style: Style,
    pub cells: &'a [Cell],
}

impl Run<'_> {
    /// Width in columns.
    pub fn width(&self) -> usize {
        self.cells.len()
    }

    /// Characters of the run; empty cells read as spaces.
    pub fn text(&self) -> String {
        self.cells.iter().filter_map(Cell::visible_char).collect()
    }

    /// True when nothing in the run would draw ink.
    pub fn is_blank(&self) -> bool {
        self.cells.iter().all(|c| match c.content {
            Content::Empty => true,
            Content::Char(ch) => ch.is_whitespace(),
            Content::Continuation => false,
        })
    }

    /// Source bytes the run's characters came from, if known.
    pub fn source(&self) -> Option<Span> {
        let mut spans = self
            .cells
            .iter()
            .filter(|c| matches!(c.content, Content::Char(_)))
            .map(|c| c.source.text)
            .filter(|s| s.end > s.start);
        let first = spans.next()?;
        let (start, end) = spans.fold((first.start, first.end), |(lo, hi), s| {
            (lo.min(s.start), hi.max(s.end))
        });
        Some(Span::new(start, end))
    }

    /// The SGR sequence that set the run's style, if any.
    pub fn style_source(&self) -> Option<Span> {
        self.cells.iter().find_map(|c| c.source.style)
    }
}

/// Iterate the maximal same-style runs of a line's cells.
pub fn runs(cells: &[Cell]) -> Runs<'_> {
    Runs { cells, col: 0 }
}

/// Iterator returned by [`runs`].
pub struct Runs<'a> {
    cells: &'a [Cell],
    col: usize,
}

impl<'a> Iterator for Runs<'a> {
    type Item = Run<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        let first = self.cells.first()?;
        let style = first.style;
        let len = self
            .cells
            .iter()
            .position(|c| c.style != style)
            .unwrap_or(self.cells.len());

        let (head, tail) = self.cells.split_at(len);
        let run = Run {
            col: self.col,
            style,
            cells: head,
        };
        self.cells = tail;
        self.col += len;
        Some(run)
    }
}
