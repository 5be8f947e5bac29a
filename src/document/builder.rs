//! Document builder.
//!
//! Walks parser events in order, keeping the cursor and the current style
//! in a local accumulator, and writes cells into a growing list of lines.

use tracing::debug;
use unicode_width::UnicodeWidthChar;

use super::{Cell, Content, Control, Document, Line, Source};
use crate::terminal::{CursorMove, EraseMode, ParseEvent, Span, Style, Token};

const TAB_WIDTH: usize = 8;

/// Furthest column a cursor motion can reach when no width is given,
/// unless the line is already longer.
pub const MAX_COLUMNS: usize = 1024;

/// Furthest row a cursor motion can reach, unless line breaks have
/// already produced more lines.
pub const MAX_ROWS: usize = 4096;

/// Build a document from parser events or tokens.
///
/// With a `width`, characters that would cross it continue on a new line
/// marked `wrapped`. Without one, lines grow unbounded and wrapping is left
/// to the layout engine.
pub fn build<I, T>(events: I, width: Option<usize>) -> Document
where
    I: IntoIterator<Item = T>,
    T: Into<Token>,
{
    let mut builder = Builder::new(width);
    for token in events {
        builder.apply(token.into());
    }
    builder.finish()
}

struct Builder {
    lines: Vec<Line>,
    width: Option<usize>,
    row: usize,
    col: usize,
    style: Style,
    /// Span of the SGR sequence that produced `style`
    style_span: Option<Span>,
    /// Inside an OSC 8 hyperlink
    link: bool,
}

impl Builder {
    fn new(width: Option<usize>) -> Self {
        Self {
            lines: vec![Line::default()],
            width,
            row: 0,
            col: 0,
            style: Style::default(),
            style_span: None,
            link: false,
        }
    }

    fn apply(&mut self, token: Token) {
        match token.event {
            ParseEvent::Char(c) => self.put_char(c, token.span),
            ParseEvent::SetStyle(changes) => {
                for change in changes {
                    self.style.apply(change);
                }
                self.style_span = Some(token.span);
            }
            ParseEvent::MoveCursor(motion) => self.move_cursor(motion),
            ParseEvent::EraseLine(mode) => self.erase_line(mode),
            ParseEvent::EraseDisplay(mode) => self.erase_display(mode),
            ParseEvent::EraseChars(n) => {
                let end = self.col.saturating_add(n);
                self.erase(self.row, self.col, end);
            }
            ParseEvent::LineBreak => {
                self.row += 1;
                self.col = 0;
                self.line_mut(self.row);
            }
            ParseEvent::Link { open, raw } => {
                self.link = open;
                self.push_control(raw);
            }
            ParseEvent::Unrecognized(raw) => self.push_control(raw),
        }
    }

    fn finish(self) -> Document {
        let width = self.lines.iter().map(|l| l.cells.len()).max().unwrap_or(0);
        debug!(lines = self.lines.len(), width, "Built document");
        Document {
            lines: self.lines,
            width,
            overflow: None,
        }
    }

    /// Get the line at `row`, creating any missing lines before it.
    fn line_mut(&mut self, row: usize) -> &mut Line {
        if row >= self.lines.len() {
            self.lines.resize_with(row + 1, Line::default);
        }
        &mut self.lines[row]
    }

    fn push_control(&mut self, raw: String) {
        let col = self.col;
        self.line_mut(self.row).controls.push(Control { col, raw });
    }

    /// Write a character at the cursor with the current style.
    fn put_char(&mut self, c: char, span: Span) {
        // Combining marks and other zero-width characters have no cell.
        let char_width = match c.width() {
            Some(0) | None => return,
            Some(w) => w,
        };

        if let Some(width) = self.width {
            if self.col > 0 && self.col + char_width > width {
                self.row += 1;
                self.col = 0;
                let line = self.line_mut(self.row);
                if line.cells.is_empty() {
                    line.wrapped = true;
                }
            }
        }

        let style = Style {
            underline: self.style.underline || self.link,
            ..self.style
        };
        let (row, col) = (self.row, self.col);
        let source = Source {
            text: span,
            style: self.style_span,
        };
        let line = self.line_mut(row);
        if line.cells.len() < col + char_width {
            line.cells.resize(col + char_width, Cell::blank());
        }
        split_wide(&mut line.cells, col);
        split_wide(&mut line.cells, col + char_width - 1);

        line.cells[col] = Cell {
            content: Content::Char(c),
            style,
            source,
        };
        if char_width == 2 {
            line.cells[col + 1] = Cell {
                content: Content::Continuation,
                style,
                source,
            };
        }
        self.col += char_width;
    }

    fn move_cursor(&mut self, motion: CursorMove) {
        match motion {
            CursorMove::Up(n) => self.row = self.row.saturating_sub(n),
            CursorMove::Down(n) => self.row = self.row.saturating_add(n),
            CursorMove::Forward(n) => self.col = self.col.saturating_add(n),
            CursorMove::Back(n) => self.col = self.col.saturating_sub(n),
            CursorMove::NextLine(n) => {
                self.row = self.row.saturating_add(n);
                self.col = 0;
            }
            CursorMove::PreviousLine(n) => {
                self.row = self.row.saturating_sub(n);
                self.col = 0;
            }
            CursorMove::Column(col) => self.col = col,
            CursorMove::Row(row) => self.row = row,
            CursorMove::Position { row, col } => {
                self.row = row;
                self.col = col;
            }
            CursorMove::NextTabStop => self.col = (self.col / TAB_WIDTH + 1) * TAB_WIDTH,
        }

        // Beyond the caps, motion reaches at most one row or column past
        // what has already been written.
        self.row = self.row.min(MAX_ROWS.max(self.lines.len()));
        let col_limit = match self.width {
            Some(width) => width,
            None => {
                let written = self.lines.get(self.row).map_or(0, |l| l.cells.len());
                MAX_COLUMNS.max(written)
            }
        };
        self.col = self.col.min(col_limit);
    }

    fn erase_line(&mut self, mode: EraseMode) {
        let (row, col) = (self.row, self.col);
        match mode {
            EraseMode::ToEnd => self.erase(row, col, usize::MAX),
            EraseMode::ToStart => self.erase(row, 0, col.saturating_add(1)),
            EraseMode::All => self.erase(row, 0, usize::MAX),
        }
    }

    fn erase_display(&mut self, mode: EraseMode) {
        let (row, col) = (self.row, self.col);
        match mode {
            EraseMode::ToEnd => {
                self.erase(row, col, usize::MAX);
                for r in row + 1..self.lines.len() {
                    self.erase(r, 0, usize::MAX);
                }
            }
            EraseMode::ToStart => {
                for r in 0..row.min(self.lines.len()) {
                    self.erase(r, 0, usize::MAX);
                }
                self.erase(row, 0, col.saturating_add(1));
            }
            EraseMode::All => {
                for r in 0..self.lines.len() {
                    self.erase(r, 0, usize::MAX);
                }
            }
        }
    }

    /// Blank existing cells in `start..end` of `row`. Never grows the line.
    fn erase(&mut self, row: usize, start: usize, end: usize) {
        let Some(line) = self.lines.get_mut(row) else {
            return;
        };
        let end = end.min(line.cells.len());
        if start >= end {
            return;
        }
        split_wide(&mut line.cells, start);
        split_wide(&mut line.cells, end - 1);
        for cell in &mut line.cells[start..end] {
            *cell = Cell::blank();
        }
    }
}

/// Before `col` is overwritten, blank the other half of a wide glyph
/// that covers it.
fn split_wide(cells: &mut [Cell], col: usize) {
    match cells.get(col).map(|c| c.content) {
        Some(Content::Continuation) if col > 0 => cells[col - 1] = Cell::blank(),
        Some(Content::Char(_)) => {
            if let Some(next) = cells.get_mut(col + 1) {
                if next.content == Content::Continuation {
                    *next = Cell::blank();
                }
            }
        }
        _ => {}
    }
}
