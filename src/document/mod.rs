//! Styled cell document.
//!
//! A [`Document`] is the grid the builder produces from parser events:
//! lines of [`Cell`]s, each carrying a character and a [`Style`]. The
//! layout engine fits it to a target width and every renderer reads the
//! result through the shared [`runs`] iterator.

pub mod builder;
pub mod layout;
pub mod runs;

pub use builder::{build, MAX_COLUMNS, MAX_ROWS};
pub use layout::{layout, layout_with};
pub use runs::{runs, Run};

use serde::{Deserialize, Serialize};

use crate::terminal::{Span, Style};

/// What a cell holds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Content {
    /// Nothing was written here (padding or erased)
    #[default]
    Empty,
    Char(char),
    /// Right half of the double-width glyph to the left
    Continuation,
}

/// Input bytes a cell was produced from.
#[derive(Debug, Clone, Copy, Default)]
pub struct Source {
    /// The character itself
    pub text: Span,
    /// The SGR sequence that set the cell's style, if any
    pub style: Option<Span>,
}

/// A single cell in a line
#[derive(Debug, Clone, Copy, Default)]
pub struct Cell {
    pub content: Content,
    pub style: Style,
    pub source: Source,
}

impl Cell {
    pub fn new(content: Content, style: Style) -> Self {
        Self {
            content,
            style,
            source: Source::default(),
        }
    }

    /// A default-style empty cell.
    pub fn blank() -> Self {
        Self::default()
    }

    pub fn is_blank(&self) -> bool {
        self.content == Content::Empty && self.style.is_default()
    }

    /// Character shown in this column, `None` for continuation cells.
    pub fn visible_char(&self) -> Option<char> {
        match self.content {
            Content::Empty => Some(' '),
            Content::Char(c) => Some(c),
            Content::Continuation => None,
        }
    }
}

// Source positions are metadata; two cells that look the same are equal.
impl PartialEq for Cell {
    fn eq(&self, other: &Self) -> bool {
        self.content == other.content && self.style == other.style
    }
}

impl Eq for Cell {}

/// Raw bytes of an unrecognized sequence, anchored before a column.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Control {
    pub col: usize,
    pub raw: String,
}

/// One row of cells.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Line {
    pub cells: Vec<Cell>,
    /// Continues the previous line after a wrap
    pub wrapped: bool,
    pub controls: Vec<Control>,
}

impl Line {
    /// Columns up to and including the last non-blank cell.
    pub fn occupied(&self) -> usize {
        self.cells
            .iter()
            .rposition(|c| !c.is_blank())
            .map_or(0, |i| i + 1)
    }
}

/// How the layout engine treats lines longer than the target width.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum Overflow {
    /// Continue on a new line
    #[default]
    Wrap,
    /// Cut at the width
    Truncate,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Document {
    pub lines: Vec<Line>,
    /// Width in columns
    pub width: usize,
    /// Set once the layout engine has run
    pub overflow: Option<Overflow>,
}

impl Document {
    pub fn height(&self) -> usize {
        self.lines.len()
    }

    pub fn is_laid_out(&self) -> bool {
        self.overflow.is_some()
    }
}
