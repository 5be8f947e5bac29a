//! Parser data types.
//!
//! Contains the values the escape parser produces:
//! - Color: color reference (default, 256-color palette index, RGB)
//! - Style: text attributes carried by every cell
//! - StyleChange: one incremental SGR update
//! - ParseEvent / Token: the parser output stream

use std::ops::Range;

/// Color reference as written in the input stream.
///
/// Resolution to a concrete value happens in [`crate::theme`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Color {
    #[default]
    Default,
    /// 256-color palette index (0-15 are the theme's base colors)
    Indexed(u8),
    /// Truecolor value
    Rgb(u8, u8, u8),
}

impl Color {
    pub fn is_default(&self) -> bool {
        matches!(self, Color::Default)
    }
}

/// Style attributes for a cell
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Style {
    pub fg: Color,
    pub bg: Color,
    pub bold: bool,
    pub faint: bool,
    pub italic: bool,
    pub underline: bool,
    pub blink: bool,
    pub inverse: bool,
    pub hidden: bool,
    pub strikethrough: bool,
}

impl Style {
    pub fn is_default(&self) -> bool {
        *self == Style::default()
    }

    /// Fold one SGR update into this style.
    pub fn apply(&mut self, change: StyleChange) {
        match change {
            StyleChange::Reset => *self = Style::default(),
            StyleChange::Bold(on) => self.bold = on,
            StyleChange::Faint(on) => self.faint = on,
            StyleChange::Italic(on) => self.italic = on,
            StyleChange::Underline(on) => self.underline = on,
            StyleChange::Blink(on) => self.blink = on,
            StyleChange::Inverse(on) => self.inverse = on,
            StyleChange::Hidden(on) => self.hidden = on,
            StyleChange::Strikethrough(on) => self.strikethrough = on,
            StyleChange::Foreground(color) => self.fg = color,
            StyleChange::Background(color) => self.bg = color,
        }
    }

    /// Return a copy with all `changes` applied in order.
    pub fn with(mut self, changes: &[StyleChange]) -> Self {
        for change in changes {
            self.apply(*change);
        }
        self
    }
}

/// A single partial style update decoded from an SGR parameter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StyleChange {
    Reset,
    Bold(bool),
    Faint(bool),
    Italic(bool),
    Underline(bool),
    Blink(bool),
    Inverse(bool),
    Hidden(bool),
    Strikethrough(bool),
    Foreground(Color),
    Background(Color),
}

/// Cursor motion. Absolute positions are zero-based.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CursorMove {
    Up(usize),
    Down(usize),
    Forward(usize),
    Back(usize),
    /// Down n rows, to column 0 (CSI E)
    NextLine(usize),
    /// Up n rows, to column 0 (CSI F)
    PreviousLine(usize),
    Column(usize),
    Row(usize),
    Position { row: usize, col: usize },
    NextTabStop,
}

/// Extent of an erase command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EraseMode {
    /// Cursor to end (mode 0)
    ToEnd,
    /// Start to cursor, inclusive (mode 1)
    ToStart,
    /// Everything (modes 2 and 3)
    All,
}

impl EraseMode {
    pub fn from_param(mode: u16) -> Option<Self> {
        match mode {
            0 => Some(EraseMode::ToEnd),
            1 => Some(EraseMode::ToStart),
            2 | 3 => Some(EraseMode::All),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParseEvent {
    Char(char),
    SetStyle(Vec<StyleChange>),
    MoveCursor(CursorMove),
    EraseLine(EraseMode),
    EraseDisplay(EraseMode),
    /// Blank n cells from the cursor without moving it (CSI X)
    EraseChars(usize),
    LineBreak,
    /// OSC 8 hyperlink boundary: `open` unless the URI is empty. `raw`
    /// keeps the sequence bytes so they can be written back out.
    Link { open: bool, raw: String },
    /// Raw bytes of a sequence with no visual effect here
    Unrecognized(String),
}

/// Byte range into the converted input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Span {
    pub start: usize,
    pub end: usize,
}

impl Span {
    pub fn new(start: usize, end: usize) -> Self {
        Self { start, end }
    }

    pub fn range(&self) -> Range<usize> {
        self.start..self.end
    }
}

/// A parse event together with the input bytes it came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    pub event: ParseEvent,
    pub span: Span,
}

impl From<ParseEvent> for Token {
    fn from(event: ParseEvent) -> Self {
        Self {
            event,
            span: Span::default(),
        }
    }
}
