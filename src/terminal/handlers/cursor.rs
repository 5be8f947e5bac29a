//! Cursor movement and positioning handlers.
//!
//! Handles CSI sequences for cursor control:
//! - A: Cursor Up
//! - B: Cursor Down
//! - C: Cursor Forward
//! - D: Cursor Back
//! - E/F: Cursor Next/Previous Line
//! - H/f: Cursor Position
//! - G: Cursor Horizontal Absolute
//! - d: Cursor Vertical Absolute
//! - ESC M: Reverse Index
//! - ESC D: Index

use super::super::performer::EventCollector;
use super::super::types::{CursorMove, ParseEvent};

impl EventCollector<'_> {
    fn emit_move(&mut self, motion: CursorMove) {
        self.emit(ParseEvent::MoveCursor(motion));
    }

    /// Move cursor up by n rows (CSI A).
    pub fn handle_cursor_up(&mut self, n: usize) {
        self.emit_move(CursorMove::Up(n));
    }

    /// Move cursor down by n rows (CSI B).
    pub fn handle_cursor_down(&mut self, n: usize) {
        self.emit_move(CursorMove::Down(n));
    }

    /// Move cursor forward by n columns (CSI C).
    pub fn handle_cursor_forward(&mut self, n: usize) {
        self.emit_move(CursorMove::Forward(n));
    }

    /// Move cursor back by n columns (CSI D).
    pub fn handle_cursor_back(&mut self, n: usize) {
        self.emit_move(CursorMove::Back(n));
    }

    /// Move to column 0, n rows down (CSI E).
    pub fn handle_cursor_next_line(&mut self, n: usize) {
        self.emit_move(CursorMove::NextLine(n));
    }

    /// Move to column 0, n rows up (CSI F).
    pub fn handle_cursor_previous_line(&mut self, n: usize) {
        self.emit_move(CursorMove::PreviousLine(n));
    }

    /// Set cursor position to row, col (CSI H / CSI f), zero-based.
    pub fn handle_cursor_position(&mut self, row: usize, col: usize) {
        self.emit_move(CursorMove::Position { row, col });
    }

    /// Set cursor column (CSI G), zero-based.
    pub fn handle_cursor_horizontal_absolute(&mut self, col: usize) {
        self.emit_move(CursorMove::Column(col));
    }

    /// Set cursor row (CSI d), zero-based.
    pub fn handle_cursor_vertical_absolute(&mut self, row: usize) {
        self.emit_move(CursorMove::Row(row));
    }

    /// Reverse index (ESC M). There is no screen to scroll, so this is a
    /// plain move up.
    pub fn handle_reverse_index(&mut self) {
        self.emit_move(CursorMove::Up(1));
    }

    /// Index (ESC D).
    pub fn handle_index(&mut self) {
        self.emit_move(CursorMove::Down(1));
    }
}
