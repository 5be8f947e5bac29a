//! Erase operation handlers.
//!
//! Handles CSI sequences for editing:
//! - J: Erase in Display
//! - K: Erase in Line
//! - X: Erase Characters

use super::super::performer::EventCollector;
use super::super::types::{EraseMode, ParseEvent};

impl EventCollector<'_> {
    /// Handle Erase in Display (CSI J).
    /// Mode 0: Erase from cursor to end of document
    /// Mode 1: Erase from start of document to cursor
    /// Mode 2/3: Erase everything
    pub fn handle_erase_display(&mut self, mode: u16) {
        match EraseMode::from_param(mode) {
            Some(mode) => self.emit(ParseEvent::EraseDisplay(mode)),
            None => self.unrecognized(),
        }
    }

    /// Handle Erase in Line (CSI K).
    /// Mode 0: Erase from cursor to end of line
    /// Mode 1: Erase from start of line to cursor
    /// Mode 2: Erase entire line
    pub fn handle_erase_line(&mut self, mode: u16) {
        match EraseMode::from_param(mode) {
            Some(mode) => self.emit(ParseEvent::EraseLine(mode)),
            None => self.unrecognized(),
        }
    }

    /// Handle Erase Characters (CSI X).
    /// Blanks n cells starting at the cursor, without moving it.
    pub fn handle_erase_chars(&mut self, n: usize) {
        self.emit(ParseEvent::EraseChars(n));
    }
}
