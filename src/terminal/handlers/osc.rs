//! Operating System Command handlers.
//!
//! Only OSC 8 (hyperlink) affects rendering; link text is underlined.

use super::super::performer::EventCollector;
use super::super::types::ParseEvent;

impl EventCollector<'_> {
    /// Handle OSC 8 ; params ; URI. A URI opens a link, an empty one
    /// closes it. A URI containing `;` arrives split across parts.
    pub fn handle_hyperlink(&mut self, uri: &[&[u8]]) {
        let open = uri.iter().any(|part| !part.is_empty());
        let raw = self.pending_raw();
        self.emit(ParseEvent::Link { open, raw });
    }

    /// Handle ESC \ (string terminator). After a link it completes that
    /// token; anywhere else it passes through.
    pub fn handle_string_terminator(&mut self) {
        if !self.extend_link() {
            self.unrecognized();
        }
    }
}
