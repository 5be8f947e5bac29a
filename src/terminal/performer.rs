//! VTE performer implementation.
//!
//! Contains the `EventCollector` struct that implements the vte::Perform trait.
//! Dispatches recognized sequences to the handler modules and keeps every
//! other byte as `Unrecognized` so nothing in the input is lost.

use vte::{Params, Perform};

use super::handlers::{log_unhandled_csi, log_unhandled_esc};
use super::types::{CursorMove, ParseEvent, Span, Token};

/// Performer that turns VTE callbacks into spanned tokens.
///
/// The parser is fed one byte at a time; `pos` is the offset of the byte
/// being fed, so a callback always ends at `pos + 1`.
pub(crate) struct EventCollector<'a> {
    /// Bytes being tokenized
    input: &'a [u8],
    /// Offset of `input` within the caller's string
    base: usize,
    /// Offset of the byte currently inside the parser
    pub pos: usize,
    /// Start of the bytes not yet attributed to a token
    pub pending: usize,
    pub tokens: Vec<Token>,
}

impl<'a> EventCollector<'a> {
    pub fn new(input: &'a str, base: usize) -> Self {
        Self {
            input: input.as_bytes(),
            base,
            pos: 0,
            pending: 0,
            tokens: Vec::new(),
        }
    }

    fn raw(&self, start: usize, end: usize) -> String {
        String::from_utf8_lossy(&self.input[start..end]).into_owned()
    }

    fn push(&mut self, event: ParseEvent, start: usize, end: usize) {
        let span = Span::new(self.base + start, self.base + end);

        // Adjacent unrecognized bytes collapse into one token.
        if let ParseEvent::Unrecognized(raw) = &event {
            if let Some(Token {
                event: ParseEvent::Unrecognized(prev),
                span: prev_span,
            }) = self.tokens.last_mut()
            {
                if prev_span.end == span.start {
                    prev.push_str(raw);
                    prev_span.end = span.end;
                    return;
                }
            }
        }
        self.tokens.push(Token { event, span });
    }

    /// Emit an event owning every pending byte up to and including `pos`.
    pub(crate) fn emit(&mut self, event: ParseEvent) {
        let end = self.pos + 1;
        self.push(event, self.pending, end);
        self.pending = end;
    }

    /// Emit an event owning only the last `len` bytes; anything pending
    /// before them was an abandoned sequence.
    fn emit_tail(&mut self, len: usize, event: ParseEvent) {
        let end = self.pos + 1;
        let start = end.saturating_sub(len).max(self.pending);
        if self.pending < start {
            let raw = self.raw(self.pending, start);
            self.push(ParseEvent::Unrecognized(raw), self.pending, start);
        }
        self.push(event, start, end);
        self.pending = end;
    }

    /// Keep the pending bytes as an `Unrecognized` token.
    pub(crate) fn unrecognized(&mut self) {
        let end = self.pos + 1;
        let raw = self.raw(self.pending, end);
        self.emit(ParseEvent::Unrecognized(raw));
    }

    /// Pending bytes up to and including `pos`.
    pub(crate) fn pending_raw(&self) -> String {
        self.raw(self.pending, self.pos + 1)
    }

    /// Append the pending bytes to a link token that ends right where
    /// they start. Returns false when there is no such token.
    pub(crate) fn extend_link(&mut self) -> bool {
        let end = self.pos + 1;
        let start = self.base + self.pending;
        let raw = self.pending_raw();
        match self.tokens.last_mut() {
            Some(Token {
                event: ParseEvent::Link { raw: prev, .. },
                span,
            }) if span.end == start => {
                prev.push_str(&raw);
                span.end = self.base + end;
                self.pending = end;
                true
            }
            _ => false,
        }
    }

    /// Consume the pending bytes without producing a token.
    pub(crate) fn skip(&mut self) {
        self.pending = self.pos + 1;
    }
}

impl Perform for EventCollector<'_> {
    fn print(&mut self, c: char) {
        self.emit_tail(c.len_utf8(), ParseEvent::Char(c));
    }

    fn execute(&mut self, byte: u8) {
        let event = match byte {
            b'\n' | b'\x0b' | b'\x0c' => ParseEvent::LineBreak,
            b'\r' => ParseEvent::MoveCursor(CursorMove::Column(0)),
            b'\x08' => ParseEvent::MoveCursor(CursorMove::Back(1)),
            b'\t' => ParseEvent::MoveCursor(CursorMove::NextTabStop),
            _ => return self.unrecognized(),
        };
        self.emit_tail(1, event);
    }

    fn hook(&mut self, _params: &Params, _intermediates: &[u8], _ignore: bool, _action: char) {}

    fn put(&mut self, _byte: u8) {}

    fn unhook(&mut self) {
        self.unrecognized();
    }

    fn osc_dispatch(&mut self, params: &[&[u8]], _bell_terminated: bool) {
        match params {
            // Hyperlinks (handlers/osc.rs)
            [command, _, uri @ ..] if *command == b"8" => self.handle_hyperlink(uri),
            _ => self.unrecognized(),
        }
    }

    fn csi_dispatch(&mut self, params: &Params, intermediates: &[u8], ignore: bool, action: char) {
        // Private markers (?, <, >, =) land in intermediates. DEC private
        // modes have no effect on a captured stream.
        if ignore || !intermediates.is_empty() {
            let flat: Vec<u16> = params.iter().map(|p| p.first().copied().unwrap_or(0)).collect();
            log_unhandled_csi(action, &flat, intermediates);
            return self.unrecognized();
        }

        if action == 'm' {
            return self.handle_sgr(params);
        }

        let params: Vec<u16> = params
            .iter()
            .map(|p| p.first().copied().unwrap_or(0))
            .collect();

        match action {
            // Cursor movement (handlers/cursor.rs)
            'A' => self.handle_cursor_up(count(&params)),
            'B' => self.handle_cursor_down(count(&params)),
            'C' => self.handle_cursor_forward(count(&params)),
            'D' => self.handle_cursor_back(count(&params)),
            'E' => self.handle_cursor_next_line(count(&params)),
            'F' => self.handle_cursor_previous_line(count(&params)),
            'G' | '`' => self.handle_cursor_horizontal_absolute(position(&params, 0)),
            'd' => self.handle_cursor_vertical_absolute(position(&params, 0)),
            'H' | 'f' => self.handle_cursor_position(position(&params, 0), position(&params, 1)),
            's' | 'u' => self.skip(),

            // Editing (handlers/editing.rs)
            'J' => self.handle_erase_display(params.first().copied().unwrap_or(0)),
            'K' => self.handle_erase_line(params.first().copied().unwrap_or(0)),
            'X' => self.handle_erase_chars(count(&params)),

            _ => {
                log_unhandled_csi(action, &params, intermediates);
                self.unrecognized();
            }
        }
    }

    fn esc_dispatch(&mut self, intermediates: &[u8], ignore: bool, byte: u8) {
        if ignore || !intermediates.is_empty() {
            log_unhandled_esc(byte, intermediates);
            return self.unrecognized();
        }

        match byte {
            b'M' => self.handle_reverse_index(),
            b'D' => self.handle_index(),
            b'E' => self.emit(ParseEvent::LineBreak),
            b'7' | b'8' => self.skip(),
            b'\\' => self.handle_string_terminator(),
            _ => {
                log_unhandled_esc(byte, intermediates);
                self.unrecognized();
            }
        }
    }
}

/// Repeat count: missing or zero means one.
fn count(params: &[u16]) -> usize {
    params.first().copied().filter(|&n| n != 0).unwrap_or(1) as usize
}

/// One-based position parameter, returned zero-based.
fn position(params: &[u16], index: usize) -> usize {
    (params.get(index).copied().unwrap_or(1) as usize).saturating_sub(1)
}
