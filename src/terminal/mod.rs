//! Escape sequence parser.
//!
//! Splits captured terminal output into printable characters and the
//! control sequences the document builder understands. The byte-level
//! state machine is `vte`; this module maps its dispatches onto
//! [`ParseEvent`]s and records which input bytes produced each one.
//!
//! Parsing never fails. Sequences with no meaning for a static rendering
//! come out as [`ParseEvent::Unrecognized`] carrying their raw bytes, so
//! the ANS renderer can write them back unchanged.

mod handlers;
mod performer;
mod types;

#[cfg(test)]
mod tests;

pub use types::{Color, CursorMove, EraseMode, ParseEvent, Span, Style, StyleChange, Token};

use tracing::debug;
use vte::Parser;

use performer::EventCollector;

/// Tokenize `input` into events with their source byte ranges.
pub fn tokenize(input: &str) -> Vec<Token> {
    let mut tokens = Vec::new();
    let mut offset = collect(input, 0, &mut tokens);

    // The input ended inside a sequence. Every ESC in the unfinished tail
    // resets the parser, so each one is kept as an unrecognized byte and
    // the text between them is parsed on its own.
    if offset < input.len() {
        debug!(offset, "Truncated escape sequence at end of input");
    }
    while offset < input.len() {
        let Some(tail) = input.get(offset..) else {
            break;
        };
        let lead = tail.chars().next().map_or(1, char::len_utf8);
        let start = offset + lead;
        let raw = String::from_utf8_lossy(&input.as_bytes()[offset..start]);
        push_unrecognized(&mut tokens, &raw, Span::new(offset, start));

        let end = input
            .get(start..)
            .and_then(|rest| rest.find('\x1b'))
            .map_or(input.len(), |i| start + i);
        if let Some(text) = input.get(start..end) {
            collect(text, start, &mut tokens);
        }
        offset = end;
    }

    tokens
}

/// Run one parser over `input`, appending its tokens. Returns the offset
/// (absolute) of the first byte no token accounts for.
fn collect(input: &str, base: usize, tokens: &mut Vec<Token>) -> usize {
    let mut parser: Parser = Parser::new();
    let mut collector = EventCollector::new(input, base);

    for (pos, byte) in input.bytes().enumerate() {
        collector.pos = pos;
        parser.advance(&mut collector, &[byte]);
    }

    let pending = base + collector.pending;
    for token in collector.tokens {
        match token.event {
            ParseEvent::Unrecognized(raw) => push_unrecognized(tokens, &raw, token.span),
            event => tokens.push(Token {
                event,
                span: token.span,
            }),
        }
    }
    pending
}

/// Parse `input` into events, dropping source positions.
pub fn parse(input: &str) -> Vec<ParseEvent> {
    tokenize(input).into_iter().map(|t| t.event).collect()
}

fn push_unrecognized(tokens: &mut Vec<Token>, raw: &str, span: Span) {
    if let Some(Token {
        event: ParseEvent::Unrecognized(prev),
        span: prev_span,
    }) = tokens.last_mut()
    {
        if prev_span.end == span.start {
            prev.push_str(raw);
            prev_span.end = span.end;
            return;
        }
    }
    tokens.push(Token {
        event: ParseEvent::Unrecognized(raw.to_string()),
        span,
    });
}
