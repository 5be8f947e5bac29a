//! Sequence handlers that turn recognized escapes into parse events.
//!
//! Anything not handled here is kept verbatim as
//! [`ParseEvent::Unrecognized`](super::ParseEvent::Unrecognized).

pub mod cursor;
pub mod editing;
pub mod osc;
pub mod style;

use tracing::trace;

/// Trace a CSI sequence that will be passed through unrecognized.
pub fn log_unhandled_csi(action: char, params: &[u16], intermediates: &[u8]) {
    trace!(
        action = %action,
        params = ?params,
        intermediates = ?intermediates,
        "Passing through CSI sequence"
    );
}

/// Trace an ESC sequence that will be passed through unrecognized.
pub fn log_unhandled_esc(byte: u8, intermediates: &[u8]) {
    trace!(
        byte = byte,
        byte_char = %char::from(byte),
        intermediates = ?intermediates,
        "Passing through ESC sequence"
    );
}
