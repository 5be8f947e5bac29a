//! Error types for conversion.

use thiserror::Error;

/// Errors returned for invalid option combinations.
///
/// Malformed input never produces an error; only options that cannot
/// describe a rendering are rejected, before any parsing happens.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConvertError {
    #[error("Invalid width {0}: must be at least one column")]
    InvalidWidth(usize),

    #[error("Invalid font size {0}: must be at least one pixel")]
    InvalidFontSize(usize),
}
