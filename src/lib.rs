//! ansi2 Library
//!
//! Converts text containing ANSI escape sequences into SVG, HTML, plain
//! text or a normalized ANSI stream.
//!
//! The pipeline is the same for every format: the input is tokenized by
//! [`terminal::tokenize`], folded into a cell grid by [`document::build`],
//! fitted to a width by [`document::layout_with`] and handed to one of the
//! renderers in [`render`].
//!
//! ```
//! use ansi2::RenderOptions;
//!
//! let text = ansi2::to_text("\x1b[31mHi\x1b[0m", None).unwrap();
//! assert_eq!(text, "Hi");
//!
//! let svg = ansi2::to_svg("\x1b[31mHi\x1b[0m", &RenderOptions::default()).unwrap();
//! assert!(svg.starts_with("<svg"));
//! ```

pub mod cli;
pub mod config;
pub mod document;
pub mod error;
pub mod font;
pub mod options;
pub mod render;
pub mod terminal;
pub mod theme;

pub use config::Config;
pub use document::{Document, Overflow};
pub use error::ConvertError;
pub use options::{Format, LengthAdjust, RenderOptions, DEFAULT_FONT_SIZE};
pub use theme::{Mode, Theme};

use tracing::debug;

use options::validate_width;

/// Parse, build and lay out `input` at `width`.
///
/// Wrapping happens while building so that cursor movement sees the
/// wrapped rows. Truncation needs the unwrapped lines and is left to the
/// layout pass.
pub fn prepare(
    input: &str,
    width: Option<usize>,
    overflow: Overflow,
) -> Result<Document, ConvertError> {
    validate_width(width)?;
    let tokens = terminal::tokenize(input);
    debug!(tokens = tokens.len(), bytes = input.len(), "Tokenized input");

    let build_width = match overflow {
        Overflow::Wrap => width,
        Overflow::Truncate => None,
    };
    let built = document::build(tokens, build_width);
    Ok(document::layout_with(&built, width, overflow))
}

/// Render `input` as a standalone SVG image.
pub fn to_svg(input: &str, options: &RenderOptions) -> Result<String, ConvertError> {
    options.validate()?;
    let doc = prepare(input, options.width, options.overflow)?;
    Ok(render::svg::render(&doc, options))
}

/// Render `input` as a standalone HTML page.
pub fn to_html(input: &str, options: &RenderOptions) -> Result<String, ConvertError> {
    options.validate()?;
    let doc = prepare(input, options.width, options.overflow)?;
    Ok(render::html::render(&doc, options))
}

/// Strip all styling and return the visible text.
pub fn to_text(input: &str, width: Option<usize>) -> Result<String, ConvertError> {
    let doc = prepare(input, width, Overflow::Wrap)?;
    Ok(render::text::render(&doc))
}

/// Normalize `input` into a minimal ANSI stream.
pub fn to_ans(input: &str, width: Option<usize>, compress: bool) -> Result<String, ConvertError> {
    let doc = prepare(input, width, Overflow::Wrap)?;
    Ok(render::ans::render(&doc, compress))
}

/// Render `input` in `format`.
///
/// Options that do not apply to the format are ignored.
pub fn convert(input: &str, format: Format, options: &RenderOptions) -> Result<String, ConvertError> {
    options.validate()?;
    let doc = prepare(input, options.width, options.overflow)?;
    let output = match format {
        Format::Svg => render::svg::render(&doc, options),
        Format::Html => render::html::render(&doc, options),
        Format::Text => render::text::render(&doc),
        Format::Ans => render::ans::render(&doc, options.compress),
    };
    debug!(?format, lines = doc.height(), width = doc.width, "Converted");
    Ok(output)
}
