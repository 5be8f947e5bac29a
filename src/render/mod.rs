//! Renderers.
//!
//! Each renderer reads a laid-out [`Document`](crate::document::Document)
//! through the shared run iterator and returns the output as a string.

pub mod ans;
mod css;
pub mod html;
pub mod svg;
pub mod text;

use std::fmt::Write;

use crate::document::Run;

/// `data-*` attributes locating a run in the input, with a leading space.
pub(crate) fn sourcemap_attributes(row: usize, run: &Run<'_>) -> String {
    let mut attrs = format!(r#" data-line="{row}" data-col="{}""#, run.col);
    if let Some(span) = run.source() {
        let _ = write!(attrs, r#" data-src="{}:{}""#, span.start, span.end);
    }
    if let Some(span) = run.style_source() {
        let _ = write!(attrs, r#" data-style="{}:{}""#, span.start, span.end);
    }
    attrs
}

/// Pixel metrics for a font size.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct Metrics {
    pub font_size: usize,
    /// Horizontal advance per column
    pub advance: usize,
    pub line_height: usize,
}

impl Metrics {
    pub fn new(font_size: usize) -> Self {
        Self {
            font_size,
            advance: font_size * 5 / 8,
            line_height: font_size + font_size / 8,
        }
    }
}
