//! SVG renderer.
//!
//! One `<text>` per run that draws ink and one `<rect>` per run with a
//! non-default background, positioned on a fixed monospace grid.

use std::fmt::Write;

use html_escape::{encode_double_quoted_attribute, encode_text};
use tracing::debug;

use super::css::{Stylesheet, Target};
use super::{sourcemap_attributes, Metrics};
use crate::document::{runs, Document};
use crate::RenderOptions;

/// Render a laid-out document as a standalone SVG image.
pub fn render(document: &Document, options: &RenderOptions) -> String {
    let metrics = Metrics::new(options.font_size());
    // Baseline sits 7/8 of the font size below the top of the glyph box,
    // with the box centered in the line.
    let baseline = (metrics.line_height - metrics.font_size) / 2 + metrics.font_size * 7 / 8;

    let mut sheet = Stylesheet::new(Target::Svg);
    let background = sheet.background_class();
    let mut body = String::new();
    let mut texts = 0;

    for (row, line) in document.lines.iter().enumerate() {
        let top = row * metrics.line_height;
        for run in runs(&line.cells) {
            let x = run.col * metrics.advance;
            let width = run.width() * metrics.advance;

            if let Some(class) = sheet.fill_class(&run.style) {
                let _ = write!(
                    body,
                    r#"<rect x="{x}" y="{top}" width="{width}" height="{}" class="{class}"/>"#,
                    metrics.line_height
                );
            }

            let decorated = run.style.underline || run.style.strikethrough;
            if run.is_blank() && !decorated {
                continue;
            }

            let _ = write!(
                body,
                r#"<text x="{x}" y="{}" textLength="{width}""#,
                top + baseline
            );
            if let Some(adjust) = options.length_adjust {
                let _ = write!(body, r#" lengthAdjust="{}""#, adjust.as_str());
            }
            let classes = sheet.text_classes(&run.style);
            if !classes.is_empty() {
                let _ = write!(body, r#" class="{}""#, classes.join(" "));
            }
            if options.sourcemap {
                body.push_str(&sourcemap_attributes(row, &run));
            }
            let _ = write!(body, ">{}</text>", encode_text(&run.text()));
            texts += 1;
        }
    }

    let width = document.width * metrics.advance;
    let height = document.height() * metrics.line_height;
    let css = sheet.render(options, metrics.line_height);
    let css = encode_double_quoted_attribute(&css);
    debug!(width, height, texts, "Rendered SVG");

    format!(
        r#"<svg xmlns="http://www.w3.org/2000/svg" width="{width}" height="{height}" viewBox="0 0 {width} {height}" xml:space="preserve" class="ansi2"><style>{css}</style><rect width="100%" height="100%" class="{background}"/>{body}</svg>"#
    )
}
