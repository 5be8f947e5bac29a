//! HTML renderer.
//!
//! Produces a complete document with the content in one `<pre>` block.
//! Runs with default style are bare text; every other run is a `<span>`.

use std::fmt::Write;

use html_escape::encode_text;
use tracing::debug;

use super::css::{Stylesheet, Target};
use super::{sourcemap_attributes, Metrics};
use crate::document::{runs, Document};
use crate::RenderOptions;

/// Render a laid-out document as an HTML page.
pub fn render(document: &Document, options: &RenderOptions) -> String {
    let metrics = Metrics::new(options.font_size());
    let mut sheet = Stylesheet::new(Target::Html);
    let mut lines = Vec::with_capacity(document.height());

    for (row, line) in document.lines.iter().enumerate() {
        let mut out = String::new();
        for run in runs(&line.cells[..line.occupied()]) {
            let mut classes = sheet.text_classes(&run.style);
            classes.extend(sheet.fill_class(&run.style));
            let text = run.text();

            if classes.is_empty() && !options.sourcemap {
                out.push_str(&encode_text(&text));
                continue;
            }
            out.push_str("<span");
            if !classes.is_empty() {
                let _ = write!(out, r#" class="{}""#, classes.join(" "));
            }
            if options.sourcemap {
                out.push_str(&sourcemap_attributes(row, &run));
            }
            let _ = write!(out, ">{}</span>", encode_text(&text));
        }
        lines.push(out);
    }

    let css = sheet.render(options, metrics.line_height);
    debug!(lines = lines.len(), "Rendered HTML");

    format!(
        r#"<!DOCTYPE html><html lang="en"><head><meta charset="UTF-8"><meta name="viewport" content="width=device-width, initial-scale=1.0"><style>{css}</style></head><body><pre class="ansi2">{}</pre></body></html>"#,
        lines.join("\n")
    )
}
