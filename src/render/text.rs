//! Plain text renderer.

use crate::document::{runs, Document};

/// Characters of every line with trailing padding removed, joined by `\n`.
pub fn render(document: &Document) -> String {
    document
        .lines
        .iter()
        .map(|line| {
            runs(&line.cells[..line.occupied()])
                .map(|run| run.text())
                .collect::<String>()
        })
        .collect::<Vec<_>>()
        .join("\n")
}
