//! Font argument resolution.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use base64::prelude::BASE64_STANDARD;
use base64::Engine;
use tracing::debug;

/// Turn a `--font` value into something the renderers can use.
///
/// URLs and `data:` URIs pass through unchanged. A path to an existing
/// file is embedded as a base64 `data:` URI. Anything else is taken as a
/// font family name.
pub fn resolve(font: &str) -> Result<String> {
    if is_url(font) {
        return Ok(font.to_string());
    }

    let path = Path::new(font);
    if !path.is_file() {
        return Ok(font.to_string());
    }

    let bytes = fs::read(path).with_context(|| format!("Failed to read font file: {:?}", path))?;
    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .map(str::to_ascii_lowercase)
        .unwrap_or_else(|| "ttf".to_string());
    debug!(path = %path.display(), bytes = bytes.len(), "Embedding font");
    Ok(format!(
        "data:font/{};base64,{}",
        ext,
        BASE64_STANDARD.encode(bytes)
    ))
}

fn is_url(font: &str) -> bool {
    font.starts_with("http://") || font.starts_with("https://") || font.starts_with("data:")
}
