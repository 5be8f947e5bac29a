//! Conversion options.

use serde::{Deserialize, Serialize};

use crate::document::Overflow;
use crate::error::ConvertError;
use crate::theme::{Mode, Theme};

/// Font size used when none is given, in pixels
pub const DEFAULT_FONT_SIZE: usize = 16;

/// Output representation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum Format {
    #[default]
    Svg,
    Html,
    Text,
    Ans,
}

/// How an SVG `<text>` element is fitted to its `textLength`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
pub enum LengthAdjust {
    #[serde(rename = "spacing")]
    #[value(name = "spacing")]
    Spacing,
    #[serde(rename = "spacingAndGlyphs")]
    #[value(name = "spacingAndGlyphs")]
    SpacingAndGlyphs,
}

impl LengthAdjust {
    pub fn as_str(&self) -> &'static str {
        match self {
            LengthAdjust::Spacing => "spacing",
            LengthAdjust::SpacingAndGlyphs => "spacingAndGlyphs",
        }
    }
}

/// Options shared by the renderers.
///
/// `font` must already be resolved: a family name, an http(s) URL or a
/// `data:` URI. Reading local font files is the caller's job.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RenderOptions {
    pub theme: Theme,
    /// Target width in columns
    pub width: Option<usize>,
    pub font: Option<String>,
    /// Fixed color scheme; `None` follows `prefers-color-scheme`
    pub mode: Option<Mode>,
    /// Hex background for light mode
    pub light_bg: Option<String>,
    /// Hex background for dark mode
    pub dark_bg: Option<String>,
    pub font_size: Option<usize>,
    pub length_adjust: Option<LengthAdjust>,
    /// ANS output only
    pub compress: bool,
    pub sourcemap: bool,
    pub overflow: Overflow,
}

impl RenderOptions {
    /// Reject option values that indicate caller misuse.
    pub fn validate(&self) -> Result<(), ConvertError> {
        validate_width(self.width)?;
        if self.font_size == Some(0) {
            return Err(ConvertError::InvalidFontSize(0));
        }
        Ok(())
    }

    pub fn font_size(&self) -> usize {
        self.font_size.unwrap_or(DEFAULT_FONT_SIZE)
    }
}

pub(crate) fn validate_width(width: Option<usize>) -> Result<(), ConvertError> {
    match width {
        Some(0) => Err(ConvertError::InvalidWidth(0)),
        _ => Ok(()),
    }
}
