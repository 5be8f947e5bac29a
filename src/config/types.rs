//! Configuration type definitions and defaults

use serde::{Deserialize, Serialize};

use crate::document::Overflow;
use crate::options::{Format, LengthAdjust, RenderOptions};
use crate::theme::{Mode, Theme};

/// Main configuration structure
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub render: RenderConfig,
}

/// Defaults for the conversion flags.
///
/// Every field mirrors a command-line option of the same name. A flag given
/// on the command line always wins over the value stored here.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RenderConfig {
    pub format: Format,
    pub theme: Theme,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mode: Option<Mode>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub width: Option<usize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub font: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub font_size: Option<usize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub light_bg: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dark_bg: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub length_adjust: Option<LengthAdjust>,
    pub compress: bool,
    pub sourcemap: bool,
    pub overflow: Overflow,
}

impl RenderConfig {
    /// Render options described by this configuration alone.
    pub fn to_options(&self) -> RenderOptions {
        RenderOptions {
            theme: self.theme,
            width: self.width,
            font: self.font.clone(),
            mode: self.mode,
            light_bg: self.light_bg.clone(),
            dark_bg: self.dark_bg.clone(),
            font_size: self.font_size,
            length_adjust: self.length_adjust,
            compress: self.compress,
            sourcemap: self.sourcemap,
            overflow: self.overflow,
        }
    }
}
