//! Theme resolution.
//!
//! Maps the color references stored in a [`Style`] to concrete colors
//! for a theme and light/dark mode. Everything here is pure; the palette
//! tables are constants.

mod color;
pub mod palette;

pub use color::Rgba;

use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::terminal::{Color, Style};

/// Named color palette for indices 0-15.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Vscode,
    Ubuntu,
    Vga,
    Xterm,
}

impl Theme {
    /// The theme's base 16 colors.
    pub fn base(&self) -> &'static [Rgba; 16] {
        match self {
            Theme::Vscode => &palette::VSCODE,
            Theme::Ubuntu => &palette::UBUNTU,
            Theme::Vga => &palette::VGA,
            Theme::Xterm => &palette::XTERM,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum Mode {
    Dark,
    Light,
}

impl Mode {
    pub const ALL: [Mode; 2] = [Mode::Light, Mode::Dark];
}

/// Default background in dark mode
pub const DARK_BACKGROUND: Rgba = Rgba::rgb(32, 32, 32);
/// Default background in light mode (transparent white)
pub const LIGHT_BACKGROUND: Rgba = Rgba::rgba(255, 255, 255, 0);

/// Colors of one theme in one mode, with background overrides applied.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    base: &'static [Rgba; 16],
    mode: Mode,
    foreground: Rgba,
    background: Rgba,
}

impl Palette {
    /// Build a palette. `light_bg` and `dark_bg` replace the default
    /// background of their own mode; invalid hex is ignored with a warning.
    pub fn new(theme: Theme, mode: Mode, light_bg: Option<&str>, dark_bg: Option<&str>) -> Self {
        let base = theme.base();
        let (foreground, background, bg_override) = match mode {
            Mode::Light => (base[0], LIGHT_BACKGROUND, light_bg),
            Mode::Dark => (base[7], DARK_BACKGROUND, dark_bg),
        };
        let background = bg_override
            .and_then(|hex| {
                let parsed = Rgba::from_hex(hex);
                if parsed.is_none() {
                    warn!(color = hex, ?mode, "Invalid background color, using theme default");
                }
                parsed
            })
            .unwrap_or(background);

        Self {
            base,
            mode,
            foreground,
            background,
        }
    }

    pub fn foreground(&self) -> Rgba {
        self.foreground
    }

    pub fn background(&self) -> Rgba {
        self.background
    }

    /// Concrete value of an explicit color; `None` for `Color::Default`.
    ///
    /// In dark mode the black and white entries of the base 16 are
    /// swapped (see [`palette::dark_index`]).
    pub fn color(&self, color: Color) -> Option<Rgba> {
        match color {
            Color::Default => None,
            Color::Indexed(n) => {
                let n = match self.mode {
                    Mode::Dark => palette::dark_index(n),
                    Mode::Light => n,
                };
                Some(palette::indexed(self.base, n))
            }
            Color::Rgb(r, g, b) => Some(Rgba::rgb(r, g, b)),
        }
    }

    /// Resolve a style to its (foreground, background) pair.
    pub fn resolve(&self, style: &Style) -> (Rgba, Rgba) {
        let fg = self.color(style.fg).unwrap_or(self.foreground);
        let bg = self.color(style.bg).unwrap_or(self.background);
        if style.inverse {
            (bg, fg)
        } else {
            (fg, bg)
        }
    }
}

/// Resolve a style against a theme and mode.
pub fn resolve(
    style: &Style,
    theme: Theme,
    mode: Mode,
    light_bg: Option<&str>,
    dark_bg: Option<&str>,
) -> (Rgba, Rgba) {
    Palette::new(theme, mode, light_bg, dark_bg).resolve(style)
}
