//! Static color tables.
//!
//! Colors 0-15 come from the selected theme. Colors 16-231 are the 6x6x6
//! cube and 232-255 the grayscale ramp, shared by every theme.

use super::Rgba;

pub const VSCODE: [Rgba; 16] = [
    Rgba::rgb(0, 0, 0),
    Rgba::rgb(205, 49, 49),
    Rgba::rgb(13, 188, 121),
    Rgba::rgb(229, 229, 16),
    Rgba::rgb(36, 114, 200),
    Rgba::rgb(188, 63, 188),
    Rgba::rgb(17, 168, 205),
    Rgba::rgb(229, 229, 229),
    Rgba::rgb(102, 102, 102),
    Rgba::rgb(241, 76, 76),
    Rgba::rgb(35, 209, 139),
    Rgba::rgb(245, 245, 67),
    Rgba::rgb(59, 142, 234),
    Rgba::rgb(214, 112, 214),
    Rgba::rgb(41, 184, 219),
    Rgba::rgb(229, 229, 229),
];

pub const UBUNTU: [Rgba; 16] = [
    Rgba::rgb(1, 1, 1),
    Rgba::rgb(222, 56, 43),
    Rgba::rgb(57, 181, 74),
    Rgba::rgb(255, 199, 6),
    Rgba::rgb(0, 111, 184),
    Rgba::rgb(118, 38, 113),
    Rgba::rgb(44, 181, 233),
    Rgba::rgb(204, 204, 204),
    Rgba::rgb(128, 128, 128),
    Rgba::rgb(255, 0, 0),
    Rgba::rgb(0, 255, 0),
    Rgba::rgb(255, 255, 0),
    Rgba::rgb(0, 0, 255),
    Rgba::rgb(255, 0, 255),
    Rgba::rgb(0, 255, 255),
    Rgba::rgb(255, 255, 255),
];

pub const VGA: [Rgba; 16] = [
    Rgba::rgb(0, 0, 0),
    Rgba::rgb(170, 0, 0),
    Rgba::rgb(0, 170, 0),
    Rgba::rgb(170, 85, 0),
    Rgba::rgb(0, 0, 170),
    Rgba::rgb(170, 0, 170),
    Rgba::rgb(0, 170, 170),
    Rgba::rgb(170, 170, 170),
    Rgba::rgb(85, 85, 85),
    Rgba::rgb(255, 85, 85),
    Rgba::rgb(85, 255, 85),
    Rgba::rgb(255, 255, 85),
    Rgba::rgb(85, 85, 255),
    Rgba::rgb(255, 85, 255),
    Rgba::rgb(85, 255, 255),
    Rgba::rgb(255, 255, 255),
];

pub const XTERM: [Rgba; 16] = [
    Rgba::rgb(0, 0, 0),
    Rgba::rgb(128, 0, 0),
    Rgba::rgb(0, 128, 0),
    Rgba::rgb(128, 128, 0),
    Rgba::rgb(0, 0, 128),
    Rgba::rgb(128, 0, 128),
    Rgba::rgb(0, 128, 128),
    Rgba::rgb(192, 192, 192),
    Rgba::rgb(128, 128, 128),
    Rgba::rgb(255, 0, 0),
    Rgba::rgb(0, 255, 0),
    Rgba::rgb(255, 255, 0),
    Rgba::rgb(0, 0, 255),
    Rgba::rgb(255, 0, 255),
    Rgba::rgb(0, 255, 255),
    Rgba::rgb(255, 255, 255),
];

/// Channel levels of the 6x6x6 cube
const CUBE_LEVELS: [u8; 6] = [0, 95, 135, 175, 215, 255];

/// Color for a 256-color index, given the theme's base 16.
pub fn indexed(base: &[Rgba; 16], n: u8) -> Rgba {
    match n {
        0..=15 => base[n as usize],
        16..=231 => {
            let i = (n - 16) as usize;
            Rgba::rgb(
                CUBE_LEVELS[i / 36],
                CUBE_LEVELS[(i / 6) % 6],
                CUBE_LEVELS[i % 6],
            )
        }
        _ => {
            let gray = 8 + 10 * (n - 232);
            Rgba::rgb(gray, gray, gray)
        }
    }
}

/// Base index drawn in place of `n` on a dark background. Black and
/// white trade places and bright black becomes bright white, so those
/// colors stay readable against either default background.
pub fn dark_index(n: u8) -> u8 {
    match n {
        0 => 7,
        7 => 0,
        8 => 15,
        n => n,
    }
}
