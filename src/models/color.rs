//! RGB color handling with hex parsing and terminal conversion.

// Allow small types passed by reference for API consistency
#![allow(clippy::trivially_copy_pass_by_ref)]
// Allow intentional type casts for color math
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_sign_loss)]
#![allow(clippy::cast_lossless)]

use anyhow::{Context, Result};
use std::fmt;

/// RGB color value with hex string representation.
///
/// Represents a color using red, green, and blue channels (0-255 each).
/// Used for background, border and shadow modifier parameters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct RgbColor {
    /// Red channel (0-255)
    pub r: u8,
    /// Green channel (0-255)
    pub g: u8,
    /// Blue channel (0-255)
    pub b: u8,
}

impl RgbColor {
    /// Default background fill.
    pub const YELLOW: Self = Self::new(255, 235, 59);
    /// Default border stroke.
    pub const BLUE: Self = Self::new(33, 150, 243);
    /// Accent used by the Pink square template.
    pub const PINK: Self = Self::new(244, 143, 177);
    /// Deep magenta used by the Pink square template border.
    pub const MAGENTA: Self = Self::new(194, 24, 91);
    /// Warm core of the Sun template.
    pub const AMBER: Self = Self::new(255, 193, 7);
    /// Rainbow band colors, outermost first.
    pub const RAINBOW: [Self; 5] = [
        Self::new(244, 67, 54),
        Self::new(255, 152, 0),
        Self::new(255, 235, 59),
        Self::new(76, 175, 80),
        Self::new(33, 150, 243),
    ];
    /// Neutral card surface.
    pub const WHITE: Self = Self::new(255, 255, 255);
    /// Muted outline for card surfaces.
    pub const GRAY: Self = Self::new(158, 158, 158);

    /// Creates a new `RgbColor` from individual channel values.
    #[must_use]
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Parses an `RgbColor` from a hex string.
    ///
    /// Supports formats: "#RRGGBB", "RRGGBB", "#rrggbb", "rrggbb"
    ///
    /// # Errors
    ///
    /// Returns an error if the string is not a valid hex color format.
    pub fn from_hex(hex: &str) -> Result<Self> {
        let hex = hex.trim();
        let hex = hex.strip_prefix('#').unwrap_or(hex);

        if hex.len() != 6 {
            anyhow::bail!("Invalid hex color format '{hex}'. Expected 6 hex digits (RRGGBB)");
        }

        let r = u8::from_str_radix(&hex[0..2], 16)
            .context(format!("Invalid red channel in hex color '{hex}'"))?;
        let g = u8::from_str_radix(&hex[2..4], 16)
            .context(format!("Invalid green channel in hex color '{hex}'"))?;
        let b = u8::from_str_radix(&hex[4..6], 16)
            .context(format!("Invalid blue channel in hex color '{hex}'"))?;

        Ok(Self::new(r, g, b))
    }

    /// Converts the color to a hex string in the format "#RRGGBB" (uppercase).
    #[must_use]
    pub fn to_hex(&self) -> String {
        format!("#{:02X}{:02X}{:02X}", self.r, self.g, self.b)
    }

    /// Converts the color to a Ratatui Color for terminal rendering.
    #[must_use]
    pub const fn to_ratatui_color(&self) -> ratatui::style::Color {
        ratatui::style::Color::Rgb(self.r, self.g, self.b)
    }

    /// Returns a dimmed version of the color at the given percentage (0-100).
    ///
    /// Used to render disabled modifier entries at reduced intensity.
    #[must_use]
    pub fn dimmed(&self, percent: u8) -> Self {
        let percent = percent.min(100) as u16;
        Self::new(
            ((self.r as u16 * percent) / 100) as u8,
            ((self.g as u16 * percent) / 100) as u8,
            ((self.b as u16 * percent) / 100) as u8,
        )
    }
}

impl fmt::Display for RgbColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_hex())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_hex_with_hash() {
        let color = RgbColor::from_hex("#FF0000").unwrap();
        assert_eq!(color, RgbColor::new(255, 0, 0));
    }

    #[test]
    fn test_from_hex_without_hash() {
        let color = RgbColor::from_hex("00ff00").unwrap();
        assert_eq!(color, RgbColor::new(0, 255, 0));
    }

    #[test]
    fn test_from_hex_invalid_length() {
        assert!(RgbColor::from_hex("#FFF").is_err());
        assert!(RgbColor::from_hex("").is_err());
    }

    #[test]
    fn test_from_hex_invalid_digits() {
        assert!(RgbColor::from_hex("#GGHHII").is_err());
    }

    #[test]
    fn test_to_hex_round_trip() {
        let color = RgbColor::new(0, 128, 255);
        assert_eq!(color.to_hex(), "#0080FF");
        assert_eq!(RgbColor::from_hex(&color.to_hex()).unwrap(), color);
    }

    #[test]
    fn test_dimmed() {
        let color = RgbColor::new(200, 100, 50);
        assert_eq!(color.dimmed(50), RgbColor::new(100, 50, 25));
        // Over 100 percent clamps rather than brightening
        assert_eq!(color.dimmed(200), color);
    }
}
