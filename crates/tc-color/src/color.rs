// SPDX-License-Identifier: MIT
//
// Hex color values with straight alpha.
//
// A `Color` is exactly what a palette entry says: three 8-bit channels and
// an alpha in [0, 1]. It is never clamped, rounded or gamut-mapped after
// parsing, so the checks that consume it see the same numbers the palette
// author wrote down.
//
// Accepted forms: `#RRGGBB` and `#RRGGBBAA`, with or without the leading
// `#`. Short forms (`#RGB`, `#RGBA`) are rejected rather than expanded.

use std::fmt;
use std::str::FromStr;

use thiserror::Error;

use crate::rgb::{Rgb, Rgba};

// ─── Errors ──────────────────────────────────────────────────────────────────

/// Errors produced while reading color values.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ColorError {
    /// The hex body is not 6 or 8 characters, or contains non-hex digits.
    #[error("invalid color value \"{input}\"")]
    InvalidColorFormat { input: String },
}

pub type Result<T> = std::result::Result<T, ColorError>;

// ─── Color ───────────────────────────────────────────────────────────────────

/// An sRGB color with 8-bit channels and straight (non-premultiplied) alpha.
///
/// # Examples
///
/// ```
/// use tc_color::Color;
///
/// let keyword = Color::hex("#E2A48B").unwrap();
/// assert!(keyword.is_opaque());
///
/// let selection: Color = "d4967e40".parse().unwrap();
/// assert!((selection.alpha - 64.0 / 255.0).abs() < 1e-9);
///
/// assert!(Color::hex("#fff").is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,

    /// Opacity: 0.0 (fully transparent) to 1.0 (fully opaque).
    pub alpha: f64,
}

impl Color {
    // ─── Constructors ────────────────────────────────────────────────────

    /// Create an opaque color from 8-bit channels.
    #[inline]
    #[must_use]
    pub const fn rgb8(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, alpha: 1.0 }
    }

    /// Create a color from 8-bit channels and an 8-bit alpha (`a / 255`).
    #[inline]
    #[must_use]
    pub fn rgba8(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self {
            r,
            g,
            b,
            alpha: f64::from(a) / 255.0,
        }
    }

    /// Parse a hex color string.
    ///
    /// # Errors
    ///
    /// Returns [`ColorError::InvalidColorFormat`] unless the body (after an
    /// optional `#`) is exactly 6 or 8 hex digits.
    pub fn hex(s: &str) -> Result<Self> {
        parse_hex(s).ok_or_else(|| ColorError::InvalidColorFormat {
            input: s.to_string(),
        })
    }

    /// Pure black, the default flattening background.
    pub const BLACK: Self = Self::rgb8(0, 0, 0);

    /// Pure white.
    pub const WHITE: Self = Self::rgb8(255, 255, 255);

    // ─── Alpha ───────────────────────────────────────────────────────────

    /// Whether this color is fully opaque (alpha >= 1.0).
    #[inline]
    #[must_use]
    pub fn is_opaque(self) -> bool {
        self.alpha >= 1.0
    }

    // ─── Compositing ─────────────────────────────────────────────────────

    /// Widen to floating-point channels for compositing.
    #[inline]
    #[must_use]
    pub fn to_rgba(self) -> Rgba {
        Rgba {
            r: f64::from(self.r),
            g: f64::from(self.g),
            b: f64::from(self.b),
            a: self.alpha,
        }
    }

    /// Composite this color (source) over `dst` with Porter-Duff "source over".
    #[must_use]
    pub fn blend_over(self, dst: Self) -> Rgba {
        self.to_rgba().over(dst.to_rgba())
    }

    /// Flatten to opaque RGB.
    ///
    /// Opaque colors pass through unchanged. Translucent colors are
    /// composited over `fallback` and the resulting alpha is dropped: the
    /// composite becomes the color as far as any later check is concerned.
    #[must_use]
    pub fn to_opaque_rgb(self, fallback: Self) -> Rgb {
        if self.is_opaque() {
            return self.to_rgba().rgb();
        }
        self.blend_over(fallback).rgb()
    }

    /// Flatten over pure black.
    #[inline]
    #[must_use]
    pub fn flatten(self) -> Rgb {
        self.to_opaque_rgb(Self::BLACK)
    }

    // ─── Formatting ──────────────────────────────────────────────────────

    /// Convert to hex string (`#rrggbb`, or `#rrggbbaa` if alpha < 1.0).
    #[must_use]
    pub fn to_hex(self) -> String {
        let Self { r, g, b, alpha } = self;
        if self.is_opaque() {
            format!("#{r:02x}{g:02x}{b:02x}")
        } else {
            let a = alpha_to_u8(alpha);
            format!("#{r:02x}{g:02x}{b:02x}{a:02x}")
        }
    }
}

impl FromStr for Color {
    type Err = ColorError;

    fn from_str(s: &str) -> Result<Self> {
        Self::hex(s)
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}

impl Default for Color {
    /// Default is fully opaque black.
    fn default() -> Self {
        Self::BLACK
    }
}

// ─── Hex Parsing ─────────────────────────────────────────────────────────────

/// Parse a hex color string into a Color.
fn parse_hex(s: &str) -> Option<Color> {
    let s = s.strip_prefix('#').unwrap_or(s);
    let bytes = s.as_bytes();

    match bytes.len() {
        // #RRGGBB
        6 => {
            let r = parse_hex_byte(&bytes[0..2])?;
            let g = parse_hex_byte(&bytes[2..4])?;
            let b = parse_hex_byte(&bytes[4..6])?;
            Some(Color::rgb8(r, g, b))
        }
        // #RRGGBBAA
        8 => {
            let r = parse_hex_byte(&bytes[0..2])?;
            let g = parse_hex_byte(&bytes[2..4])?;
            let b = parse_hex_byte(&bytes[4..6])?;
            let a = parse_hex_byte(&bytes[6..8])?;
            Some(Color::rgba8(r, g, b, a))
        }
        _ => None,
    }
}

#[inline]
const fn parse_hex_digit(c: u8) -> Option<u8> {
    match c {
        b'0'..=b'9' => Some(c - b'0'),
        b'a'..=b'f' => Some(c - b'a' + 10),
        b'A'..=b'F' => Some(c - b'A' + 10),
        _ => None,
    }
}

#[inline]
fn parse_hex_byte(bytes: &[u8]) -> Option<u8> {
    let hi = parse_hex_digit(bytes[0])?;
    let lo = parse_hex_digit(bytes[1])?;
    Some(hi << 4 | lo)
}

/// Convert an alpha (0.0–1.0) to a u8 (0–255) with correct rounding.
#[inline]
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn alpha_to_u8(v: f64) -> u8 {
    // Clamp keeps the value in 0.0..=255.0 before truncation.
    v.mul_add(255.0, 0.5).clamp(0.0, 255.0) as u8
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn approx_eq(a: f64, b: f64, epsilon: f64) -> bool {
        (a - b).abs() < epsilon
    }

    // ── Hex Parsing ──────────────────────────────────────────────────────

    #[test]
    fn hex_parsing_rrggbb() {
        let color = Color::hex("#ff8000").unwrap();
        assert_eq!(color, Color::rgb8(255, 128, 0));
        assert!(color.is_opaque());
    }

    #[test]
    fn hex_parsing_uppercase() {
        let color = Color::hex("#E2A48B").unwrap();
        assert_eq!(color, Color::rgb8(0xe2, 0xa4, 0x8b));
    }

    #[test]
    fn hex_parsing_with_alpha() {
        let color = Color::hex("#ff000080").unwrap();
        assert_eq!((color.r, color.g, color.b), (255, 0, 0));
        assert!(approx_eq(color.alpha, 128.0 / 255.0, 1e-12));
        assert!(!color.is_opaque());
    }

    #[test]
    fn hex_parsing_full_alpha_byte_is_opaque() {
        let color = Color::hex("#123456ff").unwrap();
        assert!(color.is_opaque());
        assert_eq!(color, Color::hex("#123456").unwrap());
    }

    #[test]
    fn hex_parsing_no_hash() {
        assert_eq!(Color::hex("ff0000").unwrap(), Color::hex("#ff0000").unwrap());
    }

    #[test]
    fn hex_parsing_rejects_short_forms() {
        assert_eq!(
            Color::hex("#fff"),
            Err(ColorError::InvalidColorFormat {
                input: "#fff".to_string()
            })
        );
        assert!(Color::hex("#ffff").is_err());
    }

    #[test]
    fn hex_parsing_invalid() {
        assert!(Color::hex("").is_err());
        assert!(Color::hex("#").is_err());
        assert!(Color::hex("#12345").is_err());
        assert!(Color::hex("#1234567").is_err());
        assert!(Color::hex("#123456789").is_err());
        assert!(Color::hex("#gg0000").is_err());
        assert!(Color::hex("##ff0000").is_err());
        // Six bytes, but not six hex digits.
        assert!(Color::hex("#ééé").is_err());
    }

    #[test]
    fn hex_error_message_names_input() {
        let err = Color::hex("#12").unwrap_err();
        assert_eq!(err.to_string(), "invalid color value \"#12\"");
    }

    #[test]
    fn from_str_matches_hex() {
        let parsed: Color = "#c86432".parse().unwrap();
        assert_eq!(parsed, Color::rgb8(0xc8, 0x64, 0x32));
    }

    #[test]
    fn hex_roundtrip() {
        assert_eq!(Color::hex("#c86432").unwrap().to_hex(), "#c86432");
        assert_eq!(Color::hex("#D4967E40").unwrap().to_hex(), "#d4967e40");
    }

    // ── Flattening ───────────────────────────────────────────────────────

    #[test]
    fn flatten_opaque_is_identity() {
        let color = Color::rgb8(20, 200, 99);
        let rgb = color.to_opaque_rgb(Color::WHITE);
        assert_eq!(rgb, Rgb::new(20.0, 200.0, 99.0));
        assert_eq!(color.flatten(), rgb);
    }

    #[test]
    fn flatten_translucent_over_black() {
        // 0x80 / 255 of white over black.
        let rgb = Color::rgba8(255, 255, 255, 0x80).flatten();
        assert!(approx_eq(rgb.r, 128.0, 1e-9));
        assert!(approx_eq(rgb.g, 128.0, 1e-9));
        assert!(approx_eq(rgb.b, 128.0, 1e-9));
    }

    #[test]
    fn flatten_translucent_over_fallback() {
        // 0x40 / 255 of black over white leaves 191/255 of white.
        let rgb = Color::rgba8(0, 0, 0, 0x40).to_opaque_rgb(Color::WHITE);
        assert!(approx_eq(rgb.r, 191.0, 1e-9));
    }

    #[test]
    fn flatten_fully_transparent_shows_fallback() {
        let rgb = Color::rgba8(255, 0, 0, 0).to_opaque_rgb(Color::rgb8(10, 20, 30));
        assert_eq!(rgb, Rgb::new(10.0, 20.0, 30.0));
    }

    #[test]
    fn default_is_black() {
        assert_eq!(Color::default(), Color::BLACK);
        assert_eq!(Color::BLACK.to_string(), "#000000");
    }
}
