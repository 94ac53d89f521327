// SPDX-License-Identifier: MIT
//
// tc-color: color values for the terracotta theme validator.
//
// Palettes arrive as hex strings. This crate turns them into exact 8-bit
// sRGB values with a straight alpha channel, and provides the two
// operations every downstream check is built on: Porter-Duff "source
// over" compositing and the sRGB transfer curve.
//
// Everything here works in gamma-encoded sRGB on the 0–255 scale, the same
// space the hex strings live in. Nothing is converted to a perceptual
// space: accessibility checks are defined in sRGB, so that is where the
// math stays.

pub mod color;
pub mod rgb;

pub use color::{Color, ColorError, Result};
pub use rgb::{Rgb, Rgba, srgb_to_linear};
