//! Hue angles and circular hue distance.
//!
//! Used to keep ANSI colors that sit near each other on the wheel (magenta
//! and cyan in cool-leaning palettes) from collapsing into one color.
//! Hue here is the HSL hue of the sRGB channels, not a perceptual hue: it
//! only has to tell two palette entries apart, not predict appearance.

use tc_color::{Color, Rgb};

/// HSL hue of an opaque color, in degrees [0, 360).
///
/// Achromatic colors (gray, black, white) have no hue; they report 0.
#[must_use]
pub fn hue_of(rgb: Rgb) -> f64 {
    let (r, g, b) = rgb.normalized();
    let max = r.max(g).max(b);
    let min = r.min(g).min(b);
    let delta = max - min;

    if delta == 0.0 {
        return 0.0;
    }

    // Six-sector hue: which channel dominates picks the 120° third.
    let sector = if max == r {
        ((g - b) / delta) % 6.0
    } else if max == g {
        (b - r) / delta + 2.0
    } else {
        (r - g) / delta + 4.0
    };

    let degrees = sector * 60.0;
    if degrees < 0.0 { degrees + 360.0 } else { degrees }
}

/// Hue of a color, flattened over black if translucent.
#[must_use]
pub fn hue(color: Color) -> f64 {
    hue_of(color.flatten())
}

/// Shortest arc between two hue angles, in [0, 180].
#[inline]
#[must_use]
pub fn angle_distance(a: f64, b: f64) -> f64 {
    let d = (a - b).abs();
    d.min(360.0 - d)
}

/// Circular hue distance between two colors, in degrees [0, 180].
#[must_use]
pub fn hue_distance(a: Color, b: Color) -> f64 {
    angle_distance(hue(a), hue(b))
}
