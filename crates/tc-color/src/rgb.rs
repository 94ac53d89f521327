// SPDX-License-Identifier: MIT
//
// Floating-point sRGB for compositing and luminance.
//
// Channels stay on the 0–255 scale so a composite can be compared directly
// against the 8-bit values it came from. Alpha is straight, in [0, 1].
//
// Compositing uses Porter-Duff "source over" directly on the encoded
// channels, the same way browsers and editors paint translucent
// highlights. The result is what ends up on screen, which is the color an
// accessibility check has to judge.

// ─── Rgba ────────────────────────────────────────────────────────────────────

/// sRGB channels (0.0–255.0) with straight alpha (0.0–1.0).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rgba {
    pub r: f64,
    pub g: f64,
    pub b: f64,
    pub a: f64,
}

impl Rgba {
    /// Fully transparent black, the result of compositing two empty layers.
    pub const TRANSPARENT: Self = Self {
        r: 0.0,
        g: 0.0,
        b: 0.0,
        a: 0.0,
    };

    #[inline]
    #[must_use]
    pub const fn new(r: f64, g: f64, b: f64, a: f64) -> Self {
        Self { r, g, b, a }
    }

    /// Composite this layer (source) over `dst`.
    ///
    ///   `out_a` = `src_a` + `dst_a` * (1 - `src_a`)
    ///   out_c = (`src_c` * `src_a` + `dst_c` * `dst_a` * (1 - `src_a`)) / `out_a`
    ///
    /// When both layers are fully transparent the result is
    /// [`Rgba::TRANSPARENT`].
    #[must_use]
    pub fn over(self, dst: Self) -> Self {
        let sa = self.a;
        let da = dst.a;

        let out_a = da.mul_add(1.0 - sa, sa);
        if out_a == 0.0 {
            return Self::TRANSPARENT;
        }

        let dst_weight = da * (1.0 - sa);
        let out_r = self.r.mul_add(sa, dst.r * dst_weight) / out_a;
        let out_g = self.g.mul_add(sa, dst.g * dst_weight) / out_a;
        let out_b = self.b.mul_add(sa, dst.b * dst_weight) / out_a;

        Self::new(out_r, out_g, out_b, out_a)
    }

    /// Drop the alpha channel.
    #[inline]
    #[must_use]
    pub const fn rgb(self) -> Rgb {
        Rgb {
            r: self.r,
            g: self.g,
            b: self.b,
        }
    }
}

// ─── Rgb ─────────────────────────────────────────────────────────────────────

/// Opaque sRGB channels on the 0.0–255.0 scale.
///
/// Produced by flattening a [`Color`](crate::Color); channel values may be
/// fractional after compositing.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rgb {
    pub r: f64,
    pub g: f64,
    pub b: f64,
}

impl Rgb {
    #[inline]
    #[must_use]
    pub const fn new(r: f64, g: f64, b: f64) -> Self {
        Self { r, g, b }
    }

    /// Channels scaled to 0.0–1.0.
    #[inline]
    #[must_use]
    pub fn normalized(self) -> (f64, f64, f64) {
        (self.r / 255.0, self.g / 255.0, self.b / 255.0)
    }

    /// Round each channel to the nearest 8-bit value (halves round up).
    #[must_use]
    pub fn to_rgb8(self) -> (u8, u8, u8) {
        (round_u8(self.r), round_u8(self.g), round_u8(self.b))
    }
}

// ─── Transfer Curve ──────────────────────────────────────────────────────────

/// Convert a single sRGB component (0.0–1.0) to linear light.
///
/// Uses the WCAG 2.x breakpoint of 0.03928 rather than the IEC 61966-2-1
/// value of 0.04045. No 8-bit input falls between the two; only fractional
/// channels produced by compositing can.
#[inline]
#[must_use]
pub fn srgb_to_linear(c: f64) -> f64 {
    if c <= 0.039_28 {
        c / 12.92
    } else {
        ((c + 0.055) / 1.055).powf(2.4)
    }
}

#[inline]
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn round_u8(v: f64) -> u8 {
    // Clamp keeps the value in 0.0..=255.0 before truncation.
    (v + 0.5).floor().clamp(0.0, 255.0) as u8
}
