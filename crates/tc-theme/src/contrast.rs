//! WCAG contrast ratio measurement.
//!
//! Two questions get asked of a theme:
//!
//! - Is text readable on its background? Normal text wants >= 4.5:1
//!   (WCAG AA), primary text >= 7:1 (AAA).
//! - Is a translucent highlight (selection, find match) visible at all on
//!   the surface it is painted over? That bar is far lower, around
//!   1.05–1.2:1, because the highlight only has to be noticeable.
//!
//! Both are answered in sRGB relative luminance, the space WCAG defines
//! them in. Translucent colors are flattened to what the screen actually
//! shows before any luminance is taken.

use tc_color::{Color, Rgb, srgb_to_linear};

/// Compute the relative luminance of an opaque color per WCAG 2.x.
///
/// Uses the standard sRGB linearization + weighted sum formula:
///   L = 0.2126 * `R_lin` + 0.7152 * `G_lin` + 0.0722 * `B_lin`
///
/// Returns a value in [0.0, 1.0] where 0 is black and 1 is white.
#[must_use]
pub fn relative_luminance(rgb: Rgb) -> f64 {
    let (r, g, b) = rgb.normalized();
    let r_lin = srgb_to_linear(r);
    let g_lin = srgb_to_linear(g);
    let b_lin = srgb_to_linear(b);
    0.2126f64.mul_add(r_lin, 0.7152f64.mul_add(g_lin, 0.0722 * b_lin))
}

/// Relative luminance of a color, flattened over black if translucent.
#[must_use]
pub fn luminance(color: Color) -> f64 {
    relative_luminance(color.flatten())
}

/// Compute the WCAG contrast ratio of `fg` drawn on `bg`.
///
/// Returns a value in [1.0, 21.0]:
///   (`L_lighter` + 0.05) / (`L_darker` + 0.05)
///
/// A translucent `fg` is flattened over `bg`; a translucent `bg` is
/// flattened over black. For opaque colors the result does not depend on
/// argument order. For translucent ones it does, because the flattening
/// grounds differ.
#[must_use]
pub fn contrast_ratio(fg: Color, bg: Color) -> f64 {
    let lf = relative_luminance(fg.to_opaque_rgb(bg));
    let lb = relative_luminance(bg.flatten());
    ratio_of(lf, lb)
}

/// Contrast between a translucent overlay and the surface under it.
///
/// The overlay is composited over `bg` and rounded to the 8-bit color that
/// actually gets displayed; that color is then compared against `bg`.
#[must_use]
pub fn overlay_contrast(overlay: Color, bg: Color) -> f64 {
    let (r, g, b) = overlay.blend_over(bg).rgb().to_rgb8();
    contrast_ratio(Color::rgb8(r, g, b), bg)
}

fn ratio_of(la: f64, lb: f64) -> f64 {
    let (lighter, darker) = if la >= lb { (la, lb) } else { (lb, la) };
    (lighter + 0.05) / (darker + 0.05)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    fn approx_eq(a: f64, b: f64, eps: f64) -> bool {
        (a - b).abs() < eps
    }

    fn hex(s: &str) -> Color {
        Color::hex(s).unwrap()
    }

    // ── Relative luminance ──────────────────────────────────────────

    #[test]
    fn luminance_black_is_zero() {
        let lum = luminance(Color::BLACK);
        assert!(approx_eq(lum, 0.0, 1e-12), "Black luminance: {lum}");
    }

    #[test]
    fn luminance_white_is_one() {
        let lum = luminance(Color::WHITE);
        assert!(approx_eq(lum, 1.0, 1e-12), "White luminance: {lum}");
    }

    #[test]
    fn luminance_mid_gray() {
        let lum = luminance(hex("#808080"));
        // 128/255 linearizes to ~0.2159
        assert!(approx_eq(lum, 0.2159, 0.001), "Mid-gray luminance: {lum}");
    }

    #[test]
    fn luminance_pure_red() {
        let lum = luminance(hex("#ff0000"));
        assert!(approx_eq(lum, 0.2126, 1e-9), "Red luminance: {lum}");
    }

    #[test]
    fn luminance_pure_green() {
        let lum = luminance(hex("#00ff00"));
        assert!(approx_eq(lum, 0.7152, 1e-9), "Green luminance: {lum}");
    }

    #[test]
    fn luminance_flattens_translucent_over_black() {
        let translucent = luminance(hex("#ffffff80"));
        let flattened = relative_luminance(Rgb::new(128.0, 128.0, 128.0));
        assert!(approx_eq(translucent, flattened, 0.01), "{translucent} vs {flattened}");
        assert!(translucent < 1.0);
    }

    // ── Contrast ratio ──────────────────────────────────────────────

    #[test]
    fn contrast_white_black_is_21() {
        let ratio = contrast_ratio(Color::WHITE, Color::BLACK);
        assert!(approx_eq(ratio, 21.0, 1e-9), "W/B contrast: {ratio}");
    }

    #[test]
    fn contrast_same_color_is_1() {
        let c = hex("#6b665f");
        let ratio = contrast_ratio(c, c);
        assert!(approx_eq(ratio, 1.0, 1e-12), "Same-color contrast: {ratio}");
    }

    #[test]
    fn contrast_is_symmetric_for_opaque() {
        let a = hex("#cc3344");
        let b = hex("#1a1a66");
        let ab = contrast_ratio(a, b);
        let ba = contrast_ratio(b, a);
        assert!(approx_eq(ab, ba, 1e-12), "Asymmetric: {ab} vs {ba}");
    }

    #[test]
    fn contrast_keyword_on_dark_background() {
        // L(#E2A48B) = 0.44584, L(#141413) = 0.00696
        let ratio = contrast_ratio(hex("#E2A48B"), hex("#141413"));
        assert!(approx_eq(ratio, 8.7049, 0.001), "Keyword contrast: {ratio}");
        assert!(ratio >= 4.5);
    }

    #[test]
    fn contrast_flattens_foreground_over_background() {
        // Half-transparent black on white reads as mid gray, not black.
        let ratio = contrast_ratio(hex("#00000080"), Color::WHITE);
        assert!(ratio > 3.0 && ratio < 5.0, "Flattened contrast: {ratio}");
    }

    #[test]
    fn contrast_flattening_grounds_are_asymmetric() {
        // As foreground, translucent red is flattened over white; as
        // background, over black.
        let red = hex("#ff000080");
        let fg_first = contrast_ratio(red, Color::WHITE);
        let bg_first = contrast_ratio(Color::WHITE, red);
        assert!(approx_eq(fg_first, 2.4435, 0.001), "{fg_first}");
        assert!(approx_eq(bg_first, 10.9498, 0.001), "{bg_first}");
    }

    // ── Overlay contrast ────────────────────────────────────────────

    #[test]
    fn overlay_selection_on_dark_background() {
        let ratio = overlay_contrast(hex("#D4967E40"), hex("#141413"));
        assert!(approx_eq(ratio, 1.5752, 0.001), "Overlay contrast: {ratio}");
    }

    #[test]
    fn overlay_fully_transparent_is_invisible() {
        let ratio = overlay_contrast(hex("#ffffff00"), hex("#141413"));
        assert!(approx_eq(ratio, 1.0, 1e-12), "Invisible overlay: {ratio}");
    }

    #[test]
    fn overlay_opaque_is_plain_contrast() {
        let overlay = overlay_contrast(Color::WHITE, Color::BLACK);
        assert!(approx_eq(overlay, 21.0, 1e-9), "Opaque overlay: {overlay}");
    }
}
