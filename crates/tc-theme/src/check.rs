//! Checks: one measured value compared against one minimum.
//!
//! Three kinds are supported:
//!
//! - **Contrast**: text color against its background (WCAG ratio).
//! - **Overlay**: translucent highlight against the surface it covers
//!   (WCAG ratio of the composited result).
//! - **Hue distance**: separation of two colors on the hue wheel, degrees.
//!
//! Every kind passes when `measured >= minimum`. Operands are palette role
//! names, resolved when the check is evaluated.

use std::fmt;

use tc_color::Color;

use crate::contrast::{contrast_ratio, overlay_contrast};
use crate::error::Result;
use crate::hue::hue_distance;
use crate::palette::Palette;

/// Which measurement a check makes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CheckKind {
    Contrast,
    Overlay,
    HueDistance,
}

/// A named threshold check over two palette roles.
#[derive(Debug, Clone, PartialEq)]
pub enum Check {
    /// `foreground` text drawn on `background`.
    Contrast {
        label: String,
        foreground: String,
        background: String,
        minimum: f64,
    },
    /// Translucent `overlay` painted over `background`.
    Overlay {
        label: String,
        overlay: String,
        background: String,
        minimum: f64,
    },
    /// Hue separation between `first` and `second`, in degrees.
    HueDistance {
        label: String,
        first: String,
        second: String,
        minimum: f64,
    },
}

impl Check {
    // ─── Constructors ────────────────────────────────────────────────────

    #[must_use]
    pub fn contrast(
        label: impl Into<String>,
        foreground: impl Into<String>,
        background: impl Into<String>,
        minimum: f64,
    ) -> Self {
        Self::Contrast {
            label: label.into(),
            foreground: foreground.into(),
            background: background.into(),
            minimum,
        }
    }

    #[must_use]
    pub fn overlay(
        label: impl Into<String>,
        overlay: impl Into<String>,
        background: impl Into<String>,
        minimum: f64,
    ) -> Self {
        Self::Overlay {
            label: label.into(),
            overlay: overlay.into(),
            background: background.into(),
            minimum,
        }
    }

    #[must_use]
    pub fn hue_distance(
        label: impl Into<String>,
        first: impl Into<String>,
        second: impl Into<String>,
        minimum: f64,
    ) -> Self {
        Self::HueDistance {
            label: label.into(),
            first: first.into(),
            second: second.into(),
            minimum,
        }
    }

    // ─── Accessors ───────────────────────────────────────────────────────

    #[must_use]
    pub fn label(&self) -> &str {
        match self {
            Self::Contrast { label, .. }
            | Self::Overlay { label, .. }
            | Self::HueDistance { label, .. } => label,
        }
    }

    #[must_use]
    pub const fn kind(&self) -> CheckKind {
        match self {
            Self::Contrast { .. } => CheckKind::Contrast,
            Self::Overlay { .. } => CheckKind::Overlay,
            Self::HueDistance { .. } => CheckKind::HueDistance,
        }
    }

    #[must_use]
    pub const fn minimum(&self) -> f64 {
        match self {
            Self::Contrast { minimum, .. }
            | Self::Overlay { minimum, .. }
            | Self::HueDistance { minimum, .. } => *minimum,
        }
    }

    /// The two palette roles this check reads.
    #[must_use]
    pub fn roles(&self) -> (&str, &str) {
        match self {
            Self::Contrast {
                foreground: a,
                background: b,
                ..
            }
            | Self::Overlay {
                overlay: a,
                background: b,
                ..
            }
            | Self::HueDistance {
                first: a,
                second: b,
                ..
            } => (a, b),
        }
    }

    // ─── Evaluation ──────────────────────────────────────────────────────

    /// Measure this check against two resolved colors.
    #[must_use]
    pub fn measure(&self, a: Color, b: Color) -> f64 {
        match self.kind() {
            CheckKind::Contrast => contrast_ratio(a, b),
            CheckKind::Overlay => overlay_contrast(a, b),
            CheckKind::HueDistance => hue_distance(a, b),
        }
    }

    /// Resolve both roles in `palette`, measure, and judge the result.
    ///
    /// # Errors
    ///
    /// Fails if either role is missing from the palette or is not a valid
    /// hex color. A measurement below the minimum is not an error.
    pub fn evaluate(&self, palette: &Palette) -> Result<CheckOutcome> {
        let (first, second) = self.roles();
        let a = palette.color(first)?;
        let b = palette.color(second)?;

        let measured = self.measure(a, b);
        let outcome = CheckOutcome::new(self.label(), self.kind(), measured, self.minimum());

        tracing::debug!(
            label = %outcome.label,
            measured,
            minimum = outcome.minimum,
            pass = outcome.pass,
            "check evaluated"
        );

        Ok(outcome)
    }
}

// ---------------------------------------------------------------------------
// CheckOutcome
// ---------------------------------------------------------------------------

/// The measured result of one check.
#[derive(Debug, Clone, PartialEq)]
pub struct CheckOutcome {
    pub label: String,
    pub kind: CheckKind,
    pub measured: f64,
    pub minimum: f64,
    pub pass: bool,
}

impl CheckOutcome {
    /// Judge `measured` against `minimum` (inclusive).
    #[must_use]
    pub fn new(label: impl Into<String>, kind: CheckKind, measured: f64, minimum: f64) -> Self {
        Self {
            label: label.into(),
            kind,
            measured,
            minimum,
            pass: measured >= minimum,
        }
    }
}

impl fmt::Display for CheckOutcome {
    /// One report line: `  PASS  Keyword: 8.70 (min 4.50)`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let verdict = if self.pass { "PASS" } else { "FAIL" };
        let Self {
            label,
            measured,
            minimum,
            ..
        } = self;
        match self.kind {
            CheckKind::Contrast | CheckKind::Overlay => {
                write!(f, "  {verdict}  {label}: {measured:.2} (min {minimum:.2})")
            }
            CheckKind::HueDistance => {
                write!(f, "  {verdict}  {label}: {measured:.1}deg (min {minimum}deg)")
            }
        }
    }
}
