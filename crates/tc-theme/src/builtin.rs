//! Built-in theme variants: palettes and the checks each must pass.
//!
//! Palettes are the resolved editor colors of each variant: UI surfaces,
//! syntax tokens, diagnostics, the 16 terminal ANSI slots, and the
//! translucent overlays (`#RRGGBBAA`) painted over them.

use crate::check::Check;
use crate::error::Result;
use crate::palette::Palette;
use crate::report::{Report, ValidationRun};

/// One of the shipped theme variants.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Variant {
    Dark,
    DarkHighContrast,
    Light,
    LightHighContrast,
}

impl Variant {
    /// Every variant, in report order.
    pub const ALL: [Self; 4] = [
        Self::Dark,
        Self::DarkHighContrast,
        Self::Light,
        Self::LightHighContrast,
    ];

    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Dark => "dark",
            Self::DarkHighContrast => "dark-high-contrast",
            Self::Light => "light",
            Self::LightHighContrast => "light-high-contrast",
        }
    }

    #[must_use]
    pub const fn is_light(self) -> bool {
        matches!(self, Self::Light | Self::LightHighContrast)
    }

    /// The variant's resolved palette.
    #[must_use]
    pub fn palette(self) -> Palette {
        let table = match self {
            Self::Dark => DARK,
            Self::DarkHighContrast => DARK_HIGH_CONTRAST,
            Self::Light => LIGHT,
            Self::LightHighContrast => LIGHT_HIGH_CONTRAST,
        };
        table.iter().copied().collect()
    }

    /// The checks this variant's palette must pass.
    #[must_use]
    pub fn checks(self) -> Vec<Check> {
        let light = self.is_light();
        let mut checks = Vec::with_capacity(23);

        // ── Text contrast ───────────────────────────────────────
        checks.push(Check::contrast("Editor foreground", "editor.foreground", EDITOR_BG, 7.0));
        for (label, role) in [
            ("Comment", "syntax.comment"),
            ("Keyword", "syntax.keyword"),
            ("Function", "syntax.function"),
            ("String", "syntax.string"),
            ("Number", "syntax.number"),
            ("Error diagnostic", "status.error"),
            ("Warning diagnostic", "status.warning"),
            ("Success diagnostic", "status.success"),
        ] {
            checks.push(Check::contrast(label, role, EDITOR_BG, 4.5));
        }

        // ── Terminal ────────────────────────────────────────────
        for (label, role, minimum) in [
            ("Terminal foreground", "terminal.foreground", 7.0),
            ("Terminal ANSI white", "terminal.ansiWhite", if light { 4.5 } else { 7.0 }),
            ("Terminal ANSI bright white", "terminal.ansiBrightWhite", if light { 7.0 } else { 10.0 }),
            ("Terminal ANSI bright black", "terminal.ansiBrightBlack", 3.0),
            ("Terminal ANSI magenta", "terminal.ansiMagenta", 3.5),
            ("Terminal ANSI cyan", "terminal.ansiCyan", 3.5),
            ("Terminal ANSI bright magenta", "terminal.ansiBrightMagenta", 3.5),
            ("Terminal ANSI bright cyan", "terminal.ansiBrightCyan", 3.5),
        ] {
            checks.push(Check::contrast(label, role, TERMINAL_BG, minimum));
        }

        // ── Overlay visibility ──────────────────────────────────
        checks.extend([
            Check::overlay(
                "Editor selection overlay visibility",
                "editor.selectionBackground",
                EDITOR_BG,
                1.1,
            ),
            Check::overlay(
                "Editor find-match overlay visibility",
                "editor.findMatchBackground",
                EDITOR_BG,
                1.2,
            ),
            Check::overlay(
                "List active selection overlay visibility",
                "list.activeSelectionBackground",
                "sideBar.background",
                1.08,
            ),
            Check::overlay(
                "Terminal selection overlay visibility",
                "terminal.selectionBackground",
                TERMINAL_BG,
                1.08,
            ),
        ]);

        // ── Hue separation ──────────────────────────────────────
        checks.extend([
            Check::hue_distance(
                "ANSI magenta vs cyan separation",
                "terminal.ansiMagenta",
                "terminal.ansiCyan",
                20.0,
            ),
            Check::hue_distance(
                "ANSI bright magenta vs bright cyan separation",
                "terminal.ansiBrightMagenta",
                "terminal.ansiBrightCyan",
                20.0,
            ),
        ]);

        checks
    }

    /// Evaluate this variant's checks against its palette.
    ///
    /// # Errors
    ///
    /// Fails if a check reads a role the palette lacks or a malformed color.
    pub fn validate(self) -> Result<Report> {
        Report::evaluate(self.name(), &self.palette(), &self.checks())
    }
}

/// Validate every built-in variant.
#[must_use]
pub fn validate_all() -> ValidationRun {
    let mut run = ValidationRun::new();
    for variant in Variant::ALL {
        run.record(variant.name(), variant.validate());
    }
    run
}

const EDITOR_BG: &str = "editor.background";
const TERMINAL_BG: &str = "terminal.background";

// ---------------------------------------------------------------------------
// Palette tables
// ---------------------------------------------------------------------------

const DARK: &[(&str, &str)] = &[
    // ── Surfaces ──────────────────────────────────────────────
    ("editor.background", "#141413"),
    ("editor.foreground", "#EAE7DF"),
    ("sideBar.background", "#1A1917"),
    ("terminal.background", "#141413"),
    ("terminal.foreground", "#EAE7DF"),
    // ── Overlays ──────────────────────────────────────────────
    ("editor.selectionBackground", "#D4967E40"),
    ("editor.findMatchBackground", "#E8C96B55"),
    ("list.activeSelectionBackground", "#D4967E33"),
    ("terminal.selectionBackground", "#D4967E40"),
    // ── Syntax ────────────────────────────────────────────────
    ("syntax.keyword", "#E2A48B"),
    ("syntax.type", "#AFCCF8"),
    ("syntax.function", "#FFC1A6"),
    ("syntax.parameter", "#F0CDBA"),
    ("syntax.property", "#F6DDCD"),
    ("syntax.variable", "#EAE7DF"),
    ("syntax.constant", "#FFB19D"),
    ("syntax.string", "#B5E6A0"),
    ("syntax.number", "#F4DC90"),
    ("syntax.operator", "#E2D8CC"),
    ("syntax.comment", "#B8AFA3"),
    ("syntax.regexp", "#FBE7AA"),
    ("syntax.tag", "#D9645B"),
    ("syntax.attribute", "#F6DFC7"),
    ("syntax.decorator", "#9B87F5"),
    ("syntax.punctuation", "#C6BDB2"),
    ("syntax.namespace", "#61AAF2"),
    // ── Diagnostics ───────────────────────────────────────────
    ("status.error", "#D47563"),
    ("status.warning", "#E8C96B"),
    ("status.success", "#9ACA86"),
    ("status.info", "#61AAF2"),
    // ── Terminal ANSI ─────────────────────────────────────────
    ("terminal.ansiBlack", "#1A1917"),
    ("terminal.ansiRed", "#D47563"),
    ("terminal.ansiGreen", "#9ACA86"),
    ("terminal.ansiYellow", "#E8C96B"),
    ("terminal.ansiBlue", "#61AAF2"),
    ("terminal.ansiMagenta", "#9B87F5"),
    ("terminal.ansiCyan", "#8CC4FF"),
    ("terminal.ansiWhite", "#D9D5CC"),
    ("terminal.ansiBrightBlack", "#6B665F"),
    ("terminal.ansiBrightRed", "#F09884"),
    ("terminal.ansiBrightGreen", "#B6E0A5"),
    ("terminal.ansiBrightYellow", "#F2D98F"),
    ("terminal.ansiBrightBlue", "#A2D2FF"),
    ("terminal.ansiBrightMagenta", "#C9BCFF"),
    ("terminal.ansiBrightCyan", "#BDE0FF"),
    ("terminal.ansiBrightWhite", "#F5F2E9"),
];

const DARK_HIGH_CONTRAST: &[(&str, &str)] = &[
    // ── Surfaces ──────────────────────────────────────────────
    ("editor.background", "#11100F"),
    ("editor.foreground", "#F5F2E9"),
    ("sideBar.background", "#161513"),
    ("terminal.background", "#11100F"),
    ("terminal.foreground", "#F5F2E9"),
    // ── Overlays ──────────────────────────────────────────────
    ("editor.selectionBackground", "#E1A08740"),
    ("editor.findMatchBackground", "#E8C96B55"),
    ("list.activeSelectionBackground", "#E1A08733"),
    ("terminal.selectionBackground", "#E1A08740"),
    // ── Syntax ────────────────────────────────────────────────
    ("syntax.keyword", "#F1B79E"),
    ("syntax.type", "#C8DCFA"),
    ("syntax.function", "#FFD0B8"),
    ("syntax.parameter", "#F8D8C9"),
    ("syntax.property", "#FFF5E9"),
    ("syntax.variable", "#F5F2E9"),
    ("syntax.constant", "#FFC1AD"),
    ("syntax.string", "#C6F0B3"),
    ("syntax.number", "#F8E5A8"),
    ("syntax.operator", "#F0E8DC"),
    ("syntax.comment", "#D1C8BB"),
    ("syntax.regexp", "#FCEEBC"),
    ("syntax.tag", "#FFB8A3"),
    ("syntax.attribute", "#F9E3CC"),
    ("syntax.decorator", "#C9BCFF"),
    ("syntax.punctuation", "#E0D7CC"),
    ("syntax.namespace", "#8CC4FF"),
    // ── Diagnostics ───────────────────────────────────────────
    ("status.error", "#F09884"),
    ("status.warning", "#E8C96B"),
    ("status.success", "#9ACA86"),
    ("status.info", "#9EB7E2"),
    // ── Terminal ANSI ─────────────────────────────────────────
    ("terminal.ansiBlack", "#151311"),
    ("terminal.ansiRed", "#F09884"),
    ("terminal.ansiGreen", "#B6E0A5"),
    ("terminal.ansiYellow", "#F2D98F"),
    ("terminal.ansiBlue", "#8CC4FF"),
    ("terminal.ansiMagenta", "#C9BCFF"),
    ("terminal.ansiCyan", "#B2D8FF"),
    ("terminal.ansiWhite", "#E0DBD0"),
    ("terminal.ansiBrightBlack", "#6B665F"),
    ("terminal.ansiBrightRed", "#FFB4A4"),
    ("terminal.ansiBrightGreen", "#B6E0A5"),
    ("terminal.ansiBrightYellow", "#F2D98F"),
    ("terminal.ansiBrightBlue", "#BED0ED"),
    ("terminal.ansiBrightMagenta", "#D2DEF2"),
    ("terminal.ansiBrightCyan", "#C5D6EF"),
    ("terminal.ansiBrightWhite", "#F5F2E9"),
];

const LIGHT: &[(&str, &str)] = &[
    // ── Surfaces ──────────────────────────────────────────────
    ("editor.background", "#FAF9F5"),
    ("editor.foreground", "#1A1917"),
    ("sideBar.background", "#F0EEE6"),
    ("terminal.background", "#FAF9F5"),
    ("terminal.foreground", "#1A1917"),
    // ── Overlays ──────────────────────────────────────────────
    ("editor.selectionBackground", "#CC785C40"),
    ("editor.findMatchBackground", "#8A622055"),
    ("list.activeSelectionBackground", "#CC785C33"),
    ("terminal.selectionBackground", "#CC785C40"),
    // ── Syntax ────────────────────────────────────────────────
    ("syntax.keyword", "#B84A2A"),
    ("syntax.type", "#386290"),
    ("syntax.function", "#AE4E30"),
    ("syntax.parameter", "#AE6D53"),
    ("syntax.property", "#3A6594"),
    ("syntax.variable", "#1A1917"),
    ("syntax.constant", "#BD5341"),
    ("syntax.string", "#2D7F4D"),
    ("syntax.number", "#946A1E"),
    ("syntax.operator", "#6A645C"),
    ("syntax.comment", "#6C655D"),
    ("syntax.regexp", "#B07C26"),
    ("syntax.tag", "#CC5E54"),
    ("syntax.attribute", "#B46344"),
    ("syntax.decorator", "#6A5BCC"),
    ("syntax.punctuation", "#877C70"),
    ("syntax.namespace", "#207FDE"),
    // ── Diagnostics ───────────────────────────────────────────
    ("status.error", "#A84B3A"),
    ("status.warning", "#8A6220"),
    ("status.success", "#2E7C4C"),
    ("status.info", "#207FDE"),
    // ── Terminal ANSI ─────────────────────────────────────────
    ("terminal.ansiBlack", "#1A1917"),
    ("terminal.ansiRed", "#A84B3A"),
    ("terminal.ansiGreen", "#2E7C4C"),
    ("terminal.ansiYellow", "#8A6220"),
    ("terminal.ansiBlue", "#207FDE"),
    ("terminal.ansiMagenta", "#6A5BCC"),
    ("terminal.ansiCyan", "#2E5F99"),
    ("terminal.ansiWhite", "#D9D5CC"),
    ("terminal.ansiBrightBlack", "#6B665F"),
    ("terminal.ansiBrightRed", "#C45F4A"),
    ("terminal.ansiBrightGreen", "#5E8F6D"),
    ("terminal.ansiBrightYellow", "#9C7A39"),
    ("terminal.ansiBrightBlue", "#6C8AB4"),
    ("terminal.ansiBrightMagenta", "#6A86AE"),
    ("terminal.ansiBrightCyan", "#5A7BA8"),
    ("terminal.ansiBrightWhite", "#FAF9F5"),
];

const LIGHT_HIGH_CONTRAST: &[(&str, &str)] = &[
    // ── Surfaces ──────────────────────────────────────────────
    ("editor.background", "#F6F3EA"),
    ("editor.foreground", "#141413"),
    ("sideBar.background", "#EBE7DC"),
    ("terminal.background", "#F6F3EA"),
    ("terminal.foreground", "#141413"),
    // ── Overlays ──────────────────────────────────────────────
    ("editor.selectionBackground", "#B85F3D40"),
    ("editor.findMatchBackground", "#6B4F1B55"),
    ("list.activeSelectionBackground", "#B85F3D33"),
    ("terminal.selectionBackground", "#B85F3D40"),
    // ── Syntax ────────────────────────────────────────────────
    ("syntax.keyword", "#A5472B"),
    ("syntax.type", "#2E66A3"),
    ("syntax.function", "#B14E2F"),
    ("syntax.parameter", "#9E5F47"),
    ("syntax.property", "#31608E"),
    ("syntax.variable", "#141413"),
    ("syntax.constant", "#AD4C39"),
    ("syntax.string", "#2F7750"),
    ("syntax.number", "#85611B"),
    ("syntax.operator", "#4F4A43"),
    ("syntax.comment", "#6A6359"),
    ("syntax.regexp", "#9C6E20"),
    ("syntax.tag", "#AD4C39"),
    ("syntax.attribute", "#A95134"),
    ("syntax.decorator", "#5B4DB4"),
    ("syntax.punctuation", "#6A6359"),
    ("syntax.namespace", "#1B6EBF"),
    // ── Diagnostics ───────────────────────────────────────────
    ("status.error", "#8F3C2D"),
    ("status.warning", "#6B4F1B"),
    ("status.success", "#2F6140"),
    ("status.info", "#325B86"),
    // ── Terminal ANSI ─────────────────────────────────────────
    ("terminal.ansiBlack", "#141413"),
    ("terminal.ansiRed", "#8F3C2D"),
    ("terminal.ansiGreen", "#286945"),
    ("terminal.ansiYellow", "#775618"),
    ("terminal.ansiBlue", "#1B6EBF"),
    ("terminal.ansiMagenta", "#5B4DB4"),
    ("terminal.ansiCyan", "#27598F"),
    ("terminal.ansiWhite", "#EFEBDD"),
    ("terminal.ansiBrightBlack", "#4A473F"),
    ("terminal.ansiBrightRed", "#A44E3A"),
    ("terminal.ansiBrightGreen", "#437954"),
    ("terminal.ansiBrightYellow", "#826326"),
    ("terminal.ansiBrightBlue", "#4B7098"),
    ("terminal.ansiBrightMagenta", "#5D7EA5"),
    ("terminal.ansiBrightCyan", "#466A92"),
    ("terminal.ansiBrightWhite", "#F6F3EA"),
];

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
