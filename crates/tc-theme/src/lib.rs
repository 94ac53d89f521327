//! # tc-theme: accessibility validation for editor theme palettes
//!
//! Checks that a theme's colors stay readable: text against its background,
//! translucent highlights against what they are painted on, and hue
//! separation between ANSI colors that would otherwise blur together.
//!
//! # Architecture
//!
//! ```text
//! Palette (role → hex) + [Check]
//!     │
//!     ▼
//! check.rs:    resolve roles, measure one value per check
//!     │          ├── contrast.rs: WCAG luminance + contrast ratio
//!     │          └── hue.rs:      HSL hue + circular distance
//!     ▼
//! report.rs:   PASS/FAIL per check, OR-ed into one verdict per variant
//!     │
//!     ▼
//! builtin.rs:  the four shipped variants, their palettes and check lists
//! ```
//!
//! Every function is pure. Checks never see each other's results, so they
//! can be evaluated in any order.

// Single-char math variables are standard in color science.
#![allow(clippy::many_single_char_names)]
// Hue branches compare a channel against the max it was taken from.
#![allow(clippy::float_cmp)]

pub mod builtin;
pub mod check;
pub mod contrast;
pub mod error;
pub mod hue;
pub mod palette;
pub mod report;

pub use builtin::Variant;
pub use check::{Check, CheckKind, CheckOutcome};
pub use error::{Result, ThemeError};
pub use palette::Palette;
pub use report::{Report, ValidationRun, VariantFailure};
