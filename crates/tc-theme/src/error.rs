//! Errors raised while evaluating checks against a palette.

use tc_color::ColorError;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, ThemeError>;

/// A check could not be measured.
///
/// A check that measures below its minimum is not an error; it is a
/// failing [`CheckOutcome`](crate::CheckOutcome).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ThemeError {
    #[error("role \"{role}\": {source}")]
    Color {
        role: String,
        #[source]
        source: ColorError,
    },

    #[error("palette has no role \"{role}\"")]
    UnknownRole { role: String },
}

impl ThemeError {
    /// The palette role the failing lookup was for.
    #[must_use]
    pub fn role(&self) -> &str {
        match self {
            Self::Color { role, .. } | Self::UnknownRole { role } => role,
        }
    }
}
