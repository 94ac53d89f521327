//! Palettes: role names mapped to hex color strings.
//!
//! Roles follow editor color keys (`editor.background`, `syntax.keyword`,
//! `terminal.ansiBrightCyan`). Values are kept as the strings the palette
//! table supplies and parsed on lookup, so a malformed entry only fails the
//! checks that actually read it.

use std::collections::BTreeMap;

use tc_color::Color;

use crate::error::{Result, ThemeError};

/// A theme palette: role name → hex color string.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Palette {
    entries: BTreeMap<String, String>,
}

impl Palette {
    /// The raw hex string for a role.
    #[must_use]
    pub fn get(&self, role: &str) -> Option<&str> {
        self.entries.get(role).map(String::as_str)
    }

    /// Look up and parse a role's color.
    ///
    /// # Errors
    ///
    /// [`ThemeError::UnknownRole`] if the role is missing,
    /// [`ThemeError::Color`] if its value is not a valid hex color.
    pub fn color(&self, role: &str) -> Result<Color> {
        let hex = self.get(role).ok_or_else(|| ThemeError::UnknownRole {
            role: role.to_string(),
        })?;
        Color::hex(hex).map_err(|source| ThemeError::Color {
            role: role.to_string(),
            source,
        })
    }

    /// Iterate roles in sorted order.
    pub fn roles(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }
}

impl<R, H> FromIterator<(R, H)> for Palette
where
    R: Into<String>,
    H: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (R, H)>>(iter: I) -> Self {
        Self {
            entries: iter
                .into_iter()
                .map(|(role, hex)| (role.into(), hex.into()))
                .collect(),
        }
    }
}
