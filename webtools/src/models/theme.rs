// src/models/theme.rs
use serde::Serialize;
use std::fmt;

/// Site colour scheme. Only the stored string form is persisted by the page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    /// Picks the initial theme from the saved preference, falling back to
    /// the system colour scheme when nothing has been saved.
    #[must_use]
    pub fn resolve(saved: Option<&str>, prefers_dark: bool) -> Self {
        match saved {
            Some("dark") => Self::Dark,
            None | Some("") if prefers_dark => Self::Dark,
            _ => Self::Light,
        }
    }

    #[inline]
    #[must_use]
    pub const fn toggle(self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }

    /// Value written to browser storage.
    #[inline]
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }

    /// Label of the sidebar dark-mode switch.
    #[inline]
    #[must_use]
    pub const fn status_label(self) -> &'static str {
        match self {
            Self::Light => "OFF",
            Self::Dark => "ON",
        }
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
