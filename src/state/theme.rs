#[cfg(test)]
#[path = "theme_test.rs"]
mod theme_test;

use std::fmt;

/// The two visual themes the site supports.
///
/// The same string doubles as the persisted value and the class marker on
/// the root container, so one `as_str` covers both.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum ThemePreference {
    #[default]
    Light,
    Dark,
}

/// Label for the toggle control: the glyph it shows and its accessible name.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ToggleAffordance {
    pub glyph: &'static str,
    pub aria_label: &'static str,
}

impl ThemePreference {
    pub const ALL: [Self; 2] = [Self::Light, Self::Dark];

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Light => "light-mode",
            Self::Dark => "dark-mode",
        }
    }

    /// Parse a persisted value. Anything other than the two known strings is
    /// treated as unset.
    pub fn parse(raw: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|pref| pref.as_str() == raw)
    }

    #[must_use]
    pub const fn opposite(self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }

    /// What the toggle offers while this theme is applied, i.e. the switch
    /// to the opposite theme.
    pub const fn toggle_affordance(self) -> ToggleAffordance {
        match self {
            Self::Dark => ToggleAffordance { glyph: "\u{2600}\u{fe0f}", aria_label: "Switch to light mode" },
            Self::Light => ToggleAffordance { glyph: "\u{1f319}", aria_label: "Switch to dark mode" },
        }
    }
}

impl fmt::Display for ThemePreference {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
