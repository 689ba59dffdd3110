//! Theme registry.
//!
//! Maps each name of the closed theme set to the style variables it
//! defines. Applying a theme replaces the active variable set wholesale.

use std::collections::{BTreeMap, HashMap};
use std::fmt;
use std::str::FromStr;

use crate::config::{THEME_DARK, THEME_GREEN, THEME_NEON};
use crate::error::ThemeError;

/// Style variable name to value, e.g. `--bg-color` to `#000`.
pub type StyleVars = BTreeMap<String, String>;

/// Closed set of theme names.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum ThemeName {
    Dark,
    Neon,
    Green,
}

impl ThemeName {
    pub const ALL: [ThemeName; 3] = [Self::Dark, Self::Neon, Self::Green];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Dark => "dark",
            Self::Neon => "neon",
            Self::Green => "green",
        }
    }
}

impl fmt::Display for ThemeName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ThemeName {
    type Err = ThemeError;

    /// Exact, case-sensitive match.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|name| name.as_str() == s)
            .ok_or_else(|| ThemeError::Unknown(s.to_string()))
    }
}

/// Immutable theme definition.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Theme {
    pub name: ThemeName,
    pub vars: StyleVars,
}

/// Lookup table of themes.
#[derive(Clone, Debug)]
pub struct ThemeRegistry {
    themes: HashMap<ThemeName, Theme>,
}

impl ThemeRegistry {
    /// Build a registry from `(name, variables)` pairs.
    pub fn from_table(table: &[(ThemeName, &[(&str, &str)])]) -> Self {
        let themes = table
            .iter()
            .map(|(name, vars)| {
                let vars = vars
                    .iter()
                    .map(|(k, v)| (k.to_string(), v.to_string()))
                    .collect();
                (*name, Theme { name: *name, vars })
            })
            .collect();
        Self { themes }
    }

    /// The themes shipped with the terminal.
    pub fn builtin() -> Self {
        Self::from_table(&[
            (ThemeName::Dark, THEME_DARK),
            (ThemeName::Neon, THEME_NEON),
            (ThemeName::Green, THEME_GREEN),
        ])
    }

    pub fn get(&self, name: ThemeName) -> Option<&Theme> {
        self.themes.get(&name)
    }

    /// Look a theme up by its user-facing name.
    pub fn lookup(&self, name: &str) -> Option<&Theme> {
        name.parse().ok().and_then(|name| self.get(name))
    }
}

impl Default for ThemeRegistry {
    fn default() -> Self {
        Self::builtin()
    }
}
