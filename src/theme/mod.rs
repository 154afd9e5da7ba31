//! Visual theme selection.
//!
//! One three-state machine (`light → dark → contrast → light`) owned by a
//! [`ThemeService`]. The service is created once at the root of the
//! application and handed by reference to every consumer; consumers that
//! need to react to changes call [`ThemeService::subscribe`].

mod service;
mod store;

pub use service::*;
pub use store::*;

use serde::{Deserialize, Serialize};

/// Storage key holding the persisted theme.
pub const THEME_KEY: &str = "theme";

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, Default)]
#[serde(rename_all = "snake_case")]
pub enum Theme {
    #[default]
    Light,
    Dark,
    Contrast,
}

impl Theme {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
            Self::Contrast => "contrast",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "light" => Some(Self::Light),
            "dark" => Some(Self::Dark),
            "contrast" => Some(Self::Contrast),
            _ => None,
        }
    }

    /// Next state in toggle order.
    pub fn next(&self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Contrast,
            Self::Contrast => Self::Light,
        }
    }
}

impl std::fmt::Display for Theme {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Colour-scheme preference reported by the environment
/// (`prefers-color-scheme` / `prefers-contrast`).
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "snake_case")]
pub enum ColorScheme {
    Light,
    Dark,
    MoreContrast,
    #[default]
    NoPreference,
}

impl ColorScheme {
    fn theme(&self) -> Option<Theme> {
        match self {
            Self::Light => Some(Theme::Light),
            Self::Dark => Some(Theme::Dark),
            Self::MoreContrast => Some(Theme::Contrast),
            Self::NoPreference => None,
        }
    }
}

/// Resolve the start-up theme: persisted value, else environment preference,
/// else light. Unparseable persisted values are ignored.
pub fn resolve_initial(persisted: Option<&str>, environment: ColorScheme) -> Theme {
    persisted
        .and_then(Theme::from_str)
        .or_else(|| environment.theme())
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn toggle_cycles_through_all_three() {
        let mut theme = Theme::Light;
        let mut seen = vec![theme];
        for _ in 0..3 {
            theme = theme.next();
            seen.push(theme);
        }
        assert_eq!(
            seen,
            vec![Theme::Light, Theme::Dark, Theme::Contrast, Theme::Light]
        );
    }

    #[test]
    fn persisted_value_wins() {
        assert_eq!(resolve_initial(Some("contrast"), ColorScheme::Dark), Theme::Contrast);
    }

    #[test]
    fn environment_used_without_persisted_value() {
        assert_eq!(resolve_initial(None, ColorScheme::Dark), Theme::Dark);
        assert_eq!(resolve_initial(Some("sepia"), ColorScheme::MoreContrast), Theme::Contrast);
    }

    #[test]
    fn falls_back_to_light() {
        assert_eq!(resolve_initial(None, ColorScheme::NoPreference), Theme::Light);
    }

    #[test]
    fn string_round_trip() {
        for theme in [Theme::Light, Theme::Dark, Theme::Contrast] {
            assert_eq!(Theme::from_str(theme.as_str()), Some(theme));
        }
    }
}
