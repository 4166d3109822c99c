//! Dark/light theme preference.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use std::time::Duration;

/// `localStorage` key holding the raw theme name.
pub const THEME_STORAGE_KEY: &str = "theme";
/// Attribute on the document element that carries the active theme.
pub const THEME_ATTRIBUTE: &str = "data-bs-theme";
/// Body class present while colors transition between themes.
pub const THEME_TRANSITION_CLASS: &str = "theme-transition";
/// How long the transition class stays on the body.
pub const THEME_TRANSITION: Duration = Duration::from_millis(300);

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Dark,
    Light,
}

impl Theme {
    pub fn toggled(self) -> Self {
        match self {
            Theme::Dark => Theme::Light,
            Theme::Light => Theme::Dark,
        }
    }

    /// Resolve the persisted value, falling back to dark for anything unknown.
    pub fn from_stored(stored: Option<&str>) -> Self {
        stored.and_then(|s| s.parse().ok()).unwrap_or_default()
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Theme::Dark => "dark",
            Theme::Light => "light",
        }
    }

    /// Font Awesome icon shown on the toggle button. The icon advertises the
    /// theme a click switches to.
    pub fn icon_class(&self) -> &'static str {
        match self {
            Theme::Dark => "fa-sun",
            Theme::Light => "fa-moon",
        }
    }

    pub fn toggle_label(&self) -> &'static str {
        match self {
            Theme::Dark => "Switch to light theme",
            Theme::Light => "Switch to dark theme",
        }
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Theme {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "dark" => Ok(Theme::Dark),
            "light" => Ok(Theme::Light),
            other => Err(format!("Unknown theme: {}. Expected dark or light", other)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_dark() {
        assert_eq!(Theme::from_stored(None), Theme::Dark);
    }

    #[test]
    fn test_from_stored_unknown_value_falls_back() {
        assert_eq!(Theme::from_stored(Some("sepia")), Theme::Dark);
        assert_eq!(Theme::from_stored(Some("")), Theme::Dark);
        assert_eq!(Theme::from_stored(Some("light")), Theme::Light);
    }

    #[test]
    fn test_toggle_parity() {
        let mut theme = Theme::from_stored(None);
        for clicks in 1..=9 {
            theme = theme.toggled();
            let expected = if clicks % 2 == 0 { "dark" } else { "light" };
            assert_eq!(theme.as_str(), expected, "after {} clicks", clicks);
        }
    }

    #[test]
    fn test_stored_value_round_trips_through_display() {
        for theme in [Theme::Dark, Theme::Light] {
            assert_eq!(Theme::from_stored(Some(&theme.to_string())), theme);
        }
    }

    #[test]
    fn test_icon_and_label_follow_theme() {
        assert_eq!(Theme::Dark.icon_class(), "fa-sun");
        assert_eq!(Theme::Dark.toggle_label(), "Switch to light theme");
        assert_eq!(Theme::Light.icon_class(), "fa-moon");
        assert_eq!(Theme::Light.toggle_label(), "Switch to dark theme");
    }

    #[test]
    fn test_parse_rejects_unknown() {
        let err = "blue".parse::<Theme>().unwrap_err();
        assert!(err.contains("Unknown theme"));
    }
}
