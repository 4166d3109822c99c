//! Project grid filtering and card hover styling.

use serde::{Deserialize, Serialize};

/// Filter value that shows every project.
pub const FILTER_ALL: &str = "all";

/// Currently selected filter button.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum ProjectFilter {
    #[default]
    All,
    Category(String),
}

impl ProjectFilter {
    /// Build a filter from a button's `data-filter` value.
    pub fn from_value(value: &str) -> Self {
        if value == FILTER_ALL {
            ProjectFilter::All
        } else {
            ProjectFilter::Category(value.to_string())
        }
    }

    pub fn value(&self) -> &str {
        match self {
            ProjectFilter::All => FILTER_ALL,
            ProjectFilter::Category(category) => category,
        }
    }

    pub fn shows(&self, category: &str) -> bool {
        match self {
            ProjectFilter::All => true,
            ProjectFilter::Category(selected) => selected == category,
        }
    }

    /// CSS `display` value for an item of the given category.
    pub fn display_for(&self, category: &str) -> &'static str {
        if self.shows(category) { "block" } else { "none" }
    }
}

/// A filter button in the project toolbar.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FilterButton {
    pub value: String,
    pub label: String,
}

/// A project card.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Project {
    pub title: String,
    pub description: String,
    pub category: String,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default)]
    pub link: Option<String>,
    #[serde(default)]
    pub repository: Option<String>,
}

/// Pointer state of a project card.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CardHover {
    Hovered,
    Resting,
}

impl CardHover {
    pub fn transform(&self) -> &'static str {
        match self {
            CardHover::Hovered => "translateY(-10px)",
            CardHover::Resting => "translateY(-5px)",
        }
    }

    pub fn box_shadow(&self) -> &'static str {
        match self {
            CardHover::Hovered => "0 15px 30px rgba(0, 0, 0, 0.2)",
            CardHover::Resting => "0 10px 20px rgba(0, 0, 0, 0.15)",
        }
    }

    pub fn style(&self) -> String {
        format!(
            "transform: {}; box-shadow: {}",
            self.transform(),
            self.box_shadow()
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const CATEGORIES: [&str; 4] = ["web", "data", "web", "cli"];

    #[test]
    fn test_all_shows_every_item() {
        let filter = ProjectFilter::from_value("all");
        assert_eq!(filter, ProjectFilter::All);
        assert!(CATEGORIES.iter().all(|c| filter.shows(c)));
    }

    #[test]
    fn test_category_shows_exact_matches_only() {
        for value in ["web", "data", "cli", "mobile"] {
            let filter = ProjectFilter::from_value(value);
            for category in CATEGORIES {
                assert_eq!(filter.shows(category), category == value);
            }
        }
    }

    #[test]
    fn test_category_match_is_case_sensitive() {
        let filter = ProjectFilter::from_value("Web");
        assert!(!filter.shows("web"));
    }

    #[test]
    fn test_repeated_selection_is_stable() {
        let first = ProjectFilter::from_value("data");
        let second = ProjectFilter::from_value(first.value());
        assert_eq!(first, second);
        assert_eq!(second.display_for("data"), "block");
        assert_eq!(second.display_for("web"), "none");
    }

    #[test]
    fn test_card_hover_styles() {
        assert_eq!(
            CardHover::Hovered.style(),
            "transform: translateY(-10px); box-shadow: 0 15px 30px rgba(0, 0, 0, 0.2)"
        );
        assert_eq!(CardHover::Resting.transform(), "translateY(-5px)");
    }
}
