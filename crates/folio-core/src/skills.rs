//! Skill progress bars.

use serde::{Deserialize, Serialize};
use std::time::Duration;

pub const SKILL_THRESHOLD: f64 = 0.2;
/// Pause between collapsing a bar and filling it.
pub const SKILL_FILL_DELAY: Duration = Duration::from_millis(200);
pub const SKILL_TRANSITION: &str = "width 1s ease-in-out";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Skill {
    pub name: String,
    /// Proficiency in percent.
    pub level: u8,
}

impl Skill {
    pub fn new(name: impl Into<String>, level: u8) -> Self {
        Self {
            name: name.into(),
            level,
        }
    }

    pub fn percent(&self) -> u8 {
        self.level.min(100)
    }

    /// Target CSS width of the bar.
    pub fn width(&self) -> String {
        format!("{}%", self.percent())
    }
}

/// Inline style of a bar at a given width.
pub fn bar_style(width: &str, transition: Option<&str>) -> String {
    match transition {
        Some(transition) => format!("transition: {}; width: {}", transition, width),
        None => format!("width: {}", width),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_width_is_percentage() {
        assert_eq!(Skill::new("Rust", 85).width(), "85%");
    }

    #[test]
    fn test_width_clamped_to_full_bar() {
        assert_eq!(Skill::new("Coffee", 250).width(), "100%");
    }

    #[test]
    fn test_bar_style() {
        assert_eq!(bar_style("0%", None), "width: 0%");
        assert_eq!(
            bar_style("85%", Some(SKILL_TRANSITION)),
            "transition: width 1s ease-in-out; width: 85%"
        );
    }
}
