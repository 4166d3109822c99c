//! Rotating page background.

use std::time::Duration;

/// Background classes in display order.
pub const DEFAULT_BACKGROUNDS: [&str; 8] = [
    "image1", "image2", "image3", "image4", "image5", "image6", "image7", "image0",
];

pub const DEFAULT_ROTATION_INTERVAL: Duration = Duration::from_secs(10);

/// Circular cursor over the body classes.
#[derive(Debug, Clone)]
pub struct BackgroundCycle {
    classes: Vec<String>,
    index: usize,
}

impl BackgroundCycle {
    pub fn new(classes: Vec<String>) -> Self {
        Self { classes, index: 0 }
    }

    /// Class to apply on this tick. Moves the cursor, wrapping at the end.
    pub fn advance(&mut self) -> &str {
        if self.classes.is_empty() {
            return "";
        }
        let current = self.index;
        self.index = (self.index + 1) % self.classes.len();
        &self.classes[current]
    }
}

impl Default for BackgroundCycle {
    fn default() -> Self {
        Self::new(DEFAULT_BACKGROUNDS.iter().map(|s| s.to_string()).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_advance_wraps_after_last_class() {
        let mut cycle = BackgroundCycle::default();
        let first_pass: Vec<String> = (0..8).map(|_| cycle.advance().to_string()).collect();
        assert_eq!(first_pass, DEFAULT_BACKGROUNDS);
        assert_eq!(cycle.advance(), "image1");
        assert_eq!(cycle.advance(), "image2");
    }

    #[test]
    fn test_single_class_repeats() {
        let mut cycle = BackgroundCycle::new(vec!["only".to_string()]);
        assert_eq!(cycle.advance(), "only");
        assert_eq!(cycle.advance(), "only");
    }

    #[test]
    fn test_empty_cycle_yields_empty_class() {
        let mut cycle = BackgroundCycle::new(Vec::new());
        assert_eq!(cycle.advance(), "");
    }
}
