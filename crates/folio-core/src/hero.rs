//! Hero section effects: parallax, typed lead text and the background
//! pattern fade-in.

use std::time::Duration;

pub const PARALLAX_FACTOR: f64 = 0.3;

pub const TYPING_THRESHOLD: f64 = 0.5;
pub const TYPING_START_DELAY: Duration = Duration::from_secs(1);
/// Time between two revealed characters.
pub const TYPING_SPEED: Duration = Duration::from_millis(50);

pub const PATTERN_REVEAL_DELAY: Duration = Duration::from_millis(500);

pub fn parallax_offset(scroll_y: f64) -> f64 {
    scroll_y * PARALLAX_FACTOR
}

pub fn parallax_transform(scroll_y: f64) -> String {
    format!("translateY({}px)", parallax_offset(scroll_y))
}

/// Inline style of the background pattern before and after its fade-in.
pub fn pattern_style(revealed: bool) -> &'static str {
    if revealed {
        "transition: opacity 1.5s ease; opacity: 0.05"
    } else {
        "opacity: 0"
    }
}

/// Successive prefixes of a text, one more character each step.
#[derive(Debug, Clone)]
pub struct TypingEffect<'a> {
    text: &'a str,
    ends: std::str::CharIndices<'a>,
}

impl<'a> TypingEffect<'a> {
    pub fn new(text: &'a str) -> Self {
        let mut ends = text.char_indices();
        // the first prefix ends after the first character
        ends.next();
        Self { text, ends }
    }
}

impl Iterator for TypingEffect<'_> {
    type Item = String;

    fn next(&mut self) -> Option<String> {
        if self.text.is_empty() {
            return None;
        }
        match self.ends.next() {
            Some((end, _)) => Some(self.text[..end].to_string()),
            None => {
                let full = self.text.to_string();
                self.text = "";
                Some(full)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parallax_moves_slower_than_scroll() {
        assert_eq!(parallax_offset(0.0), 0.0);
        assert_eq!(parallax_offset(100.0), 30.0);
        assert_eq!(parallax_transform(200.0), "translateY(60px)");
    }

    #[test]
    fn test_typing_reveals_one_char_at_a_time() {
        let steps: Vec<String> = TypingEffect::new("Hi!").collect();
        assert_eq!(steps, vec!["H", "Hi", "Hi!"]);
    }

    #[test]
    fn test_typing_respects_char_boundaries() {
        let steps: Vec<String> = TypingEffect::new("né🦀").collect();
        assert_eq!(steps, vec!["n", "né", "né🦀"]);
    }

    #[test]
    fn test_typing_empty_text() {
        assert_eq!(TypingEffect::new("").count(), 0);
    }

    #[test]
    fn test_pattern_style() {
        assert_eq!(pattern_style(false), "opacity: 0");
        assert!(pattern_style(true).ends_with("opacity: 0.05"));
    }
}
