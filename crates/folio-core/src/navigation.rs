//! Scroll-driven navigation state: active section, navbar style and the
//! back-to-top button.

/// Gap left above a section when jumping to it (fixed navbar height).
pub const ANCHOR_OFFSET: f64 = 70.0;
/// Look-ahead applied to both the scroll position and section tops.
pub const ACTIVE_SECTION_OFFSET: f64 = 100.0;
pub const NAVBAR_SCROLL_THRESHOLD: f64 = 50.0;
pub const BACK_TO_TOP_THRESHOLD: f64 = 500.0;

/// Layout of a page section as measured in the document.
#[derive(Debug, Clone, PartialEq)]
pub struct SectionBounds {
    pub id: String,
    pub top: f64,
    pub height: f64,
}

impl SectionBounds {
    pub fn new(id: impl Into<String>, top: f64, height: f64) -> Self {
        Self {
            id: id.into(),
            top,
            height,
        }
    }

    fn contains(&self, position: f64) -> bool {
        let top = self.top - ACTIVE_SECTION_OFFSET;
        position >= top && position < top + self.height
    }
}

/// Id of the section the reader is in, given sections in document order.
///
/// Ranges can overlap; the last matching section wins.
pub fn active_section(scroll_y: f64, sections: &[SectionBounds]) -> Option<&str> {
    let position = scroll_y + ACTIVE_SECTION_OFFSET;
    sections
        .iter()
        .rev()
        .find(|section| section.contains(position))
        .map(|section| section.id.as_str())
}

pub fn navbar_scrolled(scroll_y: f64) -> bool {
    scroll_y > NAVBAR_SCROLL_THRESHOLD
}

pub fn back_to_top_visible(scroll_y: f64) -> bool {
    scroll_y > BACK_TO_TOP_THRESHOLD
}

/// Window scroll target that puts a section's top just below the navbar.
pub fn anchor_scroll_top(section_offset_top: f64) -> f64 {
    section_offset_top - ANCHOR_OFFSET
}

/// Section id referenced by an in-page link, `None` for other hrefs.
pub fn hash_target(href: &str) -> Option<&str> {
    href.strip_prefix('#').filter(|id| !id.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn page() -> Vec<SectionBounds> {
        vec![
            SectionBounds::new("home", 0.0, 800.0),
            SectionBounds::new("about", 800.0, 600.0),
            SectionBounds::new("projects", 1400.0, 1000.0),
        ]
    }

    #[test]
    fn test_active_section_at_top() {
        assert_eq!(active_section(0.0, &page()), Some("home"));
    }

    #[test]
    fn test_active_section_switches_before_section_top() {
        // position = 700 + 100 = 800; about starts at 800 - 100 = 700
        assert_eq!(active_section(600.0, &page()), Some("about"));
        assert_eq!(active_section(599.0, &page()), Some("home"));
    }

    #[test]
    fn test_active_section_none_past_end() {
        assert_eq!(active_section(5000.0, &page()), None);
    }

    #[test]
    fn test_overlapping_sections_last_match_wins() {
        let sections = vec![
            SectionBounds::new("outer", 0.0, 2000.0),
            SectionBounds::new("inner", 500.0, 300.0),
        ];
        assert_eq!(active_section(450.0, &sections), Some("inner"));
        assert_eq!(active_section(900.0, &sections), Some("outer"));
    }

    #[test]
    fn test_navbar_scrolled_threshold() {
        assert!(!navbar_scrolled(0.0));
        assert!(!navbar_scrolled(50.0));
        assert!(navbar_scrolled(50.5));
    }

    #[test]
    fn test_back_to_top_threshold() {
        assert!(!back_to_top_visible(500.0));
        assert!(back_to_top_visible(501.0));
    }

    #[test]
    fn test_anchor_scroll_top() {
        assert_eq!(anchor_scroll_top(1400.0), 1330.0);
    }

    #[test]
    fn test_hash_target() {
        assert_eq!(hash_target("#about"), Some("about"));
        assert_eq!(hash_target("#"), None);
        assert_eq!(hash_target("resume.pdf"), None);
        assert_eq!(hash_target("https://example.com/#about"), None);
    }
}
