//! One-shot scroll reveal animations.

use std::fmt;

/// Share of the element that must be visible before it animates.
pub const REVEAL_THRESHOLD: f64 = 0.1;

/// A single inline style declaration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StyleRule {
    pub property: &'static str,
    pub value: &'static str,
}

impl StyleRule {
    const fn new(property: &'static str, value: &'static str) -> Self {
        Self { property, value }
    }
}

impl fmt::Display for StyleRule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.property, self.value)
    }
}

/// Style applied to every element when the browser cannot observe visibility.
pub const STATIC_STYLE: StyleRule = StyleRule::new("transform", "none");

/// Animation declared through `data-animation`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnimationKind {
    FadeUp,
    FadeDown,
    FadeLeft,
    FadeRight,
    WidthExpand,
    Unknown,
}

impl AnimationKind {
    pub fn from_attr(value: &str) -> Self {
        match value {
            "fade-up" => AnimationKind::FadeUp,
            "fade-down" => AnimationKind::FadeDown,
            "fade-left" => AnimationKind::FadeLeft,
            "fade-right" => AnimationKind::FadeRight,
            "width-expand" => AnimationKind::WidthExpand,
            _ => AnimationKind::Unknown,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            AnimationKind::FadeUp => "fade-up",
            AnimationKind::FadeDown => "fade-down",
            AnimationKind::FadeLeft => "fade-left",
            AnimationKind::FadeRight => "fade-right",
            AnimationKind::WidthExpand => "width-expand",
            AnimationKind::Unknown => "",
        }
    }

    /// Pre-animation style, set as soon as the element is registered.
    pub fn initial_style(&self) -> Option<StyleRule> {
        match self {
            AnimationKind::FadeUp => Some(StyleRule::new("transform", "translateY(40px)")),
            AnimationKind::FadeDown => Some(StyleRule::new("transform", "translateY(-40px)")),
            AnimationKind::FadeLeft => Some(StyleRule::new("transform", "translateX(40px)")),
            AnimationKind::FadeRight => Some(StyleRule::new("transform", "translateX(-40px)")),
            AnimationKind::WidthExpand => Some(StyleRule::new("width", "0px")),
            AnimationKind::Unknown => None,
        }
    }

    pub fn final_style(&self) -> Option<StyleRule> {
        match self {
            AnimationKind::FadeUp | AnimationKind::FadeDown => {
                Some(StyleRule::new("transform", "translateY(0)"))
            }
            AnimationKind::FadeLeft | AnimationKind::FadeRight => {
                Some(StyleRule::new("transform", "translateX(0)"))
            }
            AnimationKind::WidthExpand => Some(StyleRule::new("width", "80px")),
            AnimationKind::Unknown => None,
        }
    }

    pub fn style(&self, state: RevealState) -> Option<StyleRule> {
        match state {
            RevealState::Pending => self.initial_style(),
            RevealState::Animated => self.final_style(),
            RevealState::Static => Some(STATIC_STYLE),
        }
    }
}

/// Lifecycle of a revealed element.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum RevealState {
    /// Registered, waiting to scroll into view.
    #[default]
    Pending,
    /// Animated to its final style.
    Animated,
    /// Shown without animation because visibility cannot be observed.
    Static,
}

impl RevealState {
    /// Move to `Animated`. Returns `false` when the element was already past
    /// `Pending`, in which case nothing changes.
    pub fn trigger(&mut self) -> bool {
        if *self != RevealState::Pending {
            return false;
        }
        *self = RevealState::Animated;
        true
    }

    /// Whether the `animated` class is present.
    pub fn is_animated(&self) -> bool {
        !matches!(self, RevealState::Pending)
    }
}

/// Parse `data-delay` in milliseconds; missing or malformed means no delay.
pub fn parse_delay(value: Option<&str>) -> u32 {
    value.and_then(|v| v.trim().parse().ok()).unwrap_or(0)
}
