//! Site content and endpoints, read from TOML.

use crate::background::{DEFAULT_BACKGROUNDS, DEFAULT_ROTATION_INTERVAL};
use crate::contact::DEFAULT_MAX_MESSAGE_CHARS;
use crate::feed::{self, DEFAULT_FEED_PROXY, DEFAULT_POSTS_TO_SHOW};
use crate::projects::{FILTER_ALL, FilterButton, Project};
use crate::skills::Skill;
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::time::Duration;

pub const DEFAULT_CONTACT_ENDPOINT: &str = "https://formspree.io/f/xeoadwdn";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    pub profile: Profile,
    pub background: BackgroundConfig,
    pub contact: ContactConfig,
    pub feed: FeedConfig,
    pub nav: Vec<NavLink>,
    pub stats: Vec<Stat>,
    pub skills: Vec<Skill>,
    pub filters: Vec<FilterButton>,
    pub projects: Vec<Project>,
}

impl Default for SiteConfig {
    fn default() -> Self {
        let nav = [
            ("home", "Home"),
            ("about", "About"),
            ("skills", "Skills"),
            ("projects", "Projects"),
            ("blog", "Blog"),
            ("contact", "Contact"),
        ]
        .into_iter()
        .map(|(id, label)| NavLink {
            id: id.to_string(),
            label: label.to_string(),
        })
        .collect();

        Self {
            profile: Profile::default(),
            background: BackgroundConfig::default(),
            contact: ContactConfig::default(),
            feed: FeedConfig::default(),
            nav,
            stats: Vec::new(),
            skills: Vec::new(),
            filters: vec![FilterButton {
                value: FILTER_ALL.to_string(),
                label: "All".to_string(),
            }],
            projects: Vec::new(),
        }
    }
}

impl SiteConfig {
    /// Parse a site file. Missing sections and keys take their defaults.
    pub fn from_toml_str(contents: &str) -> Result<Self> {
        toml::from_str(contents).context("Failed to parse site configuration")
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Profile {
    pub name: String,
    pub role: String,
    /// Hero lead paragraph, typed out on first view.
    pub lead: String,
    pub about: String,
    /// Fallback address shown when the contact form fails.
    pub email: String,
    pub resume_url: String,
    pub github: Option<String>,
    pub linkedin: Option<String>,
}

impl Default for Profile {
    fn default() -> Self {
        Self {
            name: "Your Name".to_string(),
            role: "Software Engineer".to_string(),
            lead: "I build reliable software for the web.".to_string(),
            about: String::new(),
            email: "hello@example.com".to_string(),
            resume_url: "./resume.pdf".to_string(),
            github: None,
            linkedin: None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BackgroundConfig {
    pub interval_secs: u64,
    pub classes: Vec<String>,
}

impl BackgroundConfig {
    pub fn interval(&self) -> Duration {
        Duration::from_secs(self.interval_secs)
    }
}

impl Default for BackgroundConfig {
    fn default() -> Self {
        Self {
            interval_secs: DEFAULT_ROTATION_INTERVAL.as_secs(),
            classes: DEFAULT_BACKGROUNDS.iter().map(|s| s.to_string()).collect(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ContactConfig {
    pub endpoint: String,
    pub max_message_chars: usize,
}

impl Default for ContactConfig {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_CONTACT_ENDPOINT.to_string(),
            max_message_chars: DEFAULT_MAX_MESSAGE_CHARS,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FeedConfig {
    /// Medium handle without the leading `@`.
    pub username: String,
    pub proxy_url: String,
    pub posts_to_show: usize,
}

impl FeedConfig {
    pub fn profile_url(&self) -> String {
        feed::profile_url(&self.username)
    }
}

impl Default for FeedConfig {
    fn default() -> Self {
        Self {
            username: "sdgunaa".to_string(),
            proxy_url: DEFAULT_FEED_PROXY.to_string(),
            posts_to_show: DEFAULT_POSTS_TO_SHOW,
        }
    }
}

/// Navbar entry pointing at a page section.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NavLink {
    pub id: String,
    pub label: String,
}

impl NavLink {
    pub fn href(&self) -> String {
        format!("#{}", self.id)
    }
}

/// Headline number in the about section, e.g. `"50+"` projects.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Stat {
    pub value: String,
    pub label: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_file_uses_defaults() {
        let config = SiteConfig::from_toml_str("").unwrap();
        assert_eq!(config, SiteConfig::default());
        assert_eq!(config.background.interval(), Duration::from_secs(10));
        assert_eq!(config.background.classes.len(), 8);
        assert_eq!(config.contact.endpoint, DEFAULT_CONTACT_ENDPOINT);
        assert_eq!(config.feed.posts_to_show, 3);
        assert_eq!(config.filters[0].value, "all");
    }

    #[test]
    fn test_partial_sections_keep_other_defaults() {
        let config = SiteConfig::from_toml_str(
            r#"
            [profile]
            name = "Jane"

            [feed]
            username = "jane"

            [[skills]]
            name = "Rust"
            level = 90

            [[projects]]
            title = "folio"
            description = "This site"
            category = "web"
            "#,
        )
        .unwrap();

        assert_eq!(config.profile.name, "Jane");
        assert_eq!(config.profile.email, "hello@example.com");
        assert_eq!(config.feed.username, "jane");
        assert_eq!(config.feed.proxy_url, DEFAULT_FEED_PROXY);
        assert_eq!(config.feed.profile_url(), "https://medium.com/@jane");
        assert_eq!(config.skills, vec![Skill::new("Rust", 90)]);
        assert!(config.projects[0].tags.is_empty());
        assert_eq!(config.nav.len(), 6);
    }

    #[test]
    fn test_invalid_toml_has_context() {
        let err = SiteConfig::from_toml_str("profile = [").unwrap_err();
        assert!(format!("{:#}", err).contains("Failed to parse site configuration"));
    }

    #[test]
    fn test_nav_href() {
        let link = NavLink {
            id: "about".to_string(),
            label: "About".to_string(),
        };
        assert_eq!(link.href(), "#about");
    }
}
