//! Behaviour behind the folio portfolio page.
//!
//! Everything here is independent of the browser: the web front end feeds
//! scroll offsets, element bounds and fetched payloads in, and renders what
//! comes out. That keeps every rule testable on the host.

pub mod background;
pub mod config;
pub mod contact;
pub mod counter;
pub mod error;
pub mod feed;
pub mod hero;
pub mod navigation;
pub mod projects;
pub mod reveal;
pub mod skills;
pub mod theme;

pub use error::{Error, Result};
