pub mod about;
pub mod back_to_top;
pub mod background;
pub mod blog;
pub mod contact;
pub mod footer;
pub mod hero;
pub mod navbar;
pub mod projects;
pub mod reveal;
pub mod skills;
pub mod theme_toggle;
