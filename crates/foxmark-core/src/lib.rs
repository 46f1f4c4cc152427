pub mod bookmarks;
pub mod choices;
pub mod config;
pub mod error;
pub mod resolve;
pub mod validate;

pub use bookmarks::{Bookmark, BookmarkStore};
pub use config::{Config, MenuOptions};
pub use error::{Error, Result};
pub use resolve::{LaunchTarget, Resolution};
