mod store;
mod types;

pub use store::BookmarkStore;
pub use types::Bookmark;
