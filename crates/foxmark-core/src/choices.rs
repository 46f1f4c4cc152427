//! Menu labels for default searches and bookmarks.
//!
//! Labels are the only link between what the menu shows and what the
//! resolver matches, so both sides build them through these functions.

use crate::Bookmark;

/// Label of the always-present search entry for a profile
pub fn default_search_label(profile: &str) -> String {
    format!("default search ({})", profile)
}

/// Label used by earlier releases for the default search entry
pub fn legacy_search_label(profile: &str) -> String {
    format!("Google ({})", profile)
}

/// Label of a bookmark, including its current use count
pub fn bookmark_label(bookmark: &Bookmark) -> String {
    format!(
        "{} ({}) - {}",
        bookmark.display_name, bookmark.profile, bookmark.count
    )
}

/// All menu entries: one default search per profile, then every bookmark
pub fn build_choices(profiles: &[String], bookmarks: &[Bookmark]) -> Vec<String> {
    profiles
        .iter()
        .map(|p| default_search_label(p))
        .chain(bookmarks.iter().map(bookmark_label))
        .collect()
}
