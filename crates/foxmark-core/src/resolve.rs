//! Mapping a menu selection back to what should be opened.

use crate::choices::{bookmark_label, default_search_label, legacy_search_label};
use crate::{Bookmark, Config};
use url::form_urlencoded;

/// Placeholder for the query in a search URL template
pub const QUERY_PLACEHOLDER: &str = "%s";

/// What a selection refers to
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Resolution {
    /// The default search entry of a configured profile
    DefaultSearch { profile: String },
    /// A bookmark: its index in the loaded store and where it opens
    Bookmark { index: usize, target: LaunchTarget },
    /// Free text that matched nothing
    WebSearch { query: String },
}

/// URL and profile to hand to the browser launcher
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LaunchTarget {
    pub url: String,
    pub profile: String,
}

/// Resolve a selection, comparing case-insensitively and taking the first match
///
/// Default search entries are checked before bookmarks, so a bookmark whose
/// label equals a default search label can never be selected.
pub fn resolve(selection: &str, profiles: &[String], bookmarks: &[Bookmark]) -> Resolution {
    let wanted = selection.to_lowercase();

    for profile in profiles {
        if wanted == default_search_label(profile).to_lowercase()
            || wanted == legacy_search_label(profile).to_lowercase()
        {
            return Resolution::DefaultSearch {
                profile: profile.clone(),
            };
        }
    }

    if let Some((index, bookmark)) = bookmarks
        .iter()
        .enumerate()
        .find(|(_, b)| bookmark_label(b).to_lowercase() == wanted)
    {
        return Resolution::Bookmark {
            index,
            target: LaunchTarget {
                url: bookmark.url.clone(),
                profile: bookmark.profile.clone(),
            },
        };
    }

    Resolution::WebSearch {
        query: selection.to_string(),
    }
}

impl Resolution {
    /// Work out the URL and profile for this resolution
    pub fn target(&self, config: &Config) -> LaunchTarget {
        match self {
            Resolution::DefaultSearch { profile } => LaunchTarget {
                url: config.default_search_url.clone(),
                profile: profile.clone(),
            },
            Resolution::Bookmark { target, .. } => target.clone(),
            Resolution::WebSearch { query } => LaunchTarget {
                url: search_url(&config.search_url, query),
                profile: config.first_profile().to_string(),
            },
        }
    }
}

/// Build a search URL from a template and a free-text query
///
/// The query is form-encoded (spaces become `+`). It replaces the first `%s`
/// in the template, or is appended when the template has none.
pub fn search_url(template: &str, query: &str) -> String {
    let encoded: String = form_urlencoded::byte_serialize(query.as_bytes()).collect();

    if template.contains(QUERY_PLACEHOLDER) {
        template.replacen(QUERY_PLACEHOLDER, &encoded, 1)
    } else {
        format!("{}{}", template, encoded)
    }
}
