use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// A saved bookmark as stored in the JSON file
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Bookmark {
    #[serde(rename = "Display Name")]
    pub display_name: String,

    #[serde(rename = "Profile")]
    pub profile: String,

    #[serde(rename = "URL")]
    pub url: String,

    /// Number of times the bookmark was opened; absent in older stores
    #[serde(rename = "Count", default)]
    pub count: u64,

    /// Fields written by other tools, kept so a rewrite does not drop them
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Bookmark {
    pub fn new(
        display_name: impl Into<String>,
        profile: impl Into<String>,
        url: impl Into<String>,
        count: u64,
    ) -> Self {
        Self {
            display_name: display_name.into(),
            profile: profile.into(),
            url: url.into(),
            count,
            extra: Map::new(),
        }
    }

    /// Record one more use of this bookmark
    pub fn increment(&mut self) {
        self.count = self.count.saturating_add(1);
    }
}
