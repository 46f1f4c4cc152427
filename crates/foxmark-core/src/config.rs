//! Loading of the `config.ini` resource.
//!
//! The configuration is read once at startup into an immutable [`Config`]
//! which is then passed by reference to every component that needs it.
//!
//! ```ini
//! [Settings]
//! BOOKMARKS_FILE = ~/.config/foxmark/bookmarks.json
//! FIREFOX_EXECUTABLE = firefox
//! THEME_PATH = ~/.config/rofi/bookmarks.rasi
//! SEARCH_URL = https://duckduckgo.com/?q=
//! ROFI_CASE_INSENSITIVE = true
//! ROFI_MATCHING_MODE = fuzzy
//!
//! [Profiles]
//! PROFILES = work, personal
//! ```

use crate::{Error, Result};
use ini::Ini;
use std::path::{Path, PathBuf};

pub const CONFIG_FILE_NAME: &str = "config.ini";

const SETTINGS: &str = "Settings";
const PROFILES: &str = "Profiles";

const DEFAULT_MENU_PROGRAM: &str = "rofi";
const DEFAULT_MENU_PROMPT: &str = "Select Bookmark";
const DEFAULT_MATCHING_MODE: &str = "fuzzy";

/// Options forwarded to the menu program
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MenuOptions {
    pub program: String,
    pub prompt: String,
    pub theme_path: PathBuf,
    pub case_insensitive: bool,
    pub matching_mode: String,
}

/// Process-wide settings, read-only after startup
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub bookmarks_file: PathBuf,
    pub browser_executable: PathBuf,
    pub search_url: String,
    pub default_search_url: String,
    pub profiles: Vec<String>,
    pub menu: MenuOptions,
}

impl Config {
    /// Read and parse a configuration file
    pub fn from_file(path: &Path) -> Result<Self> {
        tracing::debug!("Reading configuration from: {}", path.display());

        let content = std::fs::read_to_string(path)?;
        Self::from_str(&content)
    }

    /// Parse configuration from INI text
    pub fn from_str(content: &str) -> Result<Self> {
        let ini = Ini::load_from_str(content)?;
        Self::from_ini(&ini)
    }

    fn from_ini(ini: &Ini) -> Result<Self> {
        let bookmarks_file = expand_home(required(ini, SETTINGS, "BOOKMARKS_FILE")?);
        let browser_executable = expand_home(required(ini, SETTINGS, "FIREFOX_EXECUTABLE")?);
        let theme_path = expand_home(required(ini, SETTINGS, "THEME_PATH")?);
        let search_url = required(ini, SETTINGS, "SEARCH_URL")?.to_string();
        let profiles = parse_profiles(required(ini, PROFILES, "PROFILES")?)?;

        let case_insensitive = match lookup(ini, SETTINGS, "ROFI_CASE_INSENSITIVE") {
            Some(value) => parse_bool("ROFI_CASE_INSENSITIVE", value)?,
            None => true,
        };

        let default_search_url = match lookup(ini, SETTINGS, "DEFAULT_SEARCH_URL") {
            Some(url) => url.trim().to_string(),
            None => derive_default_search_url(&search_url),
        };

        let menu = MenuOptions {
            program: optional(ini, "MENU_PROGRAM", DEFAULT_MENU_PROGRAM),
            prompt: optional(ini, "MENU_PROMPT", DEFAULT_MENU_PROMPT),
            theme_path,
            case_insensitive,
            matching_mode: optional(ini, "ROFI_MATCHING_MODE", DEFAULT_MATCHING_MODE),
        };

        tracing::debug!(
            "Loaded configuration with {} profile(s): {}",
            profiles.len(),
            profiles.join(", ")
        );

        Ok(Self {
            bookmarks_file,
            browser_executable,
            search_url,
            default_search_url,
            profiles,
            menu,
        })
    }

    /// Check whether a profile name is one of the configured profiles
    pub fn is_valid_profile(&self, profile: &str) -> bool {
        self.profiles.iter().any(|p| p == profile)
    }

    /// Profile used for free-text web searches
    pub fn first_profile(&self) -> &str {
        // parse_profiles rejects an empty list
        &self.profiles[0]
    }
}

/// `config.ini` next to the running executable
pub fn default_config_path() -> Result<PathBuf> {
    let exe = std::env::current_exe()?;
    let dir = exe
        .parent()
        .ok_or_else(|| Error::Config(format!("No parent directory for {}", exe.display())))?;
    Ok(dir.join(CONFIG_FILE_NAME))
}

/// Expand a leading `~` to the user's home directory
pub fn expand_home(value: &str) -> PathBuf {
    let value = value.trim();

    let rest = if value == "~" {
        Some("")
    } else {
        value.strip_prefix("~/")
    };

    match (rest, dirs::home_dir()) {
        (Some(rest), Some(home)) if rest.is_empty() => home,
        (Some(rest), Some(home)) => home.join(rest),
        _ => PathBuf::from(value),
    }
}

/// Look up a key in a section, ignoring the key's case
fn lookup<'a>(ini: &'a Ini, section: &str, key: &str) -> Option<&'a str> {
    ini.section(Some(section))?
        .iter()
        .find(|(k, _)| k.eq_ignore_ascii_case(key))
        .map(|(_, v)| v)
}

fn required<'a>(ini: &'a Ini, section: &str, key: &str) -> Result<&'a str> {
    lookup(ini, section, key).ok_or_else(|| Error::MissingKey {
        section: section.to_string(),
        key: key.to_string(),
    })
}

fn optional(ini: &Ini, key: &str, default: &str) -> String {
    lookup(ini, SETTINGS, key)
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
        .unwrap_or_else(|| default.to_string())
}

fn parse_profiles(value: &str) -> Result<Vec<String>> {
    let profiles: Vec<String> = value
        .split(',')
        .map(str::trim)
        .filter(|p| !p.is_empty())
        .map(String::from)
        .collect();

    if profiles.is_empty() {
        return Err(Error::Config(
            "PROFILES must name at least one profile".to_string(),
        ));
    }

    Ok(profiles)
}

fn parse_bool(key: &str, value: &str) -> Result<bool> {
    match value.trim().to_lowercase().as_str() {
        "1" | "yes" | "true" | "on" => Ok(true),
        "0" | "no" | "false" | "off" => Ok(false),
        _ => Err(Error::InvalidValue {
            key: key.to_string(),
            value: value.to_string(),
        }),
    }
}

/// Origin of the search template, e.g. `https://duckduckgo.com/`
fn derive_default_search_url(search_url: &str) -> String {
    match url::Url::parse(search_url) {
        Ok(parsed) if parsed.has_host() => format!("{}/", parsed.origin().ascii_serialization()),
        _ => search_url.to_string(),
    }
}
