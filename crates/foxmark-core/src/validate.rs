use crate::Config;
use std::fmt;
use std::path::{Path, PathBuf};

/// A non-fatal problem found in the configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Warning {
    MissingStore(PathBuf),
    BrowserNotFound(PathBuf),
    MissingTheme(PathBuf),
    MenuProgramNotFound(String),
}

impl fmt::Display for Warning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Warning::MissingStore(path) => write!(
                f,
                "Bookmark file not found at {}; it will be created when a bookmark is opened",
                path.display()
            ),
            Warning::BrowserNotFound(path) => write!(
                f,
                "Browser executable '{}' not found or not executable",
                path.display()
            ),
            Warning::MissingTheme(path) => {
                write!(f, "Menu theme not found at {}", path.display())
            }
            Warning::MenuProgramNotFound(program) => {
                write!(f, "Menu program '{}' not found on PATH", program)
            }
        }
    }
}

/// Check that the files and programs named by the configuration exist
pub fn validate(config: &Config) -> Vec<Warning> {
    let mut warnings = Vec::new();

    if !config.bookmarks_file.exists() {
        warnings.push(Warning::MissingStore(config.bookmarks_file.clone()));
    }

    if !is_resolvable(&config.browser_executable) {
        warnings.push(Warning::BrowserNotFound(config.browser_executable.clone()));
    }

    if !config.menu.theme_path.exists() {
        warnings.push(Warning::MissingTheme(config.menu.theme_path.clone()));
    }

    if !is_resolvable(Path::new(&config.menu.program)) {
        warnings.push(Warning::MenuProgramNotFound(config.menu.program.clone()));
    }

    for warning in &warnings {
        tracing::debug!("Validation: {}", warning);
    }

    warnings
}

fn is_resolvable(program: &Path) -> bool {
    which::which(program).is_ok()
}
