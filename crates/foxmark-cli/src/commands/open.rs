//! The default command: pick an entry from the menu and open it.
//!
//! ```bash
//! # Show the menu
//! foxmark
//!
//! # Skip the menu and resolve a label directly
//! foxmark open --select "Example (work) - 3"
//!
//! # Print the browser command instead of running it
//! foxmark open --select "rust traits" --dry-run
//! ```

use anyhow::{Context, Result};
use foxmark_core::choices::build_choices;
use foxmark_core::resolve::resolve;
use foxmark_core::{BookmarkStore, Config, LaunchTarget, Resolution};
use foxmark_launch::{BrowserLauncher, DetachedSpawner, MenuPicker, RofiMenu, Spawn};
use std::path::Path;

use super::check::print_warnings;

/// What a run ended with
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// The menu was closed without a selection
    Cancelled,
    /// The browser was asked to open the target
    Opened(LaunchTarget),
    /// The target's profile is not configured; nothing was launched
    Rejected(LaunchTarget),
}

/// A picker that returns a fixed selection without showing a menu
pub struct FixedSelection(pub String);

impl MenuPicker for FixedSelection {
    fn pick(&self, _choices: &[String]) -> foxmark_launch::Result<Option<String>> {
        let selection = self.0.trim();
        if selection.is_empty() {
            Ok(None)
        } else {
            Ok(Some(selection.to_string()))
        }
    }
}

/// Prints the browser command line instead of running it
pub struct PrintSpawner;

impl Spawn for PrintSpawner {
    fn spawn(&self, program: &Path, args: &[String]) -> foxmark_launch::Result<()> {
        println!("{} {}", program.display(), args.join(" "));
        Ok(())
    }
}

pub fn execute(config: &Config, select: Option<String>, dry_run: bool) -> Result<()> {
    print_warnings(&foxmark_core::validate::validate(config));

    let menu: Box<dyn MenuPicker> = match select {
        Some(text) => Box::new(FixedSelection(text)),
        None => Box::new(RofiMenu::new(config.menu.clone())),
    };
    let spawner: Box<dyn Spawn> = if dry_run {
        Box::new(PrintSpawner)
    } else {
        Box::new(DetachedSpawner)
    };
    let launcher = BrowserLauncher::with_spawner(
        config.browser_executable.clone(),
        config.profiles.clone(),
        spawner,
    );

    let outcome = run(config, menu.as_ref(), &launcher, !dry_run)?;

    tracing::debug!("Run finished: {:?}", outcome);
    Ok(())
}

/// Load the store, ask the picker, resolve the selection and launch it
///
/// A selected bookmark has its count incremented and the store rewritten
/// before the browser is launched, unless `persist` is false.
pub fn run<M, S>(
    config: &Config,
    menu: &M,
    launcher: &BrowserLauncher<S>,
    persist: bool,
) -> Result<Outcome>
where
    M: MenuPicker + ?Sized,
    S: Spawn,
{
    let store = BookmarkStore::new(&config.bookmarks_file);
    let mut bookmarks = store
        .load()
        .with_context(|| format!("Failed to load bookmarks from {}", store.path().display()))?;

    let choices = build_choices(&config.profiles, &bookmarks);
    let Some(selection) = menu.pick(&choices)? else {
        return Ok(Outcome::Cancelled);
    };

    let resolution = resolve(&selection, &config.profiles, &bookmarks);
    tracing::debug!("Resolved '{}' to {:?}", selection, resolution);

    let target = resolution.target(config);

    if let Resolution::Bookmark { index, .. } = resolution {
        bookmarks[index].increment();
        if persist {
            store.save(&bookmarks).with_context(|| {
                format!("Failed to save bookmarks to {}", store.path().display())
            })?;
        }
    }

    match launcher.open(&target.url, &target.profile) {
        Ok(()) => Ok(Outcome::Opened(target)),
        Err(foxmark_launch::Error::InvalidProfile(profile)) => {
            println!("Profile '{}' is invalid.", profile);
            Ok(Outcome::Rejected(target))
        }
        Err(e) => Err(e.into()),
    }
}
