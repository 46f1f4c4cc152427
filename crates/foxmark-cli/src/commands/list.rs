use anyhow::{Context, Result};
use foxmark_core::choices::build_choices;
use foxmark_core::{BookmarkStore, Config};

/// Print the menu entries, one per line, in menu order
pub fn execute(config: &Config) -> Result<()> {
    let store = BookmarkStore::new(&config.bookmarks_file);
    let bookmarks = store
        .load()
        .with_context(|| format!("Failed to load bookmarks from {}", store.path().display()))?;

    for choice in build_choices(&config.profiles, &bookmarks) {
        println!("{}", choice);
    }

    Ok(())
}
