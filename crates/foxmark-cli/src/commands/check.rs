use anyhow::Result;
use console::style;
use foxmark_core::validate::{Warning, validate};
use foxmark_core::{BookmarkStore, Config};
use std::path::Path;

/// Print each validation warning on its own line
pub fn print_warnings(warnings: &[Warning]) {
    for warning in warnings {
        println!("Warning: {}", warning);
    }
}

/// Validate the configuration and summarize what was loaded
pub fn execute(config_path: &Path, config: &Config) -> Result<()> {
    println!(
        "{}",
        style(format!("Configuration: {}", config_path.display()))
            .bold()
            .cyan()
    );
    println!("  Bookmarks:  {}", config.bookmarks_file.display());
    println!("  Browser:    {}", config.browser_executable.display());
    println!("  Theme:      {}", config.menu.theme_path.display());
    println!("  Search URL: {}", config.search_url);
    println!("  Profiles:   {}", config.profiles.join(", "));
    println!();

    let warnings = validate(config);
    if warnings.is_empty() {
        println!("{} Configuration OK", style("✓").green());
    } else {
        print_warnings(&warnings);
    }

    // A malformed store is reported here rather than failing the check
    match BookmarkStore::new(&config.bookmarks_file).load() {
        Ok(bookmarks) => println!("{} bookmark(s) loaded", bookmarks.len()),
        Err(e) => println!("Warning: {}", e),
    }

    Ok(())
}
