use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use foxmark_cli::commands;
use foxmark_core::Config;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "foxmark")]
#[command(author, version, about, long_about = None)]
#[command(
    about = "Open bookmarks and searches in Firefox containers from a rofi menu",
    long_about = "foxmark shows your saved bookmarks and a default search entry per container \
                  in a fuzzy menu, then opens the selection in the matching Firefox container. \
                  Text that matches no entry is sent to the configured search engine."
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Path to config.ini (defaults to config.ini next to the executable)
    #[arg(short, long, global = true, env = "FOXMARK_CONFIG", value_name = "FILE")]
    config: Option<PathBuf>,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Show the menu and open the selection (default)
    Open {
        /// Use this text as the selection instead of showing the menu
        #[arg(short, long, value_name = "TEXT")]
        select: Option<String>,

        /// Print the browser command instead of running it; the store is not modified
        #[arg(long)]
        dry_run: bool,
    },

    /// Print the menu entries
    List,

    /// Check the configuration for missing files and programs
    Check,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    init_logging(cli.verbose);

    let command = cli.command.unwrap_or(Commands::Open {
        select: None,
        dry_run: false,
    });

    let (config_path, config) = load_config(cli.config)?;

    match command {
        Commands::Open { select, dry_run } => commands::open::execute(&config, select, dry_run),
        Commands::List => commands::list::execute(&config),
        Commands::Check => commands::check::execute(&config_path, &config),
    }
}

/// Resolve the configuration path and load it
fn load_config(path: Option<PathBuf>) -> Result<(PathBuf, Config)> {
    let path = match path {
        Some(path) => path,
        None => foxmark_core::config::default_config_path()?,
    };

    let config = Config::from_file(&path)
        .with_context(|| format!("Failed to load configuration from {}", path.display()))?;

    Ok((path, config))
}

fn init_logging(verbose: bool) {
    use tracing_subscriber::EnvFilter;

    let filter = if verbose {
        EnvFilter::new("foxmark=debug,foxmark_cli=debug,foxmark_core=debug,foxmark_launch=debug")
    } else {
        EnvFilter::new("foxmark=info,foxmark_cli=info,foxmark_launch=info")
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .without_time()
        .with_writer(std::io::stderr)
        .init();
}
