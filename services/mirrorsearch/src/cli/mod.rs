//! CLI adapter for mirrorsearch
//!
//! Builds word indices from a mirror's raw pages and queries them.
//! Depends on `core/` only.

pub mod commands;
pub mod output;

use clap::{Parser, Subcommand};

/// mirrorsearch - word index builder and search for wiki mirrors
///
/// Builds one JSON index file per word from the raw pages of a
/// mirrored wiki, and looks search strings up as page titles and
/// index words.
#[derive(Parser, Debug)]
#[command(name = "mirrorsearch")]
#[command(version)]
#[command(about = "Word index builder and search for wiki mirrors", long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Output format
    #[arg(long, global = true, default_value = "human")]
    pub format: OutputFormat,

    #[command(subcommand)]
    pub command: Commands,
}

/// Output format for CLI commands
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    /// Human-readable output (default)
    #[default]
    Human,
    /// JSON output for scripting
    Json,
}

/// Available CLI commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Build word indices from the raw page directory
    Build(commands::BuildArgs),

    /// Print the words extracted from one raw page
    Extract(commands::ExtractArgs),

    /// Print the stored index for a word
    Lookup(commands::LookupArgs),

    /// Search by page title and by word
    Search(commands::SearchArgs),

    /// Show current configuration
    #[command(name = "show-config")]
    ShowConfig(commands::ConfigArgs),

    /// Generate shell completion scripts
    ///
    /// Output completion script to stdout. To install:
    ///
    ///   bash:  mirrorsearch completions bash > ~/.local/share/bash-completion/completions/mirrorsearch
    ///   zsh:   mirrorsearch completions zsh > ~/.zfunc/_mirrorsearch
    ///   fish:  mirrorsearch completions fish > ~/.config/fish/completions/mirrorsearch.fish
    Completions(commands::CompletionsArgs),
}

/// Run the CLI with the provided arguments
pub async fn run(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    use crate::core::config::Config;
    use crate::core::services::Services;
    use crate::core::xdg::XdgDirs;
    use std::sync::Arc;

    // Handle completions command early (doesn't need services)
    if let Commands::Completions(args) = cli.command {
        return commands::completions::execute(args);
    }

    let xdg = XdgDirs::new();
    xdg.log_paths();

    // Load configuration
    let config = Config::load_with_xdg(&xdg)?;

    // Create services
    let services = Arc::new(Services::new(config));

    // Execute command
    match cli.command {
        Commands::Build(args) => commands::build::execute(args, &services, cli.format).await,
        Commands::Extract(args) => commands::extract::execute(args, &services, cli.format).await,
        Commands::Lookup(args) => commands::lookup::execute(args, &services, cli.format).await,
        Commands::Search(args) => commands::search::execute(args, &services, cli.format).await,
        Commands::ShowConfig(args) => commands::config::execute(args, &services, cli.format).await,
        Commands::Completions(_) => unreachable!(), // Handled above
    }
}
