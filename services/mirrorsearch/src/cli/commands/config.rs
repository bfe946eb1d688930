//! Config command - show current configuration

use crate::cli::OutputFormat;
use crate::core::config::Config;
use crate::core::services::Services;
use crate::core::xdg::XdgDirs;
use clap::Args;
use serde::Serialize;
use std::sync::Arc;

/// Arguments for the config command
#[derive(Args, Debug)]
pub struct ConfigArgs {}

/// Configuration response
#[derive(Debug, Serialize)]
pub struct ConfigResponse {
    pub config_file: String,
    #[serde(flatten)]
    pub config: Config,
}

/// Execute the config command
pub async fn execute(
    _args: ConfigArgs,
    services: &Arc<Services>,
    format: OutputFormat,
) -> Result<(), Box<dyn std::error::Error>> {
    let xdg = XdgDirs::new();
    let response = ConfigResponse {
        config_file: xdg.config_file().to_string_lossy().into_owned(),
        config: Config::clone(&services.config),
    };
    let config = &response.config;

    match format {
        OutputFormat::Human => {
            println!("Configuration:");
            println!("  config_file: {}", response.config_file);
            println!("  paths:");
            println!("    raw_dir: {}", config.paths.raw_dir.display());
            println!("    indices_dir: {}", config.paths.indices_dir.display());
            println!("    pages_dir: {}", config.paths.pages_dir.display());
            println!("  indexing:");
            println!(
                "    surrounding_radius: {}",
                config.indexing.surrounding_radius
            );
            println!("    min_occurrences: {}", config.indexing.min_occurrences);
            println!(
                "    content_selector: {}",
                config.content_selector().unwrap_or("(none)")
            );
            println!("  site:");
            println!("    pages_base_url: {}", config.site.pages_base_url);
            println!("    indices_base_url: {}", config.site.indices_base_url);
            println!("    page_extension: {}", config.site.page_extension);
            println!("  query:");
            println!("    timeout_ms: {}", config.query.timeout_ms);
            println!("    highlight_open: {}", config.query.highlight_open);
            println!("    highlight_close: {}", config.query.highlight_close);
        }
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&response)?);
        }
    }

    Ok(())
}
