//! Build command - build word indices from raw pages

use crate::cli::output::{colors, format_duration, print_warning};
use crate::cli::OutputFormat;
use crate::core::indexer::IndexingPipeline;
use crate::core::services::Services;
use crate::core::storage::{IndexStore, RawPageStore};
use crate::core::types::SkippedPage;
use clap::Args;
use serde::Serialize;
use std::path::PathBuf;
use std::sync::Arc;

/// Arguments for the build command
#[derive(Args, Debug)]
pub struct BuildArgs {
    /// Raw page directory (defaults to paths.raw_dir)
    #[arg(long)]
    pub raw: Option<PathBuf>,

    /// Index output directory (defaults to paths.indices_dir)
    #[arg(long)]
    pub out: Option<PathBuf>,

    /// Merge into existing indices instead of replacing them
    #[arg(long, short = 'm')]
    pub merge: bool,

    /// Suppress progress output
    #[arg(long, short = 'q')]
    pub quiet: bool,
}

/// Build result response
#[derive(Debug, Serialize)]
pub struct BuildResponse {
    pub raw_dir: String,
    pub indices_dir: String,
    pub merged: bool,
    pub pages_total: usize,
    pub pages_indexed: usize,
    pub vocabulary_size: usize,
    pub indices_written: usize,
    pub skipped: Vec<SkippedPage>,
    pub duration_secs: f64,
}

/// Execute the build command
pub async fn execute(
    args: BuildArgs,
    services: &Arc<Services>,
    format: OutputFormat,
) -> Result<(), Box<dyn std::error::Error>> {
    let raw = match &args.raw {
        Some(dir) => RawPageStore::new(dir.clone()),
        None => RawPageStore::clone(&services.raw),
    };
    let indices = match &args.out {
        Some(dir) => IndexStore::new(dir.clone()),
        None => IndexStore::clone(&services.indices),
    };

    if !raw.root().is_dir() {
        return Err(format!(
            "Raw page directory '{}' not found. Set paths.raw_dir or pass --raw.",
            raw.root().display()
        )
        .into());
    }

    services.config.log_config();

    if !args.quiet && format == OutputFormat::Human {
        eprintln!(
            "{} {} into {}...",
            if args.merge { "Merging" } else { "Building" },
            colors::file_path(&raw.root().display().to_string()),
            colors::file_path(&indices.root().display().to_string())
        );
    }

    let pipeline = IndexingPipeline::with_stores(&services.config, raw, indices)?;
    let report = pipeline.run(args.merge)?;

    let response = BuildResponse {
        raw_dir: pipeline.raw_store().root().display().to_string(),
        indices_dir: pipeline.index_store().root().display().to_string(),
        merged: args.merge,
        pages_total: report.pages_total,
        pages_indexed: report.pages_indexed,
        vocabulary_size: report.vocabulary_size,
        indices_written: report.indices_written,
        skipped: report.skipped,
        duration_secs: report.duration_ms as f64 / 1000.0,
    };

    match format {
        OutputFormat::Human => {
            for skipped in &response.skipped {
                print_warning(&format!("skipped '{}': {}", skipped.name, skipped.reason));
            }
            println!(
                "{} {} of {} pages ({} words, {} index files) in {}",
                colors::success("Indexed"),
                colors::number(&response.pages_indexed.to_string()),
                colors::number(&response.pages_total.to_string()),
                colors::number(&response.vocabulary_size.to_string()),
                colors::number(&response.indices_written.to_string()),
                colors::number(&format_duration(response.duration_secs))
            );
        }
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&response)?);
        }
    }

    Ok(())
}
