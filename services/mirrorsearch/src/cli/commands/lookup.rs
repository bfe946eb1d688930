//! Lookup command - print the stored index for a word

use crate::cli::output::{colors, highlight_snippet};
use crate::cli::OutputFormat;
use crate::core::services::Services;
use crate::core::types::WordIndex;
use clap::Args;
use std::sync::Arc;

/// Arguments for the lookup command
#[derive(Args, Debug)]
pub struct LookupArgs {
    /// Word to look up (exact, case-sensitive)
    pub word: String,
}

/// Execute the lookup command
///
/// A word without an index prints an empty result; it is not an
/// error.
pub async fn execute(
    args: LookupArgs,
    services: &Arc<Services>,
    format: OutputFormat,
) -> Result<(), Box<dyn std::error::Error>> {
    let index = match services.indices.load(&args.word) {
        Ok(found) => found,
        Err(e) if e.is_bad_request() => None,
        Err(e) => return Err(e.into()),
    };
    let index = index.unwrap_or_else(|| WordIndex::new(args.word.as_str()));

    match format {
        OutputFormat::Human => {
            if index.is_empty() {
                println!("No pages contain '{}'", args.word);
                return Ok(());
            }

            println!(
                "'{}' appears on {} pages:\n",
                colors::label(&index.word),
                colors::number(&index.pages.len().to_string())
            );
            for entry in &index.pages {
                println!("{}", colors::title(&entry.title));
                println!("  {}", highlight_snippet(&entry.surrounding, &index.word));
            }
        }
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&index)?);
        }
    }

    Ok(())
}
