//! Extract command - show the words of one raw page

use crate::cli::output::{colors, format_relative_time, print_header};
use crate::cli::OutputFormat;
use crate::core::indexer::{extract_words, ContentExtractor};
use crate::core::services::Services;
use clap::Args;
use serde::Serialize;
use std::sync::Arc;

/// Arguments for the extract command
#[derive(Args, Debug)]
pub struct ExtractArgs {
    /// Page title (spaces or underscores)
    pub title: String,

    /// Only show the first N words
    #[arg(long, short = 'n')]
    pub limit: Option<usize>,
}

/// One extracted word
#[derive(Debug, Serialize)]
pub struct WordCount {
    pub word: String,
    pub count: usize,
}

/// Extract response
#[derive(Debug, Serialize)]
pub struct ExtractResponse {
    pub title: String,
    pub namespace: i32,
    pub categories: Vec<String>,
    pub distinct_words: usize,
    pub words: Vec<WordCount>,
}

/// Execute the extract command
pub async fn execute(
    args: ExtractArgs,
    services: &Arc<Services>,
    format: OutputFormat,
) -> Result<(), Box<dyn std::error::Error>> {
    let page = services.raw.load(&args.title).map_err(|e| {
        if e.is_not_found() {
            format!(
                "Page '{}' not found in {}",
                args.title,
                services.raw.root().display()
            )
        } else {
            e.to_string()
        }
    })?;

    let content = ContentExtractor::new(services.config.content_selector())?;
    let words = extract_words(&content.extract(&page.text));
    let distinct_words = words.len();

    let limit = args.limit.unwrap_or(distinct_words);
    let response = ExtractResponse {
        title: page.title.clone(),
        namespace: page.namespace,
        categories: page.categories.clone(),
        distinct_words,
        words: words
            .into_iter()
            .take(limit)
            .map(|(word, count)| WordCount { word, count })
            .collect(),
    };

    match format {
        OutputFormat::Human => {
            print_header(&response.title);
            if let Some(edited) = chrono::DateTime::from_timestamp_millis(page.timestamp)
                .filter(|_| page.timestamp > 0)
            {
                println!(
                    "  {} {} ({})",
                    colors::dim("edited"),
                    edited.format("%Y-%m-%d %H:%M"),
                    format_relative_time(&edited)
                );
            }
            if !response.categories.is_empty() {
                println!(
                    "  {} {}",
                    colors::dim("categories"),
                    response.categories.join(", ")
                );
            }
            println!(
                "  {} distinct words",
                colors::number(&response.distinct_words.to_string())
            );
            println!();
            for entry in &response.words {
                println!(
                    "{:>6}  {}",
                    colors::number(&entry.count.to_string()),
                    entry.word
                );
            }
        }
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&response)?);
        }
    }

    Ok(())
}
