//! Search command - look a string up as a page title and as a word

use crate::cli::output::{colors, highlight_snippet};
use crate::cli::OutputFormat;
use crate::core::search::{render_html, QueryEvent};
use crate::core::services::Services;
use crate::core::types::ResultEntry;
use clap::Args;
use std::sync::Arc;

/// Arguments for the search command
#[derive(Args, Debug)]
pub struct SearchArgs {
    /// Search string (exact page title or exact word)
    pub query: String,

    /// Query the published site instead of the local directories
    #[arg(long, short = 'r')]
    pub remote: bool,

    /// Print the results page HTML fragment
    #[arg(long)]
    pub html: bool,
}

/// Execute the search command
pub async fn execute(
    args: SearchArgs,
    services: &Arc<Services>,
    format: OutputFormat,
) -> Result<(), Box<dyn std::error::Error>> {
    let client = services.create_query_client(args.remote)?;

    if args.html {
        let outcome = client.search(&args.query).await;
        print!("{}", render_html(&outcome));
        return Ok(());
    }

    match format {
        OutputFormat::Human => {
            // Print each channel as soon as it resolves
            let mut handle = client.search_events(&args.query);
            let mut found = false;

            while let Some(event) = handle.next().await {
                found = true;
                match event {
                    QueryEvent::TitleMatch(title_match) => {
                        println!(
                            "{} {}  {}",
                            colors::label("Title match:"),
                            colors::title(&title_match.title),
                            colors::file_path(&title_match.url)
                        );
                    }
                    QueryEvent::Results(results) => print_results(&args.query, &results),
                }
            }

            if !found {
                println!("No results for '{}'", args.query);
            }
        }
        OutputFormat::Json => {
            let outcome = client.search(&args.query).await;
            println!("{}", serde_json::to_string_pretty(&outcome)?);
        }
    }

    Ok(())
}

fn print_results(query: &str, results: &[ResultEntry]) {
    println!(
        "{} pages contain '{}':\n",
        colors::number(&results.len().to_string()),
        colors::label(query)
    );
    for entry in results {
        println!(
            "{}  {}",
            colors::title(&entry.title),
            colors::dim(&entry.url)
        );
        println!("  {}", highlight_snippet(&entry.surrounding, query));
    }
}
