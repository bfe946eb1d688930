//! mirrorsearch CLI
//!
//! Builds and queries the word indices of a mirrored wiki.
//!
//! # Examples
//!
//! ```bash
//! # Build indices from ./raw into ./indices
//! mirrorsearch build
//!
//! # Merge a second crawl into existing indices
//! mirrorsearch build --raw ./raw-2 --merge
//!
//! # Look up a word
//! mirrorsearch lookup 京都
//!
//! # Search the published site
//! mirrorsearch search Seoul --remote
//! ```

use clap::Parser;
use mirrorsearch::cli::output::print_error;
use mirrorsearch::cli::{run, Cli};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Logs go to stderr; stdout is for command output.
/// Set MIRRORSEARCH_LOG_JSON=1 for JSON log lines.
fn init_logging() {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| "mirrorsearch=info".into());
    let json = std::env::var("MIRRORSEARCH_LOG_JSON").is_ok_and(|v| v == "1");

    let registry = tracing_subscriber::registry().with(filter);
    if json {
        registry
            .with(tracing_subscriber::fmt::layer().json().with_writer(std::io::stderr))
            .init();
    } else {
        registry
            .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
            .init();
    }
}

#[tokio::main]
async fn main() {
    init_logging();

    let cli = Cli::parse();

    if let Err(e) = run(cli).await {
        print_error(&e.to_string());
        std::process::exit(1);
    }
}
