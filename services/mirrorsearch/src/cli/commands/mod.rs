//! CLI command implementations
//!
//! Each command module handles argument parsing and execution for a specific CLI command.

pub mod build;
pub mod completions;
pub mod config;
pub mod extract;
pub mod lookup;
pub mod search;

// Re-export argument types for use in mod.rs
pub use build::BuildArgs;
pub use completions::CompletionsArgs;
pub use config::ConfigArgs;
pub use extract::ExtractArgs;
pub use lookup::LookupArgs;
pub use search::SearchArgs;
