//! Query side of the mirror.
//!
//! The client looks a search string up both as a page title and as
//! an index word; `highlight` marks the query in result snippets.

pub mod client;
pub mod highlight;

pub use client::{
    DirectorySource, HttpSource, LookupSource, QueryClient, QueryEvent, SearchHandle,
};
pub use highlight::{escape_html, highlight, render_html};
