//! Core data types for mirrorsearch.
//!
//! Raw page records come from the crawler, word indices are what
//! the builder produces and the store persists, and the query
//! types are what the client hands back to a renderer.

use serde::{Deserialize, Serialize};

/// A mirrored page as written by the crawler.
///
/// Only `title` and `text` matter to indexing. The optional fields
/// default to empty so metadata written by older crawls still loads.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawPage {
    pub title: String,

    #[serde(default)]
    pub namespace: i32,

    /// Last revision time in milliseconds since the epoch
    #[serde(default)]
    pub timestamp: i64,

    /// Page body (HTML as fetched, or plain text)
    #[serde(default, skip_serializing)]
    pub text: String,

    #[serde(default)]
    pub categories: Vec<String>,

    /// Category members, only set for category pages
    #[serde(default)]
    pub members: Vec<String>,

    /// Image file path, only set for file pages
    #[serde(default)]
    pub file: Option<String>,
}

impl RawPage {
    /// Create a page in the main namespace with no metadata
    pub fn new(title: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            namespace: 0,
            timestamp: 0,
            text: text.into(),
            categories: Vec::new(),
            members: Vec::new(),
            file: None,
        }
    }
}

/// One page's context for one word
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageEntry {
    pub title: String,
    pub surrounding: String,
}

impl PageEntry {
    pub fn new(title: impl Into<String>, surrounding: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            surrounding: surrounding.into(),
        }
    }
}

/// All occurrences of one word across the corpus.
///
/// `pages` holds at most one entry per title. Use
/// [`WordIndex::add_entry`] and [`WordIndex::merge`] to keep that
/// invariant; both live in `core::indexer::merge`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WordIndex {
    pub word: String,
    #[serde(default)]
    pub pages: Vec<PageEntry>,
}

impl WordIndex {
    /// Create an index with no pages
    pub fn new(word: impl Into<String>) -> Self {
        Self {
            word: word.into(),
            pages: Vec::new(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.pages.is_empty()
    }

    /// Titles in entry order
    pub fn titles(&self) -> impl Iterator<Item = &str> {
        self.pages.iter().map(|p| p.title.as_str())
    }

    /// Find the entry for a title
    pub fn entry(&self, title: &str) -> Option<&PageEntry> {
        self.pages.iter().find(|p| p.title == title)
    }
}

/// Wire contract returned to the query client.
///
/// Same shape as a stored word index file.
pub type QueryResult = WordIndex;

/// A page that was left out of an index build
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SkippedPage {
    /// Page title, or the raw file stem when the metadata was unreadable
    pub name: String,
    pub reason: String,
}

/// Statistics from an index build
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct BuildReport {
    /// Pages offered to the build
    pub pages_total: usize,

    /// Pages that contributed entries
    pub pages_indexed: usize,

    /// Pages skipped, with the reason
    pub skipped: Vec<SkippedPage>,

    /// Distinct words selected for indexing
    pub vocabulary_size: usize,

    /// Word index files written
    pub indices_written: usize,

    /// Build duration in milliseconds
    pub duration_ms: u64,
}

/// Exact page title match found by the title lookup
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TitleMatch {
    pub title: String,
    pub url: String,
}

/// One rendered word lookup result
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResultEntry {
    pub title: String,
    pub url: String,
    /// Raw surrounding text from the index
    pub surrounding: String,
    /// Surrounding text with the first occurrence of the query marked
    pub highlighted: String,
}

/// Combined outcome of both query channels
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchOutcome {
    pub query: String,
    pub title_match: Option<TitleMatch>,
    pub results: Vec<ResultEntry>,
}
