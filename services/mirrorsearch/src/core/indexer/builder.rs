//! Inverted index construction.
//!
//! For every vocabulary word, each page where the word is one of the
//! tokens of some chunk gets one [`PageEntry`], taken at the first
//! matching chunk. The snippet is that chunk plus up to
//! `surrounding_radius` chunks on each side, joined by single spaces.
//!
//! Pages are scanned in parallel on the rayon pool. Each scan only
//! reads its own page and the shared vocabulary; the per-word indices
//! are assembled afterwards in one sequential pass, in corpus order.

use std::collections::{BTreeMap, HashMap, HashSet};

use rayon::prelude::*;

use crate::core::indexer::tokenizer;
use crate::core::types::{SkippedPage, WordIndex};

/// One page's plain text, ready for scanning
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageText {
    pub title: String,
    pub text: String,
}

impl PageText {
    pub fn new(title: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            text: text.into(),
        }
    }
}

/// Result of scanning a corpus
#[derive(Debug, Clone, Default)]
pub struct BuildOutput {
    /// One index per vocabulary word, including words no page matched
    pub indices: BTreeMap<String, WordIndex>,

    /// Pages that were scanned
    pub pages_indexed: usize,

    /// Pages with no text
    pub skipped: Vec<SkippedPage>,
}

/// Builds word indices from a vocabulary and a corpus
#[derive(Debug, Clone)]
pub struct IndexBuilder {
    surrounding_radius: usize,
}

impl Default for IndexBuilder {
    fn default() -> Self {
        Self::new(2)
    }
}

impl IndexBuilder {
    /// Create a builder keeping `surrounding_radius` chunks on each
    /// side of a match
    pub fn new(surrounding_radius: usize) -> Self {
        Self { surrounding_radius }
    }

    pub fn surrounding_radius(&self) -> usize {
        self.surrounding_radius
    }

    /// Build one index per vocabulary word over `pages`
    pub fn build(&self, vocabulary: &[String], pages: &[PageText]) -> BuildOutput {
        let wanted: HashSet<&str> = vocabulary.iter().map(String::as_str).collect();

        tracing::info!(
            "Scanning {} pages for {} vocabulary words",
            pages.len(),
            wanted.len()
        );

        let scans: Vec<Option<Vec<(&str, String)>>> = pages
            .par_iter()
            .map(|page| self.scan_page(page, &wanted))
            .collect();

        let mut indices: BTreeMap<String, WordIndex> = vocabulary
            .iter()
            .map(|word| (word.clone(), WordIndex::new(word.as_str())))
            .collect();
        let mut skipped = Vec::new();
        let mut pages_indexed = 0;

        for (page, scan) in pages.iter().zip(scans) {
            let Some(entries) = scan else {
                tracing::warn!("Skipping page '{}': empty text", page.title);
                skipped.push(SkippedPage {
                    name: page.title.clone(),
                    reason: "empty text".to_string(),
                });
                continue;
            };

            pages_indexed += 1;
            tracing::debug!("Page '{}' matched {} words", page.title, entries.len());

            for (word, surrounding) in entries {
                if let Some(index) = indices.get_mut(word) {
                    index.add_entry(page.title.as_str(), surrounding);
                }
            }
        }

        BuildOutput {
            indices,
            pages_indexed,
            skipped,
        }
    }

    /// Matches of vocabulary words in one page, with their snippets.
    ///
    /// Returns `None` when the page has no text at all.
    fn scan_page<'v>(
        &self,
        page: &PageText,
        wanted: &HashSet<&'v str>,
    ) -> Option<Vec<(&'v str, String)>> {
        if page.text.trim().is_empty() {
            return None;
        }

        let chunks: Vec<&str> = tokenizer::split_chunks(&page.text).collect();

        // First chunk position of each vocabulary word on this page
        let mut first_seen: HashMap<&'v str, usize> = HashMap::new();
        for (position, chunk) in chunks.iter().enumerate() {
            for token in tokenizer::tokens_in_chunk(chunk) {
                if let Some(&word) = wanted.get(token) {
                    first_seen.entry(word).or_insert(position);
                }
            }
        }

        let entries = first_seen
            .into_iter()
            .map(|(word, position)| (word, self.surrounding(&chunks, position)))
            .collect();

        Some(entries)
    }

    /// Chunks around `position`, joined by single spaces
    pub fn surrounding(&self, chunks: &[&str], position: usize) -> String {
        let start = position.saturating_sub(self.surrounding_radius);
        let end = position
            .saturating_add(self.surrounding_radius)
            .saturating_add(1)
            .min(chunks.len());
        chunks[start..end].join(" ")
    }
}
