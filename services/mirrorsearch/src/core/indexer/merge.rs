//! Combining word indices.
//!
//! Two entries for the same title always collapse into one. Their
//! snippets are concatenated with [`SURROUNDING_SEP`], identical
//! snippets are collapsed, and the result keeps at most the first
//! and the last snippet so repeated merges stay short.
//!
//! Snippets are joined chunks, and `.` is a chunk delimiter, so the
//! separator never occurs inside a single snippet.

use std::collections::BTreeMap;

use crate::core::types::{PageEntry, WordIndex};

/// Separator between snippets of one combined entry
pub const SURROUNDING_SEP: &str = " ... ";

/// Combine two snippets for the same page
pub fn combine_surrounding(first: &str, second: &str) -> String {
    let mut segments: Vec<&str> = Vec::new();
    for segment in first
        .split(SURROUNDING_SEP)
        .chain(second.split(SURROUNDING_SEP))
    {
        if !segment.is_empty() && !segments.contains(&segment) {
            segments.push(segment);
        }
    }

    if segments.len() > 2 {
        let last = segments[segments.len() - 1];
        segments.truncate(1);
        segments.push(last);
    }

    segments.join(SURROUNDING_SEP)
}

impl PageEntry {
    /// Fold another entry for the same title into this one
    pub fn absorb(&mut self, other: &PageEntry) {
        debug_assert_eq!(self.title, other.title);
        self.surrounding = combine_surrounding(&self.surrounding, &other.surrounding);
    }
}

impl WordIndex {
    /// Add an entry, combining with an existing entry for the title
    pub fn add_entry(&mut self, title: impl Into<String>, surrounding: impl Into<String>) {
        let entry = PageEntry::new(title, surrounding);
        match self.pages.iter_mut().find(|p| p.title == entry.title) {
            Some(existing) => existing.absorb(&entry),
            None => self.pages.push(entry),
        }
    }

    /// Merge another index for the same word.
    ///
    /// The result holds the union of both title sets with one entry
    /// per title, even when either side repeats a title. Entries keep
    /// this index's order, followed by titles only present in `other`.
    pub fn merge(self, other: WordIndex) -> WordIndex {
        debug_assert_eq!(self.word, other.word);
        let mut merged = WordIndex::new(self.word);
        for entry in self.pages.into_iter().chain(other.pages) {
            merged.add_entry(entry.title, entry.surrounding);
        }
        merged
    }
}

/// Fold shard outputs into one map of word indices
pub fn merge_shards<I>(shards: I) -> BTreeMap<String, WordIndex>
where
    I: IntoIterator<Item = BTreeMap<String, WordIndex>>,
{
    let mut merged: BTreeMap<String, WordIndex> = BTreeMap::new();
    for shard in shards {
        for (word, index) in shard {
            let combined = match merged.remove(&word) {
                Some(existing) => existing.merge(index),
                None => index,
            };
            merged.insert(word, combined);
        }
    }
    merged
}
