//! Per-page word lists and the corpus vocabulary.

use std::collections::HashMap;

use crate::core::indexer::tokenizer;

/// Distinct words of one page with their occurrence counts.
///
/// Pairs are in order of first occurrence. Counts are informational
/// and play no part in lookups.
pub fn extract_words(text: &str) -> Vec<(String, usize)> {
    let mut positions: HashMap<&str, usize> = HashMap::new();
    let mut words: Vec<(String, usize)> = Vec::new();

    for word in tokenizer::tokenize(text) {
        match positions.get(word) {
            Some(&i) => words[i].1 += 1,
            None => {
                positions.insert(word, words.len());
                words.push((word.to_string(), 1));
            }
        }
    }

    words
}

/// Union of word lists across pages.
///
/// Built fresh for every index build; first-seen order is kept so
/// that builds over the same corpus are reproducible.
#[derive(Debug, Clone, Default)]
pub struct Vocabulary {
    order: Vec<String>,
    counts: HashMap<String, usize>,
}

impl Vocabulary {
    pub fn new() -> Self {
        Self::default()
    }

    /// Fold one page's `(word, count)` pairs in
    pub fn add_page_words(&mut self, words: &[(String, usize)]) {
        for (word, count) in words {
            match self.counts.get_mut(word) {
                Some(total) => *total += count,
                None => {
                    self.counts.insert(word.clone(), *count);
                    self.order.push(word.clone());
                }
            }
        }
    }

    /// Total occurrences of a word across added pages
    pub fn count(&self, word: &str) -> usize {
        self.counts.get(word).copied().unwrap_or(0)
    }

    /// Number of distinct words seen
    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    /// Words seen at least `min_occurrences` times, first-seen order
    pub fn words(&self, min_occurrences: usize) -> Vec<String> {
        self.order
            .iter()
            .filter(|w| self.count(w) >= min_occurrences)
            .cloned()
            .collect()
    }
}

impl<'a> FromIterator<&'a [(String, usize)]> for Vocabulary {
    fn from_iter<I: IntoIterator<Item = &'a [(String, usize)]>>(iter: I) -> Self {
        let mut vocabulary = Vocabulary::new();
        for words in iter {
            vocabulary.add_page_words(words);
        }
        vocabulary
    }
}
