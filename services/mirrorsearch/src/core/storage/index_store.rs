//! Word index files.
//!
//! One pretty-printed JSON file per word, `<indices_dir>/<word>.json`,
//! served as-is to the query client. A rebuild replaces the whole
//! directory's contents; nothing edits a stored file in place except
//! [`IndexStore::save_merged`], which rewrites it whole.

use std::collections::{BTreeMap, HashSet};
use std::fs;
use std::path::{Path, PathBuf};

use rayon::prelude::*;

use crate::core::error::{MirrorError, Result};
use crate::core::types::WordIndex;

const INDEX_EXTENSION: &str = "json";

/// Directory of word index files
#[derive(Debug, Clone)]
pub struct IndexStore {
    root: PathBuf,
}

impl IndexStore {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// File path for a word.
    ///
    /// Index words come from the tokenizer and never contain path
    /// syntax; anything that does is rejected rather than escaped.
    pub fn path_for(&self, word: &str) -> Result<PathBuf> {
        let invalid = word.is_empty()
            || word == "."
            || word == ".."
            || word.contains(['/', '\\', '\0']);
        if invalid {
            return Err(MirrorError::InvalidWord(word.to_string()));
        }
        Ok(self.root.join(format!("{word}.{INDEX_EXTENSION}")))
    }

    /// Write an index, replacing any existing file for the word
    pub fn save(&self, index: &WordIndex) -> Result<()> {
        let path = self.path_for(&index.word)?;
        fs::create_dir_all(&self.root)?;
        fs::write(path, serde_json::to_string_pretty(index)?)?;
        Ok(())
    }

    /// Read the index for a word.
    ///
    /// A missing file is `Ok(None)`. Entries without a title or a
    /// snippet are dropped.
    pub fn load(&self, word: &str) -> Result<Option<WordIndex>> {
        let path = self.path_for(word)?;
        if !path.exists() {
            return Ok(None);
        }

        let contents = fs::read_to_string(&path)?;
        let mut index: WordIndex = serde_json::from_str(&contents)?;

        if index.word.is_empty() {
            tracing::warn!("Index file {:?} has no word, ignoring", path);
            return Ok(None);
        }
        if index.word != word {
            tracing::warn!(
                "Index file {:?} holds word {:?}, expected {:?}, ignoring",
                path,
                index.word,
                word
            );
            return Ok(None);
        }

        index
            .pages
            .retain(|p| !p.title.is_empty() && !p.surrounding.is_empty());

        Ok(Some(index))
    }

    /// Merge an index into the stored one for the same word and save
    /// the result
    pub fn save_merged(&self, index: &WordIndex) -> Result<WordIndex> {
        let merged = match self.load(&index.word)? {
            Some(existing) => existing.merge(index.clone()),
            None => index.clone(),
        };
        self.save(&merged)?;
        Ok(merged)
    }

    /// Words that currently have an index file, sorted
    pub fn list_words(&self) -> Result<Vec<String>> {
        if !self.root.is_dir() {
            return Ok(Vec::new());
        }

        let mut words = Vec::new();
        for entry in fs::read_dir(&self.root)? {
            let path = entry?.path();
            if path.extension().is_some_and(|ext| ext == INDEX_EXTENSION) {
                if let Some(stem) = path.file_stem().and_then(|s| s.to_str()) {
                    words.push(stem.to_string());
                }
            }
        }

        words.sort();
        Ok(words)
    }

    /// Replace the stored indices with a full rebuild.
    ///
    /// New files are written first, then files for words not in
    /// `indices` are removed. Words whose index has no pages get no
    /// file. Returns the number of files written.
    pub fn replace_all(&self, indices: &BTreeMap<String, WordIndex>) -> Result<usize> {
        fs::create_dir_all(&self.root)?;

        let keep: HashSet<&str> = indices
            .values()
            .filter(|index| !index.is_empty())
            .map(|index| index.word.as_str())
            .collect();

        indices
            .par_iter()
            .filter(|(_, index)| !index.is_empty())
            .try_for_each(|(_, index)| self.save(index))?;

        tracing::info!("Wrote {} index files to {:?}", keep.len(), self.root);

        // Prune only after every new file is written
        let mut removed = 0;
        for word in self.list_words()? {
            if keep.contains(word.as_str()) {
                continue;
            }
            match self.path_for(&word) {
                Ok(path) => {
                    fs::remove_file(path)?;
                    removed += 1;
                }
                Err(e) => tracing::warn!("Leaving stale index file in place: {}", e),
            }
        }
        if removed > 0 {
            tracing::info!("Removed {} stale index files", removed);
        }

        Ok(keep.len())
    }

    /// Merge every index into the stored ones. Returns the number of
    /// files written.
    pub fn merge_all(&self, indices: &BTreeMap<String, WordIndex>) -> Result<usize> {
        let merged = indices
            .par_iter()
            .filter(|(_, index)| !index.is_empty())
            .map(|(_, index)| self.save_merged(index))
            .collect::<Result<Vec<WordIndex>>>()?;

        tracing::info!("Merged {} index files into {:?}", merged.len(), self.root);
        Ok(merged.len())
    }
}
