//! Indexing pipeline orchestration.
//!
//! Coordinates a full index build:
//! 1. Load raw pages
//! 2. Extract plain text from each page body
//! 3. Collect per-page word lists into the vocabulary
//! 4. Scan the corpus for every vocabulary word
//! 5. Write one index file per word

use std::time::Instant;

use rayon::prelude::*;

use crate::core::config::Config;
use crate::core::error::Result;
use crate::core::indexer::{
    extract_words, BuildOutput, ContentExtractor, IndexBuilder, PageText, Vocabulary,
};
use crate::core::storage::{IndexStore, RawPageStore};
use crate::core::types::{BuildReport, RawPage};

/// Orchestrates the indexing pipeline
pub struct IndexingPipeline {
    content: ContentExtractor,
    builder: IndexBuilder,
    min_occurrences: usize,
    raw: RawPageStore,
    indices: IndexStore,
}

impl IndexingPipeline {
    /// Create a pipeline reading and writing the configured directories
    pub fn new(config: &Config) -> Result<Self> {
        Self::with_stores(
            config,
            RawPageStore::new(config.paths.raw_dir.clone()),
            IndexStore::new(config.paths.indices_dir.clone()),
        )
    }

    /// Create a pipeline over explicit stores
    ///
    /// # Errors
    ///
    /// Fails when the configured content selector does not parse.
    pub fn with_stores(config: &Config, raw: RawPageStore, indices: IndexStore) -> Result<Self> {
        Ok(Self {
            content: ContentExtractor::new(config.content_selector())?,
            builder: IndexBuilder::new(config.indexing.surrounding_radius),
            min_occurrences: config.indexing.min_occurrences,
            raw,
            indices,
        })
    }

    pub fn raw_store(&self) -> &RawPageStore {
        &self.raw
    }

    pub fn index_store(&self) -> &IndexStore {
        &self.indices
    }

    /// Plain text of one raw page
    pub fn page_text(&self, page: &RawPage) -> PageText {
        PageText::new(page.title.as_str(), self.content.extract(&page.text))
    }

    /// Build word indices over in-memory pages.
    ///
    /// Returns the builder output and the vocabulary size. Nothing is
    /// written.
    pub fn build_from_pages(&self, pages: &[RawPage]) -> (BuildOutput, usize) {
        let texts: Vec<PageText> = pages.par_iter().map(|p| self.page_text(p)).collect();

        let word_lists: Vec<Vec<(String, usize)>> =
            texts.par_iter().map(|p| extract_words(&p.text)).collect();
        let vocabulary: Vocabulary = word_lists.iter().map(Vec::as_slice).collect();
        let words = vocabulary.words(self.min_occurrences);

        tracing::info!(
            "Vocabulary: {} distinct words, {} selected (min occurrences {})",
            vocabulary.len(),
            words.len(),
            self.min_occurrences
        );

        let output = self.builder.build(&words, &texts);
        (output, words.len())
    }

    /// Run a full build from the raw directory.
    ///
    /// With `merge` false the index directory is replaced by this
    /// build. With `merge` true each index is merged into the stored
    /// one for the same word and nothing is removed.
    ///
    /// Pages that fail to load or have no text are listed in the
    /// report; they never stop the build.
    pub fn run(&self, merge: bool) -> Result<BuildReport> {
        let start = Instant::now();

        // Step 1: Load raw pages
        tracing::info!("Loading raw pages from {:?}", self.raw.root());
        let (pages, mut skipped) = self.raw.load_all()?;
        let pages_total = pages.len() + skipped.len();

        // Steps 2-4: Extract, collect vocabulary, scan
        let (output, vocabulary_size) = self.build_from_pages(&pages);
        skipped.extend(output.skipped);

        // Step 5: Write
        let indices_written = if merge {
            self.indices.merge_all(&output.indices)?
        } else {
            self.indices.replace_all(&output.indices)?
        };

        let duration_ms = start.elapsed().as_millis() as u64;

        tracing::info!(
            "Build complete: {} pages indexed, {} skipped, \
             {} index files written in {}ms",
            output.pages_indexed,
            skipped.len(),
            indices_written,
            duration_ms
        );

        Ok(BuildReport {
            pages_total,
            pages_indexed: output.pages_indexed,
            skipped,
            vocabulary_size,
            indices_written,
            duration_ms,
        })
    }
}
