//! Index construction.
//!
//! Turns a directory of raw pages into one [`WordIndex`] per word:
//!
//! - `tokenizer`: script-aware word patterns over delimiter chunks
//! - `extractor`: per-page `(word, count)` lists and the vocabulary
//! - `content`: plain text from page HTML
//! - `builder`: the corpus scan producing word indices
//! - `merge`: combining indices for the same word
//! - `pipeline`: raw directory in, index files out
//!
//! [`WordIndex`]: crate::core::types::WordIndex

pub mod builder;
pub mod content;
pub mod extractor;
pub mod merge;
pub mod pipeline;
pub mod tokenizer;

pub use builder::{BuildOutput, IndexBuilder, PageText};
pub use content::ContentExtractor;
pub use extractor::{extract_words, Vocabulary};
pub use merge::{combine_surrounding, merge_shards, SURROUNDING_SEP};
pub use pipeline::IndexingPipeline;
