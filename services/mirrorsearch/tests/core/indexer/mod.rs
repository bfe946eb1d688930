//! Indexer layer tests
//!
//! Tokenizer behaviour on multi-script text and full builds over a
//! sample mirror.

mod test_build;
mod test_tokenizer;
