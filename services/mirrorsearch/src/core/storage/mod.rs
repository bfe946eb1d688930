//! On-disk layout of a mirror.
//!
//! # Directory Structure
//!
//! ```text
//! {raw_dir}/
//! ├── Seoul.json          # Page metadata
//! ├── Seoul.txt           # Page body
//! └── Seoul/
//!     ├── History.json    # Subpage "Seoul/History"
//!     └── History.txt
//!
//! {indices_dir}/
//! ├── Seoul.json          # WordIndex for "Seoul"
//! └── 京都.json
//! ```

mod index_store;
mod raw;

pub use index_store::IndexStore;
pub use raw::{page_filename, RawPageStore};
