//! Script-aware word extraction.
//!
//! Text is split into chunks on whitespace and a fixed set of
//! sentence and bracket punctuation. Each chunk is then scanned by
//! four independent patterns, so one chunk may yield several words:
//!
//! | Kind          | Pattern                       |
//! |---------------|-------------------------------|
//! | Hanja         | `[HANJA]+`                    |
//! | Hangul/Hanja  | `[HANGUL HANJA]+`             |
//! | Numbered      | `[0-9]+[HANGUL HANJA]+`       |
//! | Latin         | `[A-Za-z]+`                   |
//!
//! # Example
//!
//! ```
//! use mirrorsearch::core::indexer::tokenizer;
//!
//! let words: Vec<&str> = tokenizer::tokenize("서울特別市 2019년, Seoul!").collect();
//! assert_eq!(words, ["特別市", "서울特別市", "년", "2019년", "Seoul"]);
//! ```

use once_cell::sync::Lazy;
use regex::Regex;

const HANJA_RANGE: &str = r"\x{4E00}-\x{9FFF}\x{3400}-\x{4DBF}";
const HANGUL_RANGE: &str = r"\x{AC00}-\x{D7A3}\x{3131}-\x{314E}\x{314F}-\x{3163}";

/// Whitespace plus sentence and bracket punctuation
static CHUNK_DELIMITER: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r#"[\s.,?!;:()\[\]{}<>"「」『』《》、。]+"#).expect("delimiter pattern is valid")
});

static HANJA_WORD: Lazy<Regex> =
    Lazy::new(|| Regex::new(&format!("[{HANJA_RANGE}]+")).expect("hanja pattern is valid"));

static HANGUL_HANJA_WORD: Lazy<Regex> = Lazy::new(|| {
    Regex::new(&format!("[{HANGUL_RANGE}{HANJA_RANGE}]+")).expect("hangul pattern is valid")
});

static NUMBERED_WORD: Lazy<Regex> = Lazy::new(|| {
    Regex::new(&format!("[0-9]+[{HANGUL_RANGE}{HANJA_RANGE}]+"))
        .expect("numbered pattern is valid")
});

static LATIN_WORD: Lazy<Regex> =
    Lazy::new(|| Regex::new("[A-Za-z]+").expect("latin pattern is valid"));

/// Split text into non-empty chunks.
///
/// Chunk positions are what the index builder uses for
/// `surrounding` windows.
pub fn split_chunks(text: &str) -> impl Iterator<Item = &str> + '_ {
    CHUNK_DELIMITER.split(text).filter(|chunk| !chunk.is_empty())
}

/// Words found in a single chunk, in pattern order.
pub fn tokens_in_chunk(chunk: &str) -> impl Iterator<Item = &str> + '_ {
    let scans: [&'static Regex; 4] = [
        &HANJA_WORD,
        &HANGUL_HANJA_WORD,
        &NUMBERED_WORD,
        &LATIN_WORD,
    ];
    scans
        .into_iter()
        .flat_map(move |pattern| pattern.find_iter(chunk).map(|m| m.as_str()))
}

/// Every word in `text`, duplicates included.
///
/// The iterator is lazy; calling `tokenize` again on the same text
/// yields the same sequence.
pub fn tokenize(text: &str) -> impl Iterator<Item = &str> + '_ {
    split_chunks(text).flat_map(tokens_in_chunk)
}
