// Tokenizer tests: multi-script and multibyte input
//
// The tokenizer only recognizes Hangul, Hanja, digit-prefixed
// Hangul/Hanja and ASCII Latin words; everything else must be
// skipped without panicking on character boundaries.

use mirrorsearch::core::indexer::extract_words;
use mirrorsearch::core::indexer::tokenizer::{split_chunks, tokenize};

fn words(text: &str) -> Vec<&str> {
    tokenize(text).collect()
}

#[test]
fn test_emoji_between_words() {
    assert_eq!(words("Seoul🔥Busan"), ["Seoul", "Busan"]);
}

#[test]
fn test_emoji_only_text() {
    assert!(words("🔥🎉👍 😀").is_empty());
}

#[test]
fn test_hangul_split_by_emoji() {
    assert_eq!(words("서울🎉부산"), ["서울", "부산"]);
}

#[test]
fn test_latin_accents_break_words() {
    // Only ASCII letters are Latin word characters
    assert_eq!(words("Café Zürich"), ["Caf", "Z", "rich"]);
}

#[test]
fn test_fullwidth_punctuation_delimits() {
    let chunks: Vec<&str> = split_chunks("「京都」、『大阪』。").collect();
    assert_eq!(chunks, ["京都", "大阪"]);
}

#[test]
fn test_mixed_script_sentence() {
    assert_eq!(
        words("2019년 서울特別市 인구는 Seoul"),
        ["년", "2019년", "特別市", "서울特別市", "인구는", "Seoul"]
    );
}

#[test]
fn test_hanja_extension_a() {
    // U+3400 block
    assert_eq!(words("㐀"), ["㐀", "㐀"]);
}

#[test]
fn test_words_are_substrings_of_input() {
    let text = "The Han River (한강) flows through 서울特別市, 2019년!";
    for word in tokenize(text) {
        assert!(text.contains(word), "{word:?} not in input");
    }
}

#[test]
fn test_extract_words_counts_across_scans() {
    // 京都 is produced by both the hanja and the hangul/hanja scan
    let counts = extract_words("京都 京都");
    assert_eq!(counts, [("京都".to_string(), 4)]);
}

#[test]
fn test_long_text_does_not_panic() {
    let text = "서울 Seoul 京都 2019년 🔥 ".repeat(10_000);
    assert_eq!(tokenize(&text).count(), 10_000 * 6);
}
