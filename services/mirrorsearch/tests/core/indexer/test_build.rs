// Full index builds over a sample mirror

use crate::common::{build_mirror, TestMirror, KOREAN_PAGES};
use mirrorsearch::core::indexer::{extract_words, ContentExtractor};
use mirrorsearch::core::storage::IndexStore;
use mirrorsearch::core::types::RawPage;
use std::collections::BTreeMap;

fn page_words(body: &str) -> Vec<String> {
    let content = ContentExtractor::new(Some(".mw-parser-output")).unwrap();
    extract_words(&content.extract(body))
        .into_iter()
        .map(|(word, _)| word)
        .collect()
}

#[test]
fn test_every_extracted_word_finds_its_page() {
    let mirror = TestMirror::korean();
    build_mirror(&mirror);
    let store = IndexStore::new(mirror.indices_dir());

    for (title, body) in KOREAN_PAGES {
        for word in page_words(body) {
            let index = store
                .load(&word)
                .unwrap()
                .unwrap_or_else(|| panic!("no index file for {word:?}"));
            assert!(
                index.entry(title).is_some(),
                "index for {word:?} has no entry for {title}"
            );
        }
    }
}

#[test]
fn test_repeated_word_single_entry() {
    let mirror = TestMirror::korean();
    build_mirror(&mirror);

    let seoul = IndexStore::new(mirror.indices_dir())
        .load("Seoul")
        .unwrap()
        .unwrap();

    let titles: Vec<&str> = seoul.titles().collect();
    assert_eq!(titles.iter().filter(|t| **t == "Seoul").count(), 1);
    assert_eq!(seoul.entry("Seoul").unwrap().surrounding, "Seoul is the");
}

#[test]
fn test_hanja_word_entry() {
    let mirror = TestMirror::korean();
    build_mirror(&mirror);

    let kyoto = IndexStore::new(mirror.indices_dir())
        .load("京都")
        .unwrap()
        .unwrap();

    assert_eq!(kyoto.pages.len(), 1);
    assert_eq!(kyoto.pages[0].title, "Kyoto");
    assert_eq!(kyoto.pages[0].surrounding, "古都 京都 は 日本");
}

#[test]
fn test_script_text_not_indexed() {
    let mirror = TestMirror::korean();
    build_mirror(&mirror);

    let store = IndexStore::new(mirror.indices_dir());
    assert!(store.load("Tracking").unwrap().is_none());
    assert!(store.load("mw").unwrap().is_none());
}

#[test]
fn test_numbered_word_indexed() {
    let mirror = TestMirror::korean();
    build_mirror(&mirror);

    let store = IndexStore::new(mirror.indices_dir());
    let numbered = store.load("2019년").unwrap().unwrap();
    assert_eq!(numbered.pages[0].title, "Han River");
    assert!(store.load("년").unwrap().is_some());
    assert!(store.load("2019").unwrap().is_none());
}

#[test]
fn test_builds_are_reproducible() {
    let first = TestMirror::korean();
    let second = TestMirror::korean();
    build_mirror(&first);
    build_mirror(&second);

    let load_all = |mirror: &TestMirror| {
        let store = IndexStore::new(mirror.indices_dir());
        store
            .list_words()
            .unwrap()
            .into_iter()
            .map(|word| {
                let index = store.load(&word).unwrap().unwrap();
                (word, index)
            })
            .collect::<BTreeMap<_, _>>()
    };

    assert_eq!(load_all(&first), load_all(&second));
}

#[test]
fn test_subpage_title_indexed() {
    let mirror = TestMirror::new();
    mirror.add_page(RawPage::new(
        "Seoul/History",
        r#"<div class="mw-parser-output">Joseon capital</div>"#,
    ));

    let report = build_mirror(&mirror);
    assert_eq!(report.pages_indexed, 1);

    let joseon = IndexStore::new(mirror.indices_dir())
        .load("Joseon")
        .unwrap()
        .unwrap();
    assert_eq!(joseon.pages[0].title, "Seoul/History");
}

#[test]
fn test_empty_mirror_builds_nothing() {
    let mirror = TestMirror::new();
    let report = build_mirror(&mirror);

    assert_eq!(report.pages_total, 0);
    assert_eq!(report.indices_written, 0);
}
