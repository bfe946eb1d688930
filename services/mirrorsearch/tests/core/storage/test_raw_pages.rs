// Raw page record tests

use crate::common::TestMirror;
use mirrorsearch::core::storage::RawPageStore;
use mirrorsearch::core::types::RawPage;
use std::fs;

#[test]
fn test_crawler_metadata_round_trip() {
    let mirror = TestMirror::new();
    let store = RawPageStore::new(mirror.raw_dir());

    let mut page = RawPage::new("Category:Rivers", "<p>Rivers of Korea</p>");
    page.namespace = 14;
    page.timestamp = 1_546_300_800_000;
    page.categories = vec!["Geography".to_string()];
    page.members = vec!["Han River".to_string(), "Nakdong River".to_string()];
    store.write(&page).unwrap();

    assert_eq!(store.load("Category:Rivers").unwrap(), page);
}

#[test]
fn test_metadata_file_has_no_text() {
    let mirror = TestMirror::with_pages(&[("Seoul", "secret body")]);

    let meta = fs::read_to_string(mirror.raw_dir().join("Seoul.json")).unwrap();
    let text = fs::read_to_string(mirror.raw_dir().join("Seoul.txt")).unwrap();

    assert!(!meta.contains("secret body"));
    assert_eq!(text, "secret body");
}

#[test]
fn test_legacy_metadata_loads() {
    let mirror = TestMirror::new();
    fs::write(
        mirror.raw_dir().join("Busan.json"),
        r#"{"title": "Busan", "namespace": 0}"#,
    )
    .unwrap();
    fs::write(mirror.raw_dir().join("Busan.txt"), "port city").unwrap();

    let page = RawPageStore::new(mirror.raw_dir()).load("Busan").unwrap();
    assert_eq!(page.text, "port city");
    assert!(page.categories.is_empty());
    assert!(page.file.is_none());
}

#[test]
fn test_load_all_in_path_order() {
    let mirror = TestMirror::with_pages(&[("b", "x"), ("a", "y"), ("c/d", "z")]);

    let (pages, skipped) = RawPageStore::new(mirror.raw_dir()).load_all().unwrap();
    let titles: Vec<&str> = pages.iter().map(|p| p.title.as_str()).collect();

    assert!(skipped.is_empty());
    assert_eq!(titles, ["a", "b", "c/d"]);
}
