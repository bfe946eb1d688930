// Test fixtures for integration testing

use mirrorsearch::core::config::Config;
use mirrorsearch::core::storage::{page_filename, RawPageStore};
use mirrorsearch::core::types::RawPage;
use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;

/// A small Korean wiki, as HTML bodies the way the crawler stores them
#[allow(dead_code)] // Used in integration tests
pub const KOREAN_PAGES: &[(&str, &str)] = &[
    (
        "Seoul",
        r#"<div class="mw-parser-output"><p>Seoul is the capital of 대한민국.
        Seoul has many districts.</p><script>var Tracking = 1;</script></div>"#,
    ),
    (
        "Han River",
        r#"<div class="mw-parser-output"><p>The Han River flows through Seoul.
        한강 2019년 flood.</p></div>"#,
    ),
    (
        "Kyoto",
        r#"<div class="mw-parser-output"><p>古都 京都 は 日本 の 都市.</p></div>"#,
    ),
    (
        "서울特別市",
        r#"<div class="mw-parser-output"><p>서울特別市 is the official name of Seoul.</p></div>"#,
    ),
];

/// Mirror directory fixture: raw pages, an index directory and a
/// directory of published pages, all under one temp dir
#[allow(dead_code)] // Used in integration tests
pub struct TestMirror {
    pub dir: TempDir,
}

#[allow(dead_code)] // Used in integration tests
impl TestMirror {
    /// Create an empty mirror
    pub fn new() -> Self {
        let dir = TempDir::new().expect("Failed to create temp dir");
        fs::create_dir_all(dir.path().join("raw")).expect("Failed to create raw dir");
        Self { dir }
    }

    /// Create a mirror with the given (title, body) raw pages
    pub fn with_pages(pages: &[(&str, &str)]) -> Self {
        let mirror = Self::new();
        for (title, text) in pages {
            mirror.add_page(RawPage::new(*title, *text));
        }
        mirror
    }

    /// Create the Korean sample mirror
    pub fn korean() -> Self {
        Self::with_pages(KOREAN_PAGES)
    }

    /// Write a raw page record
    pub fn add_page(&self, page: RawPage) {
        RawPageStore::new(self.raw_dir())
            .write(&page)
            .expect("Failed to write raw page");
    }

    /// Write published page files for the given titles
    pub fn publish_pages(&self, titles: &[&str]) {
        for title in titles {
            let path = self
                .pages_dir()
                .join(format!("{}.html", page_filename(title)));
            if let Some(parent) = path.parent() {
                fs::create_dir_all(parent).expect("Failed to create pages dir");
            }
            fs::write(path, "<html></html>").expect("Failed to write page");
        }
    }

    pub fn raw_dir(&self) -> PathBuf {
        self.dir.path().join("raw")
    }

    pub fn indices_dir(&self) -> PathBuf {
        self.dir.path().join("indices")
    }

    pub fn pages_dir(&self) -> PathBuf {
        self.dir.path().join("pages")
    }

    /// Default configuration pointed at this mirror
    pub fn config(&self) -> Config {
        let mut config = Config::default();
        config.paths.raw_dir = self.raw_dir();
        config.paths.indices_dir = self.indices_dir();
        config.paths.pages_dir = self.pages_dir();
        config
    }
}
