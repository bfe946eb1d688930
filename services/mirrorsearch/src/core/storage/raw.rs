//! Raw page records written by the crawler.
//!
//! Each page is two files named after the page:
//! `<name>.json` with the metadata and `<name>.txt` with the body.
//! Titles containing `/` (subpages) land in subdirectories.

use std::fs;
use std::path::{Component, Path, PathBuf};

use walkdir::WalkDir;

use crate::core::error::{MirrorError, Result};
use crate::core::types::{RawPage, SkippedPage};

const META_EXTENSION: &str = "json";
const TEXT_EXTENSION: &str = "txt";

/// File and URL name for a page title
pub fn page_filename(title: &str) -> String {
    title.replace(' ', "_")
}

/// Append an extension without touching dots already in the name
fn with_suffix(base: &Path, extension: &str) -> PathBuf {
    let mut path = base.as_os_str().to_owned();
    path.push(".");
    path.push(extension);
    PathBuf::from(path)
}

/// Directory of raw page records
#[derive(Debug, Clone)]
pub struct RawPageStore {
    root: PathBuf,
}

impl RawPageStore {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Base path (without extension) for a title
    fn base_path(&self, title: &str) -> Result<PathBuf> {
        let name = page_filename(title);
        let relative = Path::new(&name);
        let escapes = relative
            .components()
            .any(|c| !matches!(c, Component::Normal(_)));
        if name.is_empty() || escapes {
            return Err(MirrorError::InvalidPage {
                title: title.to_string(),
                reason: "title does not map to a file name".to_string(),
            });
        }
        Ok(self.root.join(relative))
    }

    /// Write a page's metadata and text
    pub fn write(&self, page: &RawPage) -> Result<()> {
        let base = self.base_path(&page.title)?;
        if let Some(parent) = base.parent() {
            fs::create_dir_all(parent)?;
        }

        fs::write(
            with_suffix(&base, META_EXTENSION),
            serde_json::to_string_pretty(page)?,
        )?;
        fs::write(with_suffix(&base, TEXT_EXTENSION), &page.text)?;

        Ok(())
    }

    /// Load a page by title
    pub fn load(&self, title: &str) -> Result<RawPage> {
        let meta_path = with_suffix(&self.base_path(title)?, META_EXTENSION);
        if !meta_path.exists() {
            return Err(MirrorError::PageNotFound(title.to_string()));
        }
        Self::load_path(&meta_path)
    }

    /// Load a page from its metadata file.
    ///
    /// A missing text file yields a page with empty text; the index
    /// builder reports such pages as skipped.
    pub fn load_path(meta_path: &Path) -> Result<RawPage> {
        let contents = fs::read_to_string(meta_path)?;
        let mut page: RawPage = serde_json::from_str(&contents)?;

        let text_path = meta_path.with_extension(TEXT_EXTENSION);
        if text_path.exists() {
            page.text = fs::read_to_string(&text_path)?;
        } else {
            tracing::debug!("No text file for {:?}", meta_path);
        }

        Ok(page)
    }

    /// Metadata files under the root, sorted by path
    pub fn list(&self) -> Result<Vec<PathBuf>> {
        if !self.root.is_dir() {
            return Err(MirrorError::StorageError(format!(
                "Raw page directory not found: {}",
                self.root.display()
            )));
        }

        let mut paths: Vec<PathBuf> = WalkDir::new(&self.root)
            .follow_links(false)
            .into_iter()
            .filter_map(|entry| match entry {
                Ok(e) => Some(e),
                Err(err) => {
                    tracing::warn!("Error walking raw pages: {}", err);
                    None
                }
            })
            .filter(|e| e.file_type().is_file())
            .map(|e| e.into_path())
            .filter(|p| p.extension().is_some_and(|ext| ext == META_EXTENSION))
            .collect();

        paths.sort();
        Ok(paths)
    }

    /// Load every page, collecting unreadable records as skipped
    pub fn load_all(&self) -> Result<(Vec<RawPage>, Vec<SkippedPage>)> {
        let paths = self.list()?;
        tracing::info!("Found {} raw pages in {:?}", paths.len(), self.root);

        let mut pages = Vec::with_capacity(paths.len());
        let mut skipped = Vec::new();

        for path in paths {
            match Self::load_path(&path) {
                Ok(page) => pages.push(page),
                Err(e) => {
                    let name = path
                        .strip_prefix(&self.root)
                        .unwrap_or(&path)
                        .with_extension("")
                        .to_string_lossy()
                        .into_owned();
                    tracing::warn!("Failed to load raw page {:?}: {}", path, e);
                    skipped.push(SkippedPage {
                        name,
                        reason: e.to_string(),
                    });
                }
            }
        }

        Ok((pages, skipped))
    }
}
