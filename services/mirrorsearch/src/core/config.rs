//! Configuration management for mirrorsearch.
//!
//! This module handles loading configuration from TOML files and
//! environment variables, with sensible defaults for all settings.
//! The resulting [`Config`] is passed explicitly to the pipeline and
//! the query client; nothing reads configuration from global state.

use crate::core::error::{MirrorError, Result};
use crate::core::xdg::XdgDirs;
use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::path::{Path, PathBuf};

/// Main configuration structure
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct Config {
    #[serde(default)]
    pub paths: PathsConfig,
    #[serde(default)]
    pub indexing: IndexingConfig,
    #[serde(default)]
    pub site: SiteConfig,
    #[serde(default)]
    pub query: QueryConfig,
}

/// Mirror directory layout
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct PathsConfig {
    /// Raw page records (`<name>.json` + `<name>.txt`)
    #[serde(default = "default_raw_dir")]
    pub raw_dir: PathBuf,

    /// Word index files (`<word>.json`)
    #[serde(default = "default_indices_dir")]
    pub indices_dir: PathBuf,

    /// Rendered pages, used by offline title lookups
    #[serde(default = "default_pages_dir")]
    pub pages_dir: PathBuf,
}

/// Indexing configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct IndexingConfig {
    /// Chunks kept on each side of a match in `surrounding`
    #[serde(default = "default_surrounding_radius")]
    pub surrounding_radius: usize,

    /// Minimum corpus occurrences for a word to be indexed
    #[serde(default = "default_min_occurrences")]
    pub min_occurrences: usize,

    /// CSS selector for the main content region of raw page HTML.
    /// When unset or empty, raw text is indexed as-is.
    #[serde(default = "default_content_selector")]
    pub content_selector: Option<String>,
}

/// Public URL layout of the mirror
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct SiteConfig {
    #[serde(default = "default_pages_base_url")]
    pub pages_base_url: String,

    #[serde(default = "default_indices_base_url")]
    pub indices_base_url: String,

    #[serde(default = "default_page_extension")]
    pub page_extension: String,
}

/// Query client configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct QueryConfig {
    /// Per-lookup timeout in milliseconds
    #[serde(default = "default_timeout_ms")]
    pub timeout_ms: u64,

    #[serde(default = "default_highlight_open")]
    pub highlight_open: String,

    #[serde(default = "default_highlight_close")]
    pub highlight_close: String,
}

// Default value functions
fn default_raw_dir() -> PathBuf {
    PathBuf::from("./raw")
}

fn default_indices_dir() -> PathBuf {
    PathBuf::from("./indices")
}

fn default_pages_dir() -> PathBuf {
    PathBuf::from("./pages")
}

fn default_surrounding_radius() -> usize {
    2
}

fn default_min_occurrences() -> usize {
    1
}

fn default_content_selector() -> Option<String> {
    Some(".mw-parser-output".to_string())
}

fn default_pages_base_url() -> String {
    "http://localhost:8080/pages".to_string()
}

fn default_indices_base_url() -> String {
    "http://localhost:8080/indices".to_string()
}

fn default_page_extension() -> String {
    ".html".to_string()
}

fn default_timeout_ms() -> u64 {
    5000
}

fn default_highlight_open() -> String {
    "<span class=\"bold\">".to_string()
}

fn default_highlight_close() -> String {
    "</span>".to_string()
}

impl Default for PathsConfig {
    fn default() -> Self {
        Self {
            raw_dir: default_raw_dir(),
            indices_dir: default_indices_dir(),
            pages_dir: default_pages_dir(),
        }
    }
}

impl Default for IndexingConfig {
    fn default() -> Self {
        Self {
            surrounding_radius: default_surrounding_radius(),
            min_occurrences: default_min_occurrences(),
            content_selector: default_content_selector(),
        }
    }
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            pages_base_url: default_pages_base_url(),
            indices_base_url: default_indices_base_url(),
            page_extension: default_page_extension(),
        }
    }
}

impl Default for QueryConfig {
    fn default() -> Self {
        Self {
            timeout_ms: default_timeout_ms(),
            highlight_open: default_highlight_open(),
            highlight_close: default_highlight_close(),
        }
    }
}

impl Config {
    /// Load configuration from TOML file
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let contents = fs::read_to_string(path)
            .map_err(|e| MirrorError::ConfigError(format!("Failed to read config file: {e}")))?;

        let config: Config = toml::from_str(&contents)?;
        Ok(config)
    }

    /// Load config with priority: env vars > TOML > defaults
    pub fn load() -> Result<Self> {
        let xdg = XdgDirs::new();
        Self::load_with_xdg(&xdg)
    }

    /// Load config with explicit XDG directories
    ///
    /// Priority order:
    /// 1. MIRRORSEARCH_CONFIG env var
    /// 2. XDG config file (~/.config/mirrorsearch/config.toml)
    /// 3. ./mirrorsearch.toml next to the mirror
    /// 4. Defaults
    pub fn load_with_xdg(xdg: &XdgDirs) -> Result<Self> {
        let mut config = if let Ok(config_path) = env::var("MIRRORSEARCH_CONFIG") {
            Self::from_file(config_path)?
        } else {
            let xdg_config = xdg.config_file();
            if xdg_config.exists() {
                Self::from_file(xdg_config)?
            } else if Path::new("mirrorsearch.toml").exists() {
                Self::from_file("mirrorsearch.toml")?
            } else {
                Self::default()
            }
        };

        config.merge_env();
        config.validate()?;

        Ok(config)
    }

    /// Merge configuration with environment variables
    pub fn merge_env(&mut self) {
        if let Ok(dir) = env::var("MIRRORSEARCH_RAW_DIR") {
            self.paths.raw_dir = PathBuf::from(dir);
        }
        if let Ok(dir) = env::var("MIRRORSEARCH_INDICES_DIR") {
            self.paths.indices_dir = PathBuf::from(dir);
        }
        if let Ok(dir) = env::var("MIRRORSEARCH_PAGES_DIR") {
            self.paths.pages_dir = PathBuf::from(dir);
        }

        if let Ok(radius) = env::var("MIRRORSEARCH_SURROUNDING_RADIUS") {
            if let Ok(r) = radius.parse() {
                self.indexing.surrounding_radius = r;
            }
        }
        if let Ok(min) = env::var("MIRRORSEARCH_MIN_OCCURRENCES") {
            if let Ok(m) = min.parse() {
                self.indexing.min_occurrences = m;
            }
        }

        if let Ok(url) = env::var("MIRRORSEARCH_PAGES_URL") {
            self.site.pages_base_url = url;
        }
        if let Ok(url) = env::var("MIRRORSEARCH_INDICES_URL") {
            self.site.indices_base_url = url;
        }

        if let Ok(timeout) = env::var("MIRRORSEARCH_TIMEOUT_MS") {
            if let Ok(t) = timeout.parse() {
                self.query.timeout_ms = t;
            }
        }
    }

    /// Content selector, treating an empty string as unset
    pub fn content_selector(&self) -> Option<&str> {
        self.indexing
            .content_selector
            .as_deref()
            .filter(|s| !s.trim().is_empty())
    }

    /// Validate configuration values
    pub fn validate(&self) -> Result<()> {
        if self.indexing.min_occurrences == 0 {
            return Err(MirrorError::ConfigError(
                "Min occurrences must be non-zero".to_string(),
            ));
        }

        if let Some(selector) = self.content_selector() {
            if scraper::Selector::parse(selector).is_err() {
                return Err(MirrorError::ConfigError(format!(
                    "Invalid content selector: {selector}"
                )));
            }
        }

        if !self.site.page_extension.is_empty() && !self.site.page_extension.starts_with('.') {
            return Err(MirrorError::ConfigError(
                "Page extension must start with '.'".to_string(),
            ));
        }

        if self.query.timeout_ms == 0 {
            return Err(MirrorError::ConfigError(
                "Lookup timeout must be non-zero".to_string(),
            ));
        }

        Ok(())
    }

    /// Log configuration
    pub fn log_config(&self) {
        tracing::info!("Configuration loaded:");
        tracing::info!("  Raw dir: {:?}", self.paths.raw_dir);
        tracing::info!("  Indices dir: {:?}", self.paths.indices_dir);
        tracing::info!("  Pages dir: {:?}", self.paths.pages_dir);
        tracing::info!(
            "  Surrounding radius: {} chunks",
            self.indexing.surrounding_radius
        );
        tracing::info!("  Min occurrences: {}", self.indexing.min_occurrences);
        tracing::info!("  Content selector: {:?}", self.indexing.content_selector);
        tracing::info!("  Pages URL: {}", self.site.pages_base_url);
        tracing::info!("  Indices URL: {}", self.site.indices_base_url);
        tracing::info!("  Lookup timeout: {}ms", self.query.timeout_ms);
    }
}
