//! Query client for a published mirror.
//!
//! A search string runs two independent lookups:
//!
//! - **title**: does a page named exactly like the query exist?
//! - **word**: is there an index file for the query as a word?
//!
//! Each lookup has its own timeout and fails silently; a failed or
//! timed-out lookup is reported as "nothing found". Lookups go through
//! a [`LookupSource`], either the published site over HTTP or a local
//! mirror directory.

use std::path::{Component, Path, PathBuf};
use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use tokio::sync::mpsc;
use tokio::task::JoinSet;

use crate::core::config::{Config, QueryConfig};
use crate::core::error::{MirrorError, Result};
use crate::core::search::highlight::highlight;
use crate::core::storage::{page_filename, IndexStore};
use crate::core::types::{QueryResult, ResultEntry, SearchOutcome, TitleMatch};

/// Transport for the two lookups
#[async_trait]
pub trait LookupSource: Send + Sync {
    /// Link to a page by title
    fn page_url(&self, title: &str) -> String;

    /// Whether a page with exactly this title is published
    async fn page_exists(&self, title: &str) -> Result<bool>;

    /// The stored index for a word, `None` if there is none
    async fn fetch_index(&self, word: &str) -> Result<Option<QueryResult>>;
}

/// Whether a page file name stays below the pages root
fn stays_inside(name: &str) -> bool {
    Path::new(name)
        .components()
        .all(|c| matches!(c, Component::Normal(_)))
}

/// Percent-encode a page file name, keeping subpage separators
fn encode_path(name: &str) -> String {
    name.split('/')
        .map(|segment| urlencoding::encode(segment).into_owned())
        .collect::<Vec<_>>()
        .join("/")
}

/// Lookups against the published site
#[derive(Debug, Clone)]
pub struct HttpSource {
    client: reqwest::Client,
    pages_base_url: String,
    indices_base_url: String,
    page_extension: String,
}

impl HttpSource {
    /// Create a source for the configured site
    pub fn new(config: &Config) -> Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_millis(config.query.timeout_ms))
            .build()?;

        Ok(Self {
            client,
            pages_base_url: config.site.pages_base_url.trim_end_matches('/').to_string(),
            indices_base_url: config.site.indices_base_url.trim_end_matches('/').to_string(),
            page_extension: config.site.page_extension.clone(),
        })
    }

    /// URL of a word's index file
    pub fn index_url(&self, word: &str) -> String {
        format!(
            "{}/{}.json",
            self.indices_base_url,
            urlencoding::encode(word)
        )
    }
}

#[async_trait]
impl LookupSource for HttpSource {
    fn page_url(&self, title: &str) -> String {
        format!(
            "{}/{}{}",
            self.pages_base_url,
            encode_path(&page_filename(title)),
            self.page_extension
        )
    }

    async fn page_exists(&self, title: &str) -> Result<bool> {
        if !stays_inside(&page_filename(title)) {
            tracing::debug!("Title {:?} leaves the pages root, not looked up", title);
            return Ok(false);
        }
        let response = self.client.get(self.page_url(title)).send().await?;
        Ok(response.status() == reqwest::StatusCode::OK)
    }

    async fn fetch_index(&self, word: &str) -> Result<Option<QueryResult>> {
        let response = self.client.get(self.index_url(word)).send().await?;
        if response.status() != reqwest::StatusCode::OK {
            tracing::debug!("Index lookup for {:?}: HTTP {}", word, response.status());
            return Ok(None);
        }
        let index: QueryResult = response.json().await?;
        Ok(Some(index))
    }
}

/// Lookups against a local mirror's pages and indices directories
#[derive(Debug, Clone)]
pub struct DirectorySource {
    pages_dir: PathBuf,
    page_extension: String,
    indices: IndexStore,
}

impl DirectorySource {
    pub fn new(
        pages_dir: impl Into<PathBuf>,
        page_extension: impl Into<String>,
        indices: IndexStore,
    ) -> Self {
        Self {
            pages_dir: pages_dir.into(),
            page_extension: page_extension.into(),
            indices,
        }
    }

    /// Create a source for the configured directories
    pub fn from_config(config: &Config) -> Self {
        Self::new(
            config.paths.pages_dir.clone(),
            config.site.page_extension.clone(),
            IndexStore::new(config.paths.indices_dir.clone()),
        )
    }

    fn page_path(&self, title: &str) -> Option<PathBuf> {
        let name = format!("{}{}", page_filename(title), self.page_extension);
        stays_inside(&name).then(|| self.pages_dir.join(name))
    }
}

#[async_trait]
impl LookupSource for DirectorySource {
    fn page_url(&self, title: &str) -> String {
        self.pages_dir
            .join(format!("{}{}", page_filename(title), self.page_extension))
            .display()
            .to_string()
    }

    async fn page_exists(&self, title: &str) -> Result<bool> {
        match self.page_path(title) {
            Some(path) => Ok(tokio::fs::try_exists(path).await?),
            None => Ok(false),
        }
    }

    async fn fetch_index(&self, word: &str) -> Result<Option<QueryResult>> {
        let store = self.indices.clone();
        let word = word.to_string();
        tokio::task::spawn_blocking(move || store.load(&word))
            .await
            .map_err(|e| MirrorError::LookupFailed(format!("Index read task failed: {e}")))?
    }
}

/// A result delivered by one lookup channel
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum QueryEvent {
    TitleMatch(TitleMatch),
    Results(Vec<ResultEntry>),
}

/// Pending lookups for one search.
///
/// Events arrive in completion order. Dropping the handle aborts the
/// lookups still running.
pub struct SearchHandle {
    events: mpsc::Receiver<QueryEvent>,
    _tasks: JoinSet<()>,
}

impl SearchHandle {
    /// Next result, or `None` once both lookups have finished
    pub async fn next(&mut self) -> Option<QueryEvent> {
        self.events.recv().await
    }
}

/// Runs searches against a lookup source
#[derive(Clone)]
pub struct QueryClient {
    source: Arc<dyn LookupSource>,
    timeout: Duration,
    highlight_open: String,
    highlight_close: String,
}

impl QueryClient {
    pub fn new(source: Arc<dyn LookupSource>, query: &QueryConfig) -> Self {
        Self {
            source,
            timeout: Duration::from_millis(query.timeout_ms),
            highlight_open: query.highlight_open.clone(),
            highlight_close: query.highlight_close.clone(),
        }
    }

    /// Client for the published site
    pub fn http(config: &Config) -> Result<Self> {
        Ok(Self::new(Arc::new(HttpSource::new(config)?), &config.query))
    }

    /// Client for the local mirror directories
    pub fn directory(config: &Config) -> Self {
        Self::new(Arc::new(DirectorySource::from_config(config)), &config.query)
    }

    /// Title lookup; failures and timeouts are `None`
    pub async fn lookup_title(&self, query: &str) -> Option<TitleMatch> {
        if query.is_empty() {
            return None;
        }

        match tokio::time::timeout(self.timeout, self.source.page_exists(query)).await {
            Ok(Ok(true)) => Some(TitleMatch {
                title: query.to_string(),
                url: self.source.page_url(query),
            }),
            Ok(Ok(false)) => None,
            Ok(Err(e)) => {
                tracing::debug!("Title lookup for {:?} failed: {}", query, e);
                None
            }
            Err(_) => {
                tracing::debug!("Title lookup for {:?} timed out", query);
                None
            }
        }
    }

    /// Word lookup; failures and timeouts are `None`
    pub async fn lookup_word(&self, query: &str) -> Option<QueryResult> {
        if query.is_empty() {
            return None;
        }

        match tokio::time::timeout(self.timeout, self.source.fetch_index(query)).await {
            Ok(Ok(index)) => index,
            Ok(Err(e)) => {
                tracing::debug!("Word lookup for {:?} failed: {}", query, e);
                None
            }
            Err(_) => {
                tracing::debug!("Word lookup for {:?} timed out", query);
                None
            }
        }
    }

    /// Render index entries for display, in stored order
    pub fn render_results(&self, query: &str, index: &QueryResult) -> Vec<ResultEntry> {
        index
            .pages
            .iter()
            .map(|entry| ResultEntry {
                title: entry.title.clone(),
                url: self.source.page_url(&entry.title),
                surrounding: entry.surrounding.clone(),
                highlighted: highlight(
                    &entry.surrounding,
                    query,
                    &self.highlight_open,
                    &self.highlight_close,
                ),
            })
            .collect()
    }

    /// Run both lookups and wait for both
    pub async fn search(&self, query: &str) -> SearchOutcome {
        let (title_match, index) = tokio::join!(self.lookup_title(query), self.lookup_word(query));

        let results = index
            .map(|index| self.render_results(query, &index))
            .unwrap_or_default();

        tracing::debug!(
            "Search {:?}: title match {}, {} results",
            query,
            title_match.is_some(),
            results.len()
        );

        SearchOutcome {
            query: query.to_string(),
            title_match,
            results,
        }
    }

    /// Start both lookups and stream their results as they resolve.
    ///
    /// Must be called within a tokio runtime.
    pub fn search_events(&self, query: &str) -> SearchHandle {
        let (tx, events) = mpsc::channel(2);
        let mut tasks = JoinSet::new();

        let client = self.clone();
        let title_tx = tx.clone();
        let title_query = query.to_string();
        tasks.spawn(async move {
            if let Some(title_match) = client.lookup_title(&title_query).await {
                let _ = title_tx.send(QueryEvent::TitleMatch(title_match)).await;
            }
        });

        let client = self.clone();
        let word_query = query.to_string();
        tasks.spawn(async move {
            if let Some(index) = client.lookup_word(&word_query).await {
                let results = client.render_results(&word_query, &index);
                let _ = tx.send(QueryEvent::Results(results)).await;
            }
        });

        SearchHandle {
            events,
            _tasks: tasks,
        }
    }
}
