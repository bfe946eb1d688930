//! Plain text extraction from mirrored page HTML.
//!
//! Raw pages hold the HTML fetched from the wiki. Only the text of
//! the main content region is indexed; script and style bodies are
//! dropped. Text nodes are concatenated without separators, so the
//! whitespace the wiki emits between block elements is what keeps
//! words apart.

use scraper::{ElementRef, Html, Node, Selector};

use crate::core::error::{MirrorError, Result};

/// Tags whose text never reaches the index
const SKIP_TEXT: &[&str] = &["script", "style", "noscript"];

/// Extracts indexable text from raw page bodies
#[derive(Debug, Clone)]
pub struct ContentExtractor {
    selector: Option<Selector>,
}

impl ContentExtractor {
    /// Create an extractor for the given content selector.
    ///
    /// With `None`, page text is passed through untouched.
    pub fn new(selector: Option<&str>) -> Result<Self> {
        let selector = selector
            .map(|s| {
                Selector::parse(s)
                    .map_err(|e| MirrorError::ConfigError(format!("Invalid selector '{s}': {e}")))
            })
            .transpose()?;
        Ok(Self { selector })
    }

    /// Pass-through extractor for plain text corpora
    pub fn plain() -> Self {
        Self { selector: None }
    }

    /// Text of the content region.
    ///
    /// When the selector matches nothing the whole document's text is
    /// used, so plain text bodies survive a configured selector.
    pub fn extract(&self, raw: &str) -> String {
        let Some(selector) = &self.selector else {
            return raw.to_string();
        };

        let document = Html::parse_document(raw);
        let mut text = String::new();
        let mut matched = false;

        for element in document.select(selector) {
            matched = true;
            collect_text(element, &mut text);
        }

        if !matched {
            collect_text(document.root_element(), &mut text);
        }

        text
    }
}

fn collect_text(element: ElementRef<'_>, out: &mut String) {
    if SKIP_TEXT.contains(&element.value().name()) {
        return;
    }

    for child in element.children() {
        match child.value() {
            Node::Text(t) => out.push_str(&t.text),
            Node::Element(_) => {
                if let Some(child_el) = ElementRef::wrap(child) {
                    collect_text(child_el, out);
                }
            }
            _ => {}
        }
    }
}
