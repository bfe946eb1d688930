//! Query term highlighting and result rendering.
//!
//! Only the first case-sensitive occurrence of the query is marked.
//! A snippet without the query is shown as-is.

use crate::core::types::SearchOutcome;

/// Split `snippet` around the first occurrence of `word`.
///
/// Returns `(before, matched, after)`, or `None` when `word` is empty
/// or absent.
pub fn split_first<'a>(snippet: &'a str, word: &str) -> Option<(&'a str, &'a str, &'a str)> {
    if word.is_empty() {
        return None;
    }
    let start = snippet.find(word)?;
    let end = start + word.len();
    Some((&snippet[..start], &snippet[start..end], &snippet[end..]))
}

/// Wrap the first occurrence of `word` in `open`/`close` markers
pub fn highlight(snippet: &str, word: &str, open: &str, close: &str) -> String {
    match split_first(snippet, word) {
        Some((before, matched, after)) => format!("{before}{open}{matched}{close}{after}"),
        None => snippet.to_string(),
    }
}

/// Escape text for HTML element and attribute content
pub fn escape_html(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(c),
        }
    }
    escaped
}

/// Render a search outcome as the HTML fragment for the results page.
///
/// Snippet text is escaped; only the highlight span is markup.
pub fn render_html(outcome: &SearchOutcome) -> String {
    let mut html = String::new();

    if let Some(title_match) = &outcome.title_match {
        html.push_str(&format!(
            "<h2>Title match: <a href=\"{}\">{}</a></h2>\n",
            escape_html(&title_match.url),
            escape_html(&title_match.title)
        ));
    }

    for entry in &outcome.results {
        let surrounding = match split_first(&entry.surrounding, &outcome.query) {
            Some((before, matched, after)) => format!(
                "{}<span class=\"bold\">{}</span>{}",
                escape_html(before),
                escape_html(matched),
                escape_html(after)
            ),
            None => escape_html(&entry.surrounding),
        };

        html.push_str(&format!(
            "<div class=\"result-entry\"><h3 class=\"title\"><a href=\"{}\">{}</a></h3>\
             <p class=\"surrounding\">{}</p></div>\n",
            escape_html(&entry.url),
            escape_html(&entry.title),
            surrounding
        ));
    }

    html
}
