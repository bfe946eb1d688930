// Query client tests over a built mirror

use crate::common::{build_mirror, create_test_services, TestMirror};
use mirrorsearch::core::search::{render_html, QueryEvent};

#[tokio::test]
async fn test_search_word_and_title() {
    let mirror = TestMirror::korean();
    build_mirror(&mirror);
    mirror.publish_pages(&["Seoul", "Han River"]);

    let services = create_test_services(&mirror);
    let client = services.create_query_client(false).unwrap();
    let outcome = client.search("Seoul").await;

    let title_match = outcome.title_match.expect("Seoul page is published");
    assert!(title_match.url.ends_with("Seoul.html"));

    let titles: Vec<&str> = outcome.results.iter().map(|r| r.title.as_str()).collect();
    assert_eq!(titles, ["Han River", "Seoul", "서울特別市"]);
    for result in &outcome.results {
        assert!(result.highlighted.contains("<span class=\"bold\">Seoul</span>"));
    }
}

#[tokio::test]
async fn test_search_hanja_highlight() {
    let mirror = TestMirror::korean();
    build_mirror(&mirror);

    let services = create_test_services(&mirror);
    let client = services.create_query_client(false).unwrap();
    let outcome = client.search("京都").await;

    assert!(outcome.title_match.is_none());
    assert_eq!(outcome.results.len(), 1);
    assert_eq!(
        outcome.results[0].highlighted,
        "古都 <span class=\"bold\">京都</span> は 日本"
    );
}

#[tokio::test]
async fn test_search_title_only() {
    let mirror = TestMirror::korean();
    build_mirror(&mirror);
    mirror.publish_pages(&["Han River"]);

    let services = create_test_services(&mirror);
    let client = services.create_query_client(false).unwrap();
    let outcome = client.search("Han River").await;

    // Not a single word, so only the title channel answers
    assert!(outcome.title_match.is_some());
    assert!(outcome.results.is_empty());
}

#[tokio::test]
async fn test_search_absent_is_empty() {
    let mirror = TestMirror::korean();
    build_mirror(&mirror);

    let services = create_test_services(&mirror);
    let client = services.create_query_client(false).unwrap();
    let outcome = client.search("Pyongyang").await;

    assert!(outcome.title_match.is_none());
    assert!(outcome.results.is_empty());
    assert!(render_html(&outcome).is_empty());
}

#[tokio::test]
async fn test_search_empty_query() {
    let mirror = TestMirror::korean();
    let services = create_test_services(&mirror);
    let client = services.create_query_client(false).unwrap();

    let outcome = client.search("").await;
    assert!(outcome.title_match.is_none());
    assert!(outcome.results.is_empty());
}

#[tokio::test]
async fn test_search_events_deliver_both_channels() {
    let mirror = TestMirror::korean();
    build_mirror(&mirror);
    mirror.publish_pages(&["Seoul"]);

    let services = create_test_services(&mirror);
    let client = services.create_query_client(false).unwrap();
    let mut handle = client.search_events("Seoul");

    let mut title_seen = false;
    let mut results_seen = 0;
    while let Some(event) = handle.next().await {
        match event {
            QueryEvent::TitleMatch(m) => {
                assert_eq!(m.title, "Seoul");
                title_seen = true;
            }
            QueryEvent::Results(results) => results_seen = results.len(),
        }
    }

    assert!(title_seen);
    assert_eq!(results_seen, 3);
}

#[tokio::test]
async fn test_dropping_handle_is_safe() {
    let mirror = TestMirror::korean();
    let services = create_test_services(&mirror);
    let client = services.create_query_client(false).unwrap();

    let handle = client.search_events("Seoul");
    drop(handle);

    // The client stays usable after an abandoned search
    let outcome = client.search("Seoul").await;
    assert!(outcome.results.is_empty());
}

#[tokio::test]
async fn test_render_html_fragment() {
    let mirror = TestMirror::korean();
    build_mirror(&mirror);
    mirror.publish_pages(&["Seoul"]);

    let services = create_test_services(&mirror);
    let client = services.create_query_client(false).unwrap();
    let html = render_html(&client.search("Seoul").await);

    assert!(html.starts_with("<h2>"));
    assert_eq!(html.matches("<div class=\"result-entry\">").count(), 3);
    assert!(html.contains("<span class=\"bold\">Seoul</span> is the"));
}
