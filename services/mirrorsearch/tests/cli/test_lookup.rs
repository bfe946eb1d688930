//! Tests for the lookup command

use crate::common::{build_mirror, create_test_services, TestMirror};
use mirrorsearch::cli::commands::lookup::{execute, LookupArgs};
use mirrorsearch::cli::OutputFormat;

fn args(word: &str) -> LookupArgs {
    LookupArgs {
        word: word.to_string(),
    }
}

#[tokio::test]
async fn test_lookup_existing_word() {
    let mirror = TestMirror::korean();
    build_mirror(&mirror);
    let services = create_test_services(&mirror);

    assert!(execute(args("Seoul"), &services, OutputFormat::Human)
        .await
        .is_ok());
    assert!(execute(args("京都"), &services, OutputFormat::Json)
        .await
        .is_ok());
}

#[tokio::test]
async fn test_lookup_absent_word_is_not_error() {
    let mirror = TestMirror::korean();
    build_mirror(&mirror);
    let services = create_test_services(&mirror);

    assert!(execute(args("Pyongyang"), &services, OutputFormat::Human)
        .await
        .is_ok());
}

#[tokio::test]
async fn test_lookup_before_build() {
    let mirror = TestMirror::new();
    let services = create_test_services(&mirror);

    assert!(execute(args("Seoul"), &services, OutputFormat::Json)
        .await
        .is_ok());
}

#[tokio::test]
async fn test_lookup_path_like_word_is_not_found() {
    let mirror = TestMirror::korean();
    build_mirror(&mirror);
    let services = create_test_services(&mirror);

    assert!(execute(args("../raw/Seoul"), &services, OutputFormat::Human)
        .await
        .is_ok());
}
