//! Tests for the show-config and completions commands

use crate::common::{create_test_services, TestMirror};
use clap_complete::Shell;
use mirrorsearch::cli::commands::completions::write_completions;
use mirrorsearch::cli::commands::config::{execute, ConfigArgs};
use mirrorsearch::cli::OutputFormat;

#[tokio::test]
async fn test_show_config_human() {
    let mirror = TestMirror::new();
    let services = create_test_services(&mirror);

    assert!(execute(ConfigArgs {}, &services, OutputFormat::Human)
        .await
        .is_ok());
}

#[tokio::test]
async fn test_show_config_json() {
    let mirror = TestMirror::new();
    let services = create_test_services(&mirror);

    assert!(execute(ConfigArgs {}, &services, OutputFormat::Json)
        .await
        .is_ok());
}

#[test]
fn test_completions_mention_commands() {
    let mut out = Vec::new();
    write_completions(Shell::Bash, &mut out);
    let script = String::from_utf8(out).unwrap();

    assert!(script.contains("mirrorsearch"));
    assert!(script.contains("show-config"));
}
