// Test helper functions

use super::fixtures::TestMirror;
use mirrorsearch::core::services::Services;
use mirrorsearch::core::types::BuildReport;
use std::sync::Arc;

/// Create test services over a mirror fixture, wrapped in Arc to
/// match the CLI execute() signatures
#[allow(dead_code)] // Used in integration tests
pub fn create_test_services(mirror: &TestMirror) -> Arc<Services> {
    Arc::new(Services::new(mirror.config()))
}

/// Run a full build over a mirror fixture
#[allow(dead_code)] // Used in integration tests
pub fn build_mirror(mirror: &TestMirror) -> BuildReport {
    let services = create_test_services(mirror);
    let pipeline = services
        .create_pipeline()
        .expect("Pipeline creation should succeed");
    let report = pipeline.run(false).expect("Build should succeed");
    assert_valid_report(&report);
    report
}

/// Assert that a build report is internally consistent
#[allow(dead_code)] // Used in integration tests
pub fn assert_valid_report(report: &BuildReport) {
    assert_eq!(
        report.pages_indexed + report.skipped.len(),
        report.pages_total,
        "Indexed ({}) plus skipped ({}) should equal total ({})",
        report.pages_indexed,
        report.skipped.len(),
        report.pages_total
    );
    assert!(
        report.indices_written <= report.vocabulary_size,
        "Expected indices_written ({}) <= vocabulary_size ({})",
        report.indices_written,
        report.vocabulary_size
    );
}
