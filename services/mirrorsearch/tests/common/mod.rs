// Common test utilities and fixtures

pub mod fixtures;
pub mod helpers;

// Re-export commonly used items
// Note: These may appear unused in one test crate but are used in another
#[allow(unused_imports)]
pub use fixtures::{TestMirror, KOREAN_PAGES};
#[allow(unused_imports)]
pub use helpers::{assert_valid_report, build_mirror, create_test_services};
