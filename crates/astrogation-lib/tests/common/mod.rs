//! Common test utilities and fixture helpers.

use std::path::PathBuf;

use astrogation_lib::{load_galaxy, Galaxy};

/// Path to the small galaxy fixture used by integration tests.
#[allow(dead_code)]
pub fn fixture_path() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("../../docs/fixtures/galaxy_small.json")
}

/// Load the fixture galaxy, panicking on failure.
pub fn fixture_galaxy() -> Galaxy {
    load_galaxy(&fixture_path()).expect("fixture galaxy loads")
}
