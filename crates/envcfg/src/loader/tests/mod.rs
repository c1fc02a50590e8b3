//! Tests for the configuration loader.
//!
//! Responsibilities:
//! - Test value resolution, defaults and required fields against in-memory environments.
//! - Test the documented load scenarios end to end.
//! - Test loading from the real process environment.
//!
//! Does NOT handle:
//! - Annotation grammar edge cases (tested in annotation.rs).
//! - Macro expansion details (tested in macros.rs).
//!
//! Invariants:
//! - Process environment tests use `serial_test` and `temp-env` to prevent pollution.
//! - Tests use `global_test_lock()` for additional synchronization.

use std::collections::HashMap;
use std::sync::Mutex;


/// Returns the global test lock for environment variable isolation.
pub fn env_lock() -> &'static Mutex<()> {
    crate::test_util::global_test_lock()
}

/// Build an in-memory environment from key/value pairs.
pub fn map_env(pairs: &[(&str, &str)]) -> HashMap<String, String> {
    pairs
        .iter()
        .map(|(key, value)| (key.to_string(), value.to_string()))
        .collect()
}
