//! Shared test utilities for envcfg-demo integration tests.
//!
//! Invariants / Assumptions:
//! - `A`, `B` and `C` are removed from the inherited environment so each test
//!   sets exactly what it needs.
//! - `RUST_LOG` is removed so stderr only carries error output.

use assert_cmd::Command;

/// Returns a hermetic `envcfg-demo` command for integration testing.
pub fn demo_cmd() -> Command {
    let mut cmd = assert_cmd::cargo::cargo_bin_cmd!("envcfg-demo");
    for key in ["A", "B", "C", "RUST_LOG", "ENVCFG_DEMO_LOG_JSON"] {
        cmd.env_remove(key);
    }
    cmd
}
