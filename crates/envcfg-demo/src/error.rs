//! Exit codes for the demo binary.
//!
//! Responsibilities:
//! - Define the process exit codes scripts can rely on.
//! - Map errors surfaced through `anyhow` to an exit code.
//!
//! Invariants:
//! - Configuration errors exit with 1.

use envcfg::ConfigError;

/// Structured exit codes for envcfg-demo.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum ExitCode {
    /// Configuration loaded and printed.
    #[allow(dead_code)]
    Success = 0,

    /// The environment did not satisfy the configuration.
    ConfigError = 1,

    /// Any other failure, such as writing the output.
    GeneralError = 70,
}

impl ExitCode {
    /// Convert the exit code to an i32 for use with std::process::exit().
    pub const fn as_i32(self) -> i32 {
        self as u8 as i32
    }
}

/// Extension trait for anyhow::Error to extract exit codes.
pub trait ExitCodeExt {
    fn exit_code(&self) -> ExitCode;
}

impl ExitCodeExt for anyhow::Error {
    fn exit_code(&self) -> ExitCode {
        if self
            .chain()
            .any(|cause| cause.downcast_ref::<ConfigError>().is_some())
        {
            ExitCode::ConfigError
        } else {
            ExitCode::GeneralError
        }
    }
}
