//! Configuration loader for environment variables.
//!
//! Responsibilities:
//! - Populate `EnvConfig` targets from an `Environment` lookup.
//! - Define the error types returned by a load.
//!
//! Does NOT handle:
//! - File-based sources, precedence across sources, or reloading.
//! - Process startup or exit behaviour on failure (left to the embedding binary).
//!
//! Invariants / Assumptions:
//! - Fields load in declaration order and the first error is returned verbatim.
//! - Nothing is cached between loads; the environment is re-read every time.

mod builder;
mod env;
mod error;

pub use builder::{ConfigLoader, load};
pub use env::{Environment, FnEnv, ProcessEnv, env_var_or_empty, from_fn};
pub use error::{ConfigError, ConversionError};

#[cfg(test)]
mod tests;
