//! Environment lookups for configuration loading.
//!
//! Responsibilities:
//! - Define the `Environment` lookup seam used by `ConfigLoader`.
//! - Read the process environment (`ProcessEnv`).
//! - Provide in-memory and closure-backed lookups for hermetic loads.
//!
//! Does NOT handle:
//! - `.env` files or any other file-based source.
//! - Caching: every lookup goes to the underlying source.
//!
//! Invariants:
//! - An absent variable and an empty variable are indistinguishable to the loader.
//! - Values are returned verbatim (no trimming).
//! - Process variables that are not valid Unicode are treated as absent.

use std::collections::{BTreeMap, HashMap};
use std::env::VarError;
use std::hash::BuildHasher;

/// A read-only key → value lookup.
pub trait Environment {
    /// Look up `key`, returning `None` when it is not set.
    fn get(&self, key: &str) -> Option<String>;
}

/// The operating system environment of the current process.
#[derive(Debug, Clone, Copy, Default)]
pub struct ProcessEnv;

impl Environment for ProcessEnv {
    fn get(&self, key: &str) -> Option<String> {
        match std::env::var(key) {
            Ok(value) => Some(value),
            Err(VarError::NotPresent) => None,
            Err(VarError::NotUnicode(_)) => {
                tracing::warn!(key, "Environment variable is not valid unicode, treating as unset");
                None
            }
        }
    }
}

impl<S: BuildHasher> Environment for HashMap<String, String, S> {
    fn get(&self, key: &str) -> Option<String> {
        HashMap::get(self, key).cloned()
    }
}

impl Environment for BTreeMap<String, String> {
    fn get(&self, key: &str) -> Option<String> {
        BTreeMap::get(self, key).cloned()
    }
}

/// An environment backed by a lookup closure. See [`from_fn`].
#[derive(Clone, Copy)]
pub struct FnEnv<F>(F);

impl<F> Environment for FnEnv<F>
where
    F: Fn(&str) -> Option<String>,
{
    fn get(&self, key: &str) -> Option<String> {
        (self.0)(key)
    }
}

impl<F> std::fmt::Debug for FnEnv<F> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FnEnv").finish_non_exhaustive()
    }
}

/// Wrap a lookup closure as an [`Environment`].
///
/// ```
/// use envcfg::{Environment, from_fn};
///
/// let env = from_fn(|key| (key == "PORT").then(|| "8080".to_string()));
/// assert_eq!(env.get("PORT").as_deref(), Some("8080"));
/// assert_eq!(env.get("HOST"), None);
/// ```
pub fn from_fn<F>(lookup: F) -> FnEnv<F>
where
    F: Fn(&str) -> Option<String>,
{
    FnEnv(lookup)
}

/// Read `key` from `env`, returning an empty string when it is unset.
pub fn env_var_or_empty<E>(env: &E, key: &str) -> String
where
    E: Environment + ?Sized,
{
    env.get(key).unwrap_or_default()
}
