//! Configuration loader implementation.
//!
//! Responsibilities:
//! - Walk a target's fields in declaration order.
//! - Resolve each field's raw value from the environment or its default.
//! - Enforce required fields and convert values into their declared types.
//!
//! Does NOT handle:
//! - Annotation grammar (delegated to annotation.rs).
//! - Environment access (delegated to env.rs).
//!
//! Invariants / Assumptions:
//! - The first failing field aborts the load; later fields are untouched.
//! - Fields that fail conversion are never written.
//! - Unkeyed, non-required fields are skipped without a lookup.
//! - Resolved values are never logged, only keys and where the value came from.

use super::env::{Environment, ProcessEnv};
use super::error::ConfigError;
use crate::annotation::Annotation;
use crate::field::{EnvConfig, Field};

/// Where a field's raw value came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ValueSource {
    Environment,
    Default,
    Empty,
}

impl ValueSource {
    fn as_str(self) -> &'static str {
        match self {
            Self::Environment => "environment",
            Self::Default => "default",
            Self::Empty => "empty",
        }
    }
}

/// Loads annotated configuration targets from an [`Environment`].
pub struct ConfigLoader<'e, E: ?Sized = ProcessEnv> {
    env: &'e E,
}

impl Default for ConfigLoader<'static, ProcessEnv> {
    fn default() -> Self {
        Self::new()
    }
}

impl ConfigLoader<'static, ProcessEnv> {
    /// Create a loader that reads the process environment.
    pub fn new() -> Self {
        Self { env: &ProcessEnv }
    }
}

impl<'e, E> ConfigLoader<'e, E>
where
    E: Environment + ?Sized,
{
    /// Create a loader that reads from `env`.
    pub fn with_env(env: &'e E) -> Self {
        Self { env }
    }

    /// Populate `target` field by field.
    ///
    /// On error the target is partially populated and should be discarded.
    pub fn load<T>(&self, target: &mut T) -> Result<(), ConfigError>
    where
        T: EnvConfig + ?Sized,
    {
        for field in target.fields() {
            self.load_field(field)?;
        }
        Ok(())
    }

    fn load_field(&self, field: Field<'_>) -> Result<(), ConfigError> {
        let name = field.name();
        let annotation = Annotation::parse(field.annotation());
        let key = annotation.effective_key(name);

        if key.is_empty() {
            if annotation.required {
                return Err(ConfigError::MissingRequiredField {
                    field: name.to_string(),
                    key: String::new(),
                });
            }
            tracing::trace!(field = name, "Skipping config field without key");
            return Ok(());
        }

        let (value, source) = self.resolve(key, &annotation);
        if annotation.required && value.is_empty() {
            return Err(ConfigError::MissingRequiredField {
                field: name.to_string(),
                key: key.to_string(),
            });
        }

        tracing::debug!(
            field = name,
            key,
            source = source.as_str(),
            "Resolved config field"
        );
        field.into_slot().assign(&value)
    }

    fn resolve(&self, key: &str, annotation: &Annotation<'_>) -> (String, ValueSource) {
        let value = self.env.get(key).unwrap_or_default();
        if !value.is_empty() {
            return (value, ValueSource::Environment);
        }
        match annotation.fallback() {
            Some(default) => (default.to_string(), ValueSource::Default),
            None => (value, ValueSource::Empty),
        }
    }
}

/// Populate `target` from the process environment.
///
/// ```
/// envcfg::env_config! {
///     #[derive(Debug, Default)]
///     struct Config {
///         greeting: String = "_ENVCFG_DOC_GREETING,,hello",
///     }
/// }
///
/// let mut config = Config::default();
/// envcfg::load(&mut config).unwrap();
/// assert_eq!(config.greeting, "hello");
/// ```
pub fn load<T>(target: &mut T) -> Result<(), ConfigError>
where
    T: EnvConfig + ?Sized,
{
    ConfigLoader::new().load(target)
}
