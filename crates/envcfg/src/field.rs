//! Field registration types.
//!
//! Responsibilities:
//! - Describe a configuration field as `(name, annotation, slot)`.
//! - Define the closed set of supported primitive kinds and their parsers.
//! - Define the `EnvConfig` trait implemented by configuration targets.
//!
//! Does NOT handle:
//! - Resolving values from the environment (see `loader`).
//!
//! Invariants:
//! - Supported kinds are `String`, `i64` and `f64`; anything else is `Slot::Unsupported`.
//! - A slot is written only after its value parsed successfully.

use std::fmt;

use crate::loader::{ConfigError, ConfigLoader, ConversionError, Environment};

/// Supported primitive kinds, each paired with its parse function.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Kind {
    /// UTF-8 text, assigned verbatim.
    Text,
    /// Base-10 signed 64-bit integer.
    Integer,
    /// IEEE-754 64-bit float.
    Float,
}

impl Kind {
    /// The Rust type name for this kind.
    pub const fn type_name(self) -> &'static str {
        match self {
            Self::Text => "String",
            Self::Integer => "i64",
            Self::Float => "f64",
        }
    }

    /// Convert a raw string into a value of this kind.
    pub fn parse(self, raw: &str) -> Result<Value, ConversionError> {
        Ok(match self {
            Self::Text => Value::Text(raw.to_string()),
            Self::Integer => Value::Integer(raw.parse()?),
            Self::Float => Value::Float(raw.parse()?),
        })
    }
}

impl fmt::Display for Kind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.type_name())
    }
}

/// A converted field value.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    Text(String),
    Integer(i64),
    Float(f64),
}

/// Mutable storage for one field of a configuration target.
#[derive(Debug)]
pub enum Slot<'a> {
    Text(&'a mut String),
    Integer(&'a mut i64),
    Float(&'a mut f64),
    /// A field whose declared type has no conversion.
    Unsupported { type_name: &'a str },
}

impl Slot<'_> {
    /// The supported kind of this slot, or `None` for unsupported types.
    pub fn kind(&self) -> Option<Kind> {
        match self {
            Self::Text(_) => Some(Kind::Text),
            Self::Integer(_) => Some(Kind::Integer),
            Self::Float(_) => Some(Kind::Float),
            Self::Unsupported { .. } => None,
        }
    }

    /// Declared type name, used in error messages.
    pub fn type_name(&self) -> &str {
        match self {
            Self::Unsupported { type_name } => *type_name,
            other => other.kind().map(Kind::type_name).unwrap_or_default(),
        }
    }

    /// Parse `raw` into the slot's kind and store it.
    ///
    /// The slot is left untouched when parsing fails.
    pub fn assign(self, raw: &str) -> Result<(), ConfigError> {
        let Some(kind) = self.kind() else {
            return Err(ConfigError::UnsupportedType(self.type_name().to_string()));
        };
        match (self, kind.parse(raw)?) {
            (Self::Text(slot), Value::Text(value)) => *slot = value,
            (Self::Integer(slot), Value::Integer(value)) => *slot = value,
            (Self::Float(slot), Value::Float(value)) => *slot = value,
            (slot, _) => unreachable!("{} parsed into a different kind", slot.type_name()),
        }
        Ok(())
    }
}

/// One field of a configuration target.
#[derive(Debug)]
pub struct Field<'a> {
    name: &'a str,
    annotation: Option<&'a str>,
    slot: Slot<'a>,
}

impl<'a> Field<'a> {
    /// Create a field from its declared name, optional annotation and slot.
    pub fn new(name: &'a str, annotation: Option<&'a str>, slot: Slot<'a>) -> Self {
        Self {
            name,
            annotation,
            slot,
        }
    }

    /// A `String` field.
    pub fn text(name: &'a str, annotation: &'a str, slot: &'a mut String) -> Self {
        Self::new(name, Some(annotation), Slot::Text(slot))
    }

    /// An `i64` field.
    pub fn integer(name: &'a str, annotation: &'a str, slot: &'a mut i64) -> Self {
        Self::new(name, Some(annotation), Slot::Integer(slot))
    }

    /// An `f64` field.
    pub fn float(name: &'a str, annotation: &'a str, slot: &'a mut f64) -> Self {
        Self::new(name, Some(annotation), Slot::Float(slot))
    }

    /// A field whose type cannot be loaded. Loading it with a key fails.
    pub fn unsupported(name: &'a str, annotation: &'a str, type_name: &'a str) -> Self {
        Self::new(name, Some(annotation), Slot::Unsupported { type_name })
    }

    pub fn name(&self) -> &'a str {
        self.name
    }

    /// Raw annotation; an unannotated field behaves like an empty annotation.
    pub fn annotation(&self) -> &'a str {
        self.annotation.unwrap_or_default()
    }

    pub fn slot(&self) -> &Slot<'a> {
        &self.slot
    }

    pub(crate) fn into_slot(self) -> Slot<'a> {
        self.slot
    }
}

/// A configuration target that can be populated from the environment.
///
/// Implement it by hand, or declare the struct with [`env_config!`](crate::env_config).
///
/// ```
/// use envcfg::{EnvConfig, Field};
///
/// #[derive(Debug, Default)]
/// struct Config {
///     host: String,
///     port: i64,
/// }
///
/// impl EnvConfig for Config {
///     fn fields(&mut self) -> Vec<Field<'_>> {
///         vec![
///             Field::text("host", "APP_HOST,,localhost", &mut self.host),
///             Field::integer("port", "APP_PORT,,8080", &mut self.port),
///         ]
///     }
/// }
///
/// let env: std::collections::HashMap<String, String> = Default::default();
/// let config = Config::from_env_with(&env).unwrap();
/// assert_eq!(config.host, "localhost");
/// assert_eq!(config.port, 8080);
/// ```
pub trait EnvConfig {
    /// Fields in declaration order.
    fn fields(&mut self) -> Vec<Field<'_>>;

    /// Build a default target and populate it from the process environment.
    fn from_env() -> Result<Self, ConfigError>
    where
        Self: Default + Sized,
    {
        let mut target = Self::default();
        ConfigLoader::new().load(&mut target)?;
        Ok(target)
    }

    /// Build a default target and populate it from `env`.
    fn from_env_with<E>(env: &E) -> Result<Self, ConfigError>
    where
        Self: Default + Sized,
        E: Environment + ?Sized,
    {
        let mut target = Self::default();
        ConfigLoader::with_env(env).load(&mut target)?;
        Ok(target)
    }
}
