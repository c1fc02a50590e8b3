//! Error types for configuration loading.
//!
//! Responsibilities:
//! - Define error variants for every way a load can fail.
//! - Preserve the underlying parse failure for conversion errors.
//!
//! Invariants:
//! - Conversion errors display the parse failure verbatim.
//! - Errors never include resolved environment values, only keys and field names.

use std::num::{ParseFloatError, ParseIntError};
use thiserror::Error;

/// Errors that can occur while loading a configuration target.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// A required field resolved to an empty value.
    ///
    /// `key` is the effective lookup key. It is only empty when the field
    /// itself has an empty name, in which case the message names the field.
    #[error("{}", missing_required_message(.field, .key))]
    MissingRequiredField { field: String, key: String },

    /// The field's declared type has no conversion.
    #[error("unhandled type ({0})")]
    UnsupportedType(String),

    /// The raw value could not be parsed into the declared type.
    #[error(transparent)]
    Conversion(#[from] ConversionError),
}

impl ConfigError {
    /// The effective key of a missing required field.
    pub fn missing_key(&self) -> Option<&str> {
        match self {
            Self::MissingRequiredField { key, .. } => Some(key),
            _ => None,
        }
    }
}

/// A failed string-to-primitive conversion.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConversionError {
    #[error(transparent)]
    Integer(#[from] ParseIntError),

    #[error(transparent)]
    Float(#[from] ParseFloatError),
}

impl From<ParseIntError> for ConfigError {
    fn from(error: ParseIntError) -> Self {
        ConfigError::Conversion(error.into())
    }
}

impl From<ParseFloatError> for ConfigError {
    fn from(error: ParseFloatError) -> Self {
        ConfigError::Conversion(error.into())
    }
}

fn missing_required_message(field: &str, key: &str) -> String {
    if key.is_empty() {
        format!("field ({field}) missing env prop ({key})")
    } else {
        format!("missing required field in env ({key})")
    }
}
