//! Per-field annotation parsing.
//!
//! Responsibilities:
//! - Split a raw annotation (`key[,required][,default]`) into its segments.
//! - Resolve the effective lookup key for a field.
//!
//! Does NOT handle:
//! - Environment lookups or type conversion (see `loader`).
//!
//! Invariants:
//! - Parsing is total: short or malformed input degrades to empty/false values.
//! - Segments past the default are ignored.
//! - The `required` directive is matched case-insensitively.

use crate::constants::{
    ANNOTATION_SEPARATOR, DEFAULT_SEGMENT, DIRECTIVE_SEGMENT, KEY_SEGMENT, REQUIRED_DIRECTIVE,
};

/// A parsed field annotation, borrowing from the raw annotation string.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Annotation<'a> {
    /// Environment variable name. Empty means "only the field name, if required".
    pub key: &'a str,
    /// Whether the field must resolve to a non-empty value.
    pub required: bool,
    /// Fallback used when the environment value is empty. Empty means no default.
    pub default_value: &'a str,
}

impl<'a> Annotation<'a> {
    /// Parse a raw annotation string.
    ///
    /// ```
    /// use envcfg::Annotation;
    ///
    /// let annotation = Annotation::parse("PORT,required,8080");
    /// assert_eq!(annotation.key, "PORT");
    /// assert!(annotation.required);
    /// assert_eq!(annotation.default_value, "8080");
    /// ```
    pub fn parse(raw: &'a str) -> Self {
        let mut annotation = Self::default();
        for (index, segment) in raw.split(ANNOTATION_SEPARATOR).enumerate() {
            match index {
                KEY_SEGMENT => annotation.key = segment,
                DIRECTIVE_SEGMENT => {
                    annotation.required = segment.eq_ignore_ascii_case(REQUIRED_DIRECTIVE)
                }
                DEFAULT_SEGMENT => annotation.default_value = segment,
                _ => break,
            }
        }
        annotation
    }

    /// Returns the key to look up for a field with the given declared name.
    ///
    /// A required field without an explicit key falls back to its own name.
    pub fn effective_key(&self, field_name: &'a str) -> &'a str {
        if self.key.is_empty() && self.required {
            field_name
        } else {
            self.key
        }
    }

    /// Returns the default value, if one was given.
    pub fn fallback(&self) -> Option<&'a str> {
        (!self.default_value.is_empty()).then_some(self.default_value)
    }
}

/// Parse a raw annotation string into `(key, required, default)` form.
pub fn parse_annotation(raw: &str) -> Annotation<'_> {
    Annotation::parse(raw)
}
