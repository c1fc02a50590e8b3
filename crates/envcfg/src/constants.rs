//! Centralized constants for the annotation grammar.
//!
//! An annotation has the shape `key[,required][,default]`.

/// Separator between annotation segments.
pub const ANNOTATION_SEPARATOR: char = ',';

/// Directive that marks a field as required (matched case-insensitively).
pub const REQUIRED_DIRECTIVE: &str = "required";

/// Index of the lookup key segment.
pub const KEY_SEGMENT: usize = 0;

/// Index of the directive segment.
pub const DIRECTIVE_SEGMENT: usize = 1;

/// Index of the default value segment.
pub const DEFAULT_SEGMENT: usize = 2;
