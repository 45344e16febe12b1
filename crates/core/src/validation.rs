//! Field-level validation errors.
//!
//! Form payloads (shipping details, admin product drafts) are validated into a
//! [`ValidationErrors`] value that maps field names to messages, so callers can
//! annotate the submitted form instead of failing on the first problem.

use core::fmt;
use std::collections::BTreeMap;

use serde::Serialize;

/// Field name used for errors that are not tied to a single form field.
pub const GENERAL: &str = "_general";

/// A collection of validation messages keyed by field name.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct ValidationErrors {
    fields: BTreeMap<String, Vec<String>>,
}

impl ValidationErrors {
    /// Create an empty set of errors.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a set holding a single error.
    #[must_use]
    pub fn single(field: &str, message: impl Into<String>) -> Self {
        let mut errors = Self::new();
        errors.add(field, message);
        errors
    }

    /// Record an error against a field.
    pub fn add(&mut self, field: &str, message: impl Into<String>) {
        self.fields
            .entry(field.to_owned())
            .or_default()
            .push(message.into());
    }

    /// Record a "required" error when `value` is blank.
    pub fn require(&mut self, field: &str, value: &str, message: &str) {
        if value.trim().is_empty() {
            self.add(field, message);
        }
    }

    /// Whether no errors were recorded.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Messages recorded for a field.
    #[must_use]
    pub fn field(&self, field: &str) -> &[String] {
        self.fields.get(field).map_or(&[], Vec::as_slice)
    }

    /// Convert into a `Result`, failing if any error was recorded.
    ///
    /// # Errors
    ///
    /// Returns `self` if it is not empty.
    pub fn into_result(self) -> Result<(), Self> {
        if self.is_empty() { Ok(()) } else { Err(self) }
    }
}

impl fmt::Display for ValidationErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let fields: Vec<&str> = self.fields.keys().map(String::as_str).collect();
        write!(f, "validation failed: {}", fields.join(", "))
    }
}

impl std::error::Error for ValidationErrors {}
