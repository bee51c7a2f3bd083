//! Common error types used across the workspace.
//!
//! Each layer defines its own typed errors and converts into
//! [`InventoryError`] via `#[from]`. Validation failures are collected per
//! field so the HTTP layer can report every offending parameter at once.

use std::collections::BTreeMap;
use std::fmt;

/// Top-level error returned by services and repositories.
#[derive(Debug, thiserror::Error)]
pub enum InventoryError {
    /// One or more client-supplied values broke a domain rule.
    #[error("validation failed: {0}")]
    Validation(#[from] ValidationErrors),

    /// The requested record does not exist.
    #[error(transparent)]
    NotFound(#[from] NotFoundError),

    /// A string could not be parsed as a record identifier.
    #[error("invalid identifier")]
    InvalidIdentifier(#[from] uuid::Error),

    /// The persistence layer failed.
    #[error("storage error")]
    Storage(#[source] Box<dyn std::error::Error + Send + Sync>),
}

/// A single rule violation on one field.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("Must not be empty.")]
    EmptyName,

    /// The value is not a member of a closed vocabulary.
    #[error("Must be one of: {}.", .choices.join(", "))]
    NotOneOf { choices: &'static [&'static str] },

    /// The value could not be decoded at all.
    #[error("Must be {expected}.")]
    Malformed { expected: &'static str },
}

/// Field-keyed collection of [`ValidationError`]s.
///
/// Fields iterate in lexical order so rendered error bodies are stable.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationErrors {
    fields: BTreeMap<&'static str, Vec<ValidationError>>,
}

impl ValidationErrors {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a collection holding exactly one error.
    #[must_use]
    pub fn single(field: &'static str, error: ValidationError) -> Self {
        let mut errors = Self::new();
        errors.add(field, error);
        errors
    }

    /// Record `error` against `field`.
    pub fn add(&mut self, field: &'static str, error: ValidationError) {
        self.fields.entry(field).or_default().push(error);
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Errors recorded for `field`, if any.
    #[must_use]
    pub fn get(&self, field: &str) -> Option<&[ValidationError]> {
        self.fields.get(field).map(Vec::as_slice)
    }

    /// Iterate over `(field, errors)` pairs.
    pub fn iter(&self) -> impl Iterator<Item = (&'static str, &[ValidationError])> {
        self.fields
            .iter()
            .map(|(field, errors)| (*field, errors.as_slice()))
    }

    /// `Ok(())` when nothing was recorded, `Err(self)` otherwise.
    ///
    /// # Errors
    ///
    /// Returns `self` when at least one error was recorded.
    pub fn into_result(self) -> Result<(), Self> {
        if self.is_empty() { Ok(()) } else { Err(self) }
    }
}

impl fmt::Display for ValidationErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut first = true;
        for (field, errors) in self.iter() {
            for error in errors {
                if !first {
                    f.write_str("; ")?;
                }
                write!(f, "{field}: {error}")?;
                first = false;
            }
        }
        Ok(())
    }
}

impl std::error::Error for ValidationErrors {}

/// The record identified by `id` does not exist.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{entity} {id} not found")]
pub struct NotFoundError {
    /// Kind of record, e.g. `"Entity"`.
    pub entity: &'static str,
    pub id: String,
}
