//! Field errors and the builder that accumulates them
//!
//! A form is checked field by field into a `ValidationBuilder`; every failed
//! check becomes one `FieldError`, and the builder hands back either `Ok` or
//! the full list so the caller can show every problem at once.

use std::fmt;

use serde::Serialize;

use crate::context::ValidationContext;

/// A field-level validation error
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldError {
    pub field: String,
    pub message: String,
}

impl FieldError {
    pub fn new(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            message: message.into(),
        }
    }
}

impl fmt::Display for FieldError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.field, self.message)
    }
}

/// A rejected form, carrying every violation in field-declaration order
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{}", summarize(.errors))]
pub struct ValidationError {
    pub errors: Vec<FieldError>,
}

impl ValidationError {
    pub fn new(errors: Vec<FieldError>) -> Self {
        Self { errors }
    }

    pub fn single(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            errors: vec![FieldError::new(field, message)],
        }
    }

    /// The violation reported for `field`, if any
    pub fn for_field(&self, field: &str) -> Option<&FieldError> {
        self.errors.iter().find(|e| e.field == field)
    }

    pub fn summary(&self) -> String {
        summarize(&self.errors)
    }
}

fn summarize(errors: &[FieldError]) -> String {
    match errors {
        [only] => format!("Validation failed for field '{}'", only.field),
        _ => format!("Validation failed for {} fields", errors.len()),
    }
}

/// Trait for raw form input that can be normalized and validated
///
/// `sanitize` normalizes the raw strings in place; `validate` checks the
/// normalized values and builds the typed record. Use [`Validatable::check`]
/// to run both, which guarantees normalization happens exactly once.
pub trait Validatable: Sized {
    /// The normalized, typed record an accepted form turns into
    type Output;

    /// Normalize the data in place (trim, case-fold)
    fn sanitize(&mut self);

    /// Validate normalized data and return every field error
    fn validate(&self, ctx: &ValidationContext) -> Result<Self::Output, Vec<FieldError>>;

    fn check(mut self, ctx: &ValidationContext) -> Result<Self::Output, ValidationError> {
        self.sanitize();
        self.validate(ctx).map_err(ValidationError::new)
    }
}

/// Builder for accumulating validation errors
#[derive(Debug, Default)]
pub struct ValidationBuilder {
    errors: Vec<FieldError>,
}

impl ValidationBuilder {
    pub fn new() -> Self {
        Self { errors: vec![] }
    }

    /// Add an error if the result is Err
    pub fn check<F>(&mut self, field: &str, validator: F) -> &mut Self
    where
        F: FnOnce() -> Result<(), String>,
    {
        if let Err(message) = validator() {
            self.errors.push(FieldError::new(field, message));
        }
        self
    }

    /// Like `check`, but keeps the parsed value of a passing field.
    ///
    /// `None` always means an error was recorded for `field`.
    pub fn check_value<T, F>(&mut self, field: &str, parser: F) -> Option<T>
    where
        F: FnOnce() -> Result<T, String>,
    {
        match parser() {
            Ok(value) => Some(value),
            Err(message) => {
                self.errors.push(FieldError::new(field, message));
                None
            }
        }
    }

    /// Add an error directly
    pub fn add_error(&mut self, field: impl Into<String>, message: impl Into<String>) -> &mut Self {
        self.errors.push(FieldError::new(field, message));
        self
    }

    /// Finish building and return Result
    pub fn build(self) -> Result<(), Vec<FieldError>> {
        if self.errors.is_empty() {
            Ok(())
        } else {
            Err(self.errors)
        }
    }

    /// Errors collected so far, even if there are none
    pub fn into_errors(self) -> Vec<FieldError> {
        self.errors
    }

    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }

    pub fn error_count(&self) -> usize {
        self.errors.len()
    }
}
