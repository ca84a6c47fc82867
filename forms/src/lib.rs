//! Validation rules and output sanitizers for the booking site's web forms.
//!
//! [`validate_form`] checks a JSON record against one of the [`FormKind`]s and
//! returns either the normalized, typed record or every violated rule.
//! [`escape_html`] and [`escape_url_component`] make user-supplied text safe to
//! render or embed in a URL.

pub mod catalog;
pub mod context;
pub mod models;
pub mod validation;

pub use catalog::{validate_form, FormKind, UnknownFormKind, ValidatedForm, ValidationReport};
pub use context::ValidationContext;
pub use validation::{escape_html, escape_url_component, FieldError, Validatable, ValidationError};
