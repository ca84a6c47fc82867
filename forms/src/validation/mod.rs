//! Input Validation Module
//!
//! Validation and sanitization for the booking site's web forms.
//!
//! # Overview
//!
//! The validation system consists of four parts:
//!
//! 1. **Builder** - `FieldError`, `ValidationBuilder` and the `Validatable` trait
//! 2. **Rules** - declarative per-field and whole-record rule objects
//! 3. **Validators** - compiled patterns and parsers the rules are built on
//! 4. **Sanitizers** - normalization of input and escaping of output
//!
//! # Usage
//!
//! ```
//! use formguard::models::PromoCodeForm;
//! use formguard::validation::Validatable;
//! use formguard::ValidationContext;
//!
//! let code = PromoCodeForm { code: " summer24 ".into() }
//!     .check(&ValidationContext::now())
//!     .unwrap();
//! assert_eq!(code.as_str(), "SUMMER24");
//! ```
//!
//! # Violations
//!
//! A rejected form carries one violation per failing field, in declaration
//! order:
//!
//! ```json
//! [
//!   {"field": "email", "message": "Invalid email address"},
//!   {"field": "subject", "message": "Subject must be at least 5 characters"}
//! ]
//! ```

pub mod builder;
pub mod forms;
pub mod rules;
pub mod sanitizers;
pub mod validators;

// Re-export commonly used items
pub use builder::{FieldError, Validatable, ValidationBuilder, ValidationError};
pub use forms::{stay_days, MAX_STAY_DAYS};
pub use rules::{FieldRules, IntRange, Normalize, RecordRule, Rule};
pub use sanitizers::{escape_html, escape_url_component, normalize_email, normalize_promo_code, trim};
pub use validators::{is_valid_email, is_valid_phone, parse_form_date, parse_leading_int};
