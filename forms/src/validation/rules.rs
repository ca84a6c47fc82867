//! Declarative rule objects
//!
//! Every form is described by a list of [`FieldRules`] (one per field, in
//! declaration order) and a list of [`RecordRule`]s over the whole normalized
//! record. Within a field, rules run in order and the first failure is the
//! field's only violation.

use once_cell::sync::Lazy;
use regex::Regex;

use super::builder::ValidationBuilder;
use super::sanitizers::{normalize_email, normalize_promo_code, trim};
use super::validators::{char_len, is_valid_email, is_valid_phone, parse_leading_int};

/// How a raw value is normalized before any rule sees it
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Normalize {
    Trim,
    TrimLowercase,
    TrimUppercase,
}

impl Normalize {
    pub fn apply(self, raw: &str) -> String {
        match self {
            Normalize::Trim => trim(raw),
            Normalize::TrimLowercase => normalize_email(raw),
            Normalize::TrimUppercase => normalize_promo_code(raw),
        }
    }
}

/// A single predicate on a normalized string value
#[derive(Debug)]
pub enum Rule {
    MinChars(usize, &'static str),
    MaxChars(usize, &'static str),
    Matches(&'static Lazy<Regex>, &'static str),
    Email(&'static str),
    Phone(&'static str),
}

impl Rule {
    pub fn check(&self, value: &str) -> Result<(), String> {
        let (passed, message) = match *self {
            Rule::MinChars(min, message) => (char_len(value) >= min, message),
            Rule::MaxChars(max, message) => (char_len(value) <= max, message),
            Rule::Matches(pattern, message) => (pattern.is_match(value), message),
            Rule::Email(message) => (is_valid_email(value), message),
            Rule::Phone(message) => (is_valid_phone(value), message),
        };
        if passed {
            Ok(())
        } else {
            Err(message.to_string())
        }
    }
}

/// The normalization and ordered rule chain of one string field
#[derive(Debug)]
pub struct FieldRules {
    pub field: &'static str,
    pub normalize: Normalize,
    pub rules: &'static [Rule],
}

impl FieldRules {
    pub fn normalize(&self, value: &mut String) {
        *value = self.normalize.apply(value);
    }

    /// First failing rule wins
    pub fn check(&self, value: &str) -> Result<(), String> {
        self.rules.iter().try_for_each(|rule| rule.check(value))
    }

    pub fn apply(&self, builder: &mut ValidationBuilder, value: &str) {
        builder.check(self.field, || self.check(value));
    }
}

/// An inclusive integer bound on a form value typed as text.
///
/// Unparseable input fails with the same message as an out-of-range number.
#[derive(Debug)]
pub struct IntRange {
    pub field: &'static str,
    pub min: u8,
    pub max: u8,
    pub message: &'static str,
}

impl IntRange {
    pub fn parse(&self, raw: &str) -> Result<u8, String> {
        parse_leading_int(raw)
            .and_then(|n| u8::try_from(n).ok())
            .filter(|n| (self.min..=self.max).contains(n))
            .ok_or_else(|| self.message.to_string())
    }

    pub fn apply(&self, builder: &mut ValidationBuilder, raw: &str) -> Option<u8> {
        builder.check_value(self.field, || self.parse(raw))
    }
}

/// A predicate over the whole record, reported against one field
pub struct RecordRule<T> {
    pub field: &'static str,
    pub message: &'static str,
    pub holds: fn(&T) -> bool,
}

impl<T> RecordRule<T> {
    pub fn apply(&self, builder: &mut ValidationBuilder, record: &T) {
        if !(self.holds)(record) {
            builder.add_error(self.field, self.message);
        }
    }
}
