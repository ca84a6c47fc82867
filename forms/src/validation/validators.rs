//! Field validators for form input
//!
//! Compiled patterns and the predicates/parsers built on them. Character
//! classes are spelled out as ASCII (`[0-9]`, `[A-Za-z0-9_]`) because the
//! `regex` crate's `\d` and `\w` are Unicode-aware.

use chrono::{DateTime, NaiveDate, NaiveDateTime, NaiveTime};
use once_cell::sync::Lazy;
use regex::Regex;

/// Person names: letters, whitespace, apostrophes and hyphens
pub static NAME_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[a-zA-Z\s'-]+$").expect("name pattern compiles"));

/// Optional `+`country code (1-4 digits) and separator, then the subscriber digits
static PHONE_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^(\+?[0-9]{1,4}[\s-])?([0-9]{8,12})$").expect("phone pattern compiles")
});

/// Email shape minus its two lookaheads, which `is_valid_email` checks directly
static EMAIL_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[A-Za-z0-9_'+\-.]*[A-Za-z0-9_+\-]@([A-Za-z0-9][A-Za-z0-9\-]*\.)+[A-Za-z]{2,}$")
        .expect("email pattern compiles")
});

/// Four groups of four digits separated by single whitespace characters
pub static CARD_NUMBER_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[0-9]{4}\s[0-9]{4}\s[0-9]{4}\s[0-9]{4}$").expect("card number pattern compiles")
});

/// `MM/YY` with month 01-12
pub static EXPIRY_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^(0[1-9]|1[0-2])/[0-9]{2}$").expect("expiry pattern compiles"));

pub static CVV_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[0-9]{3}$").expect("cvv pattern compiles"));

/// `localpart@handle`, both made of word characters, dots or hyphens
pub static UPI_ID_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[A-Za-z0-9_.\-]+@[A-Za-z0-9_.\-]+$").expect("upi id pattern compiles")
});

pub static PROMO_CODE_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[A-Z0-9]+$").expect("promo code pattern compiles"));

const DATE_TIME_FORMATS: [&str; 4] = [
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%dT%H:%M:%S",
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%d %H:%M:%S",
];

/// Length in characters, not bytes
pub fn char_len(value: &str) -> usize {
    value.chars().count()
}

/// Validate an email address shape.
///
/// The local part may not start with a dot and the address may not contain
/// two consecutive dots anywhere.
pub fn is_valid_email(email: &str) -> bool {
    !email.starts_with('.') && !email.contains("..") && EMAIL_PATTERN.is_match(email)
}

/// Validate a phone number: 8-12 subscriber digits, optionally preceded by a
/// country code and a space or hyphen.
///
/// Only an all-zero subscriber run is excluded; internal or leading zeros
/// elsewhere are accepted.
pub fn is_valid_phone(phone: &str) -> bool {
    PHONE_PATTERN
        .captures(phone)
        .and_then(|caps| caps.get(2))
        .is_some_and(|subscriber| subscriber.as_str().bytes().any(|b| b != b'0'))
}

/// Parse the leading integer of a form value.
///
/// Leading whitespace and a single sign are skipped, then decimal digits (or
/// hex digits after `0x`) are read up to the first other character, which
/// ends the number. `None` when no digit was read. Values beyond `i64`
/// saturate.
pub fn parse_leading_int(value: &str) -> Option<i64> {
    let value = value.trim_start_matches(|c: char| c.is_whitespace() || c == '\u{FEFF}');
    let (negative, rest) = match value.as_bytes().first() {
        Some(b'-') => (true, &value[1..]),
        Some(b'+') => (false, &value[1..]),
        _ => (false, value),
    };
    let (radix, digits) = match rest.get(..2) {
        Some("0x") | Some("0X") => (16, &rest[2..]),
        _ => (10, rest),
    };

    let end = digits
        .find(|c: char| !c.is_digit(radix))
        .unwrap_or(digits.len());
    if end == 0 {
        return None;
    }

    let magnitude = i64::from_str_radix(&digits[..end], radix).unwrap_or(i64::MAX);
    Some(if negative { -magnitude } else { magnitude })
}

/// Parse a date picker value.
///
/// Accepts `YYYY-MM-DD` (midnight), a local date-time, or RFC 3339 (kept as
/// wall-clock time in its own offset).
pub fn parse_form_date(value: &str) -> Option<NaiveDateTime> {
    let value = value.trim();

    if let Ok(date) = NaiveDate::parse_from_str(value, "%Y-%m-%d") {
        return Some(date.and_time(NaiveTime::MIN));
    }
    if let Ok(date_time) = DateTime::parse_from_rfc3339(value) {
        return Some(date_time.naive_local());
    }
    DATE_TIME_FORMATS
        .iter()
        .find_map(|format| NaiveDateTime::parse_from_str(value, format).ok())
}
