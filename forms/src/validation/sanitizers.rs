//! Input normalization and output escaping
//!
//! Normalizers run on raw form input before any rule sees it. The escapers
//! run on user-supplied text right before it is rendered into HTML or placed
//! in a URL.

use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};

/// Bytes left as-is in a URL component: ASCII alphanumerics plus `-_.!~*'()`.
const URI_COMPONENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'!')
    .remove(b'~')
    .remove(b'*')
    .remove(b'\'')
    .remove(b'(')
    .remove(b')');

fn is_form_whitespace(c: char) -> bool {
    c.is_whitespace() || c == '\u{FEFF}'
}

/// Trim leading and trailing whitespace (including a byte-order mark)
pub fn trim(value: &str) -> String {
    value.trim_matches(is_form_whitespace).to_string()
}

/// Trim and lower-case an email address
pub fn normalize_email(email: &str) -> String {
    trim(email).to_lowercase()
}

/// Trim and upper-case a promo code
pub fn normalize_promo_code(code: &str) -> String {
    trim(code).to_uppercase()
}

/// Escape `& < > " ' /` for safe embedding in HTML text or attributes.
///
/// Escaping is not idempotent: running it twice escapes the `&` of every
/// reference produced by the first pass. There is no inverse operation, so
/// escape exactly once, at the point of rendering.
pub fn escape_html(value: &str) -> String {
    let mut escaped = String::with_capacity(value.len());
    for c in value.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#x27;"),
            '/' => escaped.push_str("&#x2F;"),
            _ => escaped.push(c),
        }
    }
    escaped
}

/// Trim, then percent-encode everything outside the unreserved URL set.
pub fn escape_url_component(value: &str) -> String {
    utf8_percent_encode(&trim(value), URI_COMPONENT).to_string()
}
