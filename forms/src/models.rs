use std::fmt;

use chrono::NaiveDateTime;
use serde::{Deserialize, Deserializer, Serialize};

// ─────────────────────────────────────────────────────────────────────────────
// Raw form input, as posted by the browser
// ─────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ContactForm {
    pub name: String,
    pub email: String,
    pub phone: Option<String>,
    pub subject: String,
    pub message: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct BookingForm {
    pub name: String,
    pub email: String,
    pub phone: String,
    #[serde(deserialize_with = "text_or_number")]
    pub adults: String,
    #[serde(deserialize_with = "text_or_number")]
    pub children: String,
    pub check_in_date: Option<String>,
    pub check_out_date: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct PaymentCardForm {
    pub card_number: String,
    pub cardholder_name: String,
    pub expiry_date: String,
    pub cvv: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct UpiPaymentForm {
    pub upi_id: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PromoCodeForm {
    pub code: String,
}

/// Number inputs arrive as text from forms but as numbers from JSON clients.
fn text_or_number<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Raw {
        Text(String),
        Integer(i64),
        Float(f64),
        Null,
    }

    Ok(match Raw::deserialize(deserializer)? {
        Raw::Text(text) => text,
        Raw::Integer(n) => n.to_string(),
        Raw::Float(n) => n.to_string(),
        Raw::Null => String::new(),
    })
}

// ─────────────────────────────────────────────────────────────────────────────
// Normalized records produced by an accepted form
// ─────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContactSubmission {
    pub name: String,
    pub email: String,
    pub phone: Option<String>,
    pub subject: String,
    pub message: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BookingRequest {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub adults: u8,
    pub children: u8,
    pub check_in_date: NaiveDateTime,
    pub check_out_date: NaiveDateTime,
}

impl BookingRequest {
    pub fn guests(&self) -> u16 {
        u16::from(self.adults) + u16::from(self.children)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PaymentCardInput {
    pub card_number: String,
    pub cardholder_name: String,
    pub expiry_date: String,
    pub cvv: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpiPaymentInput {
    pub upi_id: String,
}

/// An accepted promo code, always upper-case alphanumeric
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PromoCode(String);

impl PromoCode {
    pub(crate) fn new(code: String) -> Self {
        Self(code)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for PromoCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_missing_fields_default_to_empty() {
        let form: ContactForm = serde_json::from_value(json!({ "name": "Ann" })).unwrap();
        assert_eq!(form.name, "Ann");
        assert_eq!(form.email, "");
        assert_eq!(form.phone, None);
    }

    #[test]
    fn test_booking_form_camel_case_and_numbers() {
        let form: BookingForm = serde_json::from_value(json!({
            "adults": 2,
            "children": "1",
            "checkInDate": "2026-07-01",
            "checkOutDate": null
        }))
        .unwrap();
        assert_eq!(form.adults, "2");
        assert_eq!(form.children, "1");
        assert_eq!(form.check_in_date.as_deref(), Some("2026-07-01"));
        assert_eq!(form.check_out_date, None);

        let form: BookingForm = serde_json::from_value(json!({ "adults": 2.5, "children": null })).unwrap();
        assert_eq!(form.adults, "2.5");
        assert_eq!(form.children, "");
    }

    #[test]
    fn test_wrong_types_are_rejected() {
        assert!(serde_json::from_value::<ContactForm>(json!({ "name": 42 })).is_err());
        assert!(serde_json::from_value::<BookingForm>(json!({ "adults": [1] })).is_err());
    }

    #[test]
    fn test_promo_code_serializes_as_string() {
        let code = PromoCode::new("ABCD1".to_string());
        assert_eq!(serde_json::to_value(&code).unwrap(), json!("ABCD1"));
        assert_eq!(code.to_string(), "ABCD1");
    }
}
