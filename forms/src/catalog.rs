//! Dynamic entry point: validate any form kind from a JSON record

use std::fmt;
use std::str::FromStr;

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::context::ValidationContext;
use crate::models::{
    BookingForm, BookingRequest, ContactForm, ContactSubmission, PaymentCardForm,
    PaymentCardInput, PromoCode, PromoCodeForm, UpiPaymentForm, UpiPaymentInput,
};
use crate::validation::{FieldError, Validatable, ValidationError};

/// Pseudo-field for records that cannot be read as the form's shape at all
pub const BODY_FIELD: &str = "body";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum FormKind {
    Contact,
    Booking,
    PaymentCard,
    UpiPayment,
    PromoCode,
}

impl FormKind {
    pub const ALL: [FormKind; 5] = [
        FormKind::Contact,
        FormKind::Booking,
        FormKind::PaymentCard,
        FormKind::UpiPayment,
        FormKind::PromoCode,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            FormKind::Contact => "contact",
            FormKind::Booking => "booking",
            FormKind::PaymentCard => "payment-card",
            FormKind::UpiPayment => "upi-payment",
            FormKind::PromoCode => "promo-code",
        }
    }

    /// Field paths in reporting order
    pub fn fields(self) -> &'static [&'static str] {
        match self {
            FormKind::Contact => &["name", "email", "phone", "subject", "message"],
            FormKind::Booking => &[
                "name",
                "email",
                "phone",
                "adults",
                "children",
                "checkInDate",
                "checkOutDate",
            ],
            FormKind::PaymentCard => &["cardNumber", "cardholderName", "expiryDate", "cvv"],
            FormKind::UpiPayment => &["upiId"],
            FormKind::PromoCode => &["code"],
        }
    }
}

impl fmt::Display for FormKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Invalid form kind: {0}. Allowed values: contact, booking, payment-card, upi-payment, promo-code")]
pub struct UnknownFormKind(pub String);

impl FromStr for FormKind {
    type Err = UnknownFormKind;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_lowercase().replace('_', "-");
        FormKind::ALL
            .into_iter()
            .find(|kind| kind.as_str() == wanted)
            .ok_or_else(|| UnknownFormKind(s.to_string()))
    }
}

/// The normalized record of an accepted form
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum ValidatedForm {
    Contact(ContactSubmission),
    Booking(BookingRequest),
    PaymentCard(PaymentCardInput),
    UpiPayment(UpiPaymentInput),
    PromoCode(PromoCode),
}

impl ValidatedForm {
    pub fn kind(&self) -> FormKind {
        match self {
            ValidatedForm::Contact(_) => FormKind::Contact,
            ValidatedForm::Booking(_) => FormKind::Booking,
            ValidatedForm::PaymentCard(_) => FormKind::PaymentCard,
            ValidatedForm::UpiPayment(_) => FormKind::UpiPayment,
            ValidatedForm::PromoCode(_) => FormKind::PromoCode,
        }
    }
}

/// Validate a JSON record as the given form kind.
///
/// Never panics: a record of the wrong shape is reported as a violation on
/// [`BODY_FIELD`].
pub fn validate_form(
    kind: FormKind,
    record: &Value,
    ctx: &ValidationContext,
) -> Result<ValidatedForm, ValidationError> {
    let result = match kind {
        FormKind::Contact => run::<ContactForm>(record, ctx).map(ValidatedForm::Contact),
        FormKind::Booking => run::<BookingForm>(record, ctx).map(ValidatedForm::Booking),
        FormKind::PaymentCard => {
            run::<PaymentCardForm>(record, ctx).map(ValidatedForm::PaymentCard)
        }
        FormKind::UpiPayment => run::<UpiPaymentForm>(record, ctx).map(ValidatedForm::UpiPayment),
        FormKind::PromoCode => {
            let checked = match record {
                Value::String(code) => PromoCodeForm { code: code.clone() }.check(ctx),
                _ => run::<PromoCodeForm>(record, ctx),
            };
            checked.map(ValidatedForm::PromoCode)
        }
    };

    match &result {
        Ok(_) => tracing::trace!(form = %kind, "form accepted"),
        Err(err) => tracing::debug!(form = %kind, violations = err.errors.len(), "form rejected"),
    }
    result
}

fn run<T>(record: &Value, ctx: &ValidationContext) -> Result<T::Output, ValidationError>
where
    T: Validatable + DeserializeOwned,
{
    if !record.is_object() {
        return Err(ValidationError::single(BODY_FIELD, "Expected a JSON object"));
    }
    let form = T::deserialize(record)
        .map_err(|err| ValidationError::single(BODY_FIELD, format!("Invalid form data: {err}")))?;
    form.check(ctx)
}

/// Serializable outcome of one validation call
#[derive(Debug, Clone, Serialize)]
pub struct ValidationReport {
    pub ok: bool,
    pub form: FormKind,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value: Option<ValidatedForm>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub violations: Vec<FieldError>,
}

impl ValidationReport {
    pub fn new(kind: FormKind, result: Result<ValidatedForm, ValidationError>) -> Self {
        match result {
            Ok(value) => Self {
                ok: true,
                form: kind,
                value: Some(value),
                message: None,
                violations: vec![],
            },
            Err(err) => Self {
                ok: false,
                form: kind,
                value: None,
                message: Some(err.summary()),
                violations: err.errors,
            },
        }
    }
}
