//! Rule catalog and `Validatable` implementations for every form
//!
//! Each form's fields are declared as `FieldRules` statics in the order they
//! are reported; cross-field rules are declared separately and only run once
//! every field has passed.

use chrono::{NaiveDateTime, NaiveTime};

use crate::context::ValidationContext;
use crate::models::{
    BookingForm, BookingRequest, ContactForm, ContactSubmission, PaymentCardForm,
    PaymentCardInput, PromoCode, PromoCodeForm, UpiPaymentForm, UpiPaymentInput,
};

use super::builder::{FieldError, Validatable, ValidationBuilder};
use super::rules::{FieldRules, IntRange, Normalize, RecordRule, Rule};
use super::validators::{
    parse_form_date, CARD_NUMBER_PATTERN, CVV_PATTERN, EXPIRY_PATTERN, NAME_PATTERN,
    PROMO_CODE_PATTERN, UPI_ID_PATTERN,
};

/// Longest stay a single booking may cover
pub const MAX_STAY_DAYS: i64 = 30;

const DAY_MILLIS: i64 = 24 * 60 * 60 * 1000;

const PHONE_MESSAGE: &str = "Please enter a valid phone number (8-12 digits)";

// ─────────────────────────────────────────────────────────────────────────────
// Shared field rules
// ─────────────────────────────────────────────────────────────────────────────

static NAME: FieldRules = FieldRules {
    field: "name",
    normalize: Normalize::Trim,
    rules: &[
        Rule::MinChars(2, "Name must be at least 2 characters"),
        Rule::MaxChars(100, "Name must be less than 100 characters"),
        Rule::Matches(
            &NAME_PATTERN,
            "Name can only contain letters, spaces, hyphens, and apostrophes",
        ),
    ],
};

static PHONE: FieldRules = FieldRules {
    field: "phone",
    normalize: Normalize::Trim,
    rules: &[Rule::Phone(PHONE_MESSAGE)],
};

// ─────────────────────────────────────────────────────────────────────────────
// ContactForm
// ─────────────────────────────────────────────────────────────────────────────

static CONTACT_EMAIL: FieldRules = FieldRules {
    field: "email",
    normalize: Normalize::TrimLowercase,
    rules: &[
        Rule::Email("Invalid email address"),
        Rule::MaxChars(255, "Email must be less than 255 characters"),
    ],
};

static SUBJECT: FieldRules = FieldRules {
    field: "subject",
    normalize: Normalize::Trim,
    rules: &[
        Rule::MinChars(5, "Subject must be at least 5 characters"),
        Rule::MaxChars(200, "Subject must be less than 200 characters"),
    ],
};

static MESSAGE: FieldRules = FieldRules {
    field: "message",
    normalize: Normalize::Trim,
    rules: &[
        Rule::MinChars(10, "Message must be at least 10 characters"),
        Rule::MaxChars(1000, "Message must be less than 1000 characters"),
    ],
};

impl Validatable for ContactForm {
    type Output = ContactSubmission;

    fn sanitize(&mut self) {
        NAME.normalize(&mut self.name);
        CONTACT_EMAIL.normalize(&mut self.email);
        // An untouched phone input posts "", which means "not given". Anything
        // else, whitespace included, is a phone number that must validate.
        self.phone = match self.phone.take() {
            Some(phone) if !phone.is_empty() => Some(PHONE.normalize.apply(&phone)),
            _ => None,
        };
        SUBJECT.normalize(&mut self.subject);
        MESSAGE.normalize(&mut self.message);
    }

    fn validate(&self, _ctx: &ValidationContext) -> Result<ContactSubmission, Vec<FieldError>> {
        let mut builder = ValidationBuilder::new();

        NAME.apply(&mut builder, &self.name);
        CONTACT_EMAIL.apply(&mut builder, &self.email);
        if let Some(ref phone) = self.phone {
            PHONE.apply(&mut builder, phone);
        }
        SUBJECT.apply(&mut builder, &self.subject);
        MESSAGE.apply(&mut builder, &self.message);

        builder.build()?;

        Ok(ContactSubmission {
            name: self.name.clone(),
            email: self.email.clone(),
            phone: self.phone.clone(),
            subject: self.subject.clone(),
            message: self.message.clone(),
        })
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// BookingForm
// ─────────────────────────────────────────────────────────────────────────────

static BOOKING_EMAIL: FieldRules = FieldRules {
    field: "email",
    normalize: Normalize::TrimLowercase,
    rules: &[
        Rule::Email("Please enter a valid email address"),
        Rule::MaxChars(255, "Email must be less than 255 characters"),
    ],
};

static ADULTS: IntRange = IntRange {
    field: "adults",
    min: 1,
    max: 20,
    message: "Number of adults must be between 1 and 20",
};

static CHILDREN: IntRange = IntRange {
    field: "children",
    min: 0,
    max: 20,
    message: "Number of children must be between 0 and 20",
};

static BOOKING_RECORD_RULES: [RecordRule<BookingRequest>; 2] = [
    RecordRule {
        field: "checkOutDate",
        message: "Check-out date must be after check-in date",
        holds: |booking| booking.check_out_date > booking.check_in_date,
    },
    RecordRule {
        field: "checkOutDate",
        message: "Booking duration cannot exceed 30 days",
        holds: |booking| stay_days(booking) <= MAX_STAY_DAYS,
    },
];

/// Whole days spanned by a booking, any partial day rounded up
pub fn stay_days(booking: &BookingRequest) -> i64 {
    let millis = (booking.check_out_date - booking.check_in_date)
        .num_milliseconds()
        .abs();
    (millis + DAY_MILLIS - 1) / DAY_MILLIS
}

fn required_date(raw: Option<&str>, missing: &str) -> Result<NaiveDateTime, String> {
    match raw.map(str::trim) {
        None | Some("") => Err(missing.to_string()),
        Some(value) => parse_form_date(value).ok_or_else(|| "Invalid date".to_string()),
    }
}

impl Validatable for BookingForm {
    type Output = BookingRequest;

    fn sanitize(&mut self) {
        NAME.normalize(&mut self.name);
        BOOKING_EMAIL.normalize(&mut self.email);
        PHONE.normalize(&mut self.phone);
    }

    fn validate(&self, ctx: &ValidationContext) -> Result<BookingRequest, Vec<FieldError>> {
        let mut builder = ValidationBuilder::new();

        NAME.apply(&mut builder, &self.name);
        BOOKING_EMAIL.apply(&mut builder, &self.email);
        PHONE.apply(&mut builder, &self.phone);
        let adults = ADULTS.apply(&mut builder, &self.adults);
        let children = CHILDREN.apply(&mut builder, &self.children);
        let check_in = builder.check_value("checkInDate", || {
            let date = required_date(self.check_in_date.as_deref(), "Please select a check-in date")?;
            if date < ctx.today.and_time(NaiveTime::MIN) {
                return Err("Check-in date cannot be in the past".to_string());
            }
            Ok(date)
        });
        let check_out = builder.check_value("checkOutDate", || {
            required_date(self.check_out_date.as_deref(), "Please select a check-out date")
        });

        let (Some(adults), Some(children), Some(check_in_date), Some(check_out_date)) =
            (adults, children, check_in, check_out)
        else {
            return Err(builder.into_errors());
        };
        builder.build()?;

        let booking = BookingRequest {
            name: self.name.clone(),
            email: self.email.clone(),
            phone: self.phone.clone(),
            adults,
            children,
            check_in_date,
            check_out_date,
        };

        let mut builder = ValidationBuilder::new();
        for rule in &BOOKING_RECORD_RULES {
            rule.apply(&mut builder, &booking);
        }
        builder.build()?;

        Ok(booking)
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// PaymentCardForm
// ─────────────────────────────────────────────────────────────────────────────

static CARD_NUMBER: FieldRules = FieldRules {
    field: "cardNumber",
    normalize: Normalize::Trim,
    rules: &[Rule::Matches(&CARD_NUMBER_PATTERN, "Card number must be 16 digits")],
};

static CARDHOLDER_NAME: FieldRules = FieldRules {
    field: "cardholderName",
    normalize: Normalize::Trim,
    rules: &[
        Rule::MinChars(2, "Cardholder name must be at least 2 characters"),
        Rule::MaxChars(100, "Cardholder name must be less than 100 characters"),
        Rule::Matches(
            &NAME_PATTERN,
            "Cardholder name can only contain letters, spaces, hyphens, and apostrophes",
        ),
    ],
};

static EXPIRY_DATE: FieldRules = FieldRules {
    field: "expiryDate",
    normalize: Normalize::Trim,
    rules: &[Rule::Matches(&EXPIRY_PATTERN, "Expiry date must be in MM/YY format")],
};

static CVV: FieldRules = FieldRules {
    field: "cvv",
    normalize: Normalize::Trim,
    rules: &[Rule::Matches(&CVV_PATTERN, "CVV must be 3 digits")],
};

impl Validatable for PaymentCardForm {
    type Output = PaymentCardInput;

    fn sanitize(&mut self) {
        CARD_NUMBER.normalize(&mut self.card_number);
        CARDHOLDER_NAME.normalize(&mut self.cardholder_name);
        EXPIRY_DATE.normalize(&mut self.expiry_date);
        CVV.normalize(&mut self.cvv);
    }

    fn validate(&self, _ctx: &ValidationContext) -> Result<PaymentCardInput, Vec<FieldError>> {
        let mut builder = ValidationBuilder::new();

        CARD_NUMBER.apply(&mut builder, &self.card_number);
        CARDHOLDER_NAME.apply(&mut builder, &self.cardholder_name);
        EXPIRY_DATE.apply(&mut builder, &self.expiry_date);
        CVV.apply(&mut builder, &self.cvv);

        builder.build()?;

        Ok(PaymentCardInput {
            card_number: self.card_number.clone(),
            cardholder_name: self.cardholder_name.clone(),
            expiry_date: self.expiry_date.clone(),
            cvv: self.cvv.clone(),
        })
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// UpiPaymentForm
// ─────────────────────────────────────────────────────────────────────────────

static UPI_ID: FieldRules = FieldRules {
    field: "upiId",
    normalize: Normalize::Trim,
    rules: &[
        Rule::Matches(&UPI_ID_PATTERN, "Please enter a valid UPI ID (e.g., name@bank)"),
        Rule::MaxChars(100, "UPI ID must be less than 100 characters"),
    ],
};

impl Validatable for UpiPaymentForm {
    type Output = UpiPaymentInput;

    fn sanitize(&mut self) {
        UPI_ID.normalize(&mut self.upi_id);
    }

    fn validate(&self, _ctx: &ValidationContext) -> Result<UpiPaymentInput, Vec<FieldError>> {
        let mut builder = ValidationBuilder::new();
        UPI_ID.apply(&mut builder, &self.upi_id);
        builder.build()?;

        Ok(UpiPaymentInput {
            upi_id: self.upi_id.clone(),
        })
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// PromoCodeForm
// ─────────────────────────────────────────────────────────────────────────────

static PROMO_CODE: FieldRules = FieldRules {
    field: "code",
    normalize: Normalize::TrimUppercase,
    rules: &[
        Rule::Matches(&PROMO_CODE_PATTERN, "Promo code can only contain letters and numbers"),
        Rule::MinChars(4, "Promo code must be at least 4 characters"),
        Rule::MaxChars(20, "Promo code must be less than 20 characters"),
    ],
};

impl Validatable for PromoCodeForm {
    type Output = PromoCode;

    fn sanitize(&mut self) {
        PROMO_CODE.normalize(&mut self.code);
    }

    fn validate(&self, _ctx: &ValidationContext) -> Result<PromoCode, Vec<FieldError>> {
        let mut builder = ValidationBuilder::new();
        PROMO_CODE.apply(&mut builder, &self.code);
        builder.build()?;

        Ok(PromoCode::new(self.code.clone()))
    }
}
