use chrono::{Duration, NaiveDate};
use formguard::{escape_html, escape_url_component, validate_form, FormKind, ValidatedForm, ValidationContext};
use serde_json::{json, Value};

fn ctx() -> ValidationContext {
    ValidationContext::on(NaiveDate::from_ymd_opt(2026, 10, 19).unwrap())
}

fn day(offset: i64) -> String {
    (ctx().today + Duration::days(offset)).format("%Y-%m-%d").to_string()
}

fn booking(check_in: &str, check_out: &str) -> Value {
    json!({
        "name": "Arjun Mehta",
        "email": "arjun@example.in",
        "phone": "+91 9876543210",
        "adults": "2",
        "children": "1",
        "checkInDate": check_in,
        "checkOutDate": check_out,
    })
}

fn violated_fields(kind: FormKind, record: &Value) -> Vec<String> {
    match validate_form(kind, record, &ctx()) {
        Ok(_) => vec![],
        Err(err) => err.errors.into_iter().map(|e| e.field).collect(),
    }
}

#[test]
fn booking_today_to_tomorrow_is_accepted() {
    let accepted = validate_form(FormKind::Booking, &booking(&day(0), &day(1)), &ctx()).unwrap();
    let ValidatedForm::Booking(request) = accepted else {
        panic!("expected a booking");
    };
    assert_eq!(request.adults, 2);
    assert_eq!(request.children, 1);
}

#[test]
fn booking_check_in_yesterday_is_rejected_on_check_in() {
    assert_eq!(
        violated_fields(FormKind::Booking, &booking(&day(-1), &day(1))),
        vec!["checkInDate"]
    );
}

#[test]
fn booking_longer_than_thirty_days_is_rejected_on_check_out() {
    assert_eq!(
        violated_fields(FormKind::Booking, &booking(&day(0), &day(31))),
        vec!["checkOutDate"]
    );
}

#[test]
fn booking_same_day_checkout_is_rejected_on_check_out() {
    assert_eq!(
        violated_fields(FormKind::Booking, &booking(&day(2), &day(2))),
        vec!["checkOutDate"]
    );
}

#[test]
fn booking_guest_counts_out_of_range() {
    for adults in ["0", "21", "abc"] {
        let mut record = booking(&day(0), &day(1));
        record["adults"] = json!(adults);
        assert_eq!(violated_fields(FormKind::Booking, &record), vec!["adults"], "adults = {adults}");
    }

    let mut record = booking(&day(0), &day(1));
    record["adults"] = json!(20);
    record["children"] = json!(0);
    assert!(validate_form(FormKind::Booking, &record, &ctx()).is_ok());
}

#[test]
fn promo_codes() {
    let accepted = validate_form(FormKind::PromoCode, &json!("abcd1"), &ctx()).unwrap();
    assert_eq!(serde_json::to_value(&accepted).unwrap(), json!("ABCD1"));

    assert_eq!(violated_fields(FormKind::PromoCode, &json!("ab!1")), vec!["code"]);
    assert_eq!(violated_fields(FormKind::PromoCode, &json!("abc")), vec!["code"]);
}

#[test]
fn payment_card_number_needs_groups() {
    let card = |number: &str| {
        json!({
            "cardNumber": number,
            "cardholderName": "Arjun Mehta",
            "expiryDate": "11/28",
            "cvv": "321",
        })
    };
    assert!(validate_form(FormKind::PaymentCard, &card("4111 1111 1111 1111"), &ctx()).is_ok());
    assert_eq!(
        violated_fields(FormKind::PaymentCard, &card("4111111111111111")),
        vec!["cardNumber"]
    );
}

#[test]
fn contact_phone_digit_run_bounds() {
    let contact = |phone: &str| {
        json!({
            "name": "Arjun Mehta",
            "email": "Arjun@Example.in",
            "phone": phone,
            "subject": "Late arrival",
            "message": "We will reach the hotel around midnight.",
        })
    };

    let accepted = validate_form(FormKind::Contact, &contact("+91 98765432109"), &ctx()).unwrap();
    let ValidatedForm::Contact(submission) = accepted else {
        panic!("expected a contact submission");
    };
    assert_eq!(submission.email, "arjun@example.in");

    assert_eq!(
        violated_fields(FormKind::Contact, &contact("+91 9876543210987")),
        vec!["phone"]
    );
    assert!(validate_form(FormKind::Contact, &contact(""), &ctx()).is_ok());
}

#[test]
fn upi_payment_round_trip_through_report() {
    let result = validate_form(FormKind::UpiPayment, &json!({ "upiId": " arjun@okicici " }), &ctx());
    let report = formguard::ValidationReport::new(FormKind::UpiPayment, result);
    assert!(report.ok);
    assert_eq!(
        serde_json::to_value(report.value).unwrap(),
        json!({ "upiId": "arjun@okicici" })
    );
}

#[test]
fn sanitizers_make_user_text_safe() {
    let review = r#"<a href="/x">5 stars & 'great'</a>"#;
    assert_eq!(
        escape_html(review),
        "&lt;a href=&quot;&#x2F;x&quot;&gt;5 stars &amp; &#x27;great&#x27;&lt;&#x2F;a&gt;"
    );
    assert_eq!(escape_url_component(" sea view & spa "), "sea%20view%20%26%20spa");
}
