use anyhow::{Context, Result};
use chrono::NaiveDate;
use colored::Colorize;
use formguard::{validate_form, FormKind, ValidationContext, ValidationReport};
use std::fs;
use std::io::Read;

use crate::config::OutputFormat;

/// Validate a JSON record and print the report. Returns whether it was accepted.
pub fn validate(
    kind: FormKind,
    input: Option<&str>,
    today: Option<NaiveDate>,
    format: OutputFormat,
) -> Result<bool> {
    let raw = read_input(input)?;
    let record: serde_json::Value =
        serde_json::from_str(&raw).context("Input is not valid JSON")?;

    let ctx = today.map(ValidationContext::on).unwrap_or_else(ValidationContext::now);
    tracing::debug!(form = %kind, today = %ctx.today, "validating record");

    let report = ValidationReport::new(kind, validate_form(kind, &record, &ctx));
    println!("{}", render(&report, format)?);

    Ok(report.ok)
}

fn read_input(input: Option<&str>) -> Result<String> {
    match input {
        None | Some("-") => {
            let mut raw = String::new();
            std::io::stdin()
                .read_to_string(&mut raw)
                .context("Failed to read record from stdin")?;
            Ok(raw)
        }
        Some(path) => {
            fs::read_to_string(path).with_context(|| format!("Failed to read record from {}", path))
        }
    }
}

pub fn render(report: &ValidationReport, format: OutputFormat) -> Result<String> {
    Ok(match format {
        OutputFormat::Json => serde_json::to_string(report)?,
        OutputFormat::Pretty => serde_json::to_string_pretty(report)?,
        OutputFormat::Text => render_text(report)?,
    })
}

fn render_text(report: &ValidationReport) -> Result<String> {
    let mut out = String::new();

    if let Some(ref value) = report.value {
        out.push_str(&format!(
            "{} {}\n",
            "✓".green(),
            format!("{} form accepted", report.form).bold()
        ));
        out.push_str(&serde_json::to_string_pretty(value)?);
        return Ok(out);
    }

    out.push_str(&format!(
        "{} {}",
        "✗".red(),
        report.message.as_deref().unwrap_or("Validation failed").bold()
    ));
    for violation in &report.violations {
        out.push_str(&format!(
            "\n  {} {}: {}",
            "●".red(),
            violation.field.bold(),
            violation.message
        ));
    }
    Ok(out)
}

pub fn escape_html(text: &str) {
    println!("{}", formguard::escape_html(text));
}

pub fn escape_url(text: &str) {
    println!("{}", formguard::escape_url_component(text));
}

pub fn list_forms() {
    println!("\n{}", "Forms:".bold().cyan());
    println!("{}", "=".repeat(60).cyan());
    for kind in FormKind::ALL {
        println!("\n{} {}", "●".green(), kind.as_str().bold());
        println!("  Fields: {}", kind.fields().join(", ").bright_black());
    }
    println!();
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn ctx() -> ValidationContext {
        ValidationContext::on(NaiveDate::from_ymd_opt(2026, 10, 19).unwrap())
    }

    #[test]
    fn test_render_text_rejected() {
        colored::control::set_override(false);
        let result = validate_form(
            FormKind::PaymentCard,
            &json!({ "cardNumber": "4111", "cardholderName": "Ann Lee", "expiryDate": "01/30", "cvv": "12" }),
            &ctx(),
        );
        let text = render(&ValidationReport::new(FormKind::PaymentCard, result), OutputFormat::Text).unwrap();
        assert_eq!(
            text,
            "✗ Validation failed for 2 fields\n  ● cardNumber: Card number must be 16 digits\n  ● cvv: CVV must be 3 digits"
        );
    }

    #[test]
    fn test_render_text_accepted() {
        colored::control::set_override(false);
        let result = validate_form(FormKind::PromoCode, &json!("early5"), &ctx());
        let text = render(&ValidationReport::new(FormKind::PromoCode, result), OutputFormat::Text).unwrap();
        assert_eq!(text, "✓ promo-code form accepted\n\"EARLY5\"");
    }

    #[test]
    fn test_render_json() {
        let result = validate_form(FormKind::UpiPayment, &json!({ "upiId": "bad" }), &ctx());
        let text = render(&ValidationReport::new(FormKind::UpiPayment, result), OutputFormat::Json).unwrap();
        let parsed: serde_json::Value = serde_json::from_str(&text).unwrap();
        assert_eq!(parsed["ok"], json!(false));
        assert_eq!(parsed["violations"][0]["field"], json!("upiId"));
    }

    #[test]
    fn test_validate_from_file() {
        let mut file = NamedTempFile::new().unwrap();
        write!(file, "{}", json!({ "upiId": "ann@okhdfc" })).unwrap();
        let path = file.path().to_str().unwrap();

        let accepted = validate(FormKind::UpiPayment, Some(path), Some(ctx().today), OutputFormat::Json).unwrap();
        assert!(accepted);
    }

    #[test]
    fn test_validate_rejects_malformed_json() {
        let mut file = NamedTempFile::new().unwrap();
        write!(file, "{{ not json").unwrap();
        let path = file.path().to_str().unwrap();

        let err = validate(FormKind::Contact, Some(path), None, OutputFormat::Json).unwrap_err();
        assert!(err.to_string().contains("not valid JSON"));
    }

    #[test]
    fn test_validate_missing_file() {
        assert!(validate(FormKind::Contact, Some("/nonexistent/record.json"), None, OutputFormat::Json).is_err());
    }
}
