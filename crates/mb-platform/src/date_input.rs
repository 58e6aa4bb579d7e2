//! Date entry adapters.
//!
//! Native pickers return a real point in time. Browser date inputs only ever
//! produce `YYYY-MM-DD` strings, which are kept as text and normalized when the
//! record is built.

use chrono::{DateTime, NaiveDate, Utc};

use mb_core::ports::{DateInputError, DateInputPort, Platform};
use mb_core::vehicle::{parse_date_text, DateValue};

const ISO_DAY: &str = "%Y-%m-%d";
const LOCAL_DAY: &str = "%d/%m/%Y";

fn resolve(value: &DateValue) -> Option<DateTime<Utc>> {
    match value {
        DateValue::DateTime(dt) => Some(*dt),
        DateValue::Timestamp(ts) => ts.to_date(),
        DateValue::Text(text) => parse_date_text(text),
    }
}

fn midnight_utc(day: NaiveDate) -> Option<DateTime<Utc>> {
    day.and_hms_opt(0, 0, 0).map(|naive| naive.and_utc())
}

fn non_empty(raw: &str) -> Result<&str, DateInputError> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(DateInputError::Empty);
    }
    Ok(trimmed)
}

/// Date picker of the mobile apps. Accepts ISO days and the local `DD/MM/YYYY` form.
#[derive(Debug, Default, Clone, Copy)]
pub struct NativeDateInput;

impl DateInputPort for NativeDateInput {
    fn platform(&self) -> Platform {
        Platform::Native
    }

    fn parse(&self, raw: &str) -> Result<DateValue, DateInputError> {
        let trimmed = non_empty(raw)?;
        NaiveDate::parse_from_str(trimmed, ISO_DAY)
            .or_else(|_| NaiveDate::parse_from_str(trimmed, LOCAL_DAY))
            .ok()
            .and_then(midnight_utc)
            .map(DateValue::DateTime)
            .ok_or_else(|| DateInputError::Unrecognized(trimmed.to_string()))
    }

    fn format(&self, value: &DateValue) -> Option<String> {
        resolve(value).map(|dt| dt.format(LOCAL_DAY).to_string())
    }
}

/// Browser `<input type="date">`.
#[derive(Debug, Default, Clone, Copy)]
pub struct WebDateInput;

impl DateInputPort for WebDateInput {
    fn platform(&self) -> Platform {
        Platform::Web
    }

    fn parse(&self, raw: &str) -> Result<DateValue, DateInputError> {
        let trimmed = non_empty(raw)?;
        NaiveDate::parse_from_str(trimmed, ISO_DAY)
            .map(|_| DateValue::Text(trimmed.to_string()))
            .map_err(|_| DateInputError::Unrecognized(trimmed.to_string()))
    }

    fn format(&self, value: &DateValue) -> Option<String> {
        resolve(value).map(|dt| dt.format(ISO_DAY).to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use mb_core::vehicle::serialize_date;

    #[test]
    fn native_accepts_both_day_formats() {
        let expected = DateValue::DateTime(Utc.with_ymd_and_hms(2025, 3, 31, 0, 0, 0).unwrap());

        assert_eq!(NativeDateInput.parse("2025-03-31").unwrap(), expected);
        assert_eq!(NativeDateInput.parse(" 31/03/2025 ").unwrap(), expected);
    }

    #[test]
    fn native_rejects_empty_and_garbage() {
        assert_eq!(NativeDateInput.parse("  "), Err(DateInputError::Empty));
        assert_eq!(
            NativeDateInput.parse("31-03-2025"),
            Err(DateInputError::Unrecognized("31-03-2025".into()))
        );
    }

    #[test]
    fn web_keeps_text_and_serializes_like_native() {
        let web = WebDateInput.parse("2025-03-31").unwrap();
        let native = NativeDateInput.parse("2025-03-31").unwrap();

        assert_eq!(web, DateValue::Text("2025-03-31".into()));
        assert_eq!(serialize_date(Some(&web)), serialize_date(Some(&native)));
    }

    #[test]
    fn web_rejects_local_format() {
        assert!(matches!(
            WebDateInput.parse("31/03/2025"),
            Err(DateInputError::Unrecognized(_))
        ));
    }

    #[test]
    fn format_per_platform() {
        let value = DateValue::Text("2024-12-01".into());

        assert_eq!(NativeDateInput.format(&value).as_deref(), Some("01/12/2024"));
        assert_eq!(WebDateInput.format(&value).as_deref(), Some("2024-12-01"));
        assert_eq!(WebDateInput.format(&DateValue::Text("soon".into())), None);
    }
}
