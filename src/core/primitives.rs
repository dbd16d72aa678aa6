use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};
use rust_decimal::Decimal;
use rust_decimal::prelude::ToPrimitive;

use crate::error::{SliderError, SliderResult};

pub fn decimal_to_f64(value: Decimal, field_name: &str) -> SliderResult<f64> {
    value.to_f64().ok_or_else(|| {
        SliderError::InvalidData(format!("{field_name} cannot be represented as f64"))
    })
}

#[must_use]
pub fn datetime_to_unix_millis(time: DateTime<Utc>) -> f64 {
    time.timestamp_millis() as f64
}

#[must_use]
pub fn unix_millis_to_datetime(millis: f64) -> Option<DateTime<Utc>> {
    if !millis.is_finite() {
        return None;
    }
    DateTime::<Utc>::from_timestamp_millis(millis.round() as i64)
}

/// Parses the date shapes accepted on time axes into epoch milliseconds.
///
/// Accepts RFC 3339, `%Y-%m-%d %H:%M:%S` and `%Y-%m-%d` (both read as UTC).
#[must_use]
pub fn parse_date_millis(text: &str) -> Option<f64> {
    let text = text.trim();
    if let Ok(parsed) = DateTime::parse_from_rfc3339(text) {
        return Some(parsed.timestamp_millis() as f64);
    }
    if let Ok(parsed) = NaiveDateTime::parse_from_str(text, "%Y-%m-%d %H:%M:%S") {
        return Some(parsed.and_utc().timestamp_millis() as f64);
    }
    if let Ok(parsed) = NaiveDate::parse_from_str(text, "%Y-%m-%d") {
        return parsed
            .and_hms_opt(0, 0, 0)
            .map(|midnight| midnight.and_utc().timestamp_millis() as f64);
    }
    None
}
