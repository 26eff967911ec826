//! Parsing and validation of command-line filter values.

use anyhow::{bail, Context, Result};
use boston311_api::types::Status;
use boston311_api::Timestamp;
use chrono::{DateTime, Duration, NaiveDate, NaiveDateTime, NaiveTime, Utc};

/// Parse a date argument.
///
/// RFC 3339 values keep their offset. `YYYY-MM-DD` and `YYYY-MM-DDTHH:MM:SS`
/// carry no zone and are sent as UTC wall-clock time.
pub fn validate_date(input: &str) -> Result<Timestamp> {
    let trimmed = input.trim();
    if let Ok(aware) = DateTime::parse_from_rfc3339(trimmed) {
        return Ok(aware.into());
    }
    if let Ok(naive) = NaiveDateTime::parse_from_str(trimmed, "%Y-%m-%dT%H:%M:%S") {
        return Ok(naive.into());
    }
    let date = NaiveDate::parse_from_str(trimmed, "%Y-%m-%d").with_context(|| {
        format!(
            "invalid date '{}'. Expected YYYY-MM-DD, YYYY-MM-DDTHH:MM:SS, or RFC 3339",
            trimmed
        )
    })?;
    Ok(date.and_time(NaiveTime::MIN).into())
}

/// Validate relative days: must be 1..=3650 (approx 10 years).
pub fn validate_days(days: i64) -> Result<i64> {
    if !(1..=3650).contains(&days) {
        bail!("days must be between 1 and 3650, got {}", days);
    }
    Ok(days)
}

/// Start of a window reaching `days` back from `now`.
pub fn days_ago(days: i64, now: DateTime<Utc>) -> Timestamp {
    (now - Duration::days(days)).into()
}

pub fn validate_status(input: &str) -> Result<Status> {
    Ok(input.parse::<Status>()?)
}

/// Service codes and request IDs are opaque but never blank or padded.
pub fn validate_identifier(input: &str, what: &str) -> Result<String> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        bail!("{} must not be empty", what);
    }
    if trimmed.chars().any(char::is_control) {
        bail!("{} contains control characters", what);
    }
    Ok(trimmed.to_string())
}
