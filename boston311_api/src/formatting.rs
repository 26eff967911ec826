//! Timestamp normalization for query parameters.
//!
//! The endpoint only accepts `YYYY-MM-DDTHH:MM:SSZ`. A naive timestamp is
//! assumed to already be in UTC and is tagged as such without shifting the
//! wall-clock value; an offset-aware timestamp is converted to UTC.

use chrono::{DateTime, FixedOffset, NaiveDateTime, TimeZone, Utc};

const UTC_FORMAT: &str = "%Y-%m-%dT%H:%M:%SZ";

/// A point in time accepted by the query builder, with or without zone information.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Timestamp {
    /// No zone attached. Treated as UTC wall-clock time.
    Naive(NaiveDateTime),
    /// Carries an explicit offset from UTC.
    Aware(DateTime<FixedOffset>),
}

impl Timestamp {
    /// Returns this timestamp as a UTC date-time.
    ///
    /// A naive value is labelled UTC as-is; no local-time conversion happens.
    pub fn to_utc(&self) -> DateTime<Utc> {
        match self {
            Timestamp::Naive(naive) => naive.and_utc(),
            Timestamp::Aware(aware) => aware.with_timezone(&Utc),
        }
    }
}

impl From<NaiveDateTime> for Timestamp {
    fn from(value: NaiveDateTime) -> Self {
        Timestamp::Naive(value)
    }
}

impl<Tz: TimeZone> From<DateTime<Tz>> for Timestamp {
    fn from(value: DateTime<Tz>) -> Self {
        Timestamp::Aware(value.fixed_offset())
    }
}

/// Formats a timestamp as `YYYY-MM-DDTHH:MM:SSZ` in UTC.
///
/// Fractional seconds are dropped, never rounded.
pub fn format_in_utc(timestamp: impl Into<Timestamp>) -> String {
    timestamp.into().to_utc().format(UTC_FORMAT).to_string()
}
