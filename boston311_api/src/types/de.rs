//! Field deserializers for response payloads that need more than serde's defaults.

use chrono::{DateTime, FixedOffset, NaiveDateTime};
use serde::de::{self, Deserialize, Deserializer};
use url::Url;

const NAIVE_FORMATS: &[&str] = &["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f"];

/// Parses RFC 3339, falling back to a naive ISO date-time labelled UTC.
fn parse_datetime(value: &str) -> Option<DateTime<FixedOffset>> {
    if let Ok(aware) = DateTime::parse_from_rfc3339(value) {
        return Some(aware);
    }
    NAIVE_FORMATS
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(value, fmt).ok())
        .map(|naive| naive.and_utc().fixed_offset())
}

/// Only absolute `http`/`https` URLs with a host are accepted.
fn parse_http_url(value: &str) -> Result<Url, String> {
    let url = Url::parse(value).map_err(|e| format!("invalid URL '{}': {}", value, e))?;
    if !matches!(url.scheme(), "http" | "https") {
        return Err(format!("URL scheme '{}' is not http or https", url.scheme()));
    }
    if url.host_str().map_or(true, str::is_empty) {
        return Err(format!("URL '{}' has no host", value));
    }
    Ok(url)
}

pub(crate) fn datetime<'de, D>(deserializer: D) -> Result<DateTime<FixedOffset>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = String::deserialize(deserializer)?;
    parse_datetime(raw.trim())
        .ok_or_else(|| de::Error::custom(format!("invalid date-time '{}'", raw)))
}

pub(crate) fn datetime_opt<'de, D>(
    deserializer: D,
) -> Result<Option<DateTime<FixedOffset>>, D::Error>
where
    D: Deserializer<'de>,
{
    match Option::<String>::deserialize(deserializer)? {
        Some(raw) => parse_datetime(raw.trim())
            .map(Some)
            .ok_or_else(|| de::Error::custom(format!("invalid date-time '{}'", raw))),
        None => Ok(None),
    }
}

pub(crate) fn http_url_opt<'de, D>(deserializer: D) -> Result<Option<Url>, D::Error>
where
    D: Deserializer<'de>,
{
    match Option::<String>::deserialize(deserializer)? {
        Some(raw) => parse_http_url(&raw).map(Some).map_err(de::Error::custom),
        None => Ok(None),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    #[test]
    fn naive_datetime_is_utc() {
        let dt = parse_datetime("2021-08-11T10:23:46").unwrap();
        assert_eq!(dt.to_rfc3339(), "2021-08-11T10:23:46+00:00");
        assert_eq!(dt.with_timezone(&Utc).to_rfc3339(), "2021-08-11T10:23:46+00:00");
    }

    #[test]
    fn space_separated_and_fractional() {
        assert!(parse_datetime("2021-08-11 10:23:46").is_some());
        assert!(parse_datetime("2021-08-11T10:23:46.250").is_some());
    }

    #[test]
    fn offset_is_kept() {
        let dt = parse_datetime("2021-08-11T10:23:46-04:00").unwrap();
        assert_eq!(dt.offset().local_minus_utc(), -4 * 3600);
    }

    #[test]
    fn rejects_date_only_and_garbage() {
        assert!(parse_datetime("2021-08-11").is_none());
        assert!(parse_datetime("yesterday").is_none());
    }

    #[test]
    fn http_url_schemes() {
        assert!(parse_http_url("https://example.com/a.jpg").is_ok());
        assert!(parse_http_url("http://example.com/a.jpg").is_ok());
        assert!(parse_http_url("javascript:alert(1)").is_err());
        assert!(parse_http_url("file:///etc/passwd").is_err());
        assert!(parse_http_url("mailto:a@b.c").is_err());
        assert!(parse_http_url("ftp://example.com/a.jpg").is_err());
    }
}
