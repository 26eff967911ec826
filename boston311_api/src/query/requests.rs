//! Query builder for the `requests.json` listing.

use std::collections::BTreeMap;

use chrono::{DateTime, Utc};

use crate::formatting::{format_in_utc, Timestamp};
use crate::types::Status;

use super::common::Query;

/// Filter criteria for listing service requests. Every criterion is optional.
///
/// When only `start_date` is given, `end_date` defaults to the moment the
/// parameters are built. With neither date the server applies its own window
/// (the most recent 90 days).
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RequestsQuery {
    pub service_code: Option<String>,
    pub start_date: Option<Timestamp>,
    pub end_date: Option<Timestamp>,
    pub status: Option<Status>,
}

impl Query for RequestsQuery {
    fn params(&self) -> BTreeMap<&'static str, String> {
        self.params_at(Utc::now())
    }
}

impl RequestsQuery {
    pub fn with_service_code(mut self, service_code: &str) -> Self {
        self.service_code = Some(service_code.to_string());
        self
    }

    pub fn with_start_date(mut self, start_date: impl Into<Timestamp>) -> Self {
        self.start_date = Some(start_date.into());
        self
    }

    pub fn with_end_date(mut self, end_date: impl Into<Timestamp>) -> Self {
        self.end_date = Some(end_date.into());
        self
    }

    pub fn with_status(mut self, status: Status) -> Self {
        self.status = Some(status);
        self
    }

    /// Builds the parameter mapping, using `now` as the default `end_date`.
    pub fn params_at(&self, now: DateTime<Utc>) -> BTreeMap<&'static str, String> {
        let end_date = match (self.start_date, self.end_date) {
            (Some(_), None) => Some(Timestamp::from(now)),
            (_, end_date) => end_date,
        };

        let mut params = BTreeMap::new();
        if let Some(service_code) = &self.service_code {
            params.insert("service_code", service_code.clone());
        }
        if let Some(start_date) = self.start_date {
            params.insert("start_date", format_in_utc(start_date));
        }
        if let Some(end_date) = end_date {
            params.insert("end_date", format_in_utc(end_date));
        }
        if let Some(status) = self.status {
            params.insert("status", status.to_string());
        }
        params
    }
}
