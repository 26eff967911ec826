//! Service request types: individual complaints and work orders.

use std::fmt;
use std::hash::{Hash, Hasher};
use std::ops::Index;

use chrono::{DateTime, FixedOffset};
use serde::{Deserialize, Serialize};
use url::Url;

use super::{de, default_version, ServiceCode, Status};

/// Unique identifier of a service request (e.g. "101003914012").
pub type ServiceRequestID = String;

/// A single service request.
///
/// Identity is the `service_request_id`; equality and hashing ignore every
/// other field.
#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct ServiceRequest {
    #[serde(default = "default_version")]
    pub version: i64,

    pub address: String,

    pub address_id: Option<String>,

    pub zipcode: Option<String>,

    pub description: Option<String>,

    pub lat: f64,

    pub long: f64,

    /// Photo attached to the report. Must be an `http`/`https` URL with a host.
    #[serde(default, deserialize_with = "de::http_url_opt")]
    pub media_url: Option<Url>,

    /// Offset-aware, or naive and taken as UTC.
    #[serde(deserialize_with = "de::datetime")]
    pub requested_datetime: DateTime<FixedOffset>,

    pub service_code: ServiceCode,

    pub service_name: String,

    pub service_request_id: ServiceRequestID,

    pub status: Status,

    #[serde(default, deserialize_with = "de::datetime_opt")]
    pub updated_datetime: Option<DateTime<FixedOffset>>,

    pub status_notes: Option<String>,

    pub agency_responsible: Option<String>,

    pub service_notice: Option<String>,

    #[serde(default, deserialize_with = "de::datetime_opt")]
    pub expected_datetime: Option<DateTime<FixedOffset>>,
}

impl PartialEq for ServiceRequest {
    fn eq(&self, other: &Self) -> bool {
        self.service_request_id == other.service_request_id
    }
}

impl Eq for ServiceRequest {}

impl Hash for ServiceRequest {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.service_request_id.hash(state);
    }
}

impl fmt::Display for ServiceRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "#{} {} ({}) @ {}",
            self.service_request_id, self.service_name, self.status, self.address
        )
    }
}

/// Service requests in the order the API returned them. Duplicates are kept.
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq)]
#[serde(transparent)]
pub struct ServiceRequests(Vec<ServiceRequest>);

impl ServiceRequests {
    pub fn new(service_requests: Vec<ServiceRequest>) -> Self {
        Self(service_requests)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&ServiceRequest> {
        self.0.get(index)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, ServiceRequest> {
        self.0.iter()
    }

    pub fn as_slice(&self) -> &[ServiceRequest] {
        &self.0
    }

    pub fn into_vec(self) -> Vec<ServiceRequest> {
        self.0
    }
}

impl Index<usize> for ServiceRequests {
    type Output = ServiceRequest;

    fn index(&self, index: usize) -> &ServiceRequest {
        &self.0[index]
    }
}

impl From<Vec<ServiceRequest>> for ServiceRequests {
    fn from(service_requests: Vec<ServiceRequest>) -> Self {
        Self(service_requests)
    }
}

impl IntoIterator for ServiceRequests {
    type Item = ServiceRequest;
    type IntoIter = std::vec::IntoIter<ServiceRequest>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<'a> IntoIterator for &'a ServiceRequests {
    type Item = &'a ServiceRequest;
    type IntoIter = std::slice::Iter<'a, ServiceRequest>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}
