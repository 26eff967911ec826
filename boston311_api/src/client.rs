//! HTTP client for the Boston 311 Open311 endpoint.

use std::time::Duration;

use serde::de::DeserializeOwned;
use url::Url;

use crate::{
    query::{Query, RequestsQuery},
    types::{ServiceRequest, ServiceRequests, Services},
    user_agent::get_user_agent,
    Error,
};

const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Blocking client for the Boston 311 Open311 API.
///
/// Each call issues exactly one GET and accepts only a 200 response. Nothing
/// is cached or retried; each request builds a fresh `reqwest` client.
pub struct Client {
    /// Base URL for the API. Defaults to `https://mayors24.cityofboston.gov/open311/v2/`.
    base_api_url: String,
    timeout: Duration,
}

impl Default for Client {
    fn default() -> Self {
        Self::new()
    }
}

impl Client {
    /// Creates a new client pointing at the production Boston 311 endpoint.
    pub fn new() -> Self {
        Self::with_base_url("https://mayors24.cityofboston.gov/open311/v2/")
    }

    /// Creates a new client with a custom base URL. Used for testing with wiremock.
    pub fn with_base_url(base_url: &str) -> Self {
        Self {
            base_api_url: base_url.to_string(),
            timeout: DEFAULT_TIMEOUT,
        }
    }

    /// Overrides the transport timeout.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn base_url(&self) -> &str {
        &self.base_api_url
    }

    fn get_url(&self, segments: &[&str], query: Option<&impl Query>) -> Result<Url, Error> {
        let mut url = Url::parse(&self.base_api_url).map_err(|e| {
            tracing::error!("Invalid base URL {}: {}", self.base_api_url, e);
            Error::InvalidUrl(e)
        })?;
        url.path_segments_mut()
            .map_err(|_| Error::InvalidBaseUrl(self.base_api_url.clone()))?
            .pop_if_empty()
            .extend(segments);
        Ok(match query {
            Some(query) => query.add_to_url(&url),
            None => url,
        })
    }

    fn get<T, Q>(&self, segments: &[&str], query: Option<&Q>) -> Result<T, Error>
    where
        T: DeserializeOwned,
        Q: Query,
    {
        let url = self.get_url(segments, query)?;
        tracing::debug!("GET {}", url);
        let client = reqwest::blocking::Client::builder()
            .user_agent(get_user_agent())
            .timeout(self.timeout)
            .build()
            .map_err(|e| {
                tracing::error!("Failed to build HTTP client: {}", e);
                Error::RequestFailed(e)
            })?;
        let resp = client
            .get(url)
            .header("accept", "application/json")
            .send()
            .map_err(|e| {
                tracing::error!("Failed to get resource: {}", e);
                Error::RequestFailed(e)
            })?;

        let status = resp.status();
        let body = resp.text().map_err(|e| {
            tracing::error!("Failed to read response body: {}", e);
            Error::RequestFailed(e)
        })?;

        if status != reqwest::StatusCode::OK {
            let snippet = truncate_body(&body);
            tracing::error!("Request failed with status {}: {}", status, snippet);
            return Err(Error::HttpStatus {
                status: status.as_u16(),
                body: snippet,
            });
        }

        serde_json::from_str::<T>(&body).map_err(|e| {
            tracing::error!(
                "Failed to validate resource: {} | body: {}",
                e,
                truncate_body(&body)
            );
            Error::Validation(e)
        })
    }

    /// Fetches the catalog of service types, in API order.
    pub fn list_services(&self) -> Result<Services, Error> {
        let services = self.get::<Services, RequestsQuery>(&["services.json"], None)?;
        tracing::debug!("Parsed {} services", services.len());
        Ok(services)
    }

    /// Fetches a single service request by its ID.
    ///
    /// Returns `Ok(None)` when the API knows no such request. More than one
    /// record for a single ID is reported as [`Error::UnexpectedCount`].
    pub fn get_request_by_id(
        &self,
        service_request_id: &str,
    ) -> Result<Option<ServiceRequest>, Error> {
        let segment = format!("{}.json", service_request_id);
        let requests =
            self.get::<ServiceRequests, RequestsQuery>(&["requests", segment.as_str()], None)?;
        match requests.len() {
            0 => Ok(None),
            1 => Ok(requests.into_iter().next()),
            actual => {
                tracing::warn!(
                    "Request {} matched {} records",
                    service_request_id,
                    actual
                );
                Err(Error::UnexpectedCount {
                    expected: 1,
                    actual,
                })
            }
        }
    }

    /// Fetches the service requests matching the given query, in API order.
    pub fn list_requests(&self, query: &RequestsQuery) -> Result<ServiceRequests, Error> {
        let requests = self.get::<ServiceRequests, RequestsQuery>(&["requests.json"], Some(query))?;
        tracing::debug!("Parsed {} service requests", requests.len());
        Ok(requests)
    }
}

fn truncate_body(body: &str) -> String {
    const MAX: usize = 2000;
    if body.len() <= MAX {
        body.to_string()
    } else {
        let mut end = MAX;
        while !body.is_char_boundary(end) {
            end -= 1;
        }
        format!("{}...[truncated]", &body[..end])
    }
}
