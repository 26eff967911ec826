//! Error types for the API client.

/// Errors that can occur when talking to the Open311 endpoint.
#[derive(thiserror::Error, Debug)]
pub enum Error {
    /// The HTTP transport failed before a response was received
    /// (connection refused, timeout, or an unreadable body).
    #[error("Request failed: {0}")]
    RequestFailed(#[source] reqwest::Error),
    /// The configured base endpoint could not be joined with a resource path.
    #[error("Invalid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),
    /// The configured base endpoint cannot carry path segments (e.g. `mailto:`).
    #[error("Base URL cannot be a base: {0}")]
    InvalidBaseUrl(String),
    /// The API returned a status other than 200 OK, with a body snippet.
    #[error("Request failed with status {status}")]
    HttpStatus { status: u16, body: String },
    /// The response body did not match the expected entity schema.
    #[error("Response failed validation: {0}")]
    Validation(#[source] serde_json::Error),
    /// A single-record lookup returned more than one record.
    #[error("Expected {expected} record(s) but received {actual}")]
    UnexpectedCount { expected: usize, actual: usize },
}
