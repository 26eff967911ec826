mod de;

mod status;
pub use self::status::{ParseStatusError, Status};

mod service;
pub use self::service::{Service, ServiceCode, Services};

mod request;
pub use self::request::{ServiceRequest, ServiceRequestID, ServiceRequests};

/// Schema version stamped on every entity when the payload omits one.
pub(crate) fn default_version() -> i64 {
    1
}
