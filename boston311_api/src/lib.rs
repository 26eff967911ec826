//! Client for the City of Boston's Open311 service-request API.
//!
//! Lists the service catalog and queries individual or bulk service requests,
//! returning strongly-typed entities.

mod client;
mod errors;
mod formatting;
mod query;
pub mod types;
mod user_agent;
pub use self::client::Client;
pub use self::errors::Error;
pub use self::formatting::{format_in_utc, Timestamp};
pub use self::query::{Query, RequestsQuery};
