mod common;
pub use self::common::Query;

mod requests;
pub use self::requests::RequestsQuery;
