//! Query API boundary for launchdb
//!
//! Turns a JSON query envelope into a resolver call and shapes the result.
//!
//! ```json
//! {"operation": "spaceFlights", "variables": {"min_date": 1583556631}}
//! ```
//!
//! becomes
//!
//! ```json
//! {"data": {"spaceFlights": [ ... ]}}
//! ```
//!
//! All input validation happens here. The resolver only ever sees
//! well-typed arguments.

mod errors;
mod handler;
mod request;
mod response;

pub use errors::{ApiError, ApiResult, ErrorResponse};
pub use handler::QueryHandler;
pub use request::QueryRequest;
pub use response::QueryResponse;
