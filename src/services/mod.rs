//! Business logic behind the HTTP routes and the ledger screen.
//!
//! Services are generic over the repository traits so they can be exercised
//! against the in-memory test repository.

pub mod catalog;
pub mod errors;
pub mod ledger;

pub use errors::{ServiceError, ServiceResult};
