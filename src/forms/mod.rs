//! Raw form inputs and their conversion into validated payloads.

pub mod catalog;
pub mod dividends;
