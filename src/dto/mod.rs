//! View models handed to templates and UI code.

pub mod catalog;
pub mod ledger;
