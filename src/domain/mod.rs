//! Domain entities and value objects shared by the catalog and the ledger.

pub mod catalog;
pub mod dividend;
pub mod types;
