//! Core library exports for the ZoomPlay catalog and the dividend ledger.
//!
//! The `data` feature exposes the domain, persistence and ledger layers; the
//! `server` feature adds forms, services, view models and HTTP routes used by
//! the web application.

#[cfg(feature = "data")]
pub mod db;
#[cfg(feature = "data")]
pub mod domain;
#[cfg(feature = "data")]
mod error_conversions;
#[cfg(feature = "data")]
pub mod ledger;
#[cfg(feature = "data")]
pub mod models;
#[cfg(feature = "data")]
pub mod repository;
#[cfg(feature = "data")]
pub mod schema;

#[cfg(feature = "server")]
pub mod dto;
#[cfg(feature = "server")]
pub mod forms;
#[cfg(feature = "server")]
pub mod routes;
#[cfg(feature = "server")]
pub mod services;
