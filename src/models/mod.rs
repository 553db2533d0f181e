//! Diesel row types and the server configuration model.

pub mod catalog;
pub mod config;
