//! Core crate for prod-guard: errors, config, tracing, and constants.

pub mod config;
pub mod constants;
pub mod errors;
pub mod tracing;
