//! Observability for prod-guard.
//! `tracing` with an `EnvFilter` read from `PROD_GUARD_LOG`.

pub mod setup;

pub use setup::init_tracing;
