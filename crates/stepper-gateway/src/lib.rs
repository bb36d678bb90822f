//! stepper gateway library entry.
//!
//! Wires config, external sources, client IP resolution and the metric
//! handler into an axum router. Consumed by the binary (`main.rs`) and by
//! integration tests.

pub mod app_state;
pub mod config;
pub mod error;
pub mod ops;
pub mod router;
pub mod sources;
pub mod transport;
