//! stepper core: transport-agnostic access gate, degree mapping, settings and
//! error types.
//!
//! This crate turns a raw activity count into an angular position for a
//! stepper-motor indicator. It carries no transport or runtime dependencies;
//! the gateway supplies settings and counts and owns the HTTP lifecycle.
//!
//! # Defensive guarantees
//! Panics, `unwrap`, and `expect` are compile-denied here
//! (`#![deny(clippy::panic, clippy::unwrap_used, clippy::expect_used)]`).
//! All fallible paths must surface as `StepperError`/`Result`.

#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![deny(clippy::panic)]

pub mod body;
pub mod degrees;
pub mod error;
pub mod gate;
pub mod settings;

/// Shared result type.
pub use error::{Result, StepperError};

pub use degrees::{to_degrees, MaxScale, MAX_DEGREES};
pub use gate::authorize;
pub use settings::Settings;
