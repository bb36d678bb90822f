//! Transport layer (HTTP).
//!
//! Client address resolution and the metric endpoint handler.

pub mod client_ip;
pub mod stepper;
