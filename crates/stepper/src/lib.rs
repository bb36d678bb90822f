//! Top-level facade crate for stepper.
//!
//! Re-exports core types and the gateway library so users can depend on a single crate.

pub mod core {
    pub use stepper_core::*;
}

pub mod gateway {
    pub use stepper_gateway::*;
}
