//! Top-level facade crate for Pulse.
//!
//! Re-exports core types and the collector library so users can depend on a
//! single crate.

pub mod core {
    pub use pulse_core::*;
}

pub mod collector {
    pub use pulse_collector::*;
}
