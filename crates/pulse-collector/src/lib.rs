//! Pulse collector library entry.
//!
//! This crate wires the metric sources, gather step, batch publisher, and
//! invocation entrypoint into a runnable scheduled task. It is intended to be
//! consumed by the binary (`main.rs`) and by integration tests.

pub mod config;
pub mod gather;
pub mod handler;
pub mod publish;
pub mod sources;
pub mod state;
