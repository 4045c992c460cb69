//! Pulse core: metric primitives, batching, and the shared error surface.
//!
//! This crate defines the domain types shared by the collector and any future
//! exporters: samples, units, dimensions, batch partitioning, namespace
//! derivation, and the invocation report returned to the scheduler. It
//! intentionally carries no runtime or transport dependencies so it can be
//! reused in multiple contexts.
//!
//! # Defensive guarantees
//! Panics, `unwrap`, and `expect` are compile-denied here
//! (`#![deny(clippy::panic, clippy::unwrap_used, clippy::expect_used)]`).
//! All fallible paths must surface as `PulseError`/`Result` so a scheduled
//! invocation never dies without producing a report.

#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![deny(clippy::panic)]

pub mod batch;
pub mod error;
pub mod metric;
pub mod namespace;
pub mod report;

/// Shared result type.
pub use error::{PulseError, Result};
pub use metric::{Dimension, DimensionSet, MetricSample, Unit};
pub use namespace::namespace;
pub use report::InvocationReport;
