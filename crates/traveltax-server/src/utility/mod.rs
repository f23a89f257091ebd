//! Crate-wide helpers.

pub(crate) mod tracing_targets;
