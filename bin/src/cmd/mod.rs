//! CLI command implementations.

pub(crate) mod chart;
pub(crate) mod range;
