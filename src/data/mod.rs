//! Data owned by a visualization session

/// Lane arrays, counters, generation and shuffling
pub mod dataset;

pub use dataset::{Dataset, Lane};
