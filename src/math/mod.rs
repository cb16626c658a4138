//! Mathematical utilities for the playback controls

/// Logarithmic slider mapping for the comparison delay
pub mod slider;
