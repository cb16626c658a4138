//! Step-by-step visualizer for comparison sorting algorithms
//!
//! Sorting algorithms run as resumable drivers that suspend after every
//! comparison. A cooperative run controller decides when each suspension
//! resolves, which gives auto-play with a delay, pause, single-step and stop
//! over two lanes sorting the same data side by side.

#![forbid(unsafe_code)]

/// Sorting drivers, the suspension primitive and the run controller
pub mod algorithm;
/// Lane arrays and counters
pub mod data;
/// Command line, rendering, progress display and error handling
pub mod io;
/// Mathematical utilities for the playback controls
pub mod math;

pub use io::error::{Result, VisualizerError};
