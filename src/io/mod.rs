/// Command-line interface and playback session
pub mod cli;
/// Visualizer constants and defaults
pub mod configuration;
/// Error types
pub mod error;
/// Terminal progress display for the lanes
pub mod progress;
/// Interface to whatever draws the lanes
pub mod render;
/// Render capture and GIF generation
pub mod visualization;
