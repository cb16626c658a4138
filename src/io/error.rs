//! Error types for dataset, configuration and export operations

use std::fmt;
use std::path::PathBuf;

/// Main error type for all visualizer operations
///
/// Cooperative termination of a running sort is not represented here: a
/// stopped driver simply returns, it never fails.
#[derive(Debug)]
pub enum VisualizerError {
    /// Requested array size cannot hold a single element
    InvalidSize {
        /// The rejected size
        size: usize,
    },

    /// A lane was assigned an algorithm that cannot be run
    ///
    /// Raised before any driver starts, either because the name is unknown
    /// or because lane 0 was set to `none`
    Configuration {
        /// Lane the assignment was made for
        lane: usize,
        /// The rejected algorithm name
        name: String,
    },

    /// Parameter validation failed
    InvalidParameter {
        /// Name of the invalid parameter
        parameter: &'static str,
        /// Provided value that failed validation
        value: String,
        /// Explanation of why the value is invalid
        reason: String,
    },

    /// GIF export was requested but no render was ever captured
    NothingRecorded,

    /// Failed to encode the animation
    ImageExport {
        /// Path where export was attempted
        path: PathBuf,
        /// Underlying image encoding error
        source: image::ImageError,
    },

    /// General file system operation failure
    FileSystem {
        /// Path involved in the operation
        path: PathBuf,
        /// Description of the operation that failed
        operation: &'static str,
        /// Underlying I/O error
        source: std::io::Error,
    },
}

impl fmt::Display for VisualizerError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidSize { size } => {
                write!(f, "Invalid array size {size}: at least one element is required")
            }
            Self::Configuration { lane, name } => {
                write!(f, "Lane {lane} cannot run algorithm '{name}'")
            }
            Self::InvalidParameter {
                parameter,
                value,
                reason,
            } => {
                write!(f, "Invalid parameter '{parameter}' = '{value}': {reason}")
            }
            Self::NothingRecorded => {
                write!(f, "No renders were captured for visualization")
            }
            Self::ImageExport { path, source } => {
                write!(
                    f,
                    "Failed to export animation to '{}': {source}",
                    path.display()
                )
            }
            Self::FileSystem {
                path,
                operation,
                source,
            } => {
                write!(
                    f,
                    "File system error during {operation} on '{}': {source}",
                    path.display()
                )
            }
        }
    }
}

impl std::error::Error for VisualizerError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::ImageExport { source, .. } => Some(source),
            Self::FileSystem { source, .. } => Some(source),
            _ => None,
        }
    }
}

/// Convenience type alias for visualizer results
pub type Result<T> = std::result::Result<T, VisualizerError>;

impl From<std::io::Error> for VisualizerError {
    fn from(err: std::io::Error) -> Self {
        Self::FileSystem {
            path: PathBuf::from("<unknown>"),
            operation: "unknown",
            source: err,
        }
    }
}

/// Create an invalid parameter error
pub fn invalid_parameter(
    parameter: &'static str,
    value: &impl ToString,
    reason: &impl ToString,
) -> VisualizerError {
    VisualizerError::InvalidParameter {
        parameter,
        value: value.to_string(),
        reason: reason.to_string(),
    }
}

/// Create a configuration error for a lane assignment
pub fn configuration_error(lane: usize, name: &impl ToString) -> VisualizerError {
    VisualizerError::Configuration {
        lane,
        name: name.to_string(),
    }
}
