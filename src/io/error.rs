//! Error types for layout computation and the surrounding file operations

use std::fmt;
use std::path::PathBuf;

/// Main error type for all layout operations
#[derive(Debug)]
pub enum LayoutError {
    /// Canvas side or item count is not positive, or an item has an unusable aspect ratio
    InvalidDimension {
        /// Which dimension was rejected
        what: &'static str,
        /// Rejected value
        value: String,
    },

    /// Degenerate rectangle or polygon handed to a geometric operation
    Geometry {
        /// Name of the geometric operation
        operation: &'static str,
        /// Description of the degenerate input
        reason: String,
    },

    /// Free-space tracker has no rectangle left for an item
    ///
    /// Raised only inside the recursive packer, which always recovers from it
    /// by distributing the remaining free rectangles among the remaining items.
    NoSpaceAvailable {
        /// Items still waiting for a rectangle
        remaining_items: usize,
    },

    /// A Voronoi cell collapsed to (almost) zero area
    ///
    /// Recovered by re-jittering the seed once; escalated to [`LayoutError::Geometry`]
    /// when the retry also collapses.
    DegenerateCell {
        /// Index of the seed whose cell collapsed
        index: usize,
        /// Computed cell area
        area: f64,
    },

    /// Requested style is not registered
    UnknownStyle {
        /// Requested style name
        name: String,
        /// Names the registry does know
        available: Vec<String>,
    },

    /// Layout option validation failed
    InvalidParameter {
        /// Name of the invalid parameter
        parameter: &'static str,
        /// Provided value that failed validation
        value: String,
        /// Explanation of why the value is invalid
        reason: String,
    },

    /// Failed to read an image header from the filesystem
    ImageLoad {
        /// Path to the image file
        path: PathBuf,
        /// Underlying image loading error
        source: image::ImageError,
    },

    /// Failed to save a layout preview to disk
    ImageExport {
        /// Path where export was attempted
        path: PathBuf,
        /// Underlying image export error
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

    /// Internal bookkeeping produced an inconsistent result
    Computation {
        /// Name of the computation that failed
        operation: &'static str,
        /// Description of the failure
        reason: String,
    },
}

impl fmt::Display for LayoutError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidDimension { what, value } => {
                write!(f, "Invalid dimension: {what} = {value} (must be positive)")
            }
            Self::Geometry { operation, reason } => {
                write!(f, "Geometry error in {operation}: {reason}")
            }
            Self::NoSpaceAvailable { remaining_items } => {
                write!(
                    f,
                    "No free space available for {remaining_items} remaining item(s)"
                )
            }
            Self::DegenerateCell { index, area } => {
                write!(f, "Cell {index} is degenerate (area {area:.3})")
            }
            Self::UnknownStyle { name, available } => {
                write!(
                    f,
                    "Unknown style '{name}' (available: {})",
                    available.join(", ")
                )
            }
            Self::InvalidParameter {
                parameter,
                value,
                reason,
            } => {
                write!(f, "Invalid parameter '{parameter}' = '{value}': {reason}")
            }
            Self::ImageLoad { path, source } => {
                write!(f, "Failed to load image '{}': {source}", path.display())
            }
            Self::ImageExport { path, source } => {
                write!(
                    f,
                    "Failed to export image to '{}': {source}",
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
            Self::Computation { operation, reason } => {
                write!(f, "Computation error in {operation}: {reason}")
            }
        }
    }
}

impl std::error::Error for LayoutError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::ImageLoad { source, .. } | Self::ImageExport { source, .. } => Some(source),
            Self::FileSystem { source, .. } => Some(source),
            _ => None,
        }
    }
}

impl LayoutError {
    /// Whether the condition is handled inside the engine and never surfaces to callers
    pub const fn is_recoverable(&self) -> bool {
        matches!(
            self,
            Self::NoSpaceAvailable { .. } | Self::DegenerateCell { .. }
        )
    }
}

/// Convenience type alias for layout results
pub type Result<T> = std::result::Result<T, LayoutError>;

impl From<image::ImageError> for LayoutError {
    fn from(err: image::ImageError) -> Self {
        Self::ImageLoad {
            path: PathBuf::from("<unknown>"),
            source: err,
        }
    }
}

impl From<std::io::Error> for LayoutError {
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
) -> LayoutError {
    LayoutError::InvalidParameter {
        parameter,
        value: value.to_string(),
        reason: reason.to_string(),
    }
}

/// Create an invalid dimension error
pub fn invalid_dimension(what: &'static str, value: &impl ToString) -> LayoutError {
    LayoutError::InvalidDimension {
        what,
        value: value.to_string(),
    }
}

/// Create a geometry error
pub fn geometry_error(operation: &'static str, reason: &impl ToString) -> LayoutError {
    LayoutError::Geometry {
        operation,
        reason: reason.to_string(),
    }
}

/// Create a computation error
pub fn computation_error(operation: &'static str, reason: &impl ToString) -> LayoutError {
    LayoutError::Computation {
        operation,
        reason: reason.to_string(),
    }
}
