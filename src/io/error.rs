//! Error types for sheet synthesis, source decoding and export

use std::fmt;
use std::path::PathBuf;

/// Main error type for all sheet generation operations
#[derive(Debug)]
pub enum SpriteError {
    /// Source image does not exist on disk
    InputNotFound {
        /// Path that was looked up
        path: PathBuf,
    },

    /// Failed to decode the source image
    ImageLoad {
        /// Path to the image file
        path: PathBuf,
        /// Underlying image decoding error
        source: image::ImageError,
    },

    /// A buffer handed to the frame constructor has the wrong size
    InvalidFrame {
        /// Width of the rejected buffer
        width: u32,
        /// Height of the rejected buffer
        height: u32,
    },

    /// Gesture schedules do not fill the gesture row exactly
    ///
    /// Indicates an edit to the schedule tables rather than a runtime condition.
    RegistryInconsistent {
        /// Frame count the gesture row requires
        expected: usize,
        /// Frame count the schedules add up to
        actual: usize,
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

    /// Cell address lies outside the sheet grid
    CellOutOfBounds {
        /// Row of the rejected cell
        row: u32,
        /// Column of the rejected cell
        col: u32,
    },

    /// Cell was already written during this assembly
    CellConflict {
        /// Row of the cell
        row: u32,
        /// Column of the cell
        col: u32,
    },

    /// Failed to encode or save a sheet
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
}

impl fmt::Display for SpriteError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InputNotFound { path } => {
                write!(f, "Input image not found: '{}'", path.display())
            }
            Self::ImageLoad { path, source } => {
                write!(f, "Failed to load image '{}': {source}", path.display())
            }
            Self::InvalidFrame { width, height } => {
                write!(
                    f,
                    "Invalid frame buffer {width}x{height} (frames must be {}x{})",
                    crate::io::configuration::FRAME_WIDTH,
                    crate::io::configuration::FRAME_HEIGHT
                )
            }
            Self::RegistryInconsistent { expected, actual } => {
                write!(
                    f,
                    "Animation registry holds {actual} gesture frames but the gesture row needs exactly {expected}"
                )
            }
            Self::InvalidParameter {
                parameter,
                value,
                reason,
            } => {
                write!(f, "Invalid parameter '{parameter}' = '{value}': {reason}")
            }
            Self::CellOutOfBounds { row, col } => {
                write!(f, "Cell ({row}, {col}) is outside the sheet grid")
            }
            Self::CellConflict { row, col } => {
                write!(f, "Cell ({row}, {col}) was written more than once")
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
        }
    }
}

impl std::error::Error for SpriteError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::ImageLoad { source, .. } | Self::ImageExport { source, .. } => Some(source),
            Self::FileSystem { source, .. } => Some(source),
            _ => None,
        }
    }
}

/// Convenience type alias for sheet generation results
pub type Result<T> = std::result::Result<T, SpriteError>;

/// Create an invalid parameter error
pub fn invalid_parameter(
    parameter: &'static str,
    value: &impl ToString,
    reason: &impl ToString,
) -> SpriteError {
    SpriteError::InvalidParameter {
        parameter,
        value: value.to_string(),
        reason: reason.to_string(),
    }
}
