//! Custom error types for sprite sheet processing

use std::fmt;
use std::io;

/// Sprite-sheet-specific error types
#[derive(Debug)]
pub enum ForgeError {
    /// I/O error
    IoError(io::Error),
    /// Image decode/encode error
    ImageError(image::ImageError),
    /// Missing or zero-size input buffer
    InvalidInput(String),
    /// Sheet height is not divisible by the row count
    InvalidSheetDimensions(u32, u32),
    /// Direction token outside the 8-symbol enumeration
    UnknownDirection(String),
    /// JSON definition file could not be parsed or written
    JsonError(serde_json::Error),
    /// Generic error with message
    GenericError(String),
}

impl fmt::Display for ForgeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ForgeError::IoError(e) => write!(f, "I/O error: {}", e),
            ForgeError::ImageError(e) => write!(f, "Image error: {}", e),
            ForgeError::InvalidInput(msg) => write!(f, "Invalid input: {}", msg),
            ForgeError::InvalidSheetDimensions(w, h) => {
                write!(f, "Invalid sheet dimensions: {}x{} (height must be a multiple of 4)", w, h)
            },
            ForgeError::UnknownDirection(token) => write!(f, "Unknown direction: {}", token),
            ForgeError::JsonError(e) => write!(f, "JSON error: {}", e),
            ForgeError::GenericError(msg) => write!(f, "Sprite error: {}", msg),
        }
    }
}

impl std::error::Error for ForgeError {}

impl From<io::Error> for ForgeError {
    fn from(error: io::Error) -> Self {
        ForgeError::IoError(error)
    }
}

impl From<image::ImageError> for ForgeError {
    fn from(error: image::ImageError) -> Self {
        ForgeError::ImageError(error)
    }
}

impl From<serde_json::Error> for ForgeError {
    fn from(error: serde_json::Error) -> Self {
        ForgeError::JsonError(error)
    }
}

impl From<String> for ForgeError {
    fn from(msg: String) -> Self {
        ForgeError::GenericError(msg)
    }
}

/// Result type for sprite sheet operations
pub type ForgeResult<T> = Result<T, ForgeError>;
