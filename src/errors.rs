//! Custom error types for crop planning and the wallpaper workflow

use std::fmt;
use std::io;

/// Wallcrop error types
#[derive(Debug)]
pub enum WallcropError {
    /// I/O error
    IoError(io::Error),
    /// Image could not be opened or decoded
    ImageError(image::ImageError),
    /// Sidecar or detection file is not valid JSON
    JsonError(serde_json::Error),
    /// Settings file could not be parsed
    ConfigError(String),
    /// Malformed "WxH+X+Y" geometry string
    InvalidGeometry(String),
    /// Malformed or degenerate aspect ratio
    InvalidAspectRatio(String),
    /// Image dimensions that cannot hold a crop
    InvalidDimensions(u32, u32),
    /// Face rectangle with min >= max on some axis
    InvalidFace(String),
    /// Generic error with message
    GenericError(String),
}

impl fmt::Display for WallcropError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            WallcropError::IoError(e) => write!(f, "I/O error: {}", e),
            WallcropError::ImageError(e) => write!(f, "Image error: {}", e),
            WallcropError::JsonError(e) => write!(f, "JSON error: {}", e),
            WallcropError::ConfigError(msg) => write!(f, "Configuration error: {}", msg),
            WallcropError::InvalidGeometry(g) => write!(f, "Invalid geometry string: {}", g),
            WallcropError::InvalidAspectRatio(r) => write!(f, "Invalid aspect ratio: {}", r),
            WallcropError::InvalidDimensions(w, h) => write!(f, "Invalid image dimensions: {}x{}", w, h),
            WallcropError::InvalidFace(msg) => write!(f, "Invalid face rectangle: {}", msg),
            WallcropError::GenericError(msg) => write!(f, "Error: {}", msg),
        }
    }
}

impl std::error::Error for WallcropError {}

impl From<io::Error> for WallcropError {
    fn from(error: io::Error) -> Self {
        WallcropError::IoError(error)
    }
}

impl From<image::ImageError> for WallcropError {
    fn from(error: image::ImageError) -> Self {
        WallcropError::ImageError(error)
    }
}

impl From<serde_json::Error> for WallcropError {
    fn from(error: serde_json::Error) -> Self {
        WallcropError::JsonError(error)
    }
}

impl From<toml::de::Error> for WallcropError {
    fn from(error: toml::de::Error) -> Self {
        WallcropError::ConfigError(error.to_string())
    }
}

/// Result type for wallcrop operations
pub type WallcropResult<T> = Result<T, WallcropError>;

impl From<String> for WallcropError {
    fn from(msg: String) -> Self {
        WallcropError::GenericError(msg)
    }
}
