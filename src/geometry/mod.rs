//! Geometry primitives shared by the planner, detectors and the sidecar store

mod aspect_ratio;
mod rectangle;

pub use self::aspect_ratio::AspectRatio;
pub use self::rectangle::Rectangle;

use std::fmt;
use std::str::FromStr;

use crate::errors::WallcropError;

/// Source image size in pixels
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Dimensions {
    pub width: u32,
    pub height: u32,
}

impl Dimensions {
    pub fn new(width: u32, height: u32) -> Self {
        Dimensions { width, height }
    }

    /// Extent along an axis
    pub fn extent(&self, axis: CropAxis) -> u32 {
        match axis {
            CropAxis::X => self.width,
            CropAxis::Y => self.height,
        }
    }
}

impl fmt::Display for Dimensions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x{}", self.width, self.height)
    }
}

impl FromStr for Dimensions {
    type Err = WallcropError;

    /// Parse `WIDTHxHEIGHT`
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || WallcropError::GenericError(format!("Invalid image size '{}', expected WIDTHxHEIGHT", s));

        let (w, h) = s.trim().split_once('x').ok_or_else(invalid)?;
        let width = w.parse::<u32>().map_err(|_| invalid())?;
        let height = h.parse::<u32>().map_err(|_| invalid())?;

        if width == 0 || height == 0 {
            return Err(WallcropError::InvalidDimensions(width, height));
        }
        Ok(Dimensions::new(width, height))
    }
}

/// The single dimension reduced by a crop
///
/// `X` crops the width and keeps the full height, `Y` crops the height and
/// keeps the full width.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CropAxis {
    X,
    Y,
}

impl fmt::Display for CropAxis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CropAxis::X => write!(f, "x"),
            CropAxis::Y => write!(f, "y"),
        }
    }
}
