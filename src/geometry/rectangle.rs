//! Pixel rectangle used for faces and crop regions
//!
//! Coordinates follow the usual image convention: (0,0) is the top-left
//! corner, `xmax`/`ymax` are exclusive.

use std::fmt;
use std::str::FromStr;

use lazy_static::lazy_static;
use regex::Regex;

use super::{CropAxis, Dimensions};
use crate::errors::{WallcropError, WallcropResult};

lazy_static! {
    static ref GEOMETRY_PATTERN: Regex =
        Regex::new(r"^(\d+)x(\d+)\+(-?\d+)\+(-?\d+)$").expect("geometry pattern is valid");
}

/// Axis-aligned rectangle in integer pixel coordinates
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Rectangle {
    /// Left edge (inclusive)
    pub xmin: u32,
    /// Top edge (inclusive)
    pub ymin: u32,
    /// Right edge (exclusive)
    pub xmax: u32,
    /// Bottom edge (exclusive)
    pub ymax: u32,
}

impl Rectangle {
    /// Create a rectangle, rejecting empty or inverted spans
    ///
    /// # Arguments
    /// * `xmin`, `ymin` - Top-left corner
    /// * `xmax`, `ymax` - Bottom-right corner (exclusive)
    ///
    /// # Returns
    /// The rectangle, or `InvalidFace` when `xmin >= xmax` or `ymin >= ymax`
    pub fn new(xmin: u32, ymin: u32, xmax: u32, ymax: u32) -> WallcropResult<Self> {
        if xmin >= xmax || ymin >= ymax {
            return Err(WallcropError::InvalidFace(format!(
                "({}, {}) - ({}, {}) has no area", xmin, ymin, xmax, ymax
            )));
        }
        Ok(Rectangle { xmin, ymin, xmax, ymax })
    }

    /// Rectangle covering an entire image
    pub fn whole(dims: Dimensions) -> Self {
        Rectangle {
            xmin: 0,
            ymin: 0,
            xmax: dims.width,
            ymax: dims.height,
        }
    }

    pub fn width(&self) -> u32 {
        self.xmax - self.xmin
    }

    pub fn height(&self) -> u32 {
        self.ymax - self.ymin
    }

    /// Pixel area, widened so large images cannot overflow
    pub fn area(&self) -> u64 {
        self.width() as u64 * self.height() as u64
    }

    /// The `(min, max)` span of this rectangle along an axis
    pub fn span(&self, axis: CropAxis) -> (u32, u32) {
        match axis {
            CropAxis::X => (self.xmin, self.xmax),
            CropAxis::Y => (self.ymin, self.ymax),
        }
    }

    /// Extent across the other axis (height for `X`, width for `Y`)
    pub fn cross_extent(&self, axis: CropAxis) -> u32 {
        match axis {
            CropAxis::X => self.height(),
            CropAxis::Y => self.width(),
        }
    }

    /// Whether the rectangle lies inside `[0, width] x [0, height]`
    pub fn fits_within(&self, dims: Dimensions) -> bool {
        self.xmax <= dims.width && self.ymax <= dims.height
    }

    /// Serialize as an ImageMagick style geometry string `WxH+X+Y`
    pub fn to_geometry(&self) -> String {
        format!("{}x{}+{}+{}", self.width(), self.height(), self.xmin, self.ymin)
    }

    /// Parse a `WxH+X+Y` geometry string
    ///
    /// Offsets are matched as signed integers so that negative values are
    /// reported as out of image space rather than as a format mismatch.
    pub fn from_geometry(geometry: &str) -> WallcropResult<Self> {
        let invalid = || WallcropError::InvalidGeometry(geometry.to_string());

        let caps = GEOMETRY_PATTERN.captures(geometry.trim()).ok_or_else(invalid)?;

        let width = caps[1].parse::<u32>().map_err(|_| invalid())?;
        let height = caps[2].parse::<u32>().map_err(|_| invalid())?;
        let x = caps[3].parse::<i64>().map_err(|_| invalid())?;
        let y = caps[4].parse::<i64>().map_err(|_| invalid())?;

        if x < 0 || y < 0 || width == 0 || height == 0 {
            return Err(invalid());
        }

        let xmin = u32::try_from(x).map_err(|_| invalid())?;
        let ymin = u32::try_from(y).map_err(|_| invalid())?;
        let xmax = xmin.checked_add(width).ok_or_else(invalid)?;
        let ymax = ymin.checked_add(height).ok_or_else(invalid)?;

        Ok(Rectangle { xmin, ymin, xmax, ymax })
    }

    /// Parse a comma separated `xmin,ymin,xmax,ymax` quadruple
    pub fn from_bounds_str(bounds: &str) -> WallcropResult<Self> {
        let parts: Vec<&str> = bounds.split(',').collect();
        if parts.len() != 4 {
            return Err(WallcropError::InvalidFace(format!(
                "expected xmin,ymin,xmax,ymax but got '{}'", bounds
            )));
        }

        let mut values = [0u32; 4];
        for (value, part) in values.iter_mut().zip(&parts) {
            *value = part.trim().parse::<u32>().map_err(|_| {
                WallcropError::InvalidFace(format!("'{}' is not a pixel coordinate", part.trim()))
            })?;
        }

        Rectangle::new(values[0], values[1], values[2], values[3])
    }
}

impl fmt::Display for Rectangle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_geometry())
    }
}

impl FromStr for Rectangle {
    type Err = WallcropError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Rectangle::from_geometry(s)
    }
}
