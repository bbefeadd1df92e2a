//! Face-aware crop planning
//!
//! Given image dimensions, detected face rectangles and a target aspect
//! ratio, the planner picks the crop window that covers the most faces.
//! The crop axis and target size are derived once into a [`CropPlan`];
//! changing the ratio means building a new plan, never mutating one.

mod crop_dimensions;
mod window_scan;

#[cfg(test)]
mod tests;

pub use self::crop_dimensions::compute_crop_dimensions;

use log::{debug, warn};

use crate::errors::{WallcropError, WallcropResult};
use crate::geometry::{AspectRatio, CropAxis, Dimensions, Rectangle};

/// Crop geometry derived from one (image, aspect ratio) pair
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CropPlan {
    /// Source image size
    pub image: Dimensions,
    /// Requested aspect ratio
    pub ratio: AspectRatio,
    /// Size of the crop window
    pub target: Dimensions,
    /// Axis the crop window slides along
    pub axis: CropAxis,
}

impl CropPlan {
    /// Derive the crop axis and target size for `ratio` on `image`
    ///
    /// # Returns
    /// The plan, or `InvalidDimensions` when the image is empty or too small
    /// to hold a single pixel of the ratio
    pub fn new(image: Dimensions, ratio: AspectRatio) -> WallcropResult<Self> {
        if image.width == 0 || image.height == 0 {
            return Err(WallcropError::InvalidDimensions(image.width, image.height));
        }

        let (target, axis) = compute_crop_dimensions(image, ratio);

        if target.width == 0 || target.height == 0 {
            return Err(WallcropError::InvalidDimensions(image.width, image.height));
        }
        if target.width > image.width || target.height > image.height {
            return Err(WallcropError::GenericError(format!(
                "crop {} does not fit image {} for ratio {}", target, image, ratio
            )));
        }

        debug!("Planned {} crop of {} image: target {} along {}", ratio, image, target, axis);

        Ok(CropPlan { image, ratio, target, axis })
    }

    /// Re-derive the plan for another ratio on the same image
    pub fn with_aspect_ratio(&self, ratio: AspectRatio) -> WallcropResult<Self> {
        CropPlan::new(self.image, ratio)
    }

    /// Whether the crop is the entire image
    pub fn is_whole_image(&self) -> bool {
        self.target == self.image
    }

    /// Length of the crop window along the crop axis
    pub fn target_extent(&self) -> u32 {
        self.target.extent(self.axis)
    }

    /// Largest valid window start along the crop axis
    fn max_start(&self) -> u32 {
        self.image.extent(self.axis) - self.target_extent()
    }

    /// Turn a window start into a crop rectangle inside the image
    ///
    /// Out-of-range positions saturate to the nearest valid start. The other
    /// axis always spans the full image.
    pub fn clamp(&self, position: i64) -> Rectangle {
        let start = position.clamp(0, self.max_start() as i64) as u32;
        let end = start + self.target_extent();

        match self.axis {
            CropAxis::X => Rectangle {
                xmin: start,
                ymin: 0,
                xmax: end,
                ymax: self.image.height,
            },
            CropAxis::Y => Rectangle {
                xmin: 0,
                ymin: start,
                xmax: self.image.width,
                ymax: end,
            },
        }
    }

    /// Center the crop window on the image
    pub fn crop_no_faces(&self) -> Rectangle {
        self.clamp(self.max_start() as i64 / 2)
    }

    /// Center the crop window on a face's midpoint along the crop axis
    pub fn crop_single_face(&self, face: &Rectangle) -> Rectangle {
        let (min, max) = face.span(self.axis);
        self.center_on(min, max)
    }

    /// Window centered on the span `[min, max]`, clamped into the image
    fn center_on(&self, min: u32, max: u32) -> Rectangle {
        // (min + max) / 2 - extent / 2, truncated
        let twice = min as i64 + max as i64 - self.target_extent() as i64;
        self.clamp(twice.div_euclid(2))
    }

    /// Pick the window with the best face coverage
    ///
    /// Positions are ranked by fractional face count, then by covered face
    /// area; the median of the equally good positions is used. When no
    /// scanned window covers any face, the crop is centered on the span
    /// from the first face start to the last face end.
    pub fn crop_best_window(&self, faces: &[Rectangle]) -> Rectangle {
        if self.is_whole_image() {
            return Rectangle::whole(self.image);
        }

        let spans = window_scan::sorted_spans(faces, self.axis);
        match window_scan::best_window_start(&spans, self.max_start(), self.target_extent()) {
            Some(start) => self.clamp(start as i64),
            None => {
                let min = spans.iter().map(|s| s.min).min().unwrap_or(0);
                let max = spans.iter().map(|s| s.max).max().unwrap_or(self.image.extent(self.axis));
                warn!("No crop window covers any of {} faces, centering on {}..{}", faces.len(), min, max);
                self.center_on(min, max)
            }
        }
    }

    /// Best crop for any number of faces
    pub fn crop(&self, faces: &[Rectangle]) -> Rectangle {
        if self.is_whole_image() {
            return Rectangle::whole(self.image);
        }

        match faces {
            [] => self.crop_no_faces(),
            [face] => self.crop_single_face(face),
            _ => self.crop_best_window(faces),
        }
    }

    /// One crop per distinct covered face area, for manual selection
    ///
    /// Only faces fully inside a window are counted. Each group of positions
    /// sharing the same covered area is represented by its median position.
    /// Results are sorted by their start along the crop axis.
    pub fn crop_candidates(&self, faces: &[Rectangle]) -> Vec<Rectangle> {
        if self.is_whole_image() {
            return vec![Rectangle::whole(self.image)];
        }

        match faces {
            [] => return vec![self.crop_no_faces()],
            [face] => return vec![self.crop_single_face(face)],
            _ => {}
        }

        let spans = window_scan::sorted_spans(faces, self.axis);
        let groups = window_scan::candidate_starts(&spans, self.max_start(), self.target_extent());

        if groups.is_empty() {
            debug!("No window fully contains a face, using best window as the only candidate");
            return vec![self.crop_best_window(faces)];
        }

        let mut candidates: Vec<Rectangle> = groups
            .into_iter()
            .map(|(_, start)| self.clamp(start as i64))
            .collect();
        candidates.sort_by_key(|rect| rect.span(self.axis).0);
        candidates.dedup();
        candidates
    }
}

/// Best crop of `image` for `ratio` given the detected faces
pub fn plan_crop(image: Dimensions, faces: &[Rectangle], ratio: AspectRatio) -> WallcropResult<Rectangle> {
    Ok(CropPlan::new(image, ratio)?.crop(faces))
}

/// All candidate crops of `image` for `ratio` given the detected faces
pub fn plan_candidates(image: Dimensions, faces: &[Rectangle], ratio: AspectRatio) -> WallcropResult<Vec<Rectangle>> {
    Ok(CropPlan::new(image, ratio)?.crop_candidates(faces))
}
