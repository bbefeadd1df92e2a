//! Detected faces

use serde::Deserialize;

use crate::errors::{WallcropError, WallcropResult};
use crate::geometry::Rectangle;

/// A face reported by a detector
///
/// The confidence is informational only; the planner works on the bounds.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Face {
    pub bounds: Rectangle,
    /// Detector score in [0, 1]
    pub confidence: f64,
}

impl Face {
    pub fn new(bounds: Rectangle, confidence: f64) -> Self {
        Face { bounds, confidence }
    }
}

/// Wire form of a detection as written by external detectors
#[derive(Debug, Clone, Copy, Deserialize)]
pub(crate) struct RawDetection {
    pub xmin: i64,
    pub ymin: i64,
    pub xmax: i64,
    pub ymax: i64,
    #[serde(default = "full_confidence")]
    pub confidence: f64,
}

fn full_confidence() -> f64 {
    1.0
}

impl RawDetection {
    /// Validate a raw detection into a face
    ///
    /// Detectors may report boxes hanging slightly off the image; negative
    /// coordinates are clipped to zero before the box is validated.
    pub fn into_face(self) -> WallcropResult<Face> {
        let coord = |v: i64| -> WallcropResult<u32> {
            u32::try_from(v.max(0))
                .map_err(|_| WallcropError::InvalidFace(format!("coordinate {} out of range", v)))
        };

        let bounds = Rectangle::new(coord(self.xmin)?, coord(self.ymin)?, coord(self.xmax)?, coord(self.ymax)?)?;

        if !(0.0..=1.0).contains(&self.confidence) {
            return Err(WallcropError::InvalidFace(format!(
                "confidence {} is outside [0, 1]", self.confidence
            )));
        }

        Ok(Face::new(bounds, self.confidence))
    }
}

/// Drop detections scoring below `threshold`
pub fn filter_faces(faces: Vec<Face>, threshold: f64) -> Vec<Face> {
    faces.into_iter().filter(|f| f.confidence >= threshold).collect()
}

/// Face bounds as the planner consumes them
pub fn face_bounds(faces: &[Face]) -> Vec<Rectangle> {
    faces.iter().map(|f| f.bounds).collect()
}

/// Face rectangle in the sidecar's `[xmin, xmax, ymin, ymax]` order
pub fn to_sidecar_tuple(rect: &Rectangle) -> [u32; 4] {
    [rect.xmin, rect.xmax, rect.ymin, rect.ymax]
}

/// Read back a sidecar `[xmin, xmax, ymin, ymax]` tuple
pub fn from_sidecar_tuple(tuple: [u32; 4]) -> WallcropResult<Rectangle> {
    let [xmin, xmax, ymin, ymax] = tuple;
    Rectangle::new(xmin, ymin, xmax, ymax)
}
