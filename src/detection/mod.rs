//! Face detection boundary
//!
//! Detections enter the crate here, get validated and filtered by
//! confidence, and leave as plain rectangles for the planner.

mod detector;
mod face;

pub use self::detector::{DetectionFile, FaceDetector};
pub use self::face::{face_bounds, filter_faces, from_sidecar_tuple, to_sidecar_tuple, Face};
