//! Face detector capability
//!
//! Face detection itself runs outside this crate. Anything able to report
//! face boxes for an image path can drive the planner by implementing
//! [`FaceDetector`].

use std::collections::HashMap;
use std::fs;
use std::path::Path;

use log::{debug, info};

use super::face::{Face, RawDetection};
use crate::errors::{WallcropError, WallcropResult};
use crate::utils::path_utils::file_name;

/// Pluggable face detection backend
pub trait FaceDetector {
    /// Detect faces in the image at `image`
    ///
    /// Implementations return every detection with its confidence;
    /// threshold filtering happens at the caller.
    fn detect(&self, image: &Path) -> WallcropResult<Vec<Face>>;
}

/// Detector backed by a JSON file of precomputed detections
///
/// The file maps image file names to lists of
/// `{"xmin", "ymin", "xmax", "ymax", "confidence"}` objects, the format
/// written by the external detection script. Images missing from the file
/// have no faces.
#[derive(Debug, Default)]
pub struct DetectionFile {
    detections: HashMap<String, Vec<Face>>,
}

impl DetectionFile {
    /// Parse detections from a JSON string
    pub fn from_str(content: &str) -> WallcropResult<Self> {
        let raw: HashMap<String, Vec<RawDetection>> = serde_json::from_str(content)?;

        let mut detections = HashMap::with_capacity(raw.len());
        for (image, boxes) in raw {
            let faces = boxes
                .into_iter()
                .map(RawDetection::into_face)
                .collect::<WallcropResult<Vec<_>>>()
                .map_err(|e| WallcropError::InvalidFace(format!("{}: {}", image, e)))?;
            detections.insert(image, faces);
        }

        Ok(DetectionFile { detections })
    }

    /// Load detections from a JSON file
    pub fn from_file<P: AsRef<Path>>(path: P) -> WallcropResult<Self> {
        let contents = fs::read_to_string(path.as_ref())?;
        let file = Self::from_str(&contents)?;
        info!("Loaded detections for {} images from {}", file.len(), path.as_ref().display());
        Ok(file)
    }

    /// Number of images with detection records
    pub fn len(&self) -> usize {
        self.detections.len()
    }

    pub fn is_empty(&self) -> bool {
        self.detections.is_empty()
    }
}

impl FaceDetector for DetectionFile {
    fn detect(&self, image: &Path) -> WallcropResult<Vec<Face>> {
        let name = file_name(image)
            .ok_or_else(|| WallcropError::GenericError(format!("No file name in {}", image.display())))?;

        let faces = self.detections.get(&name).cloned().unwrap_or_default();
        debug!("{}: {} detections", name, faces.len());
        Ok(faces)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::Rectangle;

    const DETECTIONS: &str = r#"{
        "duo.png": [
            {"xmin": 100, "ymin": 20, "xmax": 180, "ymax": 110, "confidence": 0.93},
            {"xmin": 700, "ymin": 40, "xmax": 760, "ymax": 100, "confidence": 0.31}
        ],
        "empty.jpg": []
    }"#;

    #[test]
    fn detections_are_looked_up_by_file_name() {
        let file = DetectionFile::from_str(DETECTIONS).unwrap();
        assert_eq!(file.len(), 2);

        let faces = file.detect(Path::new("/walls/duo.png")).unwrap();
        assert_eq!(faces.len(), 2);
        assert_eq!(faces[0].bounds, Rectangle::new(100, 20, 180, 110).unwrap());
        assert_eq!(faces[1].confidence, 0.31);

        assert!(file.detect(Path::new("empty.jpg")).unwrap().is_empty());
        assert!(file.detect(Path::new("unknown.png")).unwrap().is_empty());
    }

    #[test]
    fn invalid_boxes_fail_loading() {
        let bad = r#"{"a.png": [{"xmin": 10, "ymin": 0, "xmax": 10, "ymax": 5}]}"#;
        assert!(matches!(DetectionFile::from_str(bad), Err(WallcropError::InvalidFace(_))));
        assert!(matches!(DetectionFile::from_str("[1, 2]"), Err(WallcropError::JsonError(_))));
    }
}
