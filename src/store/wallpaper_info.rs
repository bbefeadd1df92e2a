//! Geometry sidecar (`wallpapers.json`)
//!
//! The sidecar maps each wallpaper's file name either to `null` (no faces
//! were found) or to its stored faces plus one `WxH+X+Y` geometry per ratio
//! label:
//!
//! ```json
//! {
//!   "beach.png": {
//!     "faces": [[120, 260, 40, 180]],
//!     "1440x2560": "607x1080+39+0",
//!     "1920x1080": "1920x1080+0+0"
//!   },
//!   "skyline.jpg": null
//! }
//! ```
//!
//! Face tuples are stored as `[xmin, xmax, ymin, ymax]`.

use std::collections::{BTreeMap, BTreeSet};
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use log::{debug, info};
use serde::{Deserialize, Serialize};

use crate::detection::{from_sidecar_tuple, to_sidecar_tuple};
use crate::errors::WallcropResult;
use crate::geometry::{AspectRatio, Rectangle};

/// Stored crop data for one wallpaper
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct WallpaperEntry {
    /// Faces as `[xmin, xmax, ymin, ymax]`
    pub faces: Vec<[u32; 4]>,
    /// Optional image filter chosen for the wallpaper
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub filter: Option<String>,
    /// Ratio label to geometry string
    #[serde(flatten)]
    pub geometries: BTreeMap<String, String>,
}

impl WallpaperEntry {
    /// Start an entry for the given faces, with no geometries yet
    pub fn new(faces: &[Rectangle]) -> Self {
        WallpaperEntry {
            faces: faces.iter().map(to_sidecar_tuple).collect(),
            filter: None,
            geometries: BTreeMap::new(),
        }
    }

    /// Stored faces as rectangles
    pub fn face_rects(&self) -> WallcropResult<Vec<Rectangle>> {
        self.faces.iter().map(|t| from_sidecar_tuple(*t)).collect()
    }

    /// Stored crop for `ratio`, if any
    pub fn geometry(&self, ratio: &AspectRatio) -> Option<WallcropResult<Rectangle>> {
        self.geometries.get(&ratio.label()).map(|g| Rectangle::from_geometry(g))
    }

    /// Store the crop for `ratio`
    pub fn set_geometry(&mut self, ratio: &AspectRatio, crop: &Rectangle) {
        self.geometries.insert(ratio.label(), crop.to_geometry());
    }
}

/// In-memory view of the sidecar file
#[derive(Debug)]
pub struct WallpaperInfo {
    path: PathBuf,
    data: BTreeMap<String, Option<WallpaperEntry>>,
}

impl WallpaperInfo {
    /// Load the sidecar at `sidecar_path`
    ///
    /// A missing sidecar is an empty store. Entries for images no longer
    /// present next to the sidecar are dropped.
    pub fn load<P: AsRef<Path>>(sidecar_path: P) -> WallcropResult<Self> {
        let path = sidecar_path.as_ref().to_path_buf();
        let dir = match path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent.to_path_buf(),
            _ => PathBuf::from("."),
        };

        let loaded: BTreeMap<String, Option<WallpaperEntry>> = match fs::read_to_string(&path) {
            Ok(contents) => serde_json::from_str(&contents)?,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                debug!("No sidecar at {}, starting empty", path.display());
                BTreeMap::new()
            }
            Err(e) => return Err(e.into()),
        };

        let present: BTreeSet<String> = fs::read_dir(&dir)?
            .filter_map(|entry| entry.ok())
            .filter_map(|entry| entry.file_name().into_string().ok())
            .collect();

        let before = loaded.len();
        let data: BTreeMap<_, _> = loaded
            .into_iter()
            .filter(|(name, _)| present.contains(name))
            .collect();

        if data.len() < before {
            info!("Dropped {} sidecar entries for deleted images", before - data.len());
        }

        Ok(WallpaperInfo { path, data })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn contains(&self, name: &str) -> bool {
        self.data.contains_key(name)
    }

    /// Entry for `name`; `Some(None)` means the image has no faces
    pub fn get(&self, name: &str) -> Option<&Option<WallpaperEntry>> {
        self.data.get(name)
    }

    pub fn get_mut(&mut self, name: &str) -> Option<&mut WallpaperEntry> {
        self.data.get_mut(name).and_then(|e| e.as_mut())
    }

    pub fn insert(&mut self, name: String, entry: Option<WallpaperEntry>) {
        self.data.insert(name, entry);
    }

    /// Names of images that have stored faces, sorted
    pub fn names_with_faces(&self) -> Vec<String> {
        self.data
            .iter()
            .filter(|(_, entry)| entry.is_some())
            .map(|(name, _)| name.clone())
            .collect()
    }

    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Write the sidecar back as 2-space indented JSON
    pub fn save(&self) -> WallcropResult<()> {
        let json = serde_json::to_string_pretty(&self.data)?;
        fs::write(&self.path, json)?;
        info!("Saved {} entries to {}", self.data.len(), self.path.display());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SIDECAR: &str = r#"{
  "beach.png": {
    "faces": [[120, 260, 40, 180]],
    "filter": "grayscale",
    "1440x2560": "607x1080+39+0"
  },
  "gone.png": null,
  "skyline.jpg": null
}"#;

    fn wallpaper_dir() -> tempfile::TempDir {
        let dir = tempfile::tempdir().unwrap();
        for name in ["beach.png", "skyline.jpg"] {
            fs::write(dir.path().join(name), b"").unwrap();
        }
        dir
    }

    #[test]
    fn missing_sidecar_is_empty() {
        let dir = wallpaper_dir();
        let info = WallpaperInfo::load(dir.path().join("wallpapers.json")).unwrap();
        assert!(info.is_empty());
        assert_eq!(info.path(), dir.path().join("wallpapers.json"));
    }

    #[test]
    fn loading_prunes_deleted_images() {
        let dir = wallpaper_dir();
        fs::write(dir.path().join("wallpapers.json"), SIDECAR).unwrap();

        let info = WallpaperInfo::load(dir.path().join("wallpapers.json")).unwrap();
        assert_eq!(info.len(), 2);
        assert!(!info.contains("gone.png"));
        assert_eq!(info.get("skyline.jpg"), Some(&None));
        assert_eq!(info.names_with_faces(), vec!["beach.png".to_string()]);

        let beach = info.get("beach.png").unwrap().as_ref().unwrap();
        assert_eq!(beach.filter.as_deref(), Some("grayscale"));
        assert_eq!(beach.face_rects().unwrap(), vec![Rectangle::new(120, 40, 260, 180).unwrap()]);
        let vertical = AspectRatio::new(1440, 2560).unwrap();
        assert_eq!(
            beach.geometry(&vertical).unwrap().unwrap(),
            Rectangle::new(39, 0, 646, 1080).unwrap()
        );
    }

    #[test]
    fn saved_entries_load_back() {
        let dir = wallpaper_dir();
        let mut info = WallpaperInfo::load(dir.path().join("wallpapers.json")).unwrap();

        let face = Rectangle::new(10, 20, 30, 40).unwrap();
        let mut entry = WallpaperEntry::new(&[face]);
        entry.set_geometry(&AspectRatio::new(1, 1).unwrap(), &Rectangle::new(0, 0, 500, 500).unwrap());
        info.insert("beach.png".to_string(), Some(entry.clone()));
        info.insert("skyline.jpg".to_string(), None);
        info.save().unwrap();

        let written = fs::read_to_string(dir.path().join("wallpapers.json")).unwrap();
        assert!(written.contains("\"1x1\": \"500x500+0+0\""));
        assert!(written.contains("\"skyline.jpg\": null"));
        assert!(!written.contains("filter"));

        let reloaded = WallpaperInfo::load(dir.path().join("wallpapers.json")).unwrap();
        assert_eq!(reloaded.get("beach.png"), Some(&Some(entry)));
        assert_eq!(reloaded.get("skyline.jpg"), Some(&None));
    }
}
