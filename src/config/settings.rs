//! Workflow settings loaded from an optional TOML file
//!
//! ```toml
//! wallpaper_dir = "~/Pictures/Wallpapers"
//! sidecar = "wallpapers.json"
//! face_score_threshold = 0.5
//! ratios = ["vertical", "framework", "ultrawide", "hd"]
//! log_file = "wallcrop.log"
//! ```

use std::fs;
use std::path::{Path, PathBuf};

use log::debug;

use crate::config::ratio_registry;
use crate::errors::{WallcropError, WallcropResult};
use crate::geometry::AspectRatio;
use crate::utils::path_utils::full_path;

const DEFAULT_WALLPAPER_DIR: &str = "~/Pictures/Wallpapers";
const DEFAULT_SIDECAR: &str = "wallpapers.json";
const DEFAULT_THRESHOLD: f64 = 0.5;
const DEFAULT_LOG_FILE: &str = "wallcrop.log";

/// Location searched when no `--config` is given
pub const DEFAULT_CONFIG_PATH: &str = "~/.config/wallcrop.toml";

#[derive(Debug, Clone)]
pub struct Settings {
    /// Directory holding the source wallpapers
    pub wallpaper_dir: PathBuf,
    /// File name of the geometry sidecar inside `wallpaper_dir`
    pub sidecar: String,
    /// Detections below this confidence are discarded
    pub face_score_threshold: f64,
    /// Ratios computed for every wallpaper
    pub ratios: Vec<AspectRatio>,
    /// Operation journal written by the commands
    pub log_file: PathBuf,
}

impl Default for Settings {
    fn default() -> Self {
        Settings {
            wallpaper_dir: full_path(DEFAULT_WALLPAPER_DIR),
            sidecar: DEFAULT_SIDECAR.to_string(),
            face_score_threshold: DEFAULT_THRESHOLD,
            ratios: ratio_registry::generate_defaults(),
            log_file: PathBuf::from(DEFAULT_LOG_FILE),
        }
    }
}

impl Settings {
    /// Parse settings from a TOML string, falling back to defaults per key
    pub fn from_str(content: &str) -> WallcropResult<Self> {
        let toml_value: toml::Value = content.parse()?;
        let mut settings = Settings::default();

        if let Some(dir) = toml_value.get("wallpaper_dir") {
            let dir = dir.as_str()
                .ok_or_else(|| WallcropError::ConfigError("wallpaper_dir must be a string".to_string()))?;
            settings.wallpaper_dir = full_path(dir);
        }

        if let Some(sidecar) = toml_value.get("sidecar") {
            settings.sidecar = sidecar.as_str()
                .ok_or_else(|| WallcropError::ConfigError("sidecar must be a string".to_string()))?
                .to_string();
        }

        if let Some(threshold) = toml_value.get("face_score_threshold") {
            // integers such as `1` are accepted as well as floats
            let threshold = threshold.as_float()
                .or_else(|| threshold.as_integer().map(|i| i as f64))
                .ok_or_else(|| WallcropError::ConfigError("face_score_threshold must be a number".to_string()))?;
            if !(0.0..=1.0).contains(&threshold) {
                return Err(WallcropError::ConfigError(format!(
                    "face_score_threshold must be within [0, 1], got {}", threshold
                )));
            }
            settings.face_score_threshold = threshold;
        }

        if let Some(ratios) = toml_value.get("ratios") {
            let ratios = ratios.as_array()
                .ok_or_else(|| WallcropError::ConfigError("ratios must be a list".to_string()))?;
            settings.ratios = ratios
                .iter()
                .map(|r| {
                    r.as_str()
                        .ok_or_else(|| WallcropError::ConfigError("ratios entries must be strings".to_string()))?
                        .parse::<AspectRatio>()
                })
                .collect::<WallcropResult<Vec<_>>>()?;
        }

        if let Some(log_file) = toml_value.get("log_file") {
            let log_file = log_file.as_str()
                .ok_or_else(|| WallcropError::ConfigError("log_file must be a string".to_string()))?;
            settings.log_file = full_path(log_file);
        }

        Ok(settings)
    }

    /// Load settings from a TOML file
    pub fn from_file<P: AsRef<Path>>(path: P) -> WallcropResult<Self> {
        let contents = fs::read_to_string(path.as_ref())?;
        Self::from_str(&contents)
    }

    /// Load settings from `path` if given, otherwise from the default
    /// location when it exists, otherwise use defaults
    pub fn load(path: Option<&str>) -> WallcropResult<Self> {
        match path {
            Some(p) => {
                debug!("Loading settings from {}", p);
                Self::from_file(full_path(p))
            }
            None => {
                let default_path = full_path(DEFAULT_CONFIG_PATH);
                if default_path.is_file() {
                    debug!("Loading settings from {}", default_path.display());
                    Self::from_file(default_path)
                } else {
                    debug!("No settings file found, using defaults");
                    Ok(Settings::default())
                }
            }
        }
    }

    /// Full path of the geometry sidecar
    pub fn sidecar_path(&self) -> PathBuf {
        self.wallpaper_dir.join(&self.sidecar)
    }
}
