pub mod api;
pub mod commands;
pub mod config;
pub mod detection;
pub mod errors;
pub mod geometry;
pub mod planner;
pub mod store;
pub mod utils;

pub use crate::api::{AddRatioSummary, GenerateSummary, Wallcrop};

pub use config::Settings;
pub use detection::{DetectionFile, Face, FaceDetector};
pub use errors::{WallcropError, WallcropResult};
pub use geometry::{AspectRatio, CropAxis, Dimensions, Rectangle};
pub use planner::{compute_crop_dimensions, plan_candidates, plan_crop, CropPlan};
pub use store::{WallpaperEntry, WallpaperInfo};
