//! Sidecar generation command
//!
//! Walks the wallpaper directory, detects faces in every image not yet in
//! the sidecar and stores a geometry per configured ratio.

use clap::ArgMatches;
use log::{info, warn};

use crate::api::Wallcrop;
use crate::commands::command_traits::Command;
use crate::detection::DetectionFile;
use crate::errors::{WallcropError, WallcropResult};
use crate::utils::path_utils::full_path;
use crate::utils::progress::ProgressTracker;

/// Command filling the geometry sidecar for new wallpapers
pub struct GenerateCommand<'a> {
    /// Precomputed detections from the external face detector
    detections: DetectionFile,
    app: &'a Wallcrop,
}

impl<'a> GenerateCommand<'a> {
    /// Create a new generate command
    ///
    /// # Arguments
    /// * `args` - CLI argument matches from clap
    /// * `app` - Configured wallcrop instance
    ///
    /// # Returns
    /// A new GenerateCommand instance or an error
    pub fn new(args: &ArgMatches, app: &'a Wallcrop) -> WallcropResult<Self> {
        let path = args.get_one::<String>("detections")
            .ok_or_else(|| WallcropError::GenericError("Missing --detections file for generate".to_string()))?;

        let detections = DetectionFile::from_file(full_path(path))?;
        if detections.is_empty() {
            warn!("{} lists no images, every new wallpaper will be stored without faces", path);
        }

        Ok(GenerateCommand { detections, app })
    }
}

impl<'a> Command for GenerateCommand<'a> {
    fn execute(&self) -> WallcropResult<()> {
        let settings = self.app.settings();
        info!("Generating geometries in {}", settings.wallpaper_dir.display());

        let progress = ProgressTracker::new(0, "Generating geometries");

        let summary = self.app.generate(&self.detections, &progress)?;

        info!(
            "Done: {} with faces, {} without faces, {} skipped",
            summary.with_faces, summary.without_faces, summary.skipped
        );
        self.app.logger().log(&format!(
            "generate: {} with faces, {} without faces, {} skipped",
            summary.with_faces, summary.without_faces, summary.skipped
        ))?;

        Ok(())
    }
}
