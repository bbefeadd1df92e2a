//! Add-ratio command
//!
//! Computes one more aspect ratio for every wallpaper already in the
//! sidecar, reusing the stored faces instead of detecting again.

use clap::ArgMatches;
use log::info;

use crate::api::Wallcrop;
use crate::commands::command_traits::Command;
use crate::errors::{WallcropError, WallcropResult};
use crate::geometry::AspectRatio;
use crate::utils::progress::ProgressTracker;

/// Command adding a ratio to every sidecar entry
pub struct AddRatioCommand<'a> {
    ratio: AspectRatio,
    app: &'a Wallcrop,
}

impl<'a> AddRatioCommand<'a> {
    /// Create a new add-ratio command
    pub fn new(args: &ArgMatches, app: &'a Wallcrop) -> WallcropResult<Self> {
        let ratio = args.get_one::<String>("add-ratio")
            .ok_or_else(|| WallcropError::GenericError("Missing ratio for --add-ratio".to_string()))?
            .parse::<AspectRatio>()?;

        Ok(AddRatioCommand { ratio, app })
    }
}

impl<'a> Command for AddRatioCommand<'a> {
    fn execute(&self) -> WallcropResult<()> {
        info!("Adding {} geometries", self.ratio.label());

        let progress = ProgressTracker::new(0, &format!("Adding {}", self.ratio.label()));
        let summary = self.app.add_ratio(self.ratio, &progress)?;

        info!("Updated {} wallpapers, {} skipped", summary.updated, summary.skipped);
        self.app.logger().log(&format!(
            "add-ratio {}: {} updated, {} skipped",
            self.ratio.label(), summary.updated, summary.skipped
        ))?;

        Ok(())
    }
}
