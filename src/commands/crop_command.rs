//! Image crop command
//!
//! Writes the cropped image for an explicit geometry, or for the planned
//! crop of the first requested ratio.

use clap::ArgMatches;
use log::info;

use crate::api::Wallcrop;
use crate::commands::command_traits::Command;
use crate::commands::plan_command::PlanInputs;
use crate::errors::{WallcropError, WallcropResult};
use crate::geometry::Rectangle;

/// Command cropping an image file
pub struct CropCommand<'a> {
    /// Path to the input image
    input_file: String,
    /// Path to the output image
    output_file: String,
    /// Region to keep
    crop: Rectangle,
    app: &'a Wallcrop,
}

impl<'a> CropCommand<'a> {
    /// Create a new crop command
    ///
    /// # Arguments
    /// * `args` - CLI argument matches from clap
    /// * `app` - Configured wallcrop instance
    ///
    /// # Returns
    /// A new CropCommand instance or an error
    pub fn new(args: &ArgMatches, app: &'a Wallcrop) -> WallcropResult<Self> {
        let input_file = args.get_one::<String>("input")
            .ok_or_else(|| WallcropError::GenericError("Missing input image".to_string()))?
            .clone();

        let output_file = args.get_one::<String>("output")
            .ok_or_else(|| WallcropError::GenericError("Missing output file path for crop".to_string()))?
            .clone();

        let crop = match args.get_one::<String>("geometry") {
            Some(geometry) => Rectangle::from_geometry(geometry)?,
            None => {
                let inputs = PlanInputs::from_args(args, app)?;
                let (ratio, crop) = app
                    .plan(inputs.dims, &inputs.faces, &inputs.ratios[..1])?
                    .into_iter()
                    .next()
                    .ok_or_else(|| WallcropError::GenericError("No crop planned".to_string()))?;
                info!("Planned {} crop: {}", ratio, crop);
                crop
            }
        };

        Ok(CropCommand {
            input_file,
            output_file,
            crop,
            app,
        })
    }
}

impl<'a> Command for CropCommand<'a> {
    fn execute(&self) -> WallcropResult<()> {
        info!("Cropping {} to {}", self.input_file, self.crop);

        self.app.crop_image(&self.input_file, &self.output_file, &self.crop)?;
        self.app.logger().log(&format!("crop {} {} -> {}", self.input_file, self.crop, self.output_file))?;

        Ok(())
    }
}
