//! Crop planning command
//!
//! Computes the best crop of one image for each requested ratio and prints
//! one `label geometry` line per ratio.

use clap::ArgMatches;
use log::{debug, info};

use crate::api::Wallcrop;
use crate::commands::command_traits::Command;
use crate::errors::{WallcropError, WallcropResult};
use crate::geometry::{AspectRatio, Dimensions, Rectangle};

/// Inputs shared by the planning commands
#[derive(Debug, Clone)]
pub(crate) struct PlanInputs {
    /// Name used in the journal
    pub image_name: String,
    pub dims: Dimensions,
    pub faces: Vec<Rectangle>,
    pub ratios: Vec<AspectRatio>,
}

impl PlanInputs {
    /// Gather image size, faces and ratios from CLI arguments
    ///
    /// The size comes from `--size` when given, otherwise from the input
    /// image's header. Ratios default to the configured set.
    pub fn from_args(args: &ArgMatches, app: &Wallcrop) -> WallcropResult<Self> {
        let input = args.get_one::<String>("input").cloned();

        let dims = match (args.get_one::<String>("size"), &input) {
            (Some(size), _) => size.parse::<Dimensions>()?,
            (None, Some(path)) => Wallcrop::image_dimensions(path)?,
            (None, None) => {
                return Err(WallcropError::GenericError("Missing input image or --size".to_string()));
            }
        };
        debug!("Image dimensions: {}", dims);

        let faces = args
            .get_many::<String>("face")
            .map(|values| values.map(|v| Rectangle::from_bounds_str(v)).collect::<WallcropResult<Vec<_>>>())
            .transpose()?
            .unwrap_or_default();
        debug!("Faces: {:?}", faces);

        let ratios = match args.get_many::<String>("ratio") {
            Some(values) => values.map(|v| v.parse::<AspectRatio>()).collect::<WallcropResult<Vec<_>>>()?,
            None => app.settings().ratios.clone(),
        };
        if ratios.is_empty() {
            return Err(WallcropError::GenericError("No aspect ratios requested or configured".to_string()));
        }

        Ok(PlanInputs {
            image_name: input.unwrap_or_else(|| dims.to_string()),
            dims,
            faces,
            ratios,
        })
    }
}

/// Command printing the best crop per ratio
pub struct PlanCommand<'a> {
    inputs: PlanInputs,
    app: &'a Wallcrop,
}

impl<'a> PlanCommand<'a> {
    /// Create a new plan command
    ///
    /// # Arguments
    /// * `args` - CLI argument matches from clap
    /// * `app` - Configured wallcrop instance
    ///
    /// # Returns
    /// A new PlanCommand instance or an error
    pub fn new(args: &ArgMatches, app: &'a Wallcrop) -> WallcropResult<Self> {
        Ok(PlanCommand {
            inputs: PlanInputs::from_args(args, app)?,
            app,
        })
    }
}

impl<'a> Command for PlanCommand<'a> {
    fn execute(&self) -> WallcropResult<()> {
        let inputs = &self.inputs;
        info!("Planning {} crops for {} with {} faces", inputs.ratios.len(), inputs.image_name, inputs.faces.len());

        for (ratio, crop) in self.app.plan(inputs.dims, &inputs.faces, &inputs.ratios)? {
            self.app.logger().record_crop(&inputs.image_name, &ratio.label(), &crop)?;
            println!("{} {}", ratio.label(), crop);
        }

        Ok(())
    }
}
