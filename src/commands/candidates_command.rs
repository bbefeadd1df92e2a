//! Candidate listing command
//!
//! Lists every plausible crop per ratio, one per distinct group of fully
//! covered faces, so a person can pick one.

use clap::ArgMatches;
use log::info;

use crate::api::Wallcrop;
use crate::commands::command_traits::Command;
use crate::commands::plan_command::PlanInputs;
use crate::errors::WallcropResult;

/// Command printing all crop candidates per ratio
pub struct CandidatesCommand<'a> {
    inputs: PlanInputs,
    app: &'a Wallcrop,
}

impl<'a> CandidatesCommand<'a> {
    /// Create a new candidates command
    pub fn new(args: &ArgMatches, app: &'a Wallcrop) -> WallcropResult<Self> {
        Ok(CandidatesCommand {
            inputs: PlanInputs::from_args(args, app)?,
            app,
        })
    }
}

impl<'a> Command for CandidatesCommand<'a> {
    fn execute(&self) -> WallcropResult<()> {
        let inputs = &self.inputs;

        for &ratio in &inputs.ratios {
            let candidates = self.app.candidates(inputs.dims, &inputs.faces, ratio)?;
            info!("{}: {} candidates for {}", inputs.image_name, candidates.len(), ratio);

            for (index, crop) in candidates.iter().enumerate() {
                println!("{} {} {}", ratio.label(), index, crop);
            }
        }

        Ok(())
    }
}
