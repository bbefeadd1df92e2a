//! CLI command implementations
//!
//! This module contains implementations of the commands
//! supported by the CLI application using the Command pattern.

pub mod command_traits;
pub mod plan_command;
pub mod candidates_command;
pub mod generate_command;
pub mod add_ratio_command;
pub mod crop_command;

pub use command_traits::{Command, CommandFactory};
pub use plan_command::PlanCommand;
pub use candidates_command::CandidatesCommand;
pub use generate_command::GenerateCommand;
pub use add_ratio_command::AddRatioCommand;
pub use crop_command::CropCommand;

use clap::ArgMatches;
use crate::api::Wallcrop;
use crate::errors::WallcropResult;

/// Factory for creating command instances based on CLI arguments
///
/// This factory examines the command-line arguments and creates
/// the appropriate command instance for execution.
pub struct WallcropCommandFactory;

impl WallcropCommandFactory {
    /// Create a new factory instance
    pub fn new() -> Self {
        WallcropCommandFactory
    }
}

impl Default for WallcropCommandFactory {
    fn default() -> Self {
        Self::new()
    }
}

impl<'a> CommandFactory<'a> for WallcropCommandFactory {
    fn create_command(&self, args: &ArgMatches, app: &'a Wallcrop) -> WallcropResult<Box<dyn Command + 'a>> {
        if args.get_flag("generate") {
            Ok(Box::new(GenerateCommand::new(args, app)?))
        } else if args.contains_id("add-ratio") {
            Ok(Box::new(AddRatioCommand::new(args, app)?))
        } else if args.get_flag("crop") {
            Ok(Box::new(CropCommand::new(args, app)?))
        } else if args.get_flag("candidates") {
            Ok(Box::new(CandidatesCommand::new(args, app)?))
        } else {
            // Default to plan command
            Ok(Box::new(PlanCommand::new(args, app)?))
        }
    }
}
