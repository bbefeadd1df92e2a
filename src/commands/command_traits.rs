//! Traits shared by the CLI commands
//!
//! Each flag combination maps to one `Command` built against a configured
//! [`Wallcrop`]; the binary only sees `Box<dyn Command>`.

use crate::api::Wallcrop;
use crate::errors::WallcropResult;

/// A parsed CLI invocation, ready to run
pub trait Command {
    /// Run the command, printing results to stdout and journaling crops
    fn execute(&self) -> WallcropResult<()>;
}

/// Chooses and builds the command for a set of CLI arguments
pub trait CommandFactory<'a> {
    /// Build the command selected by `args`
    ///
    /// # Arguments
    /// * `args` - CLI argument matches from clap
    /// * `app` - Configured wallcrop instance the command runs against
    ///
    /// # Returns
    /// A command that implements the Command trait, or an error
    fn create_command(&self, args: &clap::ArgMatches, app: &'a Wallcrop) -> WallcropResult<Box<dyn Command + 'a>>;
}
