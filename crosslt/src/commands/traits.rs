//! Command traits for the crosslt CLI.
//!
//! Every subcommand implements [`Command`] and [`CommandDescription`] so
//! `main` can construct and run them the same way.

use crate::error::Result;

/// Standard command trait that all crosslt commands implement.
pub trait Command {
    /// The arguments type for this command.
    type Args;

    /// The output type returned by this command.
    type Output;

    /// Create a new command instance with the given arguments.
    fn new(args: Self::Args) -> Self;

    /// Execute the command, writing its report to stdout.
    fn execute(&self) -> Result<Self::Output>;

    /// Get the command name.
    fn name() -> &'static str;
}

/// Short description of a command, used in logs.
pub trait CommandDescription {
    /// A brief one-line description.
    fn description() -> &'static str;
}
