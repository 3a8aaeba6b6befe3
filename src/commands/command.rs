#![forbid(unsafe_code)]

//! The Command trait

use crate::error::CommandError;
use crate::options::OptionSet;
use crate::types::CommandName;
use crate::values::ValueBag;

/// A named action with its own option scope
///
/// Implementations declare their metadata once and receive a bag of
/// coerced values when dispatched. The trait is `Send + Sync` so that
/// registries can be shared across threads.
pub trait Command: Send + Sync {
    /// Returns the command's primary name
    fn name(&self) -> &CommandName;

    /// Returns a one-line summary of what the command does
    fn summary(&self) -> &str;

    /// Other names which may be used to refer to this command
    fn aliases(&self) -> &[CommandName] {
        &[]
    }

    /// Whether the command is hidden from listings
    fn is_hidden(&self) -> bool {
        false
    }

    /// Returns the options this command accepts
    fn options(&self) -> &OptionSet;

    /// Runs the command with the coerced option values
    ///
    /// Returns the process exit code on success. Failures are reported
    /// as `CommandError`, never by exiting from inside the command.
    fn run(&self, values: &ValueBag) -> Result<i32, CommandError>;
}
