use std::path::Path;

use super::error::CommandError;

/// One invocation of an external program, configured and then run once.
pub trait ShellCommand {
    /// Record the working directory used when the process runs.
    fn set_dir(&mut self, dir: &Path);

    /// Run the process to completion and return its standard output.
    ///
    /// # Errors
    /// Returns an error if the process cannot be launched or exits with a non-zero status.
    fn output(&mut self) -> Result<Vec<u8>, CommandError>;

    /// Run the process to completion without capturing its output.
    ///
    /// # Errors
    /// Returns an error if the process cannot be launched or exits with a non-zero status.
    fn wait(&mut self) -> Result<(), CommandError>;
}

/// Builds a [`ShellCommand`] for a program name and its arguments.
pub trait CommandFactory {
    fn command(&self, program: &str, args: &[&str]) -> Box<dyn ShellCommand>;
}

impl<F> CommandFactory for F
where
    F: Fn(&str, &[&str]) -> Box<dyn ShellCommand>,
{
    fn command(&self, program: &str, args: &[&str]) -> Box<dyn ShellCommand> {
        self(program, args)
    }
}
