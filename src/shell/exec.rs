use std::path::Path;
use std::process::{Command, Output, Stdio};

use super::command::{CommandFactory, ShellCommand};
use super::error::CommandError;

/// [`ShellCommand`] backed by [`std::process::Command`].
pub struct ExecShellCommand {
    program: String,
    command: Command,
}

impl ExecShellCommand {
    #[must_use]
    pub fn new(program: &str, args: &[&str]) -> Self {
        let mut command = Command::new(program);
        command.args(args);
        Self {
            program: program.to_string(),
            command,
        }
    }

    fn run(&mut self, stdout: Stdio) -> Result<Output, CommandError> {
        log::debug!(
            "running {} {:?} in {}",
            self.program,
            self.command.get_args().collect::<Vec<_>>(),
            self.command
                .get_current_dir()
                .map_or_else(|| ".".to_string(), |d| d.display().to_string())
        );
        let output = self
            .command
            .stdout(stdout)
            .stderr(Stdio::piped())
            .output()
            .map_err(|source| CommandError::Launch {
                program: self.program.clone(),
                source,
            })?;
        if !output.status.success() {
            return Err(CommandError::Status {
                program: self.program.clone(),
                status: output.status,
                stderr: String::from_utf8_lossy(&output.stderr).trim().to_string(),
            });
        }
        Ok(output)
    }
}

impl ShellCommand for ExecShellCommand {
    fn set_dir(&mut self, dir: &Path) {
        self.command.current_dir(dir);
    }

    fn output(&mut self) -> Result<Vec<u8>, CommandError> {
        self.run(Stdio::piped()).map(|out| out.stdout)
    }

    fn wait(&mut self) -> Result<(), CommandError> {
        self.run(Stdio::null()).map(|_| ())
    }
}

/// Default factory: every handle spawns a real OS process.
#[derive(Debug, Default, Clone, Copy)]
pub struct ExecCommandFactory;

impl CommandFactory for ExecCommandFactory {
    fn command(&self, program: &str, args: &[&str]) -> Box<dyn ShellCommand> {
        Box::new(ExecShellCommand::new(program, args))
    }
}
