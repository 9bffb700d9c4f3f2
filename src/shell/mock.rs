//! Test doubles for [`ShellCommand`] and [`CommandFactory`].
//!
//! [`MockShellCommand`] answers `output`/`wait` from caller-supplied closures.
//! [`MockCommandFactory`] hands out doubles with a canned response and records
//! every `(program, args)` it was asked for.

use std::cell::RefCell;
use std::path::Path;

use super::command::{CommandFactory, ShellCommand};
use super::error::CommandError;

type OutputFn = Box<dyn FnMut() -> Result<Vec<u8>, CommandError>>;
type WaitFn = Box<dyn FnMut() -> Result<(), CommandError>>;

pub struct MockShellCommand {
    output_fn: OutputFn,
    wait_fn: Option<WaitFn>,
}

impl MockShellCommand {
    #[must_use]
    pub fn new(output_fn: impl FnMut() -> Result<Vec<u8>, CommandError> + 'static) -> Self {
        Self {
            output_fn: Box::new(output_fn),
            wait_fn: None,
        }
    }

    /// Answer `wait` with `wait_fn` instead of `Ok(())`.
    #[must_use]
    pub fn with_wait(mut self, wait_fn: impl FnMut() -> Result<(), CommandError> + 'static) -> Self {
        self.wait_fn = Some(Box::new(wait_fn));
        self
    }
}

impl ShellCommand for MockShellCommand {
    fn set_dir(&mut self, _dir: &Path) {}

    fn output(&mut self) -> Result<Vec<u8>, CommandError> {
        (self.output_fn)()
    }

    fn wait(&mut self) -> Result<(), CommandError> {
        self.wait_fn.as_mut().map_or(Ok(()), |wait| wait())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordedCall {
    pub program: String,
    pub args: Vec<String>,
}

pub struct MockCommandFactory {
    output: Vec<u8>,
    error: Option<String>,
    label: String,
    calls: RefCell<Vec<RecordedCall>>,
}

impl MockCommandFactory {
    /// Every handle returns `output`, or fails with `error` when one is given,
    /// whatever program and arguments it was built for.
    ///
    /// The diagnostic label defaults to the current thread name, which the test
    /// harness sets to the running test's name.
    #[must_use]
    pub fn for_output(output: impl Into<Vec<u8>>, error: Option<String>) -> Self {
        let label = std::thread::current()
            .name()
            .unwrap_or("unnamed")
            .to_string();
        Self {
            output: output.into(),
            error,
            label,
            calls: RefCell::new(Vec::new()),
        }
    }

    #[must_use]
    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = label.into();
        self
    }

    #[must_use]
    pub fn label(&self) -> &str {
        &self.label
    }

    #[must_use]
    pub fn calls(&self) -> Vec<RecordedCall> {
        self.calls.borrow().clone()
    }

    #[must_use]
    pub fn call_count(&self) -> usize {
        self.calls.borrow().len()
    }
}

impl CommandFactory for MockCommandFactory {
    fn command(&self, program: &str, args: &[&str]) -> Box<dyn ShellCommand> {
        log::debug!(
            "command for {} called with {program} and {args:?}",
            self.label
        );
        self.calls.borrow_mut().push(RecordedCall {
            program: program.to_string(),
            args: args.iter().map(ToString::to_string).collect(),
        });

        let label = self.label.clone();
        let output = self.output.clone();
        let error = self.error.clone();
        Box::new(MockShellCommand::new(move || match &error {
            None => {
                log::debug!("output obtained for {label}");
                Ok(output.clone())
            }
            Some(message) => {
                log::debug!("failed to get output for {label}");
                Err(CommandError::Injected {
                    message: message.clone(),
                })
            }
        }))
    }
}
