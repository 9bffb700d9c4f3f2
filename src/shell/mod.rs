mod binding;
mod command;
mod error;
mod exec;
mod mock;

pub use binding::{FactoryGuard, active_factory, replace_factory, set_active_factory};
pub use command::{CommandFactory, ShellCommand};
pub use error::CommandError;
pub use exec::{ExecCommandFactory, ExecShellCommand};
pub use mock::{MockCommandFactory, MockShellCommand, RecordedCall};
