#![forbid(unsafe_code)]
#![deny(warnings, clippy::all, clippy::pedantic)]

mod branch;
mod config;
pub mod shell;

pub use branch::{BranchReport, print_current_branch, report_current_branch, write_current_branch};
pub use config::{ConfigError, DEFAULT_ARGS, DEFAULT_DIR, DEFAULT_PROGRAM, Settings};
