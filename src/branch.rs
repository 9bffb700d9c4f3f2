use std::io::Write;

use serde::Serialize;

use crate::config::Settings;
use crate::shell::{CommandFactory, active_factory};

/// What a branch lookup produced.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "lowercase")]
pub enum BranchReport {
    #[serde(rename = "ok")]
    Branch { branch: String },
    Failed,
}

impl BranchReport {
    #[must_use]
    pub fn branch(&self) -> Option<&str> {
        match self {
            Self::Branch { branch } => Some(branch.as_str()),
            Self::Failed => None,
        }
    }

    /// # Errors
    /// Returns an error if serialization fails.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }
}

impl std::fmt::Display for BranchReport {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Branch { branch } => write!(f, "Git branch is '{branch}'"),
            Self::Failed => write!(f, "Git rev-parse failed"),
        }
    }
}

/// Ask the program in `settings` for the current branch, using handles from `factory`.
///
/// Any invocation failure collapses into [`BranchReport::Failed`]; the output is
/// only looked at on success.
pub fn report_current_branch(factory: &dyn CommandFactory, settings: &Settings) -> BranchReport {
    let args: Vec<&str> = settings.args.iter().map(String::as_str).collect();
    let mut cmd = factory.command(&settings.program, &args);
    cmd.set_dir(&settings.dir);
    match cmd.output() {
        Ok(out) => BranchReport::Branch {
            branch: String::from_utf8_lossy(&out).trim().to_string(),
        },
        Err(err) => {
            log::debug!("{} {} failed: {err}", settings.program, args.join(" "));
            BranchReport::Failed
        }
    }
}

/// Write the report line for the current branch to `out`.
///
/// # Errors
/// Returns an error if writing to `out` fails.
pub fn write_current_branch<W: Write>(
    factory: &dyn CommandFactory,
    settings: &Settings,
    out: &mut W,
) -> std::io::Result<BranchReport> {
    let report = report_current_branch(factory, settings);
    writeln!(out, "{report}")?;
    Ok(report)
}

/// Print the current branch of `mydir` using this thread's active factory.
pub fn print_current_branch() -> BranchReport {
    let factory = active_factory();
    let report = report_current_branch(&*factory, &Settings::default());
    println!("{report}");
    report
}
