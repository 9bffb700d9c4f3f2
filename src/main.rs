#![forbid(unsafe_code)]
#![deny(warnings, clippy::all, clippy::pedantic)]

use std::io::Write as _;
use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, ValueEnum};
use whichbranch::{BranchReport, ConfigError, Settings, report_current_branch, shell::ExecCommandFactory};

#[derive(Copy, Clone, Debug, Eq, PartialEq, ValueEnum)]
enum OutputFormat { Tab, Json }

#[derive(Parser, Debug)]
#[command(version, about = "Report the current git branch of a directory.")]
struct Args {
    /// Directory to run in (default: mydir)
    #[arg(long)]
    dir: Option<PathBuf>,

    /// Program to invoke instead of git
    #[arg(long)]
    program: Option<String>,

    /// TOML file with program, args and dir
    #[arg(long)]
    config: Option<PathBuf>,

    /// Print debug info while running
    #[arg(long)]
    debug: bool,

    /// Output format: tab (default) or json
    #[arg(long, value_enum, default_value_t = OutputFormat::Tab)]
    output: OutputFormat,
}

fn init_logging(debug: bool) {
    let level = if debug {
        log::LevelFilter::Debug
    } else {
        log::LevelFilter::Info
    };
    env_logger::Builder::new()
        .format(|buf, record| {
            writeln!(
                buf,
                "[{}] {}",
                record.level().as_str().to_lowercase(),
                record.args()
            )
        })
        .filter(None, level)
        .init();
}

fn resolve_settings(args: &Args) -> Result<Settings, ConfigError> {
    let mut settings = match &args.config {
        Some(path) => Settings::load(path)?,
        None => Settings::default(),
    };
    if let Some(dir) = &args.dir {
        settings.dir.clone_from(dir);
    }
    if let Some(program) = &args.program {
        settings.program.clone_from(program);
    }
    settings.validate()?;
    Ok(settings)
}

fn main() -> ExitCode {
    let args = Args::parse();
    init_logging(args.debug);

    let settings = match resolve_settings(&args) {
        Ok(settings) => settings,
        Err(err) => {
            log::error!("{err}");
            return ExitCode::FAILURE;
        }
    };
    log::debug!(
        "program={} args={:?} dir={}",
        settings.program,
        settings.args,
        settings.dir.display()
    );

    let report = report_current_branch(&ExecCommandFactory, &settings);
    match args.output {
        OutputFormat::Tab => println!("{report}"),
        OutputFormat::Json => match report.to_json() {
            Ok(out) => println!("{out}"),
            Err(err) => {
                log::error!("failed to serialize report: {err}");
                return ExitCode::FAILURE;
            }
        },
    }

    match report {
        BranchReport::Branch { .. } => ExitCode::SUCCESS,
        BranchReport::Failed => ExitCode::FAILURE,
    }
}
