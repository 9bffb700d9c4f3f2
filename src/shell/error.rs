use std::process::ExitStatus;

#[derive(Debug)]
pub enum CommandError {
    Launch {
        program: String,
        source: std::io::Error,
    },
    Status {
        program: String,
        status: ExitStatus,
        stderr: String,
    },
    /// Produced by test doubles in place of a real process failure.
    Injected {
        message: String,
    },
}

impl std::fmt::Display for CommandError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Launch { program, source } => {
                write!(f, "failed to launch {program}: {source}")
            }
            Self::Status {
                program,
                status,
                stderr,
            } => {
                if stderr.is_empty() {
                    write!(f, "{program} failed with status {status}")
                } else {
                    write!(f, "{program} failed with status {status}: {stderr}")
                }
            }
            Self::Injected { message } => write!(f, "{message}"),
        }
    }
}

impl std::error::Error for CommandError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Launch { source, .. } => Some(source),
            Self::Status { .. } | Self::Injected { .. } => None,
        }
    }
}
