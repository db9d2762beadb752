use super::config::ConfigError;
use std::path::PathBuf;
use std::process::ExitStatus;
use thiserror::Error;

/// Errors that abort a batch before any task runs.
#[derive(Debug, Error)]
pub enum DispatchError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error("Failed to list task directories in '{path}': {source}", path = path.display())]
    Enumerate {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Errors confined to a single task. The batch always continues past them.
#[derive(Debug, Error)]
pub enum TaskError {
    #[error("Failed to create output directory '{path}': {source}", path = path.display())]
    CreateOutputDir {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to launch '{program}': {source}")]
    Launch {
        program: String,
        #[source]
        source: std::io::Error,
    },

    #[error("exit code {0}")]
    ExitCode(i32),

    #[error("terminated by signal {0}")]
    Signal(i32),

    #[error("terminated without an exit code")]
    Terminated,
}

impl TaskError {
    /// Maps a finished child's status to an error, or `None` for a clean exit.
    pub fn from_status(status: ExitStatus) -> Option<Self> {
        if status.success() {
            return None;
        }
        if let Some(code) = status.code() {
            return Some(Self::ExitCode(code));
        }
        #[cfg(unix)]
        {
            use std::os::unix::process::ExitStatusExt;
            if let Some(signal) = status.signal() {
                return Some(Self::Signal(signal));
            }
        }
        Some(Self::Terminated)
    }
}
