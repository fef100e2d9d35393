//! Error types shared by the analyzer gateway and the runner.

use std::path::PathBuf;
use std::time::Duration;
use thiserror::Error;

/// Why the external analyzer did not produce a result stream.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AnalyzerFailure {
    /// The analyzer ran but exited abnormally; `stderr` is its diagnostic text.
    #[error("{stderr}")]
    Exited {
        /// Exit code, or `None` when the process was killed by a signal
        status: Option<i32>,
        stderr: String,
    },

    #[error("failed to start analyzer '{program}': {message}")]
    Spawn { program: String, message: String },

    #[error("analyzer did not finish within {after:?}")]
    TimedOut { after: Duration },

    #[error("analyzer I/O error: {0}")]
    Io(String),
}

impl AnalyzerFailure {
    /// Diagnostic text as reported to the user.
    pub fn diagnostic(&self) -> String {
        match self {
            AnalyzerFailure::Exited { stderr, .. } => stderr.trim_end().to_string(),
            other => other.to_string(),
        }
    }
}

/// Top-level error for one analysis run.
#[derive(Error, Debug)]
pub enum RunError {
    #[error("could not open file '{}': {message}", .path.display())]
    Source { path: PathBuf, message: String },

    #[error(transparent)]
    Analyzer(#[from] AnalyzerFailure),

    #[error("invalid configuration: {0}")]
    Config(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
