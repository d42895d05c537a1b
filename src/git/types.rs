use serde::Serialize;
use thiserror::Error;

/// Captured output of a successful subprocess.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ShellOutput {
    pub stdout: String,
    pub stderr: String,
}

/// Failure of a subprocess: diagnostic text plus exit status.
///
/// `code` is `None` when the process could not be spawned or was killed by a signal.
#[derive(Error, Debug, Clone, PartialEq, Serialize)]
#[error("{} (exit code {})", .message.trim_end(), display_code(.code))]
pub struct ShellError {
    pub message: String,
    pub code: Option<i32>,
}

impl ShellError {
    pub fn new(message: impl Into<String>, code: Option<i32>) -> Self {
        Self {
            message: message.into(),
            code,
        }
    }
}

fn display_code(code: &Option<i32>) -> String {
    match code {
        Some(code) => code.to_string(),
        None => "none".to_string(),
    }
}

pub type ShellResult = std::result::Result<ShellOutput, ShellError>;
