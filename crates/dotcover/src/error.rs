// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Errors from a `cover` request.

use std::path::PathBuf;

use covr_core::ToolError;

#[derive(Debug, thiserror::Error)]
pub enum CoverError {
    /// A required request input was missing or empty.
    #[error("missing required argument `{0}`")]
    InvalidArgument(&'static str),

    /// The action returned without starting a process.
    #[error("no tool was started")]
    NoToolStarted,

    #[error("{tool}: could not locate executable")]
    ToolNotFound { tool: String },

    #[error("{tool}: process returned an error (exit code {exit_code})")]
    ToolExecutionFailed { tool: String, exit_code: i32 },

    /// The coverage tool could not be spawned.
    #[error("failed to start `{}`: {source}", path.display())]
    Launch {
        path: PathBuf,
        source: std::io::Error,
    },

    /// Waiting on the coverage tool failed.
    #[error(transparent)]
    Io(std::io::Error),

    /// The action itself failed.
    #[error("action failed: {0}")]
    Action(#[source] ToolError),
}

impl From<ToolError> for CoverError {
    fn from(err: ToolError) -> Self {
        match err {
            ToolError::NotFound { tool } => CoverError::ToolNotFound { tool },
            ToolError::ExitCode { tool, exit_code } => {
                CoverError::ToolExecutionFailed { tool, exit_code }
            }
            ToolError::Spawn { path, source } => CoverError::Launch { path, source },
            ToolError::Io(source) => CoverError::Io(source),
        }
    }
}

#[cfg(test)]
#[path = "error_tests.rs"]
mod tests;
