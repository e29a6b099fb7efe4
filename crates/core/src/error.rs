// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Errors raised while locating, starting, or waiting on external tools.

use std::path::PathBuf;

/// Errors from the process and tool collaborators.
#[derive(Debug, thiserror::Error)]
pub enum ToolError {
    /// No executable could be found for the tool.
    #[error("{tool}: could not locate executable")]
    NotFound { tool: String },

    /// The tool ran to completion but reported failure.
    #[error("{tool}: process returned an error (exit code {exit_code})")]
    ExitCode { tool: String, exit_code: i32 },

    /// The executable could not be spawned.
    #[error("failed to start `{}`: {source}", path.display())]
    Spawn {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl ToolError {
    pub fn not_found(tool: impl Into<String>) -> Self {
        ToolError::NotFound { tool: tool.into() }
    }

    /// Exit code carried by the error, if the tool actually ran.
    pub fn exit_code(&self) -> Option<i32> {
        match self {
            ToolError::ExitCode { exit_code, .. } => Some(*exit_code),
            _ => None,
        }
    }
}

#[cfg(test)]
#[path = "error_tests.rs"]
mod tests;
