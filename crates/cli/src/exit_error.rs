// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Custom error type that carries a process exit code.
//!
//! Commands return `ExitError` instead of calling `std::process::exit()`
//! directly, allowing `main()` to handle process termination.

use std::fmt;

use covr_dotcover::CoverError;

use crate::config::ConfigError;

/// Bad invocation: missing inputs, or an action that launched nothing.
pub const EXIT_USAGE: i32 = 2;
/// dotCover could not be located.
pub const EXIT_TOOL_NOT_FOUND: i32 = 3;
pub const EXIT_FAILURE: i32 = 1;

#[derive(Debug)]
pub struct ExitError {
    pub code: i32,
    pub message: String,
}

impl ExitError {
    pub fn new(code: i32, message: impl Into<String>) -> Self {
        Self { code, message: message.into() }
    }
}

impl fmt::Display for ExitError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl std::error::Error for ExitError {}

impl From<CoverError> for ExitError {
    fn from(err: CoverError) -> Self {
        let code = match &err {
            CoverError::InvalidArgument(_) | CoverError::NoToolStarted => EXIT_USAGE,
            CoverError::ToolNotFound { .. } => EXIT_TOOL_NOT_FOUND,
            // Signal deaths report -1; anything outside 1..=255 is not a usable status.
            CoverError::ToolExecutionFailed { exit_code, .. } if (1..=255).contains(exit_code) => {
                *exit_code
            }
            _ => EXIT_FAILURE,
        };
        Self::new(code, err.to_string())
    }
}

impl From<ConfigError> for ExitError {
    fn from(err: ConfigError) -> Self {
        Self::new(EXIT_USAGE, err.to_string())
    }
}

#[cfg(test)]
#[path = "exit_error_tests.rs"]
mod tests;
