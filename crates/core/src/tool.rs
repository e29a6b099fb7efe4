// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Running a named tool: resolve its executable, start it, check its exit code.

use std::collections::BTreeMap;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::arguments::ProcessArguments;
use crate::context::Context;
use crate::error::ToolError;
use crate::process::ProcessSettings;

/// Settings every tool wrapper accepts.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ToolSettings {
    /// Explicit executable, bypassing the locator.
    pub tool_path: Option<PathBuf>,
    /// Working directory of the tool process.
    pub working_directory: Option<PathBuf>,
    /// Extra environment variables for the tool process.
    pub environment: BTreeMap<String, String>,
}

/// Access to the shared [`ToolSettings`] of a wrapper's settings type.
pub trait HasToolSettings {
    fn tool_settings(&self) -> &ToolSettings;
}

impl HasToolSettings for ToolSettings {
    fn tool_settings(&self) -> &ToolSettings {
        self
    }
}

/// A named external tool with its candidate executable names.
#[derive(Debug, Clone)]
pub struct ToolRunner {
    name: String,
    executables: Vec<String>,
}

impl ToolRunner {
    pub fn new<I, S>(name: impl Into<String>, executables: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self { name: name.into(), executables: executables.into_iter().map(Into::into).collect() }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Explicit `tool_path` wins; otherwise each executable name is tried in order.
    pub fn resolve_path(
        &self,
        context: &dyn Context,
        settings: &ToolSettings,
    ) -> Result<PathBuf, ToolError> {
        if let Some(ref path) = settings.tool_path {
            return Ok(context.environment().make_absolute(path));
        }
        self.executables
            .iter()
            .find_map(|exe| context.tools().resolve(exe))
            .ok_or_else(|| ToolError::not_found(&self.name))
    }

    /// Run the tool and wait for it. A non-zero exit is an error.
    pub fn run(
        &self,
        context: &dyn Context,
        settings: &ToolSettings,
        arguments: ProcessArguments,
    ) -> Result<(), ToolError> {
        let path = self.resolve_path(context, settings)?;
        self.run_at(context, &path, settings, arguments)
    }

    /// Run an already resolved executable.
    pub fn run_at(
        &self,
        context: &dyn Context,
        path: &std::path::Path,
        settings: &ToolSettings,
        arguments: ProcessArguments,
    ) -> Result<(), ToolError> {
        let mut process_settings = ProcessSettings::new().with_arguments(arguments);
        process_settings.working_directory = Some(match settings.working_directory {
            Some(ref dir) => context.environment().make_absolute(dir),
            None => context.environment().working_directory().to_path_buf(),
        });
        process_settings.environment = settings.environment.clone();

        let mut process = context.process_runner().start(path, &process_settings)?;
        let exit_code = process.wait_for_exit()?;
        if exit_code != 0 {
            return Err(ToolError::ExitCode { tool: self.name.clone(), exit_code });
        }
        Ok(())
    }
}

#[cfg(test)]
#[path = "tool_tests.rs"]
mod tests;
