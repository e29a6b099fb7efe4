// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Execution context handed to actions.

use std::path::Path;
use std::sync::Arc;

use crate::environment::Environment;
use crate::error::ToolError;
use crate::fs::{FileSystem, LocalFileSystem};
use crate::process::{Process, ProcessRunner, ProcessSettings, SystemProcessRunner};
use crate::tools::{PathToolLocator, ToolLocator};

/// Capability surface available to an action.
///
/// `start_process` is the only way an action runs an external executable, so
/// wrappers can observe every launch by substituting the context.
pub trait Context {
    fn environment(&self) -> &Environment;
    fn file_system(&self) -> &dyn FileSystem;
    fn tools(&self) -> &dyn ToolLocator;
    fn process_runner(&self) -> &dyn ProcessRunner;

    fn start_process(
        &self,
        path: &Path,
        settings: ProcessSettings,
    ) -> Result<Box<dyn Process>, ToolError> {
        let path = self.environment().make_absolute(path);
        self.process_runner().start(&path, &settings)
    }
}

/// Context backed by the local machine (or injected collaborators in tests).
#[derive(Clone)]
pub struct LocalContext {
    environment: Environment,
    file_system: Arc<dyn FileSystem>,
    tools: Arc<dyn ToolLocator>,
    process_runner: Arc<dyn ProcessRunner>,
}

impl LocalContext {
    pub fn new(
        environment: Environment,
        file_system: Arc<dyn FileSystem>,
        tools: Arc<dyn ToolLocator>,
        process_runner: Arc<dyn ProcessRunner>,
    ) -> Self {
        Self { environment, file_system, tools, process_runner }
    }

    /// Real file system, `PATH` lookup, and `std::process` spawning.
    pub fn system(environment: Environment) -> Self {
        Self::with_locator(environment.clone(), Arc::new(PathToolLocator::new(environment)))
    }

    pub fn with_locator(environment: Environment, tools: Arc<dyn ToolLocator>) -> Self {
        Self {
            file_system: Arc::new(LocalFileSystem::new(environment.clone())),
            process_runner: Arc::new(SystemProcessRunner::new(environment.clone())),
            tools,
            environment,
        }
    }
}

impl Context for LocalContext {
    fn environment(&self) -> &Environment {
        &self.environment
    }

    fn file_system(&self) -> &dyn FileSystem {
        self.file_system.as_ref()
    }

    fn tools(&self) -> &dyn ToolLocator {
        self.tools.as_ref()
    }

    fn process_runner(&self) -> &dyn ProcessRunner {
        self.process_runner.as_ref()
    }
}

#[cfg(test)]
#[path = "context_tests.rs"]
mod tests;
