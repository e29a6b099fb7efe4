// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Process settings and the process-runner seam.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use std::process::Child;
use std::time::Instant;

use crate::arguments::ProcessArguments;
use crate::environment::Environment;
use crate::error::ToolError;

/// Everything needed to start a process besides its executable path.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProcessSettings {
    pub arguments: Option<ProcessArguments>,
    pub working_directory: Option<PathBuf>,
    pub environment: BTreeMap<String, String>,
    /// Suppress the informational launch log line.
    pub silent: bool,
}

impl ProcessSettings {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_arguments(mut self, arguments: impl Into<ProcessArguments>) -> Self {
        self.arguments = Some(arguments.into());
        self
    }

    pub fn with_working_directory(mut self, dir: impl Into<PathBuf>) -> Self {
        self.working_directory = Some(dir.into());
        self
    }

    pub fn with_env(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.environment.insert(key.into(), value.into());
        self
    }

    pub fn silent(mut self) -> Self {
        self.silent = true;
        self
    }

    /// The rendered argument string, if any arguments were set.
    pub fn rendered_arguments(&self) -> Option<String> {
        self.arguments.as_ref().map(ProcessArguments::render)
    }
}

/// A started process.
pub trait Process: Send {
    /// Block until the process exits and return its exit code.
    fn wait_for_exit(&mut self) -> Result<i32, ToolError>;
}

/// Starts processes.
pub trait ProcessRunner: Send + Sync {
    fn start(&self, path: &Path, settings: &ProcessSettings) -> Result<Box<dyn Process>, ToolError>;
}

/// Runner backed by `std::process::Command`.
#[derive(Debug, Clone)]
pub struct SystemProcessRunner {
    environment: Environment,
}

impl SystemProcessRunner {
    pub fn new(environment: Environment) -> Self {
        Self { environment }
    }
}

impl ProcessRunner for SystemProcessRunner {
    fn start(&self, path: &Path, settings: &ProcessSettings) -> Result<Box<dyn Process>, ToolError> {
        let mut command = std::process::Command::new(path);

        if let Some(ref arguments) = settings.arguments {
            #[cfg(windows)]
            {
                use std::os::windows::process::CommandExt;
                for token in arguments.to_raw() {
                    command.raw_arg(token);
                }
            }
            #[cfg(not(windows))]
            command.args(arguments.to_argv());
        }

        let cwd = match settings.working_directory {
            Some(ref dir) => self.environment.make_absolute(dir),
            None => self.environment.working_directory().to_path_buf(),
        };
        command.current_dir(&cwd);
        command.envs(&settings.environment);

        let rendered = settings.arguments.as_ref().map(|a| a.render_safe()).unwrap_or_default();
        if settings.silent {
            tracing::debug!(path = %path.display(), args = %rendered, "starting process");
        } else {
            tracing::info!(path = %path.display(), args = %rendered, "starting process");
        }

        let child = command
            .spawn()
            .map_err(|source| ToolError::Spawn { path: path.to_path_buf(), source })?;

        Ok(Box::new(SystemProcess { child, path: path.to_path_buf(), started: Instant::now() }))
    }
}

struct SystemProcess {
    child: Child,
    path: PathBuf,
    started: Instant,
}

impl Process for SystemProcess {
    fn wait_for_exit(&mut self) -> Result<i32, ToolError> {
        let status = self.child.wait()?;
        // Signal-terminated children have no code.
        let exit_code = status.code().unwrap_or(-1);
        tracing::debug!(
            path = %self.path.display(),
            exit_code,
            duration_ms = self.started.elapsed().as_millis() as u64,
            "process exited"
        );
        Ok(exit_code)
    }
}

#[cfg(any(test, feature = "test-support"))]
#[cfg_attr(coverage_nightly, coverage(off))]
mod fake {
    use super::{Process, ProcessRunner, ProcessSettings};
    use crate::error::ToolError;
    use parking_lot::Mutex;
    use std::path::{Path, PathBuf};
    use std::sync::Arc;

    /// Recorded process start
    #[derive(Debug, Clone)]
    pub struct ProcessCall {
        pub path: PathBuf,
        pub settings: ProcessSettings,
    }

    struct FakeRunnerState {
        calls: Vec<ProcessCall>,
        exit_code: i32,
    }

    /// Fake process runner for testing
    #[derive(Clone)]
    pub struct FakeProcessRunner {
        inner: Arc<Mutex<FakeRunnerState>>,
    }

    impl Default for FakeProcessRunner {
        fn default() -> Self {
            Self { inner: Arc::new(Mutex::new(FakeRunnerState { calls: Vec::new(), exit_code: 0 })) }
        }
    }

    impl FakeProcessRunner {
        pub fn new() -> Self {
            Self::default()
        }

        /// Exit code every subsequently started process reports
        pub fn set_exit_code(&self, exit_code: i32) {
            self.inner.lock().exit_code = exit_code;
        }

        /// Get all recorded process starts
        pub fn calls(&self) -> Vec<ProcessCall> {
            self.inner.lock().calls.clone()
        }
    }

    struct FakeProcess {
        exit_code: i32,
    }

    impl Process for FakeProcess {
        fn wait_for_exit(&mut self) -> Result<i32, ToolError> {
            Ok(self.exit_code)
        }
    }

    impl ProcessRunner for FakeProcessRunner {
        fn start(
            &self,
            path: &Path,
            settings: &ProcessSettings,
        ) -> Result<Box<dyn Process>, ToolError> {
            let mut inner = self.inner.lock();
            inner.calls.push(ProcessCall { path: path.to_path_buf(), settings: settings.clone() });
            Ok(Box::new(FakeProcess { exit_code: inner.exit_code }))
        }
    }
}

#[cfg(any(test, feature = "test-support"))]
pub use fake::{FakeProcessRunner, ProcessCall};

#[cfg(test)]
#[path = "process_tests.rs"]
mod tests;
