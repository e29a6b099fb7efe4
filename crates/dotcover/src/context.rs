// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Intercepting context.
//!
//! Wraps a real [`Context`] and forwards every capability except process
//! launches. A launch is recorded instead of performed, so the coverer can
//! learn what the action *would* have run:
//!
//! ```text
//! action(&proxy) ──start_process(path, settings)──► RecordingRunner
//!                                                    └─ first call stored, nothing spawned
//! ```
//!
//! The first launch wins. Later launches are accepted and counted but do not
//! replace the recorded invocation.

use std::path::{Path, PathBuf};

use covr_core::{
    Context, Environment, FileSystem, Process, ProcessRunner, ProcessSettings, ToolError,
    ToolLocator,
};
use parking_lot::Mutex;

/// The intercepted launch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordedInvocation {
    pub target_path: PathBuf,
    pub target_settings: ProcessSettings,
}

impl RecordedInvocation {
    /// The rendered target argument string, if any.
    pub fn rendered_arguments(&self) -> Option<String> {
        self.target_settings.rendered_arguments()
    }
}

#[derive(Default)]
struct Recording {
    first: Option<RecordedInvocation>,
    launches: usize,
}

/// Process runner that records instead of spawning.
#[derive(Default)]
struct RecordingRunner {
    state: Mutex<Recording>,
}

impl ProcessRunner for RecordingRunner {
    fn start(&self, path: &Path, settings: &ProcessSettings) -> Result<Box<dyn Process>, ToolError> {
        let mut state = self.state.lock();
        state.launches += 1;
        if state.first.is_none() {
            tracing::debug!(path = %path.display(), "intercepted process launch");
            state.first = Some(RecordedInvocation {
                target_path: path.to_path_buf(),
                target_settings: settings.clone(),
            });
        } else {
            tracing::warn!(
                path = %path.display(),
                launches = state.launches,
                "ignoring additional process launch; only the first is covered"
            );
        }
        Ok(Box::new(InterceptedProcess))
    }
}

/// Handle returned for a recorded launch: already exited, successfully.
struct InterceptedProcess;

impl Process for InterceptedProcess {
    fn wait_for_exit(&mut self) -> Result<i32, ToolError> {
        Ok(0)
    }
}

/// [`Context`] decorator that records the first process launch.
pub struct DotCoverContext<'a> {
    inner: &'a dyn Context,
    runner: RecordingRunner,
}

impl<'a> DotCoverContext<'a> {
    pub fn new(inner: &'a dyn Context) -> Self {
        Self { inner, runner: RecordingRunner::default() }
    }

    /// Path of the first launched executable; `None` until a launch happens.
    pub fn file_path(&self) -> Option<PathBuf> {
        self.runner.state.lock().first.as_ref().map(|r| r.target_path.clone())
    }

    /// Settings of the first launch; `None` until a launch happens.
    pub fn settings(&self) -> Option<ProcessSettings> {
        self.runner.state.lock().first.as_ref().map(|r| r.target_settings.clone())
    }

    pub fn recorded(&self) -> Option<RecordedInvocation> {
        self.runner.state.lock().first.clone()
    }

    /// Number of launch attempts, including ignored ones.
    pub fn launch_count(&self) -> usize {
        self.runner.state.lock().launches
    }

    /// Consume the proxy, yielding the first recorded launch.
    pub fn into_recorded(self) -> Option<RecordedInvocation> {
        self.runner.state.into_inner().first
    }
}

impl Context for DotCoverContext<'_> {
    fn environment(&self) -> &Environment {
        self.inner.environment()
    }

    fn file_system(&self) -> &dyn FileSystem {
        self.inner.file_system()
    }

    fn tools(&self) -> &dyn ToolLocator {
        self.inner.tools()
    }

    fn process_runner(&self) -> &dyn ProcessRunner {
        &self.runner
    }
}

#[cfg(test)]
#[path = "context_tests.rs"]
mod tests;
