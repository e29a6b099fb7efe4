// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Shared fixtures for coverer tests.

use std::sync::Arc;

use covr_core::{Context, Environment, FakeProcessRunner, FakeToolLocator, LocalContext, LocalFileSystem};

/// A context rooted in a temp dir, with a fake runner and a locator that knows dotCover.
pub(crate) struct TestContext {
    pub dir: tempfile::TempDir,
    pub runner: FakeProcessRunner,
    pub locator: FakeToolLocator,
    pub context: LocalContext,
}

impl TestContext {
    pub fn new() -> Self {
        Self::with_locator(FakeToolLocator::new().with_tool("dotCover", "/opt/dotCover/dotCover"))
    }

    pub fn with_locator(locator: FakeToolLocator) -> Self {
        let dir = tempfile::tempdir().unwrap();
        let env = Environment::new(dir.path());
        let runner = FakeProcessRunner::new();
        let context = LocalContext::new(
            env.clone(),
            Arc::new(LocalFileSystem::new(env)),
            Arc::new(locator.clone()),
            Arc::new(runner.clone()),
        );
        Self { dir, runner, locator, context }
    }

    /// Working directory the context resolves against.
    pub fn root(&self) -> std::path::PathBuf {
        self.context.environment().working_directory().to_path_buf()
    }
}
