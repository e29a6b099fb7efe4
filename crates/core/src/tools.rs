// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Locating tool executables on disk.

use std::collections::HashMap;
use std::path::{Path, PathBuf};

use parking_lot::Mutex;

use crate::environment::Environment;

/// Finds the executable for a tool name.
pub trait ToolLocator: Send + Sync {
    fn resolve(&self, tool: &str) -> Option<PathBuf>;
}

/// Looks in explicitly registered paths first, then in every `PATH` directory.
#[derive(Debug)]
pub struct PathToolLocator {
    environment: Environment,
    registered: Mutex<HashMap<String, PathBuf>>,
}

impl PathToolLocator {
    pub fn new(environment: Environment) -> Self {
        Self { environment, registered: Mutex::new(HashMap::new()) }
    }

    /// Register an explicit location for the file name of `path`.
    pub fn register(&self, path: impl AsRef<Path>) {
        let path = self.environment.make_absolute(path);
        if let Some(name) = path.file_name().and_then(|n| n.to_str()) {
            self.registered.lock().insert(name.to_string(), path);
        }
    }

    fn candidates(tool: &str) -> Vec<String> {
        let mut names = vec![tool.to_string()];
        if cfg!(windows) && Path::new(tool).extension().is_none() {
            names.push(format!("{}.exe", tool));
        }
        names
    }
}

impl ToolLocator for PathToolLocator {
    fn resolve(&self, tool: &str) -> Option<PathBuf> {
        if let Some(path) = self.registered.lock().get(tool) {
            if path.is_file() {
                return Some(path.clone());
            }
        }

        let search = self.environment.variable("PATH")?;
        let names = Self::candidates(tool);
        for dir in std::env::split_paths(search) {
            let dir = self.environment.make_absolute(dir);
            for name in &names {
                let candidate = dir.join(name);
                if candidate.is_file() {
                    tracing::debug!(tool, path = %candidate.display(), "resolved tool");
                    return Some(candidate);
                }
            }
        }
        None
    }
}

#[cfg(any(test, feature = "test-support"))]
#[cfg_attr(coverage_nightly, coverage(off))]
mod fake {
    use super::ToolLocator;
    use parking_lot::Mutex;
    use std::collections::HashMap;
    use std::path::PathBuf;
    use std::sync::Arc;

    /// Fake tool locator for testing
    #[derive(Clone, Default)]
    pub struct FakeToolLocator {
        tools: Arc<Mutex<HashMap<String, PathBuf>>>,
        lookups: Arc<Mutex<Vec<String>>>,
    }

    impl FakeToolLocator {
        pub fn new() -> Self {
            Self::default()
        }

        pub fn with_tool(self, name: impl Into<String>, path: impl Into<PathBuf>) -> Self {
            self.tools.lock().insert(name.into(), path.into());
            self
        }

        /// Names looked up so far, in order
        pub fn lookups(&self) -> Vec<String> {
            self.lookups.lock().clone()
        }
    }

    impl ToolLocator for FakeToolLocator {
        fn resolve(&self, tool: &str) -> Option<PathBuf> {
            self.lookups.lock().push(tool.to_string());
            self.tools.lock().get(tool).cloned()
        }
    }
}

#[cfg(any(test, feature = "test-support"))]
pub use fake::FakeToolLocator;

#[cfg(test)]
#[path = "tools_tests.rs"]
mod tests;
