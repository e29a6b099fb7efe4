// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Working environment: the reference point relative paths are resolved against.

use std::collections::BTreeMap;
use std::path::{Component, Path, PathBuf};

/// Snapshot of the working directory and environment variables a context runs in.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Environment {
    working_directory: PathBuf,
    variables: BTreeMap<String, String>,
}

impl Environment {
    /// Create an environment rooted at `working_directory` with no variables.
    ///
    /// A relative directory is kept as given; callers in production should use
    /// [`Environment::from_process`].
    pub fn new(working_directory: impl Into<PathBuf>) -> Self {
        Self { working_directory: normalize(working_directory.into()), variables: BTreeMap::new() }
    }

    /// Capture the current process's working directory and variables.
    pub fn from_process() -> std::io::Result<Self> {
        let cwd = std::env::current_dir()?;
        Ok(Self { working_directory: normalize(cwd), variables: std::env::vars().collect() })
    }

    pub fn with_variable(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.variables.insert(name.into(), value.into());
        self
    }

    pub fn working_directory(&self) -> &Path {
        &self.working_directory
    }

    pub fn variable(&self, name: &str) -> Option<&str> {
        self.variables.get(name).map(String::as_str)
    }

    pub fn variables(&self) -> &BTreeMap<String, String> {
        &self.variables
    }

    /// Resolve `path` against the working directory.
    ///
    /// Absolute paths are only normalized. Never touches the file system.
    pub fn make_absolute(&self, path: impl AsRef<Path>) -> PathBuf {
        let path = path.as_ref();
        if path.is_absolute() {
            normalize(path.to_path_buf())
        } else {
            normalize(self.working_directory.join(path))
        }
    }
}

/// Lexically collapse `.` and `..` segments.
///
/// `..` never climbs above a root or prefix; leading `..` segments of a
/// relative path are preserved.
pub fn normalize(path: PathBuf) -> PathBuf {
    let mut out = PathBuf::new();
    for component in path.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => match out.components().next_back() {
                Some(Component::Normal(_)) => {
                    out.pop();
                }
                Some(Component::RootDir) | Some(Component::Prefix(_)) => {}
                _ => out.push(".."),
            },
            other => out.push(other.as_os_str()),
        }
    }
    out
}

#[cfg(test)]
#[path = "environment_tests.rs"]
mod tests;
