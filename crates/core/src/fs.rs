// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! File system seam exposed to actions.

use std::path::Path;

use crate::environment::Environment;

pub trait FileSystem: Send + Sync {
    fn exists(&self, path: &Path) -> bool;
    fn read_to_string(&self, path: &Path) -> std::io::Result<String>;
    fn write(&self, path: &Path, contents: &[u8]) -> std::io::Result<()>;
}

/// `std::fs` with relative paths resolved against the environment.
#[derive(Debug, Clone)]
pub struct LocalFileSystem {
    environment: Environment,
}

impl LocalFileSystem {
    pub fn new(environment: Environment) -> Self {
        Self { environment }
    }
}

impl FileSystem for LocalFileSystem {
    fn exists(&self, path: &Path) -> bool {
        self.environment.make_absolute(path).exists()
    }

    fn read_to_string(&self, path: &Path) -> std::io::Result<String> {
        std::fs::read_to_string(self.environment.make_absolute(path))
    }

    fn write(&self, path: &Path, contents: &[u8]) -> std::io::Result<()> {
        let path = self.environment.make_absolute(path);
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(path, contents)
    }
}

#[cfg(test)]
#[path = "fs_tests.rs"]
mod tests;
