// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Shared helpers for driving the `covr` binary.

use std::path::{Path, PathBuf};

/// `covr` with no project directory.
pub fn cli() -> Cli {
    Cli::new(None)
}

pub struct Cli {
    cmd: assert_cmd::Command,
}

impl Cli {
    fn new(dir: Option<&Path>) -> Self {
        let mut cmd = assert_cmd::Command::cargo_bin("covr").expect("covr binary");
        for var in ["COVR_CONFIG", "COVR_DOTCOVER_PATH", "COVR_LOG"] {
            cmd.env_remove(var);
        }
        if let Some(dir) = dir {
            // Keep the user config dir out of the run.
            cmd.current_dir(dir).env("HOME", dir).env("XDG_CONFIG_HOME", dir.join(".config"));
        }
        Self { cmd }
    }

    pub fn args(mut self, args: &[&str]) -> Self {
        self.cmd.args(args);
        self
    }

    pub fn env(mut self, key: &str, value: impl AsRef<std::ffi::OsStr>) -> Self {
        self.cmd.env(key, value);
        self
    }

    pub fn passes(self) -> Outcome {
        self.exits(0)
    }

    pub fn exits(mut self, code: i32) -> Outcome {
        let output = self.cmd.output().expect("run covr");
        let outcome = Outcome {
            stdout: String::from_utf8_lossy(&output.stdout).into_owned(),
            stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
        };
        assert_eq!(
            output.status.code(),
            Some(code),
            "unexpected exit status\nstdout:\n{}\nstderr:\n{}",
            outcome.stdout,
            outcome.stderr
        );
        outcome
    }
}

pub struct Outcome {
    stdout: String,
    stderr: String,
}

impl Outcome {
    pub fn stdout(&self) -> &str {
        &self.stdout
    }

    pub fn stdout_has(self, needle: &str) -> Self {
        assert!(self.stdout.contains(needle), "stdout missing {needle:?}:\n{}", self.stdout);
        self
    }

    pub fn stderr_has(self, needle: &str) -> Self {
        assert!(self.stderr.contains(needle), "stderr missing {needle:?}:\n{}", self.stderr);
        self
    }
}

/// A scratch project directory.
pub struct Project {
    dir: tempfile::TempDir,
}

impl Project {
    pub fn empty() -> Self {
        Self { dir: tempfile::tempdir().expect("tempdir") }
    }

    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    pub fn join(&self, rel: &str) -> PathBuf {
        self.dir.path().join(rel)
    }

    pub fn file(&self, rel: &str, contents: &str) -> PathBuf {
        let path = self.join(rel);
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).expect("create parent");
        }
        std::fs::write(&path, contents).expect("write file");
        path
    }

    /// A shell script standing in for dotCover.
    #[cfg(unix)]
    pub fn script(&self, rel: &str, body: &str) -> PathBuf {
        use std::os::unix::fs::PermissionsExt;

        let path = self.file(rel, &format!("#!/bin/sh\n{body}\n"));
        std::fs::set_permissions(&path, std::fs::Permissions::from_mode(0o755))
            .expect("chmod script");
        path
    }

    /// `covr` running inside this project.
    pub fn covr(&self) -> Cli {
        Cli::new(Some(self.path()))
    }
}
