// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Config file loading.
//!
//! ```toml
//! [cover]
//! tool_path = "/opt/dotCover/dotCover"
//! filters = ["+:MyProject", "-:MyProject.Tests"]
//! disable_default_filters = true
//! ```
//!
//! Lookup order: `--config`, `COVR_CONFIG`, `./covr.toml`, then the user
//! config dir. A missing implicit file is not an error; a missing explicit
//! one is.

use std::path::{Path, PathBuf};

use covr_dotcover::CoverSettings;
use serde::Deserialize;

use crate::env;

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read config {}: {source}", path.display())]
    Read { path: PathBuf, source: std::io::Error },

    #[error("invalid config {}: {source}", path.display())]
    Parse { path: PathBuf, source: toml::de::Error },
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    pub cover: CoverSettings,
}

impl Config {
    pub fn parse(path: &Path, text: &str) -> Result<Self, ConfigError> {
        toml::from_str(text).map_err(|source| ConfigError::Parse { path: path.to_path_buf(), source })
    }

    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let text = std::fs::read_to_string(path)
            .map_err(|source| ConfigError::Read { path: path.to_path_buf(), source })?;
        Self::parse(path, &text)
    }

    /// Load the first config found, or defaults when there is none.
    pub fn discover(explicit: Option<&Path>, cwd: &Path) -> Result<Self, ConfigError> {
        if let Some(path) = explicit.map(Path::to_path_buf).or_else(env::config_path) {
            return Self::load(&path);
        }

        let implicit = [Some(cwd.join(env::CONFIG_FILE_NAME)), env::user_config_path()];
        for path in implicit.into_iter().flatten() {
            if path.is_file() {
                tracing::debug!(path = %path.display(), "loading config");
                return Self::load(&path);
            }
        }
        Ok(Self::default())
    }
}

#[cfg(test)]
#[path = "config_tests.rs"]
mod tests;
