// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Centralized environment variable access for the CLI.

use std::path::PathBuf;

/// Config file name looked up in the working directory and the user config dir.
pub const CONFIG_FILE_NAME: &str = "covr.toml";

/// Explicit config file from `COVR_CONFIG`.
pub fn config_path() -> Option<PathBuf> {
    std::env::var("COVR_CONFIG").ok().filter(|s| !s.is_empty()).map(PathBuf::from)
}

/// User-level config: `<config dir>/covr/config.toml`.
pub fn user_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("covr").join("config.toml"))
}

/// dotCover executable from `COVR_DOTCOVER_PATH`.
pub fn dotcover_path() -> Option<PathBuf> {
    std::env::var("COVR_DOTCOVER_PATH").ok().filter(|s| !s.is_empty()).map(PathBuf::from)
}

/// Tracing filter directive from `COVR_LOG` (default: `warn`).
pub fn log_filter() -> String {
    std::env::var("COVR_LOG").ok().filter(|s| !s.is_empty()).unwrap_or_else(|| "warn".to_string())
}
