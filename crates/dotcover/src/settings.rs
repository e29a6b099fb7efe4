// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Coverage options and their command-line form.

use std::collections::BTreeMap;
use std::path::PathBuf;

use covr_core::{Environment, HasToolSettings, ProcessArguments, ToolSettings};
use serde::{Deserialize, Serialize};

/// Translates options into switches appended after the coverer's own.
pub trait ToArguments {
    fn to_arguments(&self, environment: &Environment) -> ProcessArguments;
}

/// dotCover `cover` options.
///
/// Deserializes from the `[cover]` table of a config file; every field is
/// optional and unknown keys are rejected.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "CoverTable", into = "CoverTable")]
pub struct CoverSettings {
    pub tool: ToolSettings,
    /// Working directory dotCover starts the target in.
    pub target_working_dir: Option<PathBuf>,
    /// Assemblies to include in the report even if never loaded.
    pub scope: Vec<String>,
    /// `+:module` / `-:module` coverage filters.
    pub filters: Vec<String>,
    pub attribute_filters: Vec<String>,
    pub process_filters: Vec<String>,
    pub disable_default_filters: bool,
    pub log_file: Option<PathBuf>,
    /// dotCover XML configuration file.
    pub config_file: Option<PathBuf>,
}

/// Flat on-disk form of [`CoverSettings`].
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
struct CoverTable {
    tool_path: Option<PathBuf>,
    working_directory: Option<PathBuf>,
    environment: BTreeMap<String, String>,
    target_working_dir: Option<PathBuf>,
    scope: Vec<String>,
    filters: Vec<String>,
    attribute_filters: Vec<String>,
    process_filters: Vec<String>,
    disable_default_filters: bool,
    log_file: Option<PathBuf>,
    config_file: Option<PathBuf>,
}

impl From<CoverTable> for CoverSettings {
    fn from(table: CoverTable) -> Self {
        Self {
            tool: ToolSettings {
                tool_path: table.tool_path,
                working_directory: table.working_directory,
                environment: table.environment,
            },
            target_working_dir: table.target_working_dir,
            scope: table.scope,
            filters: table.filters,
            attribute_filters: table.attribute_filters,
            process_filters: table.process_filters,
            disable_default_filters: table.disable_default_filters,
            log_file: table.log_file,
            config_file: table.config_file,
        }
    }
}

impl From<CoverSettings> for CoverTable {
    fn from(settings: CoverSettings) -> Self {
        let ToolSettings { tool_path, working_directory, environment } = settings.tool;
        Self {
            tool_path,
            working_directory,
            environment,
            target_working_dir: settings.target_working_dir,
            scope: settings.scope,
            filters: settings.filters,
            attribute_filters: settings.attribute_filters,
            process_filters: settings.process_filters,
            disable_default_filters: settings.disable_default_filters,
            log_file: settings.log_file,
            config_file: settings.config_file,
        }
    }
}

impl CoverSettings {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_tool_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.tool.tool_path = Some(path.into());
        self
    }

    pub fn with_target_working_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.target_working_dir = Some(dir.into());
        self
    }

    pub fn with_scope(mut self, scope: impl Into<String>) -> Self {
        self.scope.push(scope.into());
        self
    }

    pub fn with_filter(mut self, filter: impl Into<String>) -> Self {
        self.filters.push(filter.into());
        self
    }

    pub fn with_attribute_filter(mut self, filter: impl Into<String>) -> Self {
        self.attribute_filters.push(filter.into());
        self
    }

    pub fn with_process_filter(mut self, filter: impl Into<String>) -> Self {
        self.process_filters.push(filter.into());
        self
    }

    pub fn with_default_filters_disabled(mut self) -> Self {
        self.disable_default_filters = true;
        self
    }

    pub fn with_log_file(mut self, path: impl Into<PathBuf>) -> Self {
        self.log_file = Some(path.into());
        self
    }

    pub fn with_config_file(mut self, path: impl Into<PathBuf>) -> Self {
        self.config_file = Some(path.into());
        self
    }
}

impl HasToolSettings for CoverSettings {
    fn tool_settings(&self) -> &ToolSettings {
        &self.tool
    }
}

fn append_list(args: &mut ProcessArguments, switch: &str, values: &[String]) {
    if !values.is_empty() {
        args.append_switch_quoted(switch, "=", values.join(";"));
    }
}

impl ToArguments for CoverSettings {
    fn to_arguments(&self, environment: &Environment) -> ProcessArguments {
        let mut args = ProcessArguments::new();

        if let Some(ref config) = self.config_file {
            args.append_quoted(environment.make_absolute(config).display().to_string());
        }

        if let Some(ref dir) = self.target_working_dir {
            args.append_switch_quoted(
                "/TargetWorkingDir",
                "=",
                environment.make_absolute(dir).display().to_string(),
            );
        }

        append_list(&mut args, "/Scope", &self.scope);
        append_list(&mut args, "/Filters", &self.filters);
        append_list(&mut args, "/AttributeFilters", &self.attribute_filters);
        append_list(&mut args, "/ProcessFilters", &self.process_filters);

        if self.disable_default_filters {
            args.append("/DisableDefaultFilters");
        }

        if let Some(ref log) = self.log_file {
            args.append_switch_quoted(
                "/LogFile",
                "=",
                environment.make_absolute(log).display().to_string(),
            );
        }

        args
    }
}

/// Switches supplied as-is, e.g. from a caller that already rendered them.
impl ToArguments for ProcessArguments {
    fn to_arguments(&self, _environment: &Environment) -> ProcessArguments {
        self.clone()
    }
}

/// Pre-rendered switches plus the settings dotCover itself runs with.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RawCoverSettings {
    pub tool: ToolSettings,
    pub switches: ProcessArguments,
}

impl From<ProcessArguments> for RawCoverSettings {
    fn from(switches: ProcessArguments) -> Self {
        Self { tool: ToolSettings::default(), switches }
    }
}

impl HasToolSettings for RawCoverSettings {
    fn tool_settings(&self) -> &ToolSettings {
        &self.tool
    }
}

impl ToArguments for RawCoverSettings {
    fn to_arguments(&self, environment: &Environment) -> ProcessArguments {
        self.switches.to_arguments(environment)
    }
}

#[cfg(test)]
#[path = "settings_tests.rs"]
mod tests;
