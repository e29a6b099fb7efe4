// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! `covr cover`: run a target program under dotCover.

use std::path::{Component, Path, PathBuf};

use anyhow::Result;
use clap::Args;
use covr_core::{Context, Environment, LocalContext, ProcessArguments, ProcessSettings, ToolError};
use covr_dotcover::{CoverRequest, CoverSettings, Coverer};

use crate::config::Config;
use crate::env;
use crate::exit_error::{ExitError, EXIT_USAGE};
use crate::output::{format_or_json, OutputFormat, PlanView};

#[cfg(test)]
#[path = "cover_tests.rs"]
mod tests;

#[derive(Args, Debug, Default)]
pub struct CoverArgs {
    /// Coverage snapshot to write
    #[arg(long, short)]
    pub output: PathBuf,

    /// covr config file (default: ./covr.toml, then the user config dir)
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// dotCover executable to run instead of searching PATH
    #[arg(long)]
    pub tool_path: Option<PathBuf>,

    /// Coverage filter, e.g. `+:MyProject` (repeatable)
    #[arg(long = "filter", value_name = "FILTER", allow_hyphen_values = true)]
    pub filters: Vec<String>,

    /// Extra assembly to include in the report (repeatable)
    #[arg(long, value_name = "PATH")]
    pub scope: Vec<String>,

    /// Attribute whose members are excluded (repeatable)
    #[arg(long = "attribute-filter", value_name = "FILTER", allow_hyphen_values = true)]
    pub attribute_filters: Vec<String>,

    /// Process filter, e.g. `-:sqlservr.exe` (repeatable)
    #[arg(long = "process-filter", value_name = "FILTER", allow_hyphen_values = true)]
    pub process_filters: Vec<String>,

    /// Working directory for the target program
    #[arg(long, value_name = "DIR")]
    pub target_working_dir: Option<PathBuf>,

    /// Do not apply dotCover's default filters
    #[arg(long)]
    pub disable_default_filters: bool,

    /// dotCover log file
    #[arg(long, value_name = "FILE")]
    pub log_file: Option<PathBuf>,

    /// dotCover XML configuration file
    #[arg(long, value_name = "FILE")]
    pub dotcover_config: Option<PathBuf>,

    /// Print the dotCover command line instead of running it
    #[arg(long)]
    pub dry_run: bool,

    #[arg(long, value_enum, default_value_t)]
    pub format: OutputFormat,

    /// Program to cover, followed by its arguments
    #[arg(last = true, required = true, value_name = "TARGET")]
    pub command: Vec<String>,
}

impl CoverArgs {
    /// Layer flags over `settings`: lists extend, scalars override.
    pub fn apply(&self, mut settings: CoverSettings) -> CoverSettings {
        if let Some(path) = &self.tool_path {
            settings.tool.tool_path = Some(path.clone());
        }
        if let Some(dir) = &self.target_working_dir {
            settings.target_working_dir = Some(dir.clone());
        }
        if let Some(path) = &self.log_file {
            settings.log_file = Some(path.clone());
        }
        if let Some(path) = &self.dotcover_config {
            settings.config_file = Some(path.clone());
        }
        settings.filters.extend(self.filters.iter().cloned());
        settings.scope.extend(self.scope.iter().cloned());
        settings.attribute_filters.extend(self.attribute_filters.iter().cloned());
        settings.process_filters.extend(self.process_filters.iter().cloned());
        settings.disable_default_filters |= self.disable_default_filters;
        settings
    }
}

/// Target arguments as one command line: whitespace forces quoting.
pub fn target_arguments(args: &[String]) -> ProcessArguments {
    let mut out = ProcessArguments::new();
    for arg in args {
        if arg.is_empty() || arg.chars().any(char::is_whitespace) {
            out.append_quoted(arg.as_str());
        } else {
            out.append(arg.as_str());
        }
    }
    out
}

/// A bare program name is looked up like a shell would; anything with a
/// directory part is left for the context to make absolute.
pub fn resolve_target(ctx: &dyn Context, target: &str) -> PathBuf {
    let path = Path::new(target);
    let mut components = path.components();
    let bare = matches!((components.next(), components.next()), (Some(Component::Normal(_)), None));
    if !bare {
        return path.to_path_buf();
    }
    ctx.tools().resolve(target).unwrap_or_else(|| path.to_path_buf())
}

/// Resolve settings from config, `COVR_DOTCOVER_PATH`, then flags.
pub fn resolve_settings(args: &CoverArgs, cwd: &Path) -> Result<CoverSettings, ExitError> {
    let mut settings = Config::discover(args.config.as_deref(), cwd)?.cover;
    if settings.tool.tool_path.is_none() {
        settings.tool.tool_path = env::dotcover_path();
    }
    Ok(args.apply(settings))
}

pub fn handle(args: CoverArgs) -> Result<()> {
    let environment = Environment::from_process()?;
    let settings = resolve_settings(&args, environment.working_directory())?;
    let context = LocalContext::system(environment);

    let Some((target, rest)) = args.command.split_first() else {
        return Err(ExitError::new(EXIT_USAGE, "missing target program").into());
    };
    let target = target.clone();
    let target_args = target_arguments(rest);

    let action = move |ctx: &dyn Context| -> Result<(), ToolError> {
        let path = resolve_target(ctx, &target);
        let settings = ProcessSettings::new().with_arguments(target_args);
        let mut process = ctx.start_process(&path, settings)?;
        process.wait_for_exit()?;
        Ok(())
    };
    let request = CoverRequest::new(action, args.output.clone(), settings);
    let coverer = Coverer::new();

    if args.dry_run {
        let plan = coverer.plan(&context, request).map_err(ExitError::from)?;
        let view = PlanView::from(&plan);
        return format_or_json(args.format, &view, || println!("{}", view.text()));
    }

    coverer.cover(&context, request).map_err(ExitError::from)?;
    Ok(())
}
