// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! dotCover `cover` invocation builder.
//!
//! One `cover` call moves through these phases, never revisiting one:
//!
//! ```text
//! Idle ─► ActionRunning ─┬─► Intercepted ─► Composed ─► Executed
//!   │                    └─► ContractViolated ─► Aborted
//!   └─► Aborted (missing input)
//! ```
//!
//! The action runs against a [`DotCoverContext`], so the process it starts is
//! recorded rather than launched. The recorded target then becomes the
//! `/TargetExecutable` and `/TargetArguments` of a dotCover command line.

use std::path::{Path, PathBuf};

use covr_core::{
    escape_quotes, Context, Environment, HasToolSettings, ProcessArgument, ProcessArguments,
    ToolError, ToolRunner,
};

use crate::context::{DotCoverContext, RecordedInvocation};
use crate::error::CoverError;
use crate::settings::ToArguments;

/// Caller-supplied unit of work that is expected to start exactly one process.
pub type Action<'a> = Box<dyn FnOnce(&dyn Context) -> Result<(), ToolError> + 'a>;

/// Executable names tried, in order, when no tool path is configured.
pub const DOTCOVER_EXECUTABLES: [&str; 3] = ["dotCover.exe", "dotCover", "dotcover"];

/// Phase of a single `cover` call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CoverPhase {
    Idle,
    ActionRunning,
    Intercepted,
    ContractViolated,
    Composed,
    Executed,
    Aborted,
}

impl CoverPhase {
    /// Whether `next` may follow `self`.
    pub fn allows(self, next: CoverPhase) -> bool {
        use CoverPhase::*;
        matches!(
            (self, next),
            (Idle, ActionRunning)
                | (Idle, Aborted)
                | (ActionRunning, Intercepted)
                | (ActionRunning, ContractViolated)
                | (ActionRunning, Aborted)
                | (ContractViolated, Aborted)
                | (Intercepted, Composed)
                | (Composed, Executed)
                | (Composed, Aborted)
        )
    }

    pub fn is_terminal(self) -> bool {
        matches!(self, CoverPhase::Executed | CoverPhase::Aborted)
    }
}

impl CoverError {
    /// Last phase reached before the call aborted.
    pub fn phase(&self) -> CoverPhase {
        match self {
            CoverError::InvalidArgument(_) => CoverPhase::Idle,
            CoverError::Action(_) => CoverPhase::ActionRunning,
            CoverError::NoToolStarted => CoverPhase::ContractViolated,
            CoverError::ToolNotFound { .. } | CoverError::Launch { .. } | CoverError::Io(_) => {
                CoverPhase::Composed
            }
            // The tool ran; its failure is the outcome of execution.
            CoverError::ToolExecutionFailed { .. } => CoverPhase::Executed,
        }
    }
}

/// Inputs of one `cover` call besides the context.
pub struct CoverRequest<'a, S> {
    action: Option<Action<'a>>,
    output_path: Option<PathBuf>,
    settings: Option<S>,
}

impl<S> Default for CoverRequest<'_, S> {
    fn default() -> Self {
        Self { action: None, output_path: None, settings: None }
    }
}

impl<'a, S> CoverRequest<'a, S> {
    /// A complete request.
    pub fn new<F>(action: F, output_path: impl Into<PathBuf>, settings: S) -> Self
    where
        F: FnOnce(&dyn Context) -> Result<(), ToolError> + 'a,
    {
        Self::default().action(action).output_path(output_path).settings(settings)
    }

    pub fn action<F>(mut self, action: F) -> Self
    where
        F: FnOnce(&dyn Context) -> Result<(), ToolError> + 'a,
    {
        self.action = Some(Box::new(action));
        self
    }

    pub fn output_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.output_path = Some(path.into());
        self
    }

    pub fn settings(mut self, settings: S) -> Self {
        self.settings = Some(settings);
        self
    }

    fn validate(self) -> Result<ValidRequest<'a, S>, CoverError> {
        let action = self.action.ok_or(CoverError::InvalidArgument("action"))?;
        let output_path = self
            .output_path
            .filter(|p| !p.as_os_str().is_empty())
            .ok_or(CoverError::InvalidArgument("output_path"))?;
        let settings = self.settings.ok_or(CoverError::InvalidArgument("settings"))?;
        Ok(ValidRequest { action, output_path, settings })
    }
}

struct ValidRequest<'a, S> {
    action: Action<'a>,
    output_path: PathBuf,
    settings: S,
}

/// A composed dotCover invocation, ready to run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CoverPlan {
    pub tool_path: PathBuf,
    pub arguments: ProcessArguments,
    pub recorded: RecordedInvocation,
}

/// Runs actions under dotCover coverage.
#[derive(Debug, Clone)]
pub struct Coverer {
    tool: ToolRunner,
}

impl Default for Coverer {
    fn default() -> Self {
        Self::new()
    }
}

impl Coverer {
    pub fn new() -> Self {
        Self { tool: ToolRunner::new("DotCover", DOTCOVER_EXECUTABLES) }
    }

    /// Intercept the action's launch and run it under dotCover.
    ///
    /// Blocks until dotCover exits. Returns the plan that was executed.
    pub fn cover<S>(
        &self,
        context: &dyn Context,
        request: CoverRequest<'_, S>,
    ) -> Result<CoverPlan, CoverError>
    where
        S: ToArguments + HasToolSettings,
    {
        let (plan, settings) = self.prepare(context, request)?;

        tracing::info!(
            tool = %plan.tool_path.display(),
            args = %plan.arguments.render_safe(),
            "running dotCover"
        );
        self.tool.run_at(
            context,
            &plan.tool_path,
            settings.tool_settings(),
            plan.arguments.clone(),
        )
        .inspect_err(|e| {
            // A non-zero exit still means dotCover ran.
            let to = match e {
                ToolError::ExitCode { .. } => CoverPhase::Executed,
                _ => CoverPhase::Aborted,
            };
            transition(CoverPhase::Composed, to);
        })?;
        transition(CoverPhase::Composed, CoverPhase::Executed);
        Ok(plan)
    }

    /// Everything `cover` does except running dotCover.
    pub fn plan<S>(
        &self,
        context: &dyn Context,
        request: CoverRequest<'_, S>,
    ) -> Result<CoverPlan, CoverError>
    where
        S: ToArguments + HasToolSettings,
    {
        self.prepare(context, request).map(|(plan, _)| plan)
    }

    fn prepare<S>(
        &self,
        context: &dyn Context,
        request: CoverRequest<'_, S>,
    ) -> Result<(CoverPlan, S), CoverError>
    where
        S: ToArguments + HasToolSettings,
    {
        let request = request.validate().inspect_err(|_| {
            transition(CoverPhase::Idle, CoverPhase::Aborted);
        })?;

        let recorded = intercept(context, request.action)?;
        let arguments = compose_arguments(
            context.environment(),
            &recorded,
            &request.output_path,
            &request.settings,
        );
        transition(CoverPhase::Intercepted, CoverPhase::Composed);

        let tool_path = self
            .tool
            .resolve_path(context, request.settings.tool_settings())
            .inspect_err(|_| transition(CoverPhase::Composed, CoverPhase::Aborted))?;

        Ok((CoverPlan { tool_path, arguments, recorded }, request.settings))
    }
}

/// Run `action` against a recording proxy and return what it launched.
pub fn intercept(
    context: &dyn Context,
    action: Action<'_>,
) -> Result<RecordedInvocation, CoverError> {
    transition(CoverPhase::Idle, CoverPhase::ActionRunning);
    let proxy = DotCoverContext::new(context);

    if let Err(e) = action(&proxy) {
        transition(CoverPhase::ActionRunning, CoverPhase::Aborted);
        return Err(CoverError::Action(e));
    }

    match proxy.into_recorded() {
        Some(recorded) => {
            transition(CoverPhase::ActionRunning, CoverPhase::Intercepted);
            Ok(recorded)
        }
        None => {
            transition(CoverPhase::ActionRunning, CoverPhase::ContractViolated);
            transition(CoverPhase::ContractViolated, CoverPhase::Aborted);
            Err(CoverError::NoToolStarted)
        }
    }
}

/// Build the dotCover argument list.
///
/// `Cover /TargetExecutable=".." [/TargetArguments=".."] /Output=".." <options..>`
pub fn compose_arguments(
    environment: &Environment,
    recorded: &RecordedInvocation,
    output_path: &Path,
    options: &impl ToArguments,
) -> ProcessArguments {
    let mut args = ProcessArguments::new();
    args.append("Cover");

    let target = environment.make_absolute(&recorded.target_path);
    args.append_switch_quoted("/TargetExecutable", "=", target.display().to_string());

    if let Some(target_args) = recorded.target_settings.arguments.as_ref() {
        let rendered = target_args.render();
        if !rendered.trim().is_empty() {
            let value = ProcessArgument::Quoted(escape_quotes(&rendered));
            let value = if target_args.has_secrets() {
                ProcessArgument::Secret(Box::new(value))
            } else {
                value
            };
            args.push(ProcessArgument::Switch {
                switch: "/TargetArguments".to_string(),
                separator: "=".to_string(),
                value: Box::new(value),
            });
        }
    }

    let output = environment.make_absolute(output_path);
    args.append_switch_quoted("/Output", "=", output.display().to_string());

    args.extend(options.to_arguments(environment));
    args
}

fn transition(from: CoverPhase, to: CoverPhase) {
    debug_assert!(from.allows(to), "illegal cover phase transition {from:?} -> {to:?}");
    tracing::debug!(?from, ?to, "cover phase");
}

#[cfg(test)]
#[path = "coverer_tests.rs"]
mod tests;
