// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use clap::ValueEnum;
use covr_dotcover::CoverPlan;
use serde::Serialize;

#[cfg(test)]
#[path = "output_tests.rs"]
mod tests;

#[derive(Clone, Copy, Debug, Default, PartialEq, ValueEnum)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

/// Printable view of a [`CoverPlan`]. Secrets are already redacted.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PlanView {
    pub tool: String,
    pub command_line: String,
    pub target: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub target_arguments: Option<String>,
}

impl From<&CoverPlan> for PlanView {
    fn from(plan: &CoverPlan) -> Self {
        let target_args = plan.recorded.target_settings.arguments.as_ref();
        Self {
            tool: plan.tool_path.display().to_string(),
            command_line: plan.arguments.render_safe(),
            target: plan.recorded.target_path.display().to_string(),
            target_arguments: target_args
                .map(|args| args.render_safe())
                .filter(|rendered| !rendered.trim().is_empty()),
        }
    }
}

impl PlanView {
    /// `tool args` on one line, the way a shell would show it.
    pub fn text(&self) -> String {
        format!("{} {}", self.tool, self.command_line)
    }
}

/// Renders as JSON when `format` is `Json`, otherwise calls `text_fn`.
pub fn format_or_json<T: Serialize>(
    format: OutputFormat,
    data: &T,
    text_fn: impl FnOnce(),
) -> anyhow::Result<()> {
    match format {
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(data)?);
        }
        OutputFormat::Text => {
            text_fn();
        }
    }
    Ok(())
}
