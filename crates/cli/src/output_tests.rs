// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use std::path::PathBuf;

use covr_core::{ProcessArguments, ProcessSettings};
use covr_dotcover::{CoverPlan, RecordedInvocation};

use super::{format_or_json, OutputFormat, PlanView};

fn plan(target_args: Option<ProcessArguments>) -> CoverPlan {
    let mut settings = ProcessSettings::default();
    settings.arguments = target_args;

    let mut arguments = ProcessArguments::new();
    arguments.append("Cover").append_switch_quoted("/TargetExecutable", "=", "/work/tests");
    arguments.append_switch_quoted("/Output", "=", "/work/cov.xml");

    CoverPlan {
        tool_path: PathBuf::from("/opt/dotCover/dotCover"),
        arguments,
        recorded: RecordedInvocation { target_path: PathBuf::from("/work/tests"), target_settings: settings },
    }
}

#[test]
fn view_renders_tool_and_command_line() {
    let view = PlanView::from(&plan(None));
    assert_eq!(
        view.text(),
        r#"/opt/dotCover/dotCover Cover /TargetExecutable="/work/tests" /Output="/work/cov.xml""#
    );
    assert_eq!(view.target, "/work/tests");
    assert_eq!(view.target_arguments, None);
}

#[test]
fn view_redacts_secret_target_arguments() {
    let mut args = ProcessArguments::new();
    args.append("--token").append_secret("hunter2");

    let view = PlanView::from(&plan(Some(args)));
    let shown = view.target_arguments.unwrap_or_default();
    assert!(shown.starts_with("--token"));
    assert!(!shown.contains("hunter2"));
}

#[test]
fn view_drops_blank_target_arguments() {
    let view = PlanView::from(&plan(Some(ProcessArguments::from("  "))));
    assert_eq!(view.target_arguments, None);
}

#[test]
fn json_view_skips_missing_target_arguments() {
    let json = serde_json::to_value(PlanView::from(&plan(None))).unwrap();
    assert_eq!(json["tool"], "/opt/dotCover/dotCover");
    assert!(json.get("target_arguments").is_none());
}

#[test]
fn format_or_json_text_calls_text_fn() {
    let mut called = false;
    format_or_json(OutputFormat::Text, &PlanView::from(&plan(None)), || called = true).unwrap();
    assert!(called);
}
