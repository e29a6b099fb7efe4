// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use super::*;

#[test]
fn exit_code_message_names_tool() {
    let err = ToolError::ExitCode { tool: "dotCover".into(), exit_code: 3 };
    assert_eq!(err.to_string(), "dotCover: process returned an error (exit code 3)");
    assert_eq!(err.exit_code(), Some(3));
}

#[test]
fn not_found_has_no_exit_code() {
    let err = ToolError::not_found("dotCover");
    assert_eq!(err.to_string(), "dotCover: could not locate executable");
    assert_eq!(err.exit_code(), None);
}

#[test]
fn spawn_message_includes_path() {
    let err = ToolError::Spawn {
        path: PathBuf::from("/opt/tool"),
        source: std::io::Error::new(std::io::ErrorKind::NotFound, "missing"),
    };
    assert_eq!(err.to_string(), "failed to start `/opt/tool`: missing");
}
