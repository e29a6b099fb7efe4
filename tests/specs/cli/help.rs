//! CLI help output specs

use crate::prelude::*;

#[test]
fn covr_help_shows_usage() {
    cli().args(&["--help"]).passes().stdout_has("Usage:").stdout_has("cover");
}

#[test]
fn covr_cover_help_lists_options() {
    cli()
        .args(&["cover", "--help"])
        .passes()
        .stdout_has("--output")
        .stdout_has("--filter")
        .stdout_has("--dry-run");
}

#[test]
fn covr_version_includes_build_hash() {
    cli().args(&["--version"]).passes().stdout_has("0.1.0+");
}

#[test]
fn covr_without_subcommand_is_a_usage_error() {
    cli().exits(2).stderr_has("Usage:");
}

#[test]
fn cover_without_target_is_a_usage_error() {
    cli().args(&["cover", "--output", "cov.xml"]).exits(2).stderr_has("TARGET");
}
