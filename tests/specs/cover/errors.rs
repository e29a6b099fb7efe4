//! Exit codes for failed `covr cover` runs.

use crate::prelude::*;

#[test]
fn missing_dotcover_exits_3() {
    let temp = Project::empty();
    std::fs::create_dir_all(temp.join("empty-path")).unwrap();

    temp.covr()
        .env("PATH", temp.join("empty-path"))
        .args(&["cover", "--output", "cov.xml", "--", "tests"])
        .exits(3)
        .stderr_has("DotCover: could not locate executable");
}

#[test]
fn missing_dotcover_fails_dry_run_too() {
    let temp = Project::empty();
    std::fs::create_dir_all(temp.join("empty-path")).unwrap();

    temp.covr()
        .env("PATH", temp.join("empty-path"))
        .args(&["cover", "--dry-run", "--output", "cov.xml", "--", "tests"])
        .exits(3);
}

#[test]
fn invalid_config_is_a_usage_error() {
    let temp = Project::empty();
    temp.file("covr.toml", "[cover]\nfilters = \"not-a-list\"\n");

    temp.covr()
        .args(&["cover", "--dry-run", "--output", "cov.xml", "--", "tests"])
        .exits(2)
        .stderr_has("invalid config");
}

#[test]
fn explicit_missing_config_is_a_usage_error() {
    let temp = Project::empty();
    temp.covr()
        .args(&["cover", "--config", "nope.toml", "--output", "cov.xml", "--", "tests"])
        .exits(2)
        .stderr_has("failed to read config");
}
