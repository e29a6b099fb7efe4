//! `covr cover --dry-run` prints the composed dotCover command line.

use crate::prelude::*;

#[test]
fn dry_run_composes_target_and_output() {
    let temp = Project::empty();
    let output = temp.join("cov.xml");
    let target = temp.join("bin/tests");

    temp.covr()
        .args(&["cover", "--dry-run", "--tool-path", "/opt/dotCover/dotCover"])
        .args(&["--output", "cov.xml", "--", "bin/tests", "--flag", "a b"])
        .passes()
        .stdout_has("/opt/dotCover/dotCover Cover")
        .stdout_has(&format!(r#"/TargetExecutable="{}""#, target.display()))
        .stdout_has(r#"/TargetArguments="--flag \"a b\"""#)
        .stdout_has(&format!(r#"/Output="{}""#, output.display()));
}

#[test]
fn dry_run_omits_target_arguments_when_none_given() {
    let temp = Project::empty();
    let outcome = temp
        .covr()
        .args(&["cover", "--dry-run", "--tool-path", "/opt/dotCover/dotCover"])
        .args(&["--output", "cov.xml", "--", "tests"])
        .passes();
    assert!(!outcome.stdout().contains("/TargetArguments"), "{}", outcome.stdout());
}

#[test]
fn dry_run_appends_options_after_output() {
    let temp = Project::empty();
    let outcome = temp
        .covr()
        .args(&["cover", "--dry-run", "--tool-path", "/opt/dotCover/dotCover"])
        .args(&["--filter", "+:App", "--filter", "-:App.Tests", "--disable-default-filters"])
        .args(&["--output", "cov.xml", "--", "tests"])
        .passes();

    let line = outcome.stdout().trim();
    let output_at = line.find("/Output=").unwrap();
    let filters_at = line.find(r#"/Filters="+:App;-:App.Tests""#).unwrap();
    assert!(output_at < filters_at, "{line}");
    assert!(line.ends_with("/DisableDefaultFilters"), "{line}");
}

#[test]
fn dry_run_reads_project_config() {
    let temp = Project::empty();
    temp.file(
        "covr.toml",
        r#"
[cover]
tool_path = "/from/config/dotCover"
filters = ["+:FromConfig"]
"#,
    );

    temp.covr()
        .args(&["cover", "--dry-run", "--filter", "+:FromFlag", "--output", "cov.xml", "--", "t"])
        .passes()
        .stdout_has("/from/config/dotCover Cover")
        .stdout_has(r#"/Filters="+:FromConfig;+:FromFlag""#);
}

#[test]
fn dry_run_takes_tool_path_from_env() {
    let temp = Project::empty();
    temp.covr()
        .env("COVR_DOTCOVER_PATH", "/from/env/dotCover")
        .args(&["cover", "--dry-run", "--output", "cov.xml", "--", "t"])
        .passes()
        .stdout_has("/from/env/dotCover Cover");
}

#[test]
fn dry_run_json_reports_plan() {
    let temp = Project::empty();
    let outcome = temp
        .covr()
        .args(&["cover", "--dry-run", "--format", "json", "--tool-path", "/opt/dotCover/dotCover"])
        .args(&["--output", "cov.xml", "--", "tests", "--fast"])
        .passes();

    let json: serde_json::Value = serde_json::from_str(outcome.stdout()).unwrap();
    assert_eq!(json["tool"], "/opt/dotCover/dotCover");
    assert_eq!(json["target_arguments"], "--fast");
    assert!(json["command_line"].as_str().unwrap().starts_with("Cover /TargetExecutable="));
}

#[cfg(unix)]
#[test]
fn dry_run_resolves_bare_target_on_path() {
    let temp = Project::empty();
    let target = temp.script("bin/mytests", "exit 0");

    temp.covr()
        .env("PATH", temp.join("bin"))
        .args(&["cover", "--dry-run", "--tool-path", "/opt/dotCover/dotCover"])
        .args(&["--output", "cov.xml", "--", "mytests", "--fast"])
        .passes()
        .stdout_has(&format!(r#"/TargetExecutable="{}""#, target.display()));
}

#[test]
fn dry_run_accepts_exclusion_process_filters() {
    let temp = Project::empty();
    temp.covr()
        .args(&["cover", "--dry-run", "--tool-path", "/opt/dotCover/dotCover"])
        .args(&["--process-filter", "-:sqlservr.exe", "--output", "cov.xml", "--", "t"])
        .passes()
        .stdout_has(r#"/ProcessFilters="-:sqlservr.exe""#);
}
