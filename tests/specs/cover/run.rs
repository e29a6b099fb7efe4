//! `covr cover` runs dotCover with the composed arguments.

use crate::prelude::*;

#[test]
fn runs_dotcover_with_unquoted_argv() {
    let temp = Project::empty();
    let log = temp.join("argv.txt");
    let tool = temp.script("fake-dotcover", &format!("printf '%s\\n' \"$@\" > '{}'", log.display()));

    temp.covr()
        .args(&["cover", "--tool-path", tool.to_str().unwrap(), "--output", "cov.xml"])
        .args(&["--", "bin/tests", "--name", "my tests"])
        .passes();

    let argv = std::fs::read_to_string(&log).unwrap();
    let expected = format!(
        "Cover\n/TargetExecutable={}\n/TargetArguments=--name \"my tests\"\n/Output={}\n",
        temp.join("bin/tests").display(),
        temp.join("cov.xml").display(),
    );
    similar_asserts::assert_eq!(argv, expected);
}

#[test]
fn target_is_not_launched() {
    let temp = Project::empty();
    let marker = temp.join("target-ran");
    let target = temp.script("target", &format!("touch '{}'", marker.display()));
    let tool = temp.script("fake-dotcover", "exit 0");

    temp.covr()
        .args(&["cover", "--tool-path", tool.to_str().unwrap(), "--output", "cov.xml"])
        .args(&["--", target.to_str().unwrap()])
        .passes();

    assert!(!marker.exists());
}

#[test]
fn dotcover_exit_code_is_forwarded() {
    let temp = Project::empty();
    let tool = temp.script("fake-dotcover", "exit 5");

    temp.covr()
        .args(&["cover", "--tool-path", tool.to_str().unwrap(), "--output", "cov.xml"])
        .args(&["--", "tests"])
        .exits(5)
        .stderr_has("exit code 5");
}

#[test]
fn dotcover_found_on_path() {
    let temp = Project::empty();
    let log = temp.join("ran.txt");
    temp.script("bin/dotCover", &format!("echo ran > '{}'", log.display()));

    temp.covr()
        .env("PATH", temp.join("bin"))
        .args(&["cover", "--output", "cov.xml", "--", "tests"])
        .passes();

    assert_eq!(std::fs::read_to_string(&log).unwrap(), "ran\n");
}
