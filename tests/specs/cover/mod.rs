mod dry_run;
mod errors;
#[cfg(unix)]
mod run;
