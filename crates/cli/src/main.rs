// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

// Allow panic!/unwrap/expect in test code
#![cfg_attr(test, allow(clippy::panic))]
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]

//! covr: run programs under JetBrains dotCover

mod commands;
mod config;
mod env;
mod exit_error;
mod output;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use crate::exit_error::{ExitError, EXIT_FAILURE};

const VERSION: &str = concat!(env!("CARGO_PKG_VERSION"), "+", env!("BUILD_GIT_HASH"));

#[derive(Parser)]
#[command(name = "covr", version = VERSION, about = "Collect .NET coverage with dotCover")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run a program under dotCover and write a coverage snapshot
    Cover(commands::cover::CoverArgs),
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(env::log_filter()))
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();

    let cli = Cli::parse();
    let result = match cli.command {
        Commands::Cover(args) => commands::cover::handle(args),
    };

    if let Err(err) = result {
        let code = err.downcast_ref::<ExitError>().map_or(EXIT_FAILURE, |e| e.code);
        eprintln!("covr: {err:#}");
        std::process::exit(code);
    }
}
