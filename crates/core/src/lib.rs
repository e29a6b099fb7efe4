// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

// Allow panic!/unwrap/expect in test code
#![cfg_attr(test, allow(clippy::panic))]
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]
#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

//! covr-core: execution context, process, and tool plumbing shared by wrappers

pub mod arguments;
pub mod context;
pub mod environment;
pub mod error;
pub mod fs;
pub mod process;
pub mod tool;
pub mod tools;

pub use arguments::{escape_quotes, quote, ProcessArgument, ProcessArguments};
pub use context::{Context, LocalContext};
pub use environment::Environment;
pub use error::ToolError;
pub use fs::{FileSystem, LocalFileSystem};
#[cfg(any(test, feature = "test-support"))]
pub use process::{FakeProcessRunner, ProcessCall};
pub use process::{Process, ProcessRunner, ProcessSettings, SystemProcessRunner};
pub use tool::{HasToolSettings, ToolRunner, ToolSettings};
#[cfg(any(test, feature = "test-support"))]
pub use tools::FakeToolLocator;
pub use tools::{PathToolLocator, ToolLocator};
