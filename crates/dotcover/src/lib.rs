// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

// Allow panic!/unwrap/expect in test code
#![cfg_attr(test, allow(clippy::panic))]
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]

//! covr-dotcover: run an action's process under dotCover coverage

pub mod context;
pub mod coverer;
pub mod error;
pub mod settings;

#[cfg(test)]
mod test_helpers;

pub use context::{DotCoverContext, RecordedInvocation};
pub use coverer::{
    compose_arguments, intercept, Action, CoverPhase, CoverPlan, CoverRequest, Coverer,
    DOTCOVER_EXECUTABLES,
};
pub use error::CoverError;
pub use settings::{CoverSettings, RawCoverSettings, ToArguments};
