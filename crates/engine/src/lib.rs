// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

// Allow panic!/unwrap/expect in test code
#![cfg_attr(test, allow(clippy::panic))]
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]

//! formflow submission engine
//!
//! Drives the submission state machine and performs its effects against the
//! configured adapters.

mod error;
mod executor;
mod runner;

pub use error::{PipelineError, StepError};
pub use executor::{ExecuteError, Executor, StepContext};
pub use runner::{FormPipeline, PipelineDeps, PipelineSettings};
