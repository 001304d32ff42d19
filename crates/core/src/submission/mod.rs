// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Submission state machine
//!
//! `Idle -> Validating -> Submitting -> Completed(Success | Failure)`

mod state;
mod step;

pub use state::{
    Stage, SubmissionEvent, SubmissionMachine, SubmissionResult, SubmissionState, Timing,
};
pub use step::{Step, StepOutcome, StepPlan, StepPolicy};
