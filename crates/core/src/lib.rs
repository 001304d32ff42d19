// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

// Allow panic!/unwrap/expect in test code
#![cfg_attr(test, allow(clippy::panic))]
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]

//! formflow-core: pure building blocks for form submission pipelines
//!
//! This crate provides:
//! - An immutable form snapshot and the payloads derived from it
//! - Field validators, form schemas and booking rules
//! - The submission state machine and the effects it requests
//! - Clock and confirmation identifier abstractions
//! - TOML configuration

pub mod booking;
pub mod clock;
pub mod config;
pub mod effect;
pub mod form;
pub mod id;
pub mod payload;
pub mod schema;
pub mod submission;
pub mod traced;
pub mod validate;

// Re-exports
pub use booking::{BookingRules, DateWindow, ServiceOption};
pub use clock::{Clock, FakeClock, SystemClock};
pub use config::{ConfigError, FlowConfig};
pub use effect::{Effect, ViewUpdate};
pub use form::{FormKind, FormSubmission, PageContext};
pub use id::{IdGen, OrderNumberGen, SequentialIdGen};
pub use payload::{BookingRecord, LeadEvent, Notification};
pub use schema::{FieldRule, FormSchema};
pub use submission::{
    Step, StepOutcome, StepPlan, SubmissionEvent, SubmissionMachine, SubmissionResult,
    SubmissionState,
};
pub use traced::TracedEffect;
pub use validate::{FieldError, FieldErrors, Rejection};
