// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Error types for the submission engine

use formflow_adapters::{NotifyError, RecordError, TrackingError};
use formflow_core::{FormKind, Step};
use std::time::Duration;
use thiserror::Error;

/// Errors returned from `FormPipeline::submit_form`
#[derive(Debug, Error)]
pub enum PipelineError {
    /// A submission from this form instance is still running
    #[error("a {0} submission is already in flight")]
    InFlight(FormKind),
    /// The submission belongs to a different form
    #[error("expected a {expected} submission, got {got}")]
    WrongKind { expected: FormKind, got: FormKind },
    /// The event loop drained without reaching a terminal state
    #[error("submission stalled in state {0}")]
    Stalled(&'static str),
}

/// Why a collaborator step did not succeed
#[derive(Debug, Error)]
pub enum StepError {
    #[error("record error: {0}")]
    Record(#[from] RecordError),
    #[error("tracking error: {0}")]
    Tracking(#[from] TrackingError),
    #[error("notify error: {0}")]
    Notify(#[from] NotifyError),
    /// The collaborator answered but declined the request
    #[error("{0}")]
    Rejected(String),
    #[error("{step} timed out after {}ms", after.as_millis())]
    TimedOut { step: Step, after: Duration },
}

impl StepError {
    /// Message the user may see when this error fails the authoritative step
    ///
    /// Service rejections carry a reason meant for the user, whether in a
    /// negative answer or in the body of a non-2xx response. Transport errors
    /// and timeouts do not, so they map to an empty message and the state
    /// machine substitutes the form's generic failure text.
    pub fn user_message(&self) -> String {
        let http = match self {
            StepError::Rejected(reason) => return reason.clone(),
            StepError::Record(RecordError::Http(e)) => e,
            StepError::Tracking(TrackingError::Http(e)) => e,
            StepError::Notify(NotifyError::Http(e)) => e,
            _ => return String::new(),
        };
        http.reason().map(str::to_string).unwrap_or_default()
    }
}

#[cfg(test)]
#[path = "error_tests.rs"]
mod tests;
