// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Submission state machine
//!
//! The machine is pure: `transition` returns the next machine and the effects
//! the runner must perform. Outcomes of those effects come back as events.

use super::step::{Step, StepOutcome, StepPlan, StepPolicy};
use crate::effect::{Effect, ViewUpdate};
use crate::form::FormKind;
use crate::id::IdGen;
use crate::validate::FieldErrors;
use serde::Serialize;
use std::fmt;
use std::time::Duration;

/// Terminal result of one submission attempt
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum SubmissionResult {
    Success { confirmation_id: String },
    Failure { message: String },
}

impl SubmissionResult {
    pub fn is_success(&self) -> bool {
        matches!(self, SubmissionResult::Success { .. })
    }

    pub fn confirmation_id(&self) -> Option<&str> {
        match self {
            SubmissionResult::Success { confirmation_id } => Some(confirmation_id),
            SubmissionResult::Failure { .. } => None,
        }
    }
}

impl fmt::Display for SubmissionResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SubmissionResult::Success { confirmation_id } => {
                write!(f, "confirmed: {}", confirmation_id)
            }
            SubmissionResult::Failure { message } => write!(f, "failed: {}", message),
        }
    }
}

/// Where a submission is inside `Submitting`
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Stage {
    /// Waiting on the authoritative step
    Authoritative,
    /// Authoritative step succeeded; best-effort steps still outstanding
    Secondary {
        confirmation_id: String,
        pending: Vec<Step>,
    },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmissionState {
    Idle,
    Validating,
    Submitting(Stage),
    Completed(SubmissionResult),
}

impl SubmissionState {
    pub fn name(&self) -> &'static str {
        match self {
            SubmissionState::Idle => "idle",
            SubmissionState::Validating => "validating",
            SubmissionState::Submitting(_) => "submitting",
            SubmissionState::Completed(SubmissionResult::Success { .. }) => "completed:success",
            SubmissionState::Completed(SubmissionResult::Failure { .. }) => "completed:failure",
        }
    }

    /// Whether the submit control should accept a new submission
    pub fn accepts_submit(&self) -> bool {
        matches!(self, SubmissionState::Idle | SubmissionState::Completed(_))
    }
}

/// Inputs to the state machine
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmissionEvent {
    /// The user pressed submit
    Submit,
    /// Synchronous validation finished
    Validated(Result<(), FieldErrors>),
    /// A collaborator step finished
    StepFinished { step: Step, outcome: StepOutcome },
}

/// How long transient view states last
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Timing {
    /// How long an error banner, or a contact confirmation, stays visible
    pub error_display: Duration,
    /// Delay before a reusable form is shown again after success
    pub form_restore: Duration,
}

impl Default for Timing {
    fn default() -> Self {
        Self {
            error_display: Duration::from_secs(5),
            form_restore: Duration::from_secs(3),
        }
    }
}

/// One form instance's submission lifecycle
#[derive(Debug, Clone)]
pub struct SubmissionMachine {
    pub kind: FormKind,
    pub plan: StepPlan,
    pub timing: Timing,
    /// Run best-effort steps concurrently once the authoritative step succeeded
    pub concurrent_secondary: bool,
    pub state: SubmissionState,
}

impl SubmissionMachine {
    pub fn new(kind: FormKind) -> Self {
        Self {
            kind,
            plan: StepPlan::for_kind(kind),
            timing: Timing::default(),
            concurrent_secondary: false,
            state: SubmissionState::Idle,
        }
    }

    pub fn with_timing(mut self, timing: Timing) -> Self {
        self.timing = timing;
        self
    }

    pub fn with_concurrent_secondary(mut self, concurrent: bool) -> Self {
        self.concurrent_secondary = concurrent;
        self
    }

    pub fn is_terminal(&self) -> bool {
        matches!(self.state, SubmissionState::Completed(_))
    }

    pub fn result(&self) -> Option<&SubmissionResult> {
        match &self.state {
            SubmissionState::Completed(result) => Some(result),
            _ => None,
        }
    }

    /// Handle an event and return the new machine plus effects
    ///
    /// Events that do not apply to the current state are ignored.
    pub fn transition(
        &self,
        event: SubmissionEvent,
        ids: &impl IdGen,
    ) -> (SubmissionMachine, Vec<Effect>) {
        let mut next = self.clone();
        let mut effects = Vec::new();

        match (&self.state, event) {
            (SubmissionState::Idle | SubmissionState::Completed(_), SubmissionEvent::Submit) => {
                next.state = SubmissionState::Validating;
            }

            (SubmissionState::Validating, SubmissionEvent::Validated(Ok(()))) => {
                next.state = SubmissionState::Submitting(Stage::Authoritative);
                effects.push(Effect::View(ViewUpdate::SetSubmit {
                    enabled: false,
                    label: self.kind.busy_label().to_string(),
                }));
                effects.push(Effect::RunSteps {
                    steps: vec![self.plan.authoritative],
                    concurrent: false,
                });
            }

            (SubmissionState::Validating, SubmissionEvent::Validated(Err(errors))) => {
                let message = errors.summary();
                effects.push(Effect::View(ViewUpdate::ShowFieldErrors(errors)));
                next.fail(message, &mut effects);
            }

            (
                SubmissionState::Submitting(Stage::Authoritative),
                SubmissionEvent::StepFinished { step, outcome },
            ) if self.plan.policy(step) == Some(StepPolicy::Authoritative) => match outcome {
                StepOutcome::Succeeded { confirmation_id } => {
                    let confirmation_id = confirmation_id
                        .filter(|id| !id.trim().is_empty())
                        .unwrap_or_else(|| ids.next());
                    if self.plan.secondary.is_empty() {
                        next.succeed(confirmation_id, &mut effects);
                    } else {
                        next.state = SubmissionState::Submitting(Stage::Secondary {
                            confirmation_id,
                            pending: self.plan.secondary.clone(),
                        });
                        effects.push(Effect::RunSteps {
                            steps: self.plan.secondary.clone(),
                            concurrent: self.concurrent_secondary,
                        });
                    }
                }
                StepOutcome::Failed { error } => {
                    let message = if error.trim().is_empty() {
                        self.kind.fallback_failure().to_string()
                    } else {
                        error
                    };
                    next.fail(message, &mut effects);
                }
            },

            (
                SubmissionState::Submitting(Stage::Secondary {
                    confirmation_id,
                    pending,
                }),
                SubmissionEvent::StepFinished { step, outcome },
            ) if pending.contains(&step) => {
                if let StepOutcome::Failed { error } = outcome {
                    effects.push(Effect::ReportSecondaryFailure { step, error });
                }
                let pending: Vec<Step> = pending.iter().copied().filter(|s| *s != step).collect();
                if pending.is_empty() {
                    next.succeed(confirmation_id.clone(), &mut effects);
                } else {
                    next.state = SubmissionState::Submitting(Stage::Secondary {
                        confirmation_id: confirmation_id.clone(),
                        pending,
                    });
                }
            }

            // Duplicate submits while busy, stale step results, and validation
            // results outside Validating leave the machine untouched
            _ => {}
        }

        (next, effects)
    }

    fn succeed(&mut self, confirmation_id: String, effects: &mut Vec<Effect>) {
        match self.kind {
            FormKind::Booking => {
                effects.push(Effect::View(ViewUpdate::HideForm));
                effects.push(Effect::View(ViewUpdate::ShowConfirmation {
                    confirmation_id: confirmation_id.clone(),
                }));
            }
            FormKind::Contact => {
                effects.push(Effect::View(ViewUpdate::ResetForm));
                effects.push(Effect::View(ViewUpdate::HideForm));
                effects.push(Effect::View(ViewUpdate::ShowConfirmation {
                    confirmation_id: confirmation_id.clone(),
                }));
                effects.push(Effect::ScheduleView {
                    after: self.timing.form_restore,
                    update: ViewUpdate::ShowForm,
                });
                effects.push(Effect::ScheduleView {
                    after: self.timing.error_display,
                    update: ViewUpdate::DismissConfirmation,
                });
                effects.push(self.enable_submit());
            }
        }
        self.state = SubmissionState::Completed(SubmissionResult::Success { confirmation_id });
    }

    fn fail(&mut self, message: String, effects: &mut Vec<Effect>) {
        effects.push(Effect::View(ViewUpdate::ShowError {
            message: message.clone(),
        }));
        effects.push(Effect::ScheduleView {
            after: self.timing.error_display,
            update: ViewUpdate::DismissError,
        });
        effects.push(self.enable_submit());
        self.state = SubmissionState::Completed(SubmissionResult::Failure { message });
    }

    fn enable_submit(&self) -> Effect {
        Effect::View(ViewUpdate::SetSubmit {
            enabled: true,
            label: self.kind.idle_label().to_string(),
        })
    }
}

#[cfg(test)]
#[path = "state_tests.rs"]
mod tests;
