// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Effect executor

use crate::error::StepError;
use crate::PipelineDeps;
use formflow_adapters::{FormView, NotifyAdapter, RecordAdapter, TrackingAdapter, ViewError};
use formflow_core::submission::StepPolicy;
use formflow_core::{
    BookingRules, Effect, FormKind, FormSubmission, LeadEvent, Notification, Step, StepOutcome,
    StepPlan, SubmissionEvent,
};
use std::time::Duration;
use thiserror::Error;
use tracing::Instrument;

/// Errors that can occur during effect execution
///
/// Collaborator failures never surface here; they come back as
/// `StepFinished` events carrying a failed outcome.
#[derive(Debug, Error)]
pub enum ExecuteError {
    #[error("view error: {0}")]
    View(#[from] ViewError),
}

/// What the steps of one submission need to build their requests
#[derive(Debug, Clone, Copy)]
pub struct StepContext<'a> {
    pub form: &'a FormSubmission,
    pub plan: &'a StepPlan,
    /// Set once the authoritative step has succeeded
    pub confirmation_id: Option<&'a str>,
}

/// Executes effects using the configured adapters
pub struct Executor<R, T, N, V> {
    record: R,
    tracking: T,
    notify: N,
    view: V,
    rules: BookingRules,
    step_timeout: Duration,
}

impl<R, T, N, V> Executor<R, T, N, V>
where
    R: RecordAdapter,
    T: TrackingAdapter,
    N: NotifyAdapter,
    V: FormView,
{
    /// Create a new executor
    pub fn new(deps: PipelineDeps<R, T, N, V>, rules: BookingRules, step_timeout: Duration) -> Self {
        Self {
            record: deps.record,
            tracking: deps.tracking,
            notify: deps.notify,
            view: deps.view,
            rules,
            step_timeout,
        }
    }

    pub fn view(&self) -> &V {
        &self.view
    }

    /// Execute a single effect with tracing
    ///
    /// Returns the events that should be fed back into the state machine.
    pub async fn execute(
        &self,
        effect: Effect,
        ctx: &StepContext<'_>,
    ) -> Result<Vec<SubmissionEvent>, ExecuteError> {
        use formflow_core::TracedEffect;

        let span = tracing::info_span!("effect", effect = effect.name());

        async {
            tracing::debug!(fields = ?effect.fields(), "executing");

            let start = std::time::Instant::now();
            let result = self.execute_inner(effect, ctx).await;
            let elapsed = start.elapsed();

            match &result {
                Ok(events) => tracing::debug!(
                    elapsed_ms = elapsed.as_millis() as u64,
                    events = events.len(),
                    "completed"
                ),
                Err(e) => tracing::error!(
                    elapsed_ms = elapsed.as_millis() as u64,
                    error = %e,
                    "failed"
                ),
            }

            result
        }
        .instrument(span)
        .await
    }

    async fn execute_inner(
        &self,
        effect: Effect,
        ctx: &StepContext<'_>,
    ) -> Result<Vec<SubmissionEvent>, ExecuteError> {
        match effect {
            Effect::View(update) => {
                self.view.render(update).await?;
                Ok(Vec::new())
            }

            Effect::ScheduleView { after, update } => {
                let view = self.view.clone();
                tokio::spawn(
                    async move {
                        tokio::time::sleep(after).await;
                        if let Err(e) = view.render(update).await {
                            tracing::warn!(error = %e, "scheduled view update failed");
                        }
                    }
                    .in_current_span(),
                );
                Ok(Vec::new())
            }

            Effect::RunSteps { steps, concurrent } => {
                let events = if concurrent {
                    futures::future::join_all(steps.into_iter().map(|step| self.run_step(step, ctx)))
                        .await
                } else {
                    let mut events = Vec::with_capacity(steps.len());
                    for step in steps {
                        events.push(self.run_step(step, ctx).await);
                    }
                    events
                };
                Ok(events)
            }

            Effect::ReportSecondaryFailure { step, error } => {
                tracing::warn!(step = %step, error = %error, "secondary step failed");
                Ok(Vec::new())
            }
        }
    }

    /// Run one step under the step timeout and report how it went
    async fn run_step(&self, step: Step, ctx: &StepContext<'_>) -> SubmissionEvent {
        let result = match tokio::time::timeout(self.step_timeout, self.call(step, ctx)).await {
            Ok(result) => result,
            Err(_) => Err(StepError::TimedOut {
                step,
                after: self.step_timeout,
            }),
        };

        let outcome = match result {
            Ok(confirmation_id) => StepOutcome::Succeeded { confirmation_id },
            Err(e) => match ctx.plan.policy(step) {
                Some(StepPolicy::Authoritative) => {
                    tracing::error!(step = %step, error = %e, "authoritative step failed");
                    StepOutcome::failed(e.user_message())
                }
                _ => StepOutcome::failed(e.to_string()),
            },
        };

        SubmissionEvent::StepFinished { step, outcome }
    }

    async fn call(&self, step: Step, ctx: &StepContext<'_>) -> Result<Option<String>, StepError> {
        match step {
            Step::CreateRecord => {
                let receipt = self.record.submit(ctx.form).await?;
                accepted(receipt.success, receipt.error)?;
                Ok(receipt.confirmation_id)
            }

            Step::TrackLead => {
                let ack = self
                    .tracking
                    .track(&LeadEvent::from_submission(ctx.form))
                    .await?;
                accepted(ack.success, ack.error)?;
                Ok(None)
            }

            Step::SendNotification => {
                let notification = match ctx.form.kind() {
                    FormKind::Booking => Notification::booking_confirmation(
                        ctx.form,
                        ctx.confirmation_id.unwrap_or_default(),
                        &self.rules,
                    ),
                    FormKind::Contact => Notification::contact(ctx.form),
                };
                let ack = self.notify.notify(&notification).await?;
                accepted(ack.success, ack.error)?;
                Ok(None)
            }
        }
    }
}

/// A negative answer becomes a rejection carrying the service's reason
fn accepted(success: bool, error: Option<String>) -> Result<(), StepError> {
    if success {
        Ok(())
    } else {
        Err(StepError::Rejected(error.unwrap_or_default()))
    }
}

#[cfg(test)]
#[path = "executor_tests.rs"]
mod tests;
