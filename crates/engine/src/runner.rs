// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Submission runner for one form instance

use crate::error::PipelineError;
use crate::executor::{Executor, StepContext};
use formflow_adapters::{FormView, NotifyAdapter, RecordAdapter, TrackingAdapter};
use formflow_core::submission::{Stage, Timing};
use formflow_core::{
    BookingRules, Clock, FlowConfig, FormKind, FormSchema, FormSubmission, IdGen,
    SubmissionEvent, SubmissionMachine, SubmissionResult, SubmissionState, ViewUpdate,
};
use std::collections::VecDeque;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Mutex;
use std::time::Duration;
use tracing::Instrument;

/// Runner adapter dependencies
pub struct PipelineDeps<R, T, N, V> {
    pub record: R,
    pub tracking: T,
    pub notify: N,
    pub view: V,
}

/// Tunables for a form pipeline
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PipelineSettings {
    pub rules: BookingRules,
    pub timing: Timing,
    pub step_timeout: Duration,
    pub concurrent_secondary: bool,
}

impl Default for PipelineSettings {
    fn default() -> Self {
        Self::from_config(&FlowConfig::default())
    }
}

impl PipelineSettings {
    pub fn from_config(config: &FlowConfig) -> Self {
        Self {
            rules: config.booking.clone(),
            timing: config.pipeline.timing(),
            step_timeout: config.pipeline.step_timeout,
            concurrent_secondary: config.pipeline.concurrent_secondary,
        }
    }
}

/// Drives submissions of one form through validation and its steps
pub struct FormPipeline<R, T, N, V, C: Clock, I: IdGen> {
    kind: FormKind,
    schema: FormSchema,
    executor: Executor<R, T, N, V>,
    machine: Mutex<SubmissionMachine>,
    in_flight: AtomicBool,
    clock: C,
    id_gen: I,
}

impl<R, T, N, V, C, I> FormPipeline<R, T, N, V, C, I>
where
    R: RecordAdapter,
    T: TrackingAdapter,
    N: NotifyAdapter,
    V: FormView,
    C: Clock,
    I: IdGen,
{
    /// Create a pipeline for one kind of form
    pub fn new(
        kind: FormKind,
        deps: PipelineDeps<R, T, N, V>,
        settings: PipelineSettings,
        clock: C,
        id_gen: I,
    ) -> Self {
        let schema = match kind {
            FormKind::Booking => FormSchema::booking(&settings.rules),
            FormKind::Contact => FormSchema::contact(),
        };
        let machine = SubmissionMachine::new(kind)
            .with_timing(settings.timing)
            .with_concurrent_secondary(settings.concurrent_secondary);

        Self {
            kind,
            schema,
            executor: Executor::new(deps, settings.rules, settings.step_timeout),
            machine: Mutex::new(machine),
            in_flight: AtomicBool::new(false),
            clock,
            id_gen,
        }
    }

    pub fn kind(&self) -> FormKind {
        self.kind
    }

    /// State left behind by the most recent submission
    pub fn state(&self) -> SubmissionState {
        self.lock_machine().state.clone()
    }

    /// Put the view in its idle state: form shown, submit enabled
    pub async fn mount(&self) {
        let view = self.executor.view();
        let updates = [
            ViewUpdate::ShowForm,
            ViewUpdate::SetSubmit {
                enabled: true,
                label: self.kind.idle_label().to_string(),
            },
        ];
        for update in updates {
            if let Err(e) = view.render(update).await {
                tracing::warn!(error = %e, "mount failed");
            }
        }
    }

    /// Run one submission attempt to completion
    ///
    /// Returns `PipelineError::InFlight` without touching any collaborator
    /// while an earlier attempt on this pipeline is still running.
    pub async fn submit_form(
        &self,
        form: FormSubmission,
    ) -> Result<SubmissionResult, PipelineError> {
        if form.kind() != self.kind {
            return Err(PipelineError::WrongKind {
                expected: self.kind,
                got: form.kind(),
            });
        }
        let _guard =
            InFlight::acquire(&self.in_flight).ok_or(PipelineError::InFlight(self.kind))?;

        let span = tracing::info_span!("submission", form = %self.kind);
        self.run(form).instrument(span).await
    }

    async fn run(&self, form: FormSubmission) -> Result<SubmissionResult, PipelineError> {
        let mut machine = self.lock_machine().clone();
        let mut queue = VecDeque::from([SubmissionEvent::Submit]);

        while let Some(event) = queue.pop_front() {
            let (next, effects) = machine.transition(event, &self.id_gen);
            if next.state != machine.state {
                tracing::debug!(from = machine.state.name(), to = next.state.name(), "transition");
            }
            machine = next;

            if machine.state == SubmissionState::Validating {
                let verdict = self.schema.validate(&form, self.clock.today());
                if let Err(errors) = &verdict {
                    tracing::info!(errors = errors.errors.len(), "validation rejected");
                }
                queue.push_back(SubmissionEvent::Validated(verdict));
            }

            let ctx = StepContext {
                form: &form,
                plan: &machine.plan,
                confirmation_id: confirmation_id(&machine.state),
            };
            for effect in effects {
                match self.executor.execute(effect, &ctx).await {
                    Ok(events) => queue.extend(events),
                    // A broken view never aborts the submission
                    Err(e) => tracing::warn!(error = %e, "effect failed"),
                }
            }
        }

        let result = machine
            .result()
            .cloned()
            .ok_or(PipelineError::Stalled(machine.state.name()));
        if let Ok(result) = &result {
            tracing::info!(result = %result, "submission finished");
        }
        *self.lock_machine() = machine;
        result
    }

    fn lock_machine(&self) -> std::sync::MutexGuard<'_, SubmissionMachine> {
        self.machine.lock().unwrap_or_else(|e| e.into_inner())
    }
}

fn confirmation_id(state: &SubmissionState) -> Option<&str> {
    match state {
        SubmissionState::Submitting(Stage::Secondary {
            confirmation_id, ..
        }) => Some(confirmation_id),
        SubmissionState::Completed(result) => result.confirmation_id(),
        _ => None,
    }
}

/// Clears the in-flight flag when the attempt ends, however it ends
struct InFlight<'a>(&'a AtomicBool);

impl<'a> InFlight<'a> {
    fn acquire(flag: &'a AtomicBool) -> Option<Self> {
        flag.compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
            .ok()
            .map(|_| InFlight(flag))
    }
}

impl Drop for InFlight<'_> {
    fn drop(&mut self) {
        self.0.store(false, Ordering::Release);
    }
}

#[cfg(test)]
#[path = "runner_tests.rs"]
mod tests;
