// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Effects requested by the submission state machine

use crate::submission::Step;
use crate::traced::TracedEffect;
use crate::validate::FieldErrors;
use std::time::Duration;

/// Side effects the state machine asks its runner to perform
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    /// Apply an update to the host view now
    View(ViewUpdate),
    /// Apply an update to the host view after a delay
    ScheduleView { after: Duration, update: ViewUpdate },
    /// Call external collaborators, feeding each outcome back as an event
    RunSteps { steps: Vec<Step>, concurrent: bool },
    /// A best-effort step failed; record it for operators, never the user
    ReportSecondaryFailure { step: Step, error: String },
}

/// Changes to the host page
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ViewUpdate {
    /// Enable or disable the submit control and set its label
    SetSubmit { enabled: bool, label: String },
    /// Inline messages next to rejected fields
    ShowFieldErrors(FieldErrors),
    /// Transient error banner
    ShowError { message: String },
    DismissError,
    HideForm,
    ShowForm,
    ResetForm,
    /// Confirmation view with the identifier
    ShowConfirmation { confirmation_id: String },
    DismissConfirmation,
}

impl ViewUpdate {
    /// Whether this update ends a submission attempt as far as the user sees
    pub fn is_terminal(&self) -> bool {
        matches!(
            self,
            ViewUpdate::ShowError { .. } | ViewUpdate::ShowConfirmation { .. }
        )
    }

    pub fn name(&self) -> &'static str {
        match self {
            ViewUpdate::SetSubmit { .. } => "set_submit",
            ViewUpdate::ShowFieldErrors(_) => "show_field_errors",
            ViewUpdate::ShowError { .. } => "show_error",
            ViewUpdate::DismissError => "dismiss_error",
            ViewUpdate::HideForm => "hide_form",
            ViewUpdate::ShowForm => "show_form",
            ViewUpdate::ResetForm => "reset_form",
            ViewUpdate::ShowConfirmation { .. } => "show_confirmation",
            ViewUpdate::DismissConfirmation => "dismiss_confirmation",
        }
    }
}

impl TracedEffect for Effect {
    fn name(&self) -> &'static str {
        match self {
            Effect::View(_) => "view",
            Effect::ScheduleView { .. } => "schedule_view",
            Effect::RunSteps { .. } => "run_steps",
            Effect::ReportSecondaryFailure { .. } => "report_secondary_failure",
        }
    }

    fn fields(&self) -> Vec<(&'static str, String)> {
        match self {
            Effect::View(update) => vec![("update", update.name().to_string())],
            Effect::ScheduleView { after, update } => vec![
                ("update", update.name().to_string()),
                ("after_ms", after.as_millis().to_string()),
            ],
            Effect::RunSteps { steps, concurrent } => vec![
                (
                    "steps",
                    steps
                        .iter()
                        .map(|s| s.name())
                        .collect::<Vec<_>>()
                        .join(","),
                ),
                ("concurrent", concurrent.to_string()),
            ],
            Effect::ReportSecondaryFailure { step, error } => vec![
                ("step", step.name().to_string()),
                ("error", error.clone()),
            ],
        }
    }
}

#[cfg(test)]
#[path = "effect_tests.rs"]
mod tests;
