// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Side-effect steps and their failure policy

use crate::form::FormKind;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A call to one external collaborator
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Step {
    /// Create the primary business record
    CreateRecord,
    /// Report the lead to call/lead tracking
    TrackLead,
    /// Send an email notification
    SendNotification,
}

impl Step {
    pub fn name(&self) -> &'static str {
        match self {
            Step::CreateRecord => "create_record",
            Step::TrackLead => "track_lead",
            Step::SendNotification => "send_notification",
        }
    }
}

impl fmt::Display for Step {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// What a step's failure means for the submission
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StepPolicy {
    /// Failure fails the submission and skips the remaining steps
    Authoritative,
    /// Failure is logged and otherwise ignored
    BestEffort,
}

/// Result of running one step
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StepOutcome {
    Succeeded { confirmation_id: Option<String> },
    Failed { error: String },
}

impl StepOutcome {
    pub fn succeeded() -> Self {
        StepOutcome::Succeeded {
            confirmation_id: None,
        }
    }

    pub fn failed(error: impl Into<String>) -> Self {
        StepOutcome::Failed {
            error: error.into(),
        }
    }
}

/// Ordered steps for one form: an authoritative step, then best-effort ones
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StepPlan {
    pub authoritative: Step,
    pub secondary: Vec<Step>,
}

impl StepPlan {
    /// Bookings create the record, then track the lead and email the customer.
    /// Contact messages are delivered to the shop, then the lead is tracked.
    pub fn for_kind(kind: FormKind) -> Self {
        match kind {
            FormKind::Booking => Self {
                authoritative: Step::CreateRecord,
                secondary: vec![Step::TrackLead, Step::SendNotification],
            },
            FormKind::Contact => Self {
                authoritative: Step::SendNotification,
                secondary: vec![Step::TrackLead],
            },
        }
    }

    pub fn policy(&self, step: Step) -> Option<StepPolicy> {
        if step == self.authoritative {
            Some(StepPolicy::Authoritative)
        } else if self.secondary.contains(&step) {
            Some(StepPolicy::BestEffort)
        } else {
            None
        }
    }
}
