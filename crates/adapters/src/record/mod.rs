// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Authoritative record service adapters

mod http;
mod noop;

pub use http::HttpRecordAdapter;
pub use noop::NoOpRecordAdapter;

// Test support - only compiled for tests or when explicitly requested
#[cfg(any(test, feature = "test-support"))]
mod fake;
#[cfg(any(test, feature = "test-support"))]
pub use fake::FakeRecordAdapter;

use async_trait::async_trait;
use formflow_core::FormSubmission;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors reaching the record service
#[derive(Debug, Error)]
pub enum RecordError {
    #[error(transparent)]
    Http(#[from] crate::http::HttpError),
    #[error("record service unavailable: {0}")]
    Unavailable(String),
}

/// `{ "success": bool, "confirmation_id"?: string, "error"?: string }`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecordReceipt {
    #[serde(default = "crate::ack::default_success")]
    pub success: bool,
    #[serde(
        default,
        alias = "confirmationId",
        alias = "confirmation_number",
        alias = "confirmationNumber",
        skip_serializing_if = "Option::is_none"
    )]
    pub confirmation_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl RecordReceipt {
    pub fn confirmed(confirmation_id: impl Into<String>) -> Self {
        Self {
            success: true,
            confirmation_id: Some(confirmation_id.into()),
            error: None,
        }
    }

    /// Accepted, but without a confirmation identifier
    pub fn accepted() -> Self {
        Self {
            success: true,
            confirmation_id: None,
            error: None,
        }
    }

    pub fn rejected(error: impl Into<String>) -> Self {
        Self {
            success: false,
            confirmation_id: None,
            error: Some(error.into()),
        }
    }
}

impl Default for RecordReceipt {
    fn default() -> Self {
        Self::accepted()
    }
}

/// Adapter for the service that owns the primary business record
#[async_trait]
pub trait RecordAdapter: Clone + Send + Sync + 'static {
    /// Create the record for a submission
    async fn submit(&self, form: &FormSubmission) -> Result<RecordReceipt, RecordError>;
}
