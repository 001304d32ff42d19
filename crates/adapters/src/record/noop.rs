// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! No-op record adapter for when no record service is configured.

use super::{RecordAdapter, RecordError, RecordReceipt};
use async_trait::async_trait;
use formflow_core::FormSubmission;

/// Record adapter that accepts everything without a confirmation id.
///
/// The pipeline then falls back to a generated identifier.
#[derive(Clone, Copy, Debug, Default)]
pub struct NoOpRecordAdapter;

impl NoOpRecordAdapter {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl RecordAdapter for NoOpRecordAdapter {
    async fn submit(&self, _form: &FormSubmission) -> Result<RecordReceipt, RecordError> {
        Ok(RecordReceipt::accepted())
    }
}
