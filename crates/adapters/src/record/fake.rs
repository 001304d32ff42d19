// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Fake record adapter for testing
#![cfg_attr(coverage_nightly, coverage(off))]

use super::{RecordAdapter, RecordError, RecordReceipt};
use async_trait::async_trait;
use formflow_core::FormSubmission;
use std::sync::{Arc, Mutex};
use std::time::Duration;

#[derive(Debug, Clone)]
enum Script {
    Receipt(RecordReceipt),
    Error(String),
}

#[derive(Debug)]
struct FakeState {
    script: Script,
    delay: Option<Duration>,
    calls: Vec<FormSubmission>,
}

/// Fake record adapter that records calls and returns a scripted response
#[derive(Clone)]
pub struct FakeRecordAdapter {
    inner: Arc<Mutex<FakeState>>,
}

impl Default for FakeRecordAdapter {
    fn default() -> Self {
        Self {
            inner: Arc::new(Mutex::new(FakeState {
                script: Script::Receipt(RecordReceipt::accepted()),
                delay: None,
                calls: Vec::new(),
            })),
        }
    }
}

impl FakeRecordAdapter {
    /// Accepts every submission without a confirmation id
    pub fn new() -> Self {
        Self::default()
    }

    /// Accept with the given confirmation id
    pub fn confirming(confirmation_id: impl Into<String>) -> Self {
        let fake = Self::new();
        fake.set_receipt(RecordReceipt::confirmed(confirmation_id));
        fake
    }

    /// Answer with `success: false`
    pub fn rejecting(error: impl Into<String>) -> Self {
        let fake = Self::new();
        fake.set_receipt(RecordReceipt::rejected(error));
        fake
    }

    /// Fail at the transport level
    pub fn failing(error: impl Into<String>) -> Self {
        let fake = Self::new();
        fake.lock().script = Script::Error(error.into());
        fake
    }

    pub fn set_receipt(&self, receipt: RecordReceipt) {
        self.lock().script = Script::Receipt(receipt);
    }

    /// Sleep before answering
    pub fn with_delay(self, delay: Duration) -> Self {
        self.lock().delay = Some(delay);
        self
    }

    /// Get all recorded submissions
    pub fn calls(&self) -> Vec<FormSubmission> {
        self.lock().calls.clone()
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, FakeState> {
        self.inner.lock().unwrap_or_else(|e| e.into_inner())
    }
}

#[async_trait]
impl RecordAdapter for FakeRecordAdapter {
    async fn submit(&self, form: &FormSubmission) -> Result<RecordReceipt, RecordError> {
        let (script, delay) = {
            let mut state = self.lock();
            state.calls.push(form.clone());
            (state.script.clone(), state.delay)
        };
        if let Some(delay) = delay {
            tokio::time::sleep(delay).await;
        }
        match script {
            Script::Receipt(receipt) => Ok(receipt),
            Script::Error(message) => Err(RecordError::Unavailable(message)),
        }
    }
}

#[cfg(test)]
#[path = "fake_tests.rs"]
mod tests;
