// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Fake notification adapter for testing
#![cfg_attr(coverage_nightly, coverage(off))]

use super::{NotifyAdapter, NotifyError};
use crate::Ack;
use async_trait::async_trait;
use formflow_core::Notification;
use std::sync::{Arc, Mutex};
use std::time::Duration;

#[derive(Debug, Default)]
struct FakeState {
    error: Option<String>,
    ack: Ack,
    delay: Option<Duration>,
    calls: Vec<Notification>,
}

/// Fake notification adapter for testing
#[derive(Clone, Default)]
pub struct FakeNotifyAdapter {
    inner: Arc<Mutex<FakeState>>,
}

impl FakeNotifyAdapter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Fail every delivery with the given error
    pub fn failing(error: impl Into<String>) -> Self {
        let fake = Self::new();
        fake.lock().error = Some(error.into());
        fake
    }

    /// Answer every delivery with a negative acknowledgement
    pub fn rejecting(error: impl Into<String>) -> Self {
        let fake = Self::new();
        fake.lock().ack = Ack::rejected(error);
        fake
    }

    pub fn with_delay(self, delay: Duration) -> Self {
        self.lock().delay = Some(delay);
        self
    }

    /// Get all recorded notifications
    pub fn calls(&self) -> Vec<Notification> {
        self.lock().calls.clone()
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, FakeState> {
        self.inner.lock().unwrap_or_else(|e| e.into_inner())
    }
}

#[async_trait]
impl NotifyAdapter for FakeNotifyAdapter {
    async fn notify(&self, notification: &Notification) -> Result<Ack, NotifyError> {
        let (error, ack, delay) = {
            let mut state = self.lock();
            state.calls.push(notification.clone());
            (state.error.clone(), state.ack.clone(), state.delay)
        };
        if let Some(delay) = delay {
            tokio::time::sleep(delay).await;
        }
        match error {
            Some(message) => Err(NotifyError::Failed(message)),
            None => Ok(ack),
        }
    }
}

#[cfg(test)]
#[path = "fake_tests.rs"]
mod tests;
