// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Fake tracking adapter for testing
#![cfg_attr(coverage_nightly, coverage(off))]

use super::{TrackingAdapter, TrackingError};
use crate::Ack;
use async_trait::async_trait;
use formflow_core::LeadEvent;
use std::sync::{Arc, Mutex};
use std::time::Duration;

#[derive(Debug, Default)]
struct FakeState {
    error: Option<String>,
    ack: Ack,
    delay: Option<Duration>,
    calls: Vec<LeadEvent>,
}

/// Fake tracking adapter that records leads
#[derive(Clone, Default)]
pub struct FakeTrackingAdapter {
    inner: Arc<Mutex<FakeState>>,
}

impl FakeTrackingAdapter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Fail every call with the given error
    pub fn failing(error: impl Into<String>) -> Self {
        let fake = Self::new();
        fake.lock().error = Some(error.into());
        fake
    }

    /// Answer every call with a negative acknowledgement
    pub fn rejecting(error: impl Into<String>) -> Self {
        let fake = Self::new();
        fake.lock().ack = Ack::rejected(error);
        fake
    }

    pub fn with_delay(self, delay: Duration) -> Self {
        self.lock().delay = Some(delay);
        self
    }

    /// Get all recorded leads
    pub fn calls(&self) -> Vec<LeadEvent> {
        self.lock().calls.clone()
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, FakeState> {
        self.inner.lock().unwrap_or_else(|e| e.into_inner())
    }
}

#[async_trait]
impl TrackingAdapter for FakeTrackingAdapter {
    async fn track(&self, lead: &LeadEvent) -> Result<Ack, TrackingError> {
        let (error, ack, delay) = {
            let mut state = self.lock();
            state.calls.push(lead.clone());
            (state.error.clone(), state.ack.clone(), state.delay)
        };
        if let Some(delay) = delay {
            tokio::time::sleep(delay).await;
        }
        match error {
            Some(message) => Err(TrackingError::Unavailable(message)),
            None => Ok(ack),
        }
    }
}

#[cfg(test)]
#[path = "fake_tests.rs"]
mod tests;
