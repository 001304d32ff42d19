// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Fake view for testing
#![cfg_attr(coverage_nightly, coverage(off))]

use super::{FormView, ViewError};
use async_trait::async_trait;
use formflow_core::ViewUpdate;
use std::sync::{Arc, Mutex};
use tokio::time::Instant;

/// Records every update with the (tokio) time it arrived
#[derive(Clone)]
pub struct FakeView {
    started: Instant,
    updates: Arc<Mutex<Vec<(Instant, ViewUpdate)>>>,
    failure: Option<String>,
}

impl Default for FakeView {
    fn default() -> Self {
        Self {
            started: Instant::now(),
            updates: Arc::new(Mutex::new(Vec::new())),
            failure: None,
        }
    }
}

impl FakeView {
    pub fn new() -> Self {
        Self::default()
    }

    /// A view that records every update and then reports a render failure
    pub fn failing(message: impl Into<String>) -> Self {
        Self {
            failure: Some(message.into()),
            ..Self::default()
        }
    }

    /// All updates in arrival order
    pub fn updates(&self) -> Vec<ViewUpdate> {
        self.lock().iter().map(|(_, u)| u.clone()).collect()
    }

    /// Updates paired with their offset from the view's creation
    pub fn timed_updates(&self) -> Vec<(std::time::Duration, ViewUpdate)> {
        self.lock()
            .iter()
            .map(|(at, u)| (at.duration_since(self.started), u.clone()))
            .collect()
    }

    /// Terminal updates (confirmation or error) seen so far
    pub fn terminal_updates(&self) -> Vec<ViewUpdate> {
        self.updates()
            .into_iter()
            .filter(ViewUpdate::is_terminal)
            .collect()
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, Vec<(Instant, ViewUpdate)>> {
        self.updates.lock().unwrap_or_else(|e| e.into_inner())
    }
}

#[async_trait]
impl FormView for FakeView {
    async fn render(&self, update: ViewUpdate) -> Result<(), ViewError> {
        self.lock().push((Instant::now(), update));
        match &self.failure {
            Some(message) => Err(ViewError::Render(message.clone())),
            None => Ok(()),
        }
    }
}

#[cfg(test)]
#[path = "fake_tests.rs"]
mod tests;
