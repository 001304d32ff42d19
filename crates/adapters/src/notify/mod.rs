// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Notification (email) adapters

mod http;
mod noop;

pub use http::HttpNotifyAdapter;
pub use noop::NoOpNotifyAdapter;

// Test support - only compiled for tests or when explicitly requested
#[cfg(any(test, feature = "test-support"))]
mod fake;
#[cfg(any(test, feature = "test-support"))]
pub use fake::FakeNotifyAdapter;

use crate::Ack;
use async_trait::async_trait;
use formflow_core::Notification;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum NotifyError {
    #[error(transparent)]
    Http(#[from] crate::http::HttpError),
    #[error("notification failed: {0}")]
    Failed(String),
}

/// Adapter trait for notification delivery
#[async_trait]
pub trait NotifyAdapter: Clone + Send + Sync + 'static {
    /// Deliver a notification
    async fn notify(&self, notification: &Notification) -> Result<Ack, NotifyError>;
}
