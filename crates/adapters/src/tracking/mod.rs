// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Lead-tracking adapters

mod http;
mod noop;

pub use http::HttpTrackingAdapter;
pub use noop::NoOpTrackingAdapter;

// Test support - only compiled for tests or when explicitly requested
#[cfg(any(test, feature = "test-support"))]
mod fake;
#[cfg(any(test, feature = "test-support"))]
pub use fake::FakeTrackingAdapter;

use crate::Ack;
use async_trait::async_trait;
use formflow_core::LeadEvent;
use thiserror::Error;

/// Errors from lead tracking
#[derive(Debug, Error)]
pub enum TrackingError {
    #[error(transparent)]
    Http(#[from] crate::http::HttpError),
    #[error("tracking unavailable: {0}")]
    Unavailable(String),
}

/// Adapter for call/lead tracking
#[async_trait]
pub trait TrackingAdapter: Clone + Send + Sync + 'static {
    /// Report a form submission as a lead
    async fn track(&self, lead: &LeadEvent) -> Result<Ack, TrackingError>;
}
