// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Host view adapters
//!
//! The view is whatever renders the form: a page runtime, a terminal, a test
//! recorder. The pipeline only ever talks to it through `ViewUpdate`s.

mod noop;

pub use noop::NoOpView;

// Test support - only compiled for tests or when explicitly requested
#[cfg(any(test, feature = "test-support"))]
mod fake;
#[cfg(any(test, feature = "test-support"))]
pub use fake::FakeView;

use async_trait::async_trait;
use formflow_core::ViewUpdate;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ViewError {
    #[error("render failed: {0}")]
    Render(String),
}

/// Adapter for the host page
#[async_trait]
pub trait FormView: Clone + Send + Sync + 'static {
    /// Apply one update
    async fn render(&self, update: ViewUpdate) -> Result<(), ViewError>;
}
