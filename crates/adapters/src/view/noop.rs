// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Headless view.

use super::{FormView, ViewError};
use async_trait::async_trait;
use formflow_core::ViewUpdate;

/// View that renders nothing.
///
/// Used when a pipeline runs without a page, e.g. batch submissions.
#[derive(Clone, Copy, Debug, Default)]
pub struct NoOpView;

impl NoOpView {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl FormView for NoOpView {
    async fn render(&self, _update: ViewUpdate) -> Result<(), ViewError> {
        Ok(())
    }
}
