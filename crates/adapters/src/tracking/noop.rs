// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! No-op tracking adapter for when lead tracking is disabled.

use super::{TrackingAdapter, TrackingError};
use crate::Ack;
use async_trait::async_trait;
use formflow_core::LeadEvent;

#[derive(Clone, Copy, Debug, Default)]
pub struct NoOpTrackingAdapter;

impl NoOpTrackingAdapter {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl TrackingAdapter for NoOpTrackingAdapter {
    async fn track(&self, _lead: &LeadEvent) -> Result<Ack, TrackingError> {
        Ok(Ack::ok())
    }
}
