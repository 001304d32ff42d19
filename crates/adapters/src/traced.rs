// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Traced adapter wrappers for consistent observability

use crate::notify::{NotifyAdapter, NotifyError};
use crate::record::{RecordAdapter, RecordError, RecordReceipt};
use crate::tracking::{TrackingAdapter, TrackingError};
use crate::Ack;
use async_trait::async_trait;
use formflow_core::{FormSubmission, LeadEvent, Notification};
use tracing::Instrument;

/// Wrapper that adds tracing to any RecordAdapter
#[derive(Clone)]
pub struct TracedRecordAdapter<R> {
    inner: R,
}

impl<R> TracedRecordAdapter<R> {
    pub fn new(inner: R) -> Self {
        Self { inner }
    }
}

#[async_trait]
impl<R: RecordAdapter> RecordAdapter for TracedRecordAdapter<R> {
    async fn submit(&self, form: &FormSubmission) -> Result<RecordReceipt, RecordError> {
        let span = tracing::info_span!("record.submit", form = %form.kind());

        async {
            tracing::info!(fields = form.fields().len(), "starting");

            let start = std::time::Instant::now();
            let result = self.inner.submit(form).await;
            let elapsed = start.elapsed();

            match &result {
                Ok(receipt) if receipt.success => tracing::info!(
                    confirmation_id = receipt.confirmation_id.as_deref().unwrap_or(""),
                    elapsed_ms = elapsed.as_millis() as u64,
                    "record created"
                ),
                Ok(receipt) => tracing::warn!(
                    elapsed_ms = elapsed.as_millis() as u64,
                    error = receipt.error.as_deref().unwrap_or(""),
                    "record rejected"
                ),
                Err(e) => tracing::error!(
                    elapsed_ms = elapsed.as_millis() as u64,
                    error = %e,
                    "submit failed"
                ),
            }

            result
        }
        .instrument(span)
        .await
    }
}

/// Wrapper that adds tracing to any TrackingAdapter
#[derive(Clone)]
pub struct TracedTrackingAdapter<T> {
    inner: T,
}

impl<T> TracedTrackingAdapter<T> {
    pub fn new(inner: T) -> Self {
        Self { inner }
    }
}

#[async_trait]
impl<T: TrackingAdapter> TrackingAdapter for TracedTrackingAdapter<T> {
    async fn track(&self, lead: &LeadEvent) -> Result<Ack, TrackingError> {
        let span = tracing::info_span!("tracking.track", form = %lead.form);

        async {
            tracing::debug!(form_url = %lead.form_url, "tracking lead");

            let start = std::time::Instant::now();
            let result = self.inner.track(lead).await;
            let elapsed = start.elapsed();

            match &result {
                Ok(ack) => tracing::info!(
                    elapsed_ms = elapsed.as_millis() as u64,
                    accepted = ack.success,
                    "tracked"
                ),
                Err(e) => tracing::warn!(
                    elapsed_ms = elapsed.as_millis() as u64,
                    error = %e,
                    "track failed"
                ),
            }

            result
        }
        .instrument(span)
        .await
    }
}

/// Wrapper that adds tracing to any NotifyAdapter
#[derive(Clone)]
pub struct TracedNotifyAdapter<N> {
    inner: N,
}

impl<N> TracedNotifyAdapter<N> {
    pub fn new(inner: N) -> Self {
        Self { inner }
    }
}

#[async_trait]
impl<N: NotifyAdapter> NotifyAdapter for TracedNotifyAdapter<N> {
    async fn notify(&self, notification: &Notification) -> Result<Ack, NotifyError> {
        let span = tracing::info_span!("notify.send", kind = notification.name());

        async {
            let start = std::time::Instant::now();
            let result = self.inner.notify(notification).await;
            let elapsed = start.elapsed();

            match &result {
                Ok(ack) => tracing::info!(
                    elapsed_ms = elapsed.as_millis() as u64,
                    accepted = ack.success,
                    "sent"
                ),
                Err(e) => tracing::warn!(
                    elapsed_ms = elapsed.as_millis() as u64,
                    error = %e,
                    "send failed"
                ),
            }

            result
        }
        .instrument(span)
        .await
    }
}

#[cfg(test)]
#[path = "traced_tests.rs"]
mod tests;
