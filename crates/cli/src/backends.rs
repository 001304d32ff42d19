// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Adapter selection from configured endpoints
//!
//! An endpoint that is set gets the HTTP adapter; an absent one gets the
//! no-op adapter. Either way the adapter is wrapped for tracing.

use crate::view::ConsoleView;
use async_trait::async_trait;
use formflow_adapters::{
    Ack, HttpNotifyAdapter, HttpRecordAdapter, HttpTrackingAdapter, NoOpNotifyAdapter,
    NoOpRecordAdapter, NoOpTrackingAdapter, NotifyAdapter, NotifyError, RecordAdapter,
    RecordError, RecordReceipt, TracedNotifyAdapter, TracedRecordAdapter, TracedTrackingAdapter,
    TrackingAdapter, TrackingError,
};
use formflow_core::config::Endpoints;
use formflow_core::{FormSubmission, LeadEvent, Notification};
use formflow_engine::PipelineDeps;
use std::time::Duration;

#[derive(Clone)]
pub enum RecordBackend {
    Http(HttpRecordAdapter),
    NoOp(NoOpRecordAdapter),
}

#[async_trait]
impl RecordAdapter for RecordBackend {
    async fn submit(&self, form: &FormSubmission) -> Result<RecordReceipt, RecordError> {
        match self {
            RecordBackend::Http(adapter) => adapter.submit(form).await,
            RecordBackend::NoOp(adapter) => adapter.submit(form).await,
        }
    }
}

#[derive(Clone)]
pub enum TrackingBackend {
    Http(HttpTrackingAdapter),
    NoOp(NoOpTrackingAdapter),
}

#[async_trait]
impl TrackingAdapter for TrackingBackend {
    async fn track(&self, lead: &LeadEvent) -> Result<Ack, TrackingError> {
        match self {
            TrackingBackend::Http(adapter) => adapter.track(lead).await,
            TrackingBackend::NoOp(adapter) => adapter.track(lead).await,
        }
    }
}

#[derive(Clone)]
pub enum NotifyBackend {
    Http(HttpNotifyAdapter),
    NoOp(NoOpNotifyAdapter),
}

#[async_trait]
impl NotifyAdapter for NotifyBackend {
    async fn notify(&self, notification: &Notification) -> Result<Ack, NotifyError> {
        match self {
            NotifyBackend::Http(adapter) => adapter.notify(notification).await,
            NotifyBackend::NoOp(adapter) => adapter.notify(notification).await,
        }
    }
}

pub type CliDeps = PipelineDeps<
    TracedRecordAdapter<RecordBackend>,
    TracedTrackingAdapter<TrackingBackend>,
    TracedNotifyAdapter<NotifyBackend>,
    ConsoleView,
>;

/// Build the pipeline's collaborators for the configured endpoints
///
/// HTTP requests share the step timeout, so a request the pipeline has
/// given up on does not outlive it.
pub fn pipeline_deps(endpoints: &Endpoints, timeout: Duration, view: ConsoleView) -> CliDeps {
    let record = match &endpoints.record {
        Some(url) => RecordBackend::Http(HttpRecordAdapter::new(url, timeout)),
        None => RecordBackend::NoOp(NoOpRecordAdapter),
    };
    let tracking = match &endpoints.tracking {
        Some(url) => TrackingBackend::Http(HttpTrackingAdapter::new(url, timeout)),
        None => TrackingBackend::NoOp(NoOpTrackingAdapter),
    };
    let notify = match &endpoints.notify {
        Some(url) => NotifyBackend::Http(HttpNotifyAdapter::new(url, timeout)),
        None => NotifyBackend::NoOp(NoOpNotifyAdapter),
    };

    PipelineDeps {
        record: TracedRecordAdapter::new(record),
        tracking: TracedTrackingAdapter::new(tracking),
        notify: TracedNotifyAdapter::new(notify),
        view,
    }
}
