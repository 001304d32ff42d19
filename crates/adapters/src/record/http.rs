// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Record service over HTTP

use super::{RecordAdapter, RecordError, RecordReceipt};
use crate::http::{self, post_json};
use async_trait::async_trait;
use formflow_core::payload::{BookingRecord, ContactMessage};
use formflow_core::{Clock, FormKind, FormSubmission, SystemClock};
use serde::Serialize;
use std::time::Duration;

#[derive(Serialize)]
#[serde(tag = "form", rename_all = "snake_case")]
enum RecordBody {
    Booking(BookingRecord),
    Contact(ContactMessage),
}

/// POSTs the record as JSON and reads a `RecordReceipt` back
#[derive(Clone)]
pub struct HttpRecordAdapter<C = SystemClock> {
    agent: ureq::Agent,
    url: String,
    clock: C,
}

impl HttpRecordAdapter<SystemClock> {
    /// Requests to `url` give up after `timeout`
    pub fn new(url: impl Into<String>, timeout: Duration) -> Self {
        Self::with_clock(url, timeout, SystemClock)
    }
}

impl<C: Clock> HttpRecordAdapter<C> {
    pub fn with_clock(url: impl Into<String>, timeout: Duration, clock: C) -> Self {
        Self {
            agent: http::agent(timeout),
            url: url.into(),
            clock,
        }
    }
}

#[async_trait]
impl<C: Clock + 'static> RecordAdapter for HttpRecordAdapter<C> {
    async fn submit(&self, form: &FormSubmission) -> Result<RecordReceipt, RecordError> {
        let body = match form.kind() {
            FormKind::Booking => {
                RecordBody::Booking(BookingRecord::from_submission(form, self.clock.today()))
            }
            FormKind::Contact => RecordBody::Contact(ContactMessage::from_submission(form)),
        };
        Ok(post_json(&self.agent, &self.url, &body).await?)
    }
}

#[cfg(test)]
#[path = "http_tests.rs"]
mod tests;
