// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Lead tracking over HTTP

use super::{TrackingAdapter, TrackingError};
use crate::http::{self, post_json};
use crate::Ack;
use async_trait::async_trait;
use formflow_core::LeadEvent;
use std::time::Duration;

#[derive(Clone)]
pub struct HttpTrackingAdapter {
    agent: ureq::Agent,
    url: String,
}

impl HttpTrackingAdapter {
    /// Requests to `url` give up after `timeout`
    pub fn new(url: impl Into<String>, timeout: Duration) -> Self {
        Self {
            agent: http::agent(timeout),
            url: url.into(),
        }
    }
}

#[async_trait]
impl TrackingAdapter for HttpTrackingAdapter {
    async fn track(&self, lead: &LeadEvent) -> Result<Ack, TrackingError> {
        Ok(post_json(&self.agent, &self.url, lead).await?)
    }
}

#[cfg(test)]
#[path = "http_tests.rs"]
mod tests;
