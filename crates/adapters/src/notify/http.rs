// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Notification delivery over HTTP

use super::{NotifyAdapter, NotifyError};
use crate::http::{self, post_json};
use crate::Ack;
use async_trait::async_trait;
use formflow_core::Notification;
use std::time::Duration;

/// POSTs the tagged notification JSON to an email relay
#[derive(Clone)]
pub struct HttpNotifyAdapter {
    agent: ureq::Agent,
    url: String,
}

impl HttpNotifyAdapter {
    /// Requests to `url` give up after `timeout`
    pub fn new(url: impl Into<String>, timeout: Duration) -> Self {
        Self {
            agent: http::agent(timeout),
            url: url.into(),
        }
    }
}

#[async_trait]
impl NotifyAdapter for HttpNotifyAdapter {
    async fn notify(&self, notification: &Notification) -> Result<Ack, NotifyError> {
        Ok(post_json(&self.agent, &self.url, notification).await?)
    }
}

#[cfg(test)]
#[path = "http_tests.rs"]
mod tests;
