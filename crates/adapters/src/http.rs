// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! JSON-over-HTTP plumbing shared by the HTTP adapters
//!
//! `ureq` is blocking, so each request runs on tokio's blocking pool.

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use std::time::Duration;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum HttpError {
    #[error("failed to encode request: {0}")]
    Encode(String),
    #[error("HTTP request failed: {0}")]
    Transport(String),
    #[error("server responded with status {0}")]
    Status(u16),
    /// Non-2xx response whose body named a reason
    #[error("server responded with status {status}: {reason}")]
    Rejected { status: u16, reason: String },
    #[error("failed to decode response: {0}")]
    Decode(String),
}

impl HttpError {
    /// Reason given by the server, if it gave one
    pub fn reason(&self) -> Option<&str> {
        match self {
            HttpError::Rejected { reason, .. } => Some(reason),
            _ => None,
        }
    }
}

/// Build an agent whose requests give up after `timeout`
///
/// Status errors are disabled so non-2xx bodies can still be read.
pub(crate) fn agent(timeout: Duration) -> ureq::Agent {
    let config = ureq::Agent::config_builder()
        .timeout_global(Some(timeout))
        .http_status_as_error(false)
        .build();
    ureq::Agent::new_with_config(config)
}

/// Error body some services send along with a non-2xx status
#[derive(Deserialize)]
struct ErrorBody {
    #[serde(default, alias = "message")]
    error: Option<String>,
}

/// POST `body` as JSON to `url` and decode the response
///
/// An empty response body decodes as `R::default()`. A non-2xx response
/// becomes `HttpError::Rejected` when its body carries an `error`, and
/// `HttpError::Status` otherwise.
pub async fn post_json<B, R>(agent: &ureq::Agent, url: &str, body: &B) -> Result<R, HttpError>
where
    B: Serialize + ?Sized,
    R: DeserializeOwned + Default + Send + 'static,
{
    let payload = serde_json::to_value(body).map_err(|e| HttpError::Encode(e.to_string()))?;
    let agent = agent.clone();
    let url = url.to_string();

    tokio::task::spawn_blocking(move || {
        let mut response = agent.post(&url).send_json(&payload).map_err(|e| match e {
            ureq::Error::StatusCode(code) => HttpError::Status(code),
            other => HttpError::Transport(other.to_string()),
        })?;

        let status = response.status();
        let text = response
            .body_mut()
            .read_to_string()
            .map_err(|e| HttpError::Transport(e.to_string()))?;
        if status.is_success() {
            decode_body(&text)
        } else {
            Err(status_error(status.as_u16(), &text))
        }
    })
    .await
    .map_err(|e| HttpError::Transport(format!("request task failed: {}", e)))?
}

pub(crate) fn status_error(status: u16, text: &str) -> HttpError {
    match serde_json::from_str::<ErrorBody>(text) {
        Ok(ErrorBody {
            error: Some(reason),
        }) if !reason.trim().is_empty() => HttpError::Rejected { status, reason },
        _ => HttpError::Status(status),
    }
}

pub(crate) fn decode_body<R: DeserializeOwned + Default>(text: &str) -> Result<R, HttpError> {
    if text.trim().is_empty() {
        return Ok(R::default());
    }
    serde_json::from_str(text).map_err(|e| HttpError::Decode(e.to_string()))
}

#[cfg(test)]
#[path = "http_tests.rs"]
mod tests;
