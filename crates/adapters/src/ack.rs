// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Acknowledgement returned by best-effort collaborators

use serde::{Deserialize, Serialize};

/// `{ "success": bool, "error"?: string }`
///
/// A 2xx response with an empty body counts as success.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Ack {
    #[serde(default = "default_success")]
    pub success: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl Ack {
    pub fn ok() -> Self {
        Self {
            success: true,
            error: None,
        }
    }

    pub fn rejected(error: impl Into<String>) -> Self {
        Self {
            success: false,
            error: Some(error.into()),
        }
    }

    /// Reason for a negative acknowledgement
    pub fn rejection(&self) -> Option<String> {
        if self.success {
            None
        } else {
            Some(
                self.error
                    .clone()
                    .unwrap_or_else(|| "request was not accepted".to_string()),
            )
        }
    }
}

impl Default for Ack {
    fn default() -> Self {
        Self::ok()
    }
}

pub(crate) fn default_success() -> bool {
    true
}
