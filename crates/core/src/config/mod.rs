// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Pipeline configuration
//!
//! Loaded from TOML. Every table is optional; defaults reproduce the
//! shop's booking and contact pages.
//!
//! ```toml
//! [pipeline]
//! step_timeout = "15s"
//! concurrent_secondary = false
//! error_display = "5s"
//! form_restore = "3s"
//!
//! [ids]
//! prefix = "ORD"
//!
//! [booking]
//! time_slots = ["9:00 AM", "10:00 AM"]
//! max_advance_days = 60
//!
//! [endpoints]
//! record = "https://backend.example/bookings"
//! ```

use crate::booking::{BookingRules, MAX_WINDOW_DAYS};
use crate::id::DEFAULT_ORDER_PREFIX;
use crate::submission::Timing;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read {path}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("invalid config: {0}")]
    Invalid(String),
}

/// Top-level configuration
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FlowConfig {
    pub pipeline: PipelineConfig,
    pub ids: IdConfig,
    pub booking: BookingRules,
    pub endpoints: Endpoints,
}

/// Runner behaviour
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PipelineConfig {
    /// Upper bound on each collaborator call
    #[serde(with = "humantime_serde")]
    pub step_timeout: Duration,
    /// Run best-effort steps concurrently after the authoritative step
    pub concurrent_secondary: bool,
    #[serde(with = "humantime_serde")]
    pub error_display: Duration,
    #[serde(with = "humantime_serde")]
    pub form_restore: Duration,
}

impl Default for PipelineConfig {
    fn default() -> Self {
        let timing = Timing::default();
        Self {
            step_timeout: Duration::from_secs(15),
            concurrent_secondary: false,
            error_display: timing.error_display,
            form_restore: timing.form_restore,
        }
    }
}

impl PipelineConfig {
    pub fn timing(&self) -> Timing {
        Timing {
            error_display: self.error_display,
            form_restore: self.form_restore,
        }
    }
}

/// Fallback confirmation identifiers
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct IdConfig {
    pub prefix: String,
}

impl Default for IdConfig {
    fn default() -> Self {
        Self {
            prefix: DEFAULT_ORDER_PREFIX.to_string(),
        }
    }
}

/// HTTP endpoints of the external collaborators; unset means no-op
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Endpoints {
    pub record: Option<String>,
    pub tracking: Option<String>,
    pub notify: Option<String>,
}

impl FlowConfig {
    /// Load and validate a config file
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&content)
    }

    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        let config: FlowConfig = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.pipeline.step_timeout.is_zero() {
            return Err(ConfigError::Invalid(
                "pipeline.step_timeout must be greater than zero".to_string(),
            ));
        }
        if self.ids.prefix.trim().is_empty() {
            return Err(ConfigError::Invalid("ids.prefix must not be empty".to_string()));
        }
        if self.booking.services.is_empty() {
            return Err(ConfigError::Invalid(
                "booking.services must list at least one service".to_string(),
            ));
        }
        if self.booking.time_slots.is_empty() {
            return Err(ConfigError::Invalid(
                "booking.time_slots must list at least one slot".to_string(),
            ));
        }
        let window = &self.booking.window;
        if window.max_advance_days > MAX_WINDOW_DAYS {
            return Err(ConfigError::Invalid(format!(
                "booking.max_advance_days ({}) exceeds {}",
                window.max_advance_days, MAX_WINDOW_DAYS
            )));
        }
        if window.min_lead_days > window.max_advance_days {
            return Err(ConfigError::Invalid(format!(
                "booking.min_lead_days ({}) exceeds booking.max_advance_days ({})",
                window.min_lead_days, window.max_advance_days
            )));
        }
        Ok(())
    }
}
