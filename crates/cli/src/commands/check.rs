// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! `formflow check` - Validate single values the way the forms do

use crate::output::{self, OutputFormat};
use anyhow::Result;
use chrono::NaiveDate;
use clap::Subcommand;
use formflow_core::validate::{validate_date, validate_email, validate_phone};
use formflow_core::{BookingRules, Rejection};
use serde::Serialize;
use std::fmt;
use std::process::ExitCode;

#[derive(Subcommand)]
pub enum CheckCommand {
    /// Validate an email address
    Email { value: String },
    /// Validate a phone number (10 digits, or 11 starting with 1)
    Phone {
        value: String,
        /// Accept an empty value
        #[arg(long)]
        optional: bool,
    },
    /// Validate a booking date (YYYY-MM-DD) against the booking window
    Date { value: String },
}

#[derive(Debug, Serialize)]
pub struct Verdict {
    pub value: String,
    pub valid: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl Verdict {
    fn new(value: String, checked: Result<(), Rejection>) -> Self {
        Self {
            value,
            valid: checked.is_ok(),
            message: checked.err().map(|r| r.user_message()),
        }
    }
}

impl fmt::Display for Verdict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.message {
            None => write!(f, "valid"),
            Some(message) => write!(f, "invalid: {}", message),
        }
    }
}

/// Classify one value; `today` anchors the booking window
pub fn verdict(command: CheckCommand, rules: &BookingRules, today: NaiveDate) -> Verdict {
    match command {
        CheckCommand::Email { value } => {
            let checked = validate_email(&value);
            Verdict::new(value, checked)
        }
        CheckCommand::Phone { value, optional } => {
            let checked = validate_phone(&value, !optional);
            Verdict::new(value, checked)
        }
        CheckCommand::Date { value } => {
            let checked = validate_date(&value, &rules.window, today);
            Verdict::new(value, checked)
        }
    }
}

pub fn handle(
    command: CheckCommand,
    rules: &BookingRules,
    today: NaiveDate,
    format: OutputFormat,
) -> Result<ExitCode> {
    let verdict = verdict(command, rules, today);
    output::print(&verdict, format)?;
    Ok(super::exit_code(verdict.valid))
}

#[cfg(test)]
#[path = "check_tests.rs"]
mod tests;
