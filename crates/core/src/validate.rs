// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Field validators
//!
//! Every validator is a pure classification of one raw value: it returns
//! `Ok(())` or the reason the value was rejected, and never rewrites input.
//! Normalization (`format_phone`, `sanitize_input`) is separate and opt-in.

use crate::booking::DateWindow;
use chrono::{Datelike, NaiveDate};
use regex::Regex;
use std::fmt;
use std::sync::LazyLock;
use thiserror::Error;

// local@domain.tld with no whitespace or extra '@'
#[allow(clippy::expect_used)]
static EMAIL_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("constant regex pattern is valid")
});

/// Why a field value was rejected
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Rejection {
    #[error("required")]
    Required,
    #[error("invalid email")]
    InvalidEmail,
    #[error("invalid phone")]
    InvalidPhone,
    #[error("unknown option: {0}")]
    UnknownOption(String),
    #[error("invalid date: {0}")]
    InvalidDate(String),
    #[error("date outside booking window: {0}")]
    DateOutOfRange(NaiveDate),
    #[error("closed on {0}")]
    ClosedDay(chrono::Weekday),
    #[error("too long: {len} > {max}")]
    TooLong { len: usize, max: usize },
}

impl Rejection {
    /// Text suitable for showing next to the field
    pub fn user_message(&self) -> String {
        match self {
            Rejection::Required => "This field is required".to_string(),
            Rejection::InvalidEmail => "Please enter a valid email address".to_string(),
            Rejection::InvalidPhone => "Please enter a valid phone number".to_string(),
            Rejection::UnknownOption(_) => "Please choose one of the available options".to_string(),
            Rejection::InvalidDate(_) => "Please pick a date".to_string(),
            Rejection::DateOutOfRange(_) => "Please pick a date within the booking window".to_string(),
            Rejection::ClosedDay(day) => format!("We are closed on {}", weekday_name(*day)),
            Rejection::TooLong { max, .. } => format!("Please keep this under {} characters", max),
        }
    }
}

/// A rejected field
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldError {
    pub field: String,
    pub rejection: Rejection,
}

impl fmt::Display for FieldError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.field, self.rejection)
    }
}

/// Every rejected field of one submission, in schema order
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldErrors {
    pub errors: Vec<FieldError>,
}

impl FieldErrors {
    /// Rejection recorded for a field, if any
    pub fn get(&self, field: &str) -> Option<&Rejection> {
        self.errors
            .iter()
            .find(|e| e.field == field)
            .map(|e| &e.rejection)
    }

    /// Single message summarizing the failure for a transient banner
    pub fn summary(&self) -> String {
        match self.errors.as_slice() {
            [only] => only.rejection.user_message(),
            _ => format!("Please correct the {} highlighted fields", self.errors.len()),
        }
    }
}

impl fmt::Display for FieldErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "validation failed with {} error(s):", self.errors.len())?;
        for (i, error) in self.errors.iter().enumerate() {
            writeln!(f, "  {}: {}", i + 1, error)?;
        }
        Ok(())
    }
}

impl std::error::Error for FieldErrors {}

/// `local@domain.tld`: non-whitespace local part, domain and dotted suffix
pub fn validate_email(value: &str) -> Result<(), Rejection> {
    if EMAIL_PATTERN.is_match(value) {
        Ok(())
    } else {
        Err(Rejection::InvalidEmail)
    }
}

/// Valid iff the value holds 10 or 11 digits once everything else is dropped.
/// A blank optional phone is valid.
pub fn validate_phone(value: &str, required: bool) -> Result<(), Rejection> {
    if !required && value.trim().is_empty() {
        return Ok(());
    }
    match digits(value).len() {
        10 | 11 => Ok(()),
        _ => Err(Rejection::InvalidPhone),
    }
}

pub fn validate_required(value: &str) -> Result<(), Rejection> {
    if value.trim().is_empty() {
        Err(Rejection::Required)
    } else {
        Ok(())
    }
}

pub fn validate_one_of<S: AsRef<str>>(value: &str, options: &[S]) -> Result<(), Rejection> {
    let value = value.trim();
    if options.iter().any(|o| o.as_ref() == value) {
        Ok(())
    } else {
        Err(Rejection::UnknownOption(value.to_string()))
    }
}

pub fn validate_max_len(value: &str, max: usize) -> Result<(), Rejection> {
    let len = value.chars().count();
    if len > max {
        Err(Rejection::TooLong { len, max })
    } else {
        Ok(())
    }
}

/// `YYYY-MM-DD` inside the window relative to `today`, on an open weekday
pub fn validate_date(value: &str, window: &DateWindow, today: NaiveDate) -> Result<(), Rejection> {
    let value = value.trim();
    let date = NaiveDate::parse_from_str(value, "%Y-%m-%d")
        .map_err(|_| Rejection::InvalidDate(value.to_string()))?;

    if !window.contains(today, date) {
        return Err(Rejection::DateOutOfRange(date));
    }
    if window.is_closed(date.weekday()) {
        return Err(Rejection::ClosedDay(date.weekday()));
    }
    Ok(())
}

/// Canonical display form of a phone number
///
/// 10 digits become `(XXX) XXX-XXXX`, 11 digits with a leading country code
/// `1` become `+1 (XXX) XXX-XXXX`. Anything else is returned trimmed and
/// otherwise untouched, so the function is idempotent.
pub fn format_phone(value: &str) -> String {
    let d = digits(value);
    match d.len() {
        10 => format!("({}) {}-{}", &d[0..3], &d[3..6], &d[6..10]),
        11 if d.starts_with('1') => format!("+1 ({}) {}-{}", &d[1..4], &d[4..7], &d[7..11]),
        _ => value.trim().to_string(),
    }
}

/// Trim and drop markup and control characters from free-text input
pub fn sanitize_input(value: &str) -> String {
    let kept: String = value
        .chars()
        .filter(|c| *c != '<' && *c != '>')
        .filter(|c| !c.is_control() || *c == '\n' || *c == '\t')
        .collect();
    kept.trim().to_string()
}

fn digits(value: &str) -> String {
    value.chars().filter(char::is_ascii_digit).collect()
}

fn weekday_name(day: chrono::Weekday) -> &'static str {
    use chrono::Weekday;
    match day {
        Weekday::Mon => "Mondays",
        Weekday::Tue => "Tuesdays",
        Weekday::Wed => "Wednesdays",
        Weekday::Thu => "Thursdays",
        Weekday::Fri => "Fridays",
        Weekday::Sat => "Saturdays",
        Weekday::Sun => "Sundays",
    }
}

#[cfg(test)]
#[path = "validate_tests.rs"]
mod tests;
