// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Form submission snapshot

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

/// Well-known field names
pub mod fields {
    pub const NAME: &str = "name";
    pub const FIRST_NAME: &str = "first_name";
    pub const LAST_NAME: &str = "last_name";
    pub const EMAIL: &str = "email";
    pub const PHONE: &str = "phone";
    pub const VEHICLE_YEAR: &str = "vehicle_year";
    pub const VEHICLE_MAKE: &str = "vehicle_make";
    pub const VEHICLE_MODEL: &str = "vehicle_model";
    pub const SERVICE: &str = "service";
    pub const DATE: &str = "date";
    pub const TIME_SLOT: &str = "time_slot";
    pub const NOTES: &str = "notes";
    pub const MESSAGE: &str = "message";
    pub const SUBJECT: &str = "subject";
}

/// Which form produced a submission
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FormKind {
    Booking,
    Contact,
}

impl FormKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            FormKind::Booking => "booking",
            FormKind::Contact => "contact",
        }
    }

    /// Submit button label while the form is interactive
    pub fn idle_label(&self) -> &'static str {
        match self {
            FormKind::Booking => "Book Installation",
            FormKind::Contact => "Send Message",
        }
    }

    /// Submit button label while a submission is in flight
    pub fn busy_label(&self) -> &'static str {
        match self {
            FormKind::Booking => "Processing...",
            FormKind::Contact => "Sending...",
        }
    }

    /// Message shown when the authoritative step fails without saying why
    pub fn fallback_failure(&self) -> &'static str {
        match self {
            FormKind::Booking => "Booking failed",
            FormKind::Contact => "Failed to send message. Please try again or call us directly.",
        }
    }
}

impl fmt::Display for FormKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Where the form was submitted from
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageContext {
    pub url: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub referrer: Option<String>,
}

impl PageContext {
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            referrer: None,
        }
    }

    pub fn with_referrer(mut self, referrer: impl Into<String>) -> Self {
        self.referrer = Some(referrer.into());
        self
    }

    /// The page the visitor landed on: the referrer when known, else this page
    pub fn landing_page(&self) -> &str {
        match self.referrer.as_deref() {
            Some(r) if !r.trim().is_empty() => r,
            _ => &self.url,
        }
    }
}

/// Immutable snapshot of a form's raw field values, read once at submit time
///
/// The service selection is owned by the snapshot rather than by the page,
/// so each attempt carries exactly what the visitor picked.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FormSubmission {
    kind: FormKind,
    fields: BTreeMap<String, String>,
    #[serde(default)]
    services: Vec<String>,
    #[serde(default)]
    page: PageContext,
}

impl FormSubmission {
    pub fn new<I, K, V>(kind: FormKind, fields: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        Self {
            kind,
            fields: fields
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
            services: Vec::new(),
            page: PageContext::default(),
        }
    }

    pub fn with_services<I, S>(mut self, services: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.services = services.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_page(mut self, page: PageContext) -> Self {
        self.page = page;
        self
    }

    pub fn kind(&self) -> FormKind {
        self.kind
    }

    /// Raw value of a field; missing fields read as empty
    pub fn field(&self, name: &str) -> &str {
        self.fields.get(name).map(String::as_str).unwrap_or("")
    }

    pub fn fields(&self) -> &BTreeMap<String, String> {
        &self.fields
    }

    /// Selected services: the explicit selection, else the `service` field
    pub fn services(&self) -> Vec<String> {
        if !self.services.is_empty() {
            return self.services.clone();
        }
        let single = self.field(fields::SERVICE).trim();
        if single.is_empty() {
            Vec::new()
        } else {
            vec![single.to_string()]
        }
    }

    pub fn page(&self) -> &PageContext {
        &self.page
    }
}

#[cfg(test)]
#[path = "form_tests.rs"]
mod tests;
