// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Form schemas: which rules apply to which fields
//!
//! Validation is fail-fast per field (the first failing rule is that field's
//! error) and collect-all across fields, so one pass reports every bad field.

use crate::booking::{BookingRules, DateWindow};
use crate::form::{fields, FormKind, FormSubmission};
use crate::validate::{self, FieldError, FieldErrors, Rejection};
use chrono::NaiveDate;

const NAME_MAX: usize = 100;
const SUBJECT_MAX: usize = 200;
const NOTES_MAX: usize = 2000;
const MESSAGE_MAX: usize = 5000;

/// A rule applied to one field
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldRule {
    Required,
    Email,
    Phone { required: bool },
    OneOf(Vec<String>),
    Date(DateWindow),
    MaxLen(usize),
    /// Checks the submission's service selection instead of the raw field:
    /// at least one entry, each from the given ids.
    Selection(Vec<String>),
}

impl FieldRule {
    fn check(
        &self,
        value: &str,
        form: &FormSubmission,
        today: NaiveDate,
    ) -> Result<(), Rejection> {
        match self {
            FieldRule::Required => validate::validate_required(value),
            FieldRule::Email => validate::validate_email(value),
            FieldRule::Phone { required } => validate::validate_phone(value, *required),
            FieldRule::OneOf(options) => validate::validate_one_of(value, options),
            FieldRule::Date(window) => validate::validate_date(value, window, today),
            FieldRule::MaxLen(max) => validate::validate_max_len(value, *max),
            FieldRule::Selection(options) => {
                let selected = form.services();
                if selected.is_empty() {
                    return Err(Rejection::Required);
                }
                selected
                    .iter()
                    .try_for_each(|s| validate::validate_one_of(s, options))
            }
        }
    }
}

/// Field rules for one kind of form, in display order
#[derive(Debug, Clone)]
pub struct FormSchema {
    kind: FormKind,
    fields: Vec<(String, Vec<FieldRule>)>,
}

impl FormSchema {
    pub fn new(kind: FormKind) -> Self {
        Self {
            kind,
            fields: Vec::new(),
        }
    }

    pub fn field(mut self, name: impl Into<String>, rules: Vec<FieldRule>) -> Self {
        self.fields.push((name.into(), rules));
        self
    }

    pub fn booking(rules: &BookingRules) -> Self {
        Self::new(FormKind::Booking)
            .field(fields::FIRST_NAME, vec![FieldRule::Required, FieldRule::MaxLen(NAME_MAX)])
            .field(fields::LAST_NAME, vec![FieldRule::Required, FieldRule::MaxLen(NAME_MAX)])
            .field(fields::EMAIL, vec![FieldRule::Required, FieldRule::Email])
            .field(fields::PHONE, vec![FieldRule::Phone { required: true }])
            .field(fields::VEHICLE_YEAR, vec![FieldRule::Required])
            .field(fields::VEHICLE_MAKE, vec![FieldRule::Required])
            .field(fields::VEHICLE_MODEL, vec![FieldRule::Required])
            .field(fields::SERVICE, vec![FieldRule::Selection(rules.service_ids())])
            .field(
                fields::DATE,
                vec![FieldRule::Required, FieldRule::Date(rules.window.clone())],
            )
            .field(
                fields::TIME_SLOT,
                vec![
                    FieldRule::Required,
                    FieldRule::OneOf(rules.time_slots.clone()),
                ],
            )
            .field(fields::NOTES, vec![FieldRule::MaxLen(NOTES_MAX)])
    }

    pub fn contact() -> Self {
        Self::new(FormKind::Contact)
            .field(fields::NAME, vec![FieldRule::Required, FieldRule::MaxLen(NAME_MAX)])
            .field(fields::EMAIL, vec![FieldRule::Required, FieldRule::Email])
            .field(fields::PHONE, vec![FieldRule::Phone { required: false }])
            .field(fields::SUBJECT, vec![FieldRule::MaxLen(SUBJECT_MAX)])
            .field(
                fields::MESSAGE,
                vec![FieldRule::Required, FieldRule::MaxLen(MESSAGE_MAX)],
            )
    }

    pub fn kind(&self) -> FormKind {
        self.kind
    }

    /// Classify every field of the submission
    pub fn validate(&self, form: &FormSubmission, today: NaiveDate) -> Result<(), FieldErrors> {
        let errors: Vec<FieldError> = self
            .fields
            .iter()
            .filter_map(|(name, rules)| {
                let value = form.field(name);
                rules
                    .iter()
                    .find_map(|rule| rule.check(value, form, today).err())
                    .map(|rejection| FieldError {
                        field: name.clone(),
                        rejection,
                    })
            })
            .collect();

        if errors.is_empty() {
            Ok(())
        } else {
            Err(FieldErrors { errors })
        }
    }
}

#[cfg(test)]
#[path = "schema_tests.rs"]
mod tests;
