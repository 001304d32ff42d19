// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Payloads sent to the external collaborators
//!
//! All of these are derived from a `FormSubmission` snapshot; none of them
//! feed back into it.

use crate::booking::BookingRules;
use crate::form::{fields, FormKind, FormSubmission};
use crate::validate::sanitize_input;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Subject used when a contact form leaves it blank
pub const DEFAULT_SUBJECT: &str = "General Inquiry";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Vehicle {
    pub year: String,
    pub make: String,
    pub model: String,
}

impl Vehicle {
    fn from_submission(form: &FormSubmission) -> Self {
        Self {
            year: trimmed(form, fields::VEHICLE_YEAR),
            make: trimmed(form, fields::VEHICLE_MAKE),
            model: trimmed(form, fields::VEHICLE_MODEL),
        }
    }

    /// `"<year> <make> <model>"`
    pub fn describe(&self) -> String {
        format!("{} {} {}", self.year, self.make, self.model)
    }
}

/// The primary business record created by the authoritative step
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BookingRecord {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: String,
    pub vehicle: Vehicle,
    pub services: Vec<String>,
    pub scheduled_date: String,
    pub scheduled_time: String,
    pub order_notes: String,
    pub customer_notes: String,
}

impl BookingRecord {
    pub fn from_submission(form: &FormSubmission, today: NaiveDate) -> Self {
        Self {
            first_name: trimmed(form, fields::FIRST_NAME),
            last_name: trimmed(form, fields::LAST_NAME),
            email: trimmed(form, fields::EMAIL),
            phone: trimmed(form, fields::PHONE),
            vehicle: Vehicle::from_submission(form),
            services: form.services(),
            scheduled_date: trimmed(form, fields::DATE),
            scheduled_time: trimmed(form, fields::TIME_SLOT),
            order_notes: trimmed(form, fields::NOTES),
            customer_notes: format!("Website booking on {}", today.format("%-m/%-d/%Y")),
        }
    }

    pub fn customer_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}

/// Sanitized contact form message
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactMessage {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub subject: String,
    pub message: String,
}

impl ContactMessage {
    pub fn from_submission(form: &FormSubmission) -> Self {
        let subject = sanitize_input(form.field(fields::SUBJECT));
        Self {
            name: sanitize_input(form.field(fields::NAME)),
            email: sanitize_input(form.field(fields::EMAIL)),
            phone: sanitize_input(form.field(fields::PHONE)),
            subject: if subject.is_empty() {
                DEFAULT_SUBJECT.to_string()
            } else {
                subject
            },
            message: sanitize_input(form.field(fields::MESSAGE)),
        }
    }
}

/// Lead-tracking event
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LeadEvent {
    pub form: FormKind,
    pub name: String,
    pub email: String,
    pub phone: String,
    pub form_url: String,
    pub landing_page_url: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub service: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub vehicle: Option<String>,
}

impl LeadEvent {
    pub fn from_submission(form: &FormSubmission) -> Self {
        let page = form.page();
        match form.kind() {
            FormKind::Booking => Self {
                form: FormKind::Booking,
                name: customer_name(form),
                email: trimmed(form, fields::EMAIL),
                phone: trimmed(form, fields::PHONE),
                form_url: page.url.clone(),
                landing_page_url: page.landing_page().to_string(),
                message: None,
                service: Some(form.services().join(", ")),
                vehicle: Some(Vehicle::from_submission(form).describe()),
            },
            FormKind::Contact => {
                let contact = ContactMessage::from_submission(form);
                Self {
                    form: FormKind::Contact,
                    name: contact.name,
                    email: contact.email,
                    phone: contact.phone,
                    form_url: page.url.clone(),
                    landing_page_url: page.landing_page().to_string(),
                    message: Some(contact.message),
                    service: None,
                    vehicle: None,
                }
            }
        }
    }
}

/// Outbound notification
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Notification {
    /// Confirmation email to the customer who booked
    BookingConfirmation {
        customer_name: String,
        customer_email: String,
        order_number: String,
        scheduled_date: String,
        scheduled_time: String,
        service_name: String,
        vehicle_info: String,
    },
    /// Message from the contact form, delivered to the shop
    ContactNotification(ContactMessage),
}

impl Notification {
    pub fn booking_confirmation(
        form: &FormSubmission,
        order_number: &str,
        rules: &BookingRules,
    ) -> Self {
        let date = trimmed(form, fields::DATE);
        let scheduled_date = NaiveDate::parse_from_str(&date, "%Y-%m-%d")
            .map(|d| d.format("%-m/%-d/%Y").to_string())
            .unwrap_or(date);
        Notification::BookingConfirmation {
            customer_name: customer_name(form),
            customer_email: trimmed(form, fields::EMAIL),
            order_number: order_number.to_string(),
            scheduled_date,
            scheduled_time: trimmed(form, fields::TIME_SLOT),
            service_name: rules.service_names(&form.services()).join(", "),
            vehicle_info: Vehicle::from_submission(form).describe(),
        }
    }

    pub fn contact(form: &FormSubmission) -> Self {
        Notification::ContactNotification(ContactMessage::from_submission(form))
    }

    pub fn name(&self) -> &'static str {
        match self {
            Notification::BookingConfirmation { .. } => "booking_confirmation",
            Notification::ContactNotification(_) => "contact_notification",
        }
    }
}

fn trimmed(form: &FormSubmission, name: &str) -> String {
    form.field(name).trim().to_string()
}

fn customer_name(form: &FormSubmission) -> String {
    format!(
        "{} {}",
        form.field(fields::FIRST_NAME).trim(),
        form.field(fields::LAST_NAME).trim()
    )
}

#[cfg(test)]
#[path = "payload_tests.rs"]
mod tests;
