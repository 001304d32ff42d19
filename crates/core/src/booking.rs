// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Booking form options: service catalog, time slots and the date window
//!
//! Defaults reproduce the shop's installation menu. Everything here is
//! configurable through the `[booking]` table.

use chrono::{Datelike, Days, NaiveDate, Weekday};
use serde::{Deserialize, Serialize};
use std::fmt;

/// One bookable service
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServiceOption {
    pub id: String,
    pub name: String,
    /// Price in whole dollars
    pub price: u32,
}

impl ServiceOption {
    pub fn new(id: impl Into<String>, name: impl Into<String>, price: u32) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            price,
        }
    }

    /// Dropdown label, e.g. `Speaker Installation - $199`
    pub fn label(&self) -> String {
        format!("{} - ${}", self.name, self.price)
    }
}

impl fmt::Display for ServiceOption {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:<20} {}", self.id, self.label())
    }
}

/// Upper bound accepted for either end of a [`DateWindow`]
pub const MAX_WINDOW_DAYS: u32 = 3650;

/// Range of bookable dates relative to today
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DateWindow {
    /// Earliest bookable day, in days after today
    pub min_lead_days: u32,
    /// Latest bookable day, in days after today
    pub max_advance_days: u32,
    pub closed_days: Vec<Weekday>,
}

impl Default for DateWindow {
    fn default() -> Self {
        Self {
            min_lead_days: 1,
            max_advance_days: 60,
            closed_days: vec![Weekday::Sun],
        }
    }
}

impl DateWindow {
    /// `None` when the date would fall past the end of the calendar
    pub fn earliest(&self, today: NaiveDate) -> Option<NaiveDate> {
        today.checked_add_days(Days::new(u64::from(self.min_lead_days)))
    }

    /// `None` when the date would fall past the end of the calendar
    pub fn latest(&self, today: NaiveDate) -> Option<NaiveDate> {
        today.checked_add_days(Days::new(u64::from(self.max_advance_days)))
    }

    /// Whether `date` lies between the earliest and latest bookable days
    pub fn contains(&self, today: NaiveDate, date: NaiveDate) -> bool {
        match (self.earliest(today), self.latest(today)) {
            (Some(earliest), Some(latest)) => earliest <= date && date <= latest,
            _ => false,
        }
    }

    pub fn is_closed(&self, day: Weekday) -> bool {
        self.closed_days.contains(&day)
    }

    /// Every open date in the window, in order
    pub fn open_dates(&self, today: NaiveDate) -> Vec<NaiveDate> {
        let (Some(earliest), Some(latest)) = (self.earliest(today), self.latest(today)) else {
            return Vec::new();
        };
        earliest
            .iter_days()
            .take_while(|d| *d <= latest)
            .filter(|d| !self.is_closed(d.weekday()))
            .collect()
    }
}

/// Options and constraints for the booking form
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct BookingRules {
    pub services: Vec<ServiceOption>,
    pub time_slots: Vec<String>,
    #[serde(flatten)]
    pub window: DateWindow,
}

impl Default for BookingRules {
    fn default() -> Self {
        Self {
            services: vec![
                ServiceOption::new("speaker_install", "Speaker Installation", 199),
                ServiceOption::new("subwoofer_install", "Subwoofer Installation", 299),
                ServiceOption::new("amplifier_install", "Amplifier Installation", 399),
                ServiceOption::new("head_unit_install", "Head Unit Installation", 249),
                ServiceOption::new("backup_camera", "Backup Camera", 299),
                ServiceOption::new("remote_start", "Remote Start", 399),
            ],
            time_slots: ["9:00 AM", "10:00 AM", "11:00 AM", "1:00 PM", "2:00 PM", "3:00 PM"]
                .into_iter()
                .map(String::from)
                .collect(),
            window: DateWindow::default(),
        }
    }
}

impl BookingRules {
    pub fn service(&self, id: &str) -> Option<&ServiceOption> {
        self.services.iter().find(|s| s.id == id)
    }

    /// Catalog ids in display order
    pub fn service_ids(&self) -> Vec<String> {
        self.services.iter().map(|s| s.id.clone()).collect()
    }

    /// Human-readable names for the given ids, unknown ids kept as-is
    pub fn service_names(&self, ids: &[String]) -> Vec<String> {
        ids.iter()
            .map(|id| {
                self.service(id)
                    .map(|s| s.name.clone())
                    .unwrap_or_else(|| id.clone())
            })
            .collect()
    }
}

#[cfg(test)]
#[path = "booking_tests.rs"]
mod tests;
