// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! `formflow services`, `formflow slots`, `formflow format-phone`

use crate::output::{self, OutputFormat};
use anyhow::Result;
use chrono::NaiveDate;
use formflow_core::validate::format_phone;
use formflow_core::BookingRules;
use serde::Serialize;
use std::fmt;

#[derive(Serialize)]
struct OpenDate(NaiveDate);

impl fmt::Display for OpenDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format("%Y-%m-%d (%a)"))
    }
}

#[derive(Serialize)]
struct Phone {
    input: String,
    formatted: String,
}

impl fmt::Display for Phone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.formatted)
    }
}

pub fn services(rules: &BookingRules, format: OutputFormat) -> Result<()> {
    output::print_list(&rules.services, format)
}

/// Time slots, or the bookable dates counted from `today`
pub fn slots(
    rules: &BookingRules,
    dates: bool,
    today: NaiveDate,
    format: OutputFormat,
) -> Result<()> {
    if dates {
        let open: Vec<OpenDate> = rules
            .window
            .open_dates(today)
            .into_iter()
            .map(OpenDate)
            .collect();
        output::print_list(&open, format)
    } else {
        output::print_list(&rules.time_slots, format)
    }
}

pub fn phone(value: String, format: OutputFormat) -> Result<()> {
    let formatted = format_phone(&value);
    output::print(
        &Phone {
            input: value,
            formatted,
        },
        format,
    )
}
