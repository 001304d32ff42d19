// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Host view that writes updates to stdout

use async_trait::async_trait;
use formflow_adapters::{FormView, ViewError};
use formflow_core::ViewUpdate;
use std::io::Write;

/// Prints one line per view update; silent when output is machine-readable
#[derive(Clone, Copy, Debug)]
pub struct ConsoleView {
    quiet: bool,
}

impl ConsoleView {
    pub fn new(quiet: bool) -> Self {
        Self { quiet }
    }
}

#[async_trait]
impl FormView for ConsoleView {
    async fn render(&self, update: ViewUpdate) -> Result<(), ViewError> {
        if self.quiet {
            return Ok(());
        }
        write_lines(&mut std::io::stdout().lock(), &describe(&update))
            .map_err(|e| ViewError::Render(e.to_string()))
    }
}

fn write_lines(out: &mut impl Write, lines: &[String]) -> std::io::Result<()> {
    for line in lines {
        writeln!(out, "{}", line)?;
    }
    out.flush()
}

/// Human-readable lines for an update
pub fn describe(update: &ViewUpdate) -> Vec<String> {
    match update {
        ViewUpdate::SetSubmit { enabled, label } => {
            let state = if *enabled { "enabled" } else { "disabled" };
            vec![format!("[submit] {} ({})", label, state)]
        }
        ViewUpdate::ShowFieldErrors(errors) => errors
            .errors
            .iter()
            .map(|e| format!("[field] {}: {}", e.field, e.rejection.user_message()))
            .collect(),
        ViewUpdate::ShowError { message } => vec![format!("[error] {}", message)],
        ViewUpdate::ShowConfirmation { confirmation_id } => {
            vec![format!("[confirmed] {}", confirmation_id)]
        }
        other => vec![format!("[form] {}", other.name())],
    }
}

#[cfg(test)]
#[path = "view_tests.rs"]
mod tests;
