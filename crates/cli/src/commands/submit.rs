// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! `formflow submit <form>` - Run one submission through the pipeline

use crate::backends;
use crate::output::{self, OutputFormat};
use crate::view::ConsoleView;
use anyhow::{bail, Context, Result};
use clap::{Args, ValueEnum};
use formflow_core::{
    FlowConfig, FormKind, FormSubmission, OrderNumberGen, PageContext, SystemClock,
};
use formflow_engine::{FormPipeline, PipelineSettings};
use serde_json::Value;
use std::path::{Path, PathBuf};
use std::process::ExitCode;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum FormArg {
    Booking,
    Contact,
}

impl From<FormArg> for FormKind {
    fn from(arg: FormArg) -> Self {
        match arg {
            FormArg::Booking => FormKind::Booking,
            FormArg::Contact => FormKind::Contact,
        }
    }
}

#[derive(Args)]
pub struct SubmitArgs {
    /// Form to submit
    #[arg(value_enum)]
    pub form: FormArg,

    /// Field values (name=value), applied after --input
    #[arg(short = 'f', long = "field", value_parser = parse_key_val)]
    pub fields: Vec<(String, String)>,

    /// Selected service id (repeatable)
    #[arg(short = 's', long = "service")]
    pub services: Vec<String>,

    /// JSON object of field values
    #[arg(long)]
    pub input: Option<PathBuf>,

    /// Page the form was submitted from
    #[arg(long)]
    pub page_url: Option<String>,

    /// Referring page, reported as the landing page
    #[arg(long)]
    pub referrer: Option<String>,
}

impl SubmitArgs {
    /// Snapshot the form as given on the command line
    pub fn submission(&self) -> Result<FormSubmission> {
        let mut fields = Vec::new();
        let mut services = Vec::new();
        if let Some(path) = &self.input {
            read_input(path, &mut fields, &mut services)?;
        }
        fields.extend(self.fields.iter().cloned());
        services.extend(self.services.iter().cloned());

        let mut form = FormSubmission::new(self.form.into(), fields).with_services(services);
        if let Some(url) = &self.page_url {
            let mut page = PageContext::new(url.as_str());
            if let Some(referrer) = &self.referrer {
                page = page.with_referrer(referrer.as_str());
            }
            form = form.with_page(page);
        }
        Ok(form)
    }
}

pub async fn handle(
    args: SubmitArgs,
    config: &FlowConfig,
    format: OutputFormat,
) -> Result<ExitCode> {
    let form = args.submission()?;
    let kind = form.kind();

    let deps = backends::pipeline_deps(
        &config.endpoints,
        config.pipeline.step_timeout,
        ConsoleView::new(format.is_json()),
    );
    let pipeline = FormPipeline::new(
        kind,
        deps,
        PipelineSettings::from_config(config),
        SystemClock,
        OrderNumberGen::new(config.ids.prefix.as_str()),
    );

    let result = pipeline.submit_form(form).await?;
    if format.is_json() {
        output::print(&result, format)?;
    }
    Ok(super::exit_code(result.is_success()))
}

fn parse_key_val(s: &str) -> Result<(String, String), String> {
    let (key, value) = s
        .split_once('=')
        .ok_or_else(|| format!("invalid name=value: no `=` found in `{s}`"))?;
    if key.trim().is_empty() {
        return Err(format!("invalid name=value: empty name in `{s}`"));
    }
    Ok((key.trim().to_string(), value.to_string()))
}

/// Read a JSON object of string fields; a `services` array sets the selection
fn read_input(
    path: &Path,
    fields: &mut Vec<(String, String)>,
    services: &mut Vec<String>,
) -> Result<()> {
    let content =
        std::fs::read_to_string(path).with_context(|| format!("reading {}", path.display()))?;
    let object: serde_json::Map<String, Value> = serde_json::from_str(&content)
        .with_context(|| format!("{} must hold a JSON object", path.display()))?;

    for (key, value) in object {
        match value {
            Value::String(s) => fields.push((key, s)),
            Value::Number(n) => fields.push((key, n.to_string())),
            Value::Null => {}
            Value::Array(items) if key == "services" => {
                for item in items {
                    match item {
                        Value::String(id) => services.push(id),
                        other => bail!("services must be strings, got {other}"),
                    }
                }
            }
            other => bail!("field `{key}` must be a string, got {other}"),
        }
    }
    Ok(())
}

#[cfg(test)]
#[path = "submit_tests.rs"]
mod tests;
