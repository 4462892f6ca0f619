//! Output formatting for command reports.
//!
//! Responsibilities:
//! - Render a `Report` as plain text (value only) or as a JSON object.
//!
//! Does NOT handle:
//! - Reading variables (see `dispatch`).
//! - Writing to stdout (see `main`).
//!
//! Invariants:
//! - Text output is the bare value so it composes in shell pipelines.
//! - Empty optionals render as `none` in text and `null` in JSON. Text output
//!   cannot distinguish that from a string whose value is `none`; JSON can.

use anyhow::Result;
use serde_json::Value;

use crate::args::OutputFormat;
use crate::dispatch::Report;

pub fn format_report(report: &Report, format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Text => Ok(format_text(report)),
        OutputFormat::Json => Ok(serde_json::to_string(report)?),
    }
}

fn format_text(report: &Report) -> String {
    match &report.value {
        None => "ok".to_string(),
        Some(Value::Null) => "none".to_string(),
        Some(Value::String(s)) => s.clone(),
        Some(other) => other.to_string(),
    }
}
