//! Report Rendering
//!
//! Turns a [`Report`] into the text printed on stdout.

use anyhow::{Context, Result};

use crate::config::OutputFormat;
use crate::pipeline::Report;
use crate::validation::CheckResult;

pub const NOT_FOUND_MESSAGE: &str =
    "Could not find solution cell in the notebook, does it have any code cells?";
pub const SUCCESS_MESSAGE: &str = "OK, I do not see any errors in the solution";

/// Render a report in the requested format
pub fn render(report: &Report, format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Text => Ok(render_text(report)),
        OutputFormat::Json => {
            serde_json::to_string_pretty(report).context("Failed to serialize report")
        }
    }
}

/// Human-readable report: the solution, then one verdict line
pub fn render_text(report: &Report) -> String {
    let mut out = String::new();

    if let Some(solution) = &report.solution {
        out.push_str("solution code is\n---\n");
        out.push_str(solution);
        out.push_str("\n---\n");
    }

    let verdict = match &report.result {
        CheckResult::Success => SUCCESS_MESSAGE.to_string(),
        CheckResult::NotFound => NOT_FOUND_MESSAGE.to_string(),
        CheckResult::ParseFailure { detail } => {
            format!("ERROR The solution could not be parsed: {detail}")
        }
        CheckResult::CheckFailure { message, .. } => format!("ERROR {message}"),
    };
    out.push_str(&verdict);
    out
}
