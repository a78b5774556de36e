//! Rendering verdicts and reports for stdout.

use std::fmt::Write as _;

use anyhow::{Context, Result};
use serde::Serialize;

use crate::config::OutputFormat;
use crate::core::checksum::ChecksumReport;

/// Outcome of validating one identifier.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Verdict {
    pub imei: String,
    pub valid: bool,
}

impl Verdict {
    pub fn label(&self) -> &'static str {
        if self.valid { "valid" } else { "invalid" }
    }
}

/// One line per verdict, no trailing newline.
pub fn render_verdict(verdict: &Verdict, format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Text => Ok(format!("{}\t{}", verdict.imei, verdict.label())),
        OutputFormat::Json => serde_json::to_string(verdict).context("serialize verdict"),
    }
}

/// Multi-line breakdown of a checksum report.
pub fn render_report(report: &ChecksumReport, format: OutputFormat) -> Result<String> {
    if format == OutputFormat::Json {
        return serde_json::to_string_pretty(report).context("serialize report");
    }

    let mut out = String::new();
    let _ = writeln!(out, "imei:             {}", report.imei);
    let _ = writeln!(out, "even digits:      {}", join(&report.even_digits));
    let _ = writeln!(out, "doubled:          {}", join(&report.doubled));
    let _ = writeln!(out, "even doubled sum: {}", report.even_doubled_sum);
    let _ = writeln!(out, "odd digits:       {}", join(&report.odd_digits));
    let _ = writeln!(out, "odd sum:          {}", report.odd_sum);
    let _ = writeln!(out, "total:            {}", report.total);
    let _ = writeln!(out, "expected:         {}", report.expected);
    let _ = writeln!(out, "check digit:      {}", report.check_digit);
    let _ = writeln!(out, "length ok:        {}", report.length_ok);
    let _ = write!(
        out,
        "verdict:          {}",
        if report.valid { "valid" } else { "invalid" }
    );
    Ok(out)
}

fn join(values: &[u32]) -> String {
    values
        .iter()
        .map(u32::to_string)
        .collect::<Vec<_>>()
        .join(" ")
}
