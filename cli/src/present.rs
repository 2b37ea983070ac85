/*
 * SPDX-FileCopyrightText: 2026 Sebastiano Vigna
 *
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

//! Printing rank tables.

use crate::OutputFormat;
use anyhow::{Context, Result};
use linkrank::dist::RankTable;
use serde::Serialize;
use std::collections::BTreeMap;
use std::io::Write;

/// The estimator that produced a [`RankReport`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Method {
    Sampling,
    Iteration,
}

/// A rank table together with the parameters that produced it.
#[derive(Debug, Clone, Serialize)]
pub struct RankReport {
    pub method: Method,
    pub damping: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub samples: Option<usize>,
    pub iterations: usize,
    pub ranks: BTreeMap<String, f64>,
}

impl RankReport {
    pub fn sampling(table: RankTable<'_>, damping: f64, samples: usize) -> Self {
        Self {
            method: Method::Sampling,
            damping,
            samples: Some(samples),
            iterations: table.iterations(),
            ranks: table.into_map(),
        }
    }

    pub fn iteration(table: RankTable<'_>, damping: f64) -> Self {
        Self {
            method: Method::Iteration,
            damping,
            samples: None,
            iterations: table.iterations(),
            ranks: table.into_map(),
        }
    }

    /// Returns the header line of the text format.
    pub fn header(&self) -> String {
        match (self.method, self.samples) {
            (Method::Sampling, Some(samples)) => {
                format!("PageRank Results from Sampling (n = {samples})")
            }
            (Method::Sampling, None) => "PageRank Results from Sampling".to_owned(),
            (Method::Iteration, _) => "PageRank Results from Iteration".to_owned(),
        }
    }

    /// Writes the report in text format, with `precision` decimal digits.
    pub fn write_text(&self, mut out: impl Write, precision: usize) -> Result<()> {
        writeln!(out, "{}", self.header())?;
        for (label, rank) in &self.ranks {
            writeln!(out, "  {label}: {rank:.precision$}")?;
        }
        Ok(())
    }
}

/// Writes a sequence of reports in the given format.
///
/// In text format, reports are written one after the other. In JSON format,
/// a single report is written as an object, and multiple reports as an
/// array. `precision` is used only by the text format.
pub fn write_reports(
    mut out: impl Write,
    reports: &[RankReport],
    fmt: OutputFormat,
    precision: usize,
) -> Result<()> {
    match fmt {
        OutputFormat::Text => {
            for report in reports {
                report.write_text(&mut out, precision)?;
            }
        }
        OutputFormat::Json => {
            match reports {
                [report] => serde_json::to_writer_pretty(&mut out, report),
                _ => serde_json::to_writer_pretty(&mut out, reports),
            }
            .context("Could not serialize the results")?;
            writeln!(out)?;
        }
    }
    out.flush().context("Could not write the results")?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn report() -> RankReport {
        RankReport {
            method: Method::Sampling,
            damping: 0.85,
            samples: Some(10_000),
            iterations: 9_999,
            ranks: BTreeMap::from([("2.html".to_owned(), 0.123456), ("1.html".to_owned(), 0.876544)]),
        }
    }

    #[test]
    fn test_text() -> Result<()> {
        let mut out = Vec::new();
        write_reports(&mut out, &[report()], OutputFormat::Text, 4)?;
        assert_eq!(
            String::from_utf8(out)?,
            "PageRank Results from Sampling (n = 10000)\n  1.html: 0.8765\n  2.html: 0.1235\n"
        );
        Ok(())
    }

    #[test]
    fn test_json() -> Result<()> {
        let mut out = Vec::new();
        write_reports(&mut out, &[report()], OutputFormat::Json, 4)?;
        let value: serde_json::Value = serde_json::from_slice(&out)?;
        assert_eq!(value["method"], "sampling");
        assert_eq!(value["samples"], 10_000);
        assert_eq!(value["ranks"]["2.html"], 0.123456);

        let mut out = Vec::new();
        let mut iteration = report();
        iteration.method = Method::Iteration;
        iteration.samples = None;
        write_reports(&mut out, &[report(), iteration], OutputFormat::Json, 4)?;
        let value: serde_json::Value = serde_json::from_slice(&out)?;
        assert_eq!(value.as_array().map(Vec::len), Some(2));
        assert!(value[1].get("samples").is_none());
        Ok(())
    }
}
