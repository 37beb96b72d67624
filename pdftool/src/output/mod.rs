//! Output formatting and reporting for pdftool.
//!
//! This module handles all user-facing output:
//! - Formatted status messages ([`OutputFormatter`])
//! - The machine-readable summary of a finished operation ([`Report`])
//!
//! # Examples
//!
//! ```no_run
//! use pdftool::output::OutputFormatter;
//!
//! let formatter = OutputFormatter::new(false, false);
//! formatter.info("Found and merging the following pdfs:");
//! formatter.success("Merged pdfs written to: merged.pdf");
//! ```

pub mod formatter;

pub use formatter::{MessageLevel, OutputFormatter};

use serde::Serialize;
use std::path::PathBuf;

use crate::error::{PdfToolError, Result};

/// Summary of a merge.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MergeReport {
    /// Inputs in the order they were appended.
    pub sources: Vec<PathBuf>,
    /// Written (or planned) output.
    pub output: PathBuf,
    /// Pages in the merged document.
    pub total_pages: usize,
    /// Nothing was written.
    pub dry_run: bool,
}

/// Summary of a split.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SplitReport {
    /// Document that was split.
    pub source: PathBuf,
    /// 1-based first page of the second output.
    pub page: usize,
    /// Output holding the pages before `page`.
    pub first: PathBuf,
    /// Pages in `first`.
    pub first_pages: usize,
    /// Output holding `page` and everything after it.
    pub second: PathBuf,
    /// Pages in `second`.
    pub second_pages: usize,
    /// Nothing was written.
    pub dry_run: bool,
}

/// Summary of a compression.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CompressReport {
    /// Document handed to the compressor.
    pub source: PathBuf,
    /// Path the compressor was asked to write.
    pub output: PathBuf,
    /// Command line that was (or would be) run.
    pub command: String,
    /// Nothing was run.
    pub dry_run: bool,
}

/// Outcome of one successful operation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "operation", rename_all = "lowercase")]
pub enum Report {
    /// Merge result.
    Merge(MergeReport),
    /// Split result.
    Split(SplitReport),
    /// Compress result.
    Compress(CompressReport),
}

impl Report {
    /// Every file the operation wrote or would write.
    pub fn outputs(&self) -> Vec<&PathBuf> {
        match self {
            Self::Merge(report) => vec![&report.output],
            Self::Split(report) => vec![&report.first, &report.second],
            Self::Compress(report) => vec![&report.output],
        }
    }

    /// Pretty-printed JSON representation.
    pub fn to_json(&self) -> Result<String> {
        serde_json::to_string_pretty(self)
            .map_err(|e| PdfToolError::other(format!("Failed to serialize report: {e}")))
    }
}
