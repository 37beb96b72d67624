//! PDF writing and saving operations.
//!
//! This module provides safe PDF writing with:
//! - Atomic writes (write to temp file, then rename)
//! - Compression of content streams
//! - Write statistics
//!
//! # Examples
//!
//! ```no_run
//! use pdftool::io::PdfWriter;
//! use lopdf::Document;
//! use std::path::Path;
//!
//! # async fn example(mut doc: Document) -> Result<(), Box<dyn std::error::Error>> {
//! let writer = PdfWriter::new();
//! let stats = writer.save(&mut doc, Path::new("output.pdf")).await?;
//! println!("Wrote {}", stats.format_file_size());
//! # Ok(())
//! # }
//! ```

use lopdf::Document;
use std::path::{Path, PathBuf};
use std::time::{Duration, Instant};

use crate::error::{PdfToolError, Result};
use crate::utils::format_file_size;

/// Statistics about a write operation.
#[derive(Debug, Clone)]
pub struct WriteStatistics {
    /// Time taken to serialize and write the file.
    pub write_time: Duration,

    /// Size of the written file in bytes.
    pub file_size: u64,

    /// Path where the file was written.
    pub output_path: PathBuf,
}

impl WriteStatistics {
    /// Format file size as human-readable string.
    pub fn format_file_size(&self) -> String {
        format_file_size(self.file_size)
    }
}

/// PDF writer that prunes, compresses and atomically replaces its output.
#[derive(Debug, Clone, Copy, Default)]
pub struct PdfWriter;

impl PdfWriter {
    /// Create a new PDF writer.
    pub fn new() -> Self {
        Self
    }

    /// Save a PDF document to `path`, replacing any existing file.
    ///
    /// The document is serialized in memory first, so a failure while
    /// encoding never touches the file system.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The document cannot be serialized
    /// - The output (or its temp file) cannot be created or written
    /// - The temp file cannot be renamed into place
    pub async fn save(&self, doc: &mut Document, path: &Path) -> Result<WriteStatistics> {
        let start = Instant::now();

        doc.prune_objects();
        doc.renumber_objects();
        doc.compress();

        let mut buffer = Vec::new();
        doc.save_to(&mut buffer)
            .map_err(|e| PdfToolError::FailedToWrite {
                path: path.to_path_buf(),
                source: std::io::Error::other(e),
            })?;

        let write_path = temp_path_for(path);

        tokio::fs::write(&write_path, &buffer)
            .await
            .map_err(|e| PdfToolError::FailedToCreateOutput {
                path: write_path.clone(),
                source: e,
            })?;

        if let Err(e) = tokio::fs::rename(&write_path, path).await {
            let _ = tokio::fs::remove_file(&write_path).await;
            return Err(PdfToolError::FailedToWrite {
                path: path.to_path_buf(),
                source: e,
            });
        }

        Ok(WriteStatistics {
            write_time: start.elapsed(),
            file_size: buffer.len() as u64,
            output_path: path.to_path_buf(),
        })
    }
}

/// Sibling temp file used for atomic writes: `out.pdf` -> `out.pdf.tmp`.
fn temp_path_for(path: &Path) -> PathBuf {
    let mut name = path.as_os_str().to_os_string();
    name.push(".tmp");
    PathBuf::from(name)
}
