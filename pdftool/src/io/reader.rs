//! PDF reading and loading operations.

use lopdf::Document;
use std::path::{Path, PathBuf};

use crate::error::{PdfToolError, Result};

/// A loaded PDF document with metadata.
#[derive(Debug)]
pub struct LoadedPdf {
    /// The PDF document.
    pub document: Document,

    /// Path to the source file.
    pub path: PathBuf,

    /// Number of pages in the document.
    pub page_count: usize,

    /// File size in bytes.
    pub file_size: u64,
}

impl LoadedPdf {
    fn new(document: Document, path: PathBuf) -> Self {
        let page_count = document.get_pages().len();
        let file_size = std::fs::metadata(&path).map(|m| m.len()).unwrap_or(0);

        Self {
            document,
            path,
            page_count,
            file_size,
        }
    }
}

/// Loads PDF documents from disk.
#[derive(Debug, Clone, Copy, Default)]
pub struct PdfReader;

impl PdfReader {
    /// Create a new PDF reader.
    pub fn new() -> Self {
        Self
    }

    /// Load a single PDF document.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The path does not exist or is not a file
    /// - The file is not a PDF lopdf can parse
    ///
    /// # Examples
    ///
    /// ```no_run
    /// # use pdftool::io::PdfReader;
    /// # use std::path::Path;
    /// # async fn example() -> Result<(), Box<dyn std::error::Error>> {
    /// let loaded = PdfReader::new().load(Path::new("document.pdf")).await?;
    /// println!("Loaded {} pages", loaded.page_count);
    /// # Ok(())
    /// # }
    /// ```
    pub async fn load(&self, path: &Path) -> Result<LoadedPdf> {
        Self::check_path_exists(path)?;

        let document = Document::load(path)
            .await
            .map_err(|e| PdfToolError::failed_to_load_pdf(path.to_path_buf(), e.to_string()))?;

        Ok(LoadedPdf::new(document, path.to_path_buf()))
    }

    /// Check that `path` exists and is not a directory.
    pub fn check_path_exists<P: AsRef<Path>>(path: P) -> Result<()> {
        let path = path.as_ref();
        let exists = path.try_exists()?;
        if !exists {
            return Err(PdfToolError::file_not_found(path.to_path_buf()));
        }

        if path.is_dir() {
            return Err(PdfToolError::not_a_file(path.to_path_buf()));
        }

        Ok(())
    }
}
