//! Error types for pdftool.
//!
//! Every failure the tool anticipates is a variant of [`PdfToolError`].
//! Validation errors are raised before anything is written to disk, so a
//! failed run never leaves partial output behind.
//!
//! # Error Categories
//!
//! - **Usage Errors**: no mode selected, missing or misplaced `--page`
//! - **Validation Errors**: bad directories, missing inputs, page out of bounds
//! - **PDF Errors**: documents that cannot be loaded or written
//! - **External Tool Errors**: the compressor could not run or failed

use std::io;
use std::path::PathBuf;

/// Result type alias for pdftool operations.
pub type Result<T> = std::result::Result<T, PdfToolError>;

/// Main error type for pdftool operations.
#[derive(Debug, thiserror::Error)]
pub enum PdfToolError {
    /// The command line did not describe a runnable operation.
    #[error("Usage error: {message}")]
    Usage {
        /// What is wrong with the invocation.
        message: String,
    },

    /// Split mode was selected without `--page`.
    #[error("PAGE is not specified; --split requires --page <PAGE>")]
    MissingPageArgument,

    /// A path that must be a directory is missing or is not a directory.
    #[error("Not a valid {role} directory: {}", .path.display())]
    InvalidDirectory {
        /// Which argument the directory came from (`input` or `output`).
        role: &'static str,
        /// The offending path.
        path: PathBuf,
    },

    /// Merge mode found no PDFs in the input directory.
    #[error("No PDF files found in directory: {}", .dir.display())]
    NoInputFiles {
        /// Directory that was searched.
        dir: PathBuf,
    },

    /// The split page lies outside `1..=total_pages`.
    #[error(
        "Page {page} is out of bounds for {}\n  PDF has {total_pages} page(s). Page must be between 1 and {total_pages}",
        .path.display()
    )]
    PageOutOfBounds {
        /// Path to the PDF being split.
        path: PathBuf,
        /// Requested split page.
        page: i64,
        /// Pages in the document.
        total_pages: usize,
    },

    /// The external compressor exited unsuccessfully.
    #[error("External tool '{program}' failed ({})", describe_status(.code))]
    ExternalToolFailure {
        /// Program that was run.
        program: String,
        /// Exit code, `None` when the process was terminated by a signal.
        code: Option<i32>,
    },

    /// The external compressor could not be started.
    #[error("Failed to run external tool '{program}'\n  Reason: {source}")]
    ExternalToolUnavailable {
        /// Program that was run.
        program: String,
        /// Underlying spawn error.
        #[source]
        source: io::Error,
    },

    /// Input file was not found.
    #[error("File not found: {}", .path.display())]
    FileNotFound {
        /// Path to the file that was not found.
        path: PathBuf,
    },

    /// Input path exists but is not a regular file.
    #[error("Not a file: {}", .path.display())]
    NotAFile {
        /// Path that is not a file.
        path: PathBuf,
    },

    /// Failed to load PDF file.
    #[error("Failed to load PDF: {}\n  Reason: {reason}", .path.display())]
    FailedToLoadPdf {
        /// Path to the PDF file.
        path: PathBuf,
        /// Reason for the failure.
        reason: String,
    },

    /// Failed to create output file.
    #[error("Failed to create output file: {}\n  Reason: {source}", .path.display())]
    FailedToCreateOutput {
        /// Path where output should be created.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: io::Error,
    },

    /// Failed to write to output file.
    #[error("Failed to write to output file: {}\n  Reason: {source}", .path.display())]
    FailedToWrite {
        /// Path being written to.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: io::Error,
    },

    /// Invalid configuration.
    #[error("Invalid configuration: {message}")]
    InvalidConfig {
        /// Description of what's wrong with the configuration.
        message: String,
    },

    /// Generic I/O error.
    #[error("I/O error: {source}")]
    Io {
        /// Underlying I/O error.
        #[from]
        source: io::Error,
    },

    /// Generic error with a custom message.
    #[error("{message}")]
    Other {
        /// Error message.
        message: String,
    },
}

fn describe_status(code: &Option<i32>) -> String {
    match code {
        Some(code) => format!("exit code {code}"),
        None => "terminated by signal".to_string(),
    }
}

impl From<lopdf::Error> for PdfToolError {
    fn from(err: lopdf::Error) -> Self {
        Self::other(err.to_string())
    }
}

impl PdfToolError {
    /// Create a Usage error.
    pub fn usage(message: impl Into<String>) -> Self {
        Self::Usage {
            message: message.into(),
        }
    }

    /// Create an InvalidDirectory error for the `--input` argument.
    pub fn invalid_input_dir(path: PathBuf) -> Self {
        Self::InvalidDirectory {
            role: "input",
            path,
        }
    }

    /// Create an InvalidDirectory error for the `--output` argument.
    pub fn invalid_output_dir(path: PathBuf) -> Self {
        Self::InvalidDirectory {
            role: "output",
            path,
        }
    }

    /// Create a FileNotFound error.
    pub fn file_not_found(path: PathBuf) -> Self {
        Self::FileNotFound { path }
    }

    /// Create a NotAFile error.
    pub fn not_a_file(path: PathBuf) -> Self {
        Self::NotAFile { path }
    }

    /// Create a FailedToLoadPdf error.
    pub fn failed_to_load_pdf(path: PathBuf, reason: impl Into<String>) -> Self {
        Self::FailedToLoadPdf {
            path,
            reason: reason.into(),
        }
    }

    /// Create an InvalidConfig error.
    pub fn invalid_config(message: impl Into<String>) -> Self {
        Self::InvalidConfig {
            message: message.into(),
        }
    }

    /// Create an Other error with a custom message.
    pub fn other(message: impl Into<String>) -> Self {
        Self::Other {
            message: message.into(),
        }
    }

    /// Get the process exit code for this error.
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::InvalidDirectory { .. } => 1,
            Self::NoInputFiles { .. } => 1,
            Self::PageOutOfBounds { .. } => 1,
            Self::MissingPageArgument => 1,
            Self::InvalidConfig { .. } => 1,
            Self::Other { .. } => 1,
            Self::Usage { .. } => 2,
            Self::FileNotFound { .. } => 2,
            Self::NotAFile { .. } => 2,
            Self::FailedToLoadPdf { .. } => 3,
            Self::ExternalToolFailure { .. } => 4,
            Self::ExternalToolUnavailable { .. } => 4,
            Self::FailedToCreateOutput { .. } => 5,
            Self::FailedToWrite { .. } => 5,
            Self::Io { .. } => 5,
        }
    }
}
