//! pdftool - Merge, split and compress PDF files.
//!
//! This library implements the three operations behind the `pdftool`
//! command:
//!
//! - Merging every PDF in a directory into one document
//! - Splitting a PDF in two at a given page
//! - Compressing a PDF through an external program (Ghostscript by default)
//!
//! Outputs are never overwritten: each operation picks the first free name
//! in the `merged`, `merged0`, `merged1`, ... sequence (see [`utils::naming`]).
//!
//! # Examples
//!
//! ## Merge a directory
//!
//! ```no_run
//! use pdftool::config::{Config, Operation};
//! use pdftool::output::OutputFormatter;
//! use std::path::PathBuf;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let config = Config::new(Operation::Merge {
//!     input_dir: PathBuf::from("scans"),
//! });
//!
//! let report = pdftool::ops::execute(&config, &OutputFormatter::default()).await?;
//! println!("{}", report.to_json()?);
//! # Ok(())
//! # }
//! ```
//!
//! ## Using Individual Components
//!
//! ```no_run
//! use pdftool::io::{PdfReader, PdfWriter};
//! use pdftool::ops::pages::PageExtractor;
//! use std::path::Path;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let loaded = PdfReader::new().load(Path::new("book.pdf")).await?;
//! let mut intro = PageExtractor::new().extract_range(&loaded.document, 1..=3);
//! PdfWriter::new().save(&mut intro, Path::new("intro.pdf")).await?;
//! # Ok(())
//! # }
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod config;
pub mod error;
pub mod io;
pub mod ops;
pub mod output;
pub mod process;
pub mod utils;


// Re-export commonly used types
pub use config::Config;
pub use error::{PdfToolError, Result};

/// Library version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Library name.
pub const NAME: &str = env!("CARGO_PKG_NAME");
