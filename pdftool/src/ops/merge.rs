//! Merge every PDF found in a directory into one document.

use lopdf::Document;

use crate::config::{Config, Operation};
use crate::error::{PdfToolError, Result};
use crate::io::{PdfReader, PdfWriter};
use crate::ops::pages::PageExtractor;
use crate::output::{MergeReport, OutputFormatter};
use crate::utils::naming::PDF_EXTENSION;
use crate::utils::{OutputName, find_files, format_file_size};

/// Base name of merge outputs.
pub const MERGED_BASE_NAME: &str = "merged";

/// PDF merger that combines every document in a directory.
#[derive(Debug, Default)]
pub struct Merger {
    /// Reader for loading PDFs.
    reader: PdfReader,

    /// Writer for the merged output.
    writer: PdfWriter,

    /// Page tree operations.
    page_extractor: PageExtractor,
}

impl Merger {
    /// Create a new merger with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Merge the PDFs of `config`'s input directory.
    ///
    /// Documents are appended in the order the directory scan returns them.
    /// The output is `<output_dir>/merged<N>.pdf` with the first free `N`.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - `config` does not describe a merge
    /// - The directory holds no PDF files
    /// - Any input cannot be loaded
    /// - The output cannot be written
    ///
    /// # Examples
    ///
    /// ```no_run
    /// # use pdftool::config::{Config, Operation};
    /// # use pdftool::ops::merge::Merger;
    /// # use pdftool::output::OutputFormatter;
    /// # use std::path::PathBuf;
    /// # async fn example() -> Result<(), Box<dyn std::error::Error>> {
    /// let config = Config::new(Operation::Merge { input_dir: PathBuf::from("scans") });
    /// let report = Merger::new().merge(&config, &OutputFormatter::default()).await?;
    /// println!("{} pages", report.total_pages);
    /// # Ok(())
    /// # }
    /// ```
    pub async fn merge(&self, config: &Config, formatter: &OutputFormatter) -> Result<MergeReport> {
        let Operation::Merge { input_dir } = &config.operation else {
            return Err(PdfToolError::invalid_config(format!(
                "Merger cannot run a {} operation",
                config.operation.name()
            )));
        };

        let sources = find_files(input_dir, PDF_EXTENSION);
        if sources.is_empty() {
            return Err(PdfToolError::NoInputFiles {
                dir: input_dir.clone(),
            });
        }

        formatter.info("Found and merging the following pdfs:");

        let mut merged: Option<Document> = None;
        let mut total_pages = 0;
        let mut input_size = 0;

        for path in &sources {
            formatter.list_item(&path.display().to_string());

            let loaded = self.reader.load(path).await?;
            formatter.detail("Pages", &loaded.page_count.to_string());

            total_pages += loaded.page_count;
            input_size += loaded.file_size;

            merged = Some(match merged.take() {
                None => loaded.document,
                Some(mut doc) => {
                    self.page_extractor
                        .append_document(&mut doc, loaded.document)?;
                    doc
                }
            });
        }

        let Some(mut document) = merged else {
            return Err(PdfToolError::NoInputFiles {
                dir: input_dir.clone(),
            });
        };

        let output_dir = config.resolved_output_dir();
        let output = OutputName::next_available(&output_dir, MERGED_BASE_NAME).path();

        if config.dry_run {
            formatter.info(&format!(
                "Dry run: would write {} page(s) to: {}",
                total_pages,
                output.display()
            ));
        } else {
            let stats = self.writer.save(&mut document, &output).await?;
            formatter.success(&format!("Merged pdfs written to: {}", output.display()));
            formatter.detail("Input size", &format_file_size(input_size));
            formatter.detail("Output size", &stats.format_file_size());
            formatter.detail("Write time", &format!("{:.2?}", stats.write_time));
        }

        Ok(MergeReport {
            sources,
            output,
            total_pages,
            dry_run: config.dry_run,
        })
    }
}
