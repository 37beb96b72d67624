//! Split one PDF in two at a given page.

use std::path::Path;

use crate::config::{Config, Operation};
use crate::error::{PdfToolError, Result};
use crate::io::{PdfReader, PdfWriter};
use crate::ops::pages::PageExtractor;
use crate::output::{OutputFormatter, SplitReport};
use crate::utils::OutputName;

/// Base name of split outputs.
pub const SPLIT_BASE_NAME: &str = "split";

/// Suffix of the output holding the pages before the split page.
pub const FIRST_SUFFIX: &str = "_1";

/// Suffix of the output starting at the split page.
pub const SECOND_SUFFIX: &str = "_2";

/// Check that `page` lies in `1..=total_pages` and return it as an index.
///
/// # Errors
///
/// Returns [`PdfToolError::PageOutOfBounds`] otherwise. Zero and negative
/// pages are always out of bounds.
pub fn validate_split_page(path: &Path, page: i64, total_pages: usize) -> Result<u32> {
    match u32::try_from(page) {
        Ok(index) if index >= 1 && index as usize <= total_pages => Ok(index),
        _ => Err(PdfToolError::PageOutOfBounds {
            path: path.to_path_buf(),
            page,
            total_pages,
        }),
    }
}

/// Splits a document into `<stem>_1.pdf` and `<stem>_2.pdf`.
#[derive(Debug, Default)]
pub struct Splitter {
    reader: PdfReader,
    writer: PdfWriter,
    page_extractor: PageExtractor,
}

impl Splitter {
    /// Create a new splitter.
    pub fn new() -> Self {
        Self::default()
    }

    /// Split `config`'s input file before page `k`.
    ///
    /// The first output receives pages `1..k` (empty when `k` is 1), the
    /// second receives `k` through the last page. Both names share one stem
    /// chosen so that neither file already exists.
    ///
    /// # Errors
    ///
    /// Returns an error if `config` does not describe a split, the input
    /// cannot be loaded, the page is out of bounds, or an output cannot be
    /// written. Bounds are checked before anything is written.
    pub async fn split(&self, config: &Config, formatter: &OutputFormatter) -> Result<SplitReport> {
        let Operation::Split { input_file, page } = &config.operation else {
            return Err(PdfToolError::invalid_config(format!(
                "Splitter cannot run a {} operation",
                config.operation.name()
            )));
        };

        let loaded = self.reader.load(input_file).await?;
        let total_pages = loaded.page_count;
        let split_page = validate_split_page(input_file, *page, total_pages)?;

        formatter.info(&format!(
            "Splitting {} before page {split_page}",
            input_file.display()
        ));
        formatter.detail("Pages", &total_pages.to_string());

        let mut first_doc = self
            .page_extractor
            .extract_range(&loaded.document, 1..=split_page - 1);
        let mut second_doc = self
            .page_extractor
            .extract_range(&loaded.document, split_page..=total_pages as u32);
        drop(loaded);

        let first_pages = self.page_extractor.page_count(&first_doc);
        let second_pages = self.page_extractor.page_count(&second_doc);

        let output_dir = config.resolved_output_dir();
        let name = OutputName::next_available_with_suffixes(
            &output_dir,
            SPLIT_BASE_NAME,
            &[FIRST_SUFFIX, SECOND_SUFFIX],
        );
        let first = name.path_with_suffix(FIRST_SUFFIX);
        let second = name.path_with_suffix(SECOND_SUFFIX);

        if first_pages == 0 {
            formatter.warning(&format!(
                "Splitting before page 1 leaves {} without pages",
                first.display()
            ));
        }

        if config.dry_run {
            formatter.info("Dry run: would write:");
            formatter.list_item(&format!("{} ({first_pages} page(s))", first.display()));
            formatter.list_item(&format!("{} ({second_pages} page(s))", second.display()));
        } else {
            let first_stats = self.writer.save(&mut first_doc, &first).await?;
            let second_stats = match self.writer.save(&mut second_doc, &second).await {
                Ok(stats) => stats,
                Err(e) => {
                    let _ = tokio::fs::remove_file(&first).await;
                    return Err(e);
                }
            };

            formatter.success("PDF successfully split into:");
            formatter.list_item(&first.display().to_string());
            formatter.list_item(&second.display().to_string());
            formatter.detail(
                "Write time",
                &format!("{:.2?}", first_stats.write_time + second_stats.write_time),
            );
        }

        Ok(SplitReport {
            source: input_file.clone(),
            page: split_page as usize,
            first,
            first_pages,
            second,
            second_pages,
            dry_run: config.dry_run,
        })
    }
}
