//! Operation executors.
//!
//! One executor per operation: [`merge::Merger`], [`split::Splitter`] and
//! [`compress::Compressor`]. [`execute`] validates a [`Config`] and hands it
//! to the matching executor.

pub mod compress;
pub mod merge;
pub mod pages;
pub mod split;

pub use compress::Compressor;
pub use merge::Merger;
pub use split::Splitter;

use crate::config::{Config, Operation};
use crate::error::Result;
use crate::output::{OutputFormatter, Report};
use crate::process::ProcessRunner;

/// Validate `config` and run its operation, spawning real processes.
///
/// # Examples
///
/// ```no_run
/// use pdftool::config::{Config, Operation};
/// use pdftool::output::OutputFormatter;
/// use std::path::PathBuf;
///
/// # async fn example() -> pdftool::Result<()> {
/// let config = Config::new(Operation::Split {
///     input_file: PathBuf::from("book.pdf"),
///     page: 10,
/// });
/// let report = pdftool::ops::execute(&config, &OutputFormatter::default()).await?;
/// for output in report.outputs() {
///     println!("{}", output.display());
/// }
/// # Ok(())
/// # }
/// ```
pub async fn execute(config: &Config, formatter: &OutputFormatter) -> Result<Report> {
    execute_with(config, formatter, &Compressor::new()).await
}

/// Like [`execute`], compressing through the given compressor.
pub async fn execute_with<R: ProcessRunner>(
    config: &Config,
    formatter: &OutputFormatter,
    compressor: &Compressor<R>,
) -> Result<Report> {
    config.validate()?;

    formatter.debug(&format!(
        "Operation: {} ({})",
        config.operation.name(),
        config.operation.input().display()
    ));
    formatter.debug(&format!(
        "Output directory: {}",
        config.resolved_output_dir().display()
    ));

    match &config.operation {
        Operation::Merge { .. } => Merger::new().merge(config, formatter).await.map(Report::Merge),
        Operation::Split { .. } => Splitter::new().split(config, formatter).await.map(Report::Split),
        Operation::Compress { .. } => compressor
            .compress(config, formatter)
            .await
            .map(Report::Compress),
    }
}
