//! Compress one PDF by delegating to an external program.

use crate::config::{Config, Operation};
use crate::error::{PdfToolError, Result};
use crate::output::{CompressReport, OutputFormatter};
use crate::process::{ProcessRunner, SystemRunner};
use crate::utils::{OutputName, format_file_size};

/// Base name of compression outputs.
pub const COMPRESSED_BASE_NAME: &str = "compressed";

/// Runs the configured compressor command for one input file.
#[derive(Debug, Default)]
pub struct Compressor<R = SystemRunner> {
    runner: R,
}

impl Compressor<SystemRunner> {
    /// Create a compressor that spawns real processes.
    pub fn new() -> Self {
        Self::default()
    }
}

impl<R: ProcessRunner> Compressor<R> {
    /// Create a compressor that runs commands through `runner`.
    pub fn with_runner(runner: R) -> Self {
        Self { runner }
    }

    /// Compress `config`'s input file into `<output_dir>/compressed<N>.pdf`.
    ///
    /// The compressor is trusted to write the output itself; success is
    /// judged by its exit code alone.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - `config` does not describe a compression
    /// - The compressor cannot be started
    /// - The compressor exits non-zero or is killed by a signal
    pub async fn compress(
        &self,
        config: &Config,
        formatter: &OutputFormatter,
    ) -> Result<CompressReport> {
        let Operation::Compress { input_file } = &config.operation else {
            return Err(PdfToolError::invalid_config(format!(
                "Compressor cannot run a {} operation",
                config.operation.name()
            )));
        };

        let output_dir = config.resolved_output_dir();
        let output = OutputName::next_available(&output_dir, COMPRESSED_BASE_NAME).path();
        let command = config.compressor.build(input_file, &output, config.quality);

        formatter.debug(&format!("Running: {command}"));

        if config.dry_run {
            formatter.info(&format!("Dry run: would run: {command}"));
        } else {
            let code = self.runner.run(&command).await?;
            if code != Some(0) {
                return Err(PdfToolError::ExternalToolFailure {
                    program: config.compressor.program().to_string(),
                    code,
                });
            }

            formatter.success(&format!("Compressed pdf written to: {}", output.display()));

            if formatter.is_verbose() {
                let before = tokio::fs::metadata(input_file).await.map(|m| m.len());
                let after = tokio::fs::metadata(&output).await.map(|m| m.len());
                if let (Ok(before), Ok(after)) = (before, after) {
                    formatter.detail("Input size", &format_file_size(before));
                    formatter.detail("Output size", &format_file_size(after));
                }
            }
        }

        Ok(CompressReport {
            source: input_file.clone(),
            output,
            command: command.to_string(),
            dry_run: config.dry_run,
        })
    }
}
