//! pdftool - Merge, split and compress PDF files.

mod cli;

use std::process;

use crate::cli::Cli;
use pdftool::Config;
use pdftool::error::PdfToolError;
use pdftool::ops;
use pdftool::output::OutputFormatter;

#[tokio::main(flavor = "current_thread")]
async fn main() {
    let cli = Cli::parse_normalized();

    let config = match cli.to_config() {
        Ok(config) => config,
        Err(err) => exit_with(&OutputFormatter::default(), err),
    };
    let formatter = OutputFormatter::from_config(&config);

    if let Err(err) = run(&config, &formatter).await {
        exit_with(&formatter, err);
    }
}

/// Report `err` on stderr and exit with its code.
fn exit_with(formatter: &OutputFormatter, err: PdfToolError) -> ! {
    formatter.error(&format!("Error: {err}"));
    process::exit(err.exit_code());
}

/// Main application logic.
async fn run(config: &Config, formatter: &OutputFormatter) -> Result<(), PdfToolError> {
    formatter.debug(&format!("{} v{}", pdftool::NAME, pdftool::VERSION));

    let report = ops::execute(config, formatter).await?;

    if config.json {
        println!("{}", report.to_json()?);
    } else if config.dry_run {
        formatter.blank_line();
        formatter.success("Dry run completed successfully");
        formatter.info("  Run without --dry-run to write the output");
    }

    Ok(())
}
