//! CLI argument parsing for pdftool.
//!
//! This module defines the command-line interface structure using `clap`
//! and turns parsed arguments into a [`Config`].

use clap::{ArgGroup, Parser};
use std::ffi::OsString;
use std::path::PathBuf;

use pdftool::config::{CompressionQuality, CompressorCommand, Config, Operation};
use pdftool::error::{PdfToolError, Result};

/// Merge, split and compress PDF files.
///
/// Exactly one of --merge_dir, --split or --compress selects the operation.
/// Outputs are written next to the input unless --output is given, and an
/// existing file is never overwritten: the tool picks merged.pdf,
/// merged0.pdf, merged1.pdf, ... (likewise split_1.pdf/split_2.pdf and
/// compressed.pdf).
#[derive(Parser, Debug)]
#[command(name = "pdftool")]
#[command(version)]
#[command(about = "Merge, split and compress PDF files", long_about = None)]
#[command(author)]
#[command(arg_required_else_help = true)]
#[command(group(ArgGroup::new("mode").args(["merge_dir", "split", "compress"]).multiple(false)))]
pub struct Cli {
    /// Merge every PDF in the --input directory (also: -md)
    #[arg(long = "merge_dir", visible_alias = "merge-dir")]
    pub merge_dir: bool,

    /// Split the --input PDF before --page
    #[arg(short, long)]
    pub split: bool,

    /// Compress the --input PDF with an external tool
    #[arg(short, long)]
    pub compress: bool,

    /// Input directory (merge) or PDF file (split, compress)
    #[arg(short, long, value_name = "PATH")]
    pub input: PathBuf,

    /// Output directory, must already exist
    ///
    /// Defaults to the input directory for merges and to the directory
    /// containing the input file for split and compress.
    #[arg(short, long, value_name = "DIR")]
    pub output: Option<PathBuf>,

    /// Page that starts the second half of a split (1-based)
    ///
    /// Pages before it go to <name>_1.pdf, the page itself and everything
    /// after it to <name>_2.pdf.
    #[arg(short, long, value_name = "PAGE", allow_negative_numbers = true)]
    pub page: Option<i64>,

    /// Dry run - validate and resolve output names without writing anything
    #[arg(short = 'n', long)]
    pub dry_run: bool,

    /// Verbose output - show page counts, sizes and the compressor command
    #[arg(short, long)]
    pub verbose: bool,

    /// Suppress all non-error output
    #[arg(short, long, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Print a JSON report of the operation on stdout
    ///
    /// Implies --quiet for all other output.
    #[arg(long)]
    pub json: bool,

    /// Compressor command template
    ///
    /// Whitespace separated program and arguments. {input}, {output} and
    /// {quality} are replaced in each argument. No shell is involved and
    /// quotes are not interpreted, so the program and fixed arguments cannot
    /// contain spaces; use a wrapper script on PATH for such programs.
    ///
    /// Example:
    ///   --compressor "qpdf --object-streams=generate {input} {output}"
    #[arg(long, value_name = "COMMAND", env = "PDFTOOL_COMPRESSOR")]
    pub compressor: Option<String>,

    /// Quality preset passed to the compressor as {quality}
    #[arg(long, value_name = "LEVEL", default_value = "ebook")]
    #[arg(value_parser = CompressionQuality::NAMES)]
    pub quality: String,
}

/// Rewrite the single-dash `-md` spelling to `--merge_dir`.
///
/// clap short flags are one character long, so `-md` would otherwise parse
/// as `-m -d`. Arguments after a literal `--` are left alone.
pub fn normalize_args<I, T>(args: I) -> Vec<OsString>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString>,
{
    let mut after_separator = false;

    args.into_iter()
        .map(Into::into)
        .map(|arg| {
            if after_separator {
                return arg;
            }
            if arg == "--" {
                after_separator = true;
                return arg;
            }
            if arg == "-md" {
                OsString::from("--merge_dir")
            } else {
                arg
            }
        })
        .collect()
}

impl Cli {
    /// Parse the process arguments, accepting `-md`.
    pub fn parse_normalized() -> Self {
        Self::parse_from(normalize_args(std::env::args_os()))
    }

    /// Selected operation.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - No mode flag was given
    /// - Split was selected without --page
    /// - --page was given for a mode other than split
    pub fn operation(&self) -> Result<Operation> {
        if self.page.is_some() && !self.split {
            return Err(PdfToolError::usage("--page can only be used with --split"));
        }

        if self.merge_dir {
            Ok(Operation::Merge {
                input_dir: self.input.clone(),
            })
        } else if self.split {
            let page = self.page.ok_or(PdfToolError::MissingPageArgument)?;
            Ok(Operation::Split {
                input_file: self.input.clone(),
                page,
            })
        } else if self.compress {
            Ok(Operation::Compress {
                input_file: self.input.clone(),
            })
        } else {
            Err(PdfToolError::usage(
                "No operation selected; use one of --merge_dir (-md), --split (-s) or --compress (-c)",
            ))
        }
    }

    /// Convert CLI arguments into a Config.
    ///
    /// File system checks are left to [`Config::validate`].
    ///
    /// # Errors
    ///
    /// Returns an error if the operation cannot be resolved, the quality
    /// preset is unknown, or the compressor template is invalid.
    pub fn to_config(&self) -> Result<Config> {
        let mut config = Config::new(self.operation()?);

        config.output_dir = self.output.clone();
        config.dry_run = self.dry_run;
        config.verbose = self.verbose;
        config.quiet = self.quiet;
        config.json = self.json;
        config.quality = self.quality.parse()?;

        if let Some(ref template) = self.compressor {
            config.compressor = CompressorCommand::parse(template)?;
        }

        Ok(config)
    }
}
