//! Configuration module for pdftool.
//!
//! This module holds the validated, immutable configuration that drives a
//! single invocation. The CLI builds one [`Config`] and hands it to
//! [`crate::ops::execute`]; nothing downstream reads process arguments.
//! It handles:
//! - The selected operation and its operation-specific inputs
//! - Output directory resolution
//! - The external compressor command template

use std::ffi::OsStr;
use std::fmt;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use crate::error::{PdfToolError, Result};
use crate::io::PdfReader;
use crate::process::ExternalCommand;

/// Ghostscript quality preset handed to the compressor as `{quality}`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CompressionQuality {
    /// Ghostscript's general-purpose default.
    Default,
    /// High quality, colour preserving, 300 dpi images.
    Prepress,
    /// Print quality, 300 dpi images.
    Printer,
    /// Medium quality, 150 dpi images.
    #[default]
    Ebook,
    /// Lowest quality, 72 dpi images, smallest files.
    Screen,
}

impl CompressionQuality {
    /// All accepted names, in the order they are listed in help text.
    pub const NAMES: [&'static str; 5] = ["default", "prepress", "printer", "ebook", "screen"];

    /// Preset name as understood by `-dPDFSETTINGS=/<name>`.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Default => "default",
            Self::Prepress => "prepress",
            Self::Printer => "printer",
            Self::Ebook => "ebook",
            Self::Screen => "screen",
        }
    }
}

impl FromStr for CompressionQuality {
    type Err = PdfToolError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "default" => Ok(Self::Default),
            "prepress" => Ok(Self::Prepress),
            "printer" => Ok(Self::Printer),
            "ebook" => Ok(Self::Ebook),
            "screen" => Ok(Self::Screen),
            _ => Err(PdfToolError::invalid_config(format!(
                "Invalid compression quality: {s}. Must be one of: {}",
                Self::NAMES.join(", ")
            ))),
        }
    }
}

impl fmt::Display for CompressionQuality {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Command template for the external compressor.
///
/// The template is a program followed by arguments. Arguments may contain
/// the placeholders `{input}`, `{output}` and `{quality}`, which are
/// substituted per argument when the command is built. No shell is
/// involved, so paths with spaces or quotes reach the program intact.
///
/// # Examples
///
/// ```
/// use pdftool::config::{CompressionQuality, CompressorCommand};
/// use std::path::Path;
///
/// let template: CompressorCommand = "python3 compress.py -o {output} {input}".parse().unwrap();
/// let command = template.build(
///     Path::new("in put.pdf"),
///     Path::new("out/compressed.pdf"),
///     CompressionQuality::Ebook,
/// );
/// assert_eq!(command.args().len(), 4);
/// assert_eq!(command.args()[3], "in put.pdf");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompressorCommand {
    program: String,
    args: Vec<String>,
}

impl CompressorCommand {
    /// Placeholder replaced by the input PDF path.
    pub const INPUT: &'static str = "{input}";
    /// Placeholder replaced by the output PDF path.
    pub const OUTPUT: &'static str = "{output}";
    /// Placeholder replaced by the quality preset name.
    pub const QUALITY: &'static str = "{quality}";

    /// The default Ghostscript `pdfwrite` invocation.
    pub fn ghostscript() -> Self {
        Self {
            program: "gs".to_string(),
            args: [
                "-sDEVICE=pdfwrite",
                "-dCompatibilityLevel=1.4",
                "-dPDFSETTINGS=/{quality}",
                "-dNOPAUSE",
                "-dQUIET",
                "-dBATCH",
                "-sOutputFile={output}",
                "{input}",
            ]
            .iter()
            .map(|arg| arg.to_string())
            .collect(),
        }
    }

    /// Parse a whitespace separated template.
    ///
    /// Every run of whitespace ends a word and quotes are not interpreted,
    /// so the program and fixed arguments cannot contain spaces. Put such a
    /// program on `PATH` or behind a wrapper script. Paths substituted for
    /// the placeholders may contain spaces since each stays one argument.
    ///
    /// # Errors
    ///
    /// Returns an error if the template is empty or does not mention both
    /// `{input}` and `{output}`.
    pub fn parse(template: &str) -> Result<Self> {
        let mut parts = template.split_whitespace().map(str::to_string);

        let program = parts
            .next()
            .ok_or_else(|| PdfToolError::invalid_config("Compressor command is empty"))?;
        let args: Vec<String> = parts.collect();

        for placeholder in [Self::INPUT, Self::OUTPUT] {
            if !args.iter().any(|arg| arg.contains(placeholder)) {
                return Err(PdfToolError::invalid_config(format!(
                    "Compressor command must contain {placeholder}: {template}"
                )));
            }
        }

        Ok(Self { program, args })
    }

    /// Program name as given in the template.
    pub fn program(&self) -> &str {
        &self.program
    }

    /// Build the concrete command for one compression run.
    pub fn build(
        &self,
        input: &Path,
        output: &Path,
        quality: CompressionQuality,
    ) -> ExternalCommand {
        let vars = [
            (Self::INPUT, input.as_os_str()),
            (Self::OUTPUT, output.as_os_str()),
            (Self::QUALITY, OsStr::new(quality.as_str())),
        ];

        let mut command = ExternalCommand::new(&self.program);
        for arg in &self.args {
            command = command.arg(ExternalCommand::expand(arg, &vars));
        }
        command
    }
}

impl Default for CompressorCommand {
    fn default() -> Self {
        Self::ghostscript()
    }
}

impl FromStr for CompressorCommand {
    type Err = PdfToolError;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

/// The operation selected for this invocation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Operation {
    /// Merge every PDF in a directory.
    Merge {
        /// Directory scanned for `*.pdf` files.
        input_dir: PathBuf,
    },
    /// Split one PDF in two.
    Split {
        /// PDF to split.
        input_file: PathBuf,
        /// 1-based first page of the second output.
        page: i64,
    },
    /// Compress one PDF through the external compressor.
    Compress {
        /// PDF to compress.
        input_file: PathBuf,
    },
}

impl Operation {
    /// Input path of the operation, file or directory.
    pub fn input(&self) -> &Path {
        match self {
            Self::Merge { input_dir } => input_dir,
            Self::Split { input_file, .. } | Self::Compress { input_file } => input_file,
        }
    }

    /// Short operation name.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Merge { .. } => "merge",
            Self::Split { .. } => "split",
            Self::Compress { .. } => "compress",
        }
    }
}

/// Complete configuration for one pdftool invocation.
#[derive(Debug, Clone)]
pub struct Config {
    /// Operation to run.
    pub operation: Operation,

    /// Output directory. Defaults depend on the operation.
    pub output_dir: Option<PathBuf>,

    /// Resolve names and validate, but write nothing.
    pub dry_run: bool,

    /// Verbose output mode.
    pub verbose: bool,

    /// Quiet mode - suppress non-error output.
    pub quiet: bool,

    /// Print the operation report as JSON.
    pub json: bool,

    /// External compressor template.
    pub compressor: CompressorCommand,

    /// Quality preset for the compressor.
    pub quality: CompressionQuality,
}

impl Config {
    /// Create a configuration with default output settings.
    pub fn new(operation: Operation) -> Self {
        Self {
            operation,
            output_dir: None,
            dry_run: false,
            verbose: false,
            quiet: false,
            json: false,
            compressor: CompressorCommand::default(),
            quality: CompressionQuality::default(),
        }
    }

    /// Validate the configuration against the file system.
    ///
    /// The output directory is checked first, then the input.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - Verbose and quiet modes are both enabled
    /// - `output_dir` is given but is not an existing directory
    /// - Merge input is not an existing directory
    /// - Split or compress input is not an existing file
    pub fn validate(&self) -> Result<()> {
        if self.verbose && self.quiet {
            return Err(PdfToolError::invalid_config(
                "Cannot use both --verbose and --quiet",
            ));
        }

        if let Some(ref dir) = self.output_dir {
            if !dir.is_dir() {
                return Err(PdfToolError::invalid_output_dir(dir.clone()));
            }
        }

        match &self.operation {
            Operation::Merge { input_dir } => {
                if !input_dir.is_dir() {
                    return Err(PdfToolError::invalid_input_dir(input_dir.clone()));
                }
            }
            Operation::Split { input_file, .. } | Operation::Compress { input_file } => {
                PdfReader::check_path_exists(input_file)?;
            }
        }

        Ok(())
    }

    /// Directory the operation writes into.
    ///
    /// Merge defaults to its input directory; split and compress default to
    /// the directory containing the input file.
    pub fn resolved_output_dir(&self) -> PathBuf {
        if let Some(ref dir) = self.output_dir {
            return dir.clone();
        }

        match &self.operation {
            Operation::Merge { input_dir } => input_dir.clone(),
            Operation::Split { input_file, .. } | Operation::Compress { input_file } => {
                containing_dir(input_file).to_path_buf()
            }
        }
    }
}

/// Directory that holds `path`, `.` for bare file names.
pub fn containing_dir(path: &Path) -> &Path {
    match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    }
}
