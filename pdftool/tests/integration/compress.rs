//! Integration tests for compression through an external program.

use pdftool::config::{CompressorCommand, Operation};
use pdftool::error::{PdfToolError, Result};
use pdftool::ops::{self, Compressor};
use pdftool::output::{OutputFormatter, Report};
use pdftool::process::{ExternalCommand, ProcessRunner};
use std::path::Path;
use std::sync::Mutex;
use tempfile::TempDir;

use crate::common::{file_names, page_markers, quiet_config, write_pdf};

/// Pretends to be the compressor, answering with a fixed exit code.
struct ScriptedRunner {
    code: Option<i32>,
    seen: Mutex<Vec<ExternalCommand>>,
}

impl ScriptedRunner {
    fn new(code: Option<i32>) -> Self {
        Self {
            code,
            seen: Mutex::new(Vec::new()),
        }
    }
}

impl ProcessRunner for ScriptedRunner {
    async fn run(&self, command: &ExternalCommand) -> Result<Option<i32>> {
        self.seen.lock().unwrap().push(command.clone());
        Ok(self.code)
    }
}

fn compress_op(input_file: &Path) -> Operation {
    Operation::Compress {
        input_file: input_file.to_path_buf(),
    }
}

#[tokio::test]
async fn test_compress_exit_zero_reports_output() {
    let temp_dir = TempDir::new().unwrap();
    let input = write_pdf(temp_dir.path(), "scan.pdf", "s", 1);

    let compressor = Compressor::with_runner(ScriptedRunner::new(Some(0)));
    let config = quiet_config(compress_op(&input));

    let report = ops::execute_with(&config, &OutputFormatter::quiet(), &compressor)
        .await
        .unwrap();

    let Report::Compress(report) = report else {
        panic!("expected a compress report");
    };
    assert_eq!(report.output, temp_dir.path().join("compressed.pdf"));
    assert!(report.command.contains("-dPDFSETTINGS=/ebook"));
}

#[tokio::test]
async fn test_compress_exit_one_is_failure() {
    let temp_dir = TempDir::new().unwrap();
    let input = write_pdf(temp_dir.path(), "scan.pdf", "s", 1);

    let compressor = Compressor::with_runner(ScriptedRunner::new(Some(1)));
    let config = quiet_config(compress_op(&input));

    let err = ops::execute_with(&config, &OutputFormatter::quiet(), &compressor)
        .await
        .unwrap_err();

    match &err {
        PdfToolError::ExternalToolFailure { program, code } => {
            assert_eq!(program, "gs");
            assert_eq!(*code, Some(1));
        }
        other => panic!("unexpected error: {other}"),
    }
    assert_eq!(err.exit_code(), 4);
}

#[tokio::test]
async fn test_compress_missing_program() {
    let temp_dir = TempDir::new().unwrap();
    let input = write_pdf(temp_dir.path(), "scan.pdf", "s", 1);

    let mut config = quiet_config(compress_op(&input));
    config.compressor =
        CompressorCommand::parse("pdftool-missing-compressor {input} {output}").unwrap();

    let err = ops::execute(&config, &OutputFormatter::quiet())
        .await
        .unwrap_err();

    assert!(matches!(err, PdfToolError::ExternalToolUnavailable { .. }));
    assert_eq!(err.exit_code(), 4);
    assert_eq!(file_names(temp_dir.path()), ["scan.pdf"]);
}

#[cfg(unix)]
#[tokio::test]
async fn test_compress_with_real_process() {
    let temp_dir = TempDir::new().unwrap();
    let input = write_pdf(temp_dir.path(), "my scan.pdf", "s", 3);

    let mut config = quiet_config(compress_op(&input));
    config.compressor = CompressorCommand::parse("cp {input} {output}").unwrap();

    let report = ops::execute(&config, &OutputFormatter::quiet())
        .await
        .unwrap();

    let output = report.outputs()[0].clone();
    assert_eq!(output, temp_dir.path().join("compressed.pdf"));
    assert_eq!(page_markers(&output), ["s-1", "s-2", "s-3"]);
}

#[cfg(unix)]
#[tokio::test]
async fn test_compress_real_process_failure() {
    let temp_dir = TempDir::new().unwrap();
    let input = write_pdf(temp_dir.path(), "scan.pdf", "s", 1);

    let mut config = quiet_config(compress_op(&input));
    config.compressor = CompressorCommand::parse("false {input} {output}").unwrap();

    let err = ops::execute(&config, &OutputFormatter::quiet())
        .await
        .unwrap_err();

    assert!(matches!(
        err,
        PdfToolError::ExternalToolFailure { code: Some(1), .. }
    ));
    assert!(!temp_dir.path().join("compressed.pdf").exists());
}
