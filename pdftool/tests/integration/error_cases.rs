//! Integration tests for error handling and edge cases.

use pdftool::config::Operation;
use pdftool::error::PdfToolError;
use pdftool::ops;
use pdftool::output::OutputFormatter;
use std::path::PathBuf;
use tempfile::TempDir;

use crate::common::{file_names, quiet_config, write_pdf};

#[tokio::test]
async fn test_error_invalid_output_directory() {
    let temp_dir = TempDir::new().unwrap();
    let input = write_pdf(temp_dir.path(), "book.pdf", "p", 2);

    let mut config = quiet_config(Operation::Split {
        input_file: input,
        page: 1,
    });
    config.output_dir = Some(temp_dir.path().join("nope"));

    let err = ops::execute(&config, &OutputFormatter::quiet())
        .await
        .unwrap_err();

    assert!(matches!(err, PdfToolError::InvalidDirectory { role: "output", .. }));
    assert_eq!(err.exit_code(), 1);
    assert_eq!(file_names(temp_dir.path()), ["book.pdf"]);
}

#[tokio::test]
async fn test_error_output_is_a_file() {
    let temp_dir = TempDir::new().unwrap();
    let input = write_pdf(temp_dir.path(), "book.pdf", "p", 2);

    let mut config = quiet_config(Operation::Merge {
        input_dir: temp_dir.path().to_path_buf(),
    });
    config.output_dir = Some(input);

    let err = ops::execute(&config, &OutputFormatter::quiet())
        .await
        .unwrap_err();
    assert!(matches!(err, PdfToolError::InvalidDirectory { .. }));
}

#[tokio::test]
async fn test_error_nonexistent_input() {
    let config = quiet_config(Operation::Split {
        input_file: PathBuf::from("/nonexistent/file.pdf"),
        page: 1,
    });

    let err = ops::execute(&config, &OutputFormatter::quiet())
        .await
        .unwrap_err();
    assert!(matches!(err, PdfToolError::FileNotFound { .. }));
}

#[tokio::test]
async fn test_error_input_is_directory() {
    let temp_dir = TempDir::new().unwrap();

    let config = quiet_config(Operation::Compress {
        input_file: temp_dir.path().to_path_buf(),
    });

    let err = ops::execute(&config, &OutputFormatter::quiet())
        .await
        .unwrap_err();
    assert!(matches!(err, PdfToolError::NotAFile { .. }));
}

#[tokio::test]
async fn test_error_messages_are_readable() {
    let temp_dir = TempDir::new().unwrap();
    let input = write_pdf(temp_dir.path(), "book.pdf", "p", 3);

    let config = quiet_config(Operation::Split {
        input_file: input,
        page: 9,
    });

    let err = ops::execute(&config, &OutputFormatter::quiet())
        .await
        .unwrap_err();

    let message = err.to_string();
    assert!(message.contains("Page 9"));
    assert!(message.contains("book.pdf"));
    assert!(message.contains("between 1 and 3"));
}
