//! Integration tests for splitting a document.

use pdftool::config::Operation;
use pdftool::error::PdfToolError;
use pdftool::ops;
use pdftool::output::{OutputFormatter, Report};
use rstest::rstest;
use serial_test::serial;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

use crate::common::{file_names, markers, page_markers, quiet_config, write_pdf};

fn split_op(input_file: &Path, page: i64) -> Operation {
    Operation::Split {
        input_file: input_file.to_path_buf(),
        page,
    }
}

#[rstest]
#[case(1)]
#[case(4)]
#[case(7)]
#[case(10)]
#[tokio::test]
async fn test_split_halves_concatenate_to_input(#[case] page: i64) {
    let temp_dir = TempDir::new().unwrap();
    let input = write_pdf(temp_dir.path(), "book.pdf", "p", 10);

    let config = quiet_config(split_op(&input, page));
    let report = ops::execute(&config, &OutputFormatter::quiet())
        .await
        .unwrap();

    let Report::Split(report) = report else {
        panic!("expected a split report");
    };

    let k = page as usize;
    assert_eq!(report.first_pages, k - 1);
    assert_eq!(report.second_pages, 10 - (k - 1));

    let first = page_markers(&report.first);
    let second = page_markers(&report.second);
    assert_eq!(first, markers("p", 1..=k - 1));
    assert_eq!(second, markers("p", k..=10));

    let mut all = first;
    all.extend(second);
    assert_eq!(all, markers("p", 1..=10));
}

#[rstest]
#[case(0)]
#[case(11)]
#[case(-1)]
#[case(-100)]
#[tokio::test]
async fn test_split_out_of_bounds_writes_nothing(#[case] page: i64) {
    let temp_dir = TempDir::new().unwrap();
    let input = write_pdf(temp_dir.path(), "book.pdf", "p", 10);

    let config = quiet_config(split_op(&input, page));
    let err = ops::execute(&config, &OutputFormatter::quiet())
        .await
        .unwrap_err();

    match err {
        PdfToolError::PageOutOfBounds {
            page: reported,
            total_pages,
            ..
        } => {
            assert_eq!(reported, page);
            assert_eq!(total_pages, 10);
        }
        other => panic!("unexpected error: {other}"),
    }
    assert_eq!(file_names(temp_dir.path()), ["book.pdf"]);
}

#[tokio::test]
async fn test_split_names_share_a_stem() {
    let temp_dir = TempDir::new().unwrap();
    let input = write_pdf(temp_dir.path(), "book.pdf", "p", 3);
    std::fs::write(temp_dir.path().join("split.pdf"), b"").unwrap();
    std::fs::write(temp_dir.path().join("split0_2.pdf"), b"").unwrap();

    let config = quiet_config(split_op(&input, 2));
    let report = ops::execute(&config, &OutputFormatter::quiet())
        .await
        .unwrap();

    assert_eq!(
        report.outputs(),
        [
            &temp_dir.path().join("split_1.pdf"),
            &temp_dir.path().join("split_2.pdf")
        ]
    );

    let report = ops::execute(&config, &OutputFormatter::quiet())
        .await
        .unwrap();
    assert_eq!(
        report.outputs(),
        [
            &temp_dir.path().join("split1_1.pdf"),
            &temp_dir.path().join("split1_2.pdf")
        ]
    );
}

#[tokio::test]
async fn test_split_unreadable_pdf() {
    let temp_dir = TempDir::new().unwrap();
    let input = temp_dir.path().join("broken.pdf");
    std::fs::write(&input, b"%PDF-1.4 truncated").unwrap();

    let config = quiet_config(split_op(&input, 1));
    let err = ops::execute(&config, &OutputFormatter::quiet())
        .await
        .unwrap_err();

    assert!(matches!(err, PdfToolError::FailedToLoadPdf { .. }));
    assert_eq!(err.exit_code(), 3);
}

#[tokio::test]
#[serial]
async fn test_split_bare_file_name_writes_to_current_dir() {
    let temp_dir = TempDir::new().unwrap();
    write_pdf(temp_dir.path(), "book.pdf", "p", 2);

    let previous = std::env::current_dir().unwrap();
    std::env::set_current_dir(temp_dir.path()).unwrap();

    let config = quiet_config(split_op(Path::new("book.pdf"), 2));
    let result = ops::execute(&config, &OutputFormatter::quiet()).await;

    std::env::set_current_dir(previous).unwrap();

    let report = result.unwrap();
    assert_eq!(
        report.outputs(),
        [&PathBuf::from("./split_1.pdf"), &PathBuf::from("./split_2.pdf")]
    );
    assert_eq!(
        file_names(temp_dir.path()),
        ["book.pdf", "split_1.pdf", "split_2.pdf"]
    );
}
