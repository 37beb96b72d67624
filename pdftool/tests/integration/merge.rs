//! Integration tests for merging a directory.

use pdftool::config::Operation;
use pdftool::error::PdfToolError;
use pdftool::ops;
use pdftool::output::{OutputFormatter, Report};
use std::path::PathBuf;
use tempfile::TempDir;

use crate::common::{
    file_names, markers, page_markers, page_rotations, quiet_config, write_pdf, write_rotated_pdf,
};

fn merge_op(dir: &std::path::Path) -> Operation {
    Operation::Merge {
        input_dir: dir.to_path_buf(),
    }
}

#[tokio::test]
async fn test_merge_all_pages_in_order() {
    let temp_dir = TempDir::new().unwrap();
    write_pdf(temp_dir.path(), "01-cover.pdf", "cover", 1);
    write_pdf(temp_dir.path(), "02-body.pdf", "body", 4);
    write_pdf(temp_dir.path(), "03-appendix.pdf", "appendix", 2);

    let config = quiet_config(merge_op(temp_dir.path()));
    let report = ops::execute(&config, &OutputFormatter::quiet())
        .await
        .unwrap();

    let Report::Merge(report) = report else {
        panic!("expected a merge report");
    };
    assert_eq!(report.output, temp_dir.path().join("merged.pdf"));
    assert_eq!(report.total_pages, 7);

    let mut expected = markers("cover", 1..=1);
    expected.extend(markers("body", 1..=4));
    expected.extend(markers("appendix", 1..=2));
    assert_eq!(page_markers(&report.output), expected);
}

#[tokio::test]
async fn test_merge_ignores_other_files() {
    let temp_dir = TempDir::new().unwrap();
    write_pdf(temp_dir.path(), "a.pdf", "a", 2);
    std::fs::write(temp_dir.path().join("readme.txt"), b"hello").unwrap();
    std::fs::create_dir(temp_dir.path().join("nested.pdf")).unwrap();
    write_pdf(&temp_dir.path().join("nested.pdf"), "inner.pdf", "inner", 1);

    let config = quiet_config(merge_op(temp_dir.path()));
    let report = ops::execute(&config, &OutputFormatter::quiet())
        .await
        .unwrap();

    assert_eq!(page_markers(report.outputs()[0]), markers("a", 1..=2));
}

#[tokio::test]
async fn test_merge_twice_picks_next_name() {
    let temp_dir = TempDir::new().unwrap();
    let out_dir = TempDir::new().unwrap();
    write_pdf(temp_dir.path(), "a.pdf", "a", 1);
    write_pdf(temp_dir.path(), "b.pdf", "b", 1);

    let mut config = quiet_config(merge_op(temp_dir.path()));
    config.output_dir = Some(out_dir.path().to_path_buf());

    for _ in 0..3 {
        ops::execute(&config, &OutputFormatter::quiet())
            .await
            .unwrap();
    }

    assert_eq!(
        file_names(out_dir.path()),
        ["merged.pdf", "merged0.pdf", "merged1.pdf"]
    );
}

#[tokio::test]
async fn test_merge_empty_directory_writes_nothing() {
    let temp_dir = TempDir::new().unwrap();

    let config = quiet_config(merge_op(temp_dir.path()));
    let err = ops::execute(&config, &OutputFormatter::quiet())
        .await
        .unwrap_err();

    assert!(matches!(err, PdfToolError::NoInputFiles { .. }));
    assert_eq!(err.exit_code(), 1);
    assert!(file_names(temp_dir.path()).is_empty());
}

#[tokio::test]
async fn test_merge_input_must_be_directory() {
    let temp_dir = TempDir::new().unwrap();
    let file = write_pdf(temp_dir.path(), "a.pdf", "a", 1);

    let config = quiet_config(merge_op(&file));
    let err = ops::execute(&config, &OutputFormatter::quiet())
        .await
        .unwrap_err();

    assert!(matches!(err, PdfToolError::InvalidDirectory { role: "input", .. }));
}

#[tokio::test]
async fn test_merge_directory_with_glob_characters() {
    let temp_dir = TempDir::new().unwrap();
    let tricky = temp_dir.path().join("scans [2024]");
    std::fs::create_dir(&tricky).unwrap();
    write_pdf(&tricky, "a.pdf", "a", 2);

    let config = quiet_config(merge_op(&tricky));
    let report = ops::execute(&config, &OutputFormatter::quiet())
        .await
        .unwrap();

    let outputs: Vec<PathBuf> = report.outputs().into_iter().cloned().collect();
    assert_eq!(outputs, [tricky.join("merged.pdf")]);
    assert_eq!(page_markers(&outputs[0]), markers("a", 1..=2));
}

#[tokio::test]
async fn test_merge_keeps_each_document_rotation() {
    let temp_dir = TempDir::new().unwrap();
    write_rotated_pdf(temp_dir.path(), "a.pdf", "a", 2, 90);
    write_pdf(temp_dir.path(), "b.pdf", "b", 1);
    write_rotated_pdf(temp_dir.path(), "c.pdf", "c", 1, 270);

    let config = quiet_config(merge_op(temp_dir.path()));
    let report = ops::execute(&config, &OutputFormatter::quiet())
        .await
        .unwrap();

    let output = report.outputs()[0];
    let mut expected = markers("a", 1..=2);
    expected.extend(markers("b", 1..=1));
    expected.extend(markers("c", 1..=1));
    assert_eq!(page_markers(output), expected);
    assert_eq!(
        page_rotations(output),
        [Some(90), Some(90), None, Some(270)]
    );
}

#[tokio::test]
async fn test_merge_skips_hidden_files() {
    let temp_dir = TempDir::new().unwrap();
    write_pdf(temp_dir.path(), "a.pdf", "a", 1);
    std::fs::write(temp_dir.path().join("._a.pdf"), b"AppleDouble").unwrap();

    let config = quiet_config(merge_op(temp_dir.path()));
    let report = ops::execute(&config, &OutputFormatter::quiet())
        .await
        .unwrap();

    assert_eq!(page_markers(report.outputs()[0]), markers("a", 1..=1));
}

#[cfg(target_os = "linux")]
#[tokio::test]
async fn test_merge_non_utf8_directory() {
    use std::ffi::OsStr;
    use std::os::unix::ffi::OsStrExt;

    let temp_dir = TempDir::new().unwrap();
    let dir = temp_dir.path().join(OsStr::from_bytes(b"scans\xff"));
    std::fs::create_dir(&dir).unwrap();
    write_pdf(&dir, "a.pdf", "a", 2);

    let config = quiet_config(merge_op(&dir));
    let report = ops::execute(&config, &OutputFormatter::quiet())
        .await
        .unwrap();

    assert_eq!(report.outputs()[0], &dir.join("merged.pdf"));
    assert_eq!(page_markers(&dir.join("merged.pdf")), markers("a", 1..=2));
}
