//! Utilities for file discovery, output naming and display helpers.

pub mod naming;

pub use naming::{OutputName, next_available_name};

use std::path::{Path, PathBuf};

/// Find all regular files in `directory` whose name matches `*.<extension>`.
///
/// The search is not recursive and the match is case-sensitive. Hidden
/// files (a leading `.`) and names that are not valid UTF-8 are skipped.
/// Only file names go through the pattern, so the directory path is used
/// as is. Results are sorted by file name. An unreadable or missing
/// directory yields an empty list, as does a directory without matches.
///
/// # Examples
///
/// ```no_run
/// use pdftool::utils::find_files;
/// use std::path::Path;
///
/// for pdf in find_files(Path::new("scans"), "pdf") {
///     println!("{}", pdf.display());
/// }
/// ```
pub fn find_files(directory: &Path, extension: &str) -> Vec<PathBuf> {
    let Ok(pattern) = glob::Pattern::new(&format!("*.{}", glob::Pattern::escape(extension))) else {
        return Vec::new();
    };
    let options = glob::MatchOptions {
        require_literal_leading_dot: true,
        ..glob::MatchOptions::new()
    };

    let Ok(entries) = std::fs::read_dir(directory) else {
        return Vec::new();
    };

    let mut files: Vec<PathBuf> = entries
        .filter_map(|entry| entry.ok())
        .filter(|entry| {
            entry
                .file_name()
                .to_str()
                .is_some_and(|name| pattern.matches_with(name, options))
        })
        .map(|entry| entry.path())
        .filter(|path| path.is_file())
        .collect();

    files.sort();
    files
}

/// Format file size as human-readable string.
pub fn format_file_size(size: u64) -> String {
    const KB: u64 = 1024;
    const MB: u64 = KB * 1024;
    const GB: u64 = MB * 1024;

    if size >= GB {
        format!("{:.2} GB", size as f64 / GB as f64)
    } else if size >= MB {
        format!("{:.2} MB", size as f64 / MB as f64)
    } else if size >= KB {
        format!("{:.2} KB", size as f64 / KB as f64)
    } else {
        format!("{size} bytes")
    }
}
