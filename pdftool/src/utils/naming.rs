//! Collision-free output naming.
//!
//! Outputs are never overwritten. Given a base name such as `merged`, the
//! candidates `merged`, `merged0`, `merged1`, ... are tried in order and
//! the first one whose file(s) do not exist yet wins. The numeric suffix is
//! monotonic: `merged` is tried exactly once, then the counter starts at 0.
//!
//! Probing and the later write are separate steps, so two processes racing
//! on the same directory can still pick the same name.

use std::path::{Path, PathBuf};

/// Extension every output carries.
pub const PDF_EXTENSION: &str = "pdf";

/// A resolved output stem inside a target directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutputName {
    directory: PathBuf,
    stem: String,
}

impl OutputName {
    /// First candidate for which `<directory>/<candidate>.pdf` does not exist.
    pub fn next_available(directory: &Path, base_name: &str) -> Self {
        Self::next_available_with_suffixes(directory, base_name, &[""])
    }

    /// First candidate for which every `<directory>/<candidate><suffix>.pdf`
    /// is absent.
    ///
    /// Operations that write several files from one stem (split writes
    /// `<stem>_1.pdf` and `<stem>_2.pdf`) pass all of their suffixes so none
    /// of the real outputs can collide.
    ///
    /// # Examples
    ///
    /// ```no_run
    /// use pdftool::utils::OutputName;
    /// use std::path::Path;
    ///
    /// let name = OutputName::next_available_with_suffixes(Path::new("out"), "split", &["_1", "_2"]);
    /// println!("{}", name.path_with_suffix("_1").display());
    /// ```
    pub fn next_available_with_suffixes(
        directory: &Path,
        base_name: &str,
        suffixes: &[&str],
    ) -> Self {
        let stem = candidates(base_name)
            .find(|candidate| {
                suffixes
                    .iter()
                    .all(|suffix| !pdf_path(directory, candidate, suffix).exists())
            })
            .unwrap_or_else(|| base_name.to_string());

        Self {
            directory: directory.to_path_buf(),
            stem,
        }
    }

    /// The chosen stem, without directory or extension.
    pub fn stem(&self) -> &str {
        &self.stem
    }

    /// Directory the name was resolved in.
    pub fn directory(&self) -> &Path {
        &self.directory
    }

    /// `<directory>/<stem>.pdf`
    pub fn path(&self) -> PathBuf {
        self.path_with_suffix("")
    }

    /// `<directory>/<stem><suffix>.pdf`
    pub fn path_with_suffix(&self, suffix: &str) -> PathBuf {
        pdf_path(&self.directory, &self.stem, suffix)
    }
}

/// Stem of the first non-colliding `<directory>/<candidate>.pdf`.
///
/// Repeated calls against an unchanged directory return the same name.
pub fn next_available_name(directory: &Path, base_name: &str) -> String {
    OutputName::next_available(directory, base_name).stem
}

/// `base`, `base0`, `base1`, `base2`, ...
fn candidates(base_name: &str) -> impl Iterator<Item = String> + '_ {
    std::iter::once(base_name.to_string())
        .chain((0u64..).map(move |counter| format!("{base_name}{counter}")))
}

fn pdf_path(directory: &Path, stem: &str, suffix: &str) -> PathBuf {
    directory.join(format!("{stem}{suffix}.{PDF_EXTENSION}"))
}
