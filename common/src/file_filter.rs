//! Helpers for file-save dialogs whose filters look like
//! `"Comma separated file (*.csv)"` or `"Images (*.png *.jpg)"`.
//!
//! The dialog itself belongs to the GUI toolkit. These helpers only decide
//! which suffix a filter implies and whether the chosen path needs it.

use std::{
    ffi::OsString,
    path::{Path, PathBuf},
};

/// Extract the first file suffix from a dialog filter string.
///
/// ex: `"Comma separated file (*.csv)"` -> `Some("csv")`
/// ex: `"Images (*.png *.jpg)"` -> `Some("png")`
/// ex: `"All files (*)"` -> `None`
pub fn filter_suffix(filter: &str) -> Option<&str> {
    let (_description, patterns) = filter.rsplit_once(" (")?;
    let patterns = patterns.strip_suffix(')')?;
    let first = patterns.split_ascii_whitespace().next()?;
    let suffix = first.strip_prefix("*.")?;

    let is_plain_suffix = !suffix.is_empty()
        && !suffix.contains(|c: char| matches!(c, '*' | '?' | '/' | '\\'));
    is_plain_suffix.then_some(suffix)
}

/// Append the suffix implied by `filter` to `path` if `path` doesn't already
/// have an extension. An empty path (a cancelled dialog) is returned as-is.
///
/// A trailing `.` counts as "no extension" and is reused, so `report.` with a
/// CSV filter becomes `report.csv`.
pub fn with_default_suffix(path: &Path, filter: &str) -> PathBuf {
    let suffix = match filter_suffix(filter) {
        Some(suffix) => suffix,
        None => return path.to_path_buf(),
    };
    if path.as_os_str().is_empty() {
        return path.to_path_buf();
    }

    match path.extension() {
        Some(ext) if !ext.is_empty() => path.to_path_buf(),
        _ => {
            let mut out = OsString::from(path.as_os_str());
            if !path.as_os_str().to_string_lossy().ends_with('.') {
                out.push(".");
            }
            out.push(suffix);
            PathBuf::from(out)
        }
    }
}
