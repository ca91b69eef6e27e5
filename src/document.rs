//! Log document - the lines of one loaded file

use std::path::Path;

use crate::highlight::contains_match;

/// Prefix of the synthetic line shown when a file cannot be read
pub const LOAD_ERROR_PREFIX: &str = "Error loading log file: ";

/// A loaded log file
#[derive(Debug)]
pub struct LogDocument {
    /// Lines of text in file order
    lines: Vec<String>,
    /// Display name (file name component)
    name: String,
    /// Whether `lines` holds the load error instead of file contents
    load_failed: bool,
}

impl LogDocument {
    /// Load a document from a file.
    ///
    /// Never fails: when the file cannot be read the document consists of
    /// a single line describing the error.
    pub fn open(path: &Path) -> Self {
        let name = path
            .file_name()
            .map(|s| s.to_string_lossy().into_owned())
            .unwrap_or_else(|| path.to_string_lossy().into_owned());

        match std::fs::read_to_string(path) {
            Ok(content) => {
                let lines: Vec<String> = content.lines().map(str::to_owned).collect();
                tracing::info!(path = %path.display(), lines = lines.len(), "loaded log file");
                Self {
                    lines,
                    name,
                    load_failed: false,
                }
            }
            Err(e) => {
                tracing::error!(path = %path.display(), error = %e, "failed to load log file");
                Self {
                    lines: vec![format!("{}{}", LOAD_ERROR_PREFIX, e)],
                    name,
                    load_failed: true,
                }
            }
        }
    }

    /// Get document name
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Whether the file could not be read
    pub fn is_error(&self) -> bool {
        self.load_failed
    }

    /// Get line count
    pub fn line_count(&self) -> usize {
        self.lines.len()
    }

    /// Get a line by index
    pub fn line(&self, idx: usize) -> Option<&str> {
        self.lines.get(idx).map(String::as_str)
    }

    /// First line at or after `from` containing `query`, wrapping around
    pub fn find_next(&self, query: &str, from: usize) -> Option<usize> {
        let count = self.lines.len();
        if query.is_empty() || count == 0 {
            return None;
        }
        let from = from % count;
        (0..count)
            .map(|offset| (from + offset) % count)
            .find(|&idx| contains_match(&self.lines[idx], query))
    }

    /// Last line at or before `from` containing `query`, wrapping around
    pub fn find_prev(&self, query: &str, from: usize) -> Option<usize> {
        let count = self.lines.len();
        if query.is_empty() || count == 0 {
            return None;
        }
        let from = from.min(count - 1);
        (0..count)
            .map(|offset| (from + count - offset) % count)
            .find(|&idx| contains_match(&self.lines[idx], query))
    }
}
