//! A single diary entry on disk.

use std::fs;
use std::path::{Path, PathBuf};

use crate::encoding;
use crate::error::{Error, Result};
use crate::latex;

/// Marker token every entry directory must start with, as in
/// `diary_2001/2001_08_12.txt`.
pub const CHAPTER_MARKER: &str = "diary";

/// One diary entry: a plain text file whose first line is the date, followed
/// by a blank line and the body.
///
/// Entries are read once per conversion run and never mutated. The section
/// heading comes from the first line; the chapter name comes from the parent
/// directory.
#[derive(Debug, Clone)]
pub struct Entry {
    path: PathBuf,
}

impl Entry {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Entry { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Read, decode, and transcode this entry into LaTeX.
    ///
    /// # Errors
    ///
    /// [`Error::EntryNotFound`] if the file is missing or unreadable;
    /// [`Error::Decoding`] if the detected encoding cannot decode its bytes.
    pub fn to_latex(&self) -> Result<String> {
        if !self.path.exists() {
            return Err(Error::EntryNotFound(self.path.clone()));
        }
        let raw = fs::read(&self.path).map_err(|_| Error::EntryNotFound(self.path.clone()))?;
        let text = encoding::decode(&raw, &self.path)?;
        Ok(latex::transcode(&text))
    }

    /// Derive the chapter name from this entry's parent directory.
    ///
    /// The directory name is split on `_`; everything after the marker is
    /// title-cased per word and joined with spaces, so `diary_long_example`
    /// becomes `Long Example`.
    ///
    /// # Panics
    ///
    /// Panics if the parent directory does not start with
    /// [`CHAPTER_MARKER`] followed by `_`. That is malformed input
    /// structure, not a recoverable error.
    pub fn chapter_name(&self) -> String {
        let Some(dir) = self.path.parent().and_then(Path::file_name) else {
            panic!("entry '{}' has no parent directory", self.path.display());
        };
        let dir = dir.to_string_lossy();

        let mut parts = dir.split('_');
        let marker = parts.next().unwrap_or_default();
        assert_eq!(
            marker, CHAPTER_MARKER,
            "entry directory '{dir}' does not start with '{CHAPTER_MARKER}_'"
        );

        parts.map(capitalize).collect::<Vec<_>>().join(" ")
    }
}

/// Uppercase the first letter and lowercase the rest.
fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => {
            let mut result: String = first.to_uppercase().collect();
            result.extend(chars.flat_map(char::to_lowercase));
            result
        }
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_chapter_name_single_word() {
        let entry = Entry::new(Path::new("diary_example").join("2000_01_01.txt"));
        assert_eq!(entry.chapter_name(), "Example");
    }

    #[test]
    fn test_chapter_name_multiple_words() {
        let entry = Entry::new(Path::new("diary_long_example").join("2000_01_01.txt"));
        assert_eq!(entry.chapter_name(), "Long Example");
    }

    #[test]
    fn test_chapter_name_normalizes_case() {
        let entry = Entry::new(Path::new("diary_TRIP_toSPAIN").join("a.txt"));
        assert_eq!(entry.chapter_name(), "Trip Tospain");
    }

    #[test]
    #[should_panic(expected = "does not start with 'diary_'")]
    fn test_chapter_name_rejects_unmarked_directory() {
        Entry::new(Path::new("notes_example").join("a.txt")).chapter_name();
    }

    #[test]
    #[should_panic(expected = "has no parent directory")]
    fn test_chapter_name_requires_a_directory() {
        Entry::new("2000_01_01.txt").chapter_name();
    }

    #[test]
    fn test_capitalize() {
        assert_eq!(capitalize("example"), "Example");
        assert_eq!(capitalize("EXAMPLE"), "Example");
        assert_eq!(capitalize("årstall"), "Årstall");
        assert_eq!(capitalize(""), "");
    }
}
