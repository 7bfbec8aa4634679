//! Assembly of transcoded entries into one LaTeX document.
//!
//! A [`Document`] owns the conversion run: it reads the preamble, walks the
//! entry paths in the order given, opens a `\chapter` whenever the parent
//! directory changes, and closes the document. Entry order is the caller's
//! responsibility, so sorted input produces chronological chapters and
//! interleaved input re-opens a chapter per run of entries.

use std::fs;
use std::io;
use std::path::PathBuf;

use log::debug;

use crate::entry::Entry;
use crate::error::{Error, Result};

/// A LaTeX document built from a preamble and a sequence of diary entries.
///
/// # Examples
///
/// ```no_run
/// use dagbok::Document;
///
/// let entries = vec!["diary_2001/2001_08_12.txt".into()];
/// let mut document = Document::new(entries, "preamble.tex").with_output("diary.tex");
/// document.save()?;
/// # Ok::<(), dagbok::Error>(())
/// ```
#[derive(Debug, Clone)]
pub struct Document {
    entries: Vec<PathBuf>,
    preamble: PathBuf,
    output: Option<PathBuf>,
    chapters: Vec<String>,
    current_chapter: Option<String>,
}

impl Document {
    /// Create a document over `entries`, prefixed by the preamble file.
    pub fn new(entries: Vec<PathBuf>, preamble: impl Into<PathBuf>) -> Self {
        Document {
            entries,
            preamble: preamble.into(),
            output: None,
            chapters: Vec::new(),
            current_chapter: None,
        }
    }

    /// Set the path [`save`](Self::save) writes to.
    pub fn with_output(mut self, output: impl Into<PathBuf>) -> Self {
        self.output = Some(output.into());
        self
    }

    /// Chapter names opened by the last [`generate`](Self::generate) run, in
    /// order of first appearance.
    pub fn chapters(&self) -> &[String] {
        &self.chapters
    }

    /// Render the complete LaTeX document.
    ///
    /// Regenerates from scratch on every call, so repeated calls yield
    /// identical output.
    ///
    /// # Errors
    ///
    /// [`Error::PreambleNotFound`] if the preamble is missing; any entry
    /// failure aborts the run with that entry's error.
    pub fn generate(&mut self) -> Result<String> {
        self.chapters.clear();
        self.current_chapter = None;

        let mut latex = self.read_preamble()?;
        latex.push_str("\n\\begin{document}\n");
        latex.push_str("\n\\maketitle\n\n");
        latex.push_str("\n\\tableofcontents\n\n\n");

        let entries = self.entries.clone();
        for path in entries {
            let entry = Entry::new(path);
            let chapter = entry.chapter_name();
            if self.current_chapter.as_deref() != Some(chapter.as_str()) {
                debug!("opening chapter '{}' at {}", chapter, entry.path().display());
                latex.push_str("\\chapter{");
                latex.push_str(&chapter);
                latex.push_str("}\n\n");
                self.chapters.push(chapter.clone());
                self.current_chapter = Some(chapter);
            }
            latex.push_str(&entry.to_latex()?);
            latex.push_str("\n\n\n");
        }

        latex.push_str("\n\\end{document}");
        Ok(latex)
    }

    /// Generate the document and write it to the configured output path.
    ///
    /// # Errors
    ///
    /// Everything [`generate`](Self::generate) returns, plus an
    /// [`InvalidInput`](io::ErrorKind::InvalidInput) I/O error when no
    /// output path was configured and any error from writing the file.
    pub fn save(&mut self) -> Result<()> {
        let Some(output) = self.output.clone() else {
            return Err(Error::Io(io::Error::new(
                io::ErrorKind::InvalidInput,
                "no output path configured",
            )));
        };
        let latex = self.generate()?;
        fs::write(&output, latex)?;
        Ok(())
    }

    fn read_preamble(&self) -> Result<String> {
        if !self.preamble.exists() {
            return Err(Error::PreambleNotFound(self.preamble.clone()));
        }
        Ok(fs::read_to_string(&self.preamble)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_preamble() {
        let mut document = Document::new(Vec::new(), "does_not_exist.tex");
        match document.generate() {
            Err(Error::PreambleNotFound(path)) => {
                assert_eq!(path, PathBuf::from("does_not_exist.tex"));
            }
            other => panic!("expected PreambleNotFound, got {other:?}"),
        }
    }

    #[test]
    fn test_save_without_output_path() {
        let mut document = Document::new(Vec::new(), "preamble.tex");
        match document.save() {
            Err(Error::Io(e)) => assert_eq!(e.kind(), io::ErrorKind::InvalidInput),
            other => panic!("expected an I/O error, got {other:?}"),
        }
    }

    #[test]
    fn test_chapters_empty_before_generate() {
        let document = Document::new(Vec::new(), "preamble.tex");
        assert!(document.chapters().is_empty());
    }
}
