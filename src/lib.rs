//! # dagbok
//!
//! A small library for compiling plain text diary entries into a single
//! LaTeX document.
//!
//! ## Features
//!
//! - Decodes entries in any reasonable encoding (UTF-8, Latin-1, legacy
//!   Windows code pages) via statistical detection
//! - Escapes and transliterates entry text into LaTeX, leaving short inline
//!   math like `$x^2$` intact
//! - Turns each entry into a `\section` and each entry directory into a
//!   `\chapter`
//! - Concatenates everything under a user-supplied preamble into one
//!   compilable document
//!
//! ## Quick Start
//!
//! ```no_run
//! use dagbok::Document;
//!
//! let entries = vec![
//!     "diary_2001/2001_08_12.txt".into(),
//!     "diary_2001/2001_08_19.txt".into(),
//! ];
//! let mut document = Document::new(entries, "preamble.tex").with_output("diary.tex");
//! document.save().unwrap();
//! ```
//!
//! ## Entry Format
//!
//! An entry is a text file whose first line is its date (used as the section
//! heading), followed by a blank line and the body. Entries live in
//! directories named `diary_<chapter words>`, e.g. `diary_trip_to_spain`.
//! Transcoding one entry without touching the filesystem:
//!
//! ```
//! use dagbok::latex;
//!
//! let latex = latex::transcode("2001_08_12\n\nRained all day & stayed in.");
//! assert_eq!(latex, "\\section{2001_08_12}\n\nRained all day \\& stayed in.");
//! ```

pub mod document;
pub mod encoding;
pub mod entry;
pub mod error;
pub mod latex;

pub use document::Document;
pub use entry::{CHAPTER_MARKER, Entry};
pub use error::{Error, Result};
