//! Charset detection and decoding for raw diary bytes.
//!
//! Diary files accumulated over decades rarely share an encoding: older
//! entries tend to be Windows-1252 or ISO-8859-1, newer ones UTF-8. Instead
//! of trusting any declared charset, detection runs statistical byte-pattern
//! analysis over the whole buffer and always produces a best guess; decoding
//! with that guess is the step that can still fail.

use std::path::Path;

use chardetng::EncodingDetector;
use encoding_rs::Encoding;
use log::debug;

use crate::error::{Error, Result};

/// Guess the encoding of `bytes` using statistical byte-pattern analysis.
///
/// The whole buffer is fed to the detector so the confidence scores reflect
/// the complete file, not a prefix. Detection never fails: with no better
/// evidence the detector falls back to Windows-1252, the usual suspect for
/// legacy Western text.
pub fn detect(bytes: &[u8]) -> &'static Encoding {
    let mut detector = EncodingDetector::new();
    detector.feed(bytes, true);
    detector.guess(None, true)
}

/// Decode `bytes` into text using the detected encoding.
///
/// A byte-order mark takes precedence over the statistical guess (handled by
/// `encoding_rs` during decoding). Any malformed sequence under the chosen
/// encoding is an error rather than a lossy replacement: a silently mangled
/// diary entry is worse than a failed run.
///
/// # Errors
///
/// Returns [`Error::Decoding`] naming `path` and the encoding that failed.
pub fn decode(bytes: &[u8], path: &Path) -> Result<String> {
    let detected = detect(bytes);
    let (text, encoding, malformed) = detected.decode(bytes);

    if malformed {
        return Err(Error::Decoding {
            path: path.to_path_buf(),
            encoding: encoding.name(),
        });
    }

    debug!("decoded {} as {}", path.display(), encoding.name());
    Ok(text.into_owned())
}
