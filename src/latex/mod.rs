//! Pure LaTeX generation from decoded diary text.
//!
//! This module turns loosely structured human text into syntactically valid
//! LaTeX without a full parser. Each pass is a pure `&str -> String`
//! transformation; [`transcode`] applies them in a fixed order, and the
//! order is load-bearing:
//!
//! - **Line endings first**: later passes match on bare `\n`.
//! - **Character escaping before math detection**: `&` and curly quotes
//!   never interact with `$` spans, but keeping the blanket escapes early
//!   means the math pass sees the text it will ship.
//! - **Math heuristic**: a `$...$` pair with a short span between the
//!   delimiters is almost certainly intended as inline math; a `$` with no
//!   nearby partner is currency. Detected spans are protected with a
//!   sentinel while the rest are escaped.
//! - **Accents after math**: `\aa ` and friends must not be introduced
//!   before the `$` pass measures span lengths.
//! - **Layout passes last**: paragraph breaks are preserved and soft
//!   breaks hardened to `\\`; only then is the first line wrapped in
//!   `\section{...}`, so the heading is subject to the same character
//!   rules as prose.

mod escape;
mod render;

pub use escape::{
    MATH_PLACEHOLDER, MATH_SPAN_LIMIT, escape_ampersands, escape_dollar_signs, normalize_quotes,
    transliterate_accents,
};
pub use render::{force_line_breaks, normalize_line_endings, wrap_section_heading};

/// Apply the full transformation pipeline to one decoded entry.
///
/// The result is the entry's body as LaTeX, headed by a `\section{...}`
/// built from its first line.
///
/// # Examples
///
/// ```
/// use dagbok::latex::transcode;
///
/// assert_eq!(
///     transcode("This is some text with $math$.\n\nHello."),
///     "\\section{This is some text with $math$.}\n\nHello."
/// );
/// ```
pub fn transcode(text: &str) -> String {
    let text = normalize_line_endings(text);
    let text = escape_ampersands(&text);
    let text = normalize_quotes(&text);
    let text = escape_dollar_signs(&text, MATH_SPAN_LIMIT);
    let text = transliterate_accents(&text);
    let text = force_line_breaks(&text);
    wrap_section_heading(&text)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_transcode_plain_entry() {
        assert_eq!(
            transcode("2024_05_17\n\nWent hiking."),
            "\\section{2024_05_17}\n\nWent hiking."
        );
    }

    #[test]
    fn test_transcode_applies_every_pass() {
        let input = "2001_08_12\r\n\r\nMet se\u{00F1}or P\u{00E5}l & said \u{201C}hi\u{201C}.\nSolved $x^2$ then paid $20.";
        let expected = "\\section{2001_08_12}\n\nMet se\\~nor P\\aa l \\& said \"hi\".\\\\\nSolved $x^2$ then paid \\$20.";
        assert_eq!(transcode(input), expected);
    }

    #[test]
    fn test_heading_shares_prose_rules() {
        // The date line is transformed like any other text: a lone `$` in
        // it is escaped, and a soft break directly after it leaves the
        // forced-break marker inside the braces.
        assert_eq!(
            transcode("Monday, spent $40\nat the market"),
            "\\section{Monday, spent \\$40\\\\}\nat the market"
        );
    }

    #[test]
    fn test_transcode_empty() {
        assert_eq!(transcode(""), "\\section{}");
    }
}
