//! Line-break handling and section layout.
//!
//! Diary entries use a single newline for a soft break inside a paragraph
//! and a blank line between paragraphs. LaTeX reflows single newlines away,
//! so soft breaks are hardened to `\\` while blank-line paragraph breaks are
//! kept as-is.

/// Sentinel standing in for a paragraph break while single newlines are
/// rewritten. Assumed never to occur in real diary text.
const PARAGRAPH_PLACEHOLDER: &str = "XnEwPaRaGrApHX";

/// Normalize `CR LF` pairs to a single `LF`.
pub fn normalize_line_endings(text: &str) -> String {
    text.replace("\r\n", "\n")
}

/// Harden single newlines into LaTeX forced line breaks.
///
/// Runs of two or more newlines are a paragraph break and come out as
/// exactly one blank line, with no forced-break marker. Every remaining
/// single newline becomes `\\` followed by a newline.
///
/// # Examples
///
/// ```
/// use dagbok::latex::force_line_breaks;
///
/// assert_eq!(force_line_breaks("one\ntwo"), "one\\\\\ntwo");
/// assert_eq!(force_line_breaks("one\n\ntwo"), "one\n\ntwo");
/// ```
pub fn force_line_breaks(text: &str) -> String {
    let collapsed = collapse_blank_lines(text);
    let forced = collapsed.replace('\n', "\\\\\n");
    forced.replace(PARAGRAPH_PLACEHOLDER, "\n\n")
}

/// Collapse every run of two or more newlines to the paragraph sentinel.
fn collapse_blank_lines(text: &str) -> String {
    let mut result = String::with_capacity(text.len());
    let mut newlines = 0;

    for c in text.chars() {
        if c == '\n' {
            newlines += 1;
            continue;
        }
        flush_newlines(&mut result, newlines);
        newlines = 0;
        result.push(c);
    }
    flush_newlines(&mut result, newlines);

    result
}

fn flush_newlines(result: &mut String, count: usize) {
    match count {
        0 => {}
        1 => result.push('\n'),
        _ => result.push_str(PARAGRAPH_PLACEHOLDER),
    }
}

/// Wrap the first line of `text` in a `\section{...}` heading.
///
/// The first line of an entry is its date. Splitting happens on `\n`, so a
/// trailing newline survives as an empty final line.
///
/// # Examples
///
/// ```
/// use dagbok::latex::wrap_section_heading;
///
/// assert_eq!(
///     wrap_section_heading("2024_05_17\n\nHello."),
///     "\\section{2024_05_17}\n\nHello."
/// );
/// ```
pub fn wrap_section_heading(text: &str) -> String {
    let mut lines = text.split('\n');
    let first = lines.next().unwrap_or_default();

    let mut result = String::with_capacity(text.len() + 16);
    result.push_str("\\section{");
    result.push_str(first);
    result.push('}');
    for line in lines {
        result.push('\n');
        result.push_str(line);
    }
    result
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use super::*;

    #[test]
    fn test_normalize_line_endings() {
        assert_eq!(normalize_line_endings("a\r\nb\r\nc"), "a\nb\nc");
        // A bare carriage return is left alone.
        assert_eq!(normalize_line_endings("a\rb"), "a\rb");
    }

    #[test]
    fn test_single_newline_becomes_forced_break() {
        assert_eq!(force_line_breaks("a\nb"), "a\\\\\nb");
    }

    #[test]
    fn test_blank_line_is_a_paragraph_break() {
        assert_eq!(force_line_breaks("a\n\nb"), "a\n\nb");
    }

    #[test]
    fn test_newline_runs_collapse_to_one_blank_line() {
        assert_eq!(force_line_breaks("a\n\n\nb"), "a\n\nb");
        assert_eq!(force_line_breaks("a\n\n\n\n\nb"), "a\n\nb");
    }

    #[test]
    fn test_mixed_breaks() {
        assert_eq!(
            force_line_breaks("date\n\nline one\nline two\n\npara two"),
            "date\n\nline one\\\\\nline two\n\npara two"
        );
    }

    #[test]
    fn test_trailing_newlines() {
        assert_eq!(force_line_breaks("a\n"), "a\\\\\n");
        assert_eq!(force_line_breaks("a\n\n"), "a\n\n");
    }

    #[test]
    fn test_wrap_section_heading() {
        assert_eq!(wrap_section_heading("Date\n\nBody"), "\\section{Date}\n\nBody");
        assert_eq!(wrap_section_heading("only line"), "\\section{only line}");
        assert_eq!(wrap_section_heading(""), "\\section{}");
        assert_eq!(wrap_section_heading("A\n"), "\\section{A}\n");
    }

    proptest! {
        #[test]
        fn prop_never_more_than_one_blank_line(s in "[a-zA-Z .\\n]{0,64}") {
            let out = force_line_breaks(&s);
            prop_assert!(!out.contains("\n\n\n"));
        }
    }
}
