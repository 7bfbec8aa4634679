//! Pure LaTeX escaping utilities.
//!
//! These functions handle the characters that actually occur in the diary
//! corpus and would otherwise break LaTeX: literal ampersands, curly quotes
//! pasted in from other editors, dollar signs (both currency and inline
//! math), and the handful of accented letters the entries use.

/// Maximum number of characters between two `$` delimiters for the pair to
/// count as an inline math span.
pub const MATH_SPAN_LIMIT: usize = 20;

/// Sentinel protecting math delimiters from the blanket `$` escape.
///
/// Assumed never to occur in real diary text.
pub const MATH_PLACEHOLDER: &str = "XPlaCeHolDerX";

/// Escape literal ampersands.
///
/// `&` is LaTeX's tabular column separator; in prose it is always literal.
///
/// # Examples
///
/// ```
/// use dagbok::latex::escape_ampersands;
///
/// assert_eq!(escape_ampersands("Tom & Jerry"), "Tom \\& Jerry");
/// ```
pub fn escape_ampersands(text: &str) -> String {
    text.replace('&', "\\&")
}

/// Normalize the curly double quote U+201C to a plain ASCII `"`.
///
/// Only the opening curly quote is handled; it is the one word processors
/// insert and the only one observed in the corpus.
///
/// # Examples
///
/// ```
/// use dagbok::latex::normalize_quotes;
///
/// assert_eq!(normalize_quotes("\u{201C}quote"), "\"quote");
/// ```
pub fn normalize_quotes(text: &str) -> String {
    text.replace('\u{201C}', "\"")
}

/// Escape `$` characters that are not inline math delimiters.
///
/// Two `$` with at most `max_span` characters between them are treated as an
/// intended math span and kept verbatim; every other `$` (currency, stray
/// delimiters) becomes `\$`. Spans are matched shortest-first from the left
/// and never overlap.
///
/// Internally the detected delimiters are swapped for [`MATH_PLACEHOLDER`],
/// the remaining `$` are escaped wholesale, and the sentinels are swapped
/// back.
///
/// # Examples
///
/// ```
/// use dagbok::latex::{escape_dollar_signs, MATH_SPAN_LIMIT};
///
/// assert_eq!(escape_dollar_signs("$e=mc^2$", MATH_SPAN_LIMIT), "$e=mc^2$");
/// assert_eq!(escape_dollar_signs("costs $5", MATH_SPAN_LIMIT), "costs \\$5");
/// ```
pub fn escape_dollar_signs(text: &str, max_span: usize) -> String {
    let protected = protect_math_spans(text, max_span);
    let escaped = protected.replace('$', "\\$");
    escaped.replace(MATH_PLACEHOLDER, "$")
}

/// Replace the delimiters of every detected math span with the sentinel.
fn protect_math_spans(text: &str, max_span: usize) -> String {
    let mut result = String::with_capacity(text.len());
    // Contents accumulated since the most recent unpaired `$`, if any.
    let mut open: Option<String> = None;

    for c in text.chars() {
        if c == '$' {
            match open.take() {
                Some(contents) => {
                    result.push_str(MATH_PLACEHOLDER);
                    result.push_str(&contents);
                    result.push_str(MATH_PLACEHOLDER);
                }
                None => open = Some(String::new()),
            }
        } else if let Some(mut contents) = open.take() {
            contents.push(c);
            if contents.chars().count() > max_span {
                // Partner too far away: the pending `$` was not a delimiter.
                result.push('$');
                result.push_str(&contents);
            } else {
                open = Some(contents);
            }
        } else {
            result.push(c);
        }
    }

    if let Some(contents) = open {
        result.push('$');
        result.push_str(&contents);
    }

    result
}

/// Transliterate the accented letters used in the diary to LaTeX control
/// sequences.
///
/// Handles exactly `å`, `Å`, and `ñ`; the replacements for the ring
/// accents carry a trailing space so the control word cannot swallow the
/// following letter. Any other accented character passes through unchanged.
///
/// # Examples
///
/// ```
/// use dagbok::latex::transliterate_accents;
///
/// assert_eq!(transliterate_accents("blåbær"), "bl\\aa bær");
/// assert_eq!(transliterate_accents("mañana"), "ma\\~nana");
/// ```
pub fn transliterate_accents(text: &str) -> String {
    let mut result = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            'å' => result.push_str("\\aa "),
            'Å' => result.push_str("\\AA "),
            'ñ' => result.push_str("\\~n"),
            _ => result.push(c),
        }
    }
    result
}
