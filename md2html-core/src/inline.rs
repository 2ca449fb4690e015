//! Inline transform pipeline
//!
//! Every line goes through four substitutions before it is classified, in
//! this order:
//!
//! | Step     | Source       | Output                              |
//! |----------|--------------|-------------------------------------|
//! | Bold     | `**text**`   | `<b>text</b>`                       |
//! | Emphasis | `__text__`   | `<em>text</em>`                     |
//! | Hash     | `[[text]]`   | lowercase MD5 hex digest of `text`  |
//! | Strip    | `((text))`   | `text` without any `c` or `C`       |
//!
//! Each step only rewrites the first occurrence on the line. A second bold
//! span, or a second `[[...]]`, is left as written. Later steps see the output
//! of earlier ones, so a marker produced by one step can be consumed by the
//! next.

use std::ops::Range;

/// A two-character delimiter and the tags it turns into.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Marker {
    pub token: &'static str,
    pub open: &'static str,
    pub close: &'static str,
}

pub const BOLD: Marker = Marker {
    token: "**",
    open: "<b>",
    close: "</b>",
};

pub const EMPHASIS: Marker = Marker {
    token: "__",
    open: "<em>",
    close: "</em>",
};

const HASH_DELIMITERS: (&str, &str) = ("[[", "]]");
const STRIP_DELIMITERS: (&str, &str) = ("((", "))");

/// Replace the first `token` with the opening tag, then the next one with the
/// closing tag.
///
/// A line with a single token ends up with an unmatched opening tag.
pub fn replace_marker_pair(line: &str, marker: &Marker) -> String {
    line.replacen(marker.token, marker.open, 1)
        .replacen(marker.token, marker.close, 1)
}

/// A delimited span found by [`find_span`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Span<'a> {
    /// Byte range of the whole span, delimiters included
    pub range: Range<usize>,
    /// Text between the delimiters
    pub inner: &'a str,
}

/// Locate the first `open ... close` span on the line.
///
/// The inner text must be at least one character and must not contain a line
/// break. The first `close` after that first character ends the span. If no
/// span can start at the leftmost `open`, scanning resumes one character
/// later, so `[[\n[[a]]` still finds `[[a]]`.
pub fn find_span<'a>(line: &'a str, open: &str, close: &str) -> Option<Span<'a>> {
    let mut from = 0;
    while let Some(offset) = line[from..].find(open) {
        let start = from + offset;
        let body = start + open.len();

        if let Some(first) = line[body..].chars().next() {
            if first != '\n' {
                let search_from = body + first.len_utf8();
                if let Some(close_offset) = line[search_from..].find(close) {
                    let inner_end = search_from + close_offset;
                    let inner = &line[body..inner_end];
                    if !inner.contains('\n') {
                        return Some(Span {
                            range: start..inner_end + close.len(),
                            inner,
                        });
                    }
                }
            }
        }

        // Advance past the first character of this candidate
        from = start + line[start..].chars().next().map_or(1, char::len_utf8);
    }
    None
}

/// Lowercase hexadecimal MD5 digest of the UTF-8 bytes of `text`.
pub fn content_hash(text: &str) -> String {
    format!("{:x}", md5::compute(text.as_bytes()))
}

/// `text` with every `c` and `C` removed.
pub fn strip_c(text: &str) -> String {
    text.chars().filter(|ch| !matches!(ch, 'c' | 'C')).collect()
}

fn replace_first_span<F>(line: &str, delimiters: (&str, &str), rewrite: F) -> String
where
    F: FnOnce(&str) -> String,
{
    let (open, close) = delimiters;
    match find_span(line, open, close) {
        Some(span) => {
            let replacement = rewrite(span.inner);
            let mut out = String::with_capacity(line.len() + replacement.len());
            out.push_str(&line[..span.range.start]);
            out.push_str(&replacement);
            out.push_str(&line[span.range.end..]);
            out
        }
        None => line.to_string(),
    }
}

/// Replace the first `[[text]]` span with the content hash of `text`.
pub fn apply_hash(line: &str) -> String {
    replace_first_span(line, HASH_DELIMITERS, content_hash)
}

/// Replace the first `((text))` span with `text` minus its `c`/`C` letters.
pub fn apply_strip(line: &str) -> String {
    replace_first_span(line, STRIP_DELIMITERS, strip_c)
}

/// Run the whole pipeline over one line.
pub fn apply_inline(line: &str) -> String {
    let line = replace_marker_pair(line, &BOLD);
    let line = replace_marker_pair(&line, &EMPHASIS);
    let line = apply_hash(&line);
    apply_strip(&line)
}
