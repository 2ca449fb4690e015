//! Line classification
//!
//! A line's block kind depends only on its first character, checked in this
//! order: `#` heading, `-` unordered item, `*` ordered item, whitespace-only
//! blank, anything else paragraph text. Leading spaces are not skipped, so
//! `  - item` is paragraph text.

/// Block kind of one transformed line, with the text that will be emitted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LineKind<'a> {
    /// `#` repeated `level` times; no upper bound on the level
    Heading { level: usize, text: &'a str },
    UnorderedItem(&'a str),
    OrderedItem(&'a str),
    Blank,
    /// Paragraph text with the line terminator removed
    Text(&'a str),
}

impl LineKind<'_> {
    /// Short name used in log output.
    pub fn name(&self) -> &'static str {
        match self {
            LineKind::Heading { .. } => "heading",
            LineKind::UnorderedItem(_) => "unordered-item",
            LineKind::OrderedItem(_) => "ordered-item",
            LineKind::Blank => "blank",
            LineKind::Text(_) => "text",
        }
    }
}

/// Classify a line that has already been through the inline pipeline.
pub fn classify(line: &str) -> LineKind<'_> {
    if line.starts_with('#') {
        let rest = line.trim_start_matches('#');
        LineKind::Heading {
            level: line.len() - rest.len(),
            text: rest.trim(),
        }
    } else if line.starts_with('-') {
        LineKind::UnorderedItem(line.trim_start_matches('-').trim())
    } else if line.starts_with('*') {
        LineKind::OrderedItem(line.trim_start_matches('*').trim())
    } else if line.trim().is_empty() {
        LineKind::Blank
    } else {
        LineKind::Text(strip_terminator(line))
    }
}

/// Remove one trailing `\n` or `\r\n`.
pub fn strip_terminator(line: &str) -> &str {
    match line.strip_suffix('\n') {
        Some(rest) => rest.strip_suffix('\r').unwrap_or(rest),
        None => line,
    }
}
