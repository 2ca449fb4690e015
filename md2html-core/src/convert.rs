//! Block-state machine and HTML emitter
//!
//! The converter holds three flags, one per container tag (`<ul>`, `<ol>`,
//! `<p>`), and appends HTML fragments to a caller-owned buffer as lines
//! arrive. Fragments are never rewritten once emitted.
//!
//! Two behaviours are kept on purpose for output compatibility:
//!
//! - The two list kinds are independent. A `*` item after a `-` item opens
//!   `<ol>` without closing `<ul>`, and both get closed at end of document.
//! - A paragraph's first continuation line clears the paragraph flag. A third
//!   consecutive text line therefore opens a fresh `<p>`, and a blank line
//!   after exactly two text lines emits no `</p>`.

use crate::block::{classify, LineKind};
use crate::inline::apply_inline;
use tracing::trace;

/// Open/closed state of the three container tags.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BlockState {
    pub unordered_open: bool,
    pub ordered_open: bool,
    pub paragraph_open: bool,
}

/// Line-at-a-time converter. One value per document.
#[derive(Debug, Default)]
pub struct Converter {
    state: BlockState,
    lines: usize,
}

impl Converter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Current block state.
    pub fn state(&self) -> BlockState {
        self.state
    }

    /// Number of lines pushed so far.
    pub fn lines(&self) -> usize {
        self.lines
    }

    /// Transform, classify and emit one raw line (terminator included).
    pub fn push_line(&mut self, raw: &str, out: &mut String) {
        self.lines += 1;
        let line = apply_inline(raw);
        let kind = classify(&line);
        trace!(line = self.lines, kind = kind.name(), "classified line");

        match kind {
            LineKind::Heading { level, text } => {
                out.push_str(&format!("<h{level}>{text}</h{level}>\n"));
            }
            LineKind::UnorderedItem(text) => {
                if !self.state.unordered_open {
                    out.push_str("<ul>\n");
                    self.state.unordered_open = true;
                }
                push_item(out, text);
            }
            LineKind::OrderedItem(text) => {
                if !self.state.ordered_open {
                    out.push_str("<ol>\n");
                    self.state.ordered_open = true;
                }
                push_item(out, text);
            }
            LineKind::Blank => {
                if self.state.paragraph_open {
                    out.push_str("</p>\n");
                    self.state.paragraph_open = false;
                }
            }
            LineKind::Text(text) => {
                if self.state.paragraph_open {
                    out.push_str(text);
                    out.push('\n');
                    self.state.paragraph_open = false;
                } else {
                    out.push_str("<p>\n");
                    out.push_str(text);
                    out.push('\n');
                    self.state.paragraph_open = true;
                }
            }
        }
    }

    /// Close whatever is still open: `</ul>`, then `</ol>`, then `</p>`.
    pub fn finish(mut self, out: &mut String) {
        if self.state.unordered_open {
            out.push_str("</ul>\n");
            self.state.unordered_open = false;
        }
        if self.state.ordered_open {
            out.push_str("</ol>\n");
            self.state.ordered_open = false;
        }
        if self.state.paragraph_open {
            out.push_str("</p>\n");
            self.state.paragraph_open = false;
        }
    }
}

fn push_item(out: &mut String, text: &str) {
    out.push_str("<li>");
    out.push_str(text);
    out.push_str("</li>\n");
}

/// Convert a whole in-memory document.
pub fn convert_str(source: &str) -> String {
    let mut converter = Converter::new();
    let mut out = String::with_capacity(source.len() * 2);
    for line in source.split_inclusive('\n') {
        converter.push_line(line, &mut out);
    }
    converter.finish(&mut out);
    out
}
