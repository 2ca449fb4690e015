//! Line-oriented Markdown subset to HTML conversion
//!
//!     This crate turns a small, fixed Markdown grammar into HTML fragments, one input line at
//!     a time. It is a pure lib: it powers the markdown2html CLI but never prints, reads env
//!     vars or exits the process. Shell concerns live in md2html-cli.
//!
//!     The file structure:
//!     .
//!     ├── error.rs        # ConvertError
//!     ├── inline.rs       # bold / emphasis / hash / strip substitutions
//!     ├── block.rs        # line classification
//!     ├── convert.rs      # block-state machine and emitter
//!     ├── driver.rs       # reader/writer and file drivers
//!     └── lib.rs
//!
//! Grammar
//!
//!     | Source line        | Output                                   |
//!     |--------------------|------------------------------------------|
//!     | `### Title`        | `<h3>Title</h3>`                         |
//!     | `- item`           | `<ul>` on first item, then `<li>item</li>` |
//!     | `* item`           | `<ol>` on first item, then `<li>item</li>` |
//!     | blank              | `</p>` if a paragraph is open            |
//!     | anything else      | paragraph text                           |
//!
//!     Inline spans (`**`, `__`, `[[...]]`, `((...))`) are rewritten before a line is
//!     classified, see ./inline.rs.
//!
//! Compatibility
//!
//!     Output matches the long-standing behaviour of the line-based converter this grammar
//!     comes from, quirks included: only the first span of each kind is rewritten per line,
//!     list kinds do not close each other, and a paragraph's first continuation line clears
//!     the paragraph flag. See ./convert.rs.
//!
pub mod block;
pub mod convert;
pub mod driver;
pub mod error;
pub mod inline;

pub use block::{classify, LineKind};
pub use convert::{convert_str, BlockState, Converter};
pub use driver::{convert, convert_file, ConversionStats};
pub use error::ConvertError;
