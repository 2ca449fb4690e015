//! Property tests over generated lines and documents.

use md2html_core::inline::{apply_inline, content_hash};
use md2html_core::{convert_str, Converter};
use proptest::prelude::*;

fn preamble_line() -> impl Strategy<Value = &'static str> {
    prop::sample::select(vec!["- item\n", "* item\n", "plain text\n", "\n", "# h\n"])
}

proptest! {
    #[test]
    fn heading_fragment_ignores_block_state(
        preamble in prop::collection::vec(preamble_line(), 0..8),
        level in 1usize..12,
        text in "[a-zA-Z0-9 ]{0,24}",
    ) {
        let mut converter = Converter::new();
        let mut sink = String::new();
        for line in &preamble {
            converter.push_line(line, &mut sink);
        }
        let before = converter.state();

        let mut out = String::new();
        converter.push_line(&format!("{}{}\n", "#".repeat(level), text), &mut out);

        prop_assert_eq!(out, format!("<h{level}>{}</h{level}>\n", text.trim()));
        prop_assert_eq!(converter.state(), before);
    }

    #[test]
    fn consecutive_dash_items_share_one_list(items in prop::collection::vec("[a-z]{1,8}", 1..20)) {
        let source: String = items.iter().map(|item| format!("- {item}\n")).collect();
        let html = convert_str(&source);
        prop_assert_eq!(html.matches("<ul>").count(), 1);
        prop_assert_eq!(html.matches("</ul>").count(), 1);
        prop_assert_eq!(html.matches("<li>").count(), items.len());
    }

    #[test]
    fn consecutive_star_items_share_one_list(items in prop::collection::vec("[a-z]{1,8}", 1..20)) {
        let source: String = items.iter().map(|item| format!("* {item}\n")).collect();
        let html = convert_str(&source);
        prop_assert_eq!(html.matches("<ol>").count(), 1);
        prop_assert_eq!(html.matches("</ol>").count(), 1);
        prop_assert_eq!(html.matches("<li>").count(), items.len());
    }

    #[test]
    fn hash_span_is_replaced_by_its_digest(text in "[a-zA-Z0-9 ]{1,16}") {
        let out = apply_inline(&format!("x [[{text}]] y\n"));
        prop_assert_eq!(out, format!("x {} y\n", content_hash(&text)));
    }

    #[test]
    fn strip_span_has_no_c_left(text in "[a-zA-Z ]{1,16}") {
        let out = apply_inline(&format!("(({text}))"));
        prop_assert!(!out.contains(['c', 'C']));
        prop_assert_eq!(out.len(), text.len() - text.matches(['c', 'C']).count());
    }
}
