//! Lossless serialization: `serialize(parse(S), S) == S` for any `S`.
//!
//! Every [`crate::cst::Block`] span already covers its construct's exact
//! source bytes — container prefixes, marker characters, indentation and
//! all — by construction of the block parser's `span_through` (first
//! constituent line's content start to last constituent line's terminator).
//! Because top-level block spans tile `[0, len(source))` with no gaps or
//! overlaps, reproducing the source is a matter of replaying each
//! top-level block's span in order; there is nothing left over to
//! re-derive from semantics.

use crate::cst::Document;

pub fn serialize(document: &Document, source: &str) -> String {
    let mut out = String::with_capacity(document.span.len());
    for block in &document.blocks {
        let span = block.span();
        out.push_str(&source[span.start..span.end]);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::block_parser::parse;

    fn round_trips(source: &str) {
        let doc = parse(source);
        assert_eq!(serialize(&doc, source), source);
    }

    #[test]
    fn paragraph_round_trips() {
        round_trips("hello world\n");
    }

    #[test]
    fn heading_round_trips() {
        round_trips("# Hello\n");
    }

    #[test]
    fn blank_lines_round_trip() {
        round_trips("# Hello\n\n\n\nWorld");
    }

    #[test]
    fn nested_blockquote_round_trips() {
        round_trips("> outer\n>> inner\n> outer again\n");
    }

    #[test]
    fn list_with_blank_between_items_round_trips() {
        round_trips("- one\n\n- two\n- three\n");
    }

    #[test]
    fn fenced_code_round_trips() {
        round_trips("```rust\nfn main() {}\n```\n");
    }

    #[test]
    fn table_round_trips() {
        round_trips("| a | b |\n|---|---|\n| 1 | 2 |\n");
    }

    #[test]
    fn crlf_source_round_trips() {
        round_trips("# Hello\r\n\r\nWorld\r\n");
    }

    #[test]
    fn empty_source_round_trips() {
        round_trips("");
    }

    #[test]
    fn no_trailing_newline_round_trips() {
        round_trips("no trailing newline");
    }
}
