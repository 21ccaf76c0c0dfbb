//! The block-construction phase: turns physical lines into a nested
//! [`Block`] tree.
//!
//! Container nesting (blockquote-in-list, list-in-blockquote, arbitrary
//! depth) falls out of plain recursion: opening a container strips its
//! prefix from each of its lines and recurses on the stripped lines, the
//! way `markdown-neuraxis-syntax`'s grammar walks `ancestor_list_indents`
//! for nested lists and blockquote depth for nested quotes.

use crate::cst::*;
use crate::inline_parser;
use crate::source::{LineRef, lines_of};
use crate::span::Span;

use super::classify::{could_interrupt_paragraph, is_blank, leading_indent};
use super::content::ContentView;
use super::kinds::{
    AtxHeading, BlockQuote as BlockQuoteKind, CodeFence, HtmlBlockOpen, IndentedCode,
    LinkRefDef as LinkRefDefKind, ListItemMarker, ListMarker, SetextUnderline, Table as TableKind,
    ThematicBreak,
};

/// Parses an entire source document into a [`Document`].
pub fn parse(source: &str) -> Document {
    let lines = lines_of(source);
    let blocks = build_sequence(source, &lines);
    Document {
        span: Span::new(0, source.len()),
        blocks,
    }
}

/// Parses a substring (used by the incremental driver for a damage window)
/// whose absolute offsets are already baked into `lines`' spans.
pub fn parse_lines(source: &str, lines: &[LineRef]) -> Vec<Block> {
    build_sequence(source, lines)
}

fn span_through(lines: &[LineRef], start: usize, end_inclusive: usize) -> Span {
    Span::new(lines[start].span.start, lines[end_inclusive].full_span().end)
}

fn indent_bytes(line: &str, rest: &str) -> usize {
    line.len() - rest.len()
}

fn strip_offset(line: &LineRef, byte_offset: usize) -> LineRef {
    let offset = byte_offset.min(line.text.len());
    LineRef {
        span: Span::new(line.span.start + offset, line.span.end),
        ending: line.ending,
        text: line.text[offset..].to_string(),
    }
}

fn parse_inline(view: &ContentView, source: &str) -> Vec<Inline> {
    let (text, offsets) = view.join(source);
    inline_parser::parse(&text, &offsets)
}

/// The main block-building loop. Operates on one level of line-prefix
/// nesting at a time; nested containers recurse with their own stripped
/// line list.
fn build_sequence(source: &str, lines: &[LineRef]) -> Vec<Block> {
    let mut blocks = Vec::new();
    let mut i = 0usize;

    while i < lines.len() {
        if is_blank(&lines[i].text) {
            let start = i;
            while i < lines.len() && is_blank(&lines[i].text) {
                i += 1;
            }
            blocks.push(Block::BlankLines(BlankLines {
                span: span_through(lines, start, i - 1),
                count: i - start,
            }));
            continue;
        }

        let (indent, rest) = leading_indent(&lines[i].text);

        if indent <= 3 {
            if let Some(marker) = ThematicBreak::detect(rest) {
                blocks.push(Block::ThematicBreak(ThematicBreak {
                    span: span_through(lines, i, i),
                    marker,
                }));
                i += 1;
                continue;
            }

            if let Some((level, content, content_off_in_rest)) = AtxHeading::detect(rest) {
                let base =
                    lines[i].span.start + indent_bytes(&lines[i].text, rest) + content_off_in_rest;
                let children = inline_parser::parse(&content, &identity_offsets(&content, base));
                blocks.push(Block::Heading(Heading {
                    span: span_through(lines, i, i),
                    level,
                    style: HeadingStyle::Atx,
                    children,
                }));
                i += 1;
                continue;
            }

            if let Some((fence_char, fence_len, info)) = CodeFence::detect_open(rest) {
                let open_indent = indent;
                let start = i;
                i += 1;
                let body_start = i;
                while i < lines.len() {
                    let (cl_indent, cl_rest) = leading_indent(&lines[i].text);
                    if cl_indent <= 3 && CodeFence::detect_close(cl_rest, fence_char, fence_len) {
                        break;
                    }
                    i += 1;
                }
                let body_end = i; // exclusive; index of closing fence line, or lines.len()
                let body = join_fence_body(&lines[body_start..body_end], open_indent);
                let last_line = if i < lines.len() { i } else { i - 1 };
                blocks.push(Block::FencedCode(FencedCode {
                    span: span_through(lines, start, last_line),
                    fence_char,
                    fence_len,
                    indent: open_indent,
                    info,
                    body,
                }));
                i = if i < lines.len() { i + 1 } else { i };
                continue;
            }

            if BlockQuoteKind::strip_prefix(rest).is_some() {
                let (consumed, stripped, span) = collect_block_quote(&lines[i..]);
                let children = build_sequence(source, &stripped);
                blocks.push(Block::BlockQuote(BlockQuote { span, children }));
                i += consumed;
                continue;
            }

            if HtmlBlockOpen::detect(rest) {
                let start = i;
                i += 1;
                while i < lines.len() && !is_blank(&lines[i].text) {
                    i += 1;
                }
                let content = lines[start..i]
                    .iter()
                    .map(|l| l.text.as_str())
                    .collect::<Vec<_>>()
                    .join("\n");
                blocks.push(Block::HtmlBlock(HtmlBlock {
                    span: span_through(lines, start, i - 1),
                    content,
                }));
                continue;
            }

            if let Some((label, destination, title)) = LinkRefDefKind::detect(rest) {
                blocks.push(Block::LinkRefDef(LinkRefDef {
                    span: span_through(lines, i, i),
                    label,
                    destination,
                    title,
                }));
                i += 1;
                continue;
            }

            if let Some((marker, _)) = ListItemMarker::detect(rest) {
                let (consumed, list) = collect_list(source, &lines[i..], marker);
                blocks.push(Block::List(list));
                i += consumed;
                continue;
            }
        }

        if IndentedCode::detect(indent) {
            let start = i;
            i += 1;
            while i < lines.len() {
                if is_blank(&lines[i].text) {
                    let mut j = i;
                    while j < lines.len() && is_blank(&lines[j].text) {
                        j += 1;
                    }
                    if j < lines.len() && leading_indent(&lines[j].text).0 >= IndentedCode::INDENT
                    {
                        i = j;
                        continue;
                    }
                    break;
                }
                if leading_indent(&lines[i].text).0 < IndentedCode::INDENT {
                    break;
                }
                i += 1;
            }
            let end = i - 1;
            let body = join_indented_body(&lines[start..=end]);
            blocks.push(Block::IndentedCode(IndentedCode {
                span: span_through(lines, start, end),
                body,
            }));
            continue;
        }

        // Paragraph, with setext and table lookahead. The scan also stops
        // one line early whenever it is about to consume a table delimiter
        // row, since `could_interrupt_paragraph` has no delimiter-row case
        // of its own (a delimiter row is plain text as far as paragraph
        // continuation is concerned) — without this, a table's header and
        // body rows are silently swallowed into one giant Paragraph.
        let start = i;
        i += 1;
        while i < lines.len() && !is_blank(&lines[i].text) && !could_interrupt_paragraph(&lines[i].text)
        {
            if lines[i - 1].text.contains('|') && TableKind::detect_delimiter_row(&lines[i].text).is_some()
            {
                break;
            }
            i += 1;
        }

        if i < lines.len() && start + 1 == i {
            if let Some(level) = SetextUnderline::detect(&lines[i].text) {
                let view = ContentView::single(lines[start].span);
                let children = parse_inline(&view, source);
                blocks.push(Block::Heading(Heading {
                    span: span_through(lines, start, i),
                    level,
                    style: HeadingStyle::Setext,
                    children,
                }));
                i += 1;
                continue;
            }
        }

        // The table header is whichever line directly precedes the
        // delimiter row, not necessarily `start`: lines before it (if any)
        // form their own Paragraph first.
        if i < lines.len() && i > start && lines[i - 1].text.contains('|') {
            if let Some(alignments) = TableKind::detect_delimiter_row(&lines[i].text) {
                let header_line = i - 1;
                if header_line > start {
                    let para_lines: Vec<Span> = lines[start..header_line].iter().map(|l| l.span).collect();
                    let view = ContentView::from_lines(para_lines);
                    let children = parse_inline(&view, source);
                    blocks.push(Block::Paragraph(Paragraph {
                        span: span_through(lines, start, header_line - 1),
                        children,
                    }));
                }

                let header = TableKind::split_row(&lines[header_line].text)
                    .into_iter()
                    .map(|cell| {
                        inline_parser::parse(&cell, &identity_offsets(&cell, lines[header_line].span.start))
                    })
                    .collect();
                let delim_line = i;
                i += 1;
                let rows_start = i;
                while i < lines.len() && !is_blank(&lines[i].text) && TableKind::looks_tabular(&lines[i].text)
                {
                    i += 1;
                }
                let rows = lines[rows_start..i]
                    .iter()
                    .map(|l| {
                        TableKind::split_row(&l.text)
                            .into_iter()
                            .map(|cell| inline_parser::parse(&cell, &identity_offsets(&cell, l.span.start)))
                            .collect::<Vec<_>>()
                    })
                    .collect();
                let last = if i > header_line { i - 1 } else { delim_line };
                blocks.push(Block::Table(Table {
                    span: span_through(lines, header_line, last),
                    alignments,
                    header,
                    rows,
                }));
                continue;
            }
        }

        let para_lines: Vec<Span> = lines[start..i].iter().map(|l| l.span).collect();
        let view = ContentView::from_lines(para_lines);
        let children = parse_inline(&view, source);
        blocks.push(Block::Paragraph(Paragraph {
            span: span_through(lines, start, i - 1),
            children,
        }));
    }

    blocks
}

/// A fresh `offsets` table for text that is *already* an absolute-offset
/// slice sitting at `base` in the source (single-line ATX/table-cell
/// content whose surrounding whitespace has been trimmed away, so the
/// simple identity mapping is only an approximation for inline spans inside
/// it — acceptable because such content never survives an incremental
/// splice on its own).
fn identity_offsets(text: &str, base: usize) -> Vec<usize> {
    let mut offsets: Vec<usize> = (base..base + text.len()).collect();
    offsets.push(base + text.len());
    offsets
}

fn join_fence_body(lines: &[LineRef], strip_indent: usize) -> String {
    let mut out = String::new();
    for (idx, line) in lines.iter().enumerate() {
        let (indent, rest) = leading_indent(&line.text);
        if indent >= strip_indent {
            // Re-derive the byte offset for the requested column strip.
            let to_strip = strip_indent.min(indent);
            let mut col = 0usize;
            let mut byte = 0usize;
            for c in line.text.chars() {
                if col >= to_strip {
                    break;
                }
                col += if c == '\t' { 4 - (col % 4) } else { 1 };
                byte += c.len_utf8();
            }
            out.push_str(&line.text[byte..]);
        } else {
            out.push_str(rest);
        }
        if idx + 1 < lines.len() {
            out.push('\n');
        }
    }
    if !lines.is_empty() {
        out.push('\n');
    }
    out
}

fn join_indented_body(lines: &[LineRef]) -> String {
    let mut out = String::new();
    for (idx, line) in lines.iter().enumerate() {
        if is_blank(&line.text) {
            out.push_str("");
        } else {
            let (_, rest) = leading_indent(&line.text);
            // leading_indent strips *all* leading whitespace; re-add any
            // indentation beyond the required 4 columns.
            let (full_indent, _) = leading_indent(&line.text);
            let extra = full_indent.saturating_sub(IndentedCode::INDENT);
            out.push_str(&" ".repeat(extra));
            out.push_str(rest);
        }
        if idx + 1 < lines.len() {
            out.push('\n');
        }
    }
    out
}

/// Collects consecutive blockquote lines (including lazy paragraph
/// continuation lines), stripping one level of `>` from each, and returns
/// `(lines_consumed, stripped_lines_for_recursion, span)`.
fn collect_block_quote(lines: &[LineRef]) -> (usize, Vec<LineRef>, Span) {
    let mut stripped = Vec::new();
    let mut i = 0usize;
    let mut lazy_ok = true;

    while i < lines.len() {
        if is_blank(&lines[i].text) {
            let (indent, rest) = leading_indent(&lines[i].text);
            if indent <= 3
                && let Some(off) = BlockQuoteKind::strip_prefix(rest)
            {
                let byte_off = indent_bytes(&lines[i].text, rest) + off;
                stripped.push(strip_offset(&lines[i], byte_off));
                i += 1;
                continue;
            }
            break;
        }

        let (indent, rest) = leading_indent(&lines[i].text);
        if indent <= 3
            && let Some(off) = BlockQuoteKind::strip_prefix(rest)
        {
            let byte_off = indent_bytes(&lines[i].text, rest) + off;
            stripped.push(strip_offset(&lines[i], byte_off));
            i += 1;
            lazy_ok = true;
            continue;
        }

        if lazy_ok && i > 0 && !could_interrupt_paragraph(&lines[i].text) {
            stripped.push(lines[i].clone());
            i += 1;
            continue;
        }
        break;
    }

    let span = span_through(lines, 0, i.saturating_sub(1).max(0));
    (i.max(1), stripped, span)
}

fn markers_compatible(a: &ListMarker, ordered: bool, delimiter: char) -> bool {
    a.ordered == ordered && a.delimiter == delimiter
}

fn strip_task_marker(item_lines: &mut [LineRef]) -> TaskState {
    let Some(first) = item_lines.first() else {
        return TaskState::None;
    };
    let text = first.text.clone();
    let (state, marker_len) = if text.starts_with("[ ] ") {
        (TaskState::Unchecked, 4)
    } else if text == "[ ]" {
        (TaskState::Unchecked, 3)
    } else if text.starts_with("[x] ") || text.starts_with("[X] ") {
        (TaskState::Checked, 4)
    } else if text == "[x]" || text == "[X]" {
        (TaskState::Checked, 3)
    } else {
        (TaskState::None, 0)
    };
    if marker_len > 0 {
        item_lines[0] = strip_offset(&item_lines[0], marker_len);
    }
    state
}

/// Collects consecutive list items sharing a marker type into one [`List`].
fn collect_list(source: &str, lines: &[LineRef], first_marker: ListMarker) -> (usize, List) {
    let ordered = first_marker.ordered;
    let start_val = first_marker.start;
    let delimiter = first_marker.delimiter;
    let mut items = Vec::new();
    let mut i = 0usize;
    let mut any_blank_between_items = false;
    let mut first = true;

    loop {
        if i >= lines.len() {
            break;
        }
        if is_blank(&lines[i].text) {
            let blank_start = i;
            let mut j = i;
            while j < lines.len() && is_blank(&lines[j].text) {
                j += 1;
            }
            if j >= lines.len() {
                break;
            }
            let (next_indent, next_rest) = leading_indent(&lines[j].text);
            if next_indent <= 3
                && let Some((m, _)) = ListItemMarker::detect(next_rest)
                && markers_compatible(&m, ordered, delimiter)
            {
                any_blank_between_items = true;
                i = j;
                continue;
            }
            i = blank_start;
            break;
        }

        let (indent, rest) = leading_indent(&lines[i].text);
        if indent > 3 {
            break;
        }
        let Some((marker, content_offset)) = ListItemMarker::detect(rest) else {
            break;
        };
        if !first && !markers_compatible(&marker, ordered, delimiter) {
            break;
        }
        first = false;

        let content_col = indent_bytes(&lines[i].text, rest) + content_offset;
        // Column width of the marker + its trailing spacing, used to decide
        // whether later lines are indented enough to continue this item.
        let content_columns = indent + content_offset;
        let item_start = i;
        let mut item_lines = vec![strip_offset(&lines[i], content_col)];
        i += 1;

        let mut has_internal_blank = false;
        loop {
            if i >= lines.len() {
                break;
            }
            if is_blank(&lines[i].text) {
                let mut j = i;
                while j < lines.len() && is_blank(&lines[j].text) {
                    j += 1;
                }
                if j >= lines.len() {
                    has_internal_blank = true;
                    break;
                }
                let (ind2, _) = leading_indent(&lines[j].text);
                if ind2 >= content_columns {
                    has_internal_blank = true;
                    for k in i..j {
                        item_lines.push(strip_offset(&lines[k], lines[k].text.len()));
                    }
                    i = j;
                    continue;
                }
                break;
            }
            let (ind2, _) = leading_indent(&lines[i].text);
            if ind2 >= content_columns {
                item_lines.push(strip_offset(&lines[i], content_columns));
                i += 1;
                continue;
            }
            if !has_internal_blank && !could_interrupt_paragraph(&lines[i].text) {
                item_lines.push(lines[i].clone());
                i += 1;
                continue;
            }
            break;
        }

        let task = strip_task_marker(&mut item_lines);
        let children = build_sequence(source, &item_lines);
        items.push(ListItem {
            span: span_through(lines, item_start, i - 1),
            children,
            task,
        });
    }

    let consumed = i.max(1);
    let span = span_through(lines, 0, consumed - 1);
    (
        consumed,
        List {
            span,
            ordered,
            start: start_val,
            tight: !any_blank_between_items,
            marker: delimiter,
            items,
        },
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn blocks_of(src: &str) -> Vec<Block> {
        parse(src).blocks
    }

    #[test]
    fn single_paragraph() {
        let blocks = blocks_of("hello world");
        assert_eq!(blocks.len(), 1);
        assert!(matches!(blocks[0], Block::Paragraph(_)));
    }

    #[test]
    fn atx_heading() {
        let blocks = blocks_of("# Hello\n");
        match &blocks[0] {
            Block::Heading(h) => {
                assert_eq!(h.level, 1);
                assert_eq!(h.style, HeadingStyle::Atx);
            }
            other => panic!("expected heading, got {other:?}"),
        }
    }

    #[test]
    fn thematic_break_detected() {
        let blocks = blocks_of("---\n");
        assert!(matches!(blocks[0], Block::ThematicBreak(_)));
    }

    #[test]
    fn fenced_code_round_trips_body() {
        let blocks = blocks_of("```rust\nfn main() {}\n```\n");
        match &blocks[0] {
            Block::FencedCode(f) => {
                assert_eq!(f.info, "rust");
                assert_eq!(f.body, "fn main() {}\n");
            }
            other => panic!("expected fenced code, got {other:?}"),
        }
    }

    #[test]
    fn blockquote_nests_paragraph() {
        let blocks = blocks_of("> hello\n> world\n");
        match &blocks[0] {
            Block::BlockQuote(bq) => {
                assert_eq!(bq.children.len(), 1);
                assert!(matches!(bq.children[0], Block::Paragraph(_)));
            }
            other => panic!("expected blockquote, got {other:?}"),
        }
    }

    #[test]
    fn nested_blockquotes() {
        let blocks = blocks_of("> > inner\n");
        match &blocks[0] {
            Block::BlockQuote(outer) => match &outer.children[0] {
                Block::BlockQuote(inner) => {
                    assert!(matches!(inner.children[0], Block::Paragraph(_)));
                }
                other => panic!("expected nested blockquote, got {other:?}"),
            },
            other => panic!("expected blockquote, got {other:?}"),
        }
    }

    #[test]
    fn bullet_list_two_items() {
        let blocks = blocks_of("- one\n- two\n");
        match &blocks[0] {
            Block::List(list) => {
                assert!(!list.ordered);
                assert_eq!(list.items.len(), 2);
                assert!(list.tight);
            }
            other => panic!("expected list, got {other:?}"),
        }
    }

    #[test]
    fn ordered_list_preserves_start() {
        let blocks = blocks_of("5. five\n6. six\n");
        match &blocks[0] {
            Block::List(list) => {
                assert!(list.ordered);
                assert_eq!(list.start, 5);
            }
            other => panic!("expected list, got {other:?}"),
        }
    }

    #[test]
    fn loose_list_detected_via_blank_between_items() {
        let blocks = blocks_of("- one\n\n- two\n");
        match &blocks[0] {
            Block::List(list) => assert!(!list.tight),
            other => panic!("expected list, got {other:?}"),
        }
    }

    #[test]
    fn task_list_item_lifts_state() {
        let blocks = blocks_of("- [x] done\n- [ ] todo\n");
        match &blocks[0] {
            Block::List(list) => {
                assert_eq!(list.items[0].task, TaskState::Checked);
                assert_eq!(list.items[1].task, TaskState::Unchecked);
            }
            other => panic!("expected list, got {other:?}"),
        }
    }

    #[test]
    fn setext_heading_from_underline() {
        let blocks = blocks_of("Title\n=====\n");
        match &blocks[0] {
            Block::Heading(h) => {
                assert_eq!(h.level, 1);
                assert_eq!(h.style, HeadingStyle::Setext);
            }
            other => panic!("expected setext heading, got {other:?}"),
        }
    }

    #[test]
    fn link_reference_definition() {
        let blocks = blocks_of("[foo]: /url \"title\"\n");
        assert!(matches!(blocks[0], Block::LinkRefDef(_)));
    }

    #[test]
    fn table_with_alignment() {
        let blocks = blocks_of("| a | b |\n| :-- | --: |\n| 1 | 2 |\n");
        match &blocks[0] {
            Block::Table(t) => {
                assert_eq!(t.alignments, vec![Alignment::Left, Alignment::Right]);
                assert_eq!(t.rows.len(), 1);
            }
            other => panic!("expected table, got {other:?}"),
        }
    }

    #[test]
    fn blank_line_runs_are_kept() {
        let blocks = blocks_of("a\n\n\nb\n");
        assert!(matches!(blocks[1], Block::BlankLines(ref b) if b.count == 2));
    }

    #[test]
    fn indented_code_block() {
        let blocks = blocks_of("    code here\n");
        match &blocks[0] {
            Block::IndentedCode(c) => assert_eq!(c.body, "code here"),
            other => panic!("expected indented code, got {other:?}"),
        }
    }

    #[test]
    fn coverage_invariant_holds() {
        let src = "# Title\n\nSome *text* here.\n\n> quoted\n\n- a\n- b\n";
        let doc = parse(src);
        let mut offset = 0usize;
        for block in &doc.blocks {
            assert_eq!(block.span().start, offset, "gap before block {block:?}");
            offset = block.span().end;
        }
        assert_eq!(offset, src.len());
    }
}
