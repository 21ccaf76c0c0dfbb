//! The inline scanning loop.
//!
//! Mirrors `markdown-neuraxis-engine`'s `inline::parser::parse_inline`
//! shape — try each construct in precedence order, fall through to a
//! running plain-text accumulator flushed on interruption — but extended
//! with the machinery CommonMark/GFM inline grammar actually needs beyond
//! that teacher's small wikilink-only grammar:
//!
//! 1. **Tokenize** (`tokenize`): one left-to-right pass producing a flat
//!    event stream. Raw zones (code spans) and brackets (links/images) are
//!    fully resolved as they're encountered — link/image content is
//!    recursively parsed by byte span, the same way a nested CST node gets
//!    its own recursive `build_sequence` call in the block parser. `*`/`_`/
//!    `~~` runs are left as unresolved `Delim` markers.
//! 2. **Pair delimiters** (`process_emphasis`): a second pass matches
//!    `Delim` markers into `Emphasis`/`Strong`/`Strikethrough` nodes
//!    following the CommonMark flanking and mod-3 rules, walking
//!    closer-by-closer so that nested pairs resolve from the inside out.

use crate::cst::inline::DelimiterChar as CstDelimiterChar;
use crate::cst::inline::{
    Autolink, CodeSpan, Emphasis, FootnoteReference, HtmlInline, Image, Inline, Link, RefImage,
    RefLink, Strikethrough, Strong, Text,
};
use crate::span::Span;

use super::cursor::Cursor;
use super::delimiter::{self, DelimRun, DelimiterChar as DChar};
use super::kinds::{Autolink as AutolinkKind, CodeSpan as CodeSpanKind, FootnoteRef, HtmlInline as HtmlInlineKind};

#[derive(Debug, Clone)]
enum Event {
    Node(Inline),
    Delim(DelimRun),
}

struct BracketFrame {
    mark_index: usize,
    is_image: bool,
    marker_text: &'static str,
    open_span: Span,
    content_start_i: usize,
}

/// Parses `text` (a block's logical inline content, already joined by
/// [`crate::block_parser::content::ContentView::join`]) into a flat list of
/// top-level inline nodes, each carrying an absolute span via `offsets`.
pub fn parse(text: &str, offsets: &[usize]) -> Vec<Inline> {
    let events = tokenize(text, offsets);
    let events = process_emphasis(events);
    let nodes = events
        .into_iter()
        .map(|e| match e {
            Event::Node(n) => n,
            Event::Delim(d) => Inline::Text(Text {
                span: d.span,
                content: d.ch.as_char().to_string().repeat(d.len),
            }),
        })
        .collect();
    coalesce_text(nodes)
}

/// Merges adjacent `Text` nodes into one. The tokenizer emits a fresh `Text`
/// node at every construct boundary (an unresolved delimiter run demoted
/// back to literal text, a backslash escape, a non-opening/closing `_` in
/// the middle of a word), so plain runs of text routinely arrive as several
/// sibling nodes; CST/mdast consumers expect one `Text` node per contiguous
/// literal run.
fn coalesce_text(nodes: Vec<Inline>) -> Vec<Inline> {
    let mut out: Vec<Inline> = Vec::with_capacity(nodes.len());
    for node in nodes {
        if let Inline::Text(cur) = &node {
            if let Some(Inline::Text(prev)) = out.last_mut() {
                prev.content.push_str(&cur.content);
                prev.span = Span::new(prev.span.start, cur.span.end);
                continue;
            }
        }
        out.push(node);
    }
    out
}

fn is_ascii_punct_byte(b: u8) -> bool {
    (b as char).is_ascii_punctuation()
}

fn find_code_close(text: &str, start: usize, run: usize) -> Option<usize> {
    let bytes = text.as_bytes();
    let mut i = start;
    while i < bytes.len() {
        if bytes[i] == b'`' {
            let mut j = i;
            while j < bytes.len() && bytes[j] == b'`' {
                j += 1;
            }
            if j - i == run {
                return Some(i);
            }
            i = j;
        } else {
            i += 1;
        }
    }
    None
}

fn tokenize(text: &str, offsets: &[usize]) -> Vec<Event> {
    let mut events: Vec<Event> = Vec::new();
    let mut brackets: Vec<BracketFrame> = Vec::new();
    let mut cur = Cursor::new(text, offsets);
    let mut text_start = 0usize;

    macro_rules! flush_text {
        ($end:expr) => {
            if $end > text_start {
                let span = Span::new(offsets[text_start], offsets[$end]);
                let content = text[text_start..$end].to_string();
                events.push(Event::Node(Inline::Text(Text { span, content })));
            }
        };
    }

    while !cur.eof() {
        let b = cur.peek().unwrap();
        match b {
            b'\\' => {
                if let Some(next) = cur.peek_at(1) {
                    if is_ascii_punct_byte(next) {
                        flush_text!(cur.i);
                        let start_i = cur.i;
                        cur.bump_n(2);
                        let span = cur.span_from(start_i);
                        events.push(Event::Node(Inline::Text(Text {
                            span,
                            content: (next as char).to_string(),
                        })));
                        text_start = cur.i;
                        continue;
                    } else if next == b'\n' {
                        flush_text!(cur.i);
                        let start_i = cur.i;
                        cur.bump_n(2);
                        let span = cur.span_from(start_i);
                        events.push(Event::Node(Inline::HardBreak(span)));
                        text_start = cur.i;
                        continue;
                    }
                }
                cur.bump();
            }
            b'\n' => {
                let bytes = text.as_bytes();
                let mut k = cur.i;
                let mut trailing_spaces = 0;
                while k > text_start && bytes[k - 1] == b' ' {
                    trailing_spaces += 1;
                    k -= 1;
                }
                if trailing_spaces >= 2 {
                    flush_text!(k);
                    let start_i = k;
                    cur.bump();
                    let span = cur.span_from(start_i);
                    events.push(Event::Node(Inline::HardBreak(span)));
                } else {
                    flush_text!(cur.i);
                    let start_i = cur.i;
                    cur.bump();
                    let span = cur.span_from(start_i);
                    events.push(Event::Node(Inline::SoftBreak(span)));
                }
                text_start = cur.i;
            }
            b'`' => {
                flush_text!(cur.i);
                let start_i = cur.i;
                let run = CodeSpanKind::run_len(text.as_bytes(), cur.i);
                cur.bump_n(run);
                if let Some(close_at) = find_code_close(text, cur.i, run) {
                    let content_start_i = cur.i;
                    let content = &text[content_start_i..close_at];
                    let normalized = CodeSpanKind::normalize_content(content);
                    cur.i = close_at;
                    cur.bump_n(run);
                    let span = cur.span_from(start_i);
                    events.push(Event::Node(Inline::Code(CodeSpan {
                        span,
                        backtick_len: run,
                        content: normalized,
                    })));
                } else {
                    let span = cur.span_from(start_i);
                    events.push(Event::Node(Inline::Text(Text {
                        span,
                        content: "`".repeat(run),
                    })));
                }
                text_start = cur.i;
            }
            b'<' => {
                flush_text!(cur.i);
                let start_i = cur.i;
                let rest = &text[cur.i + 1..];
                if let Some(len) = HtmlInlineKind::detect(rest) {
                    cur.bump_n(1 + len);
                    let span = cur.span_from(start_i);
                    let content = text[start_i..cur.i].to_string();
                    events.push(Event::Node(Inline::HtmlInline(HtmlInline { span, content })));
                } else if let Some(end) = rest.find('>') {
                    let inner = &rest[..end];
                    if let Some(url) = AutolinkKind::detect_uri(inner) {
                        cur.bump_n(1 + end + 1);
                        let span = cur.span_from(start_i);
                        events.push(Event::Node(Inline::Autolink(Autolink {
                            span,
                            url: url.to_string(),
                            is_email: false,
                        })));
                    } else if AutolinkKind::detect_email(inner) {
                        cur.bump_n(1 + end + 1);
                        let span = cur.span_from(start_i);
                        events.push(Event::Node(Inline::Autolink(Autolink {
                            span,
                            url: inner.to_string(),
                            is_email: true,
                        })));
                    } else {
                        cur.bump();
                        events.push(Event::Node(Inline::Text(Text {
                            span: cur.span_from(start_i),
                            content: "<".into(),
                        })));
                    }
                } else {
                    cur.bump();
                    events.push(Event::Node(Inline::Text(Text {
                        span: cur.span_from(start_i),
                        content: "<".into(),
                    })));
                }
                text_start = cur.i;
            }
            b'[' => {
                let start_i = cur.i;
                if let Some((label, consumed)) = FootnoteRef::detect(&text[cur.i + 1..]) {
                    flush_text!(cur.i);
                    cur.bump_n(1 + consumed);
                    let span = cur.span_from(start_i);
                    events.push(Event::Node(Inline::FootnoteReference(FootnoteReference {
                        span,
                        label: label.to_string(),
                    })));
                    text_start = cur.i;
                } else {
                    flush_text!(cur.i);
                    cur.bump();
                    brackets.push(BracketFrame {
                        mark_index: events.len(),
                        is_image: false,
                        marker_text: "[",
                        open_span: cur.span_from(start_i),
                        content_start_i: cur.i,
                    });
                    text_start = cur.i;
                }
            }
            b'!' if cur.peek_at(1) == Some(b'[') => {
                flush_text!(cur.i);
                let start_i = cur.i;
                cur.bump_n(2);
                brackets.push(BracketFrame {
                    mark_index: events.len(),
                    is_image: true,
                    marker_text: "![",
                    open_span: cur.span_from(start_i),
                    content_start_i: cur.i,
                });
                text_start = cur.i;
            }
            b']' => {
                flush_text!(cur.i);
                cur.bump();
                if let Some(frame) = brackets.pop() {
                    let close_start_i = cur.i - 1;
                    if let Some(node) = try_resolve_bracket(text, offsets, &mut cur, &frame, close_start_i) {
                        events.truncate(frame.mark_index);
                        events.push(Event::Node(node));
                    } else {
                        events.push(Event::Node(Inline::Text(Text {
                            span: Span::new(close_start_i, cur.i),
                            content: "]".to_string(),
                        })));
                        events.insert(
                            frame.mark_index,
                            Event::Node(Inline::Text(Text {
                                span: frame.open_span,
                                content: frame.marker_text.to_string(),
                            })),
                        );
                    }
                } else {
                    events.push(Event::Node(Inline::Text(Text {
                        span: Span::new(offsets[cur.i - 1], cur.pos()),
                        content: "]".to_string(),
                    })));
                }
                text_start = cur.i;
            }
            b'*' | b'_' | b'~' => {
                flush_text!(cur.i);
                let start_i = cur.i;
                let mut run = 0usize;
                while cur.peek() == Some(b) {
                    cur.bump();
                    run += 1;
                }
                if b == b'~' && run != 2 {
                    let span = cur.span_from(start_i);
                    events.push(Event::Node(Inline::Text(Text {
                        span,
                        content: (b as char).to_string().repeat(run),
                    })));
                } else {
                    let before = text[..start_i].chars().next_back();
                    let after = text[cur.i..].chars().next();
                    let (lf, rf) = delimiter::classify_flanking(before, after);
                    let dchar = DChar::from_char(b as char).unwrap();
                    let co = delimiter::can_open(dchar, lf, rf, before);
                    let cc = delimiter::can_close(dchar, lf, rf, after);
                    let span = cur.span_from(start_i);
                    if co || cc {
                        events.push(Event::Delim(DelimRun {
                            ch: dchar,
                            span,
                            len: run,
                            can_open: co,
                            can_close: cc,
                        }));
                    } else {
                        events.push(Event::Node(Inline::Text(Text {
                            span,
                            content: (b as char).to_string().repeat(run),
                        })));
                    }
                }
                text_start = cur.i;
            }
            _ => {
                cur.bump();
            }
        }
    }
    flush_text!(cur.i);

    for frame in brackets.into_iter().rev() {
        events.insert(
            frame.mark_index,
            Event::Node(Inline::Text(Text {
                span: frame.open_span,
                content: frame.marker_text.to_string(),
            })),
        );
    }

    events
}

fn skip_ws(cur: &mut Cursor) {
    while let Some(b) = cur.peek() {
        if b == b' ' || b == b'\t' || b == b'\n' {
            cur.bump();
        } else {
            break;
        }
    }
}

fn parse_destination(cur: &mut Cursor) -> Option<String> {
    if cur.peek() == Some(b'<') {
        let start = cur.i;
        cur.bump();
        loop {
            let b = cur.peek()?;
            if b == b'>' {
                let s = cur.s[start + 1..cur.i].to_string();
                cur.bump();
                return Some(s);
            }
            if b == b'<' || b == b'\n' {
                return None;
            }
            if b == b'\\' {
                cur.bump();
            }
            cur.bump();
        }
    } else {
        let start = cur.i;
        let mut depth = 0i32;
        loop {
            let Some(b) = cur.peek() else { break };
            match b {
                b'(' => {
                    depth += 1;
                    cur.bump();
                }
                b')' => {
                    if depth == 0 {
                        break;
                    }
                    depth -= 1;
                    cur.bump();
                }
                b' ' | b'\t' | b'\n' => break,
                b'\\' => {
                    cur.bump();
                    if cur.peek().is_some() {
                        cur.bump();
                    }
                }
                _ if b.is_ascii_control() => return None,
                _ => {
                    cur.bump();
                }
            }
        }
        if cur.i == start {
            return None;
        }
        Some(cur.s[start..cur.i].to_string())
    }
}

fn parse_title(cur: &mut Cursor) -> Option<String> {
    let close = match cur.peek()? {
        b'"' => b'"',
        b'\'' => b'\'',
        b'(' => b')',
        _ => return None,
    };
    let start = cur.i;
    cur.bump();
    loop {
        let b = cur.peek()?;
        if b == b'\\' {
            cur.bump();
            if cur.peek().is_some() {
                cur.bump();
            }
            continue;
        }
        if b == close {
            cur.bump();
            break;
        }
        cur.bump();
    }
    Some(cur.s[start + 1..cur.i - 1].to_string())
}

fn parse_link_tail(cur: &mut Cursor) -> Option<(String, Option<String>)> {
    if cur.peek() != Some(b'(') {
        return None;
    }
    cur.bump();
    skip_ws(cur);
    let dest = parse_destination(cur)?;
    skip_ws(cur);
    let title = parse_title(cur);
    if title.is_some() {
        skip_ws(cur);
    }
    if cur.peek() != Some(b')') {
        return None;
    }
    cur.bump();
    Some((dest, title))
}

fn parse_ref_label(cur: &mut Cursor) -> Option<String> {
    if cur.peek() != Some(b'[') {
        return None;
    }
    cur.bump();
    let start = cur.i;
    loop {
        let b = cur.peek()?;
        if b == b']' {
            break;
        }
        if b == b'[' {
            return None;
        }
        cur.bump();
    }
    let label = cur.s[start..cur.i].to_string();
    cur.bump();
    Some(label)
}

fn try_resolve_bracket(
    text: &str,
    offsets: &[usize],
    cur: &mut Cursor,
    frame: &BracketFrame,
    close_start_i: usize,
) -> Option<Inline> {
    let content_text = &text[frame.content_start_i..close_start_i];
    let content_offsets = &offsets[frame.content_start_i..=close_start_i];
    let span_start = frame.open_span.start;

    if cur.peek() == Some(b'(') {
        let saved = cur.clone();
        if let Some((dest, title)) = parse_link_tail(cur) {
            let span = Span::new(span_start, cur.pos());
            return Some(build_bracket_node(frame, span, content_text, content_offsets, dest, title));
        }
        *cur = saved;
    }
    if cur.peek() == Some(b'[') {
        let saved = cur.clone();
        if let Some(label) = parse_ref_label(cur) {
            let span = Span::new(span_start, cur.pos());
            let label = if label.is_empty() { content_text.to_string() } else { label };
            return Some(build_bracket_ref_node(frame, span, content_text, content_offsets, label));
        }
        *cur = saved;
    }
    if !content_text.is_empty() {
        let span = Span::new(span_start, cur.pos());
        let label = content_text.to_string();
        return Some(build_bracket_ref_node(frame, span, content_text, content_offsets, label));
    }
    None
}

fn build_bracket_node(
    frame: &BracketFrame,
    span: Span,
    content_text: &str,
    content_offsets: &[usize],
    destination: String,
    title: Option<String>,
) -> Inline {
    if frame.is_image {
        let alt = plain_text(&parse(content_text, content_offsets));
        Inline::Image(Image { span, alt, destination, title })
    } else {
        let children = parse(content_text, content_offsets);
        Inline::Link(Link { span, children, destination, title })
    }
}

fn build_bracket_ref_node(frame: &BracketFrame, span: Span, content_text: &str, content_offsets: &[usize], label: String) -> Inline {
    if frame.is_image {
        let alt = plain_text(&parse(content_text, content_offsets));
        Inline::RefImage(RefImage { span, alt, label })
    } else {
        let children = parse(content_text, content_offsets);
        Inline::RefLink(RefLink { span, children, label })
    }
}

fn plain_text(inlines: &[Inline]) -> String {
    let mut out = String::new();
    for inl in inlines {
        match inl {
            Inline::Text(t) => out.push_str(&t.content),
            Inline::SoftBreak(_) | Inline::HardBreak(_) => out.push(' '),
            Inline::Code(c) => out.push_str(&c.content),
            Inline::Emphasis(e) => out.push_str(&plain_text(&e.children)),
            Inline::Strong(s) => out.push_str(&plain_text(&s.children)),
            Inline::Strikethrough(s) => out.push_str(&plain_text(&s.children)),
            Inline::Link(l) => out.push_str(&plain_text(&l.children)),
            Inline::Image(i) => out.push_str(&i.alt),
            Inline::RefLink(r) => out.push_str(&plain_text(&r.children)),
            Inline::RefImage(r) => out.push_str(&r.alt),
            Inline::Autolink(a) => out.push_str(&a.url),
            Inline::HtmlInline(_) => {}
            Inline::FootnoteReference(f) => out.push_str(&f.label),
        }
    }
    out
}

fn process_emphasis(mut events: Vec<Event>) -> Vec<Event> {
    let mut close_idx = 0usize;
    loop {
        while close_idx < events.len() {
            if let Event::Delim(d) = &events[close_idx] {
                if d.can_close && d.len > 0 {
                    break;
                }
            }
            close_idx += 1;
        }
        if close_idx >= events.len() {
            break;
        }

        let (closer_ch, closer_len, closer_can_open) = match &events[close_idx] {
            Event::Delim(d) => (d.ch, d.len, d.can_open),
            _ => unreachable!(),
        };

        let mut opener_idx: Option<usize> = None;
        let mut j = close_idx;
        while j > 0 {
            j -= 1;
            if let Event::Delim(d) = &events[j] {
                if d.ch == closer_ch && d.can_open && d.len > 0 && delimiter::mod3_compatible(d, closer_len, closer_can_open) {
                    opener_idx = Some(j);
                    break;
                }
            }
        }

        let Some(opener_idx) = opener_idx else {
            close_idx += 1;
            continue;
        };

        let opener_len = match &events[opener_idx] {
            Event::Delim(d) => d.len,
            _ => unreachable!(),
        };
        let use_len = match closer_ch {
            DChar::Tilde => opener_len.min(closer_len).min(2),
            _ => {
                if opener_len >= 2 && closer_len >= 2 {
                    2
                } else {
                    1
                }
            }
        };

        let inner: Vec<Event> = events.drain(opener_idx + 1..close_idx).collect();

        let (opener_span, opener_ch_copy) = match &events[opener_idx] {
            Event::Delim(d) => (d.span, d.ch),
            _ => unreachable!(),
        };
        let closer_span = match &events[opener_idx + 1] {
            Event::Delim(d) => d.span,
            _ => unreachable!(),
        };

        let node_start = opener_span.end - use_len;
        let node_end = closer_span.start + use_len;
        let span = Span::new(node_start, node_end);

        let children: Vec<Inline> = inner
            .into_iter()
            .map(|e| match e {
                Event::Node(n) => n,
                Event::Delim(d) => Inline::Text(Text {
                    span: d.span,
                    content: d.ch.as_char().to_string().repeat(d.len),
                }),
            })
            .collect();

        let node = match (opener_ch_copy, use_len) {
            (DChar::Tilde, _) => Inline::Strikethrough(Strikethrough { span, children }),
            (DChar::Star, 2) => Inline::Strong(Strong { span, marker: CstDelimiterChar::Star, children }),
            (DChar::Star, _) => Inline::Emphasis(Emphasis { span, marker: CstDelimiterChar::Star, children }),
            (DChar::Underscore, 2) => Inline::Strong(Strong { span, marker: CstDelimiterChar::Underscore, children }),
            (DChar::Underscore, _) => Inline::Emphasis(Emphasis { span, marker: CstDelimiterChar::Underscore, children }),
        };

        let opener_remaining = opener_len - use_len;
        let closer_remaining = closer_len - use_len;

        let mut replacement: Vec<Event> = Vec::new();
        if opener_remaining > 0 {
            let mut d = match &events[opener_idx] {
                Event::Delim(d) => d.clone(),
                _ => unreachable!(),
            };
            d.len = opener_remaining;
            d.span = Span::new(d.span.start, d.span.end - use_len);
            replacement.push(Event::Delim(d));
        }
        replacement.push(Event::Node(node));
        if closer_remaining > 0 {
            let mut d = match &events[opener_idx + 1] {
                Event::Delim(d) => d.clone(),
                _ => unreachable!(),
            };
            d.len = closer_remaining;
            d.span = Span::new(d.span.start + use_len, d.span.end);
            replacement.push(Event::Delim(d));
        }

        let replacement_len = replacement.len();
        events.splice(opener_idx..=opener_idx + 1, replacement);

        close_idx = if closer_remaining > 0 {
            opener_idx + replacement_len - 1
        } else {
            opener_idx + replacement_len
        };
    }
    events
}

#[cfg(test)]
mod tests {
    use super::*;

    fn offsets_for(text: &str) -> Vec<usize> {
        (0..=text.len()).collect()
    }

    fn parse_plain(text: &str) -> Vec<Inline> {
        let offsets = offsets_for(text);
        parse(text, &offsets)
    }

    #[test]
    fn plain_text_is_one_node() {
        let nodes = parse_plain("hello world");
        assert_eq!(nodes.len(), 1);
        assert!(matches!(&nodes[0], Inline::Text(t) if t.content == "hello world"));
    }

    #[test]
    fn emphasis_wraps_text() {
        let nodes = parse_plain("*hi*");
        assert_eq!(nodes.len(), 1);
        match &nodes[0] {
            Inline::Emphasis(e) => {
                assert_eq!(e.span, Span::new(0, 4));
                assert!(matches!(&e.children[0], Inline::Text(t) if t.content == "hi"));
            }
            other => panic!("expected Emphasis, got {other:?}"),
        }
    }

    #[test]
    fn strong_from_double_star() {
        let nodes = parse_plain("**hi**");
        assert!(matches!(&nodes[0], Inline::Strong(s) if matches!(&s.children[0], Inline::Text(t) if t.content == "hi")));
    }

    #[test]
    fn nested_strong_in_emphasis() {
        let nodes = parse_plain("*a **b** c*");
        match &nodes[0] {
            Inline::Emphasis(e) => {
                assert!(e.children.iter().any(|c| matches!(c, Inline::Strong(_))));
            }
            other => panic!("expected Emphasis, got {other:?}"),
        }
    }

    #[test]
    fn code_span_suppresses_emphasis_inside() {
        let nodes = parse_plain("`*not emphasis*`");
        assert_eq!(nodes.len(), 1);
        assert!(matches!(&nodes[0], Inline::Code(c) if c.content == "*not emphasis*"));
    }

    #[test]
    fn inline_link_parses_destination_and_title() {
        let nodes = parse_plain("[text](/url \"title\")");
        match &nodes[0] {
            Inline::Link(l) => {
                assert_eq!(l.destination, "/url");
                assert_eq!(l.title.as_deref(), Some("title"));
                assert!(matches!(&l.children[0], Inline::Text(t) if t.content == "text"));
            }
            other => panic!("expected Link, got {other:?}"),
        }
    }

    #[test]
    fn shortcut_reference_link() {
        let nodes = parse_plain("[foo]");
        assert!(matches!(&nodes[0], Inline::RefLink(r) if r.label == "foo"));
    }

    #[test]
    fn image_alt_is_plain_text() {
        let nodes = parse_plain("![alt *text*](/img.png)");
        match &nodes[0] {
            Inline::Image(i) => {
                assert_eq!(i.alt, "alt text");
                assert_eq!(i.destination, "/img.png");
            }
            other => panic!("expected Image, got {other:?}"),
        }
    }

    #[test]
    fn unmatched_bracket_is_literal_text() {
        let nodes = parse_plain("[oops");
        let text: String = nodes
            .iter()
            .map(|n| match n {
                Inline::Text(t) => t.content.clone(),
                _ => String::new(),
            })
            .collect();
        assert_eq!(text, "[oops");
    }

    #[test]
    fn autolink_uri() {
        let nodes = parse_plain("<https://example.com>");
        assert!(matches!(&nodes[0], Inline::Autolink(a) if a.url == "https://example.com" && !a.is_email));
    }

    #[test]
    fn strikethrough_requires_double_tilde() {
        let nodes = parse_plain("~~gone~~");
        assert!(matches!(&nodes[0], Inline::Strikethrough(_)));
    }

    #[test]
    fn footnote_reference_recognized() {
        let nodes = parse_plain("see[^1]");
        assert!(nodes.iter().any(|n| matches!(n, Inline::FootnoteReference(f) if f.label == "1")));
    }

    #[test]
    fn hard_break_on_two_trailing_spaces() {
        let text = "line one  \nline two";
        let offsets = offsets_for(text);
        let nodes = parse(text, &offsets);
        assert!(nodes.iter().any(|n| matches!(n, Inline::HardBreak(_))));
    }

    #[test]
    fn soft_break_on_plain_newline() {
        let text = "line one\nline two";
        let offsets = offsets_for(text);
        let nodes = parse(text, &offsets);
        assert!(nodes.iter().any(|n| matches!(n, Inline::SoftBreak(_))));
    }

    #[test]
    fn backslash_escapes_punctuation() {
        let nodes = parse_plain(r"\*not emphasis\*");
        let text: String = nodes
            .iter()
            .map(|n| match n {
                Inline::Text(t) => t.content.clone(),
                _ => String::new(),
            })
            .collect();
        assert_eq!(text, "*not emphasis*");
    }

    #[test]
    fn intraword_underscore_does_not_emphasize() {
        let nodes = parse_plain("snake_case_word");
        assert_eq!(nodes.len(), 1);
        assert!(matches!(&nodes[0], Inline::Text(t) if t.content == "snake_case_word"));
    }
}
