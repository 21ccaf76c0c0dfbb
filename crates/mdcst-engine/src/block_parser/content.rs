//! Content projection for feeding multi-line block content to the inline
//! parser while keeping every inline node's span an absolute offset into the
//! original source.
//!
//! Separates a container's line prefix (e.g. `> ` for a blockquote) from the
//! meaningful content, the way `markdown-neuraxis-engine`'s own
//! `parsing::blocks::content` module does, generalized here to also carry
//! the byte-offset table the inline parser needs.

use crate::span::Span;

/// One physical line's contribution to a block's logical content: its
/// absolute content span, container prefixes already excluded.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ContentLine {
    pub content: Span,
}

/// A block's content, viewed as the sequence of per-line spans the inline
/// parser should read.
///
/// `Contiguous` is the common case: the block is not inside a line-prefix
/// container, so its content is one unbroken slice of the source.
/// `Lines` covers blockquote/list-item content, whose per-line spans are not
/// adjacent in the source because a prefix was stripped between them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ContentView {
    Contiguous(Span),
    Lines(Vec<ContentLine>),
}

impl ContentView {
    pub fn single(span: Span) -> Self {
        ContentView::Contiguous(span)
    }

    pub fn from_lines(spans: Vec<Span>) -> Self {
        ContentView::Lines(spans.into_iter().map(|content| ContentLine { content }).collect())
    }

    /// Joins every line's text (read from `source`) with `\n`, returning the
    /// joined text plus a byte-offset table: `offsets[i]` is the absolute
    /// source offset of `text`'s byte `i`, with one extra trailing sentinel
    /// entry for `i == text.len()`.
    pub fn join(&self, source: &str) -> (String, Vec<usize>) {
        match self {
            ContentView::Contiguous(span) => {
                let text = source[span.start..span.end].to_string();
                let mut offsets: Vec<usize> = (span.start..span.end).collect();
                offsets.push(span.end);
                (text, offsets)
            }
            ContentView::Lines(lines) => {
                let mut text = String::new();
                let mut offsets = Vec::new();
                for (idx, line) in lines.iter().enumerate() {
                    let slice = &source[line.content.start..line.content.end];
                    offsets.extend(line.content.start..line.content.end);
                    text.push_str(slice);
                    if idx + 1 < lines.len() {
                        offsets.push(line.content.end);
                        text.push('\n');
                    }
                }
                offsets.push(lines.last().map(|l| l.content.end).unwrap_or(0));
                (text, offsets)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn contiguous_join_is_direct_slice() {
        let source = "hello world";
        let view = ContentView::single(Span::new(0, 5));
        let (text, offsets) = view.join(source);
        assert_eq!(text, "hello");
        assert_eq!(offsets, vec![0, 1, 2, 3, 4, 5]);
    }

    #[test]
    fn lines_join_inserts_synthetic_newline() {
        let source = "> a\n> b\n";
        // content spans point past the "> " prefix on each line
        let view = ContentView::from_lines(vec![Span::new(2, 3), Span::new(6, 7)]);
        let (text, offsets) = view.join(source);
        assert_eq!(text, "a\nb");
        assert_eq!(offsets, vec![2, 3, 6, 7]);
    }
}
