//! Indexed, read-only access to the source text backing a parse.

use xi_rope::Rope;

use crate::span::Span;

/// Line-ending style observed for a single physical line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineEnding {
    Lf,
    CrLf,
    Cr,
    /// Last line of the source, no terminator present.
    None,
}

impl LineEnding {
    pub fn byte_len(self) -> usize {
        match self {
            LineEnding::CrLf => 2,
            LineEnding::Lf | LineEnding::Cr => 1,
            LineEnding::None => 0,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            LineEnding::CrLf => "\r\n",
            LineEnding::Lf => "\n",
            LineEnding::Cr => "\r",
            LineEnding::None => "",
        }
    }
}

/// One physical line: its content span (terminator excluded) and the
/// terminator that followed it, so CRLF/LF/CR all round-trip byte for byte.
#[derive(Debug, Clone)]
pub struct LineRef {
    pub span: Span,
    pub ending: LineEnding,
    pub text: String,
}

impl LineRef {
    /// Span including the line terminator.
    pub fn full_span(&self) -> Span {
        Span::new(self.span.start, self.span.end + self.ending.byte_len())
    }
}

/// A view over the source text backing a parse.
///
/// Wraps an `xi_rope::Rope` as the single source of truth, the way
/// `markdown-neuraxis-engine`'s editing module treats its buffer: the rope
/// gives cheap slicing and lets unaffected regions be shared rather than
/// copied across incremental edits. Parsing never mutates the rope.
#[derive(Debug, Clone)]
pub struct SourceView {
    rope: Rope,
}

impl SourceView {
    pub fn new(text: &str) -> Self {
        SourceView {
            rope: Rope::from(text),
        }
    }

    pub fn from_rope(rope: Rope) -> Self {
        SourceView { rope }
    }

    pub fn rope(&self) -> &Rope {
        &self.rope
    }

    pub fn len(&self) -> usize {
        self.rope.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rope.is_empty()
    }

    pub fn slice(&self, span: Span) -> String {
        self.rope.slice_to_cow(span.start..span.end).into_owned()
    }

    pub fn full_text(&self) -> String {
        self.rope.slice_to_cow(0..self.rope.len()).into_owned()
    }

    /// Splits the source into physical lines, each with its span (terminator
    /// excluded) and the terminator actually present. Used as the input to
    /// block-level line classification.
    pub fn lines(&self) -> Vec<LineRef> {
        lines_of(&self.full_text())
    }
}

/// Free function form of [`SourceView::lines`], usable directly on a
/// substring during incremental reparsing of a damage window.
pub fn lines_of(text: &str) -> Vec<LineRef> {
    let bytes = text.as_bytes();
    let mut lines = Vec::new();
    let mut start = 0usize;
    let mut i = 0usize;
    while i < bytes.len() {
        match bytes[i] {
            b'\n' => {
                lines.push(LineRef {
                    span: Span::new(start, i),
                    ending: LineEnding::Lf,
                    text: text[start..i].to_string(),
                });
                i += 1;
                start = i;
            }
            b'\r' => {
                if i + 1 < bytes.len() && bytes[i + 1] == b'\n' {
                    lines.push(LineRef {
                        span: Span::new(start, i),
                        ending: LineEnding::CrLf,
                        text: text[start..i].to_string(),
                    });
                    i += 2;
                } else {
                    lines.push(LineRef {
                        span: Span::new(start, i),
                        ending: LineEnding::Cr,
                        text: text[start..i].to_string(),
                    });
                    i += 1;
                }
                start = i;
            }
            _ => i += 1,
        }
    }
    if start < bytes.len() {
        lines.push(LineRef {
            span: Span::new(start, bytes.len()),
            ending: LineEnding::None,
            text: text[start..].to_string(),
        });
    }
    lines
}
