//! The external AST projection: an mdast-shaped tree (a `type`-tagged node
//! per construct, `children` arrays, optional `{start, end}` positions)
//! derived from the internal CST.
//!
//! This is a typed Rust structure rather than a JSON value: the teacher's
//! dependency stack carries no serialization crate, and adding one for this
//! single external-interop surface would be exactly the kind of
//! need-driven dependency the project stack is meant to avoid pulling in
//! on its own — an embedding that wants mdast-as-JSON can derive it from
//! this shape with its own `serde` setup. CST-only metadata (blank-line
//! runs, fence/marker characters, tight/loose bookkeeping beyond what
//! mdast's `list.spread` already models) is dropped; spans are retained as
//! `position`.
//!
//! mdast has no separate soft-line-break node (it's folded into adjoining
//! text); this projection keeps it as its own empty-ish `Text("\n")` node
//! rather than merging runs of `Text`, a simplification noted here rather
//! than implemented as a text-merging pass.

use crate::cst::{Alignment, Block, Document, Inline, TaskState};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Position {
    pub start: usize,
    pub end: usize,
}

#[derive(Debug, Clone, PartialEq)]
pub enum MdastNode {
    Root { children: Vec<MdastNode>, position: Position },
    Paragraph { children: Vec<MdastNode>, position: Position },
    Heading { depth: u8, children: Vec<MdastNode>, position: Position },
    Code { lang: Option<String>, value: String, position: Position },
    ThematicBreak { position: Position },
    Blockquote { children: Vec<MdastNode>, position: Position },
    List { ordered: bool, start: Option<u64>, spread: bool, children: Vec<MdastNode>, position: Position },
    ListItem { checked: Option<bool>, children: Vec<MdastNode>, position: Position },
    Html { value: String, position: Position },
    Table { align: Vec<Option<&'static str>>, children: Vec<MdastNode>, position: Position },
    TableRow { children: Vec<MdastNode>, position: Position },
    TableCell { children: Vec<MdastNode>, position: Position },
    Definition { identifier: String, url: String, title: Option<String>, position: Position },
    FootnoteDefinition { identifier: String, children: Vec<MdastNode>, position: Position },
    Text { value: String, position: Position },
    Emphasis { children: Vec<MdastNode>, position: Position },
    Strong { children: Vec<MdastNode>, position: Position },
    Delete { children: Vec<MdastNode>, position: Position },
    InlineCode { value: String, position: Position },
    Break { position: Position },
    Link { url: String, title: Option<String>, children: Vec<MdastNode>, position: Position },
    Image { url: String, title: Option<String>, alt: String, position: Position },
    LinkReference { identifier: String, children: Vec<MdastNode>, position: Position },
    ImageReference { identifier: String, alt: String, position: Position },
    FootnoteReference { identifier: String, position: Position },
}

fn pos(span: crate::span::Span) -> Position {
    Position { start: span.start, end: span.end }
}

pub fn to_mdast(document: &Document) -> MdastNode {
    MdastNode::Root {
        children: document.blocks.iter().filter_map(block_to_mdast).collect(),
        position: pos(document.span),
    }
}

fn block_to_mdast(block: &Block) -> Option<MdastNode> {
    Some(match block {
        Block::Paragraph(p) => MdastNode::Paragraph {
            children: p.children.iter().map(inline_to_mdast).collect(),
            position: pos(p.span),
        },
        Block::Heading(h) => MdastNode::Heading {
            depth: h.level,
            children: h.children.iter().map(inline_to_mdast).collect(),
            position: pos(h.span),
        },
        Block::FencedCode(fc) => MdastNode::Code {
            lang: fc.info.split_whitespace().next().map(str::to_string),
            value: fc.body.clone(),
            position: pos(fc.span),
        },
        Block::IndentedCode(ic) => MdastNode::Code { lang: None, value: ic.body.clone(), position: pos(ic.span) },
        Block::ThematicBreak(t) => MdastNode::ThematicBreak { position: pos(t.span) },
        Block::BlockQuote(bq) => MdastNode::Blockquote {
            children: bq.children.iter().filter_map(block_to_mdast).collect(),
            position: pos(bq.span),
        },
        Block::List(list) => MdastNode::List {
            ordered: list.ordered,
            start: list.ordered.then_some(list.start),
            spread: !list.tight,
            children: list
                .items
                .iter()
                .map(|item| MdastNode::ListItem {
                    checked: match item.task {
                        TaskState::None => None,
                        TaskState::Unchecked => Some(false),
                        TaskState::Checked => Some(true),
                    },
                    children: item.children.iter().filter_map(block_to_mdast).collect(),
                    position: pos(item.span),
                })
                .collect(),
            position: pos(list.span),
        },
        Block::HtmlBlock(hb) => MdastNode::Html { value: hb.content.clone(), position: pos(hb.span) },
        Block::LinkRefDef(def) => MdastNode::Definition {
            identifier: def.label.clone(),
            url: def.destination.clone(),
            title: def.title.clone(),
            position: pos(def.span),
        },
        Block::Table(table) => {
            let align = |a: Alignment| match a {
                Alignment::None => None,
                Alignment::Left => Some("left"),
                Alignment::Center => Some("center"),
                Alignment::Right => Some("right"),
            };
            let header_row = MdastNode::TableRow {
                children: table
                    .header
                    .iter()
                    .map(|cell| MdastNode::TableCell {
                        children: cell.iter().map(inline_to_mdast).collect(),
                        position: cell_position(cell),
                    })
                    .collect(),
                position: pos(table.span),
            };
            let body_rows = table.rows.iter().map(|row| MdastNode::TableRow {
                children: row
                    .iter()
                    .map(|cell| MdastNode::TableCell {
                        children: cell.iter().map(inline_to_mdast).collect(),
                        position: cell_position(cell),
                    })
                    .collect(),
                position: pos(table.span),
            });
            let mut children = vec![header_row];
            children.extend(body_rows);
            MdastNode::Table { align: table.alignments.iter().copied().map(align).collect(), children, position: pos(table.span) }
        }
        Block::FootnoteDefinition(fd) => MdastNode::FootnoteDefinition {
            identifier: fd.label.clone(),
            children: fd.children.iter().filter_map(block_to_mdast).collect(),
            position: pos(fd.span),
        },
        Block::BlankLines(_) => return None,
    })
}

fn cell_position(cell: &[Inline]) -> Position {
    match (cell.first(), cell.last()) {
        (Some(first), Some(last)) => Position { start: first.span().start, end: last.span().end },
        _ => Position { start: 0, end: 0 },
    }
}

fn inline_to_mdast(inline: &Inline) -> MdastNode {
    match inline {
        Inline::Text(t) => MdastNode::Text { value: t.content.clone(), position: pos(t.span) },
        Inline::SoftBreak(s) => MdastNode::Text { value: "\n".to_string(), position: pos(*s) },
        Inline::HardBreak(s) => MdastNode::Break { position: pos(*s) },
        Inline::Code(c) => MdastNode::InlineCode { value: c.content.clone(), position: pos(c.span) },
        Inline::Emphasis(e) => MdastNode::Emphasis { children: e.children.iter().map(inline_to_mdast).collect(), position: pos(e.span) },
        Inline::Strong(s) => MdastNode::Strong { children: s.children.iter().map(inline_to_mdast).collect(), position: pos(s.span) },
        Inline::Strikethrough(s) => MdastNode::Delete { children: s.children.iter().map(inline_to_mdast).collect(), position: pos(s.span) },
        Inline::Link(l) => MdastNode::Link {
            url: l.destination.clone(),
            title: l.title.clone(),
            children: l.children.iter().map(inline_to_mdast).collect(),
            position: pos(l.span),
        },
        Inline::Image(i) => MdastNode::Image { url: i.destination.clone(), title: i.title.clone(), alt: i.alt.clone(), position: pos(i.span) },
        Inline::RefLink(r) => MdastNode::LinkReference {
            identifier: r.label.clone(),
            children: r.children.iter().map(inline_to_mdast).collect(),
            position: pos(r.span),
        },
        Inline::RefImage(r) => MdastNode::ImageReference { identifier: r.label.clone(), alt: r.alt.clone(), position: pos(r.span) },
        Inline::Autolink(a) => MdastNode::Link { url: a.url.clone(), title: None, children: vec![MdastNode::Text { value: a.url.clone(), position: pos(a.span) }], position: pos(a.span) },
        Inline::HtmlInline(h) => MdastNode::Html { value: h.content.clone(), position: pos(h.span) },
        Inline::FootnoteReference(f) => MdastNode::FootnoteReference { identifier: f.label.clone(), position: pos(f.span) },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::block_parser::parse;

    #[test]
    fn heading_projects_with_depth_and_position() {
        let doc = parse("# Hello\n");
        let mdast = to_mdast(&doc);
        match mdast {
            MdastNode::Root { children, .. } => {
                assert_eq!(children.len(), 1);
                match &children[0] {
                    MdastNode::Heading { depth, position, .. } => {
                        assert_eq!(*depth, 1);
                        assert_eq!(position.start, 0);
                    }
                    other => panic!("expected Heading, got {other:?}"),
                }
            }
            other => panic!("expected Root, got {other:?}"),
        }
    }

    #[test]
    fn blank_lines_are_dropped_from_external_ast() {
        let doc = parse("# Hello\n\n\n\nWorld");
        let mdast = to_mdast(&doc);
        match mdast {
            MdastNode::Root { children, .. } => {
                assert!(!children.iter().any(|c| matches!(c, MdastNode::Root { .. })));
                assert_eq!(children.len(), 2);
            }
            _ => unreachable!(),
        }
    }

    #[test]
    fn table_projects_as_rows_and_cells() {
        let doc = parse("| a | b |\n|---|---|\n| 1 | 2 |\n");
        let mdast = to_mdast(&doc);
        let MdastNode::Root { children, .. } = mdast else { unreachable!() };
        match &children[0] {
            MdastNode::Table { children, .. } => assert_eq!(children.len(), 2),
            other => panic!("expected Table, got {other:?}"),
        }
    }
}
