//! HTML rendering: a pure fold over the CST into a string builder.
//!
//! Reference resolution runs as a first pass over the whole document
//! (collecting every `LinkRefDef` label, case-folded and whitespace
//! normalized) so `RefLink`/`RefImage` nodes can look themselves up during
//! the fold; unresolved references fall back to their original source text
//! rather than silently dropping content.

use std::collections::HashMap;
use std::fmt::Write as _;

use crate::cst::{
    Alignment, Block, CodeSpan, Document, Emphasis, FootnoteReference, HtmlInline as HtmlInlineNode, Image, Inline, Link,
    RefImage, RefLink, Strikethrough, Strong, TaskState, Text,
};

/// The fenced-code extension point: `(info_string, code) -> Some(html)` to
/// override the default `<pre><code>` rendering (e.g. syntax highlighting),
/// or `None` to fall through to the default.
pub type FencedCodeHook<'a> = dyn Fn(&str, &str) -> Option<String> + 'a;

#[derive(Default)]
pub struct HtmlOptions<'a> {
    pub fenced_code_hook: Option<&'a FencedCodeHook<'a>>,
}

pub fn render_html(document: &Document, source: &str) -> String {
    render_html_with(document, source, &HtmlOptions::default())
}

pub fn render_html_with(document: &Document, source: &str, opts: &HtmlOptions) -> String {
    let refs = collect_link_refs(document);
    let mut out = String::new();
    for block in &document.blocks {
        render_block(block, source, &refs, opts, &mut out);
    }
    out
}

struct LinkRef {
    destination: String,
    title: Option<String>,
}

fn normalize_label(label: &str) -> String {
    label.split_whitespace().collect::<Vec<_>>().join(" ").to_lowercase()
}

fn collect_link_refs(document: &Document) -> HashMap<String, LinkRef> {
    let mut refs = HashMap::new();
    fn walk(blocks: &[Block], refs: &mut HashMap<String, LinkRef>) {
        for block in blocks {
            match block {
                Block::LinkRefDef(def) => {
                    refs.entry(normalize_label(&def.label)).or_insert(LinkRef {
                        destination: def.destination.clone(),
                        title: def.title.clone(),
                    });
                }
                Block::BlockQuote(bq) => walk(&bq.children, refs),
                Block::List(list) => {
                    for item in &list.items {
                        walk(&item.children, refs);
                    }
                }
                Block::FootnoteDefinition(fd) => walk(&fd.children, refs),
                _ => {}
            }
        }
    }
    walk(&document.blocks, &mut refs);
    refs
}

fn escape_text(s: &str) -> String {
    let escaped = html_escape::encode_text(s);
    escaped.replace('"', "&quot;")
}

fn escape_attr(s: &str) -> String {
    let escaped = html_escape::encode_double_quoted_attribute(s);
    escaped.replace('<', "&lt;").replace('>', "&gt;")
}

fn render_block(block: &Block, source: &str, refs: &HashMap<String, LinkRef>, opts: &HtmlOptions, out: &mut String) {
    match block {
        Block::Paragraph(p) => {
            out.push_str("<p>");
            render_inlines(&p.children, source, refs, out);
            out.push_str("</p>\n");
        }
        Block::Heading(h) => {
            let _ = write!(out, "<h{}>", h.level);
            render_inlines(&h.children, source, refs, out);
            let _ = write!(out, "</h{}>\n", h.level);
        }
        Block::FencedCode(fc) => {
            let lang = fc.info.split_whitespace().next().unwrap_or("");
            if let Some(hook) = opts.fenced_code_hook {
                if let Some(html) = hook(&fc.info, &fc.body) {
                    out.push_str(&html);
                    return;
                }
            }
            if lang.is_empty() {
                out.push_str("<pre><code>");
            } else {
                let _ = write!(out, "<pre><code class=\"language-{}\">", escape_attr(lang));
            }
            out.push_str(&escape_text(&fc.body));
            out.push_str("</code></pre>\n");
        }
        Block::IndentedCode(ic) => {
            out.push_str("<pre><code>");
            out.push_str(&escape_text(&ic.body));
            out.push_str("</code></pre>\n");
        }
        Block::ThematicBreak(_) => out.push_str("<hr />\n"),
        Block::BlockQuote(bq) => {
            out.push_str("<blockquote>\n");
            for child in &bq.children {
                render_block(child, source, refs, opts, out);
            }
            out.push_str("</blockquote>\n");
        }
        Block::List(list) => {
            let tag = if list.ordered { "ol" } else { "ul" };
            if list.ordered && list.start != 1 {
                let _ = write!(out, "<{tag} start=\"{}\">\n", list.start);
            } else {
                let _ = write!(out, "<{tag}>\n");
            }
            for item in &list.items {
                out.push_str("<li>");
                match item.task {
                    TaskState::Unchecked => out.push_str("<input type=\"checkbox\" disabled=\"\" /> "),
                    TaskState::Checked => out.push_str("<input type=\"checkbox\" checked=\"\" disabled=\"\" /> "),
                    TaskState::None => {}
                }
                if list.tight {
                    render_tight_item(&item.children, source, refs, opts, out);
                } else {
                    for child in &item.children {
                        render_block(child, source, refs, opts, out);
                    }
                }
                out.push_str("</li>\n");
            }
            let _ = write!(out, "</{tag}>\n");
        }
        Block::HtmlBlock(hb) => {
            out.push_str(&hb.content);
        }
        Block::LinkRefDef(_) => {}
        Block::Table(table) => render_table(table, source, refs, out),
        Block::FootnoteDefinition(fd) => {
            let _ = write!(out, "<div class=\"footnote\" id=\"fn-{}\">\n", escape_attr(&normalize_label(&fd.label)));
            for child in &fd.children {
                render_block(child, source, refs, opts, out);
            }
            out.push_str("</div>\n");
        }
        Block::BlankLines(_) => {}
    }
}

/// Tight list items render their single paragraph's inline content without
/// the wrapping `<p>`, per the CommonMark HTML rendering convention.
fn render_tight_item(children: &[Block], source: &str, refs: &HashMap<String, LinkRef>, opts: &HtmlOptions, out: &mut String) {
    for child in children {
        if let Block::Paragraph(p) = child {
            render_inlines(&p.children, source, refs, out);
        } else {
            render_block(child, source, refs, opts, out);
        }
    }
}

fn render_table(table: &crate::cst::Table, source: &str, refs: &HashMap<String, LinkRef>, out: &mut String) {
    out.push_str("<table>\n<thead>\n<tr>\n");
    for (i, cell) in table.header.iter().enumerate() {
        let align = table.alignments.get(i).copied().unwrap_or(Alignment::None);
        render_table_cell("th", cell, align, source, refs, out);
    }
    out.push_str("</tr>\n</thead>\n");
    if table.rows.is_empty() {
        out.push_str("<tbody>\n</tbody>\n</table>\n");
        return;
    }
    out.push_str("<tbody>\n");
    for row in &table.rows {
        out.push_str("<tr>\n");
        for (i, cell) in row.iter().enumerate() {
            let align = table.alignments.get(i).copied().unwrap_or(Alignment::None);
            render_table_cell("td", cell, align, source, refs, out);
        }
        out.push_str("</tr>\n");
    }
    out.push_str("</tbody>\n</table>\n");
}

fn render_table_cell(tag: &str, cell: &[Inline], align: Alignment, source: &str, refs: &HashMap<String, LinkRef>, out: &mut String) {
    match align {
        Alignment::None => {
            let _ = write!(out, "<{tag}>");
        }
        Alignment::Left => {
            let _ = write!(out, "<{tag} align=\"left\">");
        }
        Alignment::Center => {
            let _ = write!(out, "<{tag} align=\"center\">");
        }
        Alignment::Right => {
            let _ = write!(out, "<{tag} align=\"right\">");
        }
    }
    render_inlines(cell, source, refs, out);
    let _ = write!(out, "</{tag}>\n");
}

fn render_inlines(inlines: &[Inline], source: &str, refs: &HashMap<String, LinkRef>, out: &mut String) {
    for inline in inlines {
        render_inline(inline, source, refs, out);
    }
}

fn render_inline(inline: &Inline, source: &str, refs: &HashMap<String, LinkRef>, out: &mut String) {
    match inline {
        Inline::Text(Text { content, .. }) => out.push_str(&escape_text(content)),
        Inline::SoftBreak(_) => out.push('\n'),
        Inline::HardBreak(_) => out.push_str("<br />\n"),
        Inline::Code(CodeSpan { content, .. }) => {
            out.push_str("<code>");
            out.push_str(&escape_text(content));
            out.push_str("</code>");
        }
        Inline::Emphasis(Emphasis { children, .. }) => {
            out.push_str("<em>");
            render_inlines(children, source, refs, out);
            out.push_str("</em>");
        }
        Inline::Strong(Strong { children, .. }) => {
            out.push_str("<strong>");
            render_inlines(children, source, refs, out);
            out.push_str("</strong>");
        }
        Inline::Strikethrough(Strikethrough { children, .. }) => {
            out.push_str("<del>");
            render_inlines(children, source, refs, out);
            out.push_str("</del>");
        }
        Inline::Link(Link { children, destination, title, .. }) => {
            render_anchor_open(destination, title.as_deref(), out);
            render_inlines(children, source, refs, out);
            out.push_str("</a>");
        }
        Inline::Image(Image { alt, destination, title, .. }) => {
            render_img(alt, destination, title.as_deref(), out);
        }
        Inline::RefLink(RefLink { span, children, label }) => {
            if let Some(r) = refs.get(&normalize_label(label)) {
                render_anchor_open(&r.destination, r.title.as_deref(), out);
                render_inlines(children, source, refs, out);
                out.push_str("</a>");
            } else {
                out.push_str(&escape_text(&source[span.start..span.end]));
            }
        }
        Inline::RefImage(RefImage { span, alt, label }) => {
            if let Some(r) = refs.get(&normalize_label(label)) {
                render_img(alt, &r.destination, r.title.as_deref(), out);
            } else {
                out.push_str(&escape_text(&source[span.start..span.end]));
            }
        }
        Inline::Autolink(a) => {
            let href = if a.is_email {
                format!("mailto:{}", a.url)
            } else {
                a.url.clone()
            };
            let _ = write!(out, "<a href=\"{}\">", escape_attr(&href));
            out.push_str(&escape_text(&a.url));
            out.push_str("</a>");
        }
        Inline::HtmlInline(HtmlInlineNode { content, .. }) => out.push_str(content),
        Inline::FootnoteReference(FootnoteReference { label, .. }) => {
            let id = escape_attr(&normalize_label(label));
            let _ = write!(out, "<sup><a href=\"#fn-{id}\">{}</a></sup>", escape_text(label));
        }
    }
}

fn render_anchor_open(destination: &str, title: Option<&str>, out: &mut String) {
    let _ = write!(out, "<a href=\"{}\"", escape_attr(destination));
    if let Some(title) = title {
        let _ = write!(out, " title=\"{}\"", escape_attr(title));
    }
    out.push('>');
}

fn render_img(alt: &str, destination: &str, title: Option<&str>, out: &mut String) {
    let _ = write!(out, "<img src=\"{}\" alt=\"{}\"", escape_attr(destination), escape_attr(alt));
    if let Some(title) = title {
        let _ = write!(out, " title=\"{}\"", escape_attr(title));
    }
    out.push_str(" />");
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::block_parser::parse;

    fn html_of(source: &str) -> String {
        let doc = parse(source);
        render_html(&doc, source)
    }

    #[test]
    fn heading_renders() {
        assert_eq!(html_of("# Hello\n"), "<h1>Hello</h1>\n");
    }

    #[test]
    fn strong_in_paragraph_renders() {
        assert_eq!(html_of("**Bold** text"), "<p><strong>Bold</strong> text</p>\n");
    }

    #[test]
    fn table_renders_with_alignment() {
        let html = html_of("| a | b |\n|---|---|\n| 1 | 2 |\n");
        assert!(html.contains("<table>"));
        assert!(html.contains("<th>a</th>"));
        assert!(html.contains("<td>1</td>"));
    }

    #[test]
    fn unresolved_reference_falls_back_to_literal_text() {
        let html = html_of("[undefined]");
        assert!(html.contains("[undefined]"));
        assert!(!html.contains("<a"));
    }

    #[test]
    fn resolved_reference_renders_anchor() {
        let html = html_of("[foo]\n\n[foo]: /url \"t\"\n");
        assert!(html.contains("<a href=\"/url\" title=\"t\">foo</a>"));
    }

    #[test]
    fn task_list_item_renders_checkbox() {
        let html = html_of("- [x] done\n- [ ] todo\n");
        assert!(html.contains("checked=\"\" disabled=\"\""));
        assert!(html.contains("<input type=\"checkbox\" disabled=\"\" />"));
    }

    #[test]
    fn code_block_escapes_content() {
        let html = html_of("```\n<script>\n```\n");
        assert!(html.contains("&lt;script&gt;"));
    }
}
