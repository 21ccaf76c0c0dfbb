//! Incremental re-parsing: reparse only the block-granularity "damage
//! window" touched by an edit, splice it back into the previous tree, and
//! fall back to a full reparse — logged at `warn`, the way
//! `markdown-neuraxis-dioxus` logs its own startup fallback branches —
//! whenever the spliced result fails the span-coverage invariant.

use crate::cst::{Block, Document};
use crate::error::EditError;
use crate::span::Span;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EditInfo {
    pub start: usize,
    pub old_end: usize,
    pub new_end: usize,
}

pub fn edit_insert(position: usize, length: usize) -> EditInfo {
    EditInfo { start: position, old_end: position, new_end: position + length }
}

pub fn edit_delete(start: usize, end: usize) -> EditInfo {
    EditInfo { start, old_end: end, new_end: start }
}

pub fn edit_replace(start: usize, old_end: usize, new_length: usize) -> EditInfo {
    EditInfo { start, old_end, new_end: start + new_length }
}

/// Infallible: any failure to reconcile the edit with the previous tree
/// falls back to a full reparse of `new_source`, logged at `warn`.
pub fn parse_incremental(prev: &Document, old_source: &str, new_source: &str, edit: EditInfo) -> Document {
    match try_incremental(prev, old_source, new_source, &edit) {
        Ok(doc) => doc,
        Err(err) => {
            log::warn!("incremental reparse falling back to full reparse: {err} (edit={edit:?})");
            crate::block_parser::parse(new_source)
        }
    }
}

fn try_incremental(prev: &Document, old_source: &str, new_source: &str, edit: &EditInfo) -> Result<Document, EditError> {
    if edit.start > edit.old_end {
        return Err(EditError::StartPastOldEnd { start: edit.start, old_end: edit.old_end });
    }
    if edit.old_end > old_source.len() {
        return Err(EditError::OldEndPastSource { old_end: edit.old_end, old_len: old_source.len() });
    }
    if edit.new_end > new_source.len() {
        return Err(EditError::NewEndPastSource { new_end: edit.new_end, new_len: new_source.len() });
    }
    if prev.blocks.is_empty() {
        return Ok(crate::block_parser::parse(new_source));
    }

    let delta = edit.new_end as isize - edit.old_end as isize;

    let mut i = prev
        .blocks
        .iter()
        .position(|b| b.span().end > edit.start)
        .unwrap_or(prev.blocks.len() - 1);
    let mut j = prev
        .blocks
        .iter()
        .rposition(|b| b.span().start < edit.old_end)
        .unwrap_or(i);
    if j < i {
        j = i;
    }
    // Expand by one block on each side to absorb edits that touch a block
    // boundary or a blank-line run (merges/splits).
    if i > 0 {
        i -= 1;
    }
    if j + 1 < prev.blocks.len() {
        j += 1;
    }

    let window_start = prev.blocks[i].span().start;
    let window_old_end = prev.blocks[j].span().end;
    let window_new_end_signed = window_old_end as isize + delta;
    if window_new_end_signed < window_start as isize {
        return Err(EditError::CoverageViolation);
    }
    let window_new_end = window_new_end_signed as usize;
    if window_new_end > new_source.len() {
        return Err(EditError::NewEndPastSource { new_end: window_new_end, new_len: new_source.len() });
    }

    let window_text = &new_source[window_start..window_new_end];
    let mut new_blocks = crate::block_parser::parse(window_text).blocks;
    for block in &mut new_blocks {
        block.shift(window_start as isize);
    }

    let mut spliced: Vec<Block> = Vec::with_capacity(prev.blocks.len());
    spliced.extend(prev.blocks[..i].iter().cloned());
    spliced.extend(new_blocks);
    for block in &prev.blocks[j + 1..] {
        let mut shifted = block.clone();
        shifted.shift(delta);
        spliced.push(shifted);
    }

    let mut offset = 0usize;
    for block in &spliced {
        let span = block.span();
        if span.start != offset {
            return Err(EditError::CoverageViolation);
        }
        offset = span.end;
    }
    if offset != new_source.len() {
        return Err(EditError::CoverageViolation);
    }

    Ok(Document { span: Span::new(0, new_source.len()), blocks: spliced })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::block_parser::parse;

    #[test]
    fn insert_into_heading_stays_one_heading_block() {
        let old_source = "# Hello";
        let prev = parse(old_source);
        let edit = edit_insert(7, 6);
        let new_source = "# Hello World";
        let doc = parse_incremental(&prev, old_source, new_source, edit);
        assert_eq!(doc.blocks.len(), 1);
        assert_eq!(doc.blocks[0].span(), Span::new(0, 13));
    }

    #[test]
    fn edit_in_middle_paragraph_leaves_outer_blocks_untouched() {
        let old_source = "para one\n\npara two\n\npara three\n";
        let prev = parse(old_source);
        let edit = edit_replace(old_source.find("two").unwrap(), old_source.find("two").unwrap() + 3, 4);
        let new_source = "para one\n\npara XXXX\n\npara three\n";
        let doc = parse_incremental(&prev, old_source, new_source, edit);
        let expected = parse(new_source);
        assert_eq!(doc.blocks.len(), expected.blocks.len());
        assert_eq!(doc.blocks[0].span(), expected.blocks[0].span());
        assert_eq!(doc.blocks.last().unwrap().span(), expected.blocks.last().unwrap().span());
    }

    #[test]
    fn edit_info_constructors() {
        assert_eq!(edit_insert(5, 3), EditInfo { start: 5, old_end: 5, new_end: 8 });
        assert_eq!(edit_delete(2, 9), EditInfo { start: 2, old_end: 9, new_end: 2 });
        assert_eq!(edit_replace(2, 9, 4), EditInfo { start: 2, old_end: 9, new_end: 6 });
    }

    #[test]
    fn malformed_edit_falls_back_without_panicking() {
        let old_source = "hello\n";
        let prev = parse(old_source);
        let bogus = EditInfo { start: 3, old_end: 1, new_end: 2 };
        let new_source = "hello\n";
        let doc = parse_incremental(&prev, old_source, new_source, bogus);
        assert_eq!(doc, parse(new_source));
    }

    #[test]
    fn detects_start_past_old_end() {
        let err = try_incremental(&parse("x"), "x", "x", &EditInfo { start: 5, old_end: 1, new_end: 1 }).unwrap_err();
        assert_eq!(err, EditError::StartPastOldEnd { start: 5, old_end: 1 });
    }
}
