//! Small, stateless helpers shared by every step of the block builder.

/// Splits a line into its leading-space count and the remainder after it.
/// Tabs are expanded to the next multiple-of-4 stop, matching CommonMark's
/// tab-expansion rule closely enough for typical documents (tabs that don't
/// land on a 4-column boundary inside a line are a known gap).
pub fn leading_indent(line: &str) -> (usize, &str) {
    let mut indent = 0usize;
    let mut byte_offset = 0usize;
    for c in line.chars() {
        match c {
            ' ' => {
                indent += 1;
                byte_offset += 1;
            }
            '\t' => {
                indent += 4 - (indent % 4);
                byte_offset += 1;
            }
            _ => break,
        }
    }
    (indent, &line[byte_offset..])
}

pub fn is_blank(line: &str) -> bool {
    line.trim().is_empty()
}

/// Whether `line` would, if encountered while a paragraph is open, start a
/// new block and thus interrupt (rather than continue) that paragraph.
/// Indented code and link reference definitions deliberately cannot
/// interrupt a paragraph per CommonMark.
pub fn could_interrupt_paragraph(line: &str) -> bool {
    use super::kinds::{
        AtxHeading, BlockQuote, CodeFence, HtmlBlockOpen, ListItemMarker, ThematicBreak,
    };

    let (indent, rest) = leading_indent(line);
    if indent > 3 {
        return false;
    }
    if is_blank(rest) {
        return true;
    }
    if ThematicBreak::detect(rest).is_some() {
        return true;
    }
    if AtxHeading::detect(rest).is_some() {
        return true;
    }
    if CodeFence::detect_open(rest).is_some() {
        return true;
    }
    if BlockQuote::strip_prefix(rest).is_some() {
        return true;
    }
    if HtmlBlockOpen::detect(rest) {
        return true;
    }
    if let Some((marker, _)) = ListItemMarker::detect(rest) {
        // A bullet list only interrupts a paragraph if not ambiguous with
        // the paragraph continuing as plain text starting with a digit or
        // dash; CommonMark additionally requires ordered lists starting
        // anywhere other than 1 not to interrupt. We follow that rule.
        if marker.ordered && marker.start != 1 {
            return false;
        }
        return true;
    }
    false
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn counts_spaces() {
        assert_eq!(leading_indent("   x"), (3, "x"));
    }

    #[test]
    fn expands_tabs() {
        assert_eq!(leading_indent("\tx"), (4, "x"));
    }

    #[test]
    fn blank_detection() {
        assert!(is_blank("   "));
        assert!(!is_blank("  x"));
    }

    #[test]
    fn heading_interrupts_paragraph() {
        assert!(could_interrupt_paragraph("# heading"));
    }

    #[test]
    fn plain_text_does_not_interrupt() {
        assert!(!could_interrupt_paragraph("more text"));
    }

    #[test]
    fn ordered_list_not_starting_at_one_does_not_interrupt() {
        assert!(!could_interrupt_paragraph("5. item"));
        assert!(could_interrupt_paragraph("1. item"));
    }
}
