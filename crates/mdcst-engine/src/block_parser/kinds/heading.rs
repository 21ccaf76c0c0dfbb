/// ATX heading (`# Title`) recognition.
pub struct AtxHeading;

impl AtxHeading {
    pub const MARKER: char = '#';

    /// Returns `(level, inner_text, byte_offset_of_inner_text_in_rest)`,
    /// where `inner_text` is the heading content with a required following
    /// space and any closing `#` run stripped. The offset lets callers stamp
    /// an absolute span on the content rather than just the owned string.
    /// Returns `None` if `rest` is not a valid ATX opener.
    pub fn detect(rest: &str) -> Option<(u8, String, usize)> {
        let hashes = rest.chars().take_while(|&c| c == Self::MARKER).count();
        if !(1..=6).contains(&hashes) {
            return None;
        }
        let after = &rest[hashes..];
        if !after.is_empty() && !after.starts_with(' ') && !after.starts_with('\t') {
            return None;
        }
        let trimmed_start = after.trim_start_matches([' ', '\t']);
        let leading_ws = after.len() - trimmed_start.len();
        let content = trimmed_start.trim_end();
        // Strip an optional closing sequence of hashes, itself preceded by a
        // space (or the whole line), e.g. "## Title ##" -> "Title".
        let hash_run = content.chars().rev().take_while(|&c| c == Self::MARKER).count();
        let final_content = if hash_run > 0 {
            let before = &content[..content.len() - hash_run];
            if before.is_empty() || before.ends_with([' ', '\t']) {
                before.trim_end()
            } else {
                content
            }
        } else {
            content
        };
        let content_offset = hashes + leading_ws;
        Some((hashes as u8, final_content.to_string(), content_offset))
    }
}

/// Setext heading underline (`===` or `---` immediately under a paragraph).
pub struct SetextUnderline;

impl SetextUnderline {
    pub fn detect(rest: &str) -> Option<u8> {
        let trimmed = rest.trim_end();
        if trimmed.is_empty() {
            return None;
        }
        if trimmed.chars().all(|c| c == '=') {
            return Some(1);
        }
        if trimmed.chars().all(|c| c == '-') {
            return Some(2);
        }
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn detects_level_one() {
        assert_eq!(
            AtxHeading::detect("# Hello"),
            Some((1, "Hello".into(), 2))
        );
    }

    #[test]
    fn detects_level_three_with_closing_run() {
        assert_eq!(
            AtxHeading::detect("### Title ###"),
            Some((3, "Title".into(), 4))
        );
    }

    #[test]
    fn empty_heading() {
        assert_eq!(AtxHeading::detect("##"), Some((2, String::new(), 2)));
    }

    #[test]
    fn rejects_too_many_hashes() {
        assert_eq!(AtxHeading::detect("####### x"), None);
    }

    #[test]
    fn rejects_no_space_after_hash() {
        assert_eq!(AtxHeading::detect("#hello"), None);
    }

    #[test]
    fn setext_level_one() {
        assert_eq!(SetextUnderline::detect("==="), Some(1));
    }

    #[test]
    fn setext_level_two() {
        assert_eq!(SetextUnderline::detect("---"), Some(2));
    }

    #[test]
    fn setext_rejects_mixed() {
        assert_eq!(SetextUnderline::detect("=-="), None);
    }
}
