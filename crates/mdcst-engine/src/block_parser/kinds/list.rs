/// A recognized list item marker: bullet or ordered.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ListMarker {
    pub ordered: bool,
    pub start: u64,
    pub delimiter: char,
    /// Byte length of the marker text itself (e.g. `"-"` is 1, `"12."` is 3).
    pub marker_len: usize,
}

/// List item marker knowledge: bullets `-`, `+`, `*` and ordered markers
/// `N.`/`N)`.
pub struct ListItemMarker;

impl ListItemMarker {
    pub const BULLETS: [char; 3] = ['-', '+', '*'];

    /// `rest` is the line content with leading indentation (up to 3 spaces)
    /// already stripped. Returns the marker plus the byte offset where item
    /// content begins (after the marker and its required following
    /// whitespace, capped the CommonMark way: 1 space, or up to 4 if that's
    /// all that's on the line).
    pub fn detect(rest: &str) -> Option<(ListMarker, usize)> {
        let bytes = rest.as_bytes();
        if bytes.is_empty() {
            return None;
        }
        if let Some(&b) = bytes.first()
            && Self::BULLETS.contains(&(b as char))
        {
            let marker_len = 1;
            let after = &rest[marker_len..];
            if !after.is_empty() && !after.starts_with([' ', '\t']) {
                return None;
            }
            let content_offset = marker_len + Self::count_marker_spacing(after);
            return Some((
                ListMarker {
                    ordered: false,
                    start: 0,
                    delimiter: b as char,
                    marker_len,
                },
                content_offset,
            ));
        }

        let digits: String = rest.chars().take_while(|c| c.is_ascii_digit()).collect();
        if digits.is_empty() || digits.len() > 9 {
            return None;
        }
        let after_digits = &rest[digits.len()..];
        let delim = after_digits.chars().next()?;
        if delim != '.' && delim != ')' {
            return None;
        }
        let marker_len = digits.len() + 1;
        let after = &rest[marker_len..];
        if !after.is_empty() && !after.starts_with([' ', '\t']) {
            return None;
        }
        let start: u64 = digits.parse().ok()?;
        let content_offset = marker_len + Self::count_marker_spacing(after);
        Some((
            ListMarker {
                ordered: true,
                start,
                delimiter: delim,
                marker_len,
            },
            content_offset,
        ))
    }

    /// Whitespace immediately following a marker counts toward the content
    /// column, capped at 4 columns (a 5th+ space becomes part of an
    /// indented-code-like body instead of the marker indent).
    fn count_marker_spacing(after: &str) -> usize {
        if after.is_empty() {
            return 0;
        }
        let spaces = after.chars().take_while(|c| *c == ' ').count();
        if spaces == 0 {
            return 0;
        }
        spaces.min(4).max(1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bullet_hyphen() {
        let (m, off) = ListItemMarker::detect("- item").unwrap();
        assert!(!m.ordered);
        assert_eq!(m.delimiter, '-');
        assert_eq!(off, 2);
    }

    #[test]
    fn ordered_dot() {
        let (m, off) = ListItemMarker::detect("12. item").unwrap();
        assert!(m.ordered);
        assert_eq!(m.start, 12);
        assert_eq!(off, 4);
    }

    #[test]
    fn ordered_paren() {
        let (m, _) = ListItemMarker::detect("1) item").unwrap();
        assert_eq!(m.delimiter, ')');
    }

    #[test]
    fn rejects_too_many_digits() {
        assert_eq!(ListItemMarker::detect("1234567890. item"), None);
    }

    #[test]
    fn rejects_text() {
        assert_eq!(ListItemMarker::detect("hello"), None);
    }

    #[test]
    fn empty_bullet_item() {
        let (_, off) = ListItemMarker::detect("-").unwrap();
        assert_eq!(off, 1);
    }
}
