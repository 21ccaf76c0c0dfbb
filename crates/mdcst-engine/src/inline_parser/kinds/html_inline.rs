/// Inline raw HTML recognition: `<tag attrs>`, `</tag>`, `<!-- comment -->`,
/// self-closing `<br/>`. Simplified like
/// `crate::block_parser::kinds::html_block`: any `<` that opens a
/// tag-shaped, comment, or processing-instruction construct and closes with
/// a matching `>` on the same line is accepted, rather than implementing
/// CommonMark's full enumerated inline-HTML grammar.
pub struct HtmlInline;

impl HtmlInline {
    /// `rest` starts right after `<`. Returns the byte length of the
    /// remainder (up to and including the closing `>`) if this looks like a
    /// single HTML inline construct.
    pub fn detect(rest: &str) -> Option<usize> {
        if let Some(stripped) = rest.strip_prefix("!--") {
            return stripped.find("-->").map(|end| 3 + end + 3);
        }
        if let Some(stripped) = rest.strip_prefix('?') {
            return stripped.find('?').and_then(|end| {
                stripped[end + 1..]
                    .starts_with('>')
                    .then_some(1 + end + 1 + 1)
            });
        }
        let body = rest.strip_prefix('/').unwrap_or(rest);
        let mut chars = body.char_indices();
        let (_, first) = chars.next()?;
        if !first.is_ascii_alphabetic() {
            return None;
        }
        let end = rest.find('>')?;
        let tag = &rest[..end];
        if tag.contains('<') {
            return None;
        }
        Some(end + 1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn detects_simple_tag() {
        assert_eq!(HtmlInline::detect("br/> rest"), Some(4));
    }

    #[test]
    fn detects_closing_tag() {
        assert_eq!(HtmlInline::detect("/span> rest"), Some(6));
    }

    #[test]
    fn detects_comment() {
        assert_eq!(HtmlInline::detect("!-- hi --> rest"), Some(10));
    }

    #[test]
    fn rejects_unclosed() {
        assert_eq!(HtmlInline::detect("span no close"), None);
    }
}
