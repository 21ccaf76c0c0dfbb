/// HTML block opener recognition.
///
/// Simplified relative to CommonMark's seven numbered HTML-block start
/// conditions: any line beginning with `<` followed by a tag name, a
/// closing tag, a comment, or a processing instruction opens an HTML block
/// that runs until the next blank line. The fine-grained per-type closing
/// conditions (e.g. type 6/7 interacting with paragraph interruption) are a
/// known gap.
pub struct HtmlBlockOpen;

impl HtmlBlockOpen {
    pub fn detect(rest: &str) -> bool {
        let Some(after_lt) = rest.strip_prefix('<') else {
            return false;
        };
        if after_lt.starts_with('!') || after_lt.starts_with('?') {
            return true;
        }
        let after_slash = after_lt.strip_prefix('/').unwrap_or(after_lt);
        after_slash
            .chars()
            .next()
            .is_some_and(|c| c.is_ascii_alphabetic())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn detects_open_tag() {
        assert!(HtmlBlockOpen::detect("<div>"));
    }

    #[test]
    fn detects_closing_tag() {
        assert!(HtmlBlockOpen::detect("</div>"));
    }

    #[test]
    fn detects_comment() {
        assert!(HtmlBlockOpen::detect("<!-- comment -->"));
    }

    #[test]
    fn rejects_plain_text() {
        assert!(!HtmlBlockOpen::detect("not html"));
    }

    #[test]
    fn rejects_bare_angle_bracket() {
        assert!(!HtmlBlockOpen::detect("< 3"));
    }
}
