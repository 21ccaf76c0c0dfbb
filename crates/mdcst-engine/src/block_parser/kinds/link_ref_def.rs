/// Link reference definition (`[label]: /url "title"`) recognition.
///
/// Simplified to the common single-line form; multi-line destination/title
/// continuations (CommonMark 4.7's full grammar) are a known gap.
pub struct LinkRefDef;

impl LinkRefDef {
    pub fn detect(rest: &str) -> Option<(String, String, Option<String>)> {
        let line = rest.trim_start();
        let line = line.strip_prefix('[')?;
        let close = line.find(']')?;
        let label = line[..close].trim().to_string();
        if label.is_empty() {
            return None;
        }
        let after_label = &line[close + 1..];
        let after_label = after_label.strip_prefix(':')?;
        let after_label = after_label.trim_start();
        if after_label.is_empty() {
            return None;
        }

        let (dest, rest_after_dest) = if let Some(stripped) = after_label.strip_prefix('<') {
            let end = stripped.find('>')?;
            (stripped[..end].to_string(), &stripped[end + 1..])
        } else {
            let end = after_label
                .find(char::is_whitespace)
                .unwrap_or(after_label.len());
            (after_label[..end].to_string(), &after_label[end..])
        };
        if dest.is_empty() {
            return None;
        }

        let title_part = rest_after_dest.trim();
        let title = if title_part.is_empty() {
            None
        } else {
            Self::parse_title(title_part)
        };

        Some((label, dest, title))
    }

    fn parse_title(s: &str) -> Option<String> {
        let bytes = s.as_bytes();
        let (open, close) = match bytes.first()? {
            b'"' => ('"', '"'),
            b'\'' => ('\'', '\''),
            b'(' => ('(', ')'),
            _ => return None,
        };
        let inner = &s[1..];
        let end = inner.rfind(close)?;
        let _ = open;
        Some(inner[..end].to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn simple_definition() {
        let (label, dest, title) = LinkRefDef::detect("[foo]: /url").unwrap();
        assert_eq!(label, "foo");
        assert_eq!(dest, "/url");
        assert_eq!(title, None);
    }

    #[test]
    fn with_title() {
        let (label, dest, title) = LinkRefDef::detect(r#"[foo]: /url "a title""#).unwrap();
        assert_eq!(label, "foo");
        assert_eq!(dest, "/url");
        assert_eq!(title, Some("a title".to_string()));
    }

    #[test]
    fn angle_bracket_destination() {
        let (_, dest, _) = LinkRefDef::detect("[foo]: <my url>").unwrap();
        assert_eq!(dest, "my url");
    }

    #[test]
    fn rejects_non_definition() {
        assert_eq!(LinkRefDef::detect("not a definition"), None);
    }
}
