/// Autolink recognition: `<scheme:...>` and `<user@host>` forms.
pub struct Autolink;

impl Autolink {
    /// Returns the destination text if `rest` (the text between `<` and the
    /// first `>`) is a valid URI autolink: a scheme of 2-32 alphanumerics
    /// (plus `+.-`) followed by `:`, then no whitespace/control/`<`/`>`.
    pub fn detect_uri(rest: &str) -> Option<&str> {
        let colon = rest.find(':')?;
        let scheme = &rest[..colon];
        if !(2..=32).contains(&scheme.len()) {
            return None;
        }
        let mut chars = scheme.chars();
        let first = chars.next()?;
        if !first.is_ascii_alphabetic() {
            return None;
        }
        if !chars.all(|c| c.is_ascii_alphanumeric() || matches!(c, '+' | '.' | '-')) {
            return None;
        }
        if rest
            .bytes()
            .any(|b| b.is_ascii_whitespace() || b == b'<' || b == b'>' || b.is_ascii_control())
        {
            return None;
        }
        Some(rest)
    }

    /// A conservative, non-exhaustive email-autolink check (`user@host.tld`).
    pub fn detect_email(rest: &str) -> bool {
        let Some(at) = rest.find('@') else {
            return false;
        };
        let (local, domain) = (&rest[..at], &rest[at + 1..]);
        if local.is_empty() || domain.is_empty() {
            return false;
        }
        let valid_local = local
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || ".!#$%&'*+/=?^_`{|}~-".contains(c));
        let valid_domain = domain
            .split('.')
            .all(|label| !label.is_empty() && label.chars().all(|c| c.is_ascii_alphanumeric() || c == '-'))
            && domain.contains('.');
        valid_local && valid_domain
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn recognizes_http_scheme() {
        assert_eq!(Autolink::detect_uri("https://example.com"), Some("https://example.com"));
    }

    #[test]
    fn rejects_scheme_with_space() {
        assert_eq!(Autolink::detect_uri("not a url"), None);
    }

    #[test]
    fn recognizes_email() {
        assert!(Autolink::detect_email("foo@example.com"));
        assert!(!Autolink::detect_email("not-an-email"));
    }
}
