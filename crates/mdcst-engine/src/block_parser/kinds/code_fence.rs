use crate::cst::FenceChar;

/// Fenced code block (``` or ~~~) delimiter knowledge.
///
/// Per the knowledge-ownership principle, the fence characters and the
/// open/close matching rule live here, not in the classifier or builder.
pub struct CodeFence;

impl CodeFence {
    pub const BACKTICK: char = '`';
    pub const TILDE: char = '~';

    /// `rest` is the line content with leading indentation (up to 3 spaces)
    /// already stripped. Returns `(char, fence_len, info_string)`.
    pub fn detect_open(rest: &str) -> Option<(FenceChar, usize, String)> {
        let first = rest.chars().next()?;
        let (ch, fc) = match first {
            Self::BACKTICK => (Self::BACKTICK, FenceChar::Backtick),
            Self::TILDE => (Self::TILDE, FenceChar::Tilde),
            _ => return None,
        };
        let len = rest.chars().take_while(|&c| c == ch).count();
        if len < 3 {
            return None;
        }
        let info = rest[len..].trim().to_string();
        // A backtick fence's info string may not itself contain a backtick.
        if fc == FenceChar::Backtick && info.contains(Self::BACKTICK) {
            return None;
        }
        Some((fc, len, info))
    }

    /// Whether `rest` (indentation already stripped, up to 3 spaces allowed
    /// before the fence) closes a fence of `kind` with at least `min_len`
    /// delimiter characters and nothing else but trailing whitespace.
    pub fn detect_close(rest: &str, kind: FenceChar, min_len: usize) -> bool {
        let ch = kind.as_char();
        let trimmed = rest.trim_end();
        if trimmed.is_empty() {
            return false;
        }
        let len = trimmed.chars().take_while(|&c| c == ch).count();
        len >= min_len && trimmed.chars().all(|c| c == ch)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn detect_backtick_fence_with_info() {
        assert_eq!(
            CodeFence::detect_open("```rust"),
            Some((FenceChar::Backtick, 3, "rust".into()))
        );
    }

    #[test]
    fn detect_tilde_fence() {
        assert_eq!(
            CodeFence::detect_open("~~~~"),
            Some((FenceChar::Tilde, 4, String::new()))
        );
    }

    #[test]
    fn backtick_fence_rejects_backtick_in_info() {
        assert_eq!(CodeFence::detect_open("``` a ` b"), None);
    }

    #[test]
    fn too_short_is_not_a_fence() {
        assert_eq!(CodeFence::detect_open("``x"), None);
    }

    #[test]
    fn closing_fence_requires_matching_char() {
        assert!(CodeFence::detect_close("```", FenceChar::Backtick, 3));
        assert!(!CodeFence::detect_close("~~~", FenceChar::Backtick, 3));
    }

    #[test]
    fn closing_fence_requires_at_least_opening_length() {
        assert!(!CodeFence::detect_close("``", FenceChar::Backtick, 3));
        assert!(CodeFence::detect_close("````", FenceChar::Backtick, 3));
    }
}
