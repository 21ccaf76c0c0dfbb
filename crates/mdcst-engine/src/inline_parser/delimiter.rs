//! Delimiter-run classification and matching for emphasis, strong emphasis
//! and strikethrough, following the CommonMark "flanking" rules (the
//! left-/right-flanking definitions and the emphasis/strong mod-3 rule).
//!
//! `markdown-neuraxis-engine` doesn't need a delimiter stack (its inline
//! grammar has no emphasis), so this is grounded on CommonMark's reference
//! algorithm rather than a single pack file; the two-phase shape — a flat
//! token scan, then a second pass pairing delimiter runs — mirrors the
//! tokenize-then-resolve split the other example repos use for this exact
//! problem (see `other_examples/` delimiter-stack style processors).

use crate::span::Span;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DelimiterChar {
    Star,
    Underscore,
    Tilde,
}

impl DelimiterChar {
    pub fn from_char(c: char) -> Option<Self> {
        match c {
            '*' => Some(Self::Star),
            '_' => Some(Self::Underscore),
            '~' => Some(Self::Tilde),
            _ => None,
        }
    }

    pub fn as_char(self) -> char {
        match self {
            Self::Star => '*',
            Self::Underscore => '_',
            Self::Tilde => '~',
        }
    }
}

#[derive(Debug, Clone)]
pub struct DelimRun {
    pub ch: DelimiterChar,
    pub span: Span,
    pub len: usize,
    pub can_open: bool,
    pub can_close: bool,
}

fn is_unicode_whitespace(c: Option<char>) -> bool {
    c.map(|c| c.is_whitespace()).unwrap_or(true)
}

fn is_punctuation(c: Option<char>) -> bool {
    match c {
        Some(c) => c.is_ascii_punctuation() || (!c.is_whitespace() && !c.is_alphanumeric()),
        None => false,
    }
}

/// Left-/right-flanking classification for a delimiter run, given the
/// characters immediately before and after it.
pub fn classify_flanking(before: Option<char>, after: Option<char>) -> (bool, bool) {
    let before_ws = is_unicode_whitespace(before);
    let after_ws = is_unicode_whitespace(after);
    let before_punct = is_punctuation(before);
    let after_punct = is_punctuation(after);

    let left_flanking = !after_ws && !(after_punct && !before_ws && !before_punct);
    let right_flanking = !before_ws && !(before_punct && !after_ws && !after_punct);
    (left_flanking, right_flanking)
}

/// Whether a run can open, given its character, flanking, and neighbors.
/// `_` additionally forbids opening intraword (CommonMark rule 1/2).
pub fn can_open(ch: DelimiterChar, left_flanking: bool, right_flanking: bool, before: Option<char>) -> bool {
    match ch {
        DelimiterChar::Star | DelimiterChar::Tilde => left_flanking,
        DelimiterChar::Underscore => left_flanking && (!right_flanking || is_punctuation(before)),
    }
}

pub fn can_close(ch: DelimiterChar, left_flanking: bool, right_flanking: bool, after: Option<char>) -> bool {
    match ch {
        DelimiterChar::Star | DelimiterChar::Tilde => right_flanking,
        DelimiterChar::Underscore => right_flanking && (!left_flanking || is_punctuation(after)),
    }
}

/// The mod-3 rule: if a delimiter run can both open and close, it may only
/// pair with another such run when the sum of their lengths is not a
/// multiple of 3, unless both lengths are themselves multiples of 3.
pub fn mod3_compatible(opener: &DelimRun, closer_len: usize, closer_can_open: bool) -> bool {
    if opener.ch == DelimiterChar::Tilde {
        return true;
    }
    let opener_both = opener.can_open && opener.can_close;
    let closer_both = closer_can_open;
    if !opener_both || !closer_both {
        return true;
    }
    let sum_divisible = (opener.len + closer_len) % 3 == 0;
    !sum_divisible || (opener.len % 3 == 0 && closer_len % 3 == 0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plain_word_star_is_both_flanking() {
        let (l, r) = classify_flanking(Some(' '), Some('a'));
        assert!(l && !r);
    }

    #[test]
    fn underscore_forbids_intraword_open() {
        let (l, r) = classify_flanking(Some('a'), Some('b'));
        assert!(!can_open(DelimiterChar::Underscore, l, r, Some('a')));
    }

    #[test]
    fn mod3_rejects_one_plus_two_both_flanking() {
        let opener = DelimRun {
            ch: DelimiterChar::Star,
            span: Span::new(0, 1),
            len: 1,
            can_open: true,
            can_close: true,
        };
        assert!(!mod3_compatible(&opener, 2, true));
    }

    #[test]
    fn mod3_allows_when_not_both_multiples() {
        let opener = DelimRun {
            ch: DelimiterChar::Star,
            span: Span::new(0, 3),
            len: 3,
            can_open: true,
            can_close: true,
        };
        assert!(mod3_compatible(&opener, 3, true));
    }
}
