use crate::cst::ThematicBreakMarker;

/// Thematic break (`---`, `***`, `___`) recognition.
///
/// Per the knowledge-ownership principle, the delimiter set and the
/// recognition rule live here rather than scattered through the builder.
pub struct ThematicBreak;

impl ThematicBreak {
    pub const CHARS: [char; 3] = ['-', '_', '*'];

    /// `rest` is the line content after any leading indentation has been
    /// stripped (up to 3 spaces are allowed before a thematic break).
    pub fn detect(rest: &str) -> Option<ThematicBreakMarker> {
        let trimmed = rest.trim_end();
        let mut chars = trimmed.chars().filter(|c| !c.is_whitespace());
        let first = chars.next()?;
        if !Self::CHARS.contains(&first) {
            return None;
        }
        if !chars.all(|c| c == first) {
            return None;
        }
        let count = trimmed.chars().filter(|&c| c == first).count();
        if count < 3 {
            return None;
        }
        // Everything must be either the marker or plain whitespace.
        if !trimmed.chars().all(|c| c == first || c.is_whitespace()) {
            return None;
        }
        Some(match first {
            '-' => ThematicBreakMarker::Hyphen,
            '_' => ThematicBreakMarker::Underscore,
            '*' => ThematicBreakMarker::Asterisk,
            _ => unreachable!(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case::hyphens("---", Some(ThematicBreakMarker::Hyphen))]
    #[case::underscores("___", Some(ThematicBreakMarker::Underscore))]
    #[case::spaced_asterisks("* * *", Some(ThematicBreakMarker::Asterisk))]
    #[case::mixed_markers("-_-", None)]
    #[case::too_few("--", None)]
    #[case::plain_text("hello", None)]
    fn detects_thematic_breaks(#[case] rest: &str, #[case] expected: Option<ThematicBreakMarker>) {
        assert_eq!(ThematicBreak::detect(rest), expected);
    }
}
