use std::sync::OnceLock;

use regex::Regex;

use crate::cst::Alignment;

/// GFM table delimiter-row recognition and cell splitting.
pub struct Table;

// Per-cell delimiter grammar: optional leading `:`, one or more `-`,
// optional trailing `:`. Mirrors `markdown-neuraxis-engine`'s
// `editing::snapshot` pattern of a lazily-built static `Regex`.
fn delimiter_cell_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"^:?-+:?$").expect("invalid table delimiter-cell regex"))
}

impl Table {
    /// Recognizes a delimiter row (e.g. `| :--- | ---: | :---: |`) and
    /// returns the per-column alignment. Returns `None` if `line` is not a
    /// valid delimiter row.
    pub fn detect_delimiter_row(line: &str) -> Option<Vec<Alignment>> {
        let trimmed = line.trim();
        if trimmed.is_empty() || !trimmed.contains('-') {
            return None;
        }
        let cells = Self::split_row(trimmed);
        if cells.is_empty() {
            return None;
        }
        let mut alignments = Vec::with_capacity(cells.len());
        for cell in &cells {
            let c = cell.trim();
            if !delimiter_cell_re().is_match(c) {
                return None;
            }
            let left = c.starts_with(':');
            let right = c.ends_with(':');
            alignments.push(match (left, right) {
                (true, true) => Alignment::Center,
                (true, false) => Alignment::Left,
                (false, true) => Alignment::Right,
                (false, false) => Alignment::None,
            });
        }
        Some(alignments)
    }

    /// Splits a table row on unescaped `|`, trimming one leading/trailing
    /// pipe if the row is pipe-fenced (`| a | b |`).
    pub fn split_row(line: &str) -> Vec<String> {
        let mut cells = Vec::new();
        let mut current = String::new();
        let mut chars = line.trim().chars().peekable();
        while let Some(c) = chars.next() {
            match c {
                '\\' if chars.peek() == Some(&'|') => {
                    current.push('|');
                    chars.next();
                }
                '|' => {
                    cells.push(std::mem::take(&mut current));
                }
                _ => current.push(c),
            }
        }
        cells.push(current);

        if cells.first().is_some_and(|c| c.trim().is_empty()) {
            cells.remove(0);
        }
        if cells.last().is_some_and(|c| c.trim().is_empty()) {
            cells.pop();
        }
        cells.into_iter().map(|c| c.trim().to_string()).collect()
    }

    /// Whether `line` looks like a table row at all (contains a `|`),
    /// used to decide whether to keep consuming body rows.
    pub fn looks_tabular(line: &str) -> bool {
        line.contains('|')
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case::simple("|---|---|", Some(vec![Alignment::None, Alignment::None]))]
    #[case::alignments(
        "| :--- | ---: | :---: |",
        Some(vec![Alignment::Left, Alignment::Right, Alignment::Center])
    )]
    #[case::rejects_non_delimiter_row("| a | b |", None)]
    #[case::rejects_malformed_cell("| :-- | -:- |", None)]
    fn detects_delimiter_rows(#[case] line: &str, #[case] expected: Option<Vec<Alignment>>) {
        assert_eq!(Table::detect_delimiter_row(line), expected);
    }

    #[rstest]
    #[case::pipe_fenced("| a | b |", vec!["a", "b"])]
    #[case::bare("a | b", vec!["a", "b"])]
    fn splits_rows(#[case] line: &str, #[case] expected: Vec<&str>) {
        assert_eq!(Table::split_row(line), expected);
    }
}
