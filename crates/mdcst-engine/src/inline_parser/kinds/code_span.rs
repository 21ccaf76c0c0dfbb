/// Code span backtick-run recognition (`` `code` ``, `` ``code`` ``, ...).
///
/// Owns the backtick delimiter the way `block_parser::kinds::code_fence`
/// owns the fence characters — a raw zone, so once opened it suppresses all
/// other inline recognition until a matching run of the same length closes.
pub struct CodeSpan;

impl CodeSpan {
    pub const MARKER: u8 = b'`';

    /// Length of a run of backticks starting at `bytes[i]`, or 0 if none.
    pub fn run_len(bytes: &[u8], i: usize) -> usize {
        let mut j = i;
        while j < bytes.len() && bytes[j] == Self::MARKER {
            j += 1;
        }
        j - i
    }

    /// CommonMark code-span content normalization: strip one leading and one
    /// trailing space if the content starts and ends with a space and is not
    /// all spaces, then collapse line endings to single spaces.
    pub fn normalize_content(raw: &str) -> String {
        let collapsed: String = raw
            .chars()
            .map(|c| if c == '\n' { ' ' } else { c })
            .collect();
        let trimmed = collapsed.trim();
        if !collapsed.is_empty()
            && collapsed.starts_with(' ')
            && collapsed.ends_with(' ')
            && !trimmed.is_empty()
        {
            trimmed.to_string()
        } else {
            collapsed
        }
    }
}
