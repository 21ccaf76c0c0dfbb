/// GFM strikethrough delimiter (`~~text~~`). Only an exact run of two
/// tildes is recognized; CommonMark's emphasis flanking rules still apply
/// to decide whether a given run can open/close.
pub struct Strikethrough;

impl Strikethrough {
    pub const MARKER: char = '~';
    pub const RUN_LEN: usize = 2;
}
