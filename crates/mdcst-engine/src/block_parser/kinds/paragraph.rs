/// The default leaf block: no delimiters of its own, so there is nothing to
/// detect. Kept as a marker type so dispatch sites name it explicitly
/// instead of falling through to an unnamed default branch.
pub struct Paragraph;
