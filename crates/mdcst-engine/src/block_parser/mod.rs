//! # Block Parser
//!
//! Line-oriented recognition of CommonMark+GFM block structures into a
//! nested [`crate::cst::Block`] tree, in two phases:
//!
//! - **`classify`**: small, stateless per-line facts (indentation, blank
//!   detection, paragraph-interrupt rules) shared by every recognizer
//! - **`kinds`**: one type per syntactic construct, each owning its own
//!   delimiter constants and recognition rule
//! - **`content`**: content projection bridging stripped container lines to
//!   the inline parser while keeping absolute spans
//! - **`builder`**: the recursive construction phase that walks the line
//!   stream, opens/closes containers, and emits block nodes
//!
//! Container nesting (blockquote-in-list, list-in-blockquote, arbitrary
//! depth) is handled by recursion: opening a container strips its prefix
//! from its lines and recurses the builder on the stripped lines.

pub mod builder;
pub mod classify;
pub mod content;
pub mod kinds;

pub use builder::{parse, parse_lines};
