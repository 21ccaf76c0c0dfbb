//! # Block Kinds
//!
//! Block-specific types that own their syntax delimiters per the
//! knowledge-ownership principle: all delimiter constants and recognition
//! logic live here, not scattered through the classifier or builder.
//!
//! - **`ThematicBreak`**: `-`, `_`, `*` runs of three or more
//! - **`AtxHeading`** / **`SetextUnderline`**: `#` openers and `===`/`---` underlines
//! - **`CodeFence`**: `` ` `` / `~` fences, open/close matching
//! - **`BlockQuote`**: `>` prefix stripping, one level per call
//! - **`ListItemMarker`**: bullets and ordered markers
//! - **`HtmlBlockOpen`**: simplified HTML block start condition
//! - **`LinkRefDef`**: `[label]: dest "title"` recognition
//! - **`IndentedCode`**: the 4-space threshold
//! - **`Table`**: GFM delimiter-row recognition and cell splitting
//! - **`Paragraph`**: the default leaf block

pub mod block_quote;
pub mod code_fence;
pub mod heading;
pub mod html_block;
pub mod indented_code;
pub mod link_ref_def;
pub mod list;
pub mod paragraph;
pub mod table;
pub mod thematic_break;

pub use block_quote::BlockQuote;
pub use code_fence::CodeFence;
pub use heading::{AtxHeading, SetextUnderline};
pub use html_block::HtmlBlockOpen;
pub use indented_code::IndentedCode;
pub use link_ref_def::LinkRefDef;
pub use list::{ListItemMarker, ListMarker};
pub use paragraph::Paragraph;
pub use table::Table;
pub use thematic_break::ThematicBreak;
