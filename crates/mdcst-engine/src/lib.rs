//! A lossless Markdown concrete syntax tree, with block-granularity
//! incremental re-parsing, for real-time editor embeddings.
//!
//! Every [`cst::Block`]/[`cst::Inline`] node carries a [`span::Span`] into
//! the original source; [`serialize::serialize`] replays those spans to
//! reproduce the source byte for byte. [`incremental::parse_incremental`]
//! reparses only the blocks touched by an edit rather than the whole
//! document. [`html::render_html`] and [`ast_external::to_mdast`] are the
//! two external projections built on top of the CST.

pub mod ast_external;
pub mod block_parser;
pub mod cst;
pub mod error;
pub mod handle;
pub mod html;
pub mod incremental;
pub mod inline_parser;
pub mod serialize;
pub mod source;
pub mod span;

pub use block_parser::parse;
pub use cst::Document;
pub use error::EditError;
pub use handle::DocumentHandle;
pub use html::{render_html, render_html_with, HtmlOptions};
pub use incremental::{edit_delete, edit_insert, edit_replace, parse_incremental, EditInfo};
pub use serialize::serialize;
