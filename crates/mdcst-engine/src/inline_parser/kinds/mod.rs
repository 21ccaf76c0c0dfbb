//! One type per inline syntactic construct, each owning its own delimiter
//! constants and recognition rule, mirroring `block_parser::kinds`.

pub mod autolink;
pub mod code_span;
pub mod footnote;
pub mod html_inline;
pub mod strikethrough;

pub use autolink::Autolink;
pub use code_span::CodeSpan;
pub use footnote::FootnoteRef;
pub use html_inline::HtmlInline;
pub use strikethrough::Strikethrough;
