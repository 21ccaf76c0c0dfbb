//! # Inline Parser
//!
//! Turns a block's joined content text (see
//! [`crate::block_parser::content::ContentView`]) into `Vec<Inline>`.
//!
//! Structured the way `block_parser` is: a `cursor` primitive shared by
//! every recognizer, one `kinds` module per construct owning its own
//! delimiter knowledge, and a `delimiter` module holding the CommonMark
//! flanking/mod-3 rules shared by emphasis, strong and strikethrough.

pub mod cursor;
pub mod delimiter;
pub mod kinds;
mod parser;

pub use parser::parse;
