//! Parsers for glossary keys, versions, numeric strings and template text.
//!
//! All grammars are small winnow parsers. The template scanner never fails:
//! text that does not form a `{identifier}` token is kept as literal text.

pub mod ast;
pub mod error;
mod key;
mod number;
mod template;
mod version;

pub use ast::{Message, Segment};
pub use error::ParseError;
pub use key::{is_identifier, parse_key};
pub use number::parse_js_number;
pub use template::parse_template;
pub use version::parse_version;
