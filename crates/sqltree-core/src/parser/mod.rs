//! SQL parser.
//!
//! A hand-written recursive descent parser, one method per grammar symbol,
//! each returning a typed AST fragment.

mod error;
mod parser;

pub use error::SyntaxError;
pub use parser::{MAX_GROUP_DEPTH, Parser};
