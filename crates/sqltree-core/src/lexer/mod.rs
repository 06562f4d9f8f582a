//! SQL lexer.
//!
//! Hand-written scanner turning statement text into classified tokens. It
//! knows nothing about the grammar; the parser pulls tokens one at a time.

mod error;
mod span;
mod token;
mod tokenizer;

pub use error::LexError;
pub use span::Span;
pub use token::{Keyword, Token, TokenKind};
pub use tokenizer::Lexer;
