//! Error type returned by `parse`.

use crate::lexer::LexError;
use crate::parser::SyntaxError;

/// Why a statement could not be parsed. The first error aborts the parse.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum Error {
    /// The text contains a fragment matching no token class.
    #[error(transparent)]
    Lex(#[from] LexError),

    /// The tokens do not form a statement of the grammar.
    #[error(transparent)]
    Syntax(#[from] SyntaxError),
}

/// Result type for parsing.
pub type Result<T> = core::result::Result<T, Error>;
