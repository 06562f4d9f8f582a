//! Parser error types.

use crate::lexer::{Span, TokenKind};

/// The token sequence matches no grammar production.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
#[error("syntax error: expected {expected}, found {found} at {span}")]
pub struct SyntaxError {
    /// What the grammar accepts at this point.
    pub expected: String,
    /// The token actually found.
    pub found: TokenKind,
    /// The location of the offending token.
    pub span: Span,
}

impl SyntaxError {
    /// Creates an "unexpected token" error.
    #[must_use]
    pub fn unexpected(expected: impl Into<String>, found: TokenKind, span: Span) -> Self {
        Self {
            expected: expected.into(),
            found,
            span,
        }
    }

    /// Returns true if the parser ran out of input.
    #[must_use]
    pub const fn is_eof(&self) -> bool {
        matches!(self.found, TokenKind::Eof)
    }
}
