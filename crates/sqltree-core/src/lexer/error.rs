//! Lexical errors.

/// Raised when the statement text contains something no token class accepts.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{reason} '{fragment}' at offset {offset}")]
pub struct LexError {
    /// Why the fragment was rejected.
    pub reason: &'static str,
    /// The offending text.
    pub fragment: String,
    /// Byte offset of the fragment in the input.
    pub offset: usize,
}

impl LexError {
    pub(crate) fn new(reason: &'static str, fragment: impl Into<String>, offset: usize) -> Self {
        Self {
            reason,
            fragment: fragment.into(),
            offset,
        }
    }
}
