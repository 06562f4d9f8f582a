//! # sqltree-core
//!
//! Parses one statement of a small SQL dialect into a typed AST that
//! serializes to nested mappings and sequences.
//!
//! Supported statements: SELECT (joins, WHERE, GROUP BY, HAVING, ORDER BY,
//! LIMIT), INSERT, UPDATE, DELETE, CREATE TABLE, ALTER TABLE and DROP TABLE.
//!
//! ```rust
//! use serde_json::json;
//!
//! let stmt = sqltree_core::parse("select * from blog where age >= 18;").unwrap();
//! let value = stmt.to_value().unwrap();
//!
//! assert_eq!(value["type"], json!("SELECT"));
//! assert_eq!(value["table"], json!([{"name": "blog"}]));
//! assert_eq!(
//!     value["where"],
//!     json!([{"left": {"value": "age"}, "right": 18, "compare": ">="}])
//! );
//! assert_eq!(value["limit"], json!([]));
//! ```
//!
//! The `Display` rendering of a [`Statement`] is canonical SQL that parses
//! back to an equal statement:
//!
//! ```rust
//! let stmt = sqltree_core::parse("select name n from blog limit 5;").unwrap();
//! assert_eq!(stmt.to_string(), "SELECT name AS n FROM blog LIMIT 0, 5;");
//! ```

pub mod ast;
mod error;
pub mod lexer;
pub mod parser;

pub use ast::{Statement, StatementKind};
pub use error::{Error, Result};
pub use lexer::{LexError, Lexer, Token, TokenKind};
pub use parser::{Parser, SyntaxError};

/// Parses a single `;`-terminated statement.
///
/// # Errors
///
/// Returns `Error::Lex` for input no token matches and `Error::Syntax` when
/// the tokens do not form a supported statement.
pub fn parse(input: &str) -> Result<Statement> {
    let stmt = Parser::new(input).parse_statement()?;
    tracing::debug!(kind = %stmt.kind(), len = input.len(), "parsed statement");
    Ok(stmt)
}
