//! Token types for the SQL lexer.

use core::fmt;

use super::Span;

/// Reserved words of the dialect.
///
/// A word matching one of these is never an identifier, whatever its case.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Keyword {
    // Queries
    Select,
    From,
    Where,
    Group,
    By,
    Having,
    Order,
    Limit,
    Distinct,
    As,
    Asc,
    Desc,

    // Joins
    Join,
    Inner,
    Left,
    Right,
    Full,
    On,

    // Data manipulation
    Insert,
    Into,
    Values,
    Update,
    Set,
    Delete,

    // Data definition
    Create,
    Alter,
    Drop,
    Table,
    Column,
    Add,

    // Conditions
    And,
    Or,
    Not,
    In,
    Like,
    Between,
    Is,
    Null,

    // Aggregates
    Count,
    Sum,
    Avg,
    Min,
    Max,

    // Data types
    Int,
    Integer,
    Tinyint,
    Smallint,
    Mediumint,
    Bigint,
    Float,
    Double,
    Decimal,
    Char,
    Varchar,
}

impl Keyword {
    /// Attempts to parse a keyword from a string (case-insensitive).
    #[must_use]
    #[allow(clippy::should_implement_trait)]
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_ascii_uppercase().as_str() {
            "SELECT" => Some(Self::Select),
            "FROM" => Some(Self::From),
            "WHERE" => Some(Self::Where),
            "GROUP" => Some(Self::Group),
            "BY" => Some(Self::By),
            "HAVING" => Some(Self::Having),
            "ORDER" => Some(Self::Order),
            "LIMIT" => Some(Self::Limit),
            "DISTINCT" => Some(Self::Distinct),
            "AS" => Some(Self::As),
            "ASC" => Some(Self::Asc),
            "DESC" => Some(Self::Desc),
            "JOIN" => Some(Self::Join),
            "INNER" => Some(Self::Inner),
            "LEFT" => Some(Self::Left),
            "RIGHT" => Some(Self::Right),
            "FULL" => Some(Self::Full),
            "ON" => Some(Self::On),
            "INSERT" => Some(Self::Insert),
            "INTO" => Some(Self::Into),
            "VALUES" => Some(Self::Values),
            "UPDATE" => Some(Self::Update),
            "SET" => Some(Self::Set),
            "DELETE" => Some(Self::Delete),
            "CREATE" => Some(Self::Create),
            "ALTER" => Some(Self::Alter),
            "DROP" => Some(Self::Drop),
            "TABLE" => Some(Self::Table),
            "COLUMN" => Some(Self::Column),
            "ADD" => Some(Self::Add),
            "AND" => Some(Self::And),
            "OR" => Some(Self::Or),
            "NOT" => Some(Self::Not),
            "IN" => Some(Self::In),
            "LIKE" => Some(Self::Like),
            "BETWEEN" => Some(Self::Between),
            "IS" => Some(Self::Is),
            "NULL" => Some(Self::Null),
            "COUNT" => Some(Self::Count),
            "SUM" => Some(Self::Sum),
            "AVG" => Some(Self::Avg),
            "MIN" => Some(Self::Min),
            "MAX" => Some(Self::Max),
            "INT" => Some(Self::Int),
            "INTEGER" => Some(Self::Integer),
            "TINYINT" => Some(Self::Tinyint),
            "SMALLINT" => Some(Self::Smallint),
            "MEDIUMINT" => Some(Self::Mediumint),
            "BIGINT" => Some(Self::Bigint),
            "FLOAT" => Some(Self::Float),
            "DOUBLE" => Some(Self::Double),
            "DECIMAL" => Some(Self::Decimal),
            "CHAR" => Some(Self::Char),
            "VARCHAR" => Some(Self::Varchar),
            _ => None,
        }
    }

    /// Returns the keyword as a string.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Select => "SELECT",
            Self::From => "FROM",
            Self::Where => "WHERE",
            Self::Group => "GROUP",
            Self::By => "BY",
            Self::Having => "HAVING",
            Self::Order => "ORDER",
            Self::Limit => "LIMIT",
            Self::Distinct => "DISTINCT",
            Self::As => "AS",
            Self::Asc => "ASC",
            Self::Desc => "DESC",
            Self::Join => "JOIN",
            Self::Inner => "INNER",
            Self::Left => "LEFT",
            Self::Right => "RIGHT",
            Self::Full => "FULL",
            Self::On => "ON",
            Self::Insert => "INSERT",
            Self::Into => "INTO",
            Self::Values => "VALUES",
            Self::Update => "UPDATE",
            Self::Set => "SET",
            Self::Delete => "DELETE",
            Self::Create => "CREATE",
            Self::Alter => "ALTER",
            Self::Drop => "DROP",
            Self::Table => "TABLE",
            Self::Column => "COLUMN",
            Self::Add => "ADD",
            Self::And => "AND",
            Self::Or => "OR",
            Self::Not => "NOT",
            Self::In => "IN",
            Self::Like => "LIKE",
            Self::Between => "BETWEEN",
            Self::Is => "IS",
            Self::Null => "NULL",
            Self::Count => "COUNT",
            Self::Sum => "SUM",
            Self::Avg => "AVG",
            Self::Min => "MIN",
            Self::Max => "MAX",
            Self::Int => "INT",
            Self::Integer => "INTEGER",
            Self::Tinyint => "TINYINT",
            Self::Smallint => "SMALLINT",
            Self::Mediumint => "MEDIUMINT",
            Self::Bigint => "BIGINT",
            Self::Float => "FLOAT",
            Self::Double => "DOUBLE",
            Self::Decimal => "DECIMAL",
            Self::Char => "CHAR",
            Self::Varchar => "VARCHAR",
        }
    }
}

impl fmt::Display for Keyword {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The kind of token.
#[derive(Debug, Clone, PartialEq)]
pub enum TokenKind {
    // Literals
    /// Unsigned integer literal (e.g., 42)
    Integer(i64),
    /// Unsigned decimal literal (e.g., 3.5)
    Decimal(f64),
    /// Quoted string literal, single or double quotes (e.g., 'hello')
    String(String),

    // Identifiers and keywords
    /// Unquoted name (e.g., blog)
    Identifier(String),
    /// Reserved word
    Keyword(Keyword),

    // Comparison operators
    /// =
    Eq,
    /// <>
    NotEq,
    /// <
    Lt,
    /// <=
    LtEq,
    /// >
    Gt,
    /// >=
    GtEq,

    // Punctuation
    /// (
    LeftParen,
    /// )
    RightParen,
    /// ,
    Comma,
    /// .
    Dot,
    /// *
    Star,
    /// ;
    Semicolon,

    /// End of input
    Eof,
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Integer(n) => write!(f, "{n}"),
            Self::Decimal(n) => write!(f, "{n}"),
            Self::String(s) => write!(f, "'{s}'"),
            Self::Identifier(name) => f.write_str(name),
            Self::Keyword(kw) => f.write_str(kw.as_str()),
            Self::Eq => f.write_str("'='"),
            Self::NotEq => f.write_str("'<>'"),
            Self::Lt => f.write_str("'<'"),
            Self::LtEq => f.write_str("'<='"),
            Self::Gt => f.write_str("'>'"),
            Self::GtEq => f.write_str("'>='"),
            Self::LeftParen => f.write_str("'('"),
            Self::RightParen => f.write_str("')'"),
            Self::Comma => f.write_str("','"),
            Self::Dot => f.write_str("'.'"),
            Self::Star => f.write_str("'*'"),
            Self::Semicolon => f.write_str("';'"),
            Self::Eof => f.write_str("end of input"),
        }
    }
}

/// A token with its span in the source code.
#[derive(Debug, Clone, PartialEq)]
pub struct Token {
    /// The kind of token.
    pub kind: TokenKind,
    /// The location in the source code.
    pub span: Span,
}

impl Token {
    /// Creates a new token.
    #[must_use]
    pub const fn new(kind: TokenKind, span: Span) -> Self {
        Self { kind, span }
    }

    /// Returns true if this is an EOF token.
    #[must_use]
    pub const fn is_eof(&self) -> bool {
        matches!(self.kind, TokenKind::Eof)
    }

    /// Returns the keyword if this is a keyword token.
    #[must_use]
    pub const fn as_keyword(&self) -> Option<Keyword> {
        match &self.kind {
            TokenKind::Keyword(kw) => Some(*kw),
            _ => None,
        }
    }
}
