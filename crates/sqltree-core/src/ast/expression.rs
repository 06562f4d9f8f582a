//! Column, literal and condition AST types.

use core::fmt;

use serde::ser::{SerializeMap, SerializeSeq};
use serde::{Serialize, Serializer};

use crate::lexer::Keyword;

/// A numeric literal.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Number {
    /// Integer literal.
    Integer(i64),
    /// Decimal literal.
    Decimal(f64),
}

impl fmt::Display for Number {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Integer(n) => write!(f, "{n}"),
            Self::Decimal(n) => {
                let text = n.to_string();
                // Keep a fractional part so the text lexes back as a decimal.
                if text.contains('.') {
                    f.write_str(&text)
                } else {
                    write!(f, "{text}.0")
                }
            }
        }
    }
}

/// The smallest operand of the grammar: a name, a literal or `*`.
#[derive(Debug, Clone, PartialEq)]
pub enum Item {
    /// A bare or qualified name (`age`, `blog.name`, `u.*`).
    Name(String),
    /// A quoted string literal, contents verbatim.
    Text(String),
    /// A numeric literal.
    Number(Number),
    /// The bare wildcard `*`.
    Wildcard,
}

impl Item {
    /// Creates a name item.
    #[must_use]
    pub fn name(name: impl Into<String>) -> Self {
        Self::Name(name.into())
    }

    /// Creates a quoted-string item.
    #[must_use]
    pub fn text(text: impl Into<String>) -> Self {
        Self::Text(text.into())
    }

    /// Creates an integer item.
    #[must_use]
    pub const fn integer(n: i64) -> Self {
        Self::Number(Number::Integer(n))
    }

    /// Text of this item as the tail of a dotted name (`b.` + `name`).
    pub(crate) fn into_path_segment(self) -> String {
        match self {
            Self::Name(s) | Self::Text(s) => s,
            Self::Number(n) => n.to_string(),
            Self::Wildcard => String::from("*"),
        }
    }
}

impl Serialize for Item {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Self::Name(s) | Self::Text(s) => serializer.serialize_str(s),
            Self::Number(n) => n.serialize(serializer),
            Self::Wildcard => serializer.serialize_str("*"),
        }
    }
}

impl fmt::Display for Item {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Name(name) => write_path(f, name),
            Self::Text(text) => write_quoted(f, text),
            Self::Number(n) => write!(f, "{n}"),
            Self::Wildcard => f.write_str("*"),
        }
    }
}

/// Writes a string literal in single quotes, doubling embedded quotes.
pub(crate) fn write_quoted(f: &mut fmt::Formatter<'_>, text: &str) -> fmt::Result {
    write!(f, "'{}'", text.replace('\'', "''"))
}

/// Writes a possibly dotted name segment by segment so that it lexes back
/// to the same qualified name. A trailing `*` segment stays bare.
pub(crate) fn write_path(f: &mut fmt::Formatter<'_>, name: &str) -> fmt::Result {
    for (i, segment) in name.split('.').enumerate() {
        if i > 0 {
            f.write_str(".")?;
            if segment == "*" {
                f.write_str(segment)?;
                continue;
            }
        }
        write_ident(f, segment)?;
    }
    Ok(())
}

/// Writes a single name, quoting it when it would not lex back as an
/// identifier.
pub(crate) fn write_ident(f: &mut fmt::Formatter<'_>, name: &str) -> fmt::Result {
    let mut chars = name.chars();
    let plain = chars.next().is_some_and(|c| c.is_alphabetic() || c == '_')
        && chars.all(|c| c.is_alphanumeric() || c == '_')
        && Keyword::from_str(name).is_none();
    if plain {
        f.write_str(name)
    } else {
        write_quoted(f, name)
    }
}

/// Aggregate functions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AggregateFunction {
    Count,
    Sum,
    Avg,
    Min,
    Max,
}

impl AggregateFunction {
    /// Returns the function name as rendered in the AST.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Count => "COUNT",
            Self::Sum => "SUM",
            Self::Avg => "AVG",
            Self::Min => "MIN",
            Self::Max => "MAX",
        }
    }

    /// Maps an aggregate keyword to its function.
    #[must_use]
    pub const fn from_keyword(keyword: Keyword) -> Option<Self> {
        match keyword {
            Keyword::Count => Some(Self::Count),
            Keyword::Sum => Some(Self::Sum),
            Keyword::Avg => Some(Self::Avg),
            Keyword::Min => Some(Self::Min),
            Keyword::Max => Some(Self::Max),
            _ => None,
        }
    }
}

/// The value of a column reference.
#[derive(Debug, Clone, PartialEq)]
pub enum ColumnExpr {
    /// A plain item: `name`, `b.name`, `*`, `'text'`, `42`.
    Item(Item),
    /// `DISTINCT x` or `DISTINCT(x)`.
    Distinct(Item),
    /// `FUNC(x)`, or `FUNC(DISTINCT x)` when `distinct` is set.
    Aggregate {
        /// The aggregate function.
        function: AggregateFunction,
        /// Whether the argument is wrapped in DISTINCT.
        distinct: bool,
        /// The argument.
        arg: Item,
    },
}

/// Renders `{"DISTINCT": item}`.
struct DistinctOf<'a>(&'a Item);

impl Serialize for DistinctOf<'_> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(1))?;
        map.serialize_entry(Keyword::Distinct.as_str(), self.0)?;
        map.end()
    }
}

impl Serialize for ColumnExpr {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Self::Item(item) => item.serialize(serializer),
            Self::Distinct(item) => DistinctOf(item).serialize(serializer),
            Self::Aggregate {
                function,
                distinct,
                arg,
            } => {
                let mut map = serializer.serialize_map(Some(1))?;
                if *distinct {
                    map.serialize_entry(function.as_str(), &DistinctOf(arg))?;
                } else {
                    map.serialize_entry(function.as_str(), arg)?;
                }
                map.end()
            }
        }
    }
}

impl fmt::Display for ColumnExpr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Item(item) => write!(f, "{item}"),
            Self::Distinct(item) => write!(f, "DISTINCT {item}"),
            Self::Aggregate {
                function,
                distinct: true,
                arg,
            } => write!(f, "{}(DISTINCT {arg})", function.as_str()),
            Self::Aggregate { function, arg, .. } => write!(f, "{}({arg})", function.as_str()),
        }
    }
}

/// A column in the SELECT list.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SelectColumn {
    /// The column value.
    pub value: ColumnExpr,
    /// Column alias.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub alias: Option<String>,
}

impl SelectColumn {
    /// Creates a select column without alias.
    #[must_use]
    pub const fn new(value: ColumnExpr) -> Self {
        Self { value, alias: None }
    }

    /// Creates a select column with an alias.
    #[must_use]
    pub fn with_alias(value: ColumnExpr, alias: impl Into<String>) -> Self {
        Self {
            value,
            alias: Some(alias.into()),
        }
    }
}

impl fmt::Display for SelectColumn {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.value)?;
        if let Some(alias) = &self.alias {
            f.write_str(" AS ")?;
            write_ident(f, alias)?;
        }
        Ok(())
    }
}

/// Comparison operators of a condition.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CompareOp {
    Eq,
    NotEq,
    Lt,
    LtEq,
    Gt,
    GtEq,
    Like,
    NotLike,
    In,
    NotIn,
    /// `IS NULL`
    Null,
    /// `IS NOT NULL`
    NotNull,
    Between,
}

impl CompareOp {
    /// Returns the operator as rendered in the `compare` field.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Eq => "=",
            Self::NotEq => "<>",
            Self::Lt => "<",
            Self::LtEq => "<=",
            Self::Gt => ">",
            Self::GtEq => ">=",
            Self::Like => "LIKE",
            Self::NotLike => "NOT LIKE",
            Self::In => "IN",
            Self::NotIn => "NOT IN",
            Self::Null => "NULL",
            Self::NotNull => "NOT NULL",
            Self::Between => "BETWEEN",
        }
    }
}

impl Serialize for CompareOp {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

/// Right-hand side of a comparison.
#[derive(Debug, Clone, PartialEq)]
pub enum Operand {
    /// A single literal or name.
    Item(Item),
    /// `BETWEEN low AND high`.
    Range(Item, Item),
    /// `IN (a, b, ...)`.
    List(Vec<Item>),
    /// `IS [NOT] NULL` has no operand.
    Nothing,
}

impl Serialize for Operand {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Self::Item(item) => item.serialize(serializer),
            Self::Range(low, high) => {
                let mut seq = serializer.serialize_seq(Some(2))?;
                seq.serialize_element(low)?;
                seq.serialize_element(high)?;
                seq.end()
            }
            Self::List(items) => items.serialize(serializer),
            Self::Nothing => serializer.serialize_none(),
        }
    }
}

/// A comparison node: `left compare right`.
#[derive(Debug, Clone, PartialEq)]
pub struct Comparison {
    /// The compared column.
    pub left: ColumnExpr,
    /// The operator.
    pub op: CompareOp,
    /// The operand.
    pub right: Operand,
}

impl Serialize for Comparison {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        #[derive(Serialize)]
        struct ColumnValue<'a> {
            value: &'a ColumnExpr,
        }

        let mut map = serializer.serialize_map(Some(3))?;
        map.serialize_entry("left", &ColumnValue { value: &self.left })?;
        map.serialize_entry("right", &self.right)?;
        map.serialize_entry("compare", &self.op)?;
        map.end()
    }
}

impl fmt::Display for Comparison {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let left = &self.left;
        match (&self.op, &self.right) {
            (CompareOp::Null, _) => write!(f, "{left} IS NULL"),
            (CompareOp::NotNull, _) => write!(f, "{left} IS NOT NULL"),
            (op, Operand::Range(low, high)) => {
                write!(f, "{left} {} {low} AND {high}", op.as_str())
            }
            (op, Operand::List(items)) => {
                write!(f, "{left} {} (", op.as_str())?;
                write_list(f, items)?;
                f.write_str(")")
            }
            (op, Operand::Item(item)) => write!(f, "{left} {} {item}", op.as_str()),
            (op, Operand::Nothing) => write!(f, "{left} {}", op.as_str()),
        }
    }
}

/// Writes a comma separated list.
pub(crate) fn write_list<T: fmt::Display>(f: &mut fmt::Formatter<'_>, items: &[T]) -> fmt::Result {
    for (i, item) in items.iter().enumerate() {
        if i > 0 {
            f.write_str(", ")?;
        }
        write!(f, "{item}")?;
    }
    Ok(())
}

/// Boolean connector between two conditions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Connector {
    And,
    Or,
}

impl Connector {
    /// Returns the connector keyword.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::And => "AND",
            Self::Or => "OR",
        }
    }
}

/// One element of a condition tree.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Condition {
    /// A single comparison.
    Compare(Comparison),
    /// A parenthesized sub-tree, kept as one nested element.
    Group(Box<ConditionTree>),
}

impl fmt::Display for Condition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Compare(cmp) => write!(f, "{cmp}"),
            Self::Group(tree) => write!(f, "({tree})"),
        }
    }
}

/// A flat boolean expression: conditions joined left to right by AND/OR.
///
/// AND and OR bind equally; only parentheses group, and a group stays one
/// nested element of its parent. Serialized as
/// `[cond, "AND", cond, "OR", [cond, "AND", cond]]`.
#[derive(Debug, Clone, PartialEq)]
pub struct ConditionTree {
    /// The leading condition.
    pub first: Condition,
    /// Each following condition with the connector before it.
    pub rest: Vec<(Connector, Condition)>,
}

impl ConditionTree {
    /// Creates a tree holding a single condition.
    #[must_use]
    pub const fn new(first: Condition) -> Self {
        Self {
            first,
            rest: Vec::new(),
        }
    }

    /// Number of elements in the serialized sequence.
    #[must_use]
    pub fn len(&self) -> usize {
        1 + 2 * self.rest.len()
    }

    /// Always false: a tree holds at least one condition.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        false
    }

    /// Iterates over the conditions, ignoring connectors.
    pub fn conditions(&self) -> impl Iterator<Item = &Condition> {
        core::iter::once(&self.first).chain(self.rest.iter().map(|(_, cond)| cond))
    }
}

impl Serialize for ConditionTree {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut seq = serializer.serialize_seq(Some(self.len()))?;
        seq.serialize_element(&self.first)?;
        for (connector, condition) in &self.rest {
            seq.serialize_element(connector)?;
            seq.serialize_element(condition)?;
        }
        seq.end()
    }
}

impl fmt::Display for ConditionTree {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.first)?;
        for (connector, condition) in &self.rest {
            write!(f, " {} {condition}", connector.as_str())?;
        }
        Ok(())
    }
}
