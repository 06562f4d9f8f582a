//! SQL statement AST types.

use core::fmt;

use serde::ser::{SerializeMap, SerializeSeq};
use serde::{Serialize, Serializer};

use super::expression::{
    write_ident, write_list, write_path, CompareOp, ConditionTree, Item, SelectColumn,
};
use super::types::{AlterAction, ColumnDef};

/// Serializes an optional clause as its value, or as `[]` when absent.
#[allow(clippy::ref_option)]
fn some_or_empty<T: Serialize, S: Serializer>(
    value: &Option<T>,
    serializer: S,
) -> Result<S::Ok, S::Error> {
    match value {
        Some(value) => value.serialize(serializer),
        None => serializer.serialize_seq(Some(0))?.end(),
    }
}

/// Writes comma separated column names.
fn write_names(f: &mut fmt::Formatter<'_>, names: &[String]) -> fmt::Result {
    for (i, name) in names.iter().enumerate() {
        if i > 0 {
            f.write_str(", ")?;
        }
        write_path(f, name)?;
    }
    Ok(())
}

/// A table reference: `name`, `name alias` or `name AS alias`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TableRef {
    /// Table name.
    pub name: String,
    /// Alias.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub alias: Option<String>,
}

impl TableRef {
    /// Creates a table reference without alias.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            alias: None,
        }
    }

    /// Adds an alias to this table reference.
    #[must_use]
    pub fn alias(self, alias: impl Into<String>) -> Self {
        Self {
            alias: Some(alias.into()),
            ..self
        }
    }
}

impl fmt::Display for TableRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_ident(f, &self.name)?;
        if let Some(alias) = &self.alias {
            f.write_str(" AS ")?;
            write_ident(f, alias)?;
        }
        Ok(())
    }
}

/// Join type. A plain `JOIN` is an inner join.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum JoinType {
    Inner,
    Left,
    Right,
    Full,
}

impl JoinType {
    /// Returns the SQL representation.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Inner => "INNER JOIN",
            Self::Left => "LEFT JOIN",
            Self::Right => "RIGHT JOIN",
            Self::Full => "FULL JOIN",
        }
    }
}

/// The `ON left op right` predicate of a join.
#[derive(Debug, Clone, PartialEq)]
pub struct JoinCondition {
    /// Left operand.
    pub left: Item,
    /// One of `=`, `<>`, `<`, `<=`, `>`, `>=`.
    pub op: CompareOp,
    /// Right operand.
    pub right: Item,
}

/// A JOIN clause.
#[derive(Debug, Clone, PartialEq)]
pub struct JoinClause {
    /// The type of join.
    pub join_type: JoinType,
    /// The joined table.
    pub table: TableRef,
    /// The join condition.
    pub on: JoinCondition,
}

impl Serialize for JoinClause {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(4))?;
        map.serialize_entry("join_type", &self.join_type)?;
        map.serialize_entry("table", &self.table)?;
        map.serialize_entry("on", &[&self.on.left, &self.on.right])?;
        map.serialize_entry("compare", &self.on.op)?;
        map.end()
    }
}

impl fmt::Display for JoinClause {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} ON {} {} {}",
            self.join_type.as_str(),
            self.table,
            self.on.left,
            self.on.op.as_str(),
            self.on.right
        )
    }
}

/// Order direction for ORDER BY.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum OrderDirection {
    /// Ascending order (default).
    #[default]
    Asc,
    /// Descending order.
    Desc,
}

impl OrderDirection {
    /// Returns the SQL representation.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Asc => "ASC",
            Self::Desc => "DESC",
        }
    }
}

/// An ORDER BY entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OrderTerm {
    /// Column name, possibly qualified.
    pub name: String,
    /// The direction, ASC unless DESC was written.
    pub direction: OrderDirection,
}

/// LIMIT clause, normalized to an explicit offset.
///
/// Serialized as `[offset, count]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Limit {
    /// Rows to skip; 0 for the single-argument form.
    pub offset: u64,
    /// Rows to return.
    pub count: u64,
}

impl Serialize for Limit {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        [self.offset, self.count].serialize(serializer)
    }
}

/// A SELECT statement.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SelectStatement {
    /// The select list.
    #[serde(rename = "column")]
    pub columns: Vec<SelectColumn>,
    /// The FROM tables.
    #[serde(rename = "table")]
    pub tables: Vec<TableRef>,
    /// JOIN clauses in source order.
    #[serde(rename = "join")]
    pub joins: Vec<JoinClause>,
    /// WHERE conditions.
    #[serde(rename = "where", serialize_with = "some_or_empty")]
    pub where_clause: Option<ConditionTree>,
    /// GROUP BY names.
    #[serde(rename = "group")]
    pub group_by: Vec<String>,
    /// HAVING conditions.
    #[serde(serialize_with = "some_or_empty")]
    pub having: Option<ConditionTree>,
    /// ORDER BY terms.
    #[serde(rename = "order")]
    pub order_by: Vec<OrderTerm>,
    /// LIMIT clause.
    #[serde(serialize_with = "some_or_empty")]
    pub limit: Option<Limit>,
}

impl fmt::Display for SelectStatement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("SELECT ")?;
        write_list(f, &self.columns)?;
        f.write_str(" FROM ")?;
        write_list(f, &self.tables)?;
        for join in &self.joins {
            write!(f, " {join}")?;
        }
        if let Some(tree) = &self.where_clause {
            write!(f, " WHERE {tree}")?;
        }
        if !self.group_by.is_empty() {
            f.write_str(" GROUP BY ")?;
            write_names(f, &self.group_by)?;
        }
        if let Some(tree) = &self.having {
            write!(f, " HAVING {tree}")?;
        }
        for (i, term) in self.order_by.iter().enumerate() {
            f.write_str(if i == 0 { " ORDER BY " } else { ", " })?;
            write_path(f, &term.name)?;
            write!(f, " {}", term.direction.as_str())?;
        }
        if let Some(limit) = &self.limit {
            write!(f, " LIMIT {}, {}", limit.offset, limit.count)?;
        }
        Ok(())
    }
}

/// An assignment in UPDATE SET.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Assignment {
    /// Assigned column.
    pub name: Item,
    /// New value.
    pub value: Item,
}

/// An UPDATE statement.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct UpdateStatement {
    /// Updated tables.
    #[serde(rename = "table")]
    pub tables: Vec<TableRef>,
    /// SET assignments.
    #[serde(rename = "column")]
    pub assignments: Vec<Assignment>,
    /// WHERE conditions.
    #[serde(rename = "where", serialize_with = "some_or_empty")]
    pub where_clause: Option<ConditionTree>,
}

impl fmt::Display for UpdateStatement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("UPDATE ")?;
        write_list(f, &self.tables)?;
        for (i, assignment) in self.assignments.iter().enumerate() {
            f.write_str(if i == 0 { " SET " } else { ", " })?;
            write!(f, "{} = {}", assignment.name, assignment.value)?;
        }
        if let Some(tree) = &self.where_clause {
            write!(f, " WHERE {tree}")?;
        }
        Ok(())
    }
}

/// An INSERT statement.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct InsertStatement {
    /// Target tables.
    #[serde(rename = "table")]
    pub tables: Vec<TableRef>,
    /// Column names (empty when not listed).
    pub columns: Vec<String>,
    /// Value tuples in source order.
    pub values: Vec<Vec<Item>>,
}

impl fmt::Display for InsertStatement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("INSERT INTO ")?;
        write_list(f, &self.tables)?;
        if !self.columns.is_empty() {
            f.write_str(" (")?;
            write_names(f, &self.columns)?;
            f.write_str(")")?;
        }
        for (i, row) in self.values.iter().enumerate() {
            f.write_str(if i == 0 { " VALUES (" } else { ", (" })?;
            write_list(f, row)?;
            f.write_str(")")?;
        }
        Ok(())
    }
}

/// A DELETE statement.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DeleteStatement {
    /// Target tables.
    #[serde(rename = "table")]
    pub tables: Vec<TableRef>,
    /// WHERE conditions.
    #[serde(rename = "where", serialize_with = "some_or_empty")]
    pub where_clause: Option<ConditionTree>,
}

impl fmt::Display for DeleteStatement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("DELETE FROM ")?;
        write_list(f, &self.tables)?;
        if let Some(tree) = &self.where_clause {
            write!(f, " WHERE {tree}")?;
        }
        Ok(())
    }
}

/// A CREATE TABLE statement.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CreateTableStatement {
    /// Table name.
    #[serde(rename = "table")]
    pub name: String,
    /// Column definitions in source order.
    pub columns: Vec<ColumnDef>,
}

impl fmt::Display for CreateTableStatement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("CREATE TABLE ")?;
        write_ident(f, &self.name)?;
        f.write_str(" (")?;
        write_list(f, &self.columns)?;
        f.write_str(")")
    }
}

/// An ALTER TABLE statement.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AlterTableStatement {
    /// Table name.
    #[serde(rename = "table")]
    pub name: String,
    /// The column change.
    #[serde(rename = "columns")]
    pub action: AlterAction,
}

impl fmt::Display for AlterTableStatement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("ALTER TABLE ")?;
        write_ident(f, &self.name)?;
        write!(f, " {}", self.action)
    }
}

/// A DROP TABLE statement.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DropTableStatement {
    /// Table name.
    #[serde(rename = "table")]
    pub name: String,
}

/// The statement kinds, named by their leading keyword.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StatementKind {
    Select,
    Insert,
    Update,
    Delete,
    Create,
    Alter,
    Drop,
}

impl StatementKind {
    /// Returns the leading keyword, as found in the `type` field.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Select => "SELECT",
            Self::Insert => "INSERT",
            Self::Update => "UPDATE",
            Self::Delete => "DELETE",
            Self::Create => "CREATE",
            Self::Alter => "ALTER",
            Self::Drop => "DROP",
        }
    }
}

impl fmt::Display for StatementKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A SQL statement.
///
/// Serializes to a mapping whose `type` field is the leading keyword,
/// followed by the fields of the statement.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "UPPERCASE")]
pub enum Statement {
    /// SELECT statement.
    Select(SelectStatement),
    /// INSERT statement.
    Insert(InsertStatement),
    /// UPDATE statement.
    Update(UpdateStatement),
    /// DELETE statement.
    Delete(DeleteStatement),
    /// CREATE TABLE statement.
    Create(CreateTableStatement),
    /// ALTER TABLE statement.
    Alter(AlterTableStatement),
    /// DROP TABLE statement.
    Drop(DropTableStatement),
}

impl Statement {
    /// Returns the kind of this statement.
    #[must_use]
    pub const fn kind(&self) -> StatementKind {
        match self {
            Self::Select(_) => StatementKind::Select,
            Self::Insert(_) => StatementKind::Insert,
            Self::Update(_) => StatementKind::Update,
            Self::Delete(_) => StatementKind::Delete,
            Self::Create(_) => StatementKind::Create,
            Self::Alter(_) => StatementKind::Alter,
            Self::Drop(_) => StatementKind::Drop,
        }
    }

    /// Renders the statement as nested mappings and sequences.
    ///
    /// # Errors
    ///
    /// Propagates the error of `serde_json::to_value`; the AST types only
    /// produce string keys, so this does not fail in practice.
    pub fn to_value(&self) -> Result<serde_json::Value, serde_json::Error> {
        serde_json::to_value(self)
    }
}

/// Canonical SQL text: uppercase keywords, explicit `AS`, explicit LIMIT
/// offset and a trailing `;`. The text parses back to an equal statement.
impl fmt::Display for Statement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Select(s) => write!(f, "{s};"),
            Self::Insert(s) => write!(f, "{s};"),
            Self::Update(s) => write!(f, "{s};"),
            Self::Delete(s) => write!(f, "{s};"),
            Self::Create(s) => write!(f, "{s};"),
            Self::Alter(s) => write!(f, "{s};"),
            Self::Drop(s) => {
                f.write_str("DROP TABLE ")?;
                write_ident(f, &s.name)?;
                f.write_str(";")
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_order_direction() {
        assert_eq!(OrderDirection::default(), OrderDirection::Asc);
        assert_eq!(OrderDirection::Desc.as_str(), "DESC");
    }

    #[test]
    fn test_join_type() {
        assert_eq!(JoinType::Inner.as_str(), "INNER JOIN");
        assert_eq!(serde_json::to_value(JoinType::Full).unwrap(), json!("FULL"));
    }

    #[test]
    fn test_table_ref_builder() {
        let table = TableRef::new("blog").alias("b");
        assert_eq!(table.alias.as_deref(), Some("b"));
        assert_eq!(table.to_string(), "blog AS b");
        assert_eq!(
            serde_json::to_value(&table).unwrap(),
            json!({"name": "blog", "alias": "b"})
        );
    }

    #[test]
    fn test_empty_select_clauses_render_as_empty_sequences() {
        let stmt = Statement::Select(SelectStatement {
            columns: vec![],
            tables: vec![TableRef::new("blog")],
            joins: vec![],
            where_clause: None,
            group_by: vec![],
            having: None,
            order_by: vec![],
            limit: None,
        });
        let value = stmt.to_value().unwrap();
        assert_eq!(value["type"], json!("SELECT"));
        for key in ["join", "where", "group", "having", "order", "limit"] {
            assert_eq!(value[key], json!([]), "field {key}");
        }
    }

    #[test]
    fn test_limit_json() {
        let limit = Limit {
            offset: 0,
            count: 100,
        };
        assert_eq!(serde_json::to_value(limit).unwrap(), json!([0, 100]));
    }

    #[test]
    fn test_statement_kind() {
        let stmt = Statement::Drop(DropTableStatement {
            name: String::from("blog"),
        });
        assert_eq!(stmt.kind(), StatementKind::Drop);
        assert_eq!(stmt.kind().to_string(), "DROP");
        assert_eq!(stmt.to_string(), "DROP TABLE blog;");
        assert_eq!(
            stmt.to_value().unwrap(),
            json!({"type": "DROP", "table": "blog"})
        );
    }
}
