//! Abstract Syntax Tree (AST) types for SQL statements.
//!
//! Every node implements `serde::Serialize`, producing the nested
//! mapping/sequence shape consumers read, and `Display`, producing
//! canonical SQL.

mod expression;
mod statement;
mod types;

pub use expression::{
    AggregateFunction, ColumnExpr, CompareOp, Comparison, Condition, ConditionTree, Connector,
    Item, Number, Operand, SelectColumn,
};
pub use statement::{
    AlterTableStatement, Assignment, CreateTableStatement, DeleteStatement, DropTableStatement,
    InsertStatement, JoinClause, JoinCondition, JoinType, Limit, OrderDirection, OrderTerm,
    SelectStatement, Statement, StatementKind, TableRef, UpdateStatement,
};
pub use types::{AlterAction, ColumnDef, DataType};
