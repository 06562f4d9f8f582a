//! Column definitions and data types for DDL statements.

use core::fmt;

use serde::{Serialize, Serializer};

use super::expression::write_ident;

/// Column data types accepted by CREATE TABLE and ALTER TABLE.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DataType {
    Int,
    Integer,
    Tinyint,
    Smallint,
    Mediumint,
    Bigint,
    Float,
    Double,
    Decimal,
    /// Fixed-length character string with its size.
    Char(u32),
    /// Variable-length character string with its size.
    Varchar(u32),
}

impl fmt::Display for DataType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Int => f.write_str("INT"),
            Self::Integer => f.write_str("INTEGER"),
            Self::Tinyint => f.write_str("TINYINT"),
            Self::Smallint => f.write_str("SMALLINT"),
            Self::Mediumint => f.write_str("MEDIUMINT"),
            Self::Bigint => f.write_str("BIGINT"),
            Self::Float => f.write_str("FLOAT"),
            Self::Double => f.write_str("DOUBLE"),
            Self::Decimal => f.write_str("DECIMAL"),
            Self::Char(size) => write!(f, "CHAR({size})"),
            Self::Varchar(size) => write!(f, "VARCHAR({size})"),
        }
    }
}

impl Serialize for DataType {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

/// A column definition: `name datatype`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ColumnDef {
    /// Column name.
    pub name: String,
    /// Column type.
    #[serde(rename = "datatype")]
    pub data_type: DataType,
}

impl ColumnDef {
    /// Creates a new column definition.
    #[must_use]
    pub fn new(name: impl Into<String>, data_type: DataType) -> Self {
        Self {
            name: name.into(),
            data_type,
        }
    }
}

impl fmt::Display for ColumnDef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_ident(f, &self.name)?;
        write!(f, " {}", self.data_type)
    }
}

/// The single column change performed by ALTER TABLE.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum AlterAction {
    /// `ADD name datatype`
    Add(ColumnDef),
    /// `DROP COLUMN name`
    Drop {
        /// Column to remove.
        name: String,
    },
    /// `ALTER COLUMN name datatype`
    Alter(ColumnDef),
}

impl fmt::Display for AlterAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Add(def) => write!(f, "ADD {def}"),
            Self::Drop { name } => {
                f.write_str("DROP COLUMN ")?;
                write_ident(f, name)
            }
            Self::Alter(def) => write!(f, "ALTER COLUMN {def}"),
        }
    }
}
