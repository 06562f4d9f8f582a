//! Tests for CREATE TABLE, ALTER TABLE and DROP TABLE.

mod common;
use common::*;

use sqltree_core::ast::{AlterAction, ColumnDef, DataType, Statement};

#[test]
fn create_table() {
    let sql = "CREATE TABLE blog (id INT, name VARCHAR(20), score DOUBLE);";
    let c = parse_create(sql);
    assert_eq!(c.name, "blog");
    assert_eq!(
        c.columns,
        vec![
            ColumnDef::new("id", DataType::Int),
            ColumnDef::new("name", DataType::Varchar(20)),
            ColumnDef::new("score", DataType::Double),
        ]
    );
    round_trip(sql);
}

#[test]
fn create_table_all_data_types() {
    let sql = "create table t (a int, b integer, c tinyint, d smallint, e mediumint, \
               f bigint, g float, h double, i decimal, j char(1), k varchar(255));";
    let c = parse_create(sql);
    let types: Vec<_> = c.columns.iter().map(|def| def.data_type).collect();
    assert_eq!(
        types,
        vec![
            DataType::Int,
            DataType::Integer,
            DataType::Tinyint,
            DataType::Smallint,
            DataType::Mediumint,
            DataType::Bigint,
            DataType::Float,
            DataType::Double,
            DataType::Decimal,
            DataType::Char(1),
            DataType::Varchar(255),
        ]
    );
    round_trip(sql);
}

#[test]
fn alter_table_add() {
    let a = parse_alter("ALTER TABLE blog ADD age INT;");
    assert_eq!(a.name, "blog");
    assert_eq!(
        a.action,
        AlterAction::Add(ColumnDef::new("age", DataType::Int))
    );
    round_trip("ALTER TABLE blog ADD age INT;");
}

#[test]
fn alter_table_drop_column() {
    let a = parse_alter("alter table blog drop column age;");
    assert_eq!(
        a.action,
        AlterAction::Drop {
            name: String::from("age")
        }
    );
    round_trip("alter table blog drop column age;");
}

#[test]
fn alter_table_alter_column() {
    let a = parse_alter("ALTER TABLE blog ALTER COLUMN name CHAR(10);");
    assert_eq!(
        a.action,
        AlterAction::Alter(ColumnDef::new("name", DataType::Char(10)))
    );
    round_trip("ALTER TABLE blog ALTER COLUMN name CHAR(10);");
}

#[test]
fn drop_table() {
    let stmt = parse("drop table blog;");
    let Statement::Drop(d) = &stmt else {
        panic!("Expected DROP, got {stmt:?}");
    };
    assert_eq!(d.name, "blog");
    round_trip("drop table blog;");
}
