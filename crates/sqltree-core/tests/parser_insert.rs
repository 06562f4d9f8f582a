//! Tests for INSERT statements.

mod common;
use common::*;

use sqltree_core::ast::{Item, Number, TableRef};

#[test]
fn insert_with_columns() {
    let sql = "INSERT INTO blog (name, age) VALUES ('zhangsan', 18);";
    let i = parse_insert(sql);
    assert_eq!(i.tables, vec![TableRef::new("blog")]);
    assert_eq!(i.columns, vec!["name", "age"]);
    assert_eq!(
        i.values,
        vec![vec![Item::text("zhangsan"), Item::integer(18)]]
    );
    round_trip(sql);
}

#[test]
fn insert_without_columns() {
    let i = parse_insert("INSERT INTO blog VALUES (1, 'a');");
    assert!(i.columns.is_empty());
    assert_eq!(i.values.len(), 1);
    round_trip("INSERT INTO blog VALUES (1, 'a');");
}

#[test]
fn insert_into_is_optional() {
    assert_eq!(
        parse("insert blog values (1);"),
        parse("INSERT INTO blog VALUES (1);")
    );
}

#[test]
fn insert_multiple_rows() {
    let i = parse_insert("INSERT INTO t (a, b) VALUES (1, 2), (3, 4), (5, 6);");
    assert_eq!(i.values.len(), 3);
    assert_eq!(i.values[2], vec![Item::integer(5), Item::integer(6)]);
    round_trip("INSERT INTO t (a, b) VALUES (1, 2), (3, 4), (5, 6);");
}

#[test]
fn insert_decimal_and_name_values() {
    let i = parse_insert("INSERT INTO t VALUES (1.5, other);");
    assert_eq!(
        i.values[0],
        vec![Item::Number(Number::Decimal(1.5)), Item::name("other")]
    );
}

#[test]
fn insert_keeps_quotes_escaped() {
    let i = parse_insert("INSERT INTO t VALUES ('it''s');");
    assert_eq!(i.values[0], vec![Item::text("it's")]);
    round_trip("INSERT INTO t VALUES ('it''s');");
}

#[test]
fn insert_quoted_column_names() {
    let i = parse_insert("INSERT INTO t (\"select\", \"full name\") VALUES (1, 'a');");
    assert_eq!(i.columns, vec!["select", "full name"]);
    round_trip("INSERT INTO t (\"select\", \"full name\") VALUES (1, 'a');");
}
