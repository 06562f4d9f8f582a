//! SQL parser implementation.

use super::error::SyntaxError;
use crate::ast::{
    AggregateFunction, AlterAction, AlterTableStatement, Assignment, ColumnDef, ColumnExpr,
    CompareOp, Comparison, Condition, ConditionTree, Connector, CreateTableStatement, DataType,
    DeleteStatement, DropTableStatement, InsertStatement, Item, JoinClause, JoinCondition,
    JoinType, Limit, Number, Operand, OrderDirection, OrderTerm, SelectColumn, SelectStatement,
    Statement, TableRef, UpdateStatement,
};
use crate::error::{Error, Result};
use crate::lexer::{Keyword, Lexer, Span, Token, TokenKind};

/// Deepest nesting of parenthesized condition groups.
pub const MAX_GROUP_DEPTH: usize = 64;

/// SQL parser for a single statement.
///
/// The parser pulls tokens from its lexer on demand and keeps one token of
/// lookahead. It is consumed by [`Parser::parse_statement`].
pub struct Parser<'a> {
    lexer: Lexer<'a>,
    current: Token,
    /// Condition groups currently open.
    depth: usize,
}

impl<'a> Parser<'a> {
    /// Creates a new parser for the given input.
    #[must_use]
    pub const fn new(input: &'a str) -> Self {
        Self {
            lexer: Lexer::new(input),
            current: Token::new(TokenKind::Eof, Span::new(0, 0)),
            depth: 0,
        }
    }

    /// Parses the input as one statement terminated by `;`.
    ///
    /// # Errors
    ///
    /// Returns `Error::Lex` if the input contains an unrecognized fragment and
    /// `Error::Syntax` if the tokens do not form a statement.
    pub fn parse_statement(mut self) -> Result<Statement> {
        self.advance()?;

        let statement = match self.current.as_keyword() {
            Some(Keyword::Select) => Statement::Select(self.parse_select_statement()?),
            Some(Keyword::Insert) => Statement::Insert(self.parse_insert_statement()?),
            Some(Keyword::Update) => Statement::Update(self.parse_update_statement()?),
            Some(Keyword::Delete) => Statement::Delete(self.parse_delete_statement()?),
            Some(Keyword::Create) => Statement::Create(self.parse_create_statement()?),
            Some(Keyword::Alter) => Statement::Alter(self.parse_alter_statement()?),
            Some(Keyword::Drop) => Statement::Drop(self.parse_drop_statement()?),
            _ => {
                return Err(
                    self.unexpected("SELECT, INSERT, UPDATE, DELETE, CREATE, ALTER or DROP")
                );
            }
        };

        self.expect(&TokenKind::Semicolon)?;
        self.expect(&TokenKind::Eof)?;
        Ok(statement)
    }

    // --- DML ---

    /// `SELECT columns FROM tables join* where? group? having? order? limit?`
    fn parse_select_statement(&mut self) -> Result<SelectStatement> {
        self.expect_keyword(Keyword::Select)?;
        let columns = self.parse_select_columns()?;

        self.expect_keyword(Keyword::From)?;
        let tables = self.parse_table_list()?;
        let joins = self.parse_joins()?;
        let where_clause = self.parse_optional_conditions(Keyword::Where)?;

        let group_by = if self.eat_keyword(Keyword::Group)? {
            self.expect_keyword(Keyword::By)?;
            self.parse_name_list()?
        } else {
            vec![]
        };

        let having = self.parse_optional_conditions(Keyword::Having)?;

        let order_by = if self.eat_keyword(Keyword::Order)? {
            self.expect_keyword(Keyword::By)?;
            self.parse_order_terms()?
        } else {
            vec![]
        };

        let limit = if self.eat_keyword(Keyword::Limit)? {
            Some(self.parse_limit()?)
        } else {
            None
        };

        Ok(SelectStatement {
            columns,
            tables,
            joins,
            where_clause,
            group_by,
            having,
            order_by,
            limit,
        })
    }

    /// `UPDATE tables SET item = item (, item = item)* where?`
    fn parse_update_statement(&mut self) -> Result<UpdateStatement> {
        self.expect_keyword(Keyword::Update)?;
        let tables = self.parse_table_list()?;
        self.expect_keyword(Keyword::Set)?;

        let mut assignments = vec![];
        loop {
            let name = self.parse_item()?;
            self.expect(&TokenKind::Eq)?;
            let value = self.parse_item()?;
            assignments.push(Assignment { name, value });

            if !self.eat(&TokenKind::Comma)? {
                break;
            }
        }

        let where_clause = self.parse_optional_conditions(Keyword::Where)?;

        Ok(UpdateStatement {
            tables,
            assignments,
            where_clause,
        })
    }

    /// `INSERT INTO? tables (names)? VALUES (values) (, (values))*`
    fn parse_insert_statement(&mut self) -> Result<InsertStatement> {
        self.expect_keyword(Keyword::Insert)?;
        self.eat_keyword(Keyword::Into)?;
        let tables = self.parse_table_list()?;

        let columns = if self.eat(&TokenKind::LeftParen)? {
            let names = self.parse_name_list()?;
            self.expect(&TokenKind::RightParen)?;
            names
        } else {
            vec![]
        };

        self.expect_keyword(Keyword::Values)?;
        let mut values = vec![];
        loop {
            self.expect(&TokenKind::LeftParen)?;
            let mut row = vec![];
            loop {
                row.push(self.parse_value()?);
                if !self.eat(&TokenKind::Comma)? {
                    break;
                }
            }
            self.expect(&TokenKind::RightParen)?;
            values.push(row);

            if !self.eat(&TokenKind::Comma)? {
                break;
            }
        }

        Ok(InsertStatement {
            tables,
            columns,
            values,
        })
    }

    /// `DELETE FROM tables where?`
    fn parse_delete_statement(&mut self) -> Result<DeleteStatement> {
        self.expect_keyword(Keyword::Delete)?;
        self.expect_keyword(Keyword::From)?;
        let tables = self.parse_table_list()?;
        let where_clause = self.parse_optional_conditions(Keyword::Where)?;

        Ok(DeleteStatement {
            tables,
            where_clause,
        })
    }

    // --- DDL ---

    /// `CREATE TABLE name (column_def (, column_def)*)`
    fn parse_create_statement(&mut self) -> Result<CreateTableStatement> {
        self.expect_keyword(Keyword::Create)?;
        self.expect_keyword(Keyword::Table)?;
        let name = self.expect_string()?;

        self.expect(&TokenKind::LeftParen)?;
        let mut columns = vec![];
        loop {
            columns.push(self.parse_column_def()?);
            if !self.eat(&TokenKind::Comma)? {
                break;
            }
        }
        self.expect(&TokenKind::RightParen)?;

        Ok(CreateTableStatement { name, columns })
    }

    /// `ALTER TABLE name (ADD def | DROP COLUMN name | ALTER COLUMN def)`
    fn parse_alter_statement(&mut self) -> Result<AlterTableStatement> {
        self.expect_keyword(Keyword::Alter)?;
        self.expect_keyword(Keyword::Table)?;
        let name = self.expect_string()?;

        let action = match self.current.as_keyword() {
            Some(Keyword::Add) => {
                self.advance()?;
                AlterAction::Add(self.parse_column_def()?)
            }
            Some(Keyword::Drop) => {
                self.advance()?;
                self.expect_keyword(Keyword::Column)?;
                AlterAction::Drop {
                    name: self.expect_string()?,
                }
            }
            Some(Keyword::Alter) => {
                self.advance()?;
                self.expect_keyword(Keyword::Column)?;
                AlterAction::Alter(self.parse_column_def()?)
            }
            _ => return Err(self.unexpected("ADD, DROP COLUMN or ALTER COLUMN")),
        };

        Ok(AlterTableStatement { name, action })
    }

    /// `DROP TABLE name`
    fn parse_drop_statement(&mut self) -> Result<DropTableStatement> {
        self.expect_keyword(Keyword::Drop)?;
        self.expect_keyword(Keyword::Table)?;
        let name = self.expect_string()?;
        Ok(DropTableStatement { name })
    }

    /// `name datatype`
    fn parse_column_def(&mut self) -> Result<ColumnDef> {
        let name = self.expect_string()?;
        let data_type = self.parse_data_type()?;
        Ok(ColumnDef { name, data_type })
    }

    /// Parses a data type; CHAR and VARCHAR require a size.
    fn parse_data_type(&mut self) -> Result<DataType> {
        let data_type = match self.current.as_keyword() {
            Some(Keyword::Int) => DataType::Int,
            Some(Keyword::Integer) => DataType::Integer,
            Some(Keyword::Tinyint) => DataType::Tinyint,
            Some(Keyword::Smallint) => DataType::Smallint,
            Some(Keyword::Mediumint) => DataType::Mediumint,
            Some(Keyword::Bigint) => DataType::Bigint,
            Some(Keyword::Float) => DataType::Float,
            Some(Keyword::Double) => DataType::Double,
            Some(Keyword::Decimal) => DataType::Decimal,
            Some(Keyword::Char) => {
                self.advance()?;
                return Ok(DataType::Char(self.parse_size()?));
            }
            Some(Keyword::Varchar) => {
                self.advance()?;
                return Ok(DataType::Varchar(self.parse_size()?));
            }
            _ => return Err(self.unexpected("data type")),
        };
        self.advance()?;
        Ok(data_type)
    }

    /// `( integer )`
    fn parse_size(&mut self) -> Result<u32> {
        self.expect(&TokenKind::LeftParen)?;
        let size = match &self.current.kind {
            TokenKind::Integer(n) => {
                u32::try_from(*n).map_err(|_| self.unexpected("size that fits in 32 bits"))?
            }
            _ => return Err(self.unexpected("size")),
        };
        self.advance()?;
        self.expect(&TokenKind::RightParen)?;
        Ok(size)
    }

    // --- Tables and joins ---

    /// Comma separated table references.
    fn parse_table_list(&mut self) -> Result<Vec<TableRef>> {
        let mut tables = vec![];
        loop {
            tables.push(self.parse_table_ref()?);
            if !self.eat(&TokenKind::Comma)? {
                break;
            }
        }
        Ok(tables)
    }

    /// `name (AS alias | alias)?`
    fn parse_table_ref(&mut self) -> Result<TableRef> {
        let name = self.expect_string()?;
        let alias = self.parse_optional_alias()?;
        Ok(TableRef { name, alias })
    }

    /// Parses JOIN clauses until the next token is not a join keyword.
    fn parse_joins(&mut self) -> Result<Vec<JoinClause>> {
        let mut joins = vec![];
        while let Some(join_type) = self.parse_join_type()? {
            let table = self.parse_table_ref()?;
            self.expect_keyword(Keyword::On)?;
            let left = self.parse_item()?;
            let op = self.parse_comparator()?;
            let right = self.parse_item()?;
            joins.push(JoinClause {
                join_type,
                table,
                on: JoinCondition { left, op, right },
            });
        }
        Ok(joins)
    }

    /// Consumes `JOIN` or `INNER|LEFT|RIGHT|FULL JOIN` if present.
    fn parse_join_type(&mut self) -> Result<Option<JoinType>> {
        let join_type = match self.current.as_keyword() {
            Some(Keyword::Join) => {
                self.advance()?;
                return Ok(Some(JoinType::Inner));
            }
            Some(Keyword::Inner) => JoinType::Inner,
            Some(Keyword::Left) => JoinType::Left,
            Some(Keyword::Right) => JoinType::Right,
            Some(Keyword::Full) => JoinType::Full,
            _ => return Ok(None),
        };
        self.advance()?;
        self.expect_keyword(Keyword::Join)?;
        Ok(Some(join_type))
    }

    /// Parses an optional alias: `AS name` or a bare identifier.
    ///
    /// Keywords are never identifiers, so a following clause keyword is
    /// never taken for an alias.
    fn parse_optional_alias(&mut self) -> Result<Option<String>> {
        if self.eat_keyword(Keyword::As)? {
            return Ok(Some(self.expect_string()?));
        }
        if let TokenKind::Identifier(alias) = &self.current.kind {
            let alias = alias.clone();
            self.advance()?;
            return Ok(Some(alias));
        }
        Ok(None)
    }

    // --- Columns ---

    /// Comma separated select columns with optional aliases.
    fn parse_select_columns(&mut self) -> Result<Vec<SelectColumn>> {
        let mut columns = vec![];
        loop {
            let value = self.parse_column_expr()?;
            let alias = self.parse_optional_alias()?;
            columns.push(SelectColumn { value, alias });

            if !self.eat(&TokenKind::Comma)? {
                break;
            }
        }
        Ok(columns)
    }

    /// `FUNC(arg) | FUNC(DISTINCT arg) | DISTINCT arg | (item) | item`
    fn parse_column_expr(&mut self) -> Result<ColumnExpr> {
        if let Some(function) = self
            .current
            .as_keyword()
            .and_then(AggregateFunction::from_keyword)
        {
            self.advance()?;
            self.expect(&TokenKind::LeftParen)?;
            let distinct = self.eat_keyword(Keyword::Distinct)?;
            let arg = if distinct {
                self.parse_distinct_arg()?
            } else {
                self.parse_item()?
            };
            self.expect(&TokenKind::RightParen)?;
            return Ok(ColumnExpr::Aggregate {
                function,
                distinct,
                arg,
            });
        }

        if self.eat_keyword(Keyword::Distinct)? {
            return Ok(ColumnExpr::Distinct(self.parse_distinct_arg()?));
        }

        if self.eat(&TokenKind::LeftParen)? {
            let item = self.parse_item()?;
            self.expect(&TokenKind::RightParen)?;
            return Ok(ColumnExpr::Item(item));
        }

        Ok(ColumnExpr::Item(self.parse_item()?))
    }

    /// The argument after DISTINCT, with or without parentheses.
    fn parse_distinct_arg(&mut self) -> Result<Item> {
        if self.eat(&TokenKind::LeftParen)? {
            let item = self.parse_item()?;
            self.expect(&TokenKind::RightParen)?;
            Ok(item)
        } else {
            self.parse_item()
        }
    }

    /// `string | number | * | string . item`
    ///
    /// A dotted name is folded into one qualified name string.
    fn parse_item(&mut self) -> Result<Item> {
        let mut qualifier = String::new();
        while let TokenKind::Identifier(head) | TokenKind::String(head) = &self.current.kind {
            if !self.next_is_dot()? {
                break;
            }
            qualifier.push_str(head);
            qualifier.push('.');
            self.advance()?;
            self.advance()?; // consume .
        }

        let item = match &self.current.kind {
            TokenKind::Identifier(name) => Item::Name(name.clone()),
            TokenKind::String(text) => Item::Text(text.clone()),
            TokenKind::Integer(n) => Item::Number(Number::Integer(*n)),
            TokenKind::Decimal(n) => Item::Number(Number::Decimal(*n)),
            TokenKind::Star => Item::Wildcard,
            _ => return Err(self.unexpected("column name, literal or '*'")),
        };
        self.advance()?;

        if qualifier.is_empty() {
            Ok(item)
        } else {
            qualifier.push_str(&item.into_path_segment());
            Ok(Item::Name(qualifier))
        }
    }

    /// Looks one token past the current one without consuming anything.
    fn next_is_dot(&self) -> Result<bool> {
        let next = self.lexer.clone().next_token()?;
        Ok(next.kind == TokenKind::Dot)
    }

    /// A column name for GROUP BY, ORDER BY and INSERT column lists.
    fn parse_name(&mut self) -> Result<String> {
        if !matches!(
            self.current.kind,
            TokenKind::Identifier(_) | TokenKind::String(_)
        ) {
            return Err(self.unexpected("column name"));
        }
        Ok(self.parse_item()?.into_path_segment())
    }

    /// Comma separated column names.
    fn parse_name_list(&mut self) -> Result<Vec<String>> {
        let mut names = vec![];
        loop {
            names.push(self.parse_name()?);
            if !self.eat(&TokenKind::Comma)? {
                break;
            }
        }
        Ok(names)
    }

    /// A literal in a VALUES tuple.
    fn parse_value(&mut self) -> Result<Item> {
        let item = match &self.current.kind {
            TokenKind::Identifier(name) => Item::Name(name.clone()),
            TokenKind::String(text) => Item::Text(text.clone()),
            TokenKind::Integer(n) => Item::Number(Number::Integer(*n)),
            TokenKind::Decimal(n) => Item::Number(Number::Decimal(*n)),
            _ => return Err(self.unexpected("value")),
        };
        self.advance()?;
        Ok(item)
    }

    // --- Conditions ---

    /// Parses `keyword condition_tree` if the keyword is present.
    fn parse_optional_conditions(&mut self, keyword: Keyword) -> Result<Option<ConditionTree>> {
        if self.eat_keyword(keyword)? {
            Ok(Some(self.parse_condition_tree()?))
        } else {
            Ok(None)
        }
    }

    /// `condition ((AND | OR) condition)*`, left to right with no precedence.
    fn parse_condition_tree(&mut self) -> Result<ConditionTree> {
        let first = self.parse_condition()?;
        let mut rest = vec![];
        loop {
            let connector = if self.eat_keyword(Keyword::And)? {
                Connector::And
            } else if self.eat_keyword(Keyword::Or)? {
                Connector::Or
            } else {
                break;
            };
            rest.push((connector, self.parse_condition()?));
        }
        Ok(ConditionTree { first, rest })
    }

    /// `( condition_tree ) | comparison`
    fn parse_condition(&mut self) -> Result<Condition> {
        if self.check(&TokenKind::LeftParen) {
            if self.depth == MAX_GROUP_DEPTH {
                return Err(self.unexpected("comparison (condition groups nested too deeply)"));
            }
            self.advance()?;
            self.depth += 1;
            let tree = self.parse_condition_tree();
            self.depth -= 1;
            let tree = tree?;
            self.expect(&TokenKind::RightParen)?;
            return Ok(Condition::Group(Box::new(tree)));
        }
        Ok(Condition::Compare(self.parse_comparison()?))
    }

    /// Parses one comparison node.
    fn parse_comparison(&mut self) -> Result<Comparison> {
        let left = self.parse_column_expr()?;

        let (op, right) = match self.current.as_keyword() {
            Some(Keyword::Like) => {
                self.advance()?;
                (CompareOp::Like, Operand::Item(self.parse_quoted()?))
            }
            Some(Keyword::In) => {
                self.advance()?;
                (CompareOp::In, Operand::List(self.parse_item_list()?))
            }
            Some(Keyword::Not) => {
                self.advance()?;
                if self.eat_keyword(Keyword::Like)? {
                    (CompareOp::NotLike, Operand::Item(self.parse_quoted()?))
                } else if self.eat_keyword(Keyword::In)? {
                    (CompareOp::NotIn, Operand::List(self.parse_item_list()?))
                } else {
                    return Err(self.unexpected("LIKE or IN"));
                }
            }
            Some(Keyword::Between) => {
                self.advance()?;
                let low = self.parse_item()?;
                self.expect_keyword(Keyword::And)?;
                let high = self.parse_item()?;
                (CompareOp::Between, Operand::Range(low, high))
            }
            Some(Keyword::Is) => {
                self.advance()?;
                let op = if self.eat_keyword(Keyword::Not)? {
                    CompareOp::NotNull
                } else {
                    CompareOp::Null
                };
                self.expect_keyword(Keyword::Null)?;
                (op, Operand::Nothing)
            }
            _ => {
                let op = self.parse_comparator()?;
                (op, Operand::Item(self.parse_item()?))
            }
        };

        Ok(Comparison { left, op, right })
    }

    /// One of `=`, `<>`, `<`, `<=`, `>`, `>=`.
    fn parse_comparator(&mut self) -> Result<CompareOp> {
        let op = match self.current.kind {
            TokenKind::Eq => CompareOp::Eq,
            TokenKind::NotEq => CompareOp::NotEq,
            TokenKind::Lt => CompareOp::Lt,
            TokenKind::LtEq => CompareOp::LtEq,
            TokenKind::Gt => CompareOp::Gt,
            TokenKind::GtEq => CompareOp::GtEq,
            _ => return Err(self.unexpected("comparison operator")),
        };
        self.advance()?;
        Ok(op)
    }

    /// A quoted string literal.
    fn parse_quoted(&mut self) -> Result<Item> {
        match &self.current.kind {
            TokenKind::String(text) => {
                let item = Item::Text(text.clone());
                self.advance()?;
                Ok(item)
            }
            _ => Err(self.unexpected("quoted string")),
        }
    }

    /// `( item (, item)* )`
    fn parse_item_list(&mut self) -> Result<Vec<Item>> {
        self.expect(&TokenKind::LeftParen)?;
        let mut items = vec![];
        loop {
            items.push(self.parse_item()?);
            if !self.eat(&TokenKind::Comma)? {
                break;
            }
        }
        self.expect(&TokenKind::RightParen)?;
        Ok(items)
    }

    // --- ORDER BY and LIMIT ---

    /// `name (ASC | DESC)? (, name (ASC | DESC)?)*`
    fn parse_order_terms(&mut self) -> Result<Vec<OrderTerm>> {
        let mut terms = vec![];
        loop {
            let name = self.parse_name()?;
            let direction = if self.eat_keyword(Keyword::Desc)? {
                OrderDirection::Desc
            } else {
                self.eat_keyword(Keyword::Asc)?;
                OrderDirection::Asc
            };
            terms.push(OrderTerm { name, direction });

            if !self.eat(&TokenKind::Comma)? {
                break;
            }
        }
        Ok(terms)
    }

    /// `count` or `offset, count`; the one-argument form gets offset 0.
    fn parse_limit(&mut self) -> Result<Limit> {
        let first = self.parse_count()?;
        if self.eat(&TokenKind::Comma)? {
            let count = self.parse_count()?;
            Ok(Limit {
                offset: first,
                count,
            })
        } else {
            Ok(Limit {
                offset: 0,
                count: first,
            })
        }
    }

    fn parse_count(&mut self) -> Result<u64> {
        let count = match &self.current.kind {
            TokenKind::Integer(n) => {
                u64::try_from(*n).map_err(|_| self.unexpected("non-negative integer"))?
            }
            _ => return Err(self.unexpected("integer")),
        };
        self.advance()?;
        Ok(count)
    }

    // --- Helper methods ---

    /// The one place syntax errors are raised: the current token is not
    /// what the grammar accepts here.
    fn unexpected(&self, expected: &str) -> Error {
        Error::Syntax(SyntaxError::unexpected(
            expected,
            self.current.kind.clone(),
            self.current.span,
        ))
    }

    /// Advances to the next token.
    fn advance(&mut self) -> Result<()> {
        self.current = self.lexer.next_token()?;
        Ok(())
    }

    /// Checks if the current token matches the given kind.
    fn check(&self, kind: &TokenKind) -> bool {
        core::mem::discriminant(&self.current.kind) == core::mem::discriminant(kind)
    }

    /// Consumes the current token if it matches the given kind.
    fn eat(&mut self, kind: &TokenKind) -> Result<bool> {
        if self.check(kind) {
            self.advance()?;
            Ok(true)
        } else {
            Ok(false)
        }
    }

    /// Consumes the current token if it is the given keyword.
    fn eat_keyword(&mut self, keyword: Keyword) -> Result<bool> {
        if self.current.as_keyword() == Some(keyword) {
            self.advance()?;
            Ok(true)
        } else {
            Ok(false)
        }
    }

    /// Expects the current token to be the given kind.
    fn expect(&mut self, kind: &TokenKind) -> Result<()> {
        if self.eat(kind)? {
            Ok(())
        } else {
            Err(self.unexpected(&kind.to_string()))
        }
    }

    /// Expects the current token to be the given keyword.
    fn expect_keyword(&mut self, keyword: Keyword) -> Result<()> {
        if self.eat_keyword(keyword)? {
            Ok(())
        } else {
            Err(self.unexpected(keyword.as_str()))
        }
    }

    /// Expects and returns an identifier or quoted string.
    fn expect_string(&mut self) -> Result<String> {
        match &self.current.kind {
            TokenKind::Identifier(text) | TokenKind::String(text) => {
                let text = text.clone();
                self.advance()?;
                Ok(text)
            }
            _ => Err(self.unexpected("name")),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(sql: &str) -> Result<Statement> {
        Parser::new(sql).parse_statement()
    }

    fn select(sql: &str) -> SelectStatement {
        match parse(sql).unwrap() {
            Statement::Select(select) => select,
            other => panic!("Expected SELECT statement, got {other:?}"),
        }
    }

    fn syntax_err(sql: &str) -> SyntaxError {
        match parse(sql) {
            Err(Error::Syntax(err)) => err,
            other => panic!("Expected syntax error, got {other:?}"),
        }
    }

    #[test]
    fn test_simple_select() {
        let stmt = parse("SELECT id, name FROM users;").unwrap();
        assert!(matches!(stmt, Statement::Select(_)));
    }

    #[test]
    fn test_dotted_name_is_one_string() {
        let select = select("SELECT b.name FROM blog b;");
        assert_eq!(
            select.columns[0].value,
            ColumnExpr::Item(Item::name("b.name"))
        );
        assert_eq!(select.tables[0], TableRef::new("blog").alias("b"));
    }

    #[test]
    fn test_qualified_wildcard() {
        let select = select("SELECT u.* FROM users u;");
        assert_eq!(select.columns[0].value, ColumnExpr::Item(Item::name("u.*")));
    }

    #[test]
    fn test_keyword_is_never_alias() {
        let select = select("SELECT id FROM users WHERE id = 1;");
        assert_eq!(select.tables[0].alias, None);
        assert!(select.where_clause.is_some());
    }

    #[test]
    fn test_condition_without_precedence() {
        let select = select("SELECT * FROM t WHERE a = 1 OR b = 2 AND c = 3;");
        let tree = select.where_clause.unwrap();
        assert_eq!(tree.len(), 5);
        assert_eq!(tree.rest[0].0, Connector::Or);
        assert_eq!(tree.rest[1].0, Connector::And);
        assert!(tree.conditions().all(|c| matches!(c, Condition::Compare(_))));
    }

    #[test]
    fn test_parenthesized_group() {
        let select = select("SELECT * FROM t WHERE a = 1 AND (b = 2 OR c = 3);");
        let tree = select.where_clause.unwrap();
        assert_eq!(tree.len(), 3);
        let Condition::Group(group) = &tree.rest[0].1 else {
            panic!("Expected group");
        };
        assert_eq!(group.len(), 3);
    }

    #[test]
    fn test_limit_single_argument_gets_zero_offset() {
        let select = select("SELECT * FROM t LIMIT 10;");
        assert_eq!(
            select.limit,
            Some(Limit {
                offset: 0,
                count: 10
            })
        );
    }

    #[test]
    fn test_plain_join_is_inner() {
        let select = select("SELECT * FROM a JOIN b ON a.id = b.id;");
        assert_eq!(select.joins[0].join_type, JoinType::Inner);
        assert_eq!(select.joins[0].on.left, Item::name("a.id"));
    }

    #[test]
    fn test_missing_semicolon() {
        let err = syntax_err("SELECT * FROM t");
        assert!(err.is_eof());
        assert_eq!(err.expected, "';'");
    }

    #[test]
    fn test_trailing_tokens_rejected() {
        let err = syntax_err("DROP TABLE t; DROP TABLE u;");
        assert_eq!(err.expected, "end of input");
        assert_eq!(err.found, TokenKind::Keyword(Keyword::Drop));
    }

    #[test]
    fn test_lex_error_surfaces() {
        assert!(matches!(
            parse("SELECT a FROM t WHERE a = -1;"),
            Err(Error::Lex(_))
        ));
    }

    #[test]
    fn test_unknown_statement() {
        let err = syntax_err("TRUNCATE t;");
        assert_eq!(err.span, Span::new(0, 8));
    }

    #[test]
    fn test_group_nesting_limit() {
        let nested = |depth: usize| {
            format!(
                "SELECT * FROM t WHERE {}a = 1{};",
                "(".repeat(depth),
                ")".repeat(depth)
            )
        };
        assert!(parse(&nested(MAX_GROUP_DEPTH)).is_ok());

        let err = syntax_err(&nested(MAX_GROUP_DEPTH + 1));
        assert_eq!(err.found, TokenKind::LeftParen);
        assert_eq!(err.span.start, 22 + MAX_GROUP_DEPTH);
    }

    #[test]
    fn test_long_dotted_name() {
        let name = vec!["s"; 10_000].join(".");
        let select = select(&format!("SELECT {name} FROM t;"));
        assert_eq!(select.columns[0].value, ColumnExpr::Item(Item::Name(name)));
    }

    #[test]
    fn test_varchar_requires_size() {
        let err = syntax_err("CREATE TABLE t (name VARCHAR);");
        assert_eq!(err.expected, "'('");
    }
}
