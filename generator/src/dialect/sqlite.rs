//! SQLite DDL
//!
//! SQLite cannot alter a column or add a foreign key to an existing table.
//! Foreign keys are declared inside `CREATE TABLE` instead, and the two
//! unsupported builders return [`DdlError::Unsupported`].

use ddlgen_types::{Dialect, Entity, Field, ForeignKey, LogicalType};

use crate::common::{self, ColumnSql};
use crate::{DdlError, DdlStrategy, Operation, Quote, Result, Statement, StatementKind, Terminator};

const DIALECT: Dialect = Dialect::Sqlite;
const QUOTE: Quote = Quote::Double;

#[derive(Debug, Clone, Copy, Default)]
pub struct SqliteStrategy;

impl SqliteStrategy {
    /// `PRIMARY KEY [AUTOINCREMENT]` precedes `NOT NULL`. `AUTOINCREMENT`
    /// is only valid on the primary key and is dropped elsewhere.
    fn column_definition(&self, field: &Field) -> String {
        ColumnSql::new(DIALECT, QUOTE, field, &self.map_type(field))
            .primary_key()
            .clause(field.primary_key && field.auto_increment, " AUTOINCREMENT")
            .not_null()
            .default_value()
            .finish()
    }

    fn inline_foreign_key(foreign_key: &ForeignKey) -> String {
        format!(
            "FOREIGN KEY ({}) REFERENCES {} ({})",
            QUOTE.wrap(&foreign_key.column_name),
            QUOTE.wrap(&foreign_key.referenced_table_name),
            QUOTE.wrap(&foreign_key.referenced_column_name),
        )
    }

    /// `CREATE TABLE` with foreign keys appended after the columns, unterminated
    #[must_use]
    pub fn create_table_with_foreign_keys(&self, entity: &Entity) -> String {
        let columns = entity.fields.iter().map(|f| self.column_definition(f));
        let foreign_keys = entity.foreign_keys.iter().map(Self::inline_foreign_key);
        common::create_table(QUOTE, entity, columns.chain(foreign_keys), "")
    }
}

impl DdlStrategy for SqliteStrategy {
    fn dialect(&self) -> Dialect {
        DIALECT
    }

    fn quote(&self) -> Quote {
        QUOTE
    }

    fn terminator(&self) -> Terminator {
        Terminator::Semicolon
    }

    fn map_type(&self, field: &Field) -> String {
        let Some(ty) = common::logical_type(DIALECT, field) else {
            return "TEXT".to_string();
        };

        let sql_type = match ty {
            LogicalType::Integer
            | LogicalType::Long
            | LogicalType::Short
            | LogicalType::Byte
            | LogicalType::Boolean
            | LogicalType::Duration => "INTEGER",
            LogicalType::Float | LogicalType::Double => "REAL",
            LogicalType::Bytes => "BLOB",
            // Decimals, text, dates, UUIDs, JSON and arrays are all stored as TEXT
            _ => "TEXT",
        };
        sql_type.to_string()
    }

    fn create_table(&self, entity: &Entity) -> String {
        let columns = entity.fields.iter().map(|f| self.column_definition(f));
        common::create_table(QUOTE, entity, columns, ";")
    }

    fn drop_table(&self, table_name: &str) -> String {
        format!("DROP TABLE IF EXISTS {};", QUOTE.wrap(table_name))
    }

    fn add_column(&self, table_name: &str, field: &Field) -> String {
        format!(
            "ALTER TABLE {} ADD COLUMN {};",
            QUOTE.wrap(table_name),
            self.column_definition(field)
        )
    }

    fn drop_column(&self, table_name: &str, column_name: &str) -> String {
        format!(
            "ALTER TABLE {} DROP COLUMN {};",
            QUOTE.wrap(table_name),
            QUOTE.wrap(column_name)
        )
    }

    fn modify_column(&self, _table_name: &str, _field: &Field) -> Result<String> {
        Err(DdlError::Unsupported {
            dialect: DIALECT,
            operation: Operation::ModifyColumn,
        })
    }

    fn add_foreign_key(&self, _table_name: &str, _foreign_key: &ForeignKey) -> Result<String> {
        Err(DdlError::Unsupported {
            dialect: DIALECT,
            operation: Operation::AddForeignKey,
        })
    }

    /// SQLite has no comment syntax; comments are dropped
    fn add_comment(&self, _entity: &Entity) -> String {
        String::new()
    }

    fn plan(&self, entities: &[Entity]) -> Vec<Statement> {
        let pragma = Statement::new(StatementKind::Pragma, "PRAGMA foreign_keys = ON");
        let tables = entities.iter().map(|e| {
            Statement::new(StatementKind::Table, self.create_table_with_foreign_keys(e))
        });

        std::iter::once(pragma).chain(tables).collect()
    }
}
