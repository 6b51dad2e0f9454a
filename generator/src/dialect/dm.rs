//! Dameng (DM) DDL
//!
//! Autoincrement columns use an inline `IDENTITY(1,1)`. A `<table>_<column>_seq`
//! sequence is still planned for each of them even though no column refers to it.

use ddlgen_types::{Dialect, Entity, Field, ForeignKey, LogicalType};

use super::h2::string_type;
use crate::common::{self, ColumnSql};
use crate::{DdlStrategy, Quote, Result, Statement, StatementKind, Terminator};

const DIALECT: Dialect = Dialect::Dm;
const QUOTE: Quote = Quote::Double;

#[derive(Debug, Clone, Copy, Default)]
pub struct DmStrategy;

impl DmStrategy {
    fn column_definition(&self, field: &Field) -> String {
        ColumnSql::new(DIALECT, QUOTE, field, &self.map_type(field))
            .clause(field.auto_increment, " IDENTITY(1,1)")
            .not_null()
            .default_value()
            .primary_key()
            .finish()
    }

    /// `CREATE SEQUENCE "<table>_<column>_seq" START WITH 1 INCREMENT BY 1`
    #[must_use]
    pub fn create_sequence(&self, entity: &Entity, field: &Field) -> String {
        let name = common::table_column_name(DIALECT, entity, field, "seq");
        format!("CREATE SEQUENCE {} START WITH 1 INCREMENT BY 1", QUOTE.wrap(&name))
    }
}

impl DdlStrategy for DmStrategy {
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
            return "VARCHAR(255)".to_string();
        };

        let sql_type = match ty {
            LogicalType::Integer => "INT",
            LogicalType::Long => "BIGINT",
            LogicalType::Short => "SMALLINT",
            LogicalType::Byte => "TINYINT",
            LogicalType::Float => "REAL",
            LogicalType::Double => "DOUBLE",
            LogicalType::BigDecimal => return common::decimal("DECIMAL", field),
            LogicalType::BigInteger => "DECIMAL(65, 0)",
            LogicalType::String => return string_type(field),
            LogicalType::Char => "CHAR(1)",
            LogicalType::Boolean => "BIT",
            LogicalType::Date | LogicalType::SqlTimestamp | LogicalType::LocalDateTime => {
                "TIMESTAMP"
            }
            LogicalType::SqlDate | LogicalType::LocalDate => "DATE",
            LogicalType::SqlTime | LogicalType::LocalTime => "TIME",
            LogicalType::ZonedDateTime | LogicalType::OffsetDateTime | LogicalType::Instant => {
                "TIMESTAMP"
            }
            LogicalType::Duration => "BIGINT",
            LogicalType::Bytes => "BLOB",
            LogicalType::Uuid => "VARCHAR(36)",
            LogicalType::Json => "CLOB",
            LogicalType::IntegerArray | LogicalType::LongArray | LogicalType::StringArray => {
                "VARCHAR(255)"
            }
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
            "ALTER TABLE {} ADD {};",
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

    fn modify_column(&self, table_name: &str, field: &Field) -> Result<String> {
        Ok(format!(
            "ALTER TABLE {} MODIFY {};",
            QUOTE.wrap(table_name),
            self.column_definition(field)
        ))
    }

    fn add_foreign_key(&self, table_name: &str, foreign_key: &ForeignKey) -> Result<String> {
        Ok(common::add_foreign_key(QUOTE, table_name, foreign_key, ";"))
    }

    fn add_comment(&self, entity: &Entity) -> String {
        common::comment_on(QUOTE, entity)
    }

    fn plan(&self, entities: &[Entity]) -> Vec<Statement> {
        let sequences = entities.iter().flat_map(|e| {
            e.fields
                .iter()
                .filter(|f| f.auto_increment)
                .map(move |f| Statement::new(StatementKind::Sequence, self.create_sequence(e, f)))
        });

        let tables = entities
            .iter()
            .map(|e| Statement::new(StatementKind::Table, self.create_table(e)));

        let foreign_keys = entities.iter().flat_map(|e| {
            e.foreign_keys.iter().map(|fk| {
                Statement::new(
                    StatementKind::ForeignKey,
                    common::add_foreign_key(QUOTE, &e.table_name, fk, ";"),
                )
            })
        });

        let comments = entities
            .iter()
            .filter(|e| e.has_comments())
            .map(|e| Statement::new(StatementKind::Comment, self.add_comment(e)));

        sequences
            .chain(tables)
            .chain(foreign_keys)
            .chain(comments)
            .collect()
    }
}
