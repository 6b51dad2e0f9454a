//! SQL Server DDL

use ddlgen_types::{Dialect, Entity, Field, ForeignKey, LogicalType};

use crate::common::{self, ColumnSql};
use crate::{DdlStrategy, Quote, Result, Statement, StatementKind, Terminator};

const DIALECT: Dialect = Dialect::SqlServer;
const QUOTE: Quote = Quote::Bracket;

/// Longest bounded `NVARCHAR` before switching to `NVARCHAR(MAX)`
const MAX_NVARCHAR: u32 = 4000;

/// SQL Server: bracket identifiers, `IDENTITY(1,1)`, comments stored as
/// `MS_Description` extended properties
#[derive(Debug, Clone, Copy, Default)]
pub struct SqlServerStrategy;

impl SqlServerStrategy {
    fn column_definition(&self, field: &Field) -> String {
        ColumnSql::new(DIALECT, QUOTE, field, &self.map_type(field))
            .clause(field.auto_increment, " IDENTITY(1,1)")
            .not_null()
            .default_value()
            .primary_key()
            .finish()
    }

    fn string_type(field: &Field) -> String {
        match field.length {
            _ if field.text => "NVARCHAR(MAX)".to_string(),
            0 => "NVARCHAR(255)".to_string(),
            n if n <= MAX_NVARCHAR => format!("NVARCHAR({n})"),
            _ => "NVARCHAR(MAX)".to_string(),
        }
    }

    fn extended_property(comment: &str, table: &str, column: Option<&str>) -> String {
        let mut sql = format!(
            "EXEC sp_addextendedproperty @name = N'MS_Description', @value = N'{comment}', \
             @level0type = N'SCHEMA', @level0name = N'dbo', \
             @level1type = N'TABLE', @level1name = N'{table}'"
        );
        if let Some(column) = column {
            sql.push_str(&format!(
                ", @level2type = N'COLUMN', @level2name = N'{column}'"
            ));
        }
        sql
    }
}

impl DdlStrategy for SqlServerStrategy {
    fn dialect(&self) -> Dialect {
        DIALECT
    }

    fn quote(&self) -> Quote {
        QUOTE
    }

    fn terminator(&self) -> Terminator {
        Terminator::BlankLine
    }

    fn map_type(&self, field: &Field) -> String {
        let Some(ty) = common::logical_type(DIALECT, field) else {
            return "NVARCHAR(255)".to_string();
        };

        let sql_type = match ty {
            LogicalType::Integer => "INT",
            LogicalType::Long => "BIGINT",
            LogicalType::Short => "SMALLINT",
            LogicalType::Byte => "TINYINT",
            LogicalType::Float => "REAL",
            LogicalType::Double => "FLOAT",
            LogicalType::BigDecimal => return common::decimal("DECIMAL", field),
            LogicalType::BigInteger => "DECIMAL(65, 0)",
            LogicalType::String => return Self::string_type(field),
            LogicalType::Char => "NCHAR(1)",
            LogicalType::Boolean => "BIT",
            LogicalType::Date
            | LogicalType::SqlTimestamp
            | LogicalType::LocalDateTime
            | LogicalType::Instant => "DATETIME2",
            LogicalType::SqlDate | LogicalType::LocalDate => "DATE",
            LogicalType::SqlTime | LogicalType::LocalTime => "TIME",
            LogicalType::ZonedDateTime | LogicalType::OffsetDateTime => "DATETIMEOFFSET",
            LogicalType::Duration => "BIGINT",
            LogicalType::Bytes => "VARBINARY(MAX)",
            LogicalType::Uuid => "UNIQUEIDENTIFIER",
            LogicalType::Json => "NVARCHAR(MAX)",
            LogicalType::IntegerArray | LogicalType::LongArray | LogicalType::StringArray => {
                "NVARCHAR(255)"
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
            "ALTER TABLE {} ALTER COLUMN {};",
            QUOTE.wrap(table_name),
            self.column_definition(field)
        ))
    }

    fn add_foreign_key(&self, table_name: &str, foreign_key: &ForeignKey) -> Result<String> {
        Ok(common::add_foreign_key(QUOTE, table_name, foreign_key, ";"))
    }

    fn add_comment(&self, entity: &Entity) -> String {
        let table = entity.table_name.as_ref();
        let mut statements = Vec::new();

        if let Some(comment) = &entity.comment {
            statements.push(Self::extended_property(comment, table, None));
        }
        for (column, _, comment) in common::commented_columns(entity) {
            statements.push(Self::extended_property(comment, table, Some(column)));
        }

        common::join_terminated(&statements)
    }

    fn plan(&self, entities: &[Entity]) -> Vec<Statement> {
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

        tables.chain(foreign_keys).chain(comments).collect()
    }
}
