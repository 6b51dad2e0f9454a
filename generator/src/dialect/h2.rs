//! H2 DDL

use ddlgen_types::{Dialect, Entity, Field, ForeignKey, LogicalType};

use crate::common::{self, ColumnSql};
use crate::{DdlStrategy, Quote, Result, Statement, StatementKind, Terminator};

const DIALECT: Dialect = Dialect::H2;
const QUOTE: Quote = Quote::Double;

/// H2: inline `AUTO_INCREMENT`, native `UUID`, `JSON` and `ARRAY` types
#[derive(Debug, Clone, Copy, Default)]
pub struct H2Strategy;

impl H2Strategy {
    fn column_definition(&self, field: &Field) -> String {
        ColumnSql::new(DIALECT, QUOTE, field, &self.map_type(field))
            .clause(field.auto_increment, " AUTO_INCREMENT")
            .not_null()
            .default_value()
            .primary_key()
            .finish()
    }
}

/// `CLOB` for long text, else `VARCHAR(n)` or `VARCHAR(255)`. Shared with DM.
pub(super) fn string_type(field: &Field) -> String {
    if field.text {
        "CLOB".to_string()
    } else if field.length > 0 {
        format!("VARCHAR({})", field.length)
    } else {
        "VARCHAR(255)".to_string()
    }
}

impl DdlStrategy for H2Strategy {
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
            LogicalType::Boolean => "BOOLEAN",
            LogicalType::Date | LogicalType::SqlTimestamp | LogicalType::LocalDateTime => {
                "TIMESTAMP"
            }
            LogicalType::SqlDate | LogicalType::LocalDate => "DATE",
            LogicalType::SqlTime | LogicalType::LocalTime => "TIME",
            LogicalType::ZonedDateTime | LogicalType::OffsetDateTime | LogicalType::Instant => {
                "TIMESTAMP WITH TIME ZONE"
            }
            LogicalType::Duration => "BIGINT",
            LogicalType::Bytes => "BLOB",
            LogicalType::Uuid => "UUID",
            LogicalType::Json => "JSON",
            LogicalType::IntegerArray | LogicalType::LongArray | LogicalType::StringArray => {
                "ARRAY"
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
        common::comment_on(QUOTE, entity)
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

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_auto_increment_before_not_null() {
        let entity = Entity::new("User").field(
            Field::new("id", "Long")
                .primary_key()
                .auto_increment()
                .not_null(),
        );
        assert_eq!(
            H2Strategy.create_table(&entity),
            "CREATE TABLE \"user\" (\n  \"id\" BIGINT AUTO_INCREMENT NOT NULL PRIMARY KEY\n);"
        );
    }

    #[test]
    fn test_type_map() {
        let s = H2Strategy;
        assert_eq!(s.map_type(&Field::new("a", "UUID")), "UUID");
        assert_eq!(s.map_type(&Field::new("a", "LongArray")), "ARRAY");
        assert_eq!(s.map_type(&Field::new("a", "String").text()), "CLOB");
        assert_eq!(s.map_type(&Field::new("a", "String")), "VARCHAR(255)");
        assert_eq!(s.map_type(&Field::new("a", "Money")), "VARCHAR(255)");
    }

    #[test]
    fn test_comment_on() {
        let entity = Entity::new("User")
            .comment("Accounts")
            .field(Field::new("email", "String").comment("Login"));
        assert_eq!(
            H2Strategy.add_comment(&entity),
            "COMMENT ON TABLE \"user\" IS 'Accounts';\nCOMMENT ON COLUMN \"user\".\"email\" IS 'Login';"
        );
    }
}
