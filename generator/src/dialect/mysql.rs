//! MySQL DDL

use ddlgen_types::{Dialect, Entity, Field, ForeignKey, LogicalType};

use crate::common::{self, ColumnSql};
use crate::{DdlStrategy, Quote, Result, Statement, StatementKind, Terminator};

const DIALECT: Dialect = Dialect::MySql;
const QUOTE: Quote = Quote::Backtick;

/// MySQL: backtick identifiers, inline `AUTO_INCREMENT`, `COMMENT` via `ALTER TABLE`
#[derive(Debug, Clone, Copy, Default)]
pub struct MySqlStrategy;

impl MySqlStrategy {
    fn column_definition(&self, field: &Field) -> String {
        ColumnSql::new(DIALECT, QUOTE, field, &self.map_type(field))
            .not_null()
            .clause(field.auto_increment, " AUTO_INCREMENT")
            .default_value()
            .primary_key()
            .finish()
    }

    fn string_type(field: &Field) -> String {
        if field.text {
            "TEXT".to_string()
        } else if field.length > 0 {
            format!("VARCHAR({})", field.length)
        } else {
            "VARCHAR(255)".to_string()
        }
    }
}

impl DdlStrategy for MySqlStrategy {
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
            LogicalType::Float => "FLOAT",
            LogicalType::Double => "DOUBLE",
            LogicalType::BigDecimal => return common::decimal("DECIMAL", field),
            LogicalType::BigInteger => "DECIMAL(65, 0)",
            LogicalType::String => return Self::string_type(field),
            LogicalType::Char => "CHAR(1)",
            LogicalType::Boolean => "TINYINT(1)",
            LogicalType::Date => "DATETIME",
            LogicalType::SqlDate => "DATE",
            LogicalType::SqlTime => "TIME",
            LogicalType::SqlTimestamp => "TIMESTAMP",
            LogicalType::LocalDate => "DATE",
            LogicalType::LocalTime => "TIME",
            LogicalType::LocalDateTime => "DATETIME",
            LogicalType::ZonedDateTime | LogicalType::OffsetDateTime | LogicalType::Instant => {
                "TIMESTAMP"
            }
            LogicalType::Duration => "BIGINT",
            LogicalType::Bytes => "BLOB",
            LogicalType::Uuid => "VARCHAR(36)",
            LogicalType::Json => "JSON",
            LogicalType::IntegerArray | LogicalType::LongArray | LogicalType::StringArray => {
                "VARCHAR(255)"
            }
        };
        sql_type.to_string()
    }

    fn create_table(&self, entity: &Entity) -> String {
        let suffix = if entity.has_auto_increment() {
            " AUTO_INCREMENT=1;"
        } else {
            ";"
        };
        let columns = entity.fields.iter().map(|f| self.column_definition(f));
        common::create_table(QUOTE, entity, columns, suffix)
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
            "ALTER TABLE {} MODIFY COLUMN {};",
            QUOTE.wrap(table_name),
            self.column_definition(field)
        ))
    }

    fn add_foreign_key(&self, table_name: &str, foreign_key: &ForeignKey) -> Result<String> {
        Ok(common::add_foreign_key(QUOTE, table_name, foreign_key, ";"))
    }

    fn add_comment(&self, entity: &Entity) -> String {
        let table = QUOTE.wrap(&entity.table_name);
        let mut statements = Vec::new();

        if let Some(comment) = &entity.comment {
            statements.push(format!("ALTER TABLE {table} COMMENT='{comment}';"));
        }
        for (column, field, comment) in common::commented_columns(entity) {
            statements.push(format!(
                "ALTER TABLE {table} MODIFY {} {} COMMENT '{comment}';",
                QUOTE.wrap(column),
                self.map_type(field)
            ));
        }

        statements.join("\n")
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

    fn user() -> Entity {
        Entity::new("User")
            .field(
                Field::new("id", "Long")
                    .primary_key()
                    .auto_increment()
                    .not_null(),
            )
            .field(Field::new("email", "String").length(255).not_null())
    }

    #[test]
    fn test_create_table_auto_increment() {
        let sql = MySqlStrategy.create_table(&user());
        assert_eq!(
            sql,
            "CREATE TABLE `user` (\n  `id` BIGINT NOT NULL AUTO_INCREMENT PRIMARY KEY,\n  `email` VARCHAR(255) NOT NULL\n) AUTO_INCREMENT=1;"
        );
    }

    #[test]
    fn test_create_table_without_auto_increment() {
        let entity = Entity::new("Tag").field(Field::new("label", "String"));
        let sql = MySqlStrategy.create_table(&entity);
        assert!(sql.ends_with("\n);"));
        assert!(!sql.contains("AUTO_INCREMENT"));
    }

    #[test]
    fn test_string_policy() {
        let s = MySqlStrategy;
        assert_eq!(s.map_type(&Field::new("a", "String")), "VARCHAR(255)");
        assert_eq!(s.map_type(&Field::new("a", "String").length(64)), "VARCHAR(64)");
        assert_eq!(s.map_type(&Field::new("a", "String").length(64).text()), "TEXT");
    }

    #[test]
    fn test_type_fallback() {
        assert_eq!(MySqlStrategy.map_type(&Field::new("a", "Money")), "VARCHAR(255)");
        assert_eq!(MySqlStrategy.map_type(&Field::default()), "VARCHAR(255)");
        assert_eq!(MySqlStrategy.map_type(&Field::new("a", "Boolean")), "TINYINT(1)");
    }

    #[test]
    fn test_alter_statements() {
        let s = MySqlStrategy;
        let field = Field::new("age", "Integer").default_value("0");
        assert_eq!(s.drop_table("user"), "DROP TABLE IF EXISTS `user`;");
        assert_eq!(
            s.add_column("user", &field),
            "ALTER TABLE `user` ADD COLUMN `age` INT DEFAULT 0;"
        );
        assert_eq!(
            s.drop_column("user", "age"),
            "ALTER TABLE `user` DROP COLUMN `age`;"
        );
        assert_eq!(
            s.modify_column("user", &field.not_null()).unwrap(),
            "ALTER TABLE `user` MODIFY COLUMN `age` INT NOT NULL DEFAULT 0;"
        );
    }

    #[test]
    fn test_add_comment() {
        let entity = Entity::new("User")
            .comment("Accounts")
            .field(Field::new("email", "String").length(128).comment("Login"));

        assert_eq!(
            MySqlStrategy.add_comment(&entity),
            "ALTER TABLE `user` COMMENT='Accounts';\nALTER TABLE `user` MODIFY `email` VARCHAR(128) COMMENT 'Login';"
        );
    }
}
