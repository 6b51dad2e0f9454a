//! PostgreSQL DDL
//!
//! KingbaseES speaks the same dialect, so the column, type and plan builders
//! here are shared with [`KingbaseStrategy`](super::KingbaseStrategy).

use std::collections::HashSet;

use ddlgen_types::{Dialect, Entity, Field, ForeignKey, LogicalType};

use crate::common::{self, ColumnSql};
use crate::{DdlStrategy, Quote, Result, Statement, StatementKind, Terminator};

const QUOTE: Quote = Quote::Double;

/// PostgreSQL: identity columns, or `DEFAULT nextval(..)` for sequence-backed fields
#[derive(Debug, Clone, Copy, Default)]
pub struct PostgreSqlStrategy;

impl PostgreSqlStrategy {
    /// `CREATE SEQUENCE IF NOT EXISTS "name" INCREMENT BY 1 START WITH 1;`
    #[must_use]
    pub fn create_sequence(&self, sequence_name: &str) -> String {
        create_sequence(sequence_name, ";")
    }
}

impl DdlStrategy for PostgreSqlStrategy {
    fn dialect(&self) -> Dialect {
        Dialect::PostgreSql
    }

    fn quote(&self) -> Quote {
        QUOTE
    }

    fn terminator(&self) -> Terminator {
        Terminator::BlankLine
    }

    fn map_type(&self, field: &Field) -> String {
        map_type(Dialect::PostgreSql, field)
    }

    fn create_table(&self, entity: &Entity) -> String {
        create_table(Dialect::PostgreSql, entity)
    }

    fn drop_table(&self, table_name: &str) -> String {
        format!("DROP TABLE IF EXISTS {};", QUOTE.wrap(table_name))
    }

    fn add_column(&self, table_name: &str, field: &Field) -> String {
        add_column(Dialect::PostgreSql, table_name, field)
    }

    fn drop_column(&self, table_name: &str, column_name: &str) -> String {
        drop_column(table_name, column_name)
    }

    fn modify_column(&self, table_name: &str, field: &Field) -> Result<String> {
        Ok(modify_column(Dialect::PostgreSql, table_name, field))
    }

    fn add_foreign_key(&self, table_name: &str, foreign_key: &ForeignKey) -> Result<String> {
        Ok(common::add_foreign_key(QUOTE, table_name, foreign_key, ";"))
    }

    fn add_comment(&self, entity: &Entity) -> String {
        common::comment_on(QUOTE, entity)
    }

    fn plan(&self, entities: &[Entity]) -> Vec<Statement> {
        plan(self, entities, ";")
    }
}

// =============================================================================
// Shared with KingbaseES
// =============================================================================

pub(super) fn map_type(dialect: Dialect, field: &Field) -> String {
    let Some(ty) = common::logical_type(dialect, field) else {
        return "TEXT".to_string();
    };

    let sql_type = match ty {
        LogicalType::Integer => "INTEGER",
        LogicalType::Long => "BIGINT",
        LogicalType::Short | LogicalType::Byte => "SMALLINT",
        LogicalType::Float => "REAL",
        LogicalType::Double => "DOUBLE PRECISION",
        LogicalType::BigDecimal => return common::decimal("NUMERIC", field),
        LogicalType::BigInteger => "NUMERIC(65, 0)",
        LogicalType::String => return string_type(field),
        LogicalType::Char => "CHAR(1)",
        LogicalType::Boolean => "BOOLEAN",
        LogicalType::Date => "TIMESTAMP",
        LogicalType::SqlDate => "DATE",
        LogicalType::SqlTime => "TIME",
        LogicalType::SqlTimestamp => "TIMESTAMP",
        LogicalType::LocalDate => "DATE",
        LogicalType::LocalTime => "TIME",
        LogicalType::LocalDateTime => "TIMESTAMP",
        LogicalType::ZonedDateTime | LogicalType::OffsetDateTime | LogicalType::Instant => {
            "TIMESTAMP WITH TIME ZONE"
        }
        LogicalType::Duration => "INTERVAL",
        LogicalType::Bytes => "BYTEA",
        LogicalType::Uuid => "UUID",
        LogicalType::Json => "JSONB",
        LogicalType::IntegerArray => "INTEGER[]",
        LogicalType::LongArray => "BIGINT[]",
        LogicalType::StringArray => "TEXT[]",
    };
    sql_type.to_string()
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

pub(super) fn column_definition(dialect: Dialect, field: &Field) -> String {
    let column = ColumnSql::new(dialect, QUOTE, field, &map_type(dialect, field)).not_null();

    let column = if field.auto_increment {
        column.push(" GENERATED BY DEFAULT AS IDENTITY")
    } else if field.sequence {
        // Sequence names live inside a string literal and stay unquoted
        column.push(&format!(
            " DEFAULT nextval('{}')",
            field.sequence_name_or_default()
        ))
    } else {
        column
    };

    column
        .default_value_unless(field.sequence)
        .primary_key()
        .finish()
}

pub(super) fn create_table(dialect: Dialect, entity: &Entity) -> String {
    let columns = entity
        .fields
        .iter()
        .map(|f| column_definition(dialect, f));
    common::create_table(QUOTE, entity, columns, ";")
}

pub(super) fn add_column(dialect: Dialect, table_name: &str, field: &Field) -> String {
    format!(
        "ALTER TABLE {} ADD COLUMN {};",
        QUOTE.wrap(table_name),
        column_definition(dialect, field)
    )
}

pub(super) fn drop_column(table_name: &str, column_name: &str) -> String {
    format!(
        "ALTER TABLE {} DROP COLUMN {};",
        QUOTE.wrap(table_name),
        QUOTE.wrap(column_name)
    )
}

/// Type, nullability and default are altered by separate statements
pub(super) fn modify_column(dialect: Dialect, table_name: &str, field: &Field) -> String {
    let table = QUOTE.wrap(table_name);
    let column = QUOTE.wrap(common::column_name(dialect, field));
    let alter = format!("ALTER TABLE {table} ALTER COLUMN {column}");

    let mut statements = vec![format!("{alter} TYPE {};", map_type(dialect, field))];
    if field.nullable {
        statements.push(format!("{alter} DROP NOT NULL;"));
    } else {
        statements.push(format!("{alter} SET NOT NULL;"));
    }
    if let Some(value) = &field.default_value {
        statements.push(format!("{alter} SET DEFAULT {value};"));
    }

    statements.join("\n")
}

pub(super) fn create_sequence(sequence_name: &str, terminator: &str) -> String {
    format!(
        "CREATE SEQUENCE IF NOT EXISTS {} INCREMENT BY 1 START WITH 1{terminator}",
        QUOTE.wrap(sequence_name)
    )
}

/// Sequences (deduplicated, first-seen order), tables, then foreign keys and
/// comments interleaved per entity
pub(super) fn plan(
    strategy: &dyn DdlStrategy,
    entities: &[Entity],
    sequence_terminator: &str,
) -> Vec<Statement> {
    let dialect = strategy.dialect();
    let mut statements = Vec::new();

    let mut seen = HashSet::new();
    for field in entities.iter().flat_map(|e| &e.fields) {
        if field.sequence {
            let name = field.sequence_name_or_default().into_owned();
            if seen.insert(name.clone()) {
                statements.push(Statement::new(
                    StatementKind::Sequence,
                    create_sequence(&name, sequence_terminator),
                ));
            }
        }
    }

    statements.extend(
        entities
            .iter()
            .map(|e| Statement::new(StatementKind::Table, create_table(dialect, e))),
    );

    for entity in entities {
        for fk in &entity.foreign_keys {
            statements.push(Statement::new(
                StatementKind::ForeignKey,
                common::add_foreign_key(QUOTE, &entity.table_name, fk, ";"),
            ));
        }
        if entity.has_comments() {
            statements.push(Statement::new(
                StatementKind::Comment,
                strategy.add_comment(entity),
            ));
        }
    }

    statements
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_identity_column() {
        let entity = Entity::new("User").field(
            Field::new("id", "Long")
                .primary_key()
                .auto_increment()
                .not_null(),
        );
        assert_eq!(
            PostgreSqlStrategy.create_table(&entity),
            "CREATE TABLE \"user\" (\n  \"id\" BIGINT NOT NULL GENERATED BY DEFAULT AS IDENTITY PRIMARY KEY\n);"
        );
    }

    #[test]
    fn test_sequence_default_replaces_explicit_default() {
        let field = Field::new("id", "Long")
            .sequence_named("user_id_seq")
            .default_value("42");
        assert_eq!(
            column_definition(Dialect::PostgreSql, &field),
            "\"id\" BIGINT DEFAULT nextval('user_id_seq')"
        );
    }

    #[test]
    fn test_identity_wins_over_sequence() {
        let field = Field::new("id", "Long").auto_increment().sequence();
        let sql = column_definition(Dialect::PostgreSql, &field);
        assert!(sql.contains("GENERATED BY DEFAULT AS IDENTITY"));
        assert!(!sql.contains("nextval"));
    }

    #[test]
    fn test_modify_column_statements() {
        let field = Field::new("status", "String")
            .length(16)
            .not_null()
            .default_value("'new'");
        assert_eq!(
            PostgreSqlStrategy.modify_column("orders", &field).unwrap(),
            "ALTER TABLE \"orders\" ALTER COLUMN \"status\" TYPE VARCHAR(16);\n\
             ALTER TABLE \"orders\" ALTER COLUMN \"status\" SET NOT NULL;\n\
             ALTER TABLE \"orders\" ALTER COLUMN \"status\" SET DEFAULT 'new';"
        );

        let nullable = Field::new("note", "String").text();
        assert_eq!(
            PostgreSqlStrategy.modify_column("orders", &nullable).unwrap(),
            "ALTER TABLE \"orders\" ALTER COLUMN \"note\" TYPE TEXT;\n\
             ALTER TABLE \"orders\" ALTER COLUMN \"note\" DROP NOT NULL;"
        );
    }

    #[test]
    fn test_type_map() {
        let s = PostgreSqlStrategy;
        assert_eq!(s.map_type(&Field::new("a", "Byte")), "SMALLINT");
        assert_eq!(s.map_type(&Field::new("a", "Instant")), "TIMESTAMP WITH TIME ZONE");
        assert_eq!(s.map_type(&Field::new("a", "JsonNode")), "JSONB");
        assert_eq!(s.map_type(&Field::new("a", "Array<String>")), "TEXT[]");
        assert_eq!(s.map_type(&Field::new("a", "Money")), "TEXT");
        assert_eq!(s.map_type(&Field::new("a", "String")), "VARCHAR(255)");
    }

    #[test]
    fn test_sequences_deduplicated() {
        let entities = [
            Entity::new("A").field(Field::new("id", "Long").sequence_named("shared_seq")),
            Entity::new("B").field(Field::new("id", "Long").sequence_named("shared_seq")),
        ];
        let plan = PostgreSqlStrategy.plan(&entities);
        let sequences: Vec<_> = plan
            .iter()
            .filter(|s| s.kind == StatementKind::Sequence)
            .collect();
        assert_eq!(sequences.len(), 1);
        assert_eq!(
            sequences[0].sql,
            "CREATE SEQUENCE IF NOT EXISTS \"shared_seq\" INCREMENT BY 1 START WITH 1;"
        );
    }
}
