//! Oracle DDL
//!
//! Oracle statements carry no trailing `;`: the batch terminator supplies them.
//! Autoincrement columns are filled by a sequence plus a `BEFORE INSERT` trigger.

use ddlgen_types::{Dialect, Entity, Field, ForeignKey, LogicalType};

use crate::common::{self, ColumnSql};
use crate::{DdlStrategy, Quote, Result, Statement, StatementKind, Terminator};

const DIALECT: Dialect = Dialect::Oracle;
const QUOTE: Quote = Quote::Double;

/// Longest `VARCHAR2` before switching to `CLOB`
const MAX_VARCHAR2: u32 = 4000;

#[derive(Debug, Clone, Copy, Default)]
pub struct OracleStrategy;

impl OracleStrategy {
    fn column_definition(&self, field: &Field) -> String {
        ColumnSql::new(DIALECT, QUOTE, field, &self.map_type(field))
            .not_null()
            .default_value()
            .primary_key()
            .finish()
    }

    fn string_type(field: &Field) -> String {
        match field.length {
            _ if field.text => "CLOB".to_string(),
            0 => "VARCHAR2(255)".to_string(),
            n if n <= MAX_VARCHAR2 => format!("VARCHAR2({n})"),
            _ => "CLOB".to_string(),
        }
    }

    /// `CREATE SEQUENCE "<table>_<column>_seq" START WITH 1 INCREMENT BY 1`
    #[must_use]
    pub fn create_sequence(&self, entity: &Entity, field: &Field) -> String {
        let name = common::table_column_name(DIALECT, entity, field, "seq");
        format!("CREATE SEQUENCE {} START WITH 1 INCREMENT BY 1", QUOTE.wrap(&name))
    }

    /// Trigger copying `NEXTVAL` of the field's sequence into the new row
    #[must_use]
    pub fn create_trigger(&self, entity: &Entity, field: &Field) -> String {
        let sequence = common::table_column_name(DIALECT, entity, field, "seq");
        let trigger = common::table_column_name(DIALECT, entity, field, "trg");
        format!(
            "CREATE OR REPLACE TRIGGER {}\n\
             BEFORE INSERT ON {}\n\
             FOR EACH ROW\n\
             BEGIN\n  \
             SELECT {}.NEXTVAL INTO :NEW.{} FROM DUAL;\n\
             END;",
            QUOTE.wrap(&trigger),
            QUOTE.wrap(&entity.table_name),
            QUOTE.wrap(&sequence),
            QUOTE.wrap(common::column_name(DIALECT, field)),
        )
    }
}

impl DdlStrategy for OracleStrategy {
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
            return "VARCHAR2(255)".to_string();
        };

        let sql_type = match ty {
            LogicalType::Integer => "NUMBER(10)",
            LogicalType::Long => "NUMBER(19)",
            LogicalType::Short => "NUMBER(5)",
            LogicalType::Byte => "NUMBER(3)",
            LogicalType::Float => "BINARY_FLOAT",
            LogicalType::Double => "BINARY_DOUBLE",
            LogicalType::BigDecimal => return common::decimal("NUMBER", field),
            LogicalType::BigInteger => "NUMBER(65)",
            LogicalType::String => return Self::string_type(field),
            LogicalType::Char => "CHAR(1)",
            LogicalType::Boolean => "NUMBER(1)",
            LogicalType::Date
            | LogicalType::SqlDate
            | LogicalType::SqlTime
            | LogicalType::SqlTimestamp
            | LogicalType::LocalDate
            | LogicalType::LocalTime
            | LogicalType::LocalDateTime => "TIMESTAMP",
            LogicalType::ZonedDateTime | LogicalType::OffsetDateTime | LogicalType::Instant => {
                "TIMESTAMP WITH TIME ZONE"
            }
            LogicalType::Duration => "INTERVAL DAY TO SECOND",
            LogicalType::Bytes => "BLOB",
            LogicalType::Uuid => "VARCHAR2(36)",
            LogicalType::Json => "CLOB",
            LogicalType::IntegerArray | LogicalType::LongArray | LogicalType::StringArray => {
                "VARCHAR2(255)"
            }
        };
        sql_type.to_string()
    }

    fn create_table(&self, entity: &Entity) -> String {
        let columns = entity.fields.iter().map(|f| self.column_definition(f));
        common::create_table(QUOTE, entity, columns, "")
    }

    fn drop_table(&self, table_name: &str) -> String {
        format!("DROP TABLE {} CASCADE CONSTRAINTS", QUOTE.wrap(table_name))
    }

    fn add_column(&self, table_name: &str, field: &Field) -> String {
        format!(
            "ALTER TABLE {} ADD ({})",
            QUOTE.wrap(table_name),
            self.column_definition(field)
        )
    }

    fn drop_column(&self, table_name: &str, column_name: &str) -> String {
        format!(
            "ALTER TABLE {} DROP COLUMN {}",
            QUOTE.wrap(table_name),
            QUOTE.wrap(column_name)
        )
    }

    fn modify_column(&self, table_name: &str, field: &Field) -> Result<String> {
        Ok(format!(
            "ALTER TABLE {} MODIFY ({})",
            QUOTE.wrap(table_name),
            self.column_definition(field)
        ))
    }

    fn add_foreign_key(&self, table_name: &str, foreign_key: &ForeignKey) -> Result<String> {
        Ok(common::add_foreign_key(QUOTE, table_name, foreign_key, ""))
    }

    fn add_comment(&self, entity: &Entity) -> String {
        common::comment_on(QUOTE, entity)
    }

    fn plan(&self, entities: &[Entity]) -> Vec<Statement> {
        let auto_increment = || {
            entities.iter().flat_map(|e| {
                e.fields
                    .iter()
                    .filter(|f| f.auto_increment)
                    .map(move |f| (e, f))
            })
        };

        let mut statements: Vec<Statement> = auto_increment()
            .map(|(e, f)| Statement::new(StatementKind::Sequence, self.create_sequence(e, f)))
            .collect();

        statements.extend(
            entities
                .iter()
                .map(|e| Statement::new(StatementKind::Table, self.create_table(e))),
        );

        statements.extend(
            auto_increment()
                .map(|(e, f)| Statement::new(StatementKind::Trigger, self.create_trigger(e, f))),
        );

        statements.extend(entities.iter().flat_map(|e| {
            e.foreign_keys.iter().map(|fk| {
                Statement::new(
                    StatementKind::ForeignKey,
                    common::add_foreign_key(QUOTE, &e.table_name, fk, ""),
                )
            })
        }));

        statements.extend(
            entities
                .iter()
                .filter(|e| e.has_comments())
                .map(|e| Statement::new(StatementKind::Comment, self.add_comment(e))),
        );

        statements
    }
}
