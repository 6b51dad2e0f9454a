//! KingbaseES DDL, PostgreSQL-compatible

use ddlgen_types::{Dialect, Entity, Field, ForeignKey};

use super::postgres;
use crate::common;
use crate::{DdlStrategy, Quote, Result, Statement, Terminator};

const DIALECT: Dialect = Dialect::Kingbase;
const QUOTE: Quote = Quote::Double;

/// KingbaseES: PostgreSQL column and type rules. Planned sequence statements
/// carry no terminator of their own.
#[derive(Debug, Clone, Copy, Default)]
pub struct KingbaseStrategy;

impl KingbaseStrategy {
    /// `CREATE SEQUENCE IF NOT EXISTS "name" INCREMENT BY 1 START WITH 1`
    #[must_use]
    pub fn create_sequence(&self, sequence_name: &str) -> String {
        postgres::create_sequence(sequence_name, "")
    }
}

impl DdlStrategy for KingbaseStrategy {
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
        postgres::map_type(DIALECT, field)
    }

    fn create_table(&self, entity: &Entity) -> String {
        postgres::create_table(DIALECT, entity)
    }

    fn drop_table(&self, table_name: &str) -> String {
        format!("DROP TABLE IF EXISTS {};", QUOTE.wrap(table_name))
    }

    fn add_column(&self, table_name: &str, field: &Field) -> String {
        postgres::add_column(DIALECT, table_name, field)
    }

    fn drop_column(&self, table_name: &str, column_name: &str) -> String {
        postgres::drop_column(table_name, column_name)
    }

    fn modify_column(&self, table_name: &str, field: &Field) -> Result<String> {
        Ok(postgres::modify_column(DIALECT, table_name, field))
    }

    fn add_foreign_key(&self, table_name: &str, foreign_key: &ForeignKey) -> Result<String> {
        Ok(common::add_foreign_key(QUOTE, table_name, foreign_key, ";"))
    }

    fn add_comment(&self, entity: &Entity) -> String {
        common::comment_on(QUOTE, entity)
    }

    fn plan(&self, entities: &[Entity]) -> Vec<Statement> {
        postgres::plan(self, entities, "")
    }
}
