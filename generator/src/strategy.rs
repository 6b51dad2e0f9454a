//! The per-dialect contract

use ddlgen_types::{Dialect, Entity, Field, ForeignKey};

use crate::dialect::{
    DmStrategy, H2Strategy, KingbaseStrategy, MySqlStrategy, OracleStrategy, PostgreSqlStrategy,
    SqlServerStrategy, SqliteStrategy,
};
use crate::trace::{trace_generate, trace_statement};
use crate::{Quote, Result, Statement, Terminator};

/// DDL generation for one database engine.
///
/// Builders are pure: they never touch shared state and can run concurrently
/// for different dialects or entity lists. Only [`modify_column`] and
/// [`add_foreign_key`] may fail, and only for engines without a post-hoc form
/// of that statement.
///
/// [`modify_column`]: DdlStrategy::modify_column
/// [`add_foreign_key`]: DdlStrategy::add_foreign_key
pub trait DdlStrategy: Send + Sync {
    /// The dialect this strategy implements
    fn dialect(&self) -> Dialect;

    /// Whether this strategy handles `dialect`
    fn supports(&self, dialect: Dialect) -> bool {
        self.dialect() == dialect
    }

    /// Identifier quote style
    fn quote(&self) -> Quote;

    /// Joiner used by [`DdlStrategy::generate_all`]
    fn terminator(&self) -> Terminator;

    /// Physical column type for a field. Total: unknown tags map to the
    /// dialect's textual fallback.
    fn map_type(&self, field: &Field) -> String;

    fn create_table(&self, entity: &Entity) -> String;

    fn drop_table(&self, table_name: &str) -> String;

    fn add_column(&self, table_name: &str, field: &Field) -> String;

    fn drop_column(&self, table_name: &str, column_name: &str) -> String;

    fn modify_column(&self, table_name: &str, field: &Field) -> Result<String>;

    fn add_foreign_key(&self, table_name: &str, foreign_key: &ForeignKey) -> Result<String>;

    /// Comment statements for an entity and its named fields. Empty when the
    /// dialect drops comments or there is nothing to attach.
    fn add_comment(&self, entity: &Entity) -> String;

    /// Ordered statement batch for a whole schema
    fn plan(&self, entities: &[Entity]) -> Vec<Statement>;

    /// Render [`DdlStrategy::plan`] with the dialect's terminator
    #[cfg_attr(not(feature = "tracing"), allow(unused_variables))]
    fn generate_all(&self, entities: &[Entity]) -> String {
        let dialect = self.dialect();
        let plan = self.plan(entities);
        for statement in &plan {
            trace_statement!(dialect, statement);
        }
        trace_generate!(dialect, entities.len(), plan.len());
        self.terminator().render(&plan)
    }

    /// Wrap an identifier with this dialect's quotes
    fn quote_identifier(&self, ident: &str) -> String {
        self.quote().wrap(ident)
    }
}

/// The built-in strategy for a dialect
///
/// ```
/// use ddlgen_generator::{strategy_for, Quote};
/// use ddlgen_types::Dialect;
///
/// let strategy = strategy_for(Dialect::SqlServer);
/// assert_eq!(strategy.quote(), Quote::Bracket);
/// assert_eq!(strategy.drop_table("users"), "DROP TABLE IF EXISTS [users];");
/// ```
#[must_use]
pub fn strategy_for(dialect: Dialect) -> &'static dyn DdlStrategy {
    match dialect {
        Dialect::MySql => &MySqlStrategy,
        Dialect::PostgreSql => &PostgreSqlStrategy,
        Dialect::Oracle => &OracleStrategy,
        Dialect::SqlServer => &SqlServerStrategy,
        Dialect::Sqlite => &SqliteStrategy,
        Dialect::H2 => &H2Strategy,
        Dialect::Dm => &DmStrategy,
        Dialect::Kingbase => &KingbaseStrategy,
    }
}
