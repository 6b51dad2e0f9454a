//! Building blocks shared by the dialect strategies

use ddlgen_types::{Dialect, Entity, Field, ForeignKey, LogicalType};

use crate::Quote;
use crate::trace::{trace_unknown_column, trace_unknown_type};

// =============================================================================
// Field resolution
// =============================================================================

/// Column name with the `"unknown"` fallback, warning when the fallback is used
#[cfg_attr(not(feature = "tracing"), allow(unused_variables))]
pub(crate) fn column_name(dialect: Dialect, field: &Field) -> &str {
    if !field.has_explicit_name() {
        trace_unknown_column!(dialect);
    }
    field.column_name()
}

/// Logical type of a field, warning when the tag is missing or unrecognised
#[cfg_attr(not(feature = "tracing"), allow(unused_variables))]
pub(crate) fn logical_type(dialect: Dialect, field: &Field) -> Option<LogicalType> {
    let ty = field.logical_type();
    if ty.is_none() {
        trace_unknown_type!(dialect, field.column_name(), field.type_name.as_deref());
    }
    ty
}

/// `NAME(p, s)`, `NAME(p)`, or `NAME(19, 2)` when no precision is given
pub(crate) fn decimal(type_name: &str, field: &Field) -> String {
    match (field.precision, field.scale) {
        (0, _) => format!("{type_name}(19, 2)"),
        (p, 0) => format!("{type_name}({p})"),
        (p, s) => format!("{type_name}({p}, {s})"),
    }
}

// =============================================================================
// Column definitions
// =============================================================================

/// Incremental `name type ...` column definition.
///
/// Clause order differs per dialect, so each strategy chains the clauses in
/// its own order.
pub(crate) struct ColumnSql<'a> {
    field: &'a Field,
    sql: String,
}

impl<'a> ColumnSql<'a> {
    pub(crate) fn new(dialect: Dialect, quote: Quote, field: &'a Field, sql_type: &str) -> Self {
        let sql = format!("{} {sql_type}", quote.wrap(column_name(dialect, field)));
        Self { field, sql }
    }

    /// Append `clause` when `condition` holds
    pub(crate) fn clause(mut self, condition: bool, clause: &str) -> Self {
        if condition {
            self.sql.push_str(clause);
        }
        self
    }

    pub(crate) fn not_null(self) -> Self {
        let nullable = self.field.nullable;
        self.clause(!nullable, " NOT NULL")
    }

    /// ` DEFAULT <expr>`, never on autoincrement columns
    pub(crate) fn default_value(self) -> Self {
        self.default_value_unless(false)
    }

    /// ` DEFAULT <expr>` unless autoincrement or `suppressed`
    pub(crate) fn default_value_unless(mut self, suppressed: bool) -> Self {
        if let Some(value) = &self.field.default_value
            && !self.field.auto_increment
            && !suppressed
        {
            self.sql.push_str(" DEFAULT ");
            self.sql.push_str(value);
        }
        self
    }

    pub(crate) fn primary_key(self) -> Self {
        let primary_key = self.field.primary_key;
        self.clause(primary_key, " PRIMARY KEY")
    }

    pub(crate) fn push(mut self, clause: &str) -> Self {
        self.sql.push_str(clause);
        self
    }

    pub(crate) fn finish(self) -> String {
        self.sql
    }
}

// =============================================================================
// Statements
// =============================================================================

/// `CREATE TABLE name (\n  col,\n  col\n)<suffix>`
pub(crate) fn create_table(
    quote: Quote,
    entity: &Entity,
    definitions: impl IntoIterator<Item = String>,
    suffix: &str,
) -> String {
    let definitions = definitions.into_iter().collect::<Vec<_>>().join(",\n  ");
    format!(
        "CREATE TABLE {} (\n  {definitions}\n){suffix}",
        quote.wrap(&entity.table_name)
    )
}

/// `ALTER TABLE t ADD CONSTRAINT fk FOREIGN KEY (c) REFERENCES rt (rc)<terminator>`
pub(crate) fn add_foreign_key(
    quote: Quote,
    table_name: &str,
    foreign_key: &ForeignKey,
    terminator: &str,
) -> String {
    format!(
        "ALTER TABLE {} ADD CONSTRAINT {} FOREIGN KEY ({}) REFERENCES {} ({}){terminator}",
        quote.wrap(table_name),
        quote.wrap(&foreign_key.name),
        quote.wrap(&foreign_key.column_name),
        quote.wrap(&foreign_key.referenced_table_name),
        quote.wrap(&foreign_key.referenced_column_name),
    )
}

/// Commented fields that carry an explicit name, with their column name.
/// Unnamed fields never receive a comment.
pub(crate) fn commented_columns(entity: &Entity) -> impl Iterator<Item = (&str, &Field, &str)> {
    entity
        .fields
        .iter()
        .filter(|field| field.has_explicit_name())
        .filter_map(|field| {
            field
                .comment
                .as_deref()
                .map(|comment| (field.column_name(), field, comment))
        })
}

/// `COMMENT ON TABLE` / `COMMENT ON COLUMN` statements joined by `;\n`
pub(crate) fn comment_on(quote: Quote, entity: &Entity) -> String {
    let table = quote.wrap(&entity.table_name);
    let mut statements = Vec::new();

    if let Some(comment) = &entity.comment {
        statements.push(format!("COMMENT ON TABLE {table} IS '{comment}'"));
    }
    for (column, _, comment) in commented_columns(entity) {
        statements.push(format!(
            "COMMENT ON COLUMN {table}.{} IS '{comment}'",
            quote.wrap(column)
        ));
    }

    join_terminated(&statements)
}

/// Join with `;\n` and terminate the last statement, `""` when empty
pub(crate) fn join_terminated(statements: &[String]) -> String {
    if statements.is_empty() {
        String::new()
    } else {
        format!("{};", statements.join(";\n"))
    }
}

/// `<table>_<column>_<suffix>`, the naming used for Oracle/DM sequences and triggers
pub(crate) fn table_column_name(
    dialect: Dialect,
    entity: &Entity,
    field: &Field,
    suffix: &str,
) -> String {
    format!(
        "{}_{}_{suffix}",
        entity.table_name,
        column_name(dialect, field)
    )
}
