//! Tracing macros for DDL generation.
//!
//! Enable the `tracing` feature to emit events via the `tracing` crate.
//! These macros no-op when the feature is disabled, avoiding `#[cfg]` boilerplate
//! at every call site.

/// Emit a debug-level event for one planned statement.
macro_rules! trace_statement {
    ($dialect:expr, $statement:expr) => {
        #[cfg(feature = "tracing")]
        tracing::debug!(
            dialect = %$dialect,
            kind = %$statement.kind,
            sql = %$statement.sql,
            "ddlgen.statement"
        );
    };
}

/// Emit an info-level event summarising a `generate_all` call.
macro_rules! trace_generate {
    ($dialect:expr, $entities:expr, $statements:expr) => {
        #[cfg(feature = "tracing")]
        tracing::info!(
            dialect = %$dialect,
            entities = $entities,
            statements = $statements,
            "ddlgen.generate"
        );
    };
}

/// Warn that a field has neither `columnName` nor `name`.
macro_rules! trace_unknown_column {
    ($dialect:expr) => {
        #[cfg(feature = "tracing")]
        tracing::warn!(
            dialect = %$dialect,
            column = ddlgen_types::UNKNOWN_COLUMN,
            "ddlgen.field has no name, falling back"
        );
    };
}

/// Warn that a type tag is missing or not part of the logical vocabulary.
macro_rules! trace_unknown_type {
    ($dialect:expr, $column:expr, $tag:expr) => {
        #[cfg(feature = "tracing")]
        tracing::warn!(
            dialect = %$dialect,
            column = %$column,
            tag = ?$tag,
            "ddlgen.unrecognised type tag, using dialect fallback"
        );
    };
}

pub(crate) use {trace_generate, trace_statement, trace_unknown_column, trace_unknown_type};
