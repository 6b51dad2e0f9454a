use ddlgen_types::Dialect;
use thiserror::Error;

/// Alteration a dialect may be unable to express
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operation {
    ModifyColumn,
    AddForeignKey,
}

impl Operation {
    /// SQL spelling of the operation, as it appears in error messages
    #[must_use]
    pub const fn as_sql(&self) -> &'static str {
        match self {
            Operation::ModifyColumn => "ALTER COLUMN",
            Operation::AddForeignKey => "ADD FOREIGN KEY",
        }
    }
}

impl core::fmt::Display for Operation {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_sql())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DdlError {
    /// The dialect has no statement for this operation
    #[error("{} does not support {operation}; regenerate the table instead", .dialect.display_name())]
    Unsupported {
        dialect: Dialect,
        operation: Operation,
    },

    /// No registered strategy claims the dialect
    #[error("no DDL strategy registered for {0}")]
    NoStrategy(Dialect),

    /// More than one registered strategy claims the dialect
    #[error("{count} DDL strategies registered for {dialect}, expected exactly one")]
    AmbiguousStrategy { dialect: Dialect, count: usize },
}

/// Result type for DDL generation
pub type Result<T> = std::result::Result<T, DdlError>;
