//! Typed statements and batch rendering

/// What a planned statement creates
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StatementKind {
    /// Session setting, e.g. `PRAGMA foreign_keys = ON`
    Pragma,
    Sequence,
    Table,
    /// Trigger filling an autoincrement column
    Trigger,
    ForeignKey,
    /// One or more comment statements for a single entity
    Comment,
}

impl StatementKind {
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            StatementKind::Pragma => "pragma",
            StatementKind::Sequence => "sequence",
            StatementKind::Table => "table",
            StatementKind::Trigger => "trigger",
            StatementKind::ForeignKey => "foreign_key",
            StatementKind::Comment => "comment",
        }
    }
}

impl core::fmt::Display for StatementKind {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One entry of a schema batch
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Statement {
    pub kind: StatementKind,
    pub sql: String,
}

impl Statement {
    #[must_use]
    pub fn new(kind: StatementKind, sql: impl Into<String>) -> Self {
        Self {
            kind,
            sql: sql.into(),
        }
    }
}

/// How a dialect joins the statements of a batch
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Terminator {
    /// Statements carry their own terminators; join with a blank line
    BlankLine,
    /// Join with `;` plus a blank line and end with `;`
    Semicolon,
}

impl Terminator {
    /// Render a batch into one SQL string
    ///
    /// ```
    /// use ddlgen_generator::{Statement, StatementKind, Terminator};
    ///
    /// let batch = [
    ///     Statement::new(StatementKind::Pragma, "PRAGMA foreign_keys = ON"),
    ///     Statement::new(StatementKind::Table, "CREATE TABLE \"t\" (\n  \"id\" INTEGER\n)"),
    /// ];
    /// assert_eq!(
    ///     Terminator::Semicolon.render(&batch),
    ///     "PRAGMA foreign_keys = ON;\n\nCREATE TABLE \"t\" (\n  \"id\" INTEGER\n);"
    /// );
    /// ```
    #[must_use]
    pub fn render(&self, statements: &[Statement]) -> String {
        match self {
            Terminator::BlankLine => statements
                .iter()
                .map(|s| s.sql.as_str())
                .collect::<Vec<_>>()
                .join("\n\n"),
            Terminator::Semicolon => {
                if statements.is_empty() {
                    return String::new();
                }
                // A statement that already ends in `;` must not end up with `;;`
                let mut sql = statements
                    .iter()
                    .map(|s| s.sql.strip_suffix(';').unwrap_or(&s.sql))
                    .collect::<Vec<_>>()
                    .join(";\n\n");
                sql.push(';');
                sql
            }
        }
    }

    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Terminator::BlankLine => "blank line",
            Terminator::Semicolon => "semicolon",
        }
    }
}

impl core::fmt::Display for Terminator {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}
