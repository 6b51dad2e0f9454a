//! Unified database dialect enum
//!
//! Every generator strategy is selected by exactly one of these identifiers.

/// SQL dialect targeted by DDL generation
///
/// # Examples
///
/// ```
/// use ddlgen_types::Dialect;
///
/// let dialect = Dialect::parse("pg").unwrap();
/// assert_eq!(dialect, Dialect::PostgreSql);
/// assert_eq!(dialect.as_str(), "postgresql");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Dialect {
    /// MySQL - backtick identifiers, inline `AUTO_INCREMENT`
    #[default]
    #[cfg_attr(feature = "serde", serde(rename = "mysql"))]
    MySql,

    /// PostgreSQL - identity columns or sequence defaults
    #[cfg_attr(feature = "serde", serde(rename = "postgresql", alias = "postgres"))]
    PostgreSql,

    /// Oracle - sequence plus `BEFORE INSERT` trigger
    Oracle,

    /// SQL Server - bracket identifiers, `IDENTITY(1,1)`
    #[cfg_attr(feature = "serde", serde(rename = "sqlserver", alias = "mssql"))]
    SqlServer,

    /// SQLite - foreign keys declared inside `CREATE TABLE`
    Sqlite,

    /// H2 - inline `AUTO_INCREMENT`
    H2,

    /// Dameng (DM)
    #[cfg_attr(feature = "serde", serde(alias = "dameng"))]
    Dm,

    /// KingbaseES - PostgreSQL-compatible syntax
    #[cfg_attr(feature = "serde", serde(alias = "kingbasees"))]
    Kingbase,
}

impl Dialect {
    /// All supported dialects, in declaration order
    pub const ALL: [Dialect; 8] = [
        Dialect::MySql,
        Dialect::PostgreSql,
        Dialect::Oracle,
        Dialect::SqlServer,
        Dialect::Sqlite,
        Dialect::H2,
        Dialect::Dm,
        Dialect::Kingbase,
    ];

    /// Parse a dialect from a string (case-insensitive)
    ///
    /// Accepts the upper-case identifiers (`MYSQL`, `SQLSERVER`, `DM`, ...)
    /// along with a few common aliases:
    /// - PostgreSQL: `"postgres"`, `"pg"`
    /// - SQL Server: `"mssql"`
    /// - DM: `"dameng"`
    /// - KingbaseES: `"kingbasees"`
    ///
    /// ```
    /// use ddlgen_types::Dialect;
    ///
    /// assert_eq!(Dialect::parse("SQLSERVER"), Some(Dialect::SqlServer));
    /// assert_eq!(Dialect::parse("dameng"), Some(Dialect::Dm));
    /// assert_eq!(Dialect::parse("db2"), None);
    /// ```
    #[must_use]
    pub fn parse(s: &str) -> Option<Self> {
        let s = s.trim();
        let matches = |names: &[&str]| names.iter().any(|n| s.eq_ignore_ascii_case(n));

        if matches(&["mysql"]) {
            Some(Dialect::MySql)
        } else if matches(&["postgresql", "postgres", "pg"]) {
            Some(Dialect::PostgreSql)
        } else if matches(&["oracle"]) {
            Some(Dialect::Oracle)
        } else if matches(&["sqlserver", "mssql"]) {
            Some(Dialect::SqlServer)
        } else if matches(&["sqlite"]) {
            Some(Dialect::Sqlite)
        } else if matches(&["h2"]) {
            Some(Dialect::H2)
        } else if matches(&["dm", "dameng"]) {
            Some(Dialect::Dm)
        } else if matches(&["kingbase", "kingbasees"]) {
            Some(Dialect::Kingbase)
        } else {
            None
        }
    }

    /// Detect the dialect from a JDBC connection URL
    ///
    /// ```
    /// use ddlgen_types::Dialect;
    ///
    /// assert_eq!(
    ///     Dialect::from_jdbc_url("jdbc:kingbase8://localhost:54321/app"),
    ///     Some(Dialect::Kingbase)
    /// );
    /// assert_eq!(Dialect::from_jdbc_url("jdbc:db2://host/db"), None);
    /// ```
    #[must_use]
    pub fn from_jdbc_url(url: &str) -> Option<Self> {
        const PREFIXES: &[(&str, Dialect)] = &[
            ("jdbc:mysql:", Dialect::MySql),
            ("jdbc:mysqlc:", Dialect::MySql),
            ("jdbc:postgresql:", Dialect::PostgreSql),
            ("jdbc:oracle:", Dialect::Oracle),
            ("jdbc:sqlserver:", Dialect::SqlServer),
            ("jdbc:h2:", Dialect::H2),
            ("jdbc:sqlite:", Dialect::Sqlite),
            ("jdbc:dm:", Dialect::Dm),
            ("jdbc:kingbase8:", Dialect::Kingbase),
            ("jdbc:kingbase:", Dialect::Kingbase),
        ];

        PREFIXES
            .iter()
            .find(|(prefix, _)| url.starts_with(prefix))
            .map(|&(_, dialect)| dialect)
    }

    /// Get the dialect name as a lowercase string
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Dialect::MySql => "mysql",
            Dialect::PostgreSql => "postgresql",
            Dialect::Oracle => "oracle",
            Dialect::SqlServer => "sqlserver",
            Dialect::Sqlite => "sqlite",
            Dialect::H2 => "h2",
            Dialect::Dm => "dm",
            Dialect::Kingbase => "kingbase",
        }
    }

    /// Human readable engine name, used in error messages
    #[must_use]
    pub const fn display_name(&self) -> &'static str {
        match self {
            Dialect::MySql => "MySQL",
            Dialect::PostgreSql => "PostgreSQL",
            Dialect::Oracle => "Oracle",
            Dialect::SqlServer => "SQL Server",
            Dialect::Sqlite => "SQLite",
            Dialect::H2 => "H2",
            Dialect::Dm => "DM",
            Dialect::Kingbase => "KingbaseES",
        }
    }
}

impl core::fmt::Display for Dialect {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl core::str::FromStr for Dialect {
    type Err = DialectParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Dialect::parse(s).ok_or(DialectParseError)
    }
}

/// Error returned when parsing an unknown dialect string
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DialectParseError;

impl core::fmt::Display for DialectParseError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str("unknown dialect")
    }
}

impl std::error::Error for DialectParseError {}
