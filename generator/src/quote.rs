//! Identifier quoting
//!
//! Identifiers are wrapped as-is. Embedded quote characters are not escaped.

/// Quote style owned by a dialect
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Quote {
    /// `` `name` `` (MySQL)
    Backtick,
    /// `[name]` (SQL Server)
    Bracket,
    /// `"name"`
    Double,
}

impl Quote {
    #[must_use]
    pub const fn open(&self) -> char {
        match self {
            Quote::Backtick => '`',
            Quote::Bracket => '[',
            Quote::Double => '"',
        }
    }

    #[must_use]
    pub const fn close(&self) -> char {
        match self {
            Quote::Backtick => '`',
            Quote::Bracket => ']',
            Quote::Double => '"',
        }
    }

    /// Wrap an identifier exactly once
    ///
    /// ```
    /// use ddlgen_generator::Quote;
    ///
    /// assert_eq!(Quote::Bracket.wrap("users"), "[users]");
    /// assert_eq!(Quote::Backtick.wrap("users"), "`users`");
    /// ```
    #[must_use]
    pub fn wrap(&self, ident: &str) -> String {
        let mut out = String::with_capacity(ident.len() + 2);
        out.push(self.open());
        out.push_str(ident);
        out.push(self.close());
        out
    }
}

impl core::fmt::Display for Quote {
    /// Shows the style applied to a placeholder, e.g. `[name]`
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "{}name{}", self.open(), self.close())
    }
}
