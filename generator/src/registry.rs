//! Explicit dialect to strategy mapping

use ddlgen_types::Dialect;

use crate::{DdlError, DdlStrategy, Result, strategy_for};

/// Strategies available to a caller, built once and passed by reference.
///
/// Lookup fails fast when a dialect is claimed by no strategy or by more
/// than one.
///
/// ```
/// use ddlgen_generator::Registry;
/// use ddlgen_types::Dialect;
///
/// let registry = Registry::builtin();
/// registry.validate().unwrap();
/// let oracle = registry.strategy(Dialect::Oracle).unwrap();
/// assert_eq!(oracle.drop_table("t"), "DROP TABLE \"t\" CASCADE CONSTRAINTS");
/// ```
#[derive(Clone)]
pub struct Registry<'a> {
    strategies: Vec<&'a dyn DdlStrategy>,
}

impl Registry<'static> {
    /// One built-in strategy per dialect
    #[must_use]
    pub fn builtin() -> Self {
        Self::new(Dialect::ALL.iter().map(|&d| strategy_for(d)).collect())
    }
}

impl Default for Registry<'static> {
    fn default() -> Self {
        Self::builtin()
    }
}

impl<'a> Registry<'a> {
    #[must_use]
    pub fn new(strategies: Vec<&'a dyn DdlStrategy>) -> Self {
        Self { strategies }
    }

    /// The single strategy supporting `dialect`
    pub fn strategy(&self, dialect: Dialect) -> Result<&'a dyn DdlStrategy> {
        let mut matching = self.strategies.iter().filter(|s| s.supports(dialect));
        match (matching.next(), matching.count()) {
            (None, _) => Err(DdlError::NoStrategy(dialect)),
            (Some(&strategy), 0) => Ok(strategy),
            (Some(_), rest) => Err(DdlError::AmbiguousStrategy {
                dialect,
                count: rest + 1,
            }),
        }
    }

    /// Check that every dialect resolves to exactly one strategy
    pub fn validate(&self) -> Result<()> {
        for dialect in Dialect::ALL {
            self.strategy(dialect)?;
        }
        Ok(())
    }

    /// Dialects claimed by at least one registered strategy, in registration order
    pub fn dialects(&self) -> impl Iterator<Item = Dialect> + '_ {
        self.strategies.iter().map(|s| s.dialect())
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.strategies.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.strategies.is_empty()
    }
}

impl core::fmt::Debug for Registry<'_> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_list().entries(self.dialects()).finish()
    }
}
