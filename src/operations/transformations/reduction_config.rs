use crate::formulas::{is_variable, Formula, FormulaError};

/// Name of the default witness variable.
pub const DEFAULT_WITNESS: &str = "p";

/// `ReductionConfig` is the configuration of the connective reductions.
///
/// The reductions eliminate the constants `T` and `F` by replacing them with
/// a tautology or a contradiction over a *witness* variable, e.g. `T` becomes
/// `(p|~p)` in [`to_not_and_or`](super::to_not_and_or). The configuration
/// decides which variable is used as witness.
///
/// The default witness is `p`. If `p` already occurs in the formula, the
/// result is still equivalent, but the new occurrences of `p` cannot be told
/// apart from the existing ones. [`ReductionConfig::avoiding`] picks a
/// witness which is fresh for a given formula.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct ReductionConfig {
    witness: String,
}

impl ReductionConfig {
    /// Creates a new `ReductionConfig` with the default witness `p`.
    pub fn new() -> Self {
        Self { witness: DEFAULT_WITNESS.to_owned() }
    }

    /// Sets the witness variable.
    ///
    /// Fails with [`FormulaError::InvalidVariable`] if `name` is not a valid
    /// variable name.
    ///
    /// # Examples
    ///
    /// Basic usage:
    ///
    /// ```
    /// # use connectives::formulas::Formula;
    /// # use connectives::operations::transformations::{to_not_and_or_with, ReductionConfig};
    /// let config = ReductionConfig::new().with_witness("w").unwrap();
    ///
    /// assert_eq!(to_not_and_or_with(&Formula::verum(), &config).to_string(), "(w|~w)");
    /// assert!(ReductionConfig::new().with_witness("W").is_err());
    /// ```
    pub fn with_witness(mut self, name: &str) -> Result<Self, FormulaError> {
        if !is_variable(name) {
            return Err(FormulaError::InvalidVariable { name: name.to_owned() });
        }
        name.clone_into(&mut self.witness);
        Ok(self)
    }

    /// Creates a configuration whose witness does not occur in `formula`.
    ///
    /// The witness is the first of `p`, `p1`, `p2`, ... which is not a
    /// variable of `formula`.
    ///
    /// # Examples
    ///
    /// Basic usage:
    ///
    /// ```
    /// # use connectives::formulas::Formula;
    /// # use connectives::operations::transformations::ReductionConfig;
    /// let formula: Formula = "((p&p1)|T)".parse().unwrap();
    ///
    /// assert_eq!(ReductionConfig::avoiding(&formula).witness(), "p2");
    /// ```
    pub fn avoiding(formula: &Formula) -> Self {
        let variables = formula.variables();
        let witness = (0_usize..)
            .map(|index| if index == 0 { DEFAULT_WITNESS.to_owned() } else { format!("{DEFAULT_WITNESS}{index}") })
            .find(|candidate| !variables.contains(candidate))
            .unwrap_or_else(|| DEFAULT_WITNESS.to_owned());
        Self { witness }
    }

    /// Returns the name of the witness variable.
    pub fn witness(&self) -> &str {
        &self.witness
    }

    pub(crate) fn witness_var(&self) -> Formula {
        Formula::var(self.witness.as_str())
    }
}

impl Default for ReductionConfig {
    fn default() -> Self {
        Self::new()
    }
}
