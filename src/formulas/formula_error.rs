use thiserror::Error;

/// Errors raised when raw labels or text enter the crate.
///
/// Formulas themselves are well-formed by construction, so these errors only
/// occur at the boundaries: classifying a label, building a node from a
/// label, building an operator substitution from labels, configuring a
/// witness variable, or parsing text.
#[derive(Error, Clone, Debug, PartialEq, Eq)]
pub enum FormulaError {
    /// A label which is neither a variable, a constant, nor a known operator.
    #[error("unsupported operator '{label}'")]
    UnsupportedOperator {
        /// the offending label
        label: String,
    },
    /// A node was given the wrong number of operands for its label.
    #[error("operator '{label}' expects {expected} operand(s), got {actual}")]
    ArityMismatch {
        /// the label of the node
        label: String,
        /// number of operands required by the label
        expected: usize,
        /// number of operands given
        actual: usize,
    },
    /// A name which is not a valid variable label.
    #[error("'{name}' is not a valid variable name")]
    InvalidVariable {
        /// the offending name
        name: String,
    },
    /// Text which is not a formula.
    #[error("cannot parse formula: {message}")]
    Parse {
        /// the positional message of the parser
        message: String,
    },
}

impl FormulaError {
    pub(crate) fn unsupported(label: &str) -> Self {
        Self::UnsupportedOperator { label: label.to_owned() }
    }
}
