use tracing::trace;

use crate::formulas::{Connective, Formula};
use crate::operations::functions::number_of_nodes;

use super::{substitute_operators, to_implies_not_with, OperatorSubstitution, ReductionConfig, FIRST_PLACEHOLDER};

/// Reduces `formula` to an equivalent formula which only contains the
/// operator `->` and the constant `F`.
///
/// The formula is first reduced with [`to_implies_not`](super::to_implies_not),
/// then every `~a` is replaced by `(a->F)`.
///
/// # Examples
///
/// Basic usage:
///
/// ```
/// # use connectives::formulas::Formula;
/// # use connectives::operations::transformations::to_implies_false;
/// let formula: Formula = "~p".parse().unwrap();
///
/// assert_eq!(to_implies_false(&formula).to_string(), "(p->(p->F))");
/// ```
pub fn to_implies_false(formula: &Formula) -> Formula {
    to_implies_false_with(formula, &ReductionConfig::default())
}

/// Reduces `formula` to an equivalent formula which only contains the
/// operator `->` and the constant `F`, using the witness of `config` for
/// the constants of the input.
pub fn to_implies_false_with(formula: &Formula, config: &ReductionConfig) -> Formula {
    let implies_not = to_implies_not_with(formula, config);
    let result = substitute_operators(&implies_not, &not_as_implies_false());
    trace!(input = %formula, output = %result, nodes = number_of_nodes(&result), "reduced to implies-false");
    result
}

/// `{~ ↦ (p->F)}`
fn not_as_implies_false() -> OperatorSubstitution {
    OperatorSubstitution::from([(Connective::NOT, Formula::implies(Formula::var(FIRST_PLACEHOLDER), Formula::falsum()))])
}
