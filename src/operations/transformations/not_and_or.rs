use tracing::trace;

use crate::formulas::{BinaryOperator, Formula};
use crate::operations::functions::number_of_nodes;

use super::ReductionConfig;

/// Reduces `formula` to an equivalent formula which only contains the
/// operators `~`, `&`, and `|`.
///
/// Uses the default [`ReductionConfig`], i.e. constants are expressed with
/// the witness variable `p`: `T` becomes `(p|~p)` and `F` becomes `(p&~p)`.
///
/// # Examples
///
/// Basic usage:
///
/// ```
/// # use connectives::formulas::Formula;
/// # use connectives::operations::transformations::to_not_and_or;
/// let formula: Formula = "(p->q)".parse().unwrap();
///
/// assert_eq!(to_not_and_or(&formula).to_string(), "(~p|q)");
/// ```
pub fn to_not_and_or(formula: &Formula) -> Formula {
    to_not_and_or_with(formula, &ReductionConfig::default())
}

/// Reduces `formula` to an equivalent formula which only contains the
/// operators `~`, `&`, and `|`, using the witness of `config` for constants.
pub fn to_not_and_or_with(formula: &Formula, config: &ReductionConfig) -> Formula {
    let result = not_and_or_rec(formula, config);
    trace!(input = %formula, output = %result, nodes = number_of_nodes(&result), "reduced to not-and-or");
    result
}

fn not_and_or_rec(formula: &Formula, config: &ReductionConfig) -> Formula {
    match formula {
        Formula::Variable(_) => formula.clone(),
        Formula::Constant(true) => {
            let p = config.witness_var();
            Formula::or(p.clone(), Formula::not(p))
        }
        Formula::Constant(false) => {
            let p = config.witness_var();
            Formula::and(p.clone(), Formula::not(p))
        }
        Formula::Unary(op, operand) => Formula::unary(*op, not_and_or_rec(operand, config)),
        Formula::Binary(op, left, right) => {
            let a = not_and_or_rec(left, config);
            let b = not_and_or_rec(right, config);
            match op {
                BinaryOperator::And => Formula::and(a, b),
                BinaryOperator::Or => Formula::or(a, b),
                BinaryOperator::Implies => Formula::or(Formula::not(a), b),
                BinaryOperator::Xor => {
                    let left_only = Formula::and(a.clone(), Formula::not(b.clone()));
                    let right_only = Formula::and(Formula::not(a), b);
                    Formula::or(left_only, right_only)
                }
                BinaryOperator::Iff => {
                    let forward = Formula::or(Formula::not(a.clone()), b.clone());
                    let backward = Formula::or(a, Formula::not(b));
                    Formula::and(forward, backward)
                }
                BinaryOperator::Nand => Formula::not(Formula::and(a, b)),
                BinaryOperator::Nor => Formula::not(Formula::or(a, b)),
            }
        }
    }
}
