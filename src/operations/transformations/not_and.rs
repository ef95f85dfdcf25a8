use tracing::trace;

use crate::formulas::{BinaryOperator, Formula};
use crate::operations::functions::number_of_nodes;

use super::ReductionConfig;

/// Reduces `formula` to an equivalent formula which only contains the
/// operators `~` and `&`.
///
/// Uses the default [`ReductionConfig`], i.e. constants are expressed with
/// the witness variable `p`: `T` becomes `~(p&~p)` and `F` becomes `(p&~p)`.
///
/// # Examples
///
/// Basic usage:
///
/// ```
/// # use connectives::formulas::Formula;
/// # use connectives::operations::transformations::to_not_and;
/// let formula: Formula = "(p|q)".parse().unwrap();
///
/// assert_eq!(to_not_and(&formula).to_string(), "~(~p&~q)");
/// ```
pub fn to_not_and(formula: &Formula) -> Formula {
    to_not_and_with(formula, &ReductionConfig::default())
}

/// Reduces `formula` to an equivalent formula which only contains the
/// operators `~` and `&`, using the witness of `config` for constants.
pub fn to_not_and_with(formula: &Formula, config: &ReductionConfig) -> Formula {
    let result = not_and_rec(formula, config);
    trace!(input = %formula, output = %result, nodes = number_of_nodes(&result), "reduced to not-and");
    result
}

fn not_and_rec(formula: &Formula, config: &ReductionConfig) -> Formula {
    match formula {
        Formula::Variable(_) => formula.clone(),
        Formula::Constant(value) => {
            let p = config.witness_var();
            let contradiction = Formula::and(p.clone(), Formula::not(p));
            if *value {
                Formula::not(contradiction)
            } else {
                contradiction
            }
        }
        Formula::Unary(op, operand) => Formula::unary(*op, not_and_rec(operand, config)),
        Formula::Binary(op, left, right) => {
            let a = not_and_rec(left, config);
            let b = not_and_rec(right, config);
            match op {
                BinaryOperator::And => Formula::and(a, b),
                BinaryOperator::Or => Formula::not(Formula::and(Formula::not(a), Formula::not(b))),
                BinaryOperator::Implies => Formula::not(Formula::and(a, Formula::not(b))),
                BinaryOperator::Xor => {
                    let left_only = Formula::and(a.clone(), Formula::not(b.clone()));
                    let right_only = Formula::and(Formula::not(a), b);
                    Formula::not(Formula::and(Formula::not(left_only), Formula::not(right_only)))
                }
                BinaryOperator::Iff => {
                    let both = Formula::and(a.clone(), b.clone());
                    let neither = Formula::and(Formula::not(a), Formula::not(b));
                    Formula::not(Formula::and(Formula::not(both), Formula::not(neither)))
                }
                BinaryOperator::Nand => Formula::not(Formula::and(a, b)),
                BinaryOperator::Nor => Formula::and(Formula::not(a), Formula::not(b)),
            }
        }
    }
}
