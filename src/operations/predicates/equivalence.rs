use itertools::Itertools;

use crate::datastructures::Assignment;
use crate::formulas::Formula;
use crate::operations::functions::evaluate;

/// Returns `true` if two formulas have the same truth value under every
/// assignment to the union of their variables.
///
/// The check enumerates all assignments, so its running time is exponential
/// in the number of variables. It is meant for testing transformations on
/// small formulas, not as a decision procedure for large ones.
///
/// # Example
///
/// Basic usage:
///
/// ```
/// # use connectives::formulas::Formula;
/// # use connectives::operations::predicates::is_equivalent;
/// let formula1: Formula = "(p->q)".parse().unwrap();
/// let formula2: Formula = "(~p|q)".parse().unwrap();
/// let formula3: Formula = "(q->p)".parse().unwrap();
///
/// assert!(is_equivalent(&formula1, &formula2));
/// assert!(!is_equivalent(&formula1, &formula3));
/// ```
pub fn is_equivalent(formula1: &Formula, formula2: &Formula) -> bool {
    let variables = formula1.variables().into_iter().merge(formula2.variables()).dedup().collect::<Vec<_>>();
    let equivalent = Assignment::all(&variables).all(|assignment| evaluate(formula1, &assignment) == evaluate(formula2, &assignment));
    equivalent
}
