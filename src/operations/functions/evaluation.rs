use crate::datastructures::Assignment;
use crate::formulas::Formula;

/// Evaluates a formula under the given assignment.
///
/// Variables which are not assigned evaluate to `false`.
///
/// # Example
///
/// Basic usage:
///
/// ```
/// # use connectives::datastructures::Assignment;
/// # use connectives::formulas::Formula;
/// # use connectives::operations::functions::evaluate;
/// let formula: Formula = "(p->~q)".parse().unwrap();
///
/// assert!(evaluate(&formula, &Assignment::from_names(&["p"], &["q"])));
/// assert!(!evaluate(&formula, &Assignment::from_names(&["p", "q"], &[])));
/// ```
pub fn evaluate(formula: &Formula, assignment: &Assignment) -> bool {
    match formula {
        Formula::Variable(name) => assignment.evaluate_var(name),
        Formula::Constant(value) => *value,
        Formula::Unary(op, operand) => op.apply(evaluate(operand, assignment)),
        Formula::Binary(op, left, right) => op.apply(evaluate(left, assignment), evaluate(right, assignment)),
    }
}

/// Returns the truth table of a formula over the given variables.
///
/// The rows are in the order of [`Assignment::all`]. Variables of the formula
/// which are not in `variables` are `false` in every row.
///
/// # Example
///
/// Basic usage:
///
/// ```
/// # use connectives::formulas::Formula;
/// # use connectives::operations::functions::truth_table;
/// let formula: Formula = "(p-&q)".parse().unwrap();
///
/// assert_eq!(truth_table(&formula, &["p", "q"]), vec![true, true, true, false]);
/// ```
pub fn truth_table<S: AsRef<str>>(formula: &Formula, variables: &[S]) -> Vec<bool> {
    Assignment::all(variables).map(|assignment| evaluate(formula, &assignment)).collect()
}
