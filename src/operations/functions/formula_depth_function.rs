use crate::formulas::Formula;

/// A function that returns the depth of a formula's abstract syntax tree. The
/// depth of a formula indicates how many levels of nested sub-formulas a
/// formula has. For example,
///
/// - `p` has depth zero,
/// - `(p&q)` has depth one,
/// - `((p&q)|r)` has depth two,
/// - `~((p&q)|~r)` has depth three.
///
/// # Example
///
/// Basic usage:
///
/// ```
/// # use connectives::formulas::Formula;
/// # use connectives::operations::functions::formula_depth;
/// let formula1: Formula = "p".parse().unwrap();
/// let formula2: Formula = "(p&q)".parse().unwrap();
/// let formula3: Formula = "((p&q)|r)".parse().unwrap();
/// let formula4: Formula = "~((p&q)|~r)".parse().unwrap();
///
/// assert_eq!(formula_depth(&formula1), 0);
/// assert_eq!(formula_depth(&formula2), 1);
/// assert_eq!(formula_depth(&formula3), 2);
/// assert_eq!(formula_depth(&formula4), 3);
/// ```
pub fn formula_depth(formula: &Formula) -> u64 {
    match formula {
        Formula::Variable(_) | Formula::Constant(_) => 0,
        Formula::Unary(_, op) => 1 + formula_depth(op),
        Formula::Binary(_, left, right) => 1 + formula_depth(left).max(formula_depth(right)),
    }
}
