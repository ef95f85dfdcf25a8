use crate::formulas::Formula;

/// Returns the number of nodes of a formula's abstract syntax tree.
///
/// Every variable, constant, and operator occurrence counts as one node.
///
/// # Example
///
/// Basic usage:
///
/// ```
/// # use connectives::formulas::Formula;
/// # use connectives::operations::functions::number_of_nodes;
/// let formula: Formula = "((p&q)|~p)".parse().unwrap();
///
/// assert_eq!(number_of_nodes(&formula), 6);
/// ```
pub fn number_of_nodes(formula: &Formula) -> usize {
    match formula {
        Formula::Variable(_) | Formula::Constant(_) => 1,
        Formula::Unary(_, op) => 1 + number_of_nodes(op),
        Formula::Binary(_, left, right) => 1 + number_of_nodes(left) + number_of_nodes(right),
    }
}
