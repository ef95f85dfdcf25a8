use std::collections::BTreeSet;

use crate::formulas::Formula;

/// Returns a set with all names of the variables in this formula.
///
/// # Example
///
/// Basic usage:
/// ```
/// # use connectives::formulas::Formula;
/// # use connectives::operations::functions::variables;
/// # use std::collections::BTreeSet;
/// let formula: Formula = "((p->q1)&~(T|p))".parse().unwrap();
///
/// assert_eq!(variables(&formula), BTreeSet::from(["p".to_string(), "q1".to_string()]));
/// ```
pub fn variables(formula: &Formula) -> BTreeSet<String> {
    let mut result = BTreeSet::new();
    collect_variables(formula, &mut result);
    result
}

fn collect_variables(formula: &Formula, result: &mut BTreeSet<String>) {
    match formula {
        Formula::Variable(name) => {
            if !result.contains(name) {
                result.insert(name.clone());
            }
        }
        Formula::Constant(_) => {}
        Formula::Unary(_, op) => collect_variables(op, result),
        Formula::Binary(_, left, right) => {
            collect_variables(left, result);
            collect_variables(right, result);
        }
    }
}
