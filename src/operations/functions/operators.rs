use std::collections::BTreeSet;

use crate::formulas::{Connective, Formula};

/// Returns all connectives (constants and operators) occurring in this
/// formula.
///
/// # Example
///
/// Basic usage:
/// ```
/// # use connectives::formulas::{Connective, Formula};
/// # use connectives::operations::functions::operators;
/// # use std::collections::BTreeSet;
/// let formula: Formula = "((p->q)&~(T|p))".parse().unwrap();
///
/// let expected = BTreeSet::from([Connective::TRUE, Connective::NOT, Connective::AND, Connective::OR, Connective::IMPLIES]);
/// assert_eq!(operators(&formula), expected);
/// ```
pub fn operators(formula: &Formula) -> BTreeSet<Connective> {
    let mut result = BTreeSet::new();
    collect_operators(formula, &mut result);
    result
}

fn collect_operators(formula: &Formula, result: &mut BTreeSet<Connective>) {
    if let Some(connective) = formula.connective() {
        result.insert(connective);
    }
    if let Some(first) = formula.first() {
        collect_operators(first, result);
    }
    if let Some(second) = formula.second() {
        collect_operators(second, result);
    }
}
