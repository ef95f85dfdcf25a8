/// A transformation takes a formula as input and returns another formula, thus
/// transforming the input formula. Examples for transformations are the
/// reductions to smaller sets of connectives like `{~, &}` or `{-&}`, and the
/// substitution of operators or variables.
pub mod transformations;

/// A predicate takes a formula as input and computes a truth value on that
/// formula, e.g. whether a formula uses only a certain set of connectives, or
/// whether two formulas are equivalent.
pub mod predicates;

/// A function takes a formula as input and computes some value on that formula.
/// This value can be a simple integer e.g. the depth of a formula, or a more
/// complex result type, like the set of variables or a truth table.
pub mod functions;
