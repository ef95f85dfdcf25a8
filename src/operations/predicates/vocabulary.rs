use crate::formulas::{Connective, Formula};

/// Connectives of the results of [`to_not_and_or`](crate::operations::transformations::to_not_and_or).
pub const NOT_AND_OR_CONNECTIVES: [Connective; 3] = [Connective::NOT, Connective::AND, Connective::OR];
/// Connectives of the results of [`to_not_and`](crate::operations::transformations::to_not_and).
pub const NOT_AND_CONNECTIVES: [Connective; 2] = [Connective::NOT, Connective::AND];
/// Connectives of the results of [`to_nand`](crate::operations::transformations::to_nand).
pub const NAND_CONNECTIVES: [Connective; 1] = [Connective::NAND];
/// Connectives of the results of [`to_implies_not`](crate::operations::transformations::to_implies_not).
pub const IMPLIES_NOT_CONNECTIVES: [Connective; 2] = [Connective::IMPLIES, Connective::NOT];
/// Connectives of the results of [`to_implies_false`](crate::operations::transformations::to_implies_false).
pub const IMPLIES_FALSE_CONNECTIVES: [Connective; 2] = [Connective::IMPLIES, Connective::FALSE];

/// Vocabulary predicate. Indicates whether all constants and operators of a
/// formula are contained in `allowed`. Variables are always allowed.
///
/// # Example
///
/// Basic usage:
///
/// ```
/// # use connectives::formulas::{Connective, Formula};
/// # use connectives::operations::predicates::uses_only;
/// let formula: Formula = "(~p&(q|F))".parse().unwrap();
///
/// assert!(uses_only(&formula, &[Connective::NOT, Connective::AND, Connective::OR, Connective::FALSE]));
/// assert!(!uses_only(&formula, &[Connective::NOT, Connective::AND, Connective::OR]));
/// ```
pub fn uses_only(formula: &Formula, allowed: &[Connective]) -> bool {
    formula.connective().is_none_or(|connective| allowed.contains(&connective))
        && formula.first().is_none_or(|first| uses_only(first, allowed))
        && formula.second().is_none_or(|second| uses_only(second, allowed))
}

/// Returns `true` if the formula contains no constants and no operators
/// besides `~`, `&`, and `|`.
pub fn is_not_and_or(formula: &Formula) -> bool {
    uses_only(formula, &NOT_AND_OR_CONNECTIVES)
}

/// Returns `true` if the formula contains no constants and no operators
/// besides `~` and `&`.
pub fn is_not_and(formula: &Formula) -> bool {
    uses_only(formula, &NOT_AND_CONNECTIVES)
}

/// Returns `true` if the formula contains no constants and no operators
/// besides `-&`.
pub fn is_nand(formula: &Formula) -> bool {
    uses_only(formula, &NAND_CONNECTIVES)
}

/// Returns `true` if the formula contains no constants and no operators
/// besides `->` and `~`.
pub fn is_implies_not(formula: &Formula) -> bool {
    uses_only(formula, &IMPLIES_NOT_CONNECTIVES)
}

/// Returns `true` if the formula contains no operators besides `->` and no
/// constants besides `F`.
pub fn is_implies_false(formula: &Formula) -> bool {
    uses_only(formula, &IMPLIES_FALSE_CONNECTIVES)
}

#[cfg(test)]
mod tests {
    use crate::operations::predicates::{is_implies_false, is_implies_not, is_nand, is_not_and, is_not_and_or};
    use crate::util::test_util::{parse, F};

    #[test]
    fn test_variables_are_always_allowed() {
        let ff = F::new();
        assert!(is_not_and_or(&ff.P));
        assert!(is_not_and(&ff.P));
        assert!(is_nand(&ff.P));
        assert!(is_implies_not(&ff.P));
        assert!(is_implies_false(&ff.P));
    }

    #[test]
    fn test_constants() {
        let ff = F::new();
        assert!(!is_not_and_or(&ff.TRUE));
        assert!(!is_not_and(&ff.FALSE));
        assert!(!is_nand(&ff.TRUE));
        assert!(!is_implies_not(&ff.FALSE));
        assert!(is_implies_false(&ff.FALSE));
        assert!(!is_implies_false(&ff.TRUE));
    }

    #[test]
    fn test_operators() {
        let ff = F::new();
        assert!(is_not_and_or(&ff.NOT2));
        assert!(is_not_and_or(&ff.NOT1));
        assert!(!is_not_and_or(&ff.IMP1));
        assert!(is_not_and(&ff.NOT1));
        assert!(!is_not_and(&ff.NOT2));
        assert!(is_nand(&ff.NAND1));
        assert!(is_nand(&parse("((p-&q)-&(r-&r))")));
        assert!(!is_nand(&ff.NP));
        assert!(is_implies_not(&parse("(~p->~(q->r))")));
        assert!(!is_implies_not(&ff.NOR1));
        assert!(is_implies_false(&parse("((p->F)->(q->F))")));
        assert!(!is_implies_false(&parse("((p->F)->~q)")));
    }

    #[test]
    fn test_nested_violations() {
        assert!(!is_not_and(&parse("~(p&~(q&~T))")));
        assert!(!is_not_and_or(&parse("((p|q)&~(r|(q->p)))")));
        assert!(!is_nand(&parse("((p-&q)-&(r-&~r))")));
        assert!(is_implies_false(&parse("((p->(q->F))->((r->F)->F))")));
        assert!(!is_implies_false(&parse("((p->(q->F))->((r->T)->F))")));
    }
}
