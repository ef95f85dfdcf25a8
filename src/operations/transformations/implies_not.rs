use tracing::trace;

use crate::formulas::{Connective, Formula};
use crate::operations::functions::number_of_nodes;

use super::{substitute_operators, to_nand_with, OperatorSubstitution, ReductionConfig, FIRST_PLACEHOLDER, SECOND_PLACEHOLDER};

/// Reduces `formula` to an equivalent formula which only contains the
/// operators `->` and `~`.
///
/// The formula is first reduced with [`to_nand`](super::to_nand), then every
/// `(a-&b)` is replaced by `(a->~b)`.
///
/// # Examples
///
/// Basic usage:
///
/// ```
/// # use connectives::formulas::Formula;
/// # use connectives::operations::transformations::to_implies_not;
/// let formula: Formula = "~p".parse().unwrap();
///
/// assert_eq!(to_implies_not(&formula).to_string(), "(p->~p)");
/// ```
pub fn to_implies_not(formula: &Formula) -> Formula {
    to_implies_not_with(formula, &ReductionConfig::default())
}

/// Reduces `formula` to an equivalent formula which only contains the
/// operators `->` and `~`, using the witness of `config` for constants.
pub fn to_implies_not_with(formula: &Formula, config: &ReductionConfig) -> Formula {
    let nand = to_nand_with(formula, config);
    let result = substitute_operators(&nand, &nand_as_implies_not());
    trace!(input = %formula, output = %result, nodes = number_of_nodes(&result), "reduced to implies-not");
    result
}

/// `{-& ↦ (p->~q)}`
fn nand_as_implies_not() -> OperatorSubstitution {
    let template = Formula::implies(Formula::var(FIRST_PLACEHOLDER), Formula::not(Formula::var(SECOND_PLACEHOLDER)));
    OperatorSubstitution::from([(Connective::NAND, template)])
}

#[cfg(test)]
mod tests {
    use crate::operations::functions::truth_table;
    use crate::operations::predicates::is_implies_not;
    use crate::operations::transformations::{substitute_operators, to_implies_not, to_implies_not_with, to_nand, ReductionConfig};
    use crate::util::test_formula_corner_cases::formula_corner_cases;
    use crate::util::test_util::{assert_equivalent, parse, string_vars, F};

    use super::nand_as_implies_not;

    #[test]
    fn test_literals() {
        let ff = F::new();
        assert_eq!(ff.P, to_implies_not(&ff.P));
        assert_eq!(parse("(p->~p)"), to_implies_not(&ff.NP));
    }

    #[test]
    fn test_nand() {
        let ff = F::new();
        let result = to_implies_not(&ff.NAND1);
        assert!(is_implies_not(&result));
        let table = truth_table(&result, &["p", "q"]);
        assert_eq!(vec![true, true, true, false], table);
        assert_eq!(parse("(((p->~q)->~(p->~q))->~((p->~q)->~(p->~q)))"), result);
    }

    #[test]
    fn test_binary_operators() {
        let ff = F::new();
        assert_eq!(parse("((p->~q)->~(p->~q))"), to_implies_not(&ff.AND1));
        for formula in [&ff.OR1, &ff.IMP1, &ff.XOR1, &ff.IFF1, &ff.NAND1, &ff.NOR1] {
            let result = to_implies_not(formula);
            assert!(is_implies_not(&result), "{result}");
            assert_equivalent(formula, &result);
        }
    }

    #[test]
    fn test_constants() {
        let ff = F::new();
        for formula in [&ff.TRUE, &ff.FALSE, &ff.CONSTANTS] {
            let result = to_implies_not(formula);
            assert!(is_implies_not(&result), "{result}");
            assert_equivalent(formula, &result);
        }
        let verum = "(p->~(p->~p))";
        let falsum = format!("({verum}->~{verum})");
        assert_eq!(parse(&falsum), to_implies_not(&ff.FALSE));
        assert_eq!(parse(&format!("({falsum}->~{falsum})")), to_implies_not(&ff.TRUE));
    }

    #[test]
    fn test_constants_with_witness() {
        let ff = F::new();
        let config = ReductionConfig::new().with_witness("w").unwrap();
        for formula in [&ff.TRUE, &ff.FALSE] {
            let result = to_implies_not_with(formula, &config);
            assert!(is_implies_not(&result), "{result}");
            assert_eq!(string_vars("w"), result.variables());
            assert_equivalent(formula, &result);
        }
    }

    #[test]
    fn test_chained_with_nand() {
        let ff = F::new();
        for formula in [&ff.NESTED, &ff.NOT2, &ff.XOR1] {
            assert_eq!(substitute_operators(&to_nand(formula), &nand_as_implies_not()), to_implies_not(formula));
        }
    }

    #[test]
    fn test_idempotent_on_restricted_input() {
        let formula = parse("(~p->(q->~r))");
        let result = to_implies_not(&formula);
        assert!(is_implies_not(&result));
        assert_equivalent(&formula, &result);
    }

    #[test]
    fn test_corner_cases() {
        let (formulas, _) = formula_corner_cases();
        for formula in formulas {
            let result = to_implies_not(&formula);
            assert!(is_implies_not(&result), "{result}");
            assert_equivalent(&formula, &result);
        }
    }
}
