use tracing::trace;

use crate::formulas::{BinaryOperator, Formula};
use crate::operations::functions::number_of_nodes;
use crate::util::exceptions::panic_unexpected_connective;

use super::{to_not_and_with, ReductionConfig};

/// Reduces `formula` to an equivalent formula which only contains the
/// operator `-&`.
///
/// The formula is first reduced with [`to_not_and`](super::to_not_and).
/// Then `~x` is expressed as `(x-&x)` and `(a&b)` as `((a-&b)-&(a-&b))`.
/// Constants are already replaced there by `~(p&~p)` and `(p&~p)` over the
/// witness variable `p` of the default [`ReductionConfig`].
///
/// The result duplicates subformulas, so its size grows exponentially with
/// the nesting depth of the input.
///
/// # Examples
///
/// Basic usage:
///
/// ```
/// # use connectives::formulas::Formula;
/// # use connectives::operations::transformations::to_nand;
/// let formula: Formula = "~p".parse().unwrap();
///
/// assert_eq!(to_nand(&formula).to_string(), "(p-&p)");
/// ```
pub fn to_nand(formula: &Formula) -> Formula {
    to_nand_with(formula, &ReductionConfig::default())
}

/// Reduces `formula` to an equivalent formula which only contains the
/// operator `-&`, using the witness of `config` for constants.
pub fn to_nand_with(formula: &Formula, config: &ReductionConfig) -> Formula {
    let not_and = to_not_and_with(formula, config);
    let result = nand_rec(&not_and, config);
    trace!(input = %formula, output = %result, nodes = number_of_nodes(&result), "reduced to nand");
    result
}

fn nand_rec(formula: &Formula, config: &ReductionConfig) -> Formula {
    match formula {
        Formula::Variable(_) => formula.clone(),
        Formula::Constant(true) => nand_verum(config),
        Formula::Constant(false) => {
            let verum = nand_verum(config);
            Formula::nand(verum.clone(), verum)
        }
        Formula::Unary(_, operand) => {
            let b = nand_rec(operand, config);
            Formula::nand(b.clone(), b)
        }
        Formula::Binary(BinaryOperator::And, left, right) => {
            let d = Formula::nand(nand_rec(left, config), nand_rec(right, config));
            Formula::nand(d.clone(), d)
        }
        Formula::Binary(..) => panic_unexpected_connective(formula, "to_nand"),
    }
}

/// `(p-&(p-&p))`
fn nand_verum(config: &ReductionConfig) -> Formula {
    let p = config.witness_var();
    Formula::nand(p.clone(), Formula::nand(p.clone(), p))
}

#[cfg(test)]
mod tests {
    use super::{nand_rec, nand_verum};
    use crate::operations::predicates::is_nand;
    use crate::operations::transformations::{to_nand, to_nand_with, ReductionConfig};
    use crate::util::test_formula_corner_cases::formula_corner_cases;
    use crate::util::test_util::{assert_equivalent, parse, string_vars, F};

    #[test]
    fn test_literals() {
        let ff = F::new();
        assert_eq!(ff.P, to_nand(&ff.P));
        assert_eq!(parse("(p-&p)"), to_nand(&ff.NP));
        assert_eq!(parse("((q-&q)-&(q-&q))"), to_nand(&parse("~~q")));
    }

    #[test]
    fn test_nand_rec_constants() {
        let config = ReductionConfig::default();
        assert_eq!(parse("(p-&(p-&p))"), nand_verum(&config));
        assert_eq!(parse("(p-&(p-&p))"), nand_rec(&parse("T"), &config));
        assert_eq!(parse("((p-&(p-&p))-&(p-&(p-&p)))"), nand_rec(&parse("F"), &config));
    }

    #[test]
    fn test_nand_rec_and() {
        let config = ReductionConfig::default();
        assert_eq!(parse("((p-&q)-&(p-&q))"), nand_rec(&parse("(p&q)"), &config));
        assert_eq!(parse("(((p-&p)-&q)-&((p-&p)-&q))"), nand_rec(&parse("(~p&q)"), &config));
    }

    #[test]
    #[should_panic(expected = "Unexpected connective '|' in to_nand")]
    fn test_nand_rec_rejects_other_operators() {
        nand_rec(&parse("(p|q)"), &ReductionConfig::default());
    }

    #[test]
    fn test_binary_operators() {
        let ff = F::new();
        assert_eq!(parse("((p-&q)-&(p-&q))"), to_nand(&ff.AND1));
        assert_eq!(parse("(((p-&q)-&(p-&q))-&((p-&q)-&(p-&q)))"), to_nand(&ff.NAND1));
        for formula in [&ff.OR1, &ff.IMP1, &ff.XOR1, &ff.IFF1, &ff.NOR1] {
            let result = to_nand(formula);
            assert!(is_nand(&result), "{result}");
            assert_equivalent(formula, &result);
        }
    }

    #[test]
    fn test_constants() {
        let ff = F::new();
        for formula in [&ff.TRUE, &ff.FALSE, &ff.CONSTANTS] {
            let result = to_nand(formula);
            assert!(is_nand(&result), "{result}");
            assert_equivalent(formula, &result);
        }
        let verum = "(p-&(p-&p))";
        let falsum = format!("({verum}-&{verum})");
        assert_eq!(parse(&falsum), to_nand(&ff.FALSE));
        assert_eq!(parse(&format!("({falsum}-&{falsum})")), to_nand(&ff.TRUE));
        let config = ReductionConfig::new().with_witness("v").unwrap();
        let result = to_nand_with(&ff.TRUE, &config);
        assert_eq!(string_vars("v"), result.variables());
    }

    #[test]
    fn test_nested() {
        let ff = F::new();
        let result = to_nand(&ff.NESTED);
        assert!(is_nand(&result));
        assert_equivalent(&ff.NESTED, &result);
    }

    #[test]
    fn test_idempotent_on_restricted_input() {
        let ff = F::new();
        for formula in [&ff.NAND1, &parse("((p-&q)-&(r-&r))")] {
            let result = to_nand(formula);
            assert!(is_nand(&result));
            assert_equivalent(formula, &result);
        }
    }

    #[test]
    fn test_corner_cases() {
        let (formulas, _) = formula_corner_cases();
        for formula in formulas {
            let result = to_nand(&formula);
            assert!(is_nand(&result), "{result}");
            assert_equivalent(&formula, &result);
        }
    }
}
