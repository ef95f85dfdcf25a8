#![allow(non_snake_case)]
#![allow(dead_code)]

use std::collections::BTreeSet;

use crate::formulas::Formula;
use crate::operations::predicates::is_equivalent;

pub fn string_vars(elements: &str) -> BTreeSet<String> {
    elements.split(' ').map(String::from).collect()
}

pub fn parse(input: &str) -> Formula {
    Formula::parse(input).unwrap()
}

pub fn assert_equivalent(expected: &Formula, actual: &Formula) {
    assert!(is_equivalent(expected, actual), "{actual} is not equivalent to {expected}");
}

#[allow(clippy::struct_field_names)]
pub struct F {
    // Constants
    pub(crate) TRUE: Formula,
    pub(crate) FALSE: Formula,

    // Variables and negated variables
    pub(crate) P: Formula,
    pub(crate) Q: Formula,
    pub(crate) R: Formula,
    pub(crate) NP: Formula,
    pub(crate) NQ: Formula,

    // One formula per binary operator over p and q
    pub(crate) AND1: Formula,
    pub(crate) OR1: Formula,
    pub(crate) IMP1: Formula,
    pub(crate) XOR1: Formula,
    pub(crate) IFF1: Formula,
    pub(crate) NAND1: Formula,
    pub(crate) NOR1: Formula,

    // Compound formulas
    pub(crate) NOT1: Formula,
    pub(crate) NOT2: Formula,
    pub(crate) NESTED: Formula,
    pub(crate) CONSTANTS: Formula,
}

impl F {
    pub(crate) fn new() -> Self {
        let TRUE = Formula::verum();
        let FALSE = Formula::falsum();

        let P = Formula::var("p");
        let Q = Formula::var("q");
        let R = Formula::var("r");
        let NP = Formula::not(P.clone());
        let NQ = Formula::not(Q.clone());

        let AND1 = Formula::and(P.clone(), Q.clone());
        let OR1 = Formula::or(P.clone(), Q.clone());
        let IMP1 = Formula::implies(P.clone(), Q.clone());
        let XOR1 = Formula::xor(P.clone(), Q.clone());
        let IFF1 = Formula::iff(P.clone(), Q.clone());
        let NAND1 = Formula::nand(P.clone(), Q.clone());
        let NOR1 = Formula::nor(P.clone(), Q.clone());

        let NOT1 = Formula::not(AND1.clone());
        let NOT2 = Formula::not(OR1.clone());
        let NESTED = parse("(((p&q)->~q)+(r&F))");
        let CONSTANTS = parse("((T->q)<->~(F-|r))");
        Self {
            TRUE,
            FALSE,
            P,
            Q,
            R,
            NP,
            NQ,
            AND1,
            OR1,
            IMP1,
            XOR1,
            IFF1,
            NAND1,
            NOR1,
            NOT1,
            NOT2,
            NESTED,
            CONSTANTS,
        }
    }
}
