use std::collections::BTreeSet;

use crate::formulas::{BinaryOperator, Formula};

pub fn formula_corner_cases() -> (Vec<Formula>, BTreeSet<String>) {
    let p = Formula::var("p");
    let q = Formula::var("q");
    let np = Formula::not(p.clone());
    let nq = Formula::not(q.clone());
    let not_not_p = Formula::not(np.clone());
    let mut formulas = vec![
        Formula::falsum(),
        Formula::not(Formula::falsum()),
        Formula::verum(),
        Formula::not(Formula::verum()),
        p.clone(),
        np.clone(),
        not_not_p.clone(),
        Formula::not(not_not_p),
    ];
    for op in BinaryOperator::ALL {
        for (left, right) in binary_corner_cases(&p, &q, &np, &nq) {
            formulas.push(Formula::binary(op, left, right));
        }
    }
    (formulas, BTreeSet::from([String::from("p"), String::from("q")]))
}

fn binary_corner_cases(p: &Formula, q: &Formula, np: &Formula, nq: &Formula) -> Vec<(Formula, Formula)> {
    let t = Formula::verum;
    let f = Formula::falsum;
    vec![
        (t(), t()),
        (f(), t()),
        (t(), f()),
        (f(), f()),
        (t(), p.clone()),
        (p.clone(), t()),
        (t(), np.clone()),
        (np.clone(), t()),
        (f(), p.clone()),
        (p.clone(), f()),
        (f(), np.clone()),
        (np.clone(), f()),
        (p.clone(), p.clone()),
        (p.clone(), np.clone()),
        (np.clone(), p.clone()),
        (np.clone(), np.clone()),
        (p.clone(), q.clone()),
        (p.clone(), nq.clone()),
        (np.clone(), q.clone()),
        (np.clone(), nq.clone()),
    ]
}
