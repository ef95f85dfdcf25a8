use crate::formulas::Formula;

pub fn panic_unexpected_connective(formula: &Formula, transformation: &str) -> ! {
    match formula.connective() {
        Some(connective) => panic!("Unexpected connective '{connective}' in {transformation}: {formula}"),
        None => panic!("Unexpected formula in {transformation}: {formula}"),
    }
}
