use crate::formulas::{Formula, FormulaError};
use crate::parser::parse;

fn p() -> Formula {
    Formula::var("p")
}

fn q() -> Formula {
    Formula::var("q")
}

#[test]
fn test_parse_constants() {
    assert_eq!(parse("T").unwrap(), Formula::verum());
    assert_eq!(parse(" F ").unwrap(), Formula::falsum());
}

#[test]
fn test_parse_variables() {
    assert_eq!(parse("p").unwrap(), p());
    assert_eq!(parse("q12").unwrap(), Formula::var("q12"));
    assert_eq!(parse("x_1_y").unwrap(), Formula::var("x_1_y"));
    assert_eq!(parse("\tz\n").unwrap(), Formula::var("z"));
}

#[test]
fn test_parse_negations() {
    assert_eq!(parse("~p").unwrap(), Formula::not(p()));
    assert_eq!(parse("~~p").unwrap(), Formula::not(Formula::not(p())));
    assert_eq!(parse("~ ~ T").unwrap(), Formula::not(Formula::not(Formula::verum())));
    assert_eq!(parse("~(p&q)").unwrap(), Formula::not(Formula::and(p(), q())));
}

#[test]
fn test_parse_operators() {
    assert_eq!(parse("(p&q)").unwrap(), Formula::and(p(), q()));
    assert_eq!(parse("(p|q)").unwrap(), Formula::or(p(), q()));
    assert_eq!(parse("(p->q)").unwrap(), Formula::implies(p(), q()));
    assert_eq!(parse("(p+q)").unwrap(), Formula::xor(p(), q()));
    assert_eq!(parse("(p<->q)").unwrap(), Formula::iff(p(), q()));
    assert_eq!(parse("(p-&q)").unwrap(), Formula::nand(p(), q()));
    assert_eq!(parse("(p-|q)").unwrap(), Formula::nor(p(), q()));
    assert_eq!(parse("( p -> ~q )").unwrap(), Formula::implies(p(), Formula::not(q())));
}

#[test]
fn test_parse_nested() {
    let expected = Formula::iff(Formula::and(p(), Formula::not(q())), Formula::nand(Formula::falsum(), Formula::or(q(), p())));
    assert_eq!(parse("((p&~q)<->(F-&(q|p)))").unwrap(), expected);
}

#[test]
fn test_illegal_formulas() {
    for input in ["", "p&q", "(p)", "(p=>q)", "(p&q", "p q", "P", "~", "(p&q&r)", "(p<-q)", "1", "(T-F)", "pT"] {
        assert!(matches!(parse(input), Err(FormulaError::Parse { .. })), "{input}");
    }
}
