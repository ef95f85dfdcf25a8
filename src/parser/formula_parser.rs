use pest::iterators::{Pair, Pairs};
use pest::Parser;

use crate::formulas::{Formula, FormulaError};

#[derive(Parser)]
#[grammar = "parser/formula.pest"]
struct FormulaParser;

pub fn parse<I: AsRef<str>>(input: I) -> Result<Formula, FormulaError> {
    let mut parsed = FormulaParser::parse(Rule::formula, input.as_ref()).map_err(|e| FormulaError::Parse { message: e.to_string() })?;
    let mut tokens = next(&mut parsed)?.into_inner();
    parse_expression(next(&mut tokens)?)
}

fn parse_expression(expression: Pair<Rule>) -> Result<Formula, FormulaError> {
    match expression.as_rule() {
        Rule::variable => Ok(Formula::var(expression.as_str())),
        Rule::constant => parse_constant(expression),
        Rule::negation => {
            let mut tokens = expression.into_inner();
            Ok(Formula::not(parse_expression(next(&mut tokens)?)?))
        }
        Rule::binary => parse_binary(expression),
        rule => Err(unexpected(rule)),
    }
}

fn parse_constant(constant: Pair<Rule>) -> Result<Formula, FormulaError> {
    match next(&mut constant.into_inner())?.as_rule() {
        Rule::verum => Ok(Formula::verum()),
        Rule::falsum => Ok(Formula::falsum()),
        rule => Err(unexpected(rule)),
    }
}

fn parse_binary(binary: Pair<Rule>) -> Result<Formula, FormulaError> {
    let mut tokens = binary.into_inner();
    let left = parse_expression(next(&mut tokens)?)?;
    let op = next(&mut tokens)?.as_str().parse()?;
    let right = parse_expression(next(&mut tokens)?)?;
    Ok(Formula::binary(op, left, right))
}

fn next<'a>(tokens: &mut Pairs<'a, Rule>) -> Result<Pair<'a, Rule>, FormulaError> {
    tokens.next().ok_or_else(|| FormulaError::Parse { message: String::from("unexpected end of input") })
}

fn unexpected(rule: Rule) -> FormulaError {
    FormulaError::Parse { message: format!("unexpected token {rule:?}") }
}
