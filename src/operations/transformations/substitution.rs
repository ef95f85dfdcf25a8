use std::collections::HashMap;

use tracing::trace;

use crate::formulas::{Connective, Formula, FormulaError};

/// Name of the placeholder variable which is bound to the first operand when
/// an operator template is instantiated.
pub const FIRST_PLACEHOLDER: &str = "p";
/// Name of the placeholder variable which is bound to the second operand when
/// an operator template is instantiated.
pub const SECOND_PLACEHOLDER: &str = "q";

/// A `Substitution` maps variable names to formulas.
pub type Substitution = HashMap<String, Formula>;

/// An `OperatorSubstitution` maps connectives to template formulas over the
/// placeholders [`FIRST_PLACEHOLDER`] and [`SECOND_PLACEHOLDER`].
pub type OperatorSubstitution = HashMap<Connective, Formula>;

/// Substitutes variables of the given formula with specified formulas.
///
/// All variables are replaced simultaneously: the inserted formulas are not
/// substituted again.
///
/// # Examples
///
/// Basic usage:
///
/// ```
/// # use connectives::formulas::Formula;
/// # use connectives::operations::transformations::{substitute_variables, Substitution};
/// let formula: Formula = "(p&q)".parse().unwrap();
///
/// let mut substitution = Substitution::new();
/// substitution.insert("p".to_string(), "(q->r)".parse().unwrap());
/// substitution.insert("q".to_string(), "p".parse().unwrap());
///
/// assert_eq!(substitute_variables(&formula, &substitution).to_string(), "((q->r)&p)");
/// ```
pub fn substitute_variables(formula: &Formula, substitution: &Substitution) -> Formula {
    match formula {
        Formula::Variable(name) => substitution.get(name).unwrap_or(formula).clone(),
        Formula::Constant(_) => formula.clone(),
        Formula::Unary(op, operand) => Formula::unary(*op, substitute_variables(operand, substitution)),
        Formula::Binary(op, left, right) => {
            let new_left = substitute_variables(left, substitution);
            let new_right = substitute_variables(right, substitution);
            Formula::binary(*op, new_left, new_right)
        }
    }
}

/// Substitutes every occurrence of a mapped connective with an instance of
/// its template.
///
/// The operands of a node are substituted first. Then, if the connective of
/// the node is mapped, the node is replaced by a copy of the template in
/// which [`FIRST_PLACEHOLDER`] is bound to the first and
/// [`SECOND_PLACEHOLDER`] to the second (already substituted) operand. A
/// placeholder without operand, e.g. `q` in the template of a unary operator,
/// stays a variable. Templates are not substituted themselves, so a template
/// may use the connective it replaces.
///
/// Constants can be mapped, too. Their templates are inserted without any
/// bindings.
///
/// # Examples
///
/// Basic usage:
///
/// ```
/// # use connectives::formulas::{Connective, Formula};
/// # use connectives::operations::transformations::{substitute_operators, OperatorSubstitution};
/// let formula: Formula = "((p&q)&~r)".parse().unwrap();
///
/// let substitution = OperatorSubstitution::from([(Connective::AND, "~(~p|~q)".parse().unwrap())]);
///
/// assert_eq!(substitute_operators(&formula, &substitution).to_string(), "~(~~(~p|~q)|~~r)");
/// ```
pub fn substitute_operators(formula: &Formula, substitution: &OperatorSubstitution) -> Formula {
    let result = substitute_operators_rec(formula, substitution);
    trace!(mapped = substitution.len(), input = %formula, output = %result, "substituted operators");
    result
}

/// Builds an [`OperatorSubstitution`] from textual labels.
///
/// Fails with [`FormulaError::UnsupportedOperator`] if a label is not a
/// constant or operator.
///
/// # Examples
///
/// Basic usage:
///
/// ```
/// # use connectives::formulas::{Connective, Formula};
/// # use connectives::operations::transformations::operator_substitution;
/// let template: Formula = "(p->~q)".parse().unwrap();
///
/// let substitution = operator_substitution([("-&", template.clone())]).unwrap();
///
/// assert_eq!(substitution.get(&Connective::NAND), Some(&template));
/// assert!(operator_substitution([("=>", template)]).is_err());
/// ```
pub fn operator_substitution<'a, I>(entries: I) -> Result<OperatorSubstitution, FormulaError>
where I: IntoIterator<Item = (&'a str, Formula)> {
    entries.into_iter().map(|(label, template)| Ok((label.parse::<Connective>()?, template))).collect()
}

fn substitute_operators_rec(formula: &Formula, substitution: &OperatorSubstitution) -> Formula {
    match formula {
        Formula::Variable(_) => formula.clone(),
        Formula::Constant(value) => {
            substitution.get(&Connective::Constant(*value)).map_or_else(|| formula.clone(), |template| instantiate(template, None, None))
        }
        Formula::Unary(op, operand) => {
            let new_operand = substitute_operators_rec(operand, substitution);
            match substitution.get(&Connective::Unary(*op)) {
                Some(template) => instantiate(template, Some(new_operand), None),
                None => Formula::unary(*op, new_operand),
            }
        }
        Formula::Binary(op, left, right) => {
            let new_left = substitute_operators_rec(left, substitution);
            let new_right = substitute_operators_rec(right, substitution);
            match substitution.get(&Connective::Binary(*op)) {
                Some(template) => instantiate(template, Some(new_left), Some(new_right)),
                None => Formula::binary(*op, new_left, new_right),
            }
        }
    }
}

fn instantiate(template: &Formula, first: Option<Formula>, second: Option<Formula>) -> Formula {
    let mut bindings = Substitution::with_capacity(2);
    if let Some(first) = first {
        bindings.insert(FIRST_PLACEHOLDER.to_owned(), first);
    }
    if let Some(second) = second {
        bindings.insert(SECOND_PLACEHOLDER.to_owned(), second);
    }
    substitute_variables(template, &bindings)
}
