use std::collections::BTreeSet;
use std::fmt::{self, Display};
use std::str::FromStr;

use crate::datastructures::Assignment;
use crate::operations::functions;
use crate::parser;

use super::{BinaryOperator, Connective, FormulaError, Label, UnaryOperator};

/// `Formula` represents a propositional formula as an immutable tree.
///
/// The label of a node determines its number of operands: variables and
/// constants are leaves, a unary node has one operand (`first`), and a binary
/// node has two operands (`first` and `second`). Transformations never modify
/// a formula, they always build a new one.
///
/// The [`Display`] implementation prints the formula in a fully parenthesized
/// notation which can be parsed back again with [`Formula::parse`] or
/// [`str::parse`].
///
/// # Examples
///
/// Basic usage:
///
/// ```
/// # use connectives::formulas::Formula;
/// let formula = Formula::implies(Formula::var("p"), Formula::not(Formula::var("q")));
///
/// assert_eq!(formula.to_string(), "(p->~q)");
/// assert_eq!(Formula::parse("(p->~q)"), Ok(formula));
/// ```
#[derive(Clone, Hash, Eq, PartialEq, Ord, PartialOrd, Debug)]
pub enum Formula {
    /// Variable with its name
    Variable(String),
    /// Constant `T` (`true`) or `F` (`false`)
    Constant(bool),
    /// Unary operator and its operand
    Unary(UnaryOperator, Box<Formula>),
    /// Binary operator and its left and right operand
    Binary(BinaryOperator, Box<Formula>, Box<Formula>),
}

impl Formula {
    /// Creates a new variable.
    ///
    /// The name is not checked. Names which do not satisfy
    /// [`is_variable`](super::is_variable) evaluate and transform just fine,
    /// but their printed form cannot be parsed back.
    pub fn var<S: Into<String>>(name: S) -> Self {
        Self::Variable(name.into())
    }

    /// Creates a new constant `T` or `F` based on `value`.
    pub const fn constant(value: bool) -> Self {
        Self::Constant(value)
    }

    /// Returns the constant `T`.
    pub const fn verum() -> Self {
        Self::Constant(true)
    }

    /// Returns the constant `F`.
    pub const fn falsum() -> Self {
        Self::Constant(false)
    }

    /// Creates a new unary formula.
    pub fn unary(op: UnaryOperator, operand: Self) -> Self {
        Self::Unary(op, Box::new(operand))
    }

    /// Creates a new binary formula.
    pub fn binary(op: BinaryOperator, left: Self, right: Self) -> Self {
        Self::Binary(op, Box::new(left), Box::new(right))
    }

    /// Creates the negation `~operand`.
    #[allow(clippy::should_implement_trait)]
    pub fn not(operand: Self) -> Self {
        Self::unary(UnaryOperator::Not, operand)
    }

    /// Creates the conjunction `(left&right)`.
    pub fn and(left: Self, right: Self) -> Self {
        Self::binary(BinaryOperator::And, left, right)
    }

    /// Creates the disjunction `(left|right)`.
    pub fn or(left: Self, right: Self) -> Self {
        Self::binary(BinaryOperator::Or, left, right)
    }

    /// Creates the implication `(left->right)`.
    pub fn implies(left: Self, right: Self) -> Self {
        Self::binary(BinaryOperator::Implies, left, right)
    }

    /// Creates the exclusive or `(left+right)`.
    pub fn xor(left: Self, right: Self) -> Self {
        Self::binary(BinaryOperator::Xor, left, right)
    }

    /// Creates the equivalence `(left<->right)`.
    pub fn iff(left: Self, right: Self) -> Self {
        Self::binary(BinaryOperator::Iff, left, right)
    }

    /// Creates the not-and `(left-&right)`.
    pub fn nand(left: Self, right: Self) -> Self {
        Self::binary(BinaryOperator::Nand, left, right)
    }

    /// Creates the not-or `(left-|right)`.
    pub fn nor(left: Self, right: Self) -> Self {
        Self::binary(BinaryOperator::Nor, left, right)
    }

    /// Creates a node from a textual label and its operands.
    ///
    /// Fails with [`FormulaError::UnsupportedOperator`] if the label is not
    /// part of the vocabulary, and with [`FormulaError::ArityMismatch`] if
    /// the number of operands does not match the label.
    ///
    /// # Examples
    ///
    /// Basic usage:
    ///
    /// ```
    /// # use connectives::formulas::{Formula, FormulaError};
    /// let p = Formula::var("p");
    /// let q = Formula::var("q");
    ///
    /// assert_eq!(Formula::from_label("-&", vec![p.clone(), q.clone()]), Ok(Formula::nand(p.clone(), q)));
    /// assert_eq!(
    ///     Formula::from_label("=>", vec![p.clone()]),
    ///     Err(FormulaError::UnsupportedOperator { label: "=>".to_string() })
    /// );
    /// assert!(Formula::from_label("~", vec![]).is_err());
    /// ```
    pub fn from_label(label: &str, operands: Vec<Self>) -> Result<Self, FormulaError> {
        let classified = Label::classify(label)?;
        let actual = operands.len();
        let mismatch = || FormulaError::ArityMismatch { label: label.to_owned(), expected: classified.arity(), actual };
        if actual != classified.arity() {
            return Err(mismatch());
        }
        let mut operands = operands.into_iter();
        match (classified, operands.next(), operands.next()) {
            (Label::Variable(name), None, None) => Ok(Self::var(name)),
            (Label::Constant(value), None, None) => Ok(Self::Constant(value)),
            (Label::Unary(op), Some(operand), None) => Ok(Self::unary(op, operand)),
            (Label::Binary(op), Some(left), Some(right)) => Ok(Self::binary(op, left, right)),
            _ => Err(mismatch()),
        }
    }

    /// Parses a formula from its textual notation.
    ///
    /// See the crate documentation for the notation.
    pub fn parse<I: AsRef<str>>(input: I) -> Result<Self, FormulaError> {
        parser::parse(input)
    }

    /// Returns the label of the root of this formula.
    pub fn label(&self) -> Label<'_> {
        match self {
            Self::Variable(name) => Label::Variable(name),
            Self::Constant(value) => Label::Constant(*value),
            Self::Unary(op, _) => Label::Unary(*op),
            Self::Binary(op, _, _) => Label::Binary(*op),
        }
    }

    /// Returns the connective of the root of this formula, or `None` if it is
    /// a variable.
    pub const fn connective(&self) -> Option<Connective> {
        match self {
            Self::Variable(_) => None,
            Self::Constant(value) => Some(Connective::Constant(*value)),
            Self::Unary(op, _) => Some(Connective::Unary(*op)),
            Self::Binary(op, _, _) => Some(Connective::Binary(*op)),
        }
    }

    /// Returns the first operand of a unary or binary formula.
    pub fn first(&self) -> Option<&Self> {
        match self {
            Self::Variable(_) | Self::Constant(_) => None,
            Self::Unary(_, first) | Self::Binary(_, first, _) => Some(first),
        }
    }

    /// Returns the second operand of a binary formula.
    pub fn second(&self) -> Option<&Self> {
        match self {
            Self::Binary(_, _, second) => Some(second),
            _ => None,
        }
    }

    /// Returns `true` if this formula is a variable.
    pub const fn is_variable(&self) -> bool {
        matches!(self, Self::Variable(_))
    }

    /// Returns `true` if this formula is a constant.
    pub const fn is_constant(&self) -> bool {
        matches!(self, Self::Constant(_))
    }

    /// Returns `true` if the root of this formula is a unary operator.
    pub const fn is_unary(&self) -> bool {
        matches!(self, Self::Unary(..))
    }

    /// Returns `true` if the root of this formula is a binary operator.
    pub const fn is_binary(&self) -> bool {
        matches!(self, Self::Binary(..))
    }

    /// Returns the names of all variables in this formula.
    ///
    /// See [`functions::variables`].
    pub fn variables(&self) -> BTreeSet<String> {
        functions::variables(self)
    }

    /// Returns all connectives in this formula.
    ///
    /// See [`functions::operators`].
    pub fn operators(&self) -> BTreeSet<Connective> {
        functions::operators(self)
    }

    /// Evaluates this formula under the given assignment.
    ///
    /// See [`functions::evaluate`].
    pub fn evaluate(&self, assignment: &Assignment) -> bool {
        functions::evaluate(self, assignment)
    }
}

impl Display for Formula {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Variable(name) => f.write_str(name),
            Self::Constant(true) => f.write_str("T"),
            Self::Constant(false) => f.write_str("F"),
            Self::Unary(op, operand) => write!(f, "{op}{operand}"),
            Self::Binary(op, left, right) => write!(f, "({left}{op}{right})"),
        }
    }
}

impl FromStr for Formula {
    type Err = FormulaError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parser::parse(s)
    }
}
