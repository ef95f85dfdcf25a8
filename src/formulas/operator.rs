use std::fmt::{self, Display};
use std::str::FromStr;

use super::{FormulaError, Label};

/// The only unary operator: negation (`~`).
#[derive(Copy, Clone, Hash, Eq, PartialEq, Ord, PartialOrd, Debug)]
pub enum UnaryOperator {
    /// Negation `~`
    Not,
}

impl UnaryOperator {
    /// Returns the textual symbol of this operator.
    pub const fn symbol(self) -> &'static str {
        match self {
            Self::Not => "~",
        }
    }

    /// Applies this operator to a truth value.
    pub const fn apply(self, value: bool) -> bool {
        match self {
            Self::Not => !value,
        }
    }
}

/// Specifies all binary operators a [`Formula`](super::Formula) can have.
#[derive(Copy, Clone, Hash, Eq, PartialEq, Ord, PartialOrd, Debug)]
pub enum BinaryOperator {
    /// Conjunction `&`
    And,
    /// Disjunction `|`
    Or,
    /// Implication `->`
    Implies,
    /// Exclusive or `+`
    Xor,
    /// Equivalence `<->`
    Iff,
    /// Not-and `-&`
    Nand,
    /// Not-or `-|`
    Nor,
}

impl BinaryOperator {
    /// All binary operators.
    pub const ALL: [Self; 7] = [Self::And, Self::Or, Self::Implies, Self::Xor, Self::Iff, Self::Nand, Self::Nor];

    /// Returns the textual symbol of this operator.
    ///
    /// # Examples
    ///
    /// Basic usage:
    ///
    /// ```
    /// # use connectives::formulas::BinaryOperator;
    /// assert_eq!(BinaryOperator::Iff.symbol(), "<->");
    /// assert_eq!(BinaryOperator::Nand.symbol(), "-&");
    /// ```
    pub const fn symbol(self) -> &'static str {
        match self {
            Self::And => "&",
            Self::Or => "|",
            Self::Implies => "->",
            Self::Xor => "+",
            Self::Iff => "<->",
            Self::Nand => "-&",
            Self::Nor => "-|",
        }
    }

    /// Applies this operator to two truth values.
    pub const fn apply(self, left: bool, right: bool) -> bool {
        match self {
            Self::And => left && right,
            Self::Or => left || right,
            Self::Implies => !left || right,
            Self::Xor => left != right,
            Self::Iff => left == right,
            Self::Nand => !(left && right),
            Self::Nor => !(left || right),
        }
    }
}

impl Display for UnaryOperator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

impl Display for BinaryOperator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

impl FromStr for UnaryOperator {
    type Err = FormulaError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "~" => Ok(Self::Not),
            _ => Err(FormulaError::unsupported(s)),
        }
    }
}

impl FromStr for BinaryOperator {
    type Err = FormulaError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL.into_iter().find(|op| op.symbol() == s).ok_or_else(|| FormulaError::unsupported(s))
    }
}

/// A connective is every label of a formula node which is not a variable:
/// the constants `T` and `F`, negation, and the binary operators.
///
/// Connectives are the keys of an
/// [`OperatorSubstitution`](crate::operations::transformations::OperatorSubstitution)
/// and the elements of the sets returned by
/// [`operators`](crate::operations::functions::operators).
#[derive(Copy, Clone, Hash, Eq, PartialEq, Ord, PartialOrd, Debug)]
pub enum Connective {
    /// Constant `T` (`true`) or `F` (`false`)
    Constant(bool),
    /// Unary operator
    Unary(UnaryOperator),
    /// Binary operator
    Binary(BinaryOperator),
}

impl Connective {
    /// Constant `T`.
    pub const TRUE: Self = Self::Constant(true);
    /// Constant `F`.
    pub const FALSE: Self = Self::Constant(false);
    /// Negation `~`.
    pub const NOT: Self = Self::Unary(UnaryOperator::Not);
    /// Conjunction `&`.
    pub const AND: Self = Self::Binary(BinaryOperator::And);
    /// Disjunction `|`.
    pub const OR: Self = Self::Binary(BinaryOperator::Or);
    /// Implication `->`.
    pub const IMPLIES: Self = Self::Binary(BinaryOperator::Implies);
    /// Exclusive or `+`.
    pub const XOR: Self = Self::Binary(BinaryOperator::Xor);
    /// Equivalence `<->`.
    pub const IFF: Self = Self::Binary(BinaryOperator::Iff);
    /// Not-and `-&`.
    pub const NAND: Self = Self::Binary(BinaryOperator::Nand);
    /// Not-or `-|`.
    pub const NOR: Self = Self::Binary(BinaryOperator::Nor);

    /// Returns the number of operands a node with this connective has.
    pub const fn arity(self) -> usize {
        match self {
            Self::Constant(_) => 0,
            Self::Unary(_) => 1,
            Self::Binary(_) => 2,
        }
    }
}

impl Display for Connective {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Constant(true) => f.write_str("T"),
            Self::Constant(false) => f.write_str("F"),
            Self::Unary(op) => op.fmt(f),
            Self::Binary(op) => op.fmt(f),
        }
    }
}

impl FromStr for Connective {
    type Err = FormulaError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match Label::classify(s)? {
            Label::Constant(value) => Ok(Self::Constant(value)),
            Label::Unary(op) => Ok(Self::Unary(op)),
            Label::Binary(op) => Ok(Self::Binary(op)),
            Label::Variable(_) => Err(FormulaError::unsupported(s)),
        }
    }
}
