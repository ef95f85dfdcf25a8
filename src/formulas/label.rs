use super::{BinaryOperator, FormulaError, UnaryOperator};

/// The classified label of a formula node.
///
/// Every well-formed textual label is exactly one of a variable, a constant,
/// a unary operator, or a binary operator.
#[derive(Copy, Clone, Hash, Eq, PartialEq, Debug)]
pub enum Label<'a> {
    /// Variable with its name
    Variable(&'a str),
    /// Constant `T` or `F`
    Constant(bool),
    /// Unary operator
    Unary(UnaryOperator),
    /// Binary operator
    Binary(BinaryOperator),
}

impl<'a> Label<'a> {
    /// Classifies a textual label.
    ///
    /// Returns [`FormulaError::UnsupportedOperator`] if the label is not part
    /// of the vocabulary.
    ///
    /// # Examples
    ///
    /// Basic usage:
    ///
    /// ```
    /// # use connectives::formulas::{BinaryOperator, Label};
    /// assert_eq!(Label::classify("q1"), Ok(Label::Variable("q1")));
    /// assert_eq!(Label::classify("F"), Ok(Label::Constant(false)));
    /// assert_eq!(Label::classify("->"), Ok(Label::Binary(BinaryOperator::Implies)));
    /// assert!(Label::classify("=>").is_err());
    /// ```
    pub fn classify(label: &'a str) -> Result<Self, FormulaError> {
        if is_variable(label) {
            Ok(Self::Variable(label))
        } else if is_constant(label) {
            Ok(Self::Constant(label == "T"))
        } else if is_unary(label) {
            label.parse().map(Self::Unary)
        } else {
            label.parse().map(Self::Binary)
        }
    }

    /// Returns the number of operands a node with this label has.
    pub const fn arity(self) -> usize {
        match self {
            Self::Variable(_) | Self::Constant(_) => 0,
            Self::Unary(_) => 1,
            Self::Binary(_) => 2,
        }
    }
}

/// Returns `true` if `label` is a variable name: a lowercase ASCII letter,
/// followed by lowercase ASCII letters, digits, or underscores.
///
/// # Examples
///
/// Basic usage:
///
/// ```
/// # use connectives::formulas::is_variable;
/// assert!(is_variable("p"));
/// assert!(is_variable("x_12"));
/// assert!(!is_variable("T"));
/// assert!(!is_variable("1p"));
/// ```
pub fn is_variable(label: &str) -> bool {
    let mut chars = label.chars();
    chars.next().is_some_and(|c| c.is_ascii_lowercase()) && chars.all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '_')
}

/// Returns `true` if `label` is one of the constants `T` and `F`.
pub fn is_constant(label: &str) -> bool {
    label == "T" || label == "F"
}

/// Returns `true` if `label` is the unary operator `~`.
pub fn is_unary(label: &str) -> bool {
    label == UnaryOperator::Not.symbol()
}

/// Returns `true` if `label` is one of the binary operators
/// `&`, `|`, `->`, `+`, `<->`, `-&`, `-|`.
pub fn is_binary(label: &str) -> bool {
    BinaryOperator::ALL.iter().any(|op| op.symbol() == label)
}
