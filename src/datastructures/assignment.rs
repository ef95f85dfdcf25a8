use std::collections::BTreeSet;
use std::fmt::{self, Display};

use itertools::Itertools;

/// An `Assignment` stores a set of positive and a set of negative variables.
///
/// Variables are identified by their names. A variable evaluates to `true`
/// if it is contained in the positive variables. Variables which are in
/// neither set evaluate to `false`.
#[derive(Clone, Default, Hash, Eq, PartialEq, Debug)]
pub struct Assignment {
    /// Set of all positive variables of this assignment.
    pub pos: BTreeSet<String>,
    /// Set of all negative variables of this assignment.
    pub neg: BTreeSet<String>,
}

impl Assignment {
    /// Creates a new assignment.
    pub const fn new(pos: BTreeSet<String>, neg: BTreeSet<String>) -> Self {
        Self { pos, neg }
    }

    /// Creates a new assignment from slices of variable names.
    ///
    /// # Examples
    ///
    /// Basic usage:
    ///
    /// ```
    /// # use connectives::datastructures::Assignment;
    /// let assignment = Assignment::from_names(&["p"], &["q"]);
    ///
    /// assert!(assignment.contains_pos("p"));
    /// assert!(assignment.contains_neg("q"));
    /// ```
    pub fn from_names(pos: &[&str], neg: &[&str]) -> Self {
        Self { pos: pos.iter().map(|&name| name.to_owned()).collect(), neg: neg.iter().map(|&name| name.to_owned()).collect() }
    }

    /// Creates an assignment which maps each of the given variables to the
    /// truth value at the same position.
    ///
    /// Superfluous variables or values are ignored.
    pub fn from_values<S: AsRef<str>>(variables: &[S], values: &[bool]) -> Self {
        let mut assignment = Self::default();
        for (var, &value) in variables.iter().zip(values) {
            assignment.assign(var.as_ref(), value);
        }
        assignment
    }

    /// Enumerates all `2^n` assignments of the given `n` variables.
    ///
    /// The assignments are enumerated like binary numbers with the first
    /// variable as most significant digit, starting with all variables
    /// `false`.
    ///
    /// # Panics
    ///
    /// Panics if more than 63 variables are given.
    ///
    /// # Examples
    ///
    /// Basic usage:
    ///
    /// ```
    /// # use connectives::datastructures::Assignment;
    /// let assignments: Vec<Assignment> = Assignment::all(&["p", "q"]).collect();
    ///
    /// assert_eq!(assignments.len(), 4);
    /// assert_eq!(assignments[0], Assignment::from_names(&[], &["p", "q"]));
    /// assert_eq!(assignments[1], Assignment::from_names(&["q"], &["p"]));
    /// assert_eq!(assignments[3], Assignment::from_names(&["p", "q"], &[]));
    /// ```
    pub fn all<S: AsRef<str>>(variables: &[S]) -> impl Iterator<Item = Self> + '_ {
        let n = variables.len();
        assert!(n < 64, "cannot enumerate assignments of {n} variables");
        (0..1_u64 << n).map(move |bits| {
            let values = (0..n).map(|i| bits & (1 << (n - 1 - i)) != 0).collect::<Vec<_>>();
            Self::from_values(variables, &values)
        })
    }

    /// Assigns `value` to `var`, replacing a former value.
    pub fn assign(&mut self, var: &str, value: bool) {
        let (add, remove) = if value { (&mut self.pos, &mut self.neg) } else { (&mut self.neg, &mut self.pos) };
        remove.remove(var);
        add.insert(var.to_owned());
    }

    /// Returns the number of variables in this assignment.
    pub fn len(&self) -> usize {
        self.pos.len() + self.neg.len()
    }

    /// Returns `true` if there is no variable in this assignment.
    pub fn is_empty(&self) -> bool {
        self.pos.is_empty() && self.neg.is_empty()
    }

    /// Returns `true` if the given variable is a positive variable in this
    /// assignment.
    pub fn contains_pos(&self, var: &str) -> bool {
        self.pos.contains(var)
    }

    /// Returns `true` if the given variable is a negative variable in this
    /// assignment.
    pub fn contains_neg(&self, var: &str) -> bool {
        self.neg.contains(var)
    }

    /// Evaluates the given variable on this assignment.
    ///
    /// Returns `true` exactly if the variable is a positive variable of this
    /// assignment.
    pub fn evaluate_var(&self, var: &str) -> bool {
        self.pos.contains(var)
    }
}

impl Display for Assignment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let pos = self.pos.iter().join(", ");
        let neg = self.neg.iter().join(", ");
        write!(f, "Assignment{{pos=[{pos}], neg=[{neg}]}}")
    }
}
