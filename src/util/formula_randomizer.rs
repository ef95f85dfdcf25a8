use fastrand::Rng;

use crate::formulas::{BinaryOperator, Formula};

/// A configuration for randomizing formulas.
///
/// The following things can be configured:
/// - the seed -- equal seeds yield equal sequences of formulas
/// - the variables -- this list of variables will be used. The probabilities of
///   being chosen are the same for all variables.
/// - weights for constants, variables, negations, and each binary operator,
///   defining how often a formula type is generated compared to other types.
///
/// Note that the weights can only be applied for inner nodes of the generated
/// formula. At the maximal depth only constants and variables are generated,
/// so their effective weight will be higher.
#[derive(Clone, PartialEq, Debug)]
pub struct FormulaRandomizerConfig {
    pub(crate) seed: u64,
    pub(crate) variables: Vec<String>,
    pub(crate) weight_constant: f32,
    pub(crate) weight_variable: f32,
    pub(crate) weight_not: f32,
    pub(crate) weight_binary: [f32; 7],
}

impl FormulaRandomizerConfig {
    /// Builds a basic configuration with the given variables and with default
    /// settings.
    ///
    /// # Example
    ///
    /// Basic usage:
    /// ```
    /// # use connectives::util::formula_randomizer::FormulaRandomizerConfig;
    /// let variables = vec![String::from("p"), String::from("q")];
    /// let config = FormulaRandomizerConfig::default_with_variables(variables);
    /// ```
    pub fn default_with_variables(variables: Vec<String>) -> Self {
        Self {
            seed: 42_u64,
            variables,
            weight_constant: 0.2,
            weight_variable: 2.0,
            weight_not: 1.0,
            weight_binary: [1.0; 7],
        }
    }

    /// Builds a basic configuration with default settings. Additionally,
    /// it generates `num_vars` variables `v0`, `v1`, ... and adds them to the
    /// configuration.
    ///
    /// # Example
    ///
    /// Basic usage:
    /// ```
    /// # use connectives::util::formula_randomizer::FormulaRandomizerConfig;
    /// let config = FormulaRandomizerConfig::default_with_num_vars(2);
    /// ```
    pub fn default_with_num_vars(num_vars: usize) -> Self {
        Self::default_with_variables((0..num_vars).map(|n| format!("v{n}")).collect())
    }

    /// Updates the seed, which will be used to generate pseudo-random values.
    ///
    /// # Example
    ///
    /// Basic usage:
    /// ```
    /// # use connectives::util::formula_randomizer::FormulaRandomizerConfig;
    /// let config = FormulaRandomizerConfig::default_with_num_vars(3).seed(24);
    /// ```
    #[must_use]
    pub const fn seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    /// Sets the relative weight of a constant.
    #[must_use]
    pub const fn weight_constant(mut self, weight_constant: f32) -> Self {
        self.weight_constant = weight_constant;
        self
    }

    /// Sets the relative weight of a variable.
    #[must_use]
    pub const fn weight_variable(mut self, weight_variable: f32) -> Self {
        self.weight_variable = weight_variable;
        self
    }

    /// Sets the relative weight of a negation.
    #[must_use]
    pub const fn weight_not(mut self, weight_not: f32) -> Self {
        self.weight_not = weight_not;
        self
    }

    /// Sets the relative weight of the binary operator `op`.
    ///
    /// # Example
    ///
    /// Basic usage:
    /// ```
    /// # use connectives::formulas::BinaryOperator;
    /// # use connectives::util::formula_randomizer::FormulaRandomizerConfig;
    /// let config = FormulaRandomizerConfig::default_with_num_vars(3)
    ///         // ...
    ///         .weight_binary(BinaryOperator::Xor, 3.0)
    ///         .weight_binary(BinaryOperator::Nor, 0.0)
    ///         // ...
    ///         ;
    /// ```
    #[must_use]
    pub const fn weight_binary(mut self, op: BinaryOperator, weight: f32) -> Self {
        self.weight_binary[op as usize] = weight;
        self
    }

    /// Sets the same relative weight for all binary operators.
    #[must_use]
    pub const fn weight_all_binary(mut self, weight: f32) -> Self {
        self.weight_binary = [weight; 7];
        self
    }

    fn compute_formula_type_probabilities(&self) -> FormulaTypeProbabilities {
        let total = self.weight_constant + self.weight_variable + self.weight_not + self.weight_binary.iter().sum::<f32>();
        let constant = self.weight_constant / total;
        let variable = constant + self.weight_variable / total;
        let not = variable + self.weight_not / total;
        let mut binary = [0.0; 7];
        let mut cumulated = not;
        for (probability, weight) in binary.iter_mut().zip(self.weight_binary) {
            cumulated += weight / total;
            *probability = cumulated;
        }
        let atom_constant = self.weight_constant / (self.weight_constant + self.weight_variable);
        FormulaTypeProbabilities { constant, variable, not, binary, atom_constant }
    }
}

struct FormulaTypeProbabilities {
    constant: f32,
    variable: f32,
    not: f32,
    binary: [f32; 7],
    atom_constant: f32,
}

/// A generator for random formulas.
///
/// The formula types included in the generated formulas can be configured with
/// a [`FormulaRandomizerConfig`].
///
/// # Example
///
/// Basic usage:
/// ```
/// # use connectives::operations::functions::formula_depth;
/// # use connectives::util::formula_randomizer::{FormulaRandomizer, FormulaRandomizerConfig};
/// let mut randomizer = FormulaRandomizer::new(FormulaRandomizerConfig::default_with_num_vars(3));
///
/// let formula = randomizer.formula(2);
/// assert!(formula_depth(&formula) <= 2);
/// ```
pub struct FormulaRandomizer {
    config: FormulaRandomizerConfig,
    random: Rng,
    formula_probs: FormulaTypeProbabilities,
}

impl FormulaRandomizer {
    /// Builds a new `FormulaRandomizer` from a [`FormulaRandomizerConfig`].
    pub fn new(config: FormulaRandomizerConfig) -> Self {
        let seed = config.seed;
        let formula_probs = config.compute_formula_type_probabilities();
        Self { config, random: Rng::with_seed(seed), formula_probs }
    }

    /// Returns a random constant.
    pub fn constant(&mut self) -> Formula {
        Formula::constant(self.random.bool())
    }

    /// Returns a random name of a variable as a string.
    pub fn var_string(&mut self) -> &str {
        &self.config.variables[self.random.usize(0..self.config.variables.len())]
    }

    /// Returns a random variable.
    pub fn variable(&mut self) -> Formula {
        Formula::var(self.var_string())
    }

    /// Returns a random constant or variable, according to their relative
    /// weights.
    pub fn atom(&mut self) -> Formula {
        if self.random.f32() < self.formula_probs.atom_constant {
            self.constant()
        } else {
            self.variable()
        }
    }

    /// Returns a random negation with a given maximal depth.
    pub fn not(&mut self, max_depth: u32) -> Formula {
        if max_depth == 0 {
            self.atom()
        } else {
            Formula::not(self.formula(max_depth - 1))
        }
    }

    /// Returns a random formula with the binary operator `op` at its root and
    /// a given maximal depth.
    ///
    /// # Example
    ///
    /// Basic usage:
    /// ```
    /// # use connectives::formulas::BinaryOperator;
    /// # use connectives::util::formula_randomizer::{FormulaRandomizer, FormulaRandomizerConfig};
    /// # let mut randomizer = FormulaRandomizer::new(FormulaRandomizerConfig::default_with_num_vars(3));
    /// let nor = randomizer.binary(BinaryOperator::Nor, 2);
    /// ```
    pub fn binary(&mut self, op: BinaryOperator, max_depth: u32) -> Formula {
        if max_depth == 0 {
            self.atom()
        } else {
            let left = self.formula(max_depth - 1);
            let right = self.formula(max_depth - 1);
            Formula::binary(op, left, right)
        }
    }

    /// Returns a random formula with a given maximal depth.
    pub fn formula(&mut self, max_depth: u32) -> Formula {
        if max_depth == 0 {
            return self.atom();
        }
        let n = self.random.f32();
        if n < self.formula_probs.constant {
            self.constant()
        } else if n < self.formula_probs.variable {
            self.variable()
        } else if n < self.formula_probs.not {
            self.not(max_depth)
        } else {
            let index = self
                .formula_probs
                .binary
                .iter()
                .position(|&probability| n < probability)
                .or_else(|| self.config.weight_binary.iter().rposition(|&weight| weight > 0.0))
                .unwrap_or(0);
            self.binary(BinaryOperator::ALL[index], max_depth)
        }
    }

    /// Returns a list of `num_formulas` random formulas with a given maximal
    /// depth.
    pub fn formulas(&mut self, num_formulas: u32, max_depth: u32) -> Vec<Formula> {
        (0..num_formulas).map(|_| self.formula(max_depth)).collect()
    }
}
