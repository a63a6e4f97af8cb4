use crate::grammar::{
    rules::{BoundaryRule, ComplexityRule},
    spec::{Associativity, Function, FunctionSpec, Operator, OperatorSpec},
};

const BASIC_OPERATORS: &[OperatorSpec] = &[OperatorSpec::left(Operator::Plus, 1),
                                           OperatorSpec::left(Operator::Minus, 1),
                                           OperatorSpec::left(Operator::Star, 2),
                                           OperatorSpec::left(Operator::Slash, 2),
                                           OperatorSpec::left(Operator::DoubleSlash, 2),
                                           OperatorSpec::right(Operator::Caret, 3)];

const SCIENTIFIC_OPERATORS: &[OperatorSpec] =
    &[OperatorSpec::left(Operator::Plus, 2),
      OperatorSpec::left(Operator::Minus, 2),
      OperatorSpec::left(Operator::Star, 3),
      OperatorSpec::left(Operator::Slash, 3),
      OperatorSpec::right(Operator::Caret, 4),
      OperatorSpec::right(Operator::DoubleStar, 4),
      OperatorSpec::postfix(Operator::Bang, 5, Associativity::Left)];

const EXTENDED_OPERATORS: &[OperatorSpec] =
    &[OperatorSpec::left(Operator::Plus, 1),
      OperatorSpec::left(Operator::Minus, 1),
      OperatorSpec::left(Operator::Star, 2),
      OperatorSpec::left(Operator::Slash, 2),
      OperatorSpec::left(Operator::DoubleSlash, 2),
      OperatorSpec::right(Operator::Caret, 3),
      OperatorSpec::right(Operator::DoubleStar, 3),
      OperatorSpec::postfix(Operator::Bang, 4, Associativity::Right)];

const FUNCTIONS: &[FunctionSpec] = &[FunctionSpec::unary(Function::Log),
                                     FunctionSpec::unary(Function::Exp)];

/// The configuration every pipeline stage runs against.
///
/// A grammar is a set of static tables, so it is `Copy` and cheap to pass
/// around. The presets mirror the three calculator dialects the evaluator
/// unifies; [`Grammar::EXTENDED`] is the default.
///
/// # Example
/// ```
/// use infixa::grammar::{ComplexityRule, Grammar};
///
/// let grammar = Grammar::BASIC.with_complexity_limit(3);
///
/// assert!(grammar.operator("//").is_some());
/// assert!(grammar.operator("!").is_none());
/// assert_eq!(grammar.complexity(), ComplexityRule::Operators { max: 3 });
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Grammar {
    name:       &'static str,
    operators:  &'static [OperatorSpec],
    functions:  &'static [FunctionSpec],
    complexity: ComplexityRule,
    boundary:   BoundaryRule,
}

impl Grammar {
    /// `+ - * / // ^`, at most 99 operators, numbers at both ends.
    pub const BASIC: Self = Self { name:       "basic",
                                   operators:  BASIC_OPERATORS,
                                   functions:  &[],
                                   complexity: ComplexityRule::Operators { max: 99 },
                                   boundary:   BoundaryRule::STRICT, };
    /// `+ - * / ^ ** !` with `log` and `exp`, at most 15 top-level terms.
    pub const SCIENTIFIC: Self = Self { name:       "scientific",
                                        operators:  SCIENTIFIC_OPERATORS,
                                        functions:  FUNCTIONS,
                                        complexity: ComplexityRule::AdditiveTerms { max: 15 },
                                        boundary:   BoundaryRule::SCIENTIFIC, };
    /// Every operator and function, at most 15 operators.
    pub const EXTENDED: Self = Self { name:       "extended",
                                      operators:  EXTENDED_OPERATORS,
                                      functions:  FUNCTIONS,
                                      complexity: ComplexityRule::Operators { max: 15 },
                                      boundary:   BoundaryRule::SCIENTIFIC, };
    /// [`Grammar::EXTENDED`] with [`BoundaryRule::LEGACY_EXTENDED`].
    pub const EXTENDED_LEGACY: Self = Self { name: "extended-legacy",
                                             boundary: BoundaryRule::LEGACY_EXTENDED,
                                             ..Self::EXTENDED };

    /// Builds a grammar from custom tables.
    ///
    /// # Example
    /// ```
    /// use infixa::{
    ///     Evaluator,
    ///     grammar::{BoundaryRule, ComplexityRule, Grammar, Operator, OperatorSpec},
    /// };
    ///
    /// const FLAT: &[OperatorSpec] = &[OperatorSpec::left(Operator::Plus, 1),
    ///                                 OperatorSpec::left(Operator::Star, 1)];
    /// let grammar = Grammar::new("flat",
    ///                            FLAT,
    ///                            &[],
    ///                            ComplexityRule::Operators { max: 10 },
    ///                            BoundaryRule::STRICT);
    ///
    /// assert_eq!(Evaluator::new(grammar).evaluate("2 + 3 * 4").unwrap(), 20.0);
    /// ```
    #[must_use]
    pub const fn new(name: &'static str,
                     operators: &'static [OperatorSpec],
                     functions: &'static [FunctionSpec],
                     complexity: ComplexityRule,
                     boundary: BoundaryRule)
                     -> Self {
        Self { name,
               operators,
               functions,
               complexity,
               boundary }
    }

    /// Returns the preset or custom name of the grammar.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        self.name
    }

    /// Returns the operator table.
    #[must_use]
    pub const fn operators(&self) -> &'static [OperatorSpec] {
        self.operators
    }

    /// Returns the function table.
    #[must_use]
    pub const fn functions(&self) -> &'static [FunctionSpec] {
        self.functions
    }

    /// Returns the complexity ceiling.
    #[must_use]
    pub const fn complexity(&self) -> ComplexityRule {
        self.complexity
    }

    /// Returns the start/end character rule.
    #[must_use]
    pub const fn boundary(&self) -> BoundaryRule {
        self.boundary
    }

    /// Looks up the spec of an operator symbol enabled in this grammar.
    #[must_use]
    pub fn operator(&self, symbol: &str) -> Option<OperatorSpec> {
        let operator = Operator::from_symbol(symbol)?;
        self.operators.iter().copied().find(|spec| spec.operator == operator)
    }

    /// Looks up a function enabled in this grammar by name.
    #[must_use]
    pub fn function(&self, name: &str) -> Option<FunctionSpec> {
        self.functions.iter().copied().find(|spec| spec.name() == name)
    }

    /// Returns the function whose name, followed by `(`, starts `text`.
    #[must_use]
    pub fn function_call_prefix(&self, text: &str) -> Option<FunctionSpec> {
        self.functions.iter().copied().find(|spec| {
                                             text.strip_prefix(spec.name())
                                                 .is_some_and(|rest| rest.starts_with('('))
                                         })
    }

    /// Keeps the counting policy but changes its ceiling.
    #[must_use]
    pub const fn with_complexity_limit(self, max: usize) -> Self {
        Self { complexity: self.complexity.with_max(max),
               ..self }
    }

    /// Replaces the complexity rule.
    #[must_use]
    pub const fn with_complexity(self, complexity: ComplexityRule) -> Self {
        Self { complexity, ..self }
    }

    /// Replaces the boundary rule.
    #[must_use]
    pub const fn with_boundary(self, boundary: BoundaryRule) -> Self {
        Self { boundary, ..self }
    }
}

impl Default for Grammar {
    fn default() -> Self {
        Self::EXTENDED
    }
}
