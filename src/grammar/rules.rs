/// How the validator measures the size of an expression.
///
/// Both policies count one class of tokens in the raw text and reject the
/// expression when the count exceeds `max`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ComplexityRule {
    /// Counts operator symbols configured in the grammar. A multi-character
    /// symbol such as `//` counts once.
    Operators {
        /// Largest accepted count.
        max: usize,
    },
    /// Counts additive terms at parenthesis depth 0. A `+` or `-` directly
    /// after another operator or `(` is a sign and does not start a term.
    AdditiveTerms {
        /// Largest accepted count.
        max: usize,
    },
}

impl ComplexityRule {
    /// Returns the configured ceiling.
    #[must_use]
    pub const fn max(&self) -> usize {
        match self {
            Self::Operators { max } | Self::AdditiveTerms { max } => *max,
        }
    }

    /// Returns the same counting policy with a different ceiling.
    ///
    /// # Example
    /// ```
    /// use infixa::grammar::ComplexityRule;
    ///
    /// let rule = ComplexityRule::AdditiveTerms { max: 15 }.with_max(3);
    /// assert_eq!(rule, ComplexityRule::AdditiveTerms { max: 3 });
    /// ```
    #[must_use]
    pub const fn with_max(self, max: usize) -> Self {
        match self {
            Self::Operators { .. } => Self::Operators { max },
            Self::AdditiveTerms { .. } => Self::AdditiveTerms { max },
        }
    }

    /// Short description used in rejection messages.
    #[must_use]
    pub const fn describe(&self) -> &'static str {
        match self {
            Self::Operators { .. } => "operators",
            Self::AdditiveTerms { .. } => "top-level terms",
        }
    }
}

/// Characters an expression may start and end with, after trimming.
///
/// Digits are always accepted at both ends and a leading `-` is always
/// accepted at the start.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct BoundaryRule {
    /// Accept `(` as the first character.
    pub leading_paren:    bool,
    /// Accept a configured function name followed by `(` at the start.
    pub leading_function: bool,
    /// Extra characters accepted as the last character.
    pub trailing:         &'static [char],
}

impl BoundaryRule {
    /// Numbers at both ends, optionally signed at the start.
    pub const STRICT: Self = Self { leading_paren:    false,
                                    leading_function: false,
                                    trailing:         &[], };
    /// Also accepts leading `(` or function call, trailing `)` or `!`.
    pub const SCIENTIFIC: Self = Self { leading_paren:    true,
                                        leading_function: true,
                                        trailing:         &[')', '!'], };
    /// Accepts `)` at the end, plus `]` and `$`, which a character-class
    /// typo in one calculator let through. `!` is rejected at the end and
    /// nothing but digits and `-` may start the expression.
    ///
    /// Only the character sets are kept. Like every boundary rule, it accepts
    /// a one-character expression such as `5`, which that calculator's
    /// pattern refused.
    pub const LEGACY_EXTENDED: Self = Self { leading_paren:    false,
                                             leading_function: false,
                                             trailing:         &[')', '$', ']'], };

    /// Returns `true` if `c` may end an expression.
    #[must_use]
    pub fn accepts_last(&self, c: char) -> bool {
        c.is_ascii_digit() || self.trailing.contains(&c)
    }
}
