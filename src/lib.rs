//! # infixa
//!
//! infixa is an infix arithmetic expression evaluator written in Rust.
//! It validates a single-line expression against structural rules, tokenizes
//! it, reorders it into postfix form with the shunting-yard algorithm and
//! evaluates the result on a value stack.
//!
//! Every stage is driven by a [`Grammar`](grammar::Grammar), which decides
//! the operators, their precedence and associativity, the functions and the
//! validation limits.

#![warn(
    clippy::redundant_clone,
    clippy::needless_pass_by_value,
    clippy::similar_names,
    clippy::large_enum_variant,
    clippy::string_lit_as_bytes,
    clippy::match_same_arms,
    clippy::cargo,
    clippy::nursery,
    clippy::perf,
    clippy::style,
    clippy::suspicious,
    clippy::correctness,
    clippy::complexity,
    clippy::pedantic,
    //missing_docs,
)]
#![allow(clippy::missing_errors_doc)]

use crate::{
    error::{Error, EvalError, LexError, SyntaxError, ValidationError},
    grammar::Grammar,
    interpreter::{converter, evaluator, lexer, token::Token, validator},
};

/// Provides the error types of every pipeline stage.
///
/// Each stage has its own error enum with a human-readable message; the
/// crate-level `Error` wraps whichever stage failed.
///
/// # Responsibilities
/// - Defines validation, lexical, syntax and evaluation errors.
/// - Attaches positions to lexical errors and operands to evaluation errors.
/// - Converts stage errors into `Error` so stages chain with `?`.
pub mod error;
/// Describes the language an evaluator accepts.
///
/// This module declares operators, functions and validation rules, and the
/// presets that combine them.
///
/// # Responsibilities
/// - Defines precedence, associativity and arity per operator.
/// - Defines the complexity ceiling and boundary rules of the validator.
/// - Provides the `BASIC`, `SCIENTIFIC`, `EXTENDED` and `EXTENDED_LEGACY`
///   presets.
pub mod grammar;
/// Implements the validate, tokenize, convert, evaluate pipeline.
///
/// Each stage is a pure function over one expression; nothing is kept between
/// calls.
pub mod interpreter;
/// General utilities for numeric conversion.
///
/// # Responsibilities
/// - Convert between `f64` and integer types without silent data loss.
pub mod util;

/// Runs expressions through the full pipeline for one grammar.
///
/// An evaluator holds nothing but its grammar, so it is `Copy` and can be
/// shared freely between threads.
///
/// # Example
/// ```
/// use infixa::{Evaluator, grammar::Grammar};
///
/// let evaluator = Evaluator::new(Grammar::SCIENTIFIC);
///
/// assert!(evaluator.validate("log(8) + 2 ** 3"));
/// assert_eq!(evaluator.evaluate("log(8) + 2 ** 3").unwrap(), 11.0);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Evaluator {
    grammar: Grammar,
}

impl Evaluator {
    /// Creates an evaluator for `grammar`.
    #[must_use]
    pub const fn new(grammar: Grammar) -> Self {
        Self { grammar }
    }

    /// Returns the grammar the evaluator runs against.
    #[must_use]
    pub const fn grammar(&self) -> Grammar {
        self.grammar
    }

    /// Runs the structural validator and reports why it rejects.
    pub fn check(&self, expression: &str) -> Result<(), ValidationError> {
        validator::check(expression, &self.grammar)
    }

    /// Returns `true` if the structural validator accepts the expression.
    #[must_use]
    pub fn validate(&self, expression: &str) -> bool {
        validator::validate(expression, &self.grammar)
    }

    /// Splits the expression into tokens.
    pub fn tokenize(&self, expression: &str) -> Result<Vec<Token>, LexError> {
        lexer::tokenize(expression, &self.grammar)
    }

    /// Reorders infix tokens into postfix order.
    #[allow(clippy::unused_self)]
    pub fn to_postfix(&self, tokens: &[Token]) -> Result<Vec<Token>, SyntaxError> {
        converter::to_postfix(tokens)
    }

    /// Evaluates a postfix sequence.
    #[allow(clippy::unused_self)]
    pub fn evaluate_postfix(&self, postfix: &[Token]) -> Result<f64, EvalError> {
        evaluator::evaluate_postfix(postfix)
    }

    /// Validates, tokenizes and converts the expression, returning its postfix
    /// form.
    ///
    /// An expression the validator rejects is never tokenized.
    pub fn compile(&self, expression: &str) -> Result<Vec<Token>, Error> {
        if let Err(e) = self.check(expression) {
            log::debug!("rejected {expression:?}: {e}");
            return Err(e.into());
        }

        let tokens = self.tokenize(expression)?;
        let postfix = self.to_postfix(&tokens)?;

        log::debug!("postfix of {expression:?}: {}",
                    interpreter::token::format_postfix(&postfix));

        Ok(postfix)
    }

    /// Runs the whole pipeline and returns the value of the expression.
    ///
    /// # Errors
    /// Returns the error of the first stage that fails.
    pub fn evaluate(&self, expression: &str) -> Result<f64, Error> {
        let postfix = self.compile(expression)?;
        Ok(self.evaluate_postfix(&postfix)?)
    }
}

/// Returns `true` if the expression passes structural validation under the
/// default grammar.
///
/// # Examples
/// ```
/// use infixa::validate;
///
/// assert!(validate("(1 + 2) * 3"));
/// assert!(!validate("(1 + 2"));
/// assert!(!validate("1 +"));
/// ```
#[must_use]
pub fn validate(expression: &str) -> bool {
    Evaluator::default().validate(expression)
}

/// Evaluates an expression under the default grammar.
///
/// The default grammar is [`Grammar::EXTENDED`]: `+ - * / // ^ ** !`, `log`
/// (base 2) and `exp`, at most 15 operators.
///
/// # Errors
/// Returns an error if validation, tokenizing, conversion or evaluation fails.
///
/// # Examples
/// ```
/// use infixa::{
///     error::{Error, EvalError},
///     evaluate,
/// };
///
/// assert_eq!(evaluate("2 + 3 * 4").unwrap(), 14.0);
/// assert_eq!(evaluate("2 ^ 3 ^ 2").unwrap(), 512.0);
/// assert_eq!(evaluate("4 // 0"), Err(Error::Eval(EvalError::DivisionByZero)));
/// ```
pub fn evaluate(expression: &str) -> Result<f64, Error> {
    Evaluator::default().evaluate(expression)
}
