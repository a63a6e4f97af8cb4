use std::fmt;

use crate::grammar::{FunctionSpec, OperatorSpec};

/// A typed unit of an expression, as produced by the tokenizer.
///
/// Operator and function tokens carry their full grammar entry, so the
/// converter and the evaluator never need to consult the grammar again.
/// A postfix sequence only ever contains `Number`, `Operator` and
/// `Function` tokens.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Token {
    /// A numeric literal, with any folded unary sign already applied.
    Number(f64),
    /// An operator symbol enabled in the grammar.
    Operator(OperatorSpec),
    /// A function name that was immediately followed by `(`.
    Function(FunctionSpec),
    /// `(`
    LeftParen,
    /// `)`
    RightParen,
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Number(n) => write!(f, "{n}"),
            Self::Operator(spec) => write!(f, "{}", spec.operator),
            Self::Function(spec) => write!(f, "{}", spec.function),
            Self::LeftParen => f.write_str("("),
            Self::RightParen => f.write_str(")"),
        }
    }
}

/// Renders a token sequence separated by single spaces.
///
/// Applied to a postfix sequence this yields its Reverse Polish form.
///
/// # Example
/// ```
/// use infixa::{Evaluator, grammar::Grammar, interpreter::token::format_postfix};
///
/// let evaluator = Evaluator::new(Grammar::EXTENDED);
/// let tokens = evaluator.tokenize("2 + 3 * 4").unwrap();
/// let postfix = evaluator.to_postfix(&tokens).unwrap();
///
/// assert_eq!(format_postfix(&postfix), "2 3 4 * +");
/// ```
#[must_use]
pub fn format_postfix(tokens: &[Token]) -> String {
    tokens.iter()
          .map(ToString::to_string)
          .collect::<Vec<_>>()
          .join(" ")
}
