use crate::grammar::{Function, Operator};

#[derive(Debug, Clone, PartialEq)]
/// Represents all errors that can occur while running a postfix sequence.
pub enum EvalError {
    /// An operator or function found fewer operands on the stack than it
    /// consumes.
    MissingOperand {
        /// The operator or function symbol.
        symbol: &'static str,
    },
    /// `/` or `//` with a zero divisor.
    DivisionByZero,
    /// A function argument outside the function's domain.
    DomainError {
        /// The function applied.
        function: Function,
        /// The rejected argument.
        argument: f64,
    },
    /// `!` applied to a negative, fractional or non-finite value.
    InvalidFactorialOperand {
        /// The rejected operand.
        operand: f64,
    },
    /// An operand of an integer operation does not fit in an `i64`.
    OutOfRange {
        /// The operator applied.
        operator: Operator,
        /// The offending operand.
        operand:  f64,
    },
    /// An operator or function was configured with an arity it cannot be
    /// applied with, such as a binary `!`.
    UnsupportedArity {
        /// The operator or function symbol.
        symbol: &'static str,
        /// The number of operands it was asked to take.
        arity:  usize,
    },
    /// Evaluation ended with a stack size other than one.
    MalformedExpression {
        /// Number of values left on the stack.
        remaining: usize,
    },
}

impl std::fmt::Display for EvalError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::MissingOperand { symbol } => {
                write!(f, "Not enough operands for '{symbol}'.")
            },
            Self::DivisionByZero => write!(f, "Division by zero."),
            Self::DomainError { function, argument } => {
                write!(f, "{function} is not defined for {argument}.")
            },
            Self::InvalidFactorialOperand { operand } => write!(f,
                                                                "Factorial is only defined for non-negative integers, but found {operand}."),
            Self::OutOfRange { operator, operand } => write!(f,
                                                             "Operand {operand} of '{operator}' is outside the integer range."),
            Self::UnsupportedArity { symbol, arity } => {
                write!(f, "'{symbol}' cannot be applied to {arity} operand(s).")
            },
            Self::MalformedExpression { remaining } => write!(f,
                                                              "Malformed expression: {remaining} values left after evaluation."),
        }
    }
}

impl std::error::Error for EvalError {}
