/// The stack machine and its driver loop.
///
/// Holds the value stack, dispatches each postfix token and checks the final
/// stack shape.
pub mod core;

/// Binary operator evaluation.
///
/// Implements `+ - * / // ^ **` on two popped operands.
pub mod binary;

/// Postfix operator evaluation.
///
/// Implements the factorial.
pub mod unary;

/// Function evaluation.
///
/// Implements `log` and `exp`.
pub mod function;

pub use self::core::{EvalResult, Machine, evaluate_postfix};
