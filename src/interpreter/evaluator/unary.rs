use crate::{
    error::EvalError,
    grammar::Operator,
    interpreter::evaluator::core::{EvalResult, Machine},
    util::num::{MAX_FINITE_FACTORIAL, f64_to_u64_exact, u64_to_f64},
};

impl Machine {
    /// Applies a postfix operator to `operand`.
    ///
    /// Only `!` is postfix: the product `2 * 3 * ... * n`, with `0! = 1! = 1`.
    /// Beyond `170!` the product no longer fits in an `f64` and the result is
    /// `+inf`.
    ///
    /// # Errors
    /// - `InvalidFactorialOperand` for negative, fractional or non-finite
    ///   operands.
    /// - `UnsupportedArity` for operators that are not postfix.
    ///
    /// # Example
    /// ```
    /// use infixa::{grammar::Operator, interpreter::evaluator::Machine};
    ///
    /// assert_eq!(Machine::apply_postfix(Operator::Bang, 5.0).unwrap(), 120.0);
    /// assert_eq!(Machine::apply_postfix(Operator::Bang, 0.0).unwrap(), 1.0);
    /// assert!(Machine::apply_postfix(Operator::Bang, 2.5).is_err());
    /// ```
    pub fn apply_postfix(operator: Operator, operand: f64) -> EvalResult<f64> {
        match operator {
            Operator::Bang => factorial(operand),
            _ => Err(EvalError::UnsupportedArity { symbol: operator.symbol(),
                                                   arity:  1, }),
        }
    }
}

fn factorial(operand: f64) -> EvalResult<f64> {
    if !operand.is_finite() || operand < 0.0 || operand != operand.floor() {
        return Err(EvalError::InvalidFactorialOperand { operand });
    }

    match f64_to_u64_exact(operand) {
        Some(n) if n <= MAX_FINITE_FACTORIAL => Ok((2..=n).map(u64_to_f64).product()),
        _ => Ok(f64::INFINITY),
    }
}
