use crate::{
    error::EvalError,
    grammar::Operator,
    interpreter::evaluator::core::{EvalResult, Machine},
    util::num::{f64_to_i64_truncated, i64_to_f64},
};

impl Machine {
    /// Applies a binary operator to `left` and `right`.
    ///
    /// `/` is real division and `//` divides the operands truncated to
    /// integers, rounding toward zero. A `//` operand that does not fit in an
    /// `i64` is an error rather than being saturated to `i64::MAX` or
    /// `i64::MIN`. `^` and `**` are `powf`, so a negative base with a
    /// fractional exponent yields NaN rather than an error.
    ///
    /// # Errors
    /// - `DivisionByZero` for `/` or `//` by zero, including a `//` divisor
    ///   that truncates to zero.
    /// - `OutOfRange` for `//` operands that are not finite or lie outside the
    ///   `i64` range, such as `1e20 // 3`.
    /// - `UnsupportedArity` for `!`.
    ///
    /// # Example
    /// ```
    /// use infixa::{grammar::Operator, interpreter::evaluator::Machine};
    ///
    /// assert_eq!(Machine::apply_binary(Operator::DoubleSlash, -7.0, 2.0).unwrap(), -3.0);
    /// assert!(Machine::apply_binary(Operator::Slash, 1.0, 0.0).is_err());
    /// ```
    pub fn apply_binary(operator: Operator, left: f64, right: f64) -> EvalResult<f64> {
        use Operator::{Bang, Caret, DoubleSlash, DoubleStar, Minus, Plus, Slash, Star};

        match operator {
            Plus => Ok(left + right),
            Minus => Ok(left - right),
            Star => Ok(left * right),
            Slash => {
                if right == 0.0 {
                    return Err(EvalError::DivisionByZero);
                }
                Ok(left / right)
            },
            DoubleSlash => truncating_div(left, right),
            Caret | DoubleStar => Ok(left.powf(right)),
            Bang => Err(EvalError::UnsupportedArity { symbol: operator.symbol(),
                                                      arity:  2, }),
        }
    }
}

fn truncating_div(left: f64, right: f64) -> EvalResult<f64> {
    if right == 0.0 {
        return Err(EvalError::DivisionByZero);
    }

    let to_integer = |operand: f64| {
        f64_to_i64_truncated(operand).ok_or(EvalError::OutOfRange { operator: Operator::DoubleSlash,
                                                                    operand })
    };
    let dividend = to_integer(left)?;
    let divisor = to_integer(right)?;

    if divisor == 0 {
        return Err(EvalError::DivisionByZero);
    }

    dividend.checked_div(divisor)
            .map(i64_to_f64)
            .ok_or(EvalError::OutOfRange { operator: Operator::DoubleSlash,
                                           operand:  left, })
}
