use crate::{
    error::EvalError,
    grammar::Function,
    interpreter::evaluator::core::{EvalResult, Machine},
};

impl Machine {
    /// Applies a function to its popped arguments.
    ///
    /// - `log`: base-2 logarithm, defined for positive arguments only.
    /// - `exp`: natural exponential.
    ///
    /// # Errors
    /// - `DomainError` for `log` of zero or a negative number.
    /// - `UnsupportedArity` if not given exactly one argument.
    ///
    /// # Example
    /// ```
    /// use infixa::{grammar::Function, interpreter::evaluator::Machine};
    ///
    /// assert_eq!(Machine::apply_function(Function::Log, &[8.0]).unwrap(), 3.0);
    /// assert_eq!(Machine::apply_function(Function::Exp, &[0.0]).unwrap(), 1.0);
    /// assert!(Machine::apply_function(Function::Log, &[0.0]).is_err());
    /// ```
    pub fn apply_function(function: Function, args: &[f64]) -> EvalResult<f64> {
        let &[argument] = args else {
            return Err(EvalError::UnsupportedArity { symbol: function.name(),
                                                     arity:  args.len(), });
        };

        match function {
            Function::Log => {
                if argument <= 0.0 {
                    return Err(EvalError::DomainError { function, argument });
                }
                Ok(argument.log2())
            },
            Function::Exp => Ok(argument.exp()),
        }
    }
}
