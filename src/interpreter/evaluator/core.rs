use crate::{
    error::EvalError,
    grammar::{Arity, FunctionSpec, OperatorSpec},
    interpreter::token::Token,
};

pub type EvalResult<T> = Result<T, EvalError>;

/// A stack machine that runs one postfix sequence.
///
/// The stack lives only for the duration of [`Machine::execute`]; a machine
/// is consumed by it, so no state survives between evaluations.
#[derive(Debug, Default)]
pub struct Machine {
    stack: Vec<f64>,
}

impl Machine {
    /// Creates a machine with an empty stack.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a machine whose stack can hold `capacity` values without
    /// reallocating.
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        Self { stack: Vec::with_capacity(capacity) }
    }

    /// Runs every token and returns the single value left on the stack.
    ///
    /// # Errors
    /// Any error raised by a step, or `MalformedExpression` if the stack does
    /// not end with exactly one value.
    pub fn execute(mut self, postfix: &[Token]) -> EvalResult<f64> {
        for token in postfix {
            self.step(token)?;
        }
        self.finish()
    }

    /// Applies one postfix token to the stack.
    ///
    /// # Errors
    /// Returns the error of the applied operator or function. Parentheses are
    /// never part of a postfix sequence and yield `MalformedExpression`.
    pub fn step(&mut self, token: &Token) -> EvalResult<()> {
        match *token {
            Token::Number(value) => self.stack.push(value),
            Token::Function(spec) => self.call(spec)?,
            Token::Operator(spec) => self.operate(spec)?,
            Token::LeftParen | Token::RightParen => {
                return Err(EvalError::MalformedExpression { remaining: self.stack.len() });
            },
        }

        log::trace!("{token} => {:?}", self.stack);

        Ok(())
    }

    /// Returns the values currently on the stack, bottom first.
    #[must_use]
    pub fn stack(&self) -> &[f64] {
        &self.stack
    }

    fn call(&mut self, spec: FunctionSpec) -> EvalResult<()> {
        let start = self.stack
                        .len()
                        .checked_sub(spec.arity)
                        .ok_or(EvalError::MissingOperand { symbol: spec.name() })?;
        let args = self.stack.split_off(start);
        let result = Self::apply_function(spec.function, &args)?;
        self.stack.push(result);
        Ok(())
    }

    fn operate(&mut self, spec: OperatorSpec) -> EvalResult<()> {
        let symbol = spec.operator.symbol();
        let result = match spec.arity {
            Arity::UnaryPostfix => {
                let operand = self.stack.pop().ok_or(EvalError::MissingOperand { symbol })?;
                Self::apply_postfix(spec.operator, operand)?
            },
            Arity::Binary => {
                // The right operand sits on top.
                let (Some(right), Some(left)) = (self.stack.pop(), self.stack.pop()) else {
                    return Err(EvalError::MissingOperand { symbol });
                };
                Self::apply_binary(spec.operator, left, right)?
            },
        };
        self.stack.push(result);
        Ok(())
    }

    fn finish(self) -> EvalResult<f64> {
        match self.stack.as_slice() {
            [value] => Ok(*value),
            rest => Err(EvalError::MalformedExpression { remaining: rest.len() }),
        }
    }
}

/// Evaluates a postfix sequence on a fresh [`Machine`].
///
/// # Errors
/// See [`Machine::execute`].
///
/// # Example
/// ```
/// use infixa::{
///     grammar::Grammar,
///     interpreter::{evaluator::evaluate_postfix, token::Token},
/// };
///
/// let minus = Grammar::EXTENDED.operator("-").unwrap();
/// let postfix = [Token::Number(7.0), Token::Number(2.0), Token::Operator(minus)];
///
/// assert_eq!(evaluate_postfix(&postfix).unwrap(), 5.0);
/// assert!(evaluate_postfix(&postfix[..2]).is_err());
/// ```
pub fn evaluate_postfix(postfix: &[Token]) -> EvalResult<f64> {
    Machine::with_capacity(postfix.len()).execute(postfix)
}
