/// Validation errors.
///
/// Explains why the structural pre-check rejected an expression before any
/// tokenizing took place.
pub mod validation_error;
/// Lexical errors.
///
/// Raised by the tokenizer for characters, words or literals outside the
/// active grammar's alphabet.
pub mod lex_error;
/// Syntax errors.
///
/// Raised while reordering tokens into postfix form.
pub mod syntax_error;
/// Evaluation errors.
///
/// Raised by the postfix stack machine: arithmetic faults, domain violations
/// and malformed postfix sequences.
pub mod eval_error;

pub use eval_error::EvalError;
pub use lex_error::LexError;
pub use syntax_error::SyntaxError;
pub use validation_error::ValidationError;

#[derive(Debug, Clone, PartialEq)]
/// Any failure of the validate, tokenize, convert, evaluate pipeline.
///
/// Each variant wraps the error of the stage that failed, and every stage
/// error converts into it with `?`.
pub enum Error {
    /// The structural pre-check rejected the expression.
    ValidationRejected(ValidationError),
    /// The tokenizer failed.
    Lex(LexError),
    /// The infix-to-postfix conversion failed.
    Syntax(SyntaxError),
    /// The postfix evaluation failed.
    Eval(EvalError),
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::ValidationRejected(e) => write!(f, "Invalid expression: {e}"),
            Self::Lex(e) => write!(f, "Lexical error: {e}"),
            Self::Syntax(e) => write!(f, "Syntax error: {e}"),
            Self::Eval(e) => write!(f, "Evaluation error: {e}"),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::ValidationRejected(e) => Some(e),
            Self::Lex(e) => Some(e),
            Self::Syntax(e) => Some(e),
            Self::Eval(e) => Some(e),
        }
    }
}

impl From<ValidationError> for Error {
    fn from(e: ValidationError) -> Self {
        Self::ValidationRejected(e)
    }
}

impl From<LexError> for Error {
    fn from(e: LexError) -> Self {
        Self::Lex(e)
    }
}

impl From<SyntaxError> for Error {
    fn from(e: SyntaxError) -> Self {
        Self::Syntax(e)
    }
}

impl From<EvalError> for Error {
    fn from(e: EvalError) -> Self {
        Self::Eval(e)
    }
}
