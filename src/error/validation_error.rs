#[derive(Debug, Clone, PartialEq, Eq)]
/// Represents every reason the structural validator can reject an expression.
pub enum ValidationError {
    /// The expression is empty or only whitespace.
    Empty,
    /// A `)` appeared without a matching `(`, or a `(` was never closed.
    UnbalancedParens,
    /// The expression starts with a character the grammar does not allow.
    InvalidStart {
        /// The first character after trimming.
        found: char,
    },
    /// The expression ends with a character the grammar does not allow.
    InvalidEnd {
        /// The last character after trimming.
        found: char,
    },
    /// The expression exceeds the grammar's complexity ceiling.
    TooComplex {
        /// What was counted, such as `operators`.
        counted: &'static str,
        /// How many were found.
        count:   usize,
        /// The configured maximum.
        max:     usize,
    },
}

impl std::fmt::Display for ValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Empty => write!(f, "Expression is empty."),
            Self::UnbalancedParens => write!(f, "Parentheses are not balanced."),
            Self::InvalidStart { found } => {
                write!(f, "Expression cannot start with '{found}'.")
            },
            Self::InvalidEnd { found } => write!(f, "Expression cannot end with '{found}'."),
            Self::TooComplex { counted, count, max } => {
                write!(f, "Found {count} {counted}, but at most {max} are allowed.")
            },
        }
    }
}

impl std::error::Error for ValidationError {}
