#[derive(Debug, Clone, PartialEq, Eq)]
/// Represents the errors the infix-to-postfix conversion can raise.
pub enum SyntaxError {
    /// A `)` had no matching `(`, or a `(` was left open at the end.
    UnbalancedParens,
}

impl std::fmt::Display for SyntaxError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UnbalancedParens => write!(f, "Mismatched parentheses."),
        }
    }
}

impl std::error::Error for SyntaxError {}
