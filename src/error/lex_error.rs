#[derive(Debug, Clone, PartialEq, Eq)]
/// Represents all errors that can occur during tokenization.
pub enum LexError {
    /// Found a character outside the grammar's alphabet.
    UnknownCharacter {
        /// The character encountered.
        character: char,
        /// Byte offset of the character in the expression.
        position:  usize,
    },
    /// Found a word that is not a function of the grammar, or a function name
    /// not immediately followed by `(`.
    UnknownFunction {
        /// The word encountered.
        name:     String,
        /// Byte offset of the word in the expression.
        position: usize,
    },
    /// A run of digits and points does not form a valid number, such as
    /// `1.2.3`.
    InvalidNumber {
        /// The literal text, including a folded sign.
        literal:  String,
        /// Byte offset of the literal in the expression.
        position: usize,
    },
}

impl std::fmt::Display for LexError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UnknownCharacter { character, position } => {
                write!(f, "Unknown character '{character}' at position {position}.")
            },
            Self::UnknownFunction { name, position } => {
                write!(f, "Unknown function '{name}' at position {position}.")
            },
            Self::InvalidNumber { literal, position } => {
                write!(f, "Invalid number '{literal}' at position {position}.")
            },
        }
    }
}

impl std::error::Error for LexError {}
