use logos::Logos;

use crate::{
    error::LexError,
    grammar::Grammar,
    interpreter::token::Token,
};

/// A raw lexeme, before the grammar gives it meaning.
///
/// The lexer knows every symbol any grammar may use; whether a symbol is
/// allowed is decided by [`tokenize`].
#[derive(Logos, Debug, PartialEq, Eq, Clone, Copy)]
pub enum Lexeme {
    /// Runs of digits and decimal points, such as `3.14`, `.5` or `1.2.3`.
    #[regex(r"[0-9.]+")]
    Number,
    /// Words such as `log`.
    #[regex(r"[a-zA-Z_][a-zA-Z0-9_]*")]
    Word,
    /// Operator symbols. Two-character symbols win over their prefixes.
    #[token("//")]
    #[token("**")]
    #[token("+")]
    #[token("-")]
    #[token("*")]
    #[token("/")]
    #[token("^")]
    #[token("!")]
    Symbol,
    /// `(`
    #[token("(")]
    LParen,
    /// `)`
    #[token(")")]
    RParen,
    /// Whitespace.
    #[regex(r"[ \t\r\n\f]+", logos::skip)]
    Ignored,
}

/// Converts an expression into a sequence of tokens in a single pass.
///
/// Rules applied at each lexeme:
/// - A word followed directly by `(` becomes a `Function` token when the
///   grammar defines it.
/// - A `-` at the start, after any operator or after `(` is a sign and is
///   folded into the literal that immediately follows. Without such a
///   literal it stays an operator.
/// - A two-character operator the grammar lacks is split into its single
///   characters.
///
/// # Errors
/// - `UnknownCharacter` for characters outside the grammar's alphabet.
/// - `UnknownFunction` for words that are not callable functions.
/// - `InvalidNumber` for literals that do not parse, such as `1.2.3`.
///
/// # Example
/// ```
/// use infixa::{
///     grammar::Grammar,
///     interpreter::{lexer::tokenize, token::Token},
/// };
///
/// let tokens = tokenize("3 - -2", &Grammar::EXTENDED).unwrap();
///
/// assert_eq!(tokens.len(), 3);
/// assert_eq!(tokens[2], Token::Number(-2.0));
/// ```
pub fn tokenize(source: &str, grammar: &Grammar) -> Result<Vec<Token>, LexError> {
    let mut tokens = Vec::new();
    let mut lexer = Lexeme::lexer(source);

    while let Some(lexeme) = lexer.next() {
        let position = lexer.span().start;
        let slice = lexer.slice();

        match lexeme {
            Ok(Lexeme::Number) => tokens.push(Token::Number(parse_number(slice, position)?)),
            Ok(Lexeme::Word) => {
                let spec = grammar.function(slice)
                                  .filter(|_| lexer.remainder().starts_with('('))
                                  .ok_or_else(|| LexError::UnknownFunction { name:
                                                                                 slice.to_string(),
                                                                             position })?;
                tokens.push(Token::Function(spec));
            },
            Ok(Lexeme::Symbol) => {
                if slice == "-" && is_sign_position(tokens.last()) {
                    let digits = numeric_prefix_len(lexer.remainder());
                    if digits > 0 {
                        lexer.bump(digits);
                        tokens.push(Token::Number(parse_number(lexer.slice(), position)?));
                        continue;
                    }
                }
                push_operators(&mut tokens, slice, position, grammar)?;
            },
            Ok(Lexeme::LParen) => tokens.push(Token::LeftParen),
            Ok(Lexeme::RParen) => tokens.push(Token::RightParen),
            Ok(Lexeme::Ignored) => {},
            Err(()) => {
                let character = slice.chars().next().unwrap_or(char::REPLACEMENT_CHARACTER);
                return Err(LexError::UnknownCharacter { character, position });
            },
        }
    }

    log::debug!("tokenized {source:?} into {} tokens", tokens.len());

    Ok(tokens)
}

/// Returns `true` if a `-` following `previous` is a sign rather than a
/// binary operator.
///
/// Postfix operators count too: `5!-3` reads as `5!` followed by `-3`.
const fn is_sign_position(previous: Option<&Token>) -> bool {
    matches!(previous, None | Some(Token::LeftParen | Token::Operator(_)))
}

/// Length in bytes of the digit-and-point run at the start of `rest`.
fn numeric_prefix_len(rest: &str) -> usize {
    rest.bytes()
        .take_while(|b| b.is_ascii_digit() || *b == b'.')
        .count()
}

/// Parses a literal, optionally signed, into an `f64`.
fn parse_number(literal: &str, position: usize) -> Result<f64, LexError> {
    literal.parse()
           .map_err(|_| LexError::InvalidNumber { literal: literal.to_string(),
                                                  position })
}

/// Pushes the operator token(s) for `symbol`.
///
/// A symbol the grammar does not enable as a whole is split into its single
/// characters, each of which must then be enabled.
fn push_operators(tokens: &mut Vec<Token>,
                  symbol: &str,
                  position: usize,
                  grammar: &Grammar)
                  -> Result<(), LexError> {
    if let Some(spec) = grammar.operator(symbol) {
        tokens.push(Token::Operator(spec));
        return Ok(());
    }

    for (offset, character) in symbol.char_indices() {
        let single = &symbol[offset..offset + character.len_utf8()];
        let spec =
            grammar.operator(single)
                   .ok_or(LexError::UnknownCharacter { character,
                                                       position: position + offset })?;
        tokens.push(Token::Operator(spec));
    }

    Ok(())
}
