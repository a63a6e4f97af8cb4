/// The lexer module turns source text into tokens.
///
/// A `logos` lexer splits the text into raw lexemes; the active grammar then
/// decides which of them are operators, functions or signed numbers.
///
/// # Responsibilities
/// - Folds a unary `-` into the numeric literal that follows it.
/// - Splits multi-character operators the grammar does not enable.
/// - Reports unknown characters, unknown functions and malformed literals.
pub mod lexer;
/// The token type shared by the lexer, converter and evaluator.
pub mod token;
/// The validator module rejects malformed input before it is tokenized.
///
/// # Responsibilities
/// - Checks parenthesis balance.
/// - Checks the first and last characters against the grammar's boundary
///   rule.
/// - Enforces the grammar's complexity ceiling.
pub mod validator;
/// The converter module reorders infix tokens into postfix order.
///
/// It runs the shunting-yard algorithm over an explicit operator stack,
/// honouring precedence, associativity, postfix operators and function calls.
pub mod converter;
/// The evaluator module executes postfix sequences on a value stack.
///
/// # Responsibilities
/// - Applies binary operators, postfix operators and functions.
/// - Reports arithmetic faults such as division by zero or domain errors.
/// - Verifies that exactly one value remains at the end.
pub mod evaluator;
