use crate::{
    error::ValidationError,
    grammar::{ComplexityRule, Grammar},
};

/// Characters after which a `+` or `-` is a sign, not a new additive term.
const SIGN_CONTEXT: [char; 6] = ['+', '-', '*', '/', '^', '('];

/// Checks an expression against the grammar's structural rules.
///
/// The checks run in order on the trimmed text:
/// 1. parentheses are balanced and never close more than they opened;
/// 2. the first and last characters satisfy the grammar's boundary rule;
/// 3. the complexity count does not exceed the grammar's ceiling.
///
/// Passing does not guarantee that evaluation succeeds.
///
/// # Errors
/// Returns the first rule the expression breaks.
///
/// # Example
/// ```
/// use infixa::{error::ValidationError, grammar::Grammar, interpreter::validator::check};
///
/// assert_eq!(check("(1 + 2", &Grammar::EXTENDED),
///            Err(ValidationError::UnbalancedParens));
/// assert!(check("(1 + 2) * 3", &Grammar::EXTENDED).is_ok());
/// assert_eq!(check("(1 + 2) * 3", &Grammar::BASIC),
///            Err(ValidationError::InvalidStart { found: '(' }));
/// ```
pub fn check(source: &str, grammar: &Grammar) -> Result<(), ValidationError> {
    let text = source.trim();
    let (Some(first), Some(last)) = (text.chars().next(), text.chars().next_back()) else {
        return Err(ValidationError::Empty);
    };

    if !parens_balanced(text) {
        return Err(ValidationError::UnbalancedParens);
    }

    if !starts_validly(text, first, grammar) {
        return Err(ValidationError::InvalidStart { found: first });
    }

    if !grammar.boundary().accepts_last(last) {
        return Err(ValidationError::InvalidEnd { found: last });
    }

    let rule = grammar.complexity();
    let count = complexity(text, grammar);
    if count > rule.max() {
        return Err(ValidationError::TooComplex { counted: rule.describe(),
                                                 count,
                                                 max: rule.max() });
    }

    Ok(())
}

/// Returns `true` if [`check`] accepts the expression.
#[must_use]
pub fn validate(source: &str, grammar: &Grammar) -> bool {
    check(source, grammar).is_ok()
}

/// Measures an expression the way the grammar's complexity rule counts.
///
/// # Example
/// ```
/// use infixa::{grammar::Grammar, interpreter::validator::complexity};
///
/// // `//` counts as one operator.
/// assert_eq!(complexity("7 // 2 + 1", &Grammar::EXTENDED), 2);
/// // Only top-level terms count; signs do not start a term.
/// assert_eq!(complexity("1 + (2 - 3) + -4", &Grammar::SCIENTIFIC), 3);
/// ```
#[must_use]
pub fn complexity(text: &str, grammar: &Grammar) -> usize {
    match grammar.complexity() {
        ComplexityRule::Operators { .. } => count_operators(text, grammar),
        ComplexityRule::AdditiveTerms { .. } => count_terms(text),
    }
}

fn parens_balanced(text: &str) -> bool {
    let mut depth = 0usize;
    for c in text.chars() {
        match c {
            '(' => depth += 1,
            ')' => match depth.checked_sub(1) {
                Some(d) => depth = d,
                None => return false,
            },
            _ => {},
        }
    }
    depth == 0
}

fn starts_validly(text: &str, first: char, grammar: &Grammar) -> bool {
    let boundary = grammar.boundary();

    first.is_ascii_digit()
    || first == '-'
    || (boundary.leading_paren && first == '(')
    || (boundary.leading_function && grammar.function_call_prefix(text).is_some())
}

/// Counts operator symbols enabled in the grammar, longest match first.
fn count_operators(text: &str, grammar: &Grammar) -> usize {
    let mut count = 0;
    let mut rest = text;

    while let Some(c) = rest.chars().next() {
        if let Some(pair) = rest.get(..2)
           && grammar.operator(pair).is_some()
        {
            count += 1;
            rest = &rest[2..];
            continue;
        }

        let width = c.len_utf8();
        if grammar.operator(&rest[..width]).is_some() {
            count += 1;
        }
        rest = &rest[width..];
    }

    count
}

/// Counts additive terms at parenthesis depth 0.
///
/// Whitespace is ignored when looking at the character before a sign.
fn count_terms(text: &str) -> usize {
    let mut count = 1;
    let mut depth = 0usize;
    let mut previous = None;

    for c in text.chars() {
        match c {
            '(' => depth += 1,
            ')' => depth = depth.saturating_sub(1),
            '+' | '-' if depth == 0 => {
                if previous.is_some_and(|p| !SIGN_CONTEXT.contains(&p)) {
                    count += 1;
                }
            },
            _ => {},
        }
        if !c.is_whitespace() {
            previous = Some(c);
        }
    }

    count
}
