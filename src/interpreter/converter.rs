use crate::{error::SyntaxError, interpreter::token::Token};

/// Reorders an infix token sequence into postfix (Reverse Polish) order.
///
/// This is the shunting-yard algorithm over an explicit operator stack:
/// - numbers go straight to the output;
/// - functions and `(` are pushed onto the stack;
/// - `)` pops operators to the output down to the matching `(`, then also
///   moves a function waiting under it, binding it to its argument;
/// - postfix operators go straight to the output, since they have no right
///   operand to wait for;
/// - any other operator first pops every stacked operator it yields to (see
///   [`OperatorSpec::yields_to`](crate::grammar::OperatorSpec::yields_to)).
///
/// # Errors
/// `UnbalancedParens` if a `)` has no matching `(` or a `(` is never closed.
///
/// # Example
/// ```
/// use infixa::{
///     grammar::Grammar,
///     interpreter::{converter::to_postfix, lexer::tokenize, token::format_postfix},
/// };
///
/// let tokens = tokenize("2 ^ 3 ^ 2", &Grammar::EXTENDED).unwrap();
/// let postfix = to_postfix(&tokens).unwrap();
///
/// assert_eq!(format_postfix(&postfix), "2 3 2 ^ ^");
/// ```
pub fn to_postfix(tokens: &[Token]) -> Result<Vec<Token>, SyntaxError> {
    let mut output = Vec::with_capacity(tokens.len());
    let mut stack = Vec::new();

    for &token in tokens {
        match token {
            Token::Number(_) => output.push(token),
            Token::Function(_) | Token::LeftParen => stack.push(token),
            Token::RightParen => close_group(&mut stack, &mut output)?,
            Token::Operator(spec) if spec.is_postfix() => output.push(token),
            Token::Operator(spec) => {
                while let Some(&Token::Operator(top)) = stack.last()
                      && spec.yields_to(&top)
                {
                    stack.pop();
                    output.push(Token::Operator(top));
                }
                stack.push(token);
            },
        }
    }

    while let Some(token) = stack.pop() {
        match token {
            Token::LeftParen | Token::RightParen => return Err(SyntaxError::UnbalancedParens),
            _ => output.push(token),
        }
    }

    Ok(output)
}

/// Handles a `)`: unwinds the stack to the matching `(` and releases the
/// function the group was the argument of, if any.
fn close_group(stack: &mut Vec<Token>, output: &mut Vec<Token>) -> Result<(), SyntaxError> {
    loop {
        match stack.pop() {
            Some(Token::LeftParen) => break,
            Some(token) => output.push(token),
            None => return Err(SyntaxError::UnbalancedParens),
        }
    }

    if let Some(&Token::Function(_)) = stack.last() {
        output.extend(stack.pop());
    }

    Ok(())
}
