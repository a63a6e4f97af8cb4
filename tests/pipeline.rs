use infixa::{
    Evaluator,
    error::{Error, EvalError, LexError, SyntaxError, ValidationError},
    grammar::{BoundaryRule, ComplexityRule, Function, Grammar, Operator, OperatorSpec},
    interpreter::{
        converter::to_postfix,
        evaluator::{Machine, evaluate_postfix},
        lexer::tokenize,
        token::{Token, format_postfix},
        validator::{check, complexity},
    },
};

fn op(grammar: &Grammar, symbol: &str) -> Token {
    Token::Operator(grammar.operator(symbol).unwrap())
}

fn postfix_of(src: &str) -> String {
    let tokens = tokenize(src, &Grammar::EXTENDED).unwrap();
    format_postfix(&to_postfix(&tokens).unwrap())
}

#[test]
fn tokenizes_function_calls() {
    let g = Grammar::EXTENDED;
    assert_eq!(tokenize("log(2)", &g).unwrap(),
               vec![Token::Function(g.function("log").unwrap()),
                    Token::LeftParen,
                    Token::Number(2.0),
                    Token::RightParen]);
}

#[test]
fn function_names_need_a_parenthesis() {
    let g = Grammar::EXTENDED;
    assert_eq!(tokenize("log 2", &g),
               Err(LexError::UnknownFunction { name:     "log".to_string(),
                                               position: 0, }));
    assert_eq!(tokenize("lg(2)", &g),
               Err(LexError::UnknownFunction { name:     "lg".to_string(),
                                               position: 0, }));
}

#[test]
fn multi_character_operators_are_greedy() {
    let g = Grammar::EXTENDED;
    assert_eq!(tokenize("7//2", &g).unwrap(),
               vec![Token::Number(7.0), op(&g, "//"), Token::Number(2.0)]);
    assert_eq!(tokenize("7**2", &g).unwrap(),
               vec![Token::Number(7.0), op(&g, "**"), Token::Number(2.0)]);
}

#[test]
fn unknown_multi_character_operators_are_split() {
    let g = Grammar::SCIENTIFIC;
    assert_eq!(tokenize("7//2", &g).unwrap(),
               vec![Token::Number(7.0), op(&g, "/"), op(&g, "/"), Token::Number(2.0)]);

    let g = Grammar::BASIC;
    assert_eq!(tokenize("7**2", &g).unwrap(),
               vec![Token::Number(7.0), op(&g, "*"), op(&g, "*"), Token::Number(2.0)]);
}

#[test]
fn sign_position_decides_unary_minus() {
    let g = Grammar::EXTENDED;
    assert_eq!(tokenize("-1.5", &g).unwrap(), vec![Token::Number(-1.5)]);
    assert_eq!(tokenize("2 * -1.5", &g).unwrap(),
               vec![Token::Number(2.0), op(&g, "*"), Token::Number(-1.5)]);
    assert_eq!(tokenize("(-1)", &g).unwrap(),
               vec![Token::LeftParen, Token::Number(-1.0), Token::RightParen]);
    assert_eq!(tokenize("2 -1", &g).unwrap(),
               vec![Token::Number(2.0), op(&g, "-"), Token::Number(1.0)]);
    assert_eq!(tokenize("5!-3", &g).unwrap(),
               vec![Token::Number(5.0), op(&g, "!"), Token::Number(-3.0)]);
    assert_eq!(tokenize("5! - 3", &g).unwrap(),
               vec![Token::Number(5.0), op(&g, "!"), op(&g, "-"), Token::Number(3.0)]);
}

#[test]
fn sign_without_literal_stays_an_operator() {
    let g = Grammar::EXTENDED;
    assert_eq!(tokenize("-(2)", &g).unwrap(),
               vec![op(&g, "-"), Token::LeftParen, Token::Number(2.0), Token::RightParen]);
    assert_eq!(tokenize("- 2", &g).unwrap(), vec![op(&g, "-"), Token::Number(2.0)]);
}

#[test]
fn lexical_errors() {
    assert_eq!(tokenize("1.2.3", &Grammar::EXTENDED),
               Err(LexError::InvalidNumber { literal:  "1.2.3".to_string(),
                                             position: 0, }));
    assert_eq!(tokenize("1 - -.", &Grammar::EXTENDED),
               Err(LexError::InvalidNumber { literal:  "-.".to_string(),
                                             position: 4, }));
    assert_eq!(tokenize("3!", &Grammar::BASIC),
               Err(LexError::UnknownCharacter { character: '!',
                                                position:  1, }));
    assert_eq!(tokenize("2 % 3", &Grammar::EXTENDED),
               Err(LexError::UnknownCharacter { character: '%',
                                                position:  2, }));
}

#[test]
fn converts_to_postfix() {
    assert_eq!(postfix_of("2 + 3 * 4"), "2 3 4 * +");
    assert_eq!(postfix_of("(2 + 3) * 4"), "2 3 + 4 *");
    assert_eq!(postfix_of("10 - 4 - 3"), "10 4 - 3 -");
    assert_eq!(postfix_of("2 ^ 3 ^ 2"), "2 3 2 ^ ^");
    assert_eq!(postfix_of("2 ^ 3!"), "2 3 ! ^");
    assert_eq!(postfix_of("log(8) * 2"), "8 log 2 *");
    assert_eq!(postfix_of("exp(1 + 1)"), "1 1 + exp");
    assert_eq!(postfix_of("-2 // 3 ** 2"), "-2 3 2 ** //");
}

#[test]
fn converter_rechecks_parentheses() {
    let g = Grammar::EXTENDED;
    let open = tokenize("(1 + 2", &g).unwrap();
    let close = tokenize("1 + 2)", &g).unwrap();

    assert_eq!(to_postfix(&open), Err(SyntaxError::UnbalancedParens));
    assert_eq!(to_postfix(&close), Err(SyntaxError::UnbalancedParens));
}

#[test]
fn binary_operators_pop_right_operand_first() {
    let g = Grammar::EXTENDED;
    let postfix = [Token::Number(8.0), Token::Number(2.0), op(&g, "/")];
    assert_eq!(evaluate_postfix(&postfix), Ok(4.0));

    let postfix = [Token::Number(2.0), Token::Number(3.0), op(&g, "^")];
    assert_eq!(evaluate_postfix(&postfix), Ok(8.0));
}

#[test]
fn malformed_postfix_sequences() {
    let g = Grammar::EXTENDED;

    assert_eq!(evaluate_postfix(&[op(&g, "+")]),
               Err(EvalError::MissingOperand { symbol: "+" }));
    assert_eq!(evaluate_postfix(&[Token::Number(1.0), op(&g, "+")]),
               Err(EvalError::MissingOperand { symbol: "+" }));
    assert_eq!(evaluate_postfix(&[op(&g, "!")]),
               Err(EvalError::MissingOperand { symbol: "!" }));
    assert_eq!(evaluate_postfix(&[Token::Function(g.function("exp").unwrap())]),
               Err(EvalError::MissingOperand { symbol: "exp" }));
    assert_eq!(evaluate_postfix(&[Token::Number(1.0), Token::Number(2.0)]),
               Err(EvalError::MalformedExpression { remaining: 2 }));
    assert_eq!(evaluate_postfix(&[]), Err(EvalError::MalformedExpression { remaining: 0 }));
    assert_eq!(evaluate_postfix(&[Token::Number(1.0), Token::LeftParen]),
               Err(EvalError::MalformedExpression { remaining: 1 }));
}

#[test]
fn machine_steps_are_observable() {
    let g = Grammar::EXTENDED;
    let mut machine = Machine::new();

    machine.step(&Token::Number(3.0)).unwrap();
    machine.step(&Token::Number(4.0)).unwrap();
    assert_eq!(machine.stack(), &[3.0, 4.0]);

    machine.step(&op(&g, "*")).unwrap();
    assert_eq!(machine.stack(), &[12.0]);
}

#[test]
fn integer_division_truncates_toward_zero() {
    assert_eq!(Machine::apply_binary(Operator::DoubleSlash, 7.0, 2.0), Ok(3.0));
    assert_eq!(Machine::apply_binary(Operator::DoubleSlash, -7.0, 2.0), Ok(-3.0));
    assert_eq!(Machine::apply_binary(Operator::DoubleSlash, 7.0, -2.0), Ok(-3.0));
    assert_eq!(Machine::apply_binary(Operator::DoubleSlash, 5.0, 0.5),
               Err(EvalError::DivisionByZero));
    assert_eq!(Machine::apply_binary(Operator::DoubleSlash, 1e20, 3.0),
               Err(EvalError::OutOfRange { operator: Operator::DoubleSlash,
                                           operand:  1e20, }));
    assert_eq!(Machine::apply_binary(Operator::DoubleSlash, 3.0, f64::INFINITY),
               Err(EvalError::OutOfRange { operator: Operator::DoubleSlash,
                                           operand:  f64::INFINITY, }));
}

#[test]
fn operators_reject_the_wrong_arity() {
    assert_eq!(Machine::apply_binary(Operator::Bang, 1.0, 2.0),
               Err(EvalError::UnsupportedArity { symbol: "!", arity: 2 }));
    assert_eq!(Machine::apply_postfix(Operator::Plus, 1.0),
               Err(EvalError::UnsupportedArity { symbol: "+", arity: 1 }));
}

#[test]
fn factorial_beyond_f64_range_is_infinite() {
    assert_eq!(Machine::apply_postfix(Operator::Bang, 170.0).map(f64::is_finite), Ok(true));
    assert_eq!(Machine::apply_postfix(Operator::Bang, 171.0), Ok(f64::INFINITY));
    assert!(Machine::apply_postfix(Operator::Bang, f64::INFINITY).is_err());
}

#[test]
fn validation_reasons() {
    let g = Grammar::EXTENDED;

    assert_eq!(check("", &g), Err(ValidationError::Empty));
    assert_eq!(check("   ", &g), Err(ValidationError::Empty));
    assert_eq!(check(")1 + 2(", &g), Err(ValidationError::UnbalancedParens));
    assert_eq!(check("+1", &g), Err(ValidationError::InvalidStart { found: '+' }));
    assert_eq!(check("1 +", &g), Err(ValidationError::InvalidEnd { found: '+' }));
    assert_eq!(check("  -1 + 2  ", &g), Ok(()));
}

#[test]
fn single_digit_expressions_are_valid() {
    assert_eq!(check("5", &Grammar::BASIC), Ok(()));
    assert_eq!(check("5", &Grammar::EXTENDED), Ok(()));
    assert_eq!(check("5", &Grammar::EXTENDED_LEGACY), Ok(()));
    assert_eq!(check("-", &Grammar::EXTENDED_LEGACY),
               Err(ValidationError::InvalidEnd { found: '-' }));
}

#[test]
fn legacy_boundary_rule() {
    assert_eq!(check("2 + 3]", &Grammar::EXTENDED_LEGACY), Ok(()));
    assert_eq!(check("2 + 3$", &Grammar::EXTENDED_LEGACY), Ok(()));
    assert_eq!(check("2 + 3]", &Grammar::EXTENDED),
               Err(ValidationError::InvalidEnd { found: ']' }));
    assert_eq!(check("3!", &Grammar::EXTENDED_LEGACY),
               Err(ValidationError::InvalidEnd { found: '!' }));
}

#[test]
fn complexity_counts() {
    assert_eq!(complexity("1 + 2 * 3", &Grammar::EXTENDED), 2);
    assert_eq!(complexity("8 // 2 ** 3", &Grammar::EXTENDED), 2);
    assert_eq!(complexity("8 // 2 ** 3", &Grammar::BASIC), 3);
    assert_eq!(complexity("-1 - -2", &Grammar::EXTENDED), 3);
    assert_eq!(complexity("5!", &Grammar::EXTENDED), 1);
    assert_eq!(complexity("-1 - -2", &Grammar::SCIENTIFIC), 2);
    assert_eq!(complexity("(1 + 2) * (3 - 4)", &Grammar::SCIENTIFIC), 1);
    assert_eq!(complexity("1 * 2 + 3 * 4 - 5", &Grammar::SCIENTIFIC), 3);
}

const FLAT: &[OperatorSpec] = &[OperatorSpec::left(Operator::Plus, 1),
                                OperatorSpec::left(Operator::Star, 1),
                                OperatorSpec::left(Operator::Caret, 1)];

fn flat_grammar() -> Grammar {
    Grammar::new("flat", FLAT, &[], ComplexityRule::Operators { max: 10 }, BoundaryRule::STRICT)
}

#[test]
fn custom_grammar_tables_drive_every_stage() {
    let grammar = flat_grammar();
    let evaluator = Evaluator::new(grammar);

    assert_eq!(grammar.name(), "flat");
    assert_eq!(grammar.operators(), FLAT);
    assert!(grammar.functions().is_empty());

    assert_eq!(evaluator.evaluate("2 + 3 * 4"), Ok(20.0));
    assert_eq!(evaluator.evaluate("2 ^ 3 ^ 2"), Ok(64.0));
    assert_eq!(evaluator.evaluate("2 - 1"),
               Err(Error::Lex(LexError::UnknownCharacter { character: '-',
                                                           position:  2, })));
    assert_eq!(evaluator.evaluate("2 + log(8) + 1"),
               Err(Error::Lex(LexError::UnknownFunction { name:     "log".to_string(),
                                                          position: 4, })));
}

#[test]
fn preset_tables_are_exposed() {
    let g = Grammar::EXTENDED;

    assert_eq!(g.operators().len(), Operator::ALL.len());
    assert!(Operator::ALL.iter().all(|&op| g.operator(op.symbol()).is_some()));
    assert_eq!(g.functions().iter().map(|spec| spec.function).collect::<Vec<_>>(),
               vec![Function::Log, Function::Exp]);
    assert_eq!(Grammar::BASIC.operator("**"), None);
    assert_eq!(Operator::from_symbol("**"), Some(Operator::DoubleStar));
}

#[test]
fn complexity_rule_can_be_swapped() {
    let g = Grammar::EXTENDED.with_complexity(ComplexityRule::AdditiveTerms { max: 2 });

    assert_eq!(g.complexity(), ComplexityRule::AdditiveTerms { max: 2 });
    assert_eq!(check("1 * 2 * 3 * 4 + 5", &g), Ok(()));
    assert_eq!(check("1 + 2 + 3", &g),
               Err(ValidationError::TooComplex { counted: "top-level terms",
                                                 count:   3,
                                                 max:     2, }));
}

#[test]
fn boundary_rule_can_be_swapped() {
    let g = Grammar::EXTENDED.with_boundary(BoundaryRule::STRICT);

    assert_eq!(g.boundary(), BoundaryRule::STRICT);
    assert_eq!(check("(1 + 2) * 3", &g), Err(ValidationError::InvalidStart { found: '(' }));
    assert_eq!(check("log(8)", &g), Err(ValidationError::InvalidStart { found: 'l' }));
    assert_eq!(check("5!", &g), Err(ValidationError::InvalidEnd { found: '!' }));
    assert_eq!(check("-1 + 5", &g), Ok(()));
}
