/// Operator and function descriptions.
///
/// Declares the symbols the tokenizer recognizes together with the data the
/// converter and evaluator need about them: precedence, associativity and
/// arity.
pub mod spec;

/// Structural validation rules.
///
/// Describes how the validator counts the complexity of an expression and
/// which characters an expression may start and end with.
pub mod rules;

/// Grammar tables and presets.
///
/// A `Grammar` bundles operators, functions and validation rules into the one
/// value that every stage of the pipeline is parameterised by.
pub mod core;

pub use self::core::Grammar;
pub use rules::{BoundaryRule, ComplexityRule};
pub use spec::{Arity, Associativity, Function, FunctionSpec, Operator, OperatorSpec};
