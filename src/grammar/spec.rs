use std::fmt;

/// Every operator symbol any grammar can recognize.
///
/// A grammar enables a subset of these through its [`OperatorSpec`] table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operator {
    /// `+`
    Plus,
    /// `-`
    Minus,
    /// `*`
    Star,
    /// `/`
    Slash,
    /// `//`, truncating integer division.
    DoubleSlash,
    /// `^`
    Caret,
    /// `**`, an alias of `^`.
    DoubleStar,
    /// `!`, postfix factorial.
    Bang,
}

impl Operator {
    /// All operators, multi-character symbols first.
    pub const ALL: [Self; 8] = [Self::DoubleSlash,
                                Self::DoubleStar,
                                Self::Plus,
                                Self::Minus,
                                Self::Star,
                                Self::Slash,
                                Self::Caret,
                                Self::Bang];

    /// Returns the textual symbol of the operator.
    #[must_use]
    pub const fn symbol(self) -> &'static str {
        match self {
            Self::Plus => "+",
            Self::Minus => "-",
            Self::Star => "*",
            Self::Slash => "/",
            Self::DoubleSlash => "//",
            Self::Caret => "^",
            Self::DoubleStar => "**",
            Self::Bang => "!",
        }
    }

    /// Looks an operator up by its symbol.
    ///
    /// # Example
    /// ```
    /// use infixa::grammar::Operator;
    ///
    /// assert_eq!(Operator::from_symbol("**"), Some(Operator::DoubleStar));
    /// assert_eq!(Operator::from_symbol("%"), None);
    /// ```
    #[must_use]
    pub fn from_symbol(symbol: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|op| op.symbol() == symbol)
    }
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

/// How repeated applications of equal-precedence operators group.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Associativity {
    /// `a - b - c` is `(a - b) - c`.
    Left,
    /// `a ^ b ^ c` is `a ^ (b ^ c)`.
    Right,
}

/// Number and placement of operands an operator consumes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Arity {
    /// Two operands, written on either side.
    Binary,
    /// One operand, written before the operator.
    UnaryPostfix,
}

/// Describes one operator of a grammar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct OperatorSpec {
    /// The operator this entry configures.
    pub operator:      Operator,
    /// Binding strength; higher binds tighter.
    pub precedence:    u8,
    /// Grouping of equal-precedence chains.
    pub associativity: Associativity,
    /// Operand layout.
    pub arity:         Arity,
}

impl OperatorSpec {
    /// A left-associative binary operator.
    #[must_use]
    pub const fn left(operator: Operator, precedence: u8) -> Self {
        Self { operator,
               precedence,
               associativity: Associativity::Left,
               arity: Arity::Binary }
    }

    /// A right-associative binary operator.
    #[must_use]
    pub const fn right(operator: Operator, precedence: u8) -> Self {
        Self { operator,
               precedence,
               associativity: Associativity::Right,
               arity: Arity::Binary }
    }

    /// A postfix unary operator.
    #[must_use]
    pub const fn postfix(operator: Operator, precedence: u8, associativity: Associativity) -> Self {
        Self { operator,
               precedence,
               associativity,
               arity: Arity::UnaryPostfix }
    }

    /// Returns `true` for postfix operators, which never wait on the
    /// operator stack.
    #[must_use]
    pub fn is_postfix(&self) -> bool {
        self.arity == Arity::UnaryPostfix
    }

    /// Decides whether `top`, currently on the operator stack, must be moved
    /// to the output before `self` is pushed.
    ///
    /// Left-associative operators pop on lower or equal precedence,
    /// right-associative ones only on strictly lower precedence.
    ///
    /// # Example
    /// ```
    /// use infixa::grammar::{Operator, OperatorSpec};
    ///
    /// let minus = OperatorSpec::left(Operator::Minus, 1);
    /// let pow = OperatorSpec::right(Operator::Caret, 3);
    ///
    /// assert!(minus.yields_to(&minus));
    /// assert!(!pow.yields_to(&pow));
    /// assert!(minus.yields_to(&pow));
    /// ```
    #[must_use]
    pub fn yields_to(&self, top: &Self) -> bool {
        match self.associativity {
            Associativity::Left => self.precedence <= top.precedence,
            Associativity::Right => self.precedence < top.precedence,
        }
    }
}

/// Every function any grammar can recognize.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Function {
    /// `log`, the base-2 logarithm.
    Log,
    /// `exp`, the natural exponential.
    Exp,
}

impl Function {
    /// Returns the name the function is written with.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Log => "log",
            Self::Exp => "exp",
        }
    }
}

impl fmt::Display for Function {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Describes one function of a grammar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct FunctionSpec {
    /// The function this entry configures.
    pub function: Function,
    /// Number of arguments; always 1 for the built-in functions.
    pub arity:    usize,
}

impl FunctionSpec {
    /// A single-argument function.
    #[must_use]
    pub const fn unary(function: Function) -> Self {
        Self { function, arity: 1 }
    }

    /// Returns the name the function is written with.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        self.function.name()
    }
}
