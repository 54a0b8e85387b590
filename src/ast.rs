use crate::{error::ParseError, interpreter::lexer::Position};

/// Represents a literal value in the language.
///
/// `LiteralValue` covers the raw, constant values that can appear directly in
/// source code. It is used in the AST to represent literal expressions.
#[derive(Debug, Clone, PartialEq)]
pub enum LiteralValue {
    /// An integer literal, kept as its source digits.
    ///
    /// Conversion to `i64` happens during evaluation so that a literal too
    /// large for the integer type is an `Overflow` error at that point.
    Integer(String),
    /// A 64-bit floating-point literal.
    Float(f64),
    /// A boolean literal value: `sah` or `ghalet`.
    Bool(bool),
    /// A string literal, with escapes already resolved.
    Str(String),
    /// The unit literal `walou`.
    Unit,
}

impl From<i64> for LiteralValue {
    fn from(value: i64) -> Self {
        Self::Integer(value.to_string())
    }
}

impl From<f64> for LiteralValue {
    fn from(value: f64) -> Self {
        Self::Float(value)
    }
}

impl From<bool> for LiteralValue {
    fn from(value: bool) -> Self {
        Self::Bool(value)
    }
}

impl From<&str> for LiteralValue {
    fn from(value: &str) -> Self {
        Self::Str(value.to_string())
    }
}

/// An abstract syntax tree (AST) node representing an expression.
///
/// Each variant models a distinct syntactic construct and owns its operands.
#[derive(Debug, Clone, PartialEq)]
pub enum Expr {
    /// A literal value (number, string, boolean or unit).
    Literal {
        /// The constant value.
        value:    LiteralValue,
        /// Position in the source code.
        position: Position,
    },
    /// Reference to a variable by name.
    Variable {
        /// Name of the variable.
        name:     String,
        /// Position in the source code.
        position: Position,
    },
    /// A unary operation (negation or logical not).
    UnaryOp {
        /// The unary operator to apply.
        op:       UnaryOperator,
        /// The operand expression.
        expr:     Box<Self>,
        /// Position of the operator.
        position: Position,
    },
    /// A binary operation.
    BinaryOp {
        /// Left operand.
        left:     Box<Self>,
        /// The operator.
        op:       BinaryOperator,
        /// Right operand.
        right:    Box<Self>,
        /// Position of the operator.
        position: Position,
    },
    /// Builtin function call (e.g. `max(a, b)`).
    Call {
        /// Name of the function being called.
        name:      String,
        /// Arguments to the function.
        arguments: Vec<Self>,
        /// Position of the function name.
        position:  Position,
    },
}

impl Expr {
    /// The number of nodes on the longest path from `self` down to a leaf.
    ///
    /// Literals and variables have height 1.
    #[must_use]
    pub fn height(&self) -> usize {
        match self {
            Self::Literal { .. } | Self::Variable { .. } => 1,
            Self::UnaryOp { expr, .. } => 1 + expr.height(),
            Self::BinaryOp { left, right, .. } => 1 + left.height().max(right.height()),
            Self::Call { arguments, .. } => {
                1 + arguments.iter().map(Self::height).max().unwrap_or(0)
            },
        }
    }

    /// Gets the source position from `self`.
    /// ## Example
    /// ```
    /// use darja::{ast::Expr, interpreter::lexer::Position};
    ///
    /// let expr = Expr::Variable { name:     "x".to_string(),
    ///                             position: Position::new(5, 2), };
    ///
    /// assert_eq!(expr.position().line, 5);
    /// ```
    #[must_use]
    pub const fn position(&self) -> Position {
        match self {
            Self::Literal { position, .. }
            | Self::Variable { position, .. }
            | Self::UnaryOp { position, .. }
            | Self::BinaryOp { position, .. }
            | Self::Call { position, .. } => *position,
        }
    }
}

/// One branch of a conditional: `ila <condition> { <body> }`.
#[derive(Debug, Clone, PartialEq)]
pub struct ConditionalBranch {
    /// The condition; must evaluate to a boolean.
    pub condition: Expr,
    /// The statements run when the condition holds.
    pub body:      Vec<Statement>,
}

/// Represents a statement.
///
/// Statements are the units parsed from input lines. Conditionals and loops
/// own a body that may span several lines.
#[derive(Debug, Clone, PartialEq)]
pub enum Statement {
    /// A variable assignment binding a name to an expression.
    Assignment {
        /// The name of the variable.
        name:     String,
        /// The value which is being assigned.
        value:    Expr,
        /// Position of the variable name.
        position: Position,
    },
    /// A standalone expression evaluated for its result.
    Expression {
        /// The expression to evaluate.
        expr:     Expr,
        /// Position of the expression.
        position: Position,
    },
    /// `kteb a, b, ...`: prints the values separated by spaces.
    Print {
        /// The values to print.
        values:   Vec<Expr>,
        /// Position of the `kteb` keyword.
        position: Position,
    },
    /// `ila ... { } wila ila ... { } wila { }`.
    Conditional {
        /// The `ila` branch followed by every `wila ila` branch, in order.
        branches:  Vec<ConditionalBranch>,
        /// The trailing `wila { }` body, if any.
        otherwise: Option<Vec<Statement>>,
        /// Position of the first `ila` keyword.
        position:  Position,
    },
    /// `mazal <condition> { <body> }`.
    Loop {
        /// The condition checked before every iteration.
        condition: Expr,
        /// The loop body.
        body:      Vec<Statement>,
        /// Position of the `mazal` keyword.
        position:  Position,
    },
    /// The `khlas` sentinel that ends the session.
    Termination {
        /// Position of the keyword.
        position: Position,
    },
    /// Placeholder for a line that failed to parse.
    Invalid {
        /// Why the line was rejected.
        error: ParseError,
    },
}

impl Statement {
    /// Gets the source position from `self`.
    #[must_use]
    pub const fn position(&self) -> Position {
        match self {
            Self::Assignment { position, .. }
            | Self::Expression { position, .. }
            | Self::Print { position, .. }
            | Self::Conditional { position, .. }
            | Self::Loop { position, .. }
            | Self::Termination { position } => *position,
            Self::Invalid { error } => error.position(),
        }
    }
}

/// Represents a binary operator.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum BinaryOperator {
    /// Addition (`+`)
    Add,
    /// Subtraction (`-`)
    Sub,
    /// Multiplication (`*`)
    Mul,
    /// Division (`/`)
    Div,
    /// Modulo (`%`)
    Mod,
    /// Less than (`<`)
    Less,
    /// Greater than (`>`)
    Greater,
    /// Less than or equal (`<=`)
    LessEqual,
    /// Greater than or equal (`>=`)
    GreaterEqual,
    /// Equal to (`==`)
    Equal,
    /// Not equal to (`!=`)
    NotEqual,
    /// Logical and (`&&`)
    And,
    /// Logical or (`||`)
    Or,
}

/// Represents a unary operator.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum UnaryOperator {
    /// Arithmetic negation (e.g. `-x`).
    Negate,
    /// Logical NOT (e.g. `!x`).
    Not,
}

impl std::fmt::Display for BinaryOperator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        use BinaryOperator::{
            Add, And, Div, Equal, Greater, GreaterEqual, Less, LessEqual, Mod, Mul, NotEqual, Or,
            Sub,
        };
        let operator = match self {
            Add => "+",
            Sub => "-",
            Mul => "*",
            Div => "/",
            Mod => "%",
            Less => "<",
            Greater => ">",
            LessEqual => "<=",
            GreaterEqual => ">=",
            Equal => "==",
            NotEqual => "!=",
            And => "&&",
            Or => "||",
        };
        write!(f, "{operator}")
    }
}

impl std::fmt::Display for UnaryOperator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Negate => write!(f, "-"),
            Self::Not => write!(f, "!"),
        }
    }
}
