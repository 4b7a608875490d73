/// A 1-based source position.
///
/// Tokens, AST nodes and errors all carry the position of the first character
/// they refer to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Position {
    /// Line number, starting at 1.
    pub line:   usize,
    /// Byte column within the line, starting at 1.
    pub column: usize,
}

impl Position {
    /// Creates a new position.
    #[must_use]
    pub const fn new(line: usize, column: usize) -> Self {
        Self { line, column }
    }
}

impl std::fmt::Display for Position {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "line {}, column {}", self.line, self.column)
    }
}

/// An abstract syntax tree (AST) node.
///
/// `Node` covers both expressions and statements. Each variant owns its
/// children, so dropping the root releases the whole tree. A `Block` is the
/// only variant with a variable number of children and keeps its statements in
/// source order.
#[derive(Debug, Clone, PartialEq)]
pub enum Node {
    /// Integer literal, e.g. `42`.
    IntLiteral {
        /// The literal value.
        value: i64,
        /// Position in the source code.
        pos:   Position,
    },
    /// Float literal, e.g. `2.5`.
    FloatLiteral {
        /// The literal value.
        value: f64,
        /// Position in the source code.
        pos:   Position,
    },
    /// String literal, e.g. `"hello"`.
    StringLiteral {
        /// The text between the quotes.
        value: String,
        /// Position in the source code.
        pos:   Position,
    },
    /// Reference to a variable by name.
    Identifier {
        /// Name of the variable.
        name: String,
        /// Position in the source code.
        pos:  Position,
    },
    /// A binary operation such as `a + b` or `a < b`.
    BinaryOp {
        /// The operator.
        op:    BinaryOperator,
        /// Left operand.
        left:  Box<Self>,
        /// Right operand.
        right: Box<Self>,
        /// Position of the operator.
        pos:   Position,
    },
    /// `name = value`
    Assignment {
        /// The variable being assigned.
        name:  String,
        /// The value expression.
        value: Box<Self>,
        /// Position of the target identifier.
        pos:   Position,
    },
    /// `if condition: then_branch else: else_branch`
    If {
        /// The condition.
        condition:   Box<Self>,
        /// Evaluated when the condition is truthy.
        then_branch: Box<Self>,
        /// Evaluated when the condition is falsy, if present.
        else_branch: Option<Box<Self>>,
        /// Position of the `if` keyword.
        pos:         Position,
    },
    /// `while condition: body`
    While {
        /// Re-evaluated before every iteration.
        condition: Box<Self>,
        /// The loop body.
        body:      Box<Self>,
        /// Position of the `while` keyword.
        pos:       Position,
    },
    /// `print(expr)`
    Print {
        /// The expression whose value is printed.
        expr: Box<Self>,
        /// Position of the `print` keyword.
        pos:  Position,
    },
    /// An ordered sequence of statements.
    Block {
        /// Statements in source order.
        statements: Vec<Self>,
        /// Position of the first statement.
        pos:        Position,
    },
}

impl Node {
    /// Gets the source position from `self`.
    /// ## Example
    /// ```
    /// use lofy::ast::{Node, Position};
    ///
    /// let node = Node::Identifier { name: "x".to_string(),
    ///                               pos:  Position::new(5, 3), };
    ///
    /// assert_eq!(node.position().line, 5);
    /// ```
    #[must_use]
    pub const fn position(&self) -> Position {
        match self {
            Self::IntLiteral { pos, .. }
            | Self::FloatLiteral { pos, .. }
            | Self::StringLiteral { pos, .. }
            | Self::Identifier { pos, .. }
            | Self::BinaryOp { pos, .. }
            | Self::Assignment { pos, .. }
            | Self::If { pos, .. }
            | Self::While { pos, .. }
            | Self::Print { pos, .. }
            | Self::Block { pos, .. } => *pos,
        }
    }

    /// Returns `true` if a REPL should display the value this statement
    /// produces. Assignments and prints already have visible effects.
    #[must_use]
    pub const fn displays_result(&self) -> bool {
        !matches!(self, Self::Assignment { .. } | Self::Print { .. })
    }

    /// Returns `true` for a statement that is a bare expression.
    #[must_use]
    pub const fn is_expression(&self) -> bool {
        matches!(self,
                 Self::IntLiteral { .. }
                 | Self::FloatLiteral { .. }
                 | Self::StringLiteral { .. }
                 | Self::Identifier { .. }
                 | Self::BinaryOp { .. })
    }

    /// Returns the statements of a block, or `None` for any other node.
    #[must_use]
    pub fn statements(&self) -> Option<&[Self]> {
        match self {
            Self::Block { statements, .. } => Some(statements),
            _ => None,
        }
    }
}

/// Represents a binary operator.
///
/// Binary operators include arithmetic and comparisons.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum BinaryOperator {
    /// Addition (`+`)
    Add,
    /// Subtraction (`-`)
    Sub,
    /// Multiplication (`*`)
    Mul,
    /// Division (`/`)
    Div,
    /// Equal to (`==`)
    Equal,
    /// Not equal to (`!=`)
    NotEqual,
    /// Less than (`<`)
    Less,
    /// Greater than (`>`)
    Greater,
    /// Less than or equal (`<=`)
    LessEqual,
    /// Greater than or equal (`>=`)
    GreaterEqual,
}

impl std::fmt::Display for BinaryOperator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        use BinaryOperator::{
            Add, Div, Equal, Greater, GreaterEqual, Less, LessEqual, Mul, NotEqual, Sub,
        };
        let operator = match self {
            Add => "+",
            Sub => "-",
            Mul => "*",
            Div => "/",
            Equal => "==",
            NotEqual => "!=",
            Less => "<",
            Greater => ">",
            LessEqual => "<=",
            GreaterEqual => ">=",
        };
        write!(f, "{operator}")
    }
}
