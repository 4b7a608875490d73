use crate::ast::Position;

/// Represents all errors that can occur while parsing.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ParseError {
    /// Found a token other than the one the grammar requires.
    #[error("Error on line {line}, column {column}: Expected {expected}, found {found}.")]
    UnexpectedToken {
        /// What the parser was looking for.
        expected: String,
        /// Description of the token encountered.
        found:    String,
        /// The source line where the error occurred.
        line:     usize,
        /// The source column where the error occurred.
        column:   usize,
    },
    /// The left side of `=` was not a bare identifier.
    #[error("Error on line {line}, column {column}: Cannot assign to this expression, only to a variable name.")]
    InvalidAssignmentTarget {
        /// The source line where the error occurred.
        line:   usize,
        /// The source column where the error occurred.
        column: usize,
    },
    /// An integer literal was too large to be represented.
    #[error("Error on line {line}, column {column}: Integer literal {lexeme} is too large.")]
    LiteralTooLarge {
        /// The literal as written.
        lexeme: String,
        /// The source line where the error occurred.
        line:   usize,
        /// The source column where the error occurred.
        column: usize,
    },
}

impl ParseError {
    /// The position of the offending token.
    #[must_use]
    pub const fn position(&self) -> Position {
        match self {
            Self::UnexpectedToken { line, column, .. }
            | Self::InvalidAssignmentTarget { line, column }
            | Self::LiteralTooLarge { line, column, .. } => Position::new(*line, *column),
        }
    }
}
