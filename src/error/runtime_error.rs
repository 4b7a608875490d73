use crate::ast::{BinaryOperator, Position};

/// Represents all errors that can occur during evaluation.
#[derive(Debug, thiserror::Error)]
pub enum RuntimeError {
    /// Attempted division by zero.
    #[error("Error on line {line}, column {column}: Division by zero.")]
    DivisionByZero {
        /// The source line where the error occurred.
        line:   usize,
        /// The source column where the error occurred.
        column: usize,
    },
    /// The operands of a binary operator have types it does not accept.
    #[error("Error on line {line}, column {column}: Type error: cannot apply '{op}' to {left} and {right}.")]
    TypeMismatch {
        /// The operator being applied.
        op:     BinaryOperator,
        /// Type name of the left operand.
        left:   &'static str,
        /// Type name of the right operand.
        right:  &'static str,
        /// The source line where the error occurred.
        line:   usize,
        /// The source column where the error occurred.
        column: usize,
    },
    /// Integer arithmetic overflowed.
    #[error("Error on line {line}, column {column}: Integer overflow while trying to compute result.")]
    Overflow {
        /// The source line where the error occurred.
        line:   usize,
        /// The source column where the error occurred.
        column: usize,
    },
    /// Writing printed output failed.
    #[error("Error on line {line}, column {column}: Failed to write output: {source}")]
    Output {
        /// The underlying I/O failure.
        source: std::io::Error,
        /// The source line where the error occurred.
        line:   usize,
        /// The source column where the error occurred.
        column: usize,
    },
}

impl RuntimeError {
    /// The position of the expression that failed.
    #[must_use]
    pub const fn position(&self) -> Position {
        match self {
            Self::DivisionByZero { line, column }
            | Self::TypeMismatch { line, column, .. }
            | Self::Overflow { line, column }
            | Self::Output { line, column, .. } => Position::new(*line, *column),
        }
    }
}
