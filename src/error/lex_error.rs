use crate::ast::Position;

/// What went wrong while tokenizing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LexErrorKind {
    /// A `"` was never closed before the end of input.
    UnterminatedString,
    /// A `!` that is not followed by `=`.
    BareBang,
    /// A character that does not start any token.
    UnexpectedCharacter(char),
}

impl std::fmt::Display for LexErrorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UnterminatedString => write!(f, "Unterminated string literal."),
            Self::BareBang => write!(f, "Expected '=' after '!'."),
            Self::UnexpectedCharacter(c) => write!(f, "Unexpected character '{}'.", c.escape_debug()),
        }
    }
}

/// A lexical error together with the position of the offending input.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Error on line {line}, column {column}: {kind}")]
pub struct LexError {
    /// What went wrong.
    pub kind:   LexErrorKind,
    /// The source line where the error occurred.
    pub line:   usize,
    /// The source column where the error occurred.
    pub column: usize,
}

impl LexError {
    /// The position of the offending input.
    #[must_use]
    pub const fn position(&self) -> Position {
        Position::new(self.line, self.column)
    }
}
