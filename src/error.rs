/// Lexical errors.
///
/// Raised by the tokenizer for input that does not form a valid token, such
/// as an unterminated string literal or an unknown character.
pub mod lex_error;
/// Parsing errors.
///
/// Defines the syntax errors detected while building the AST from the token
/// stream: unexpected tokens, invalid assignment targets and literals that do
/// not fit the runtime integer type.
pub mod parse_error;
/// Runtime errors.
///
/// Contains the errors raised during evaluation: division by zero, operands of
/// incompatible types, arithmetic overflow and failures writing output.
pub mod runtime_error;

pub use lex_error::{LexError, LexErrorKind};
pub use parse_error::ParseError;
pub use runtime_error::RuntimeError;

use crate::ast::Position;

/// Any error reported while running source code.
///
/// A session collects these per chunk of input; none of them stops the
/// session itself.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The tokenizer rejected part of the input.
    #[error(transparent)]
    Lex(#[from] LexError),
    /// The parser could not build a statement.
    #[error(transparent)]
    Parse(#[from] ParseError),
    /// A statement failed while being evaluated.
    #[error(transparent)]
    Runtime(#[from] RuntimeError),
}

impl Error {
    /// The source position the error refers to.
    #[must_use]
    pub const fn position(&self) -> Position {
        match self {
            Self::Lex(e) => e.position(),
            Self::Parse(e) => e.position(),
            Self::Runtime(e) => e.position(),
        }
    }
}
