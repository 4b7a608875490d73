use std::mem;

use tracing::debug;

use crate::{
    ast::Position,
    error::{Error, LexError, ParseError},
    interpreter::{
        lexer::{Token, TokenKind},
        parser::core::ParseResult,
    },
};

/// A stream of tokens with a single current token.
///
/// The parser only ever looks at the current token. Lexical errors produced
/// by the underlying tokenizer are recorded and skipped, so the grammar
/// functions only see well-formed tokens. Once the underlying iterator is
/// exhausted the stream keeps returning an end-of-input token.
pub struct TokenStream<I>
    where I: Iterator<Item = Result<Token, LexError>>
{
    tokens:       I,
    current:      Token,
    errors:       Vec<Error>,
    synchronized: bool,
}

impl<I> TokenStream<I> where I: Iterator<Item = Result<Token, LexError>>
{
    /// Wraps `tokens` and loads the first token.
    pub fn new(tokens: I) -> Self {
        let mut stream = Self { tokens,
                                current: Token::new(TokenKind::Eof, Position::new(1, 1)),
                                errors: Vec::new(),
                                synchronized: false };
        stream.current = stream.pull();
        stream
    }

    fn pull(&mut self) -> Token {
        loop {
            match self.tokens.next() {
                Some(Ok(token)) => return token,
                Some(Err(e)) => {
                    debug!(%e, "lexical error");
                    self.errors.push(e.into());
                },
                None => return Token::new(TokenKind::Eof, self.current.position()),
            }
        }
    }

    /// The current token.
    pub const fn peek(&self) -> &Token {
        &self.current
    }

    /// The kind of the current token.
    pub const fn peek_kind(&self) -> TokenKind {
        self.current.kind
    }

    /// Returns `true` if the current token is of the given kind.
    pub fn check(&self, kind: TokenKind) -> bool {
        self.current.kind == kind
    }

    /// Consumes the current token and returns it. At the end of input the
    /// end-of-input token is returned without consuming anything.
    pub fn advance(&mut self) -> Token {
        if self.current.is_eof() {
            return self.current.clone();
        }
        let next = self.pull();
        mem::replace(&mut self.current, next)
    }

    /// Consumes the current token if it is of the given kind.
    pub fn eat(&mut self, kind: TokenKind) -> bool {
        if self.check(kind) {
            self.advance();
            return true;
        }
        false
    }

    /// Consumes a token of the given kind or reports what was expected.
    ///
    /// # Errors
    /// Returns `UnexpectedToken` without consuming anything if the current
    /// token is of another kind.
    pub fn expect(&mut self, kind: TokenKind, expected: &str) -> ParseResult<Token> {
        if self.check(kind) {
            return Ok(self.advance());
        }
        Err(self.unexpected(expected))
    }

    /// Builds an `UnexpectedToken` error for the current token.
    pub fn unexpected(&self, expected: impl Into<String>) -> ParseError {
        ParseError::UnexpectedToken { expected: expected.into(),
                                      found:    self.current.describe(),
                                      line:     self.current.line,
                                      column:   self.current.column, }
    }

    /// Records an error and keeps going.
    pub fn report(&mut self, error: impl Into<Error>) {
        let error = error.into();
        debug!(%error, "syntax error");
        self.errors.push(error);
    }

    /// Notes that the stream was moved to the start of a line belonging to
    /// an enclosing statement after an error.
    pub fn mark_synchronized(&mut self) {
        self.synchronized = true;
    }

    /// Returns whether the stream was already synchronized and clears the
    /// flag.
    pub fn take_synchronized(&mut self) -> bool {
        mem::replace(&mut self.synchronized, false)
    }

    /// Returns every error collected so far.
    pub fn into_errors(self) -> Vec<Error> {
        self.errors
    }
}
