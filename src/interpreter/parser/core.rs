use tracing::debug;

use crate::{
    ast::Node,
    error::{Error, LexError, ParseError},
    interpreter::{
        lexer::{Token, TokenKind, tokenize},
        parser::{statement::parse_statement, stream::TokenStream},
    },
};

pub type ParseResult<T> = Result<T, ParseError>;

/// The outcome of parsing a chunk of source.
///
/// Parsing never aborts: `program` is always a `Block` holding every
/// statement that was built successfully, and `errors` lists every lexical
/// and syntax error in the order they were found.
#[derive(Debug)]
pub struct Parsed {
    /// The program as a `Node::Block`.
    pub program: Node,
    /// Lexical and syntax errors.
    pub errors:  Vec<Error>,
}

impl Parsed {
    /// Returns `true` if no error was reported.
    #[must_use]
    pub fn is_ok(&self) -> bool {
        self.errors.is_empty()
    }

    /// The top-level statements in source order.
    #[must_use]
    pub fn statements(&self) -> &[Node] {
        self.program.statements().unwrap_or_default()
    }
}

/// Parses a complete program from a token stream.
///
/// Grammar: `program := (NEWLINE | ';')* (statement (NEWLINE | ';')*)* EOF`
///
/// When a statement fails to parse, the error is recorded, the rest of its
/// line and every following line indented deeper than the statement are
/// skipped, and parsing resumes with the next statement. Every error path
/// consumes at least one token, so parsing always reaches the end of input.
///
/// # Parameters
/// - `tokens`: Tokens or lexical errors, typically a
///   [`Tokenizer`](crate::interpreter::lexer::Tokenizer).
///
/// # Returns
/// The parsed program and all collected errors.
///
/// # Example
/// ```
/// use lofy::interpreter::{lexer::tokenize, parser::core::parse};
///
/// let parsed = parse(tokenize("x = 1\ny = (2\nprint(x)\n"));
///
/// assert_eq!(parsed.statements().len(), 2);
/// assert_eq!(parsed.errors.len(), 1);
/// ```
#[tracing::instrument(level = "debug", skip_all)]
pub fn parse<I>(tokens: I) -> Parsed
    where I: IntoIterator<Item = Result<Token, LexError>>
{
    let mut tokens = TokenStream::new(tokens.into_iter());
    let pos = tokens.peek().position();
    let mut statements = Vec::new();

    loop {
        skip_separators(&mut tokens);
        if tokens.check(TokenKind::Eof) {
            break;
        }

        let column = tokens.peek().column;
        match parse_statement(&mut tokens) {
            Ok(statement) => statements.push(statement),
            Err(e) => {
                tokens.report(e);
                synchronize(&mut tokens, column);
                tokens.take_synchronized();
            },
        }
    }

    let errors = tokens.into_errors();
    debug!(statements = statements.len(), errors = errors.len(), "parsed program");

    Parsed { program: Node::Block { statements, pos },
             errors }
}

/// Tokenizes and parses `source` in one step.
#[must_use]
pub fn parse_source(source: &str) -> Parsed {
    parse(tokenize(source))
}

/// Skips blank lines and stray `;` between statements.
pub(in crate::interpreter::parser) fn skip_separators<I>(tokens: &mut TokenStream<I>)
    where I: Iterator<Item = Result<Token, LexError>>
{
    while tokens.eat(TokenKind::NewLine) || tokens.eat(TokenKind::Semicolon) {}
}

/// Discards the rest of a failed statement.
///
/// Skips the remainder of the current line, then every line whose first
/// token lies to the right of `column`, so no part of a broken block is
/// parsed on its own. If an inner block already did this, the current line
/// is not skipped again. Always leaves the stream synchronized.
pub(in crate::interpreter::parser) fn synchronize<I>(tokens: &mut TokenStream<I>, column: usize)
    where I: Iterator<Item = Result<Token, LexError>>
{
    if !tokens.take_synchronized() {
        skip_line(tokens);
    }

    loop {
        skip_separators(tokens);
        let next = tokens.peek();
        if next.is_eof() || next.column <= column {
            break;
        }
        skip_line(tokens);
    }

    tokens.mark_synchronized();
}

/// Discards tokens up to and including the next line break.
fn skip_line<I>(tokens: &mut TokenStream<I>)
    where I: Iterator<Item = Result<Token, LexError>>
{
    loop {
        match tokens.advance().kind {
            TokenKind::NewLine | TokenKind::Eof => return,
            _ => {},
        }
    }
}
