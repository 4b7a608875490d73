use crate::{
    ast::Node,
    error::{LexError, ParseError},
    interpreter::{
        lexer::{Token, TokenKind},
        parser::{
            binary::parse_expression,
            core::{ParseResult, skip_separators, synchronize},
            stream::TokenStream,
        },
    },
};

/// Parses a single statement.
///
/// A statement may be one of:
/// - a `print(...)` statement.
/// - an `if` statement.
/// - a `while` loop.
/// - an assignment.
/// - an expression used as a statement.
///
/// # Parameters
/// - `tokens`: Token stream positioned at the first token of the statement.
///
/// # Returns
/// The parsed statement node.
pub fn parse_statement<I>(tokens: &mut TokenStream<I>) -> ParseResult<Node>
    where I: Iterator<Item = Result<Token, LexError>>
{
    match tokens.peek_kind() {
        TokenKind::Print => parse_print(tokens),
        TokenKind::If => parse_if(tokens),
        TokenKind::While => parse_while(tokens),
        _ => parse_expression_statement(tokens),
    }
}

/// Parses `print(expression)`.
///
/// Grammar: `print := "print" "(" expression ")" end`
fn parse_print<I>(tokens: &mut TokenStream<I>) -> ParseResult<Node>
    where I: Iterator<Item = Result<Token, LexError>>
{
    let pos = tokens.advance().position();
    tokens.expect(TokenKind::LParen, "'(' after 'print'")?;
    let expr = parse_expression(tokens)?;
    tokens.expect(TokenKind::RParen, "')' to close 'print('")?;
    expect_statement_end(tokens)?;

    Ok(Node::Print { expr: Box::new(expr),
                     pos })
}

/// Parses an `if` statement with an optional `else` branch.
///
/// Syntax:
/// ```text
///     if <condition>: <statement> else <statement>
///
///     if <condition>:
///         <statements>
///     else:
///         <statements>
/// ```
/// The colon after `else` is optional. An `else` on a later line must line
/// up with its `if`.
fn parse_if<I>(tokens: &mut TokenStream<I>) -> ParseResult<Node>
    where I: Iterator<Item = Result<Token, LexError>>
{
    let header = tokens.advance();
    let condition = parse_expression(tokens)?;
    tokens.expect(TokenKind::Colon, "':' after 'if' condition")?;
    let then_branch = parse_suite(tokens, header.column)?;

    let else_branch = if tokens.check(TokenKind::Else) && pairs_with(tokens.peek(), &header) {
        tokens.advance();
        tokens.eat(TokenKind::Colon);
        Some(Box::new(parse_suite(tokens, header.column)?))
    } else {
        None
    };

    Ok(Node::If { condition: Box::new(condition),
                  then_branch: Box::new(then_branch),
                  else_branch,
                  pos: header.position() })
}

/// An `else` belongs to an `if` when it is on the header's line or starts a
/// later line in the header's column. Any other `else` is left for an
/// enclosing `if`.
const fn pairs_with(else_token: &Token, header: &Token) -> bool {
    else_token.line == header.line || else_token.column == header.column
}

/// Parses a `while` loop.
///
/// Grammar: `while := "while" expression ":" suite`
fn parse_while<I>(tokens: &mut TokenStream<I>) -> ParseResult<Node>
    where I: Iterator<Item = Result<Token, LexError>>
{
    let header = tokens.advance();
    let condition = parse_expression(tokens)?;
    tokens.expect(TokenKind::Colon, "':' after 'while' condition")?;
    let body = parse_suite(tokens, header.column)?;

    Ok(Node::While { condition: Box::new(condition),
                     body:      Box::new(body),
                     pos:       header.position(), })
}

/// Parses the body of an `if`, `else` or `while`.
///
/// Either a single statement on the same line as the colon, or a line break
/// followed by an indented block. The block ends at the first statement whose
/// first token is not to the right of `header_column`.
///
/// # Errors
/// Returns `UnexpectedToken` if a line break is not followed by an indented
/// statement. When a statement inside the block fails, the rest of the block
/// is skipped before the error is returned, so none of it runs.
fn parse_suite<I>(tokens: &mut TokenStream<I>, header_column: usize) -> ParseResult<Node>
    where I: Iterator<Item = Result<Token, LexError>>
{
    if !tokens.check(TokenKind::NewLine) {
        return parse_statement(tokens);
    }

    skip_separators(tokens);
    if tokens.peek().is_eof() || tokens.peek().column <= header_column {
        return Err(tokens.unexpected("an indented block"));
    }

    let pos = tokens.peek().position();
    let mut statements = Vec::new();
    loop {
        match parse_statement(tokens) {
            Ok(statement) => statements.push(statement),
            Err(e) => {
                synchronize(tokens, header_column);
                return Err(e);
            },
        }
        skip_separators(tokens);

        let next = tokens.peek();
        if next.is_eof() || next.column <= header_column {
            break;
        }
    }

    Ok(Node::Block { statements, pos })
}

/// Parses an assignment or a bare expression statement.
///
/// The full expression is parsed first. If it is followed by `=` and is a
/// bare identifier, it becomes the assignment target; any other expression in
/// front of `=` is rejected.
///
/// Grammar: `expression_statement := expression ("=" expression)? end`
fn parse_expression_statement<I>(tokens: &mut TokenStream<I>) -> ParseResult<Node>
    where I: Iterator<Item = Result<Token, LexError>>
{
    let expr = parse_expression(tokens)?;

    if !tokens.check(TokenKind::Assign) {
        expect_statement_end(tokens)?;
        return Ok(expr);
    }

    let Node::Identifier { name, pos } = expr else {
        let pos = expr.position();
        return Err(ParseError::InvalidAssignmentTarget { line:   pos.line,
                                                         column: pos.column, });
    };

    tokens.advance();
    let value = parse_expression(tokens)?;
    expect_statement_end(tokens)?;

    Ok(Node::Assignment { name,
                          value: Box::new(value),
                          pos })
}

/// Consumes the end of a statement.
///
/// A line break or `;` is consumed. End of input and `else` also end a
/// statement but are left for the caller.
fn expect_statement_end<I>(tokens: &mut TokenStream<I>) -> ParseResult<()>
    where I: Iterator<Item = Result<Token, LexError>>
{
    match tokens.peek_kind() {
        TokenKind::NewLine | TokenKind::Semicolon => {
            tokens.advance();
            Ok(())
        },
        TokenKind::Eof | TokenKind::Else => Ok(()),
        _ => Err(tokens.unexpected("end of statement")),
    }
}
