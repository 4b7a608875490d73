use crate::{
    ast::Node,
    error::{LexError, ParseError},
    interpreter::{
        lexer::{Token, TokenKind},
        parser::{binary::parse_expression, core::ParseResult, stream::TokenStream},
    },
};

/// Parses a factor, the atoms of the expression grammar.
///
/// Grammar:
/// ```text
///     factor := INT | FLOAT | STRING | IDENTIFIER | "(" expression ")"
/// ```
///
/// # Errors
/// - `UnexpectedToken` if the current token cannot start an expression or a
///   closing parenthesis is missing.
/// - `LiteralTooLarge` if an integer literal does not fit in 64 bits.
pub fn parse_factor<I>(tokens: &mut TokenStream<I>) -> ParseResult<Node>
    where I: Iterator<Item = Result<Token, LexError>>
{
    match tokens.peek_kind() {
        TokenKind::Integer => parse_integer(&tokens.advance()),
        TokenKind::Float => parse_float(&tokens.advance()),
        TokenKind::String => {
            let token = tokens.advance();
            let pos = token.position();
            Ok(Node::StringLiteral { value: token.lexeme.unwrap_or_default(),
                                     pos })
        },
        TokenKind::Identifier => {
            let token = tokens.advance();
            let pos = token.position();
            Ok(Node::Identifier { name: token.lexeme.unwrap_or_default(),
                                  pos })
        },
        TokenKind::LParen => {
            tokens.advance();
            let expr = parse_expression(tokens)?;
            tokens.expect(TokenKind::RParen, "')' to close '('")?;
            Ok(expr)
        },
        _ => Err(tokens.unexpected("an expression")),
    }
}

fn parse_integer(token: &Token) -> ParseResult<Node> {
    let text = token.lexeme.as_deref().unwrap_or_default();
    let value = text.parse::<i64>().map_err(|_| ParseError::LiteralTooLarge { lexeme: text.to_string(),
                                                                      line:   token.line,
                                                                      column: token.column, })?;
    Ok(Node::IntLiteral { value,
                          pos: token.position() })
}

fn parse_float(token: &Token) -> ParseResult<Node> {
    let text = token.lexeme.as_deref().unwrap_or_default();
    let value = text.parse::<f64>().map_err(|_| ParseError::UnexpectedToken { expected: "a float literal".to_string(),
                                                                      found:    token.describe(),
                                                                      line:     token.line,
                                                                      column:   token.column, })?;
    Ok(Node::FloatLiteral { value,
                            pos: token.position() })
}
