use crate::{
    ast::{BinaryOperator, Node},
    error::LexError,
    interpreter::{
        lexer::{Token, TokenKind},
        parser::{core::ParseResult, factor::parse_factor, stream::TokenStream},
    },
};

/// Parses a full expression.
///
/// Addition, subtraction and all comparisons share the lowest precedence
/// level and associate to the left, so `1 < 2 + 3` parses as `(1 < 2) + 3`.
///
/// The rule is:
/// `expression := term (("+" | "-" | "==" | "!=" | "<" | ">" | "<=" | ">=") term)*`
pub fn parse_expression<I>(tokens: &mut TokenStream<I>) -> ParseResult<Node>
    where I: Iterator<Item = Result<Token, LexError>>
{
    let mut left = parse_term(tokens)?;
    while let Some(op) = token_to_binary_operator(tokens.peek_kind())
          && !matches!(op, BinaryOperator::Mul | BinaryOperator::Div)
    {
        let pos = tokens.advance().position();
        let right = parse_term(tokens)?;
        left = Node::BinaryOp { op,
                                left: Box::new(left),
                                right: Box::new(right),
                                pos };
    }
    Ok(left)
}

/// Parses multiplication-level expressions.
///
/// The rule is: `term := factor (("*" | "/") factor)*`
pub fn parse_term<I>(tokens: &mut TokenStream<I>) -> ParseResult<Node>
    where I: Iterator<Item = Result<Token, LexError>>
{
    let mut left = parse_factor(tokens)?;
    while let Some(op) = token_to_binary_operator(tokens.peek_kind())
          && matches!(op, BinaryOperator::Mul | BinaryOperator::Div)
    {
        let pos = tokens.advance().position();
        let right = parse_factor(tokens)?;
        left = Node::BinaryOp { op,
                                left: Box::new(left),
                                right: Box::new(right),
                                pos };
    }
    Ok(left)
}

/// Maps a token kind to the binary operator it spells, if any.
pub const fn token_to_binary_operator(kind: TokenKind) -> Option<BinaryOperator> {
    match kind {
        TokenKind::Plus => Some(BinaryOperator::Add),
        TokenKind::Minus => Some(BinaryOperator::Sub),
        TokenKind::Star => Some(BinaryOperator::Mul),
        TokenKind::Slash => Some(BinaryOperator::Div),
        TokenKind::EqualEqual => Some(BinaryOperator::Equal),
        TokenKind::BangEqual => Some(BinaryOperator::NotEqual),
        TokenKind::Less => Some(BinaryOperator::Less),
        TokenKind::Greater => Some(BinaryOperator::Greater),
        TokenKind::LessEqual => Some(BinaryOperator::LessEqual),
        TokenKind::GreaterEqual => Some(BinaryOperator::GreaterEqual),
        _ => None,
    }
}
