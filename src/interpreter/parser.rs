/// Parser entry points.
///
/// Defines the parse result types and drives statement parsing over a whole
/// token stream, recovering from syntax errors line by line.
pub mod core;

/// Token stream with one token of lookahead.
///
/// Wraps the tokenizer, diverts lexical errors into the error list and
/// provides the `expect`/`advance` primitives the grammar functions use.
pub mod stream;

/// Statement parsing.
///
/// Implements `print`, `if`, `while`, assignments, expression statements and
/// indented blocks.
pub mod statement;

/// Binary operator parsing.
///
/// Implements the two precedence levels of the expression grammar.
pub mod binary;

/// Factor parsing.
///
/// Literals, identifiers and parenthesized expressions.
pub mod factor;
