/// The environment module holds program variables.
///
/// A single flat mapping from names to values that outlives individual parses,
/// so a REPL can keep building on earlier input.
pub mod environment;
/// The evaluator module executes AST nodes and computes results.
///
/// The evaluator traverses the AST, evaluates expressions and statements,
/// performs arithmetic and comparisons, manages variable state and writes
/// printed output. It is the core execution engine of the interpreter.
///
/// # Responsibilities
/// - Evaluates AST nodes, performing all supported operations.
/// - Handles variables and control flow (`if`, `while`).
/// - Reports runtime errors such as division by zero or type mismatches.
pub mod evaluator;
/// The lexer module tokenizes source code for further parsing.
///
/// The lexer (tokenizer) reads the raw source text and produces a lazy stream
/// of tokens, each corresponding to a meaningful language element such as a
/// number, identifier, operator, delimiter or keyword.
///
/// # Responsibilities
/// - Converts the input character stream into tokens with line and column.
/// - Handles numeric and string literals, identifiers and operators.
/// - Reports lexical errors for invalid or malformed input.
pub mod lexer;
/// The parser module builds the abstract syntax tree (AST) from tokens.
///
/// The parser processes the token stream produced by the lexer and constructs
/// an AST that represents the syntactic structure of the program.
///
/// # Responsibilities
/// - Converts tokens into AST nodes.
/// - Validates the grammar, reporting errors with location info.
/// - Recovers from errors so one bad line does not hide the rest.
pub mod parser;
/// Runs chunks of source against a persistent environment.
///
/// This is the boundary a read loop talks to: it feeds text in and receives
/// collected errors and displayed values back.
pub mod session;
/// The value module defines the runtime data types for evaluation.
pub mod value;
