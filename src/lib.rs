//! # lofy
//!
//! lofy is the front end and execution core of the LoFy scripting language:
//! a tokenizer, a recursive-descent parser producing an abstract syntax tree,
//! and a tree-walking evaluator over a single mutable variable environment.

#![warn(
    clippy::redundant_clone,
    clippy::needless_pass_by_value,
    clippy::similar_names,
    clippy::large_enum_variant,
    clippy::string_lit_as_bytes,
    clippy::match_same_arms,
    clippy::cargo,
    clippy::nursery,
    clippy::perf,
    clippy::style,
    clippy::suspicious,
    clippy::correctness,
    clippy::complexity,
    clippy::pedantic,
    //missing_docs,
)]
#![allow(clippy::missing_errors_doc)]

use crate::interpreter::session::{Mode, Session};

/// Defines the structure of parsed code.
///
/// This module declares the `Node` enum and related types that represent the
/// syntactic structure of source code as a tree. The AST is built by the parser
/// and traversed by the evaluator.
///
/// # Responsibilities
/// - Defines node types for all language constructs.
/// - Attaches source positions to AST nodes for error reporting.
pub mod ast;
/// Provides unified error types for lexing, parsing, and evaluation.
///
/// This module defines all errors that can be raised while tokenizing,
/// parsing, or evaluating code. Every error carries the line and column it
/// refers to.
///
/// # Responsibilities
/// - Defines error types for all failure modes (lexer, parser, evaluator).
/// - Attaches line and column numbers and detailed messages for context.
/// - Supports integration with standard error handling traits.
pub mod error;
/// Orchestrates the entire process of code execution.
///
/// This module ties together lexing, parsing, evaluation, the variable
/// environment and value representations to provide a complete runtime for
/// source code evaluation.
///
/// # Responsibilities
/// - Coordinates all core components: lexer, parser, evaluator, and values.
/// - Provides entry points for parsing and evaluating user code.
/// - Manages the flow of data and errors between phases.
pub mod interpreter;

/// Runs a whole script, printing to standard output.
///
/// Every statement that parses is executed, even after an error. If anything
/// went wrong, the first error is returned.
///
/// When `pipe_mode` is set, the value of the last bare expression statement is
/// printed once the script finishes.
///
/// # Errors
/// Returns the first lexical, syntax or runtime error the script produced.
///
/// # Examples
/// ```
/// use lofy::run_script;
///
/// let source = "result = 2 + 2\n";
/// assert!(run_script(source, false).is_ok());
///
/// // Division by zero is reported as an error.
/// let source = "result = 1 / 0\n";
/// assert!(run_script(source, false).is_err());
/// ```
pub fn run_script(source: &str, pipe_mode: bool) -> Result<(), error::Error> {
    let mode = if pipe_mode { Mode::Pipe } else { Mode::Script };
    let mut session = Session::stdout(mode);

    match session.run(source).errors.into_iter().next() {
        Some(e) => Err(e),
        None => Ok(()),
    }
}
