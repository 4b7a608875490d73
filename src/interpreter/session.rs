use std::io::{self, Write};

use tracing::debug;

use crate::{
    ast::Node,
    error::{Error, RuntimeError},
    interpreter::{
        environment::Environment,
        evaluator::core::{EvalResult, Evaluator},
        parser::core::{Parsed, parse_source},
        value::core::Value,
    },
};

/// Decides which statement values a session writes to its output besides
/// what the program prints itself.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Mode {
    /// Interactive use: a chunk consisting of a single statement that is not
    /// an assignment or a print has its value displayed, unless it is `None`.
    #[default]
    Repl,
    /// Only `print` produces output.
    Script,
    /// Like `Script`, but the value of the last bare expression statement is
    /// displayed once the chunk has run.
    Pipe,
}

/// The result of running one chunk of source.
#[derive(Debug, Default)]
pub struct Outcome {
    /// Every lexical, syntax and runtime error, in the order they occurred.
    pub errors: Vec<Error>,
    /// The value that was displayed, if any.
    pub value:  Option<Value>,
}

impl Outcome {
    /// Returns `true` if the chunk ran without errors.
    #[must_use]
    pub fn is_ok(&self) -> bool {
        self.errors.is_empty()
    }
}

/// A long-lived interpreter session.
///
/// The session owns the environment, so variables assigned by one call to
/// [`Session::run`] are visible to the next. Each chunk is parsed, every
/// statement that parsed is evaluated on its own, and a failing statement
/// never prevents the following ones from running.
///
/// # Example
/// ```
/// use lofy::interpreter::session::{Mode, Session};
///
/// let mut session = Session::new(Vec::new(), Mode::Repl);
///
/// assert!(session.run("x = 3\n").is_ok());
/// assert!(session.run("x + 4\n").is_ok());
/// assert!(!session.run("print(x / 0)\n").is_ok());
///
/// assert_eq!(String::from_utf8_lossy(session.output()), "7\n");
/// ```
pub struct Session<W: Write> {
    env:       Environment,
    evaluator: Evaluator<W>,
    mode:      Mode,
}

impl Session<io::Stdout> {
    /// Creates a session that writes to standard output.
    #[must_use]
    pub fn stdout(mode: Mode) -> Self {
        Self::new(io::stdout(), mode)
    }
}

impl<W: Write> Session<W> {
    /// Creates a session with an empty environment writing to `out`.
    pub fn new(out: W, mode: Mode) -> Self {
        Self { env: Environment::new(),
               evaluator: Evaluator::new(out),
               mode }
    }

    /// The variables of the session.
    pub const fn environment(&self) -> &Environment {
        &self.env
    }

    /// The output sink.
    pub const fn output(&self) -> &W {
        self.evaluator.output()
    }

    /// Consumes the session and returns the output sink.
    pub fn into_output(self) -> W {
        self.evaluator.into_output()
    }

    /// Parses and runs a chunk of source.
    ///
    /// Lexical and syntax errors are collected first; the statements that did
    /// parse still run. Runtime errors abort only the statement they occur in.
    #[tracing::instrument(level = "debug", skip_all, fields(mode = ?self.mode))]
    pub fn run(&mut self, source: &str) -> Outcome {
        let Parsed { program, errors } = parse_source(source);
        let statements = program.statements().unwrap_or_default();
        let mut outcome = Outcome { errors,
                                    value: None };
        let mut last_expression = None;

        for statement in statements {
            match self.run_statement(statement) {
                Ok(value) => {
                    if statement.is_expression() {
                        last_expression = Some((value.clone(), statement.position()));
                    }
                    if self.mode == Mode::Repl
                       && statements.len() == 1
                       && statement.displays_result()
                       && !value.is_none()
                    {
                        self.display(value, statement, &mut outcome);
                    }
                },
                Err(e) => {
                    debug!(%e, "runtime error");
                    outcome.errors.push(e.into());
                },
            }
        }

        if self.mode == Mode::Pipe
           && let Some((value, pos)) = last_expression
           && !value.is_none()
        {
            self.display_at(value, pos.line, pos.column, &mut outcome);
        }

        outcome
    }

    #[tracing::instrument(level = "debug", skip_all, fields(line = statement.position().line))]
    fn run_statement(&mut self, statement: &Node) -> EvalResult<Value> {
        self.evaluator.evaluate(statement, &mut self.env)
    }

    fn display(&mut self, value: Value, statement: &Node, outcome: &mut Outcome) {
        let pos = statement.position();
        self.display_at(value, pos.line, pos.column, outcome);
    }

    fn display_at(&mut self, value: Value, line: usize, column: usize, outcome: &mut Outcome) {
        match writeln!(self.evaluator.output_mut(), "{value}") {
            Ok(()) => outcome.value = Some(value),
            Err(source) => outcome.errors.push(RuntimeError::Output { source, line, column }.into()),
        }
    }
}
