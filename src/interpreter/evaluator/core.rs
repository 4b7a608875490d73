use std::io::{self, Write};

use crate::{
    ast::Node,
    error::RuntimeError,
    interpreter::{
        environment::Environment, evaluator::binary::eval_binary, value::core::Value,
    },
};

/// Result type used by the evaluator.
///
/// All evaluation functions return either a value of type `T` or a
/// `RuntimeError` describing the failure.
pub type EvalResult<T> = Result<T, RuntimeError>;

/// Walks the AST and executes it.
///
/// The evaluator itself holds no program state, only the sink `print` writes
/// to. Variables live in the [`Environment`] passed to every call.
///
/// # Example
/// ```
/// use lofy::interpreter::{
///     environment::Environment, evaluator::core::Evaluator, parser::core::parse_source,
/// };
///
/// let parsed = parse_source("x = 40 + 2\nprint(x)\n");
/// let mut env = Environment::new();
/// let mut evaluator = Evaluator::new(Vec::new());
///
/// evaluator.evaluate(&parsed.program, &mut env).unwrap();
///
/// assert_eq!(evaluator.output(), b"42\n");
/// ```
pub struct Evaluator<W: Write> {
    out: W,
}

/// Evaluates `node`, printing to standard output.
///
/// # Errors
/// Returns a [`RuntimeError`] on division by zero, incompatible operand types
/// or integer overflow.
pub fn evaluate(node: &Node, env: &mut Environment) -> EvalResult<Value> {
    Evaluator::new(io::stdout()).evaluate(node, env)
}

impl<W: Write> Evaluator<W> {
    /// Creates an evaluator that prints to `out`.
    pub const fn new(out: W) -> Self {
        Self { out }
    }

    /// The output sink.
    pub const fn output(&self) -> &W {
        &self.out
    }

    /// Mutable access to the output sink.
    pub fn output_mut(&mut self) -> &mut W {
        &mut self.out
    }

    /// Consumes the evaluator and returns the output sink.
    pub fn into_output(self) -> W {
        self.out
    }

    /// Evaluates a node and returns the resulting value.
    ///
    /// This is the main entry point for evaluation. Statements yield
    /// [`Value::None`]; an assignment yields the value it stored.
    ///
    /// # Parameters
    /// - `node`: Node to evaluate.
    /// - `env`: Variables read and written by the program.
    ///
    /// # Errors
    /// The first runtime error aborts evaluation of `node`. Assignments made
    /// before the error stay in `env`.
    pub fn evaluate(&mut self, node: &Node, env: &mut Environment) -> EvalResult<Value> {
        match node {
            Node::IntLiteral { value, .. } => Ok(Value::Int(*value)),
            Node::FloatLiteral { value, .. } => Ok(Value::Float(*value)),
            Node::StringLiteral { value, .. } => Ok(Value::String(value.clone())),
            Node::Identifier { name, .. } => Ok(env.get(name)),
            Node::BinaryOp { op,
                             left,
                             right,
                             pos, } => {
                let left = self.evaluate(left, env)?;
                let right = self.evaluate(right, env)?;
                eval_binary(*op, &left, &right, *pos)
            },
            Node::Assignment { name, value, .. } => {
                let value = self.evaluate(value, env)?;
                env.set(name, value.clone());
                Ok(value)
            },
            Node::If { condition,
                       then_branch,
                       else_branch,
                       .. } => self.eval_if(condition, then_branch, else_branch.as_deref(), env),
            Node::While { condition, body, .. } => self.eval_while(condition, body, env),
            Node::Print { expr, pos } => {
                let value = self.evaluate(expr, env)?;
                writeln!(self.out, "{value}").map_err(|source| RuntimeError::Output { source,
                                                                                     line: pos.line,
                                                                                     column: pos.column })?;
                Ok(Value::None)
            },
            Node::Block { statements, .. } => {
                for statement in statements {
                    self.evaluate(statement, env)?;
                }
                Ok(Value::None)
            },
        }
    }

    /// Evaluates exactly one branch of a conditional.
    ///
    /// Without an else branch a false condition yields [`Value::None`].
    fn eval_if(&mut self,
               condition: &Node,
               then_branch: &Node,
               else_branch: Option<&Node>,
               env: &mut Environment)
               -> EvalResult<Value> {
        if self.evaluate(condition, env)?.is_truthy() {
            self.evaluate(then_branch, env)
        } else if let Some(else_branch) = else_branch {
            self.evaluate(else_branch, env)
        } else {
            Ok(Value::None)
        }
    }

    /// Runs a loop until its condition is false. The body's values are
    /// discarded and the loop itself always yields [`Value::None`].
    fn eval_while(&mut self, condition: &Node, body: &Node, env: &mut Environment) -> EvalResult<Value> {
        while self.evaluate(condition, env)?.is_truthy() {
            self.evaluate(body, env)?;
        }
        Ok(Value::None)
    }
}
