use crate::{
    ast::{BinaryOperator, Position},
    error::RuntimeError,
    interpreter::{evaluator::core::EvalResult, value::core::Value},
};

/// Evaluates a binary operation between two values.
///
/// Two integers stay integral for arithmetic. Any other pair of numbers is
/// promoted to floats. Comparisons of numbers always yield a `Bool`. Every
/// other combination of operand types is a type error.
///
/// # Parameters
/// - `op`: The operator.
/// - `left`: Left operand.
/// - `right`: Right operand.
/// - `pos`: Position of the operator for error reporting.
///
/// # Example
/// ```
/// use lofy::{
///     ast::{BinaryOperator, Position},
///     interpreter::{evaluator::binary::eval_binary, value::core::Value},
/// };
///
/// let pos = Position::new(1, 3);
/// let sum = eval_binary(BinaryOperator::Add, &Value::Int(3), &Value::Int(4), pos);
/// assert_eq!(sum.unwrap(), Value::Int(7));
///
/// let half = eval_binary(BinaryOperator::Div, &Value::Int(1), &Value::Float(2.0), pos);
/// assert_eq!(half.unwrap(), Value::Float(0.5));
///
/// assert!(eval_binary(BinaryOperator::Add, &Value::from("a"), &Value::Int(1), pos).is_err());
/// ```
pub fn eval_binary(op: BinaryOperator, left: &Value, right: &Value, pos: Position) -> EvalResult<Value> {
    match (left, right) {
        (Value::Int(a), Value::Int(b)) => eval_integer_op(op, *a, *b, pos),
        (Value::Int(_) | Value::Float(_), Value::Int(_) | Value::Float(_)) => {
            match (left.as_float(), right.as_float()) {
                (Some(a), Some(b)) => eval_float_op(op, a, b, pos),
                _ => Err(type_mismatch(op, left, right, pos)),
            }
        },
        _ => Err(type_mismatch(op, left, right, pos)),
    }
}

/// Integer arithmetic with overflow and division-by-zero checks. Division
/// truncates toward zero.
fn eval_integer_op(op: BinaryOperator, a: i64, b: i64, pos: Position) -> EvalResult<Value> {
    use BinaryOperator::{
        Add, Div, Equal, Greater, GreaterEqual, Less, LessEqual, Mul, NotEqual, Sub,
    };

    let result = match op {
        Add => a.checked_add(b),
        Sub => a.checked_sub(b),
        Mul => a.checked_mul(b),
        Div if b == 0 => return Err(RuntimeError::DivisionByZero { line:   pos.line,
                                                                   column: pos.column, }),
        Div => a.checked_div(b),
        Equal => return Ok(Value::Bool(a == b)),
        NotEqual => return Ok(Value::Bool(a != b)),
        Less => return Ok(Value::Bool(a < b)),
        Greater => return Ok(Value::Bool(a > b)),
        LessEqual => return Ok(Value::Bool(a <= b)),
        GreaterEqual => return Ok(Value::Bool(a >= b)),
    };

    result.map(Value::Int)
          .ok_or(RuntimeError::Overflow { line:   pos.line,
                                          column: pos.column, })
}

#[allow(clippy::float_cmp)]
fn eval_float_op(op: BinaryOperator, a: f64, b: f64, pos: Position) -> EvalResult<Value> {
    use BinaryOperator::{
        Add, Div, Equal, Greater, GreaterEqual, Less, LessEqual, Mul, NotEqual, Sub,
    };

    Ok(match op {
        Add => Value::Float(a + b),
        Sub => Value::Float(a - b),
        Mul => Value::Float(a * b),
        Div if b == 0.0 => {
            return Err(RuntimeError::DivisionByZero { line:   pos.line,
                                                      column: pos.column, });
        },
        Div => Value::Float(a / b),
        Equal => Value::Bool(a == b),
        NotEqual => Value::Bool(a != b),
        Less => Value::Bool(a < b),
        Greater => Value::Bool(a > b),
        LessEqual => Value::Bool(a <= b),
        GreaterEqual => Value::Bool(a >= b),
    })
}

fn type_mismatch(op: BinaryOperator, left: &Value, right: &Value, pos: Position) -> RuntimeError {
    RuntimeError::TypeMismatch { op,
                                 left: left.type_name(),
                                 right: right.type_name(),
                                 line: pos.line,
                                 column: pos.column }
}
