/// Represents a runtime value in the interpreter.
///
/// Values are plain owned data. Reading a variable or passing a result along
/// hands out an independent clone, so changing one copy never affects
/// another.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum Value {
    /// The absence of a value. Produced by statements and unbound variables.
    #[default]
    None,
    /// A 64 bit integer.
    Int(i64),
    /// A double precision floating-point number.
    Float(f64),
    /// A boolean, produced by the comparison operators.
    Bool(bool),
    /// An owned string.
    String(String),
}

impl From<i64> for Value {
    fn from(v: i64) -> Self {
        Self::Int(v)
    }
}

impl From<f64> for Value {
    fn from(v: f64) -> Self {
        Self::Float(v)
    }
}

impl From<bool> for Value {
    fn from(v: bool) -> Self {
        Self::Bool(v)
    }
}

impl From<&str> for Value {
    fn from(v: &str) -> Self {
        Self::String(v.to_string())
    }
}

impl From<String> for Value {
    fn from(v: String) -> Self {
        Self::String(v)
    }
}

impl Value {
    /// The name of the value's type, as used in error messages.
    #[must_use]
    pub const fn type_name(&self) -> &'static str {
        match self {
            Self::None => "None",
            Self::Int(_) => "Int",
            Self::Float(_) => "Float",
            Self::Bool(_) => "Bool",
            Self::String(_) => "String",
        }
    }

    /// Decides whether the value counts as true in a condition.
    ///
    /// Booleans are themselves, numbers are true when nonzero, and every
    /// other value is false.
    ///
    /// # Example
    /// ```
    /// use lofy::interpreter::value::core::Value;
    ///
    /// assert!(Value::Int(3).is_truthy());
    /// assert!(!Value::Float(0.0).is_truthy());
    /// assert!(!Value::from("text").is_truthy());
    /// ```
    #[must_use]
    pub fn is_truthy(&self) -> bool {
        match self {
            Self::Bool(b) => *b,
            Self::Int(n) => *n != 0,
            Self::Float(r) => *r != 0.0,
            Self::None | Self::String(_) => false,
        }
    }

    /// The integer form of a boolean (`1` or `0`).
    #[must_use]
    pub fn as_int(&self) -> Option<i64> {
        match self {
            Self::Int(n) => Some(*n),
            Self::Bool(b) => Some(i64::from(*b)),
            _ => None,
        }
    }

    /// The numeric value as a float, promoting integers. `None` for
    /// non-numeric values.
    #[allow(clippy::cast_precision_loss)]
    #[must_use]
    pub fn as_float(&self) -> Option<f64> {
        match self {
            Self::Int(n) => Some(*n as f64),
            Self::Float(r) => Some(*r),
            _ => None,
        }
    }

    /// Returns `true` if the value is [`Value::None`].
    #[must_use]
    pub const fn is_none(&self) -> bool {
        matches!(self, Self::None)
    }
}

/// Renders a value the way `print` shows it.
///
/// Integers are decimal, floats use fixed notation with six fractional digits,
/// strings are written verbatim, booleans are `True`/`False` and the empty
/// value is `None`.
///
/// ```
/// use lofy::interpreter::value::core::Value;
///
/// assert_eq!(Value::Float(5.0).to_string(), "5.000000");
/// assert_eq!(Value::Bool(true).to_string(), "True");
/// ```
impl std::fmt::Display for Value {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::None => write!(f, "None"),
            Self::Int(n) => write!(f, "{n}"),
            Self::Float(r) => write!(f, "{r:.6}"),
            Self::Bool(true) => write!(f, "True"),
            Self::Bool(false) => write!(f, "False"),
            Self::String(s) => write!(f, "{s}"),
        }
    }
}
