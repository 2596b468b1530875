pub mod chunk;
pub mod disassemble;

use std::fmt;

/// A dynamically typed runtime value.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    Integer(i64),
    Double(f64),
    String(String),
    Null,
}

impl Value {
    /// Name of the value's type, used in runtime error messages.
    pub fn type_name(&self) -> &'static str {
        match self {
            Value::Integer(_) => "integer",
            Value::Double(_) => "double",
            Value::String(_) => "string",
            Value::Null => "null",
        }
    }
}

/// Display form used by `print`. Doubles always show six fractional digits.
impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Integer(val) => write!(f, "{}", val),
            Value::Double(val) => write!(f, "{:.6}", val),
            Value::String(val) => f.write_str(val),
            Value::Null => f.write_str("null"),
        }
    }
}

pub type ValueArray = Vec<Value>;
