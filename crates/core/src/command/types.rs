//! Typed option values and the built-in value types.

use std::fmt::{Display, Formatter};
use std::sync::Arc;

use itertools::Itertools;

use crate::error::{Error, Result};

/// A parsed option value.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    Bool(bool),
    String(String),
    Number(f64),
    Integer(i64),
    List(Vec<Value>),
}

impl Display for Value {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Value::Bool(value) => write!(f, "{value}"),
            Value::String(value) => f.write_str(value),
            Value::Number(value) => write!(f, "{value}"),
            Value::Integer(value) => write!(f, "{value}"),
            Value::List(values) => write!(f, "{}", values.iter().join(", ")),
        }
    }
}

impl From<&str> for Value {
    fn from(value: &str) -> Self {
        Value::String(value.to_string())
    }
}

impl From<String> for Value {
    fn from(value: String) -> Self {
        Value::String(value)
    }
}

impl From<bool> for Value {
    fn from(value: bool) -> Self {
        Value::Bool(value)
    }
}

impl From<i64> for Value {
    fn from(value: i64) -> Self {
        Value::Integer(value)
    }
}

impl From<f64> for Value {
    fn from(value: f64) -> Self {
        Value::Number(value)
    }
}

/// Everything a type handler knows about the value it converts.
#[derive(Debug, Clone, Copy)]
pub struct TypeContext<'a> {
    /// Flag spelling, e.g. `--global`.
    pub option: &'a str,
    /// Argument name from the flags definition.
    pub argument: &'a str,
    pub type_name: &'a str,
    /// Raw value from the command line.
    pub value: &'a str,
}

impl TypeContext<'_> {
    #[must_use]
    pub fn invalid(&self) -> Error {
        Error::invalid_option_value(self.option, self.type_name, self.value)
    }
}

/// Converts a raw value into a [`Value`].
pub type TypeHandler = Arc<dyn Fn(&TypeContext<'_>) -> Result<Value> + Send + Sync>;

/// Names of the types every command understands.
pub const BUILTIN_TYPES: [&str; 4] = ["string", "number", "integer", "boolean"];

/// Converts using a built-in type.
///
/// # Errors
///
/// Returns [`Error::UnknownType`] for a type that is not built in, or
/// [`Error::InvalidOptionValue`] when the value does not parse.
pub fn convert_builtin(context: &TypeContext<'_>) -> Result<Value> {
    match context.type_name {
        "string" => Ok(Value::String(context.value.to_string())),
        "number" => context
            .value
            .parse::<f64>()
            .map(Value::Number)
            .map_err(|_| context.invalid()),
        "integer" => context
            .value
            .parse::<i64>()
            .map(Value::Integer)
            .map_err(|_| context.invalid()),
        "boolean" => match context.value.to_lowercase().as_str() {
            "true" | "1" => Ok(Value::Bool(true)),
            "false" | "0" => Ok(Value::Bool(false)),
            _ => Err(context.invalid()),
        },
        other => Err(Error::UnknownType(other.to_string())),
    }
}
