#![forbid(unsafe_code)]

//! Value vocabulary shared by the descriptor model and the report formatters
//!
//! `ValueKind` is the closed set of supported option kinds, `Value` is the
//! untyped scalar union used for defaults and resolved values, and
//! `ResolvedValue` is the shape of one entry in a parser-produced mapping.

use crate::model::descriptor::DefinitionError;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;

/// The closed set of option value kinds
///
/// Discriminants occupy the contiguous tag range `1..=6`; converting from a
/// raw tag via `TryFrom<u8>` rejects anything outside that range.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
#[repr(u8)]
pub enum ValueKind {
    Bool = 1,
    Choice = 2,
    Float = 3,
    Int = 4,
    List = 5,
    Str = 6,
}

impl ValueKind {
    /// Returns the numeric tag for this kind
    pub fn tag(self) -> u8 {
        self as u8
    }

    /// Returns the lowercase name used in definition files and CLI output
    pub fn as_str(self) -> &'static str {
        match self {
            ValueKind::Bool => "bool",
            ValueKind::Choice => "choice",
            ValueKind::Float => "float",
            ValueKind::Int => "int",
            ValueKind::List => "list",
            ValueKind::Str => "str",
        }
    }
}

impl TryFrom<u8> for ValueKind {
    type Error = DefinitionError;

    fn try_from(tag: u8) -> Result<Self, Self::Error> {
        match tag {
            1 => Ok(ValueKind::Bool),
            2 => Ok(ValueKind::Choice),
            3 => Ok(ValueKind::Float),
            4 => Ok(ValueKind::Int),
            5 => Ok(ValueKind::List),
            6 => Ok(ValueKind::Str),
            other => Err(DefinitionError::UnknownKind(other)),
        }
    }
}

impl fmt::Display for ValueKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// An untyped scalar value
///
/// Defaults and resolved option values are carried as this union. The model
/// stores whatever value the caller supplies; it does not check that a
/// default's shape matches its descriptor's kind.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Value {
    Bool(bool),
    Int(i64),
    Float(f64),
    Str(String),
}

impl Value {
    /// Whether this value counts as truthy
    ///
    /// `false`, `0`, `0.0`, and the empty string are falsy; everything else
    /// is truthy.
    pub fn is_truthy(&self) -> bool {
        match self {
            Value::Bool(b) => *b,
            Value::Int(n) => *n != 0,
            Value::Float(x) => *x != 0.0,
            Value::Str(s) => !s.is_empty(),
        }
    }

    /// Returns the integer payload, if this is an integer value
    pub fn as_int(&self) -> Option<i64> {
        match self {
            Value::Int(n) => Some(*n),
            _ => None,
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Bool(b) => write!(f, "{}", b),
            Value::Int(n) => write!(f, "{}", n),
            Value::Float(x) => write!(f, "{}", x),
            Value::Str(s) => f.write_str(s),
        }
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Value::Bool(b)
    }
}

impl From<i64> for Value {
    fn from(n: i64) -> Self {
        Value::Int(n)
    }
}

impl From<i32> for Value {
    fn from(n: i32) -> Self {
        Value::Int(n as i64)
    }
}

impl From<f64> for Value {
    fn from(x: f64) -> Self {
        Value::Float(x)
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::Str(s.to_string())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::Str(s)
    }
}

/// One entry of a resolved option mapping: a scalar or a sequence of scalars
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ResolvedValue {
    Scalar(Value),
    Sequence(Vec<Value>),
}

impl From<Value> for ResolvedValue {
    fn from(value: Value) -> Self {
        ResolvedValue::Scalar(value)
    }
}

impl From<Vec<Value>> for ResolvedValue {
    fn from(values: Vec<Value>) -> Self {
        ResolvedValue::Sequence(values)
    }
}

/// A resolved name-to-value mapping, as produced by an external parser
///
/// The mapping carries no defined order; consumers that need determinism
/// sort by name. An absent mapping is represented by the empty map.
pub type ResolvedOptions = HashMap<String, ResolvedValue>;
