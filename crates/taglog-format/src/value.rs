use std::collections::BTreeMap;
use std::fmt;

use serde::Serialize;

/// Value attachable to a log entry.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum LogValue {
    Str(String),
    Int(i64),
    Float(f64),
    Bool(bool),
    List(Vec<String>),
}

/// Attached key-value data, ordered by key.
pub type Fields = BTreeMap<String, LogValue>;

impl LogValue {
    pub fn is_true(&self) -> bool {
        matches!(self, LogValue::Bool(true))
    }

    /// Integer reading of the value; numeric strings parse, anything else is 0.
    pub fn as_size(&self) -> usize {
        match self {
            LogValue::Int(i) => usize::try_from(*i).unwrap_or(0),
            LogValue::Str(s) => s.trim().parse().unwrap_or(0),
            LogValue::Float(_) | LogValue::Bool(_) | LogValue::List(_) => 0,
        }
    }
}

// Floats print with the fewest digits that round-trip and never use an exponent.
impl fmt::Display for LogValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LogValue::Str(s) => f.write_str(s),
            LogValue::Int(i) => write!(f, "{i}"),
            LogValue::Float(v) => write!(f, "{v}"),
            LogValue::Bool(b) => write!(f, "{b}"),
            LogValue::List(items) => f.write_str(&items.join(",")),
        }
    }
}

impl From<&str> for LogValue {
    fn from(value: &str) -> Self {
        LogValue::Str(value.to_string())
    }
}

impl From<String> for LogValue {
    fn from(value: String) -> Self {
        LogValue::Str(value)
    }
}

impl From<i64> for LogValue {
    fn from(value: i64) -> Self {
        LogValue::Int(value)
    }
}

impl From<i32> for LogValue {
    fn from(value: i32) -> Self {
        LogValue::Int(i64::from(value))
    }
}

impl From<usize> for LogValue {
    fn from(value: usize) -> Self {
        LogValue::Int(i64::try_from(value).unwrap_or(i64::MAX))
    }
}

impl From<f64> for LogValue {
    fn from(value: f64) -> Self {
        LogValue::Float(value)
    }
}

impl From<bool> for LogValue {
    fn from(value: bool) -> Self {
        LogValue::Bool(value)
    }
}

impl From<Vec<String>> for LogValue {
    fn from(value: Vec<String>) -> Self {
        LogValue::List(value)
    }
}

impl From<&[&str]> for LogValue {
    fn from(value: &[&str]) -> Self {
        LogValue::List(value.iter().map(|s| s.to_string()).collect())
    }
}
