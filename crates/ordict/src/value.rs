use std::fmt;
use std::fmt::Display;

use crate::dictionary::OrderedDictionary;

/// Stored value. Opaque to the dictionary except for the container variants,
/// which drive the recursive merge.
///
/// Values are owned: sharing happens through explicit `Clone`, and two clones
/// never observe each other's mutations.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    Number(f64),
    Boolean(bool),
    String(String),
    List(Vec<Value>),
    Dictionary(OrderedDictionary),
    Nil,
}

impl Value {
    pub fn kind(&self) -> ValueType {
        use Value::*;

        match self {
            Number(_) => ValueType::Number,
            Boolean(_) => ValueType::Boolean,
            String(_) => ValueType::String,
            List(_) => ValueType::List,
            Dictionary(_) => ValueType::Dictionary,
            Nil => ValueType::Nil,
        }
    }

    pub fn is_container(&self) -> bool {
        matches!(self, Value::List(_) | Value::Dictionary(_))
    }
}

impl Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        use Value::*;

        write!(
            f,
            "{}",
            match self {
                Number(value) => value.to_string(),
                Boolean(value) => value.to_string(),
                String(value) => format!("\"{}\"", escape_special_chars(value)),
                List(items) => format!(
                    "[{}]",
                    items
                        .iter()
                        .map(|item| item.to_string())
                        .collect::<Vec<_>>()
                        .join(", ")
                ),
                Dictionary(dictionary) => dictionary.to_string(),
                Nil => "nil".to_string(),
            }
        )
    }
}

impl From<f64> for Value {
    fn from(value: f64) -> Self {
        Value::Number(value)
    }
}

impl From<i64> for Value {
    fn from(value: i64) -> Self {
        Value::Number(value as f64)
    }
}

impl From<bool> for Value {
    fn from(value: bool) -> Self {
        Value::Boolean(value)
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

impl From<Vec<Value>> for Value {
    fn from(items: Vec<Value>) -> Self {
        Value::List(items)
    }
}

impl From<OrderedDictionary> for Value {
    fn from(dictionary: OrderedDictionary) -> Self {
        Value::Dictionary(dictionary)
    }
}

#[derive(Debug, PartialEq, Clone)]
pub enum ValueType {
    Number,
    Boolean,
    String,
    List,
    Dictionary,
    Nil,
}

impl From<Value> for ValueType {
    fn from(value: Value) -> Self {
        value.kind()
    }
}

impl Display for ValueType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        use ValueType::*;

        let str = match self {
            Number => "number".to_string(),
            Boolean => "boolean".to_string(),
            String => "string".to_string(),
            List => "list".to_string(),
            Dictionary => "dictionary".to_string(),
            Nil => "nil".to_string(),
        };

        write!(f, "{}", str)
    }
}

pub fn escape_special_chars(s: &str) -> String {
    let mut result = String::with_capacity(s.len());

    for c in s.chars() {
        match c {
            '\0' => result.push_str("\\0"),
            '\x07' => result.push_str("\\a"),
            '\x08' => result.push_str("\\b"),
            '\x0C' => result.push_str("\\f"),
            '\x0B' => result.push_str("\\v"),
            '\x1B' => result.push_str("\\e"),
            '\r' => result.push_str("\\r"),
            '\n' => result.push_str("\\n"),
            '\t' => result.push_str("\\t"),
            '\\' => result.push_str("\\\\"),
            '"' => result.push_str("\\\""),
            '\'' => result.push_str("\\\'"),

            c if c.is_control() => {
                let byte = c as u32;
                result.push_str(&format!("\\x{byte:02X}"));
            }

            _ => result.push(c),
        }
    }

    result
}