//! Value type representing the current content of a monitored variable

use serde::{Deserialize, Serialize};
use std::fmt;

/// The current value of a variable in the value store
///
/// Host variables are typed as integer, float, boolean or string. Each summary
/// category reads its references with the coercion matching its expected
/// type, so a variable of a different type still yields a usable value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Value {
    Boolean(bool),
    Integer(i64),
    Float(f64),
    String(String),
}

impl Value {
    /// Read the value as an integer
    ///
    /// Floats truncate toward zero, booleans map to 0/1, strings to their
    /// leading integer (or 0).
    pub fn as_integer(&self) -> i64 {
        match self {
            Value::Integer(i) => *i,
            Value::Float(f) => *f as i64,
            Value::Boolean(b) => i64::from(*b),
            Value::String(s) => leading_integer(s),
        }
    }

    /// Read the value as a boolean
    ///
    /// Integers are true when non-zero, strings when non-empty and not "0".
    pub fn as_boolean(&self) -> bool {
        match self {
            Value::Boolean(b) => *b,
            Value::Integer(i) => *i != 0,
            Value::Float(f) => *f != 0.0,
            Value::String(s) => !s.is_empty() && s != "0",
        }
    }

    /// Read the value as text
    pub fn as_text(&self) -> String {
        match self {
            Value::String(s) => s.clone(),
            Value::Integer(i) => i.to_string(),
            Value::Float(f) => f.to_string(),
            Value::Boolean(true) => "1".to_string(),
            Value::Boolean(false) => String::new(),
        }
    }
}

fn leading_integer(s: &str) -> i64 {
    let s = s.trim_start();
    let (sign, digits) = match s.as_bytes().first() {
        Some(b'-') => (-1, &s[1..]),
        Some(b'+') => (1, &s[1..]),
        _ => (1, s),
    };
    let end = digits
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(digits.len());
    digits[..end]
        .parse::<i64>()
        .map(|n| sign * n)
        .unwrap_or(0)
}

impl From<i64> for Value {
    fn from(v: i64) -> Self {
        Value::Integer(v)
    }
}

impl From<f64> for Value {
    fn from(v: f64) -> Self {
        Value::Float(v)
    }
}

impl From<bool> for Value {
    fn from(v: bool) -> Self {
        Value::Boolean(v)
    }
}

impl From<&str> for Value {
    fn from(v: &str) -> Self {
        Value::String(v.to_string())
    }
}

impl From<String> for Value {
    fn from(v: String) -> Self {
        Value::String(v)
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Boolean(b) => write!(f, "{}", b),
            Value::Integer(i) => write!(f, "{}", i),
            Value::Float(v) => write!(f, "{}", v),
            Value::String(s) => write!(f, "{:?}", s),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_as_integer() {
        assert_eq!(Value::Integer(3).as_integer(), 3);
        assert_eq!(Value::Boolean(true).as_integer(), 1);
        assert_eq!(Value::Boolean(false).as_integer(), 0);
        assert_eq!(Value::from("2").as_integer(), 2);
        assert_eq!(Value::from(" -4 zones").as_integer(), -4);
        assert_eq!(Value::from("armed").as_integer(), 0);
        assert_eq!(Value::from("").as_integer(), 0);
    }

    #[test]
    fn test_float_coercions() {
        assert_eq!(Value::Float(1.0).as_integer(), 1);
        assert_eq!(Value::Float(2.9).as_integer(), 2);
        assert_eq!(Value::Float(-0.5).as_integer(), 0);
        assert!(Value::Float(0.1).as_boolean());
        assert!(!Value::Float(0.0).as_boolean());
        assert_eq!(Value::Float(21.5).as_text(), "21.5");
    }

    #[test]
    fn test_as_boolean() {
        assert!(Value::Boolean(true).as_boolean());
        assert!(Value::Integer(2).as_boolean());
        assert!(!Value::Integer(0).as_boolean());
        assert!(Value::from("open").as_boolean());
        assert!(!Value::from("0").as_boolean());
        assert!(!Value::from("").as_boolean());
    }

    #[test]
    fn test_as_text() {
        assert_eq!(Value::from("Kitchen").as_text(), "Kitchen");
        assert_eq!(Value::Integer(12).as_text(), "12");
        assert_eq!(Value::Boolean(false).as_text(), "");
    }

    #[test]
    fn test_deserialize_untagged() {
        let values: Vec<Value> = serde_json::from_str(r#"[true, 3, 1.5, "Hallway"]"#).unwrap();
        assert_eq!(
            values,
            vec![
                Value::Boolean(true),
                Value::Integer(3),
                Value::Float(1.5),
                Value::String("Hallway".to_string())
            ]
        );
    }
}
