//! Runtime numeric values
//!
//! Literals and evaluation results share one representation: a value is
//! either integral or floating.

use std::fmt;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Value {
    Int(i64),
    Float(f64),
}

impl Value {
    pub fn is_float(&self) -> bool {
        matches!(self, Value::Float(_))
    }

    pub fn as_f64(&self) -> f64 {
        match *self {
            Value::Int(v) => v as f64,
            Value::Float(v) => v,
        }
    }

    /// True for `0` and `0.0` (including `-0.0`).
    pub fn is_zero(&self) -> bool {
        match *self {
            Value::Int(v) => v == 0,
            Value::Float(v) => v == 0.0,
        }
    }
}

impl From<i64> for Value {
    fn from(value: i64) -> Self {
        Value::Int(value)
    }
}

impl From<f64> for Value {
    fn from(value: f64) -> Self {
        Value::Float(value)
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Int(v) => write!(f, "{}", v),
            // Always positional, with a fractional part: 10.0 prints "10.0", 1e16 in full
            Value::Float(v) if v.is_finite() && v.fract() == 0.0 => write!(f, "{}.0", v),
            Value::Float(v) => write!(f, "{}", v),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn float_display_keeps_fraction() {
        assert_eq!(Value::Float(10.0).to_string(), "10.0");
        assert_eq!(Value::Float(2.5).to_string(), "2.5");
        assert_eq!(Value::Int(10).to_string(), "10");
    }

    #[test]
    fn float_display_never_uses_exponents() {
        assert_eq!(Value::Float(1e16).to_string(), "10000000000000000.0");
        assert_eq!(Value::Float(1e-7).to_string(), "0.0000001");
        assert_eq!(Value::Float(-0.0).to_string(), "-0.0");
        assert_eq!(Value::Float(f64::INFINITY).to_string(), "inf");
    }

    #[test]
    fn zero_detection_covers_both_kinds() {
        assert!(Value::Int(0).is_zero());
        assert!(Value::Float(0.0).is_zero());
        assert!(Value::Float(-0.0).is_zero());
        assert!(!Value::Float(f64::MIN_POSITIVE).is_zero());
    }

    #[test]
    fn json_numbers_keep_their_kind() {
        let int: Value = serde_json::from_str("2").unwrap();
        let float: Value = serde_json::from_str("2.0").unwrap();

        assert_eq!(int, Value::Int(2));
        assert_eq!(float, Value::Float(2.0));
    }
}
