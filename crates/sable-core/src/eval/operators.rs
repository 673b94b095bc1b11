//! Binary operator semantics.
//!
//! If either operand is floating the operation is carried out in floating
//! point; otherwise it stays integral. Exponentiation and `/` always produce
//! a floating result. `//` and `%` floor toward negative infinity, so the
//! remainder takes the sign of the divisor.

use crate::ast::{BinaryOp, Value};

use super::EvalError;

pub(super) fn eval_binary(op: BinaryOp, left: Value, right: Value) -> Result<Value, EvalError> {
    match (left, right) {
        (Value::Int(l), Value::Int(r)) => eval_binary_int(op, l, r),
        _ => eval_binary_float(op, left.as_f64(), right.as_f64()).map(Value::Float),
    }
}

/// Checked integer arithmetic: overflow is reported rather than wrapped.
fn eval_binary_int(op: BinaryOp, left: i64, right: i64) -> Result<Value, EvalError> {
    let overflow = || EvalError::overflow(op);

    match op {
        BinaryOp::Plus => left.checked_add(right).map(Value::Int).ok_or_else(overflow),
        BinaryOp::Minus => left.checked_sub(right).map(Value::Int).ok_or_else(overflow),
        BinaryOp::Times => left.checked_mul(right).map(Value::Int).ok_or_else(overflow),
        BinaryOp::FloatDiv => {
            if right == 0 {
                return Err(EvalError::DivisionByZero { operator: op });
            }
            Ok(Value::Float(left as f64 / right as f64))
        }
        BinaryOp::IntDiv => {
            if right == 0 {
                return Err(EvalError::DivisionByZero { operator: op });
            }
            let quotient = left.checked_div(right).ok_or_else(overflow)?;
            if left % right != 0 && (left < 0) != (right < 0) {
                Ok(Value::Int(quotient - 1))
            } else {
                Ok(Value::Int(quotient))
            }
        }
        BinaryOp::Modulus => {
            if right == 0 {
                return Err(EvalError::DivisionByZero { operator: op });
            }
            // i64::MIN % -1 is 0; wrapping_rem avoids the overflow trap
            let remainder = left.wrapping_rem(right);
            if remainder != 0 && (remainder < 0) != (right < 0) {
                Ok(Value::Int(remainder + right))
            } else {
                Ok(Value::Int(remainder))
            }
        }
        BinaryOp::Exponentiation => Ok(Value::Float((left as f64).powf(right as f64))),
    }
}

/// IEEE 754 arithmetic, except that a zero divisor is an error.
fn eval_binary_float(op: BinaryOp, left: f64, right: f64) -> Result<f64, EvalError> {
    match op {
        BinaryOp::Plus => Ok(left + right),
        BinaryOp::Minus => Ok(left - right),
        BinaryOp::Times => Ok(left * right),
        BinaryOp::FloatDiv | BinaryOp::IntDiv | BinaryOp::Modulus if right == 0.0 => {
            Err(EvalError::DivisionByZero { operator: op })
        }
        BinaryOp::FloatDiv => Ok(left / right),
        BinaryOp::IntDiv => Ok(floor_divmod(left, right).0),
        BinaryOp::Modulus => Ok(floor_divmod(left, right).1),
        BinaryOp::Exponentiation => Ok(left.powf(right)),
    }
}

/// Floored quotient and remainder for a non-zero divisor, derived from the same
/// remainder so that `q * right + r` recovers `left`.
fn floor_divmod(left: f64, right: f64) -> (f64, f64) {
    let mut remainder = left % right;
    let mut quotient = (left - remainder) / right;
    if remainder != 0.0 {
        if (remainder < 0.0) != (right < 0.0) {
            remainder += right;
            quotient -= 1.0;
        }
    } else {
        remainder = 0.0_f64.copysign(right);
    }

    if quotient == 0.0 {
        return (0.0_f64.copysign(left / right), remainder);
    }
    // `quotient` is within rounding of an integer; snap to the nearest one
    let mut floored = quotient.floor();
    if quotient - floored > 0.5 {
        floored += 1.0;
    }
    (floored, remainder)
}
