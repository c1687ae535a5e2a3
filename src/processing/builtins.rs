//! Ready-made operations used by the demo binary, benches and tests.

use crate::error::OperationError;
use crate::types::Value;

use super::operation::Operation;

/// Multiply numbers by two. Integer overflow and non-numeric elements fail.
pub fn double() -> Operation {
    Operation::fallible(|v| match v {
        Value::Int64(n) => n
            .checked_mul(2)
            .map(Value::Int64)
            .ok_or(OperationError::Overflow { operation: "double" }),
        Value::Float64(n) => Ok(Value::Float64(n * 2.0)),
        other => Err(OperationError::UnsupportedOperand {
            operation: "double",
            type_name: other.type_name(),
        }),
    })
}

/// `true` for even integers. Non-integers fail.
pub fn is_even() -> Operation {
    Operation::fallible(|v| match v {
        Value::Int64(n) => Ok(Value::Bool(n % 2 == 0)),
        other => Err(OperationError::UnsupportedOperand {
            operation: "is_even",
            type_name: other.type_name(),
        }),
    })
}

/// Length of text in characters. Non-text elements fail.
pub fn length() -> Operation {
    Operation::fallible(|v| match v {
        Value::Utf8(s) => Ok(Value::Int64(s.chars().count() as i64)),
        other => Err(OperationError::UnsupportedOperand {
            operation: "length",
            type_name: other.type_name(),
        }),
    })
}

/// `true` for numbers strictly greater than `threshold`; `false` for everything else.
pub fn greater_than(threshold: f64) -> Operation {
    Operation::predicate(move |v| match v {
        Value::Int64(n) => (*n as f64) > threshold,
        Value::Float64(n) => *n > threshold,
        _ => false,
    })
}

/// `true` for text longer than `min_chars` characters.
pub fn longer_than(min_chars: usize) -> Operation {
    Operation::predicate(move |v| v.as_str().is_some_and(|s| s.chars().count() > min_chars))
}
