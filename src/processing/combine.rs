//! Variadic combination of values.
//!
//! Two entry points share one set of rules:
//!
//! - [`combine`] is statically typed over [`Combinable`], so mixed-type calls do not compile.
//! - [`combine_values`] takes dynamically typed [`Value`]s and reports mismatches as a
//!   [`CombineError`] inside the returned [`Combined`].
//!
//! Integers and floats are added; text is concatenated with the separator inserted between the
//! running result and each new value.

use crate::error::CombineError;
use crate::types::{Outcome, Value};

/// Result of [`combine_values`]: the combined value, or the diagnostic as data.
pub type Combined = Outcome<Value, CombineError>;

/// A type with a combination rule.
pub trait Combinable: Sized {
    /// Fold `next` into the running result.
    fn combine_with(self, next: Self, separator: &str) -> Result<Self, CombineError>;
}

impl Combinable for i64 {
    fn combine_with(self, next: Self, _separator: &str) -> Result<Self, CombineError> {
        self.checked_add(next).ok_or_else(|| CombineError::Arithmetic {
            message: format!("integer overflow adding {next} to {self}"),
        })
    }
}

/// IEEE addition: overflow saturates to infinity and NaN propagates.
impl Combinable for f64 {
    fn combine_with(self, next: Self, _separator: &str) -> Result<Self, CombineError> {
        Ok(self + next)
    }
}

impl Combinable for String {
    fn combine_with(mut self, next: Self, separator: &str) -> Result<Self, CombineError> {
        self.reserve(separator.len() + next.len());
        self.push_str(separator);
        self.push_str(&next);
        Ok(self)
    }
}

/// Fold `values` into one.
///
/// The running result starts at `start_value` when given (every value is then folded into it),
/// otherwise at the first value. Returns `Ok(None)` when there is nothing to combine.
///
/// ```rust
/// use rust_collection_processing::processing::combine;
///
/// assert_eq!(combine([1_i64, 2, 3, 4], "", Some(0)), Ok(Some(10)));
/// assert_eq!(
///     combine(["Hello".to_string(), "World".to_string()], " ", None),
///     Ok(Some("Hello World".to_string()))
/// );
/// ```
pub fn combine<T, I>(
    values: I,
    separator: &str,
    start_value: Option<T>,
) -> Result<Option<T>, CombineError>
where
    T: Combinable,
    I: IntoIterator<Item = T>,
{
    let mut values = values.into_iter();
    let Some(mut acc) = start_value.or_else(|| values.next()) else {
        return Ok(None);
    };
    for next in values {
        acc = acc.combine_with(next, separator)?;
    }
    Ok(Some(acc))
}

/// Options for [`combine_values`].
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CombineOptions {
    /// Inserted between text values. Ignored for numbers.
    pub separator: String,
    /// Starting point of the running result. `None` means "not supplied"; a supplied falsy
    /// value such as `0` or `""` is still honoured.
    pub start_value: Option<Value>,
}

impl CombineOptions {
    pub fn with_separator(mut self, separator: impl Into<String>) -> Self {
        self.separator = separator.into();
        self
    }

    pub fn with_start_value(mut self, start_value: impl Into<Value>) -> Self {
        self.start_value = Some(start_value.into());
        self
    }
}

/// Combine dynamically typed values.
///
/// - No values: the start value if supplied, else empty text.
/// - Otherwise every value must have exactly the first value's type; the first mismatch is
///   reported as [`CombineError::TypeMismatch`].
/// - Types without a rule (bool, null) are reported as [`CombineError::UnsupportedType`] once
///   there is something to combine them with.
/// - A numeric start value of the other numeric kind promotes the result to float.
///
/// Failures are returned as [`Outcome::Failed`], never raised.
pub fn combine_values(values: &[Value], options: &CombineOptions) -> Combined {
    let Some((first, rest)) = values.split_first() else {
        return Outcome::Done(
            options
                .start_value
                .clone()
                .unwrap_or_else(|| Value::Utf8(String::new())),
        );
    };

    let (mut acc, offset, pending) = match &options.start_value {
        Some(start) => (start.clone(), 0, values),
        None => (first.clone(), 1, rest),
    };

    for (i, next) in pending.iter().enumerate() {
        if next.type_name() != first.type_name() {
            return Outcome::Failed(CombineError::TypeMismatch {
                expected: first.type_name(),
                found: next.type_name(),
                position: offset + i,
            });
        }
        acc = match combine_pair(acc, next, &options.separator) {
            Ok(v) => v,
            Err(e) => return Outcome::Failed(e),
        };
    }
    Outcome::Done(acc)
}

fn combine_pair(acc: Value, next: &Value, separator: &str) -> Result<Value, CombineError> {
    match (acc, next) {
        (Value::Int64(a), Value::Int64(b)) => a.combine_with(*b, separator).map(Value::Int64),
        (Value::Float64(a), Value::Float64(b)) => a.combine_with(*b, separator).map(Value::Float64),
        (Value::Int64(a), Value::Float64(b)) => {
            (a as f64).combine_with(*b, separator).map(Value::Float64)
        }
        (Value::Float64(a), Value::Int64(b)) => {
            a.combine_with(*b as f64, separator).map(Value::Float64)
        }
        (Value::Utf8(a), Value::Utf8(b)) => a.combine_with(b.clone(), separator).map(Value::Utf8),
        (acc, next @ (Value::Int64(_) | Value::Float64(_) | Value::Utf8(_))) => {
            Err(CombineError::Arithmetic {
                message: format!(
                    "unsupported operand types for combination: '{}' and '{}'",
                    acc.type_name(),
                    next.type_name()
                ),
            })
        }
        (_, next) => Err(CombineError::UnsupportedType {
            type_name: next.type_name(),
        }),
    }
}
