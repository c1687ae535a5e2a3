//! Caller-supplied unary operations and predicates.

use std::fmt;
use std::sync::Arc;

use crate::error::OperationError;
use crate::types::Value;

/// Shared callable behind [`Operation::Callable`].
pub type OperationFn = Arc<dyn Fn(&Value) -> Result<Value, OperationError> + Send + Sync>;

/// A unary operation passed to [`super::process_data`] or [`super::filter_data`].
///
/// Predicates are operations too: the filter keeps an element when the returned value is
/// truthy (see [`Value::is_truthy`]).
///
/// [`Operation::NotCallable`] models a plain value handed over where a function was expected.
/// Both utilities reject it up front with [`crate::ProcessingError::NotCallable`].
#[derive(Clone)]
pub enum Operation {
    /// A callable operation.
    Callable(OperationFn),
    /// A value that cannot be called.
    NotCallable(Value),
}

impl Operation {
    /// Wrap an infallible function.
    pub fn new<F>(f: F) -> Self
    where
        F: Fn(&Value) -> Value + Send + Sync + 'static,
    {
        Self::Callable(Arc::new(move |v| Ok(f(v))))
    }

    /// Wrap a function that may fail on some elements.
    pub fn fallible<F>(f: F) -> Self
    where
        F: Fn(&Value) -> Result<Value, OperationError> + Send + Sync + 'static,
    {
        Self::Callable(Arc::new(f))
    }

    /// Wrap a boolean predicate.
    pub fn predicate<F>(f: F) -> Self
    where
        F: Fn(&Value) -> bool + Send + Sync + 'static,
    {
        Self::Callable(Arc::new(move |v| Ok(Value::Bool(f(v)))))
    }

    pub fn is_callable(&self) -> bool {
        matches!(self, Self::Callable(_))
    }

    /// Type name of the operation itself (`"function"` when callable).
    pub fn type_name(&self) -> &'static str {
        match self {
            Self::Callable(_) => "function",
            Self::NotCallable(v) => v.type_name(),
        }
    }

    /// Apply to a single element.
    pub fn apply(&self, value: &Value) -> Result<Value, OperationError> {
        match self {
            Self::Callable(f) => f(value),
            Self::NotCallable(v) => Err(OperationError::NotCallable {
                type_name: v.type_name(),
            }),
        }
    }

    pub(crate) fn callable(&self) -> Option<&OperationFn> {
        match self {
            Self::Callable(f) => Some(f),
            Self::NotCallable(_) => None,
        }
    }
}

impl From<Value> for Operation {
    fn from(value: Value) -> Self {
        Self::NotCallable(value)
    }
}

impl fmt::Debug for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Callable(_) => f.write_str("Operation::Callable(..)"),
            Self::NotCallable(v) => f.debug_tuple("Operation::NotCallable").field(v).finish(),
        }
    }
}
