use thiserror::Error;

use crate::processing::Stage;

/// Convenience result type for the fail-fast processing path.
pub type ProcessingResult<T> = Result<T, ProcessingError>;

/// Errors that terminate a call immediately.
///
/// Failures raised by a caller-supplied operation are *not* reported here; eager branches return
/// them as data (see [`crate::types::Outcome`]) and lazy branches yield them on consumption.
#[derive(Debug, Error)]
pub enum ProcessingError {
    /// The container kind cannot be iterated (for example a bare number).
    #[error("collection type '{type_name}' is not supported")]
    UnsupportedType { type_name: &'static str },

    /// A non-callable value was passed where an operation or predicate was expected.
    #[error("argument '{argument}' must be a function, got '{type_name}'")]
    NotCallable {
        argument: &'static str,
        type_name: &'static str,
    },

    /// JSON input could not be parsed.
    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),

    /// JSON input parsed but does not describe a supported container.
    #[error("invalid input: {message}")]
    InvalidInput { message: String },
}

/// A failure raised while applying an operation to a single element.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum OperationError {
    /// The operation does not accept elements of this type.
    #[error("unsupported operand type for {operation}: '{type_name}'")]
    UnsupportedOperand {
        operation: &'static str,
        type_name: &'static str,
    },

    /// Integer arithmetic overflowed.
    #[error("integer overflow in {operation}")]
    Overflow { operation: &'static str },

    /// A rebuilt container cannot hold the value the operation produced.
    #[error("cannot rebuild {container} from element of type '{found}'")]
    Rebuild {
        container: &'static str,
        found: &'static str,
    },

    /// The operation was applied directly but is not callable.
    #[error("'{type_name}' object is not callable")]
    NotCallable { type_name: &'static str },

    /// Free-form failure raised by a caller closure.
    #[error("{0}")]
    Custom(String),
}

impl OperationError {
    /// Build a [`OperationError::Custom`] from any message.
    pub fn custom(message: impl Into<String>) -> Self {
        Self::Custom(message.into())
    }
}

/// An eager transform/filter failure, returned as data rather than raised.
///
/// Displays as `Data processing error: ...` or `Data filtering error: ...`.
#[derive(Debug, Clone, PartialEq, Error)]
#[error("{} error: {source}", .stage.label())]
pub struct DispatchFailure {
    /// Which utility produced the failure.
    pub stage: Stage,
    /// The element-level error that aborted the call.
    pub source: OperationError,
}

/// Diagnostics produced by the combiner.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum CombineError {
    /// An argument's type differs from the first argument's type.
    #[error(
        "Error: Argument types are not the same \
         (expected '{expected}', found '{found}' at position {position})."
    )]
    TypeMismatch {
        expected: &'static str,
        found: &'static str,
        position: usize,
    },

    /// Arguments share a type that has no combination rule.
    #[error("Error: Unsupported type for combination: '{type_name}'.")]
    UnsupportedType { type_name: &'static str },

    /// Numeric combination failed (integer overflow, incompatible start value).
    #[error("Value combination error: {message}")]
    Arithmetic { message: String },
}
