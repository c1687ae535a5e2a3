//! Shared plumbing for the shape-preserving utilities.

use std::fmt;
use std::sync::Arc;

use crate::error::{DispatchFailure, OperationError, ProcessingError};
use crate::types::{Container, Outcome, Value};

use super::observer::{ProcessingEvent, ProcessingObserver};
use super::operation::{Operation, OperationFn};

/// Result of an eager transform or filter: the reshaped container, or the failure as data.
pub type Processed = Outcome<Container, DispatchFailure>;

/// Which shape-preserving utility is running.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stage {
    /// [`super::process_data`].
    Transform,
    /// [`super::filter_data`].
    Filter,
}

impl Stage {
    /// Prefix used when a failure is rendered as data.
    pub fn label(self) -> &'static str {
        match self {
            Self::Transform => "Data processing",
            Self::Filter => "Data filtering",
        }
    }

    fn argument(self) -> &'static str {
        match self {
            Self::Transform => "operation",
            Self::Filter => "predicate",
        }
    }
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Transform => f.write_str("transform"),
            Self::Filter => f.write_str("filter"),
        }
    }
}

/// Options controlling the transform and filter utilities.
///
/// Use [`Default`] for common cases.
#[derive(Clone, Default)]
pub struct ProcessingOptions {
    /// Optional observer for logging.
    pub observer: Option<Arc<dyn ProcessingObserver>>,
}

impl ProcessingOptions {
    /// Attach an observer.
    pub fn with_observer(mut self, observer: Arc<dyn ProcessingObserver>) -> Self {
        self.observer = Some(observer);
        self
    }

    pub(crate) fn emit(&self, event: ProcessingEvent) {
        if let Some(o) = &self.observer {
            o.on_event(&event);
        }
    }
}

impl fmt::Debug for ProcessingOptions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ProcessingOptions")
            .field("observer_set", &self.observer.is_some())
            .finish()
    }
}

/// A text scalar is dispatched, and reported, as [`Container::Text`].
pub(crate) fn normalize(data: Container) -> Container {
    match data {
        Container::Scalar(value @ Value::Utf8(_)) => Container::from(value),
        other => other,
    }
}

/// Resolve the callable, rejecting non-callable operations before anything else runs.
pub(crate) fn require_callable(
    stage: Stage,
    operation: &Operation,
    options: &ProcessingOptions,
) -> Result<OperationFn, ProcessingError> {
    match operation.callable() {
        Some(f) => Ok(Arc::clone(f)),
        None => Err(reject(
            stage,
            options,
            ProcessingError::NotCallable {
                argument: stage.argument(),
                type_name: operation.type_name(),
            },
        )),
    }
}

pub(crate) fn reject(
    stage: Stage,
    options: &ProcessingOptions,
    error: ProcessingError,
) -> ProcessingError {
    options.emit(ProcessingEvent::Rejected {
        stage,
        reason: error.to_string(),
    });
    error
}

/// Turn an eager branch result into an [`Outcome`], reporting it to the observer.
pub(crate) fn finish(
    stage: Stage,
    shape: &'static str,
    options: &ProcessingOptions,
    result: Result<Container, OperationError>,
) -> Processed {
    match result {
        Ok(container) => {
            options.emit(ProcessingEvent::Finished {
                stage,
                shape,
                elements: container.len().unwrap_or(0),
            });
            Outcome::Done(container)
        }
        Err(source) => {
            options.emit(ProcessingEvent::OperationFailed {
                stage,
                shape,
                error: source.clone(),
            });
            Outcome::Failed(DispatchFailure { stage, source })
        }
    }
}
