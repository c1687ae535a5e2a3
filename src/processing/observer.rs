use std::fmt;
use std::sync::Arc;

use crate::error::OperationError;

use super::Stage;

/// Events emitted by the transform and filter utilities.
#[derive(Debug, Clone, PartialEq)]
pub enum ProcessingEvent {
    /// Dispatch selected a branch for the input shape.
    Started { stage: Stage, shape: &'static str },
    /// An eager branch produced its output.
    Finished {
        stage: Stage,
        shape: &'static str,
        elements: usize,
    },
    /// A lazy branch returned without evaluating anything.
    Deferred { stage: Stage, shape: &'static str },
    /// An eager branch failed and the failure was returned as data.
    OperationFailed {
        stage: Stage,
        shape: &'static str,
        error: OperationError,
    },
    /// The call was rejected before dispatch.
    Rejected { stage: Stage, reason: String },
}

/// Observer hook for processing events.
pub trait ProcessingObserver: Send + Sync {
    fn on_event(&self, event: &ProcessingEvent);
}

/// Logs processing events to stderr.
#[derive(Debug, Default)]
pub struct StdErrObserver;

impl ProcessingObserver for StdErrObserver {
    fn on_event(&self, event: &ProcessingEvent) {
        match event {
            ProcessingEvent::Started { stage, shape } => {
                eprintln!("[{stage}][start] shape={shape}")
            }
            ProcessingEvent::Finished {
                stage,
                shape,
                elements,
            } => eprintln!("[{stage}][ok] shape={shape} elements={elements}"),
            ProcessingEvent::Deferred { stage, shape } => {
                eprintln!("[{stage}][deferred] shape={shape}")
            }
            ProcessingEvent::OperationFailed {
                stage,
                shape,
                error,
            } => eprintln!("[{stage}][failed] shape={shape} err={error}"),
            ProcessingEvent::Rejected { stage, reason } => {
                eprintln!("[{stage}][rejected] err={reason}")
            }
        }
    }
}

/// An observer that fans out events to a list of observers.
#[derive(Default)]
pub struct CompositeObserver {
    observers: Vec<Arc<dyn ProcessingObserver>>,
}

impl CompositeObserver {
    /// Create a new composite observer from a list of observers.
    pub fn new(observers: Vec<Arc<dyn ProcessingObserver>>) -> Self {
        Self { observers }
    }
}

impl fmt::Debug for CompositeObserver {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CompositeObserver")
            .field("observers_len", &self.observers.len())
            .finish()
    }
}

impl ProcessingObserver for CompositeObserver {
    fn on_event(&self, event: &ProcessingEvent) {
        for o in &self.observers {
            o.on_event(event);
        }
    }
}
