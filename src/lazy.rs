//! Single-pass lazy sequences.
//!
//! A [`LazySeq`] is what the transform and filter utilities return for generic iterables. It is
//! forward-only and cannot be restarted: it is not `Clone`, every consumer pulls through
//! `&mut self`, and once exhausted it stays exhausted, so a second consumption yields nothing.
//!
//! Items are `Result`s because evaluation is deferred: an operation that fails on an element
//! surfaces its error only when that element is pulled.

use std::fmt;
use std::iter::Fuse;

use crate::error::OperationError;
use crate::types::Value;

type Items = Box<dyn Iterator<Item = Result<Value, OperationError>>>;

/// A forward-only, single-pass, possibly infinite sequence of values.
pub struct LazySeq {
    items: Fuse<Items>,
    pulled: usize,
}

impl LazySeq {
    /// Wrap an iterator of values.
    pub fn new<I>(items: I) -> Self
    where
        I: IntoIterator<Item = Value>,
        I::IntoIter: 'static,
    {
        Self::from_results(items.into_iter().map(Ok))
    }

    /// Wrap an iterator whose items may already carry deferred failures.
    pub fn from_results<I>(items: I) -> Self
    where
        I: IntoIterator<Item = Result<Value, OperationError>>,
        I::IntoIter: 'static,
    {
        let items: Items = Box::new(items.into_iter());
        Self {
            items: items.fuse(),
            pulled: 0,
        }
    }

    /// Number of items pulled so far, failures included.
    pub fn pulled(&self) -> usize {
        self.pulled
    }

    /// Chain a fallible per-element operation. Nothing runs until an item is pulled.
    ///
    /// Upstream failures pass through untouched.
    pub fn map_values<F>(self, mut f: F) -> Self
    where
        F: FnMut(Value) -> Result<Value, OperationError> + 'static,
    {
        Self::from_results(self.map(move |item| item.and_then(&mut f)))
    }

    /// Chain a fallible predicate, keeping elements for which it returns `true`.
    ///
    /// A failing predicate yields the failure in place of the element.
    pub fn filter_values<F>(self, mut keep: F) -> Self
    where
        F: FnMut(&Value) -> Result<bool, OperationError> + 'static,
    {
        Self::from_results(self.filter_map(move |item| match item {
            Ok(value) => match keep(&value) {
                Ok(true) => Some(Ok(value)),
                Ok(false) => None,
                Err(e) => Some(Err(e)),
            },
            Err(e) => Some(Err(e)),
        }))
    }

    /// Pull every remaining item, stopping at the first failure.
    ///
    /// Calling this again after it returned `Ok` yields an empty vector.
    pub fn drain_values(&mut self) -> Result<Vec<Value>, OperationError> {
        self.by_ref().collect()
    }
}

impl Iterator for LazySeq {
    type Item = Result<Value, OperationError>;

    fn next(&mut self) -> Option<Self::Item> {
        let item = self.items.next()?;
        self.pulled += 1;
        Some(item)
    }
}

impl fmt::Debug for LazySeq {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LazySeq")
            .field("pulled", &self.pulled)
            .finish_non_exhaustive()
    }
}
