//! `rust-collection-processing` provides shape-preserving map and filter utilities over
//! dynamically typed containers, plus a type-checked variadic combiner.
//!
//! The entrypoints are [`processing::process_data`], [`processing::filter_data`] and
//! [`processing::combine_values`].
//!
//! ## Container shapes
//!
//! Inputs are [`types::Container`]s. The transform and filter keep the input's shape:
//!
//! - [`types::Container::List`] stays a list
//! - [`types::Container::Tuple`] stays a fixed-size tuple
//! - [`types::Container::Map`] stays a mapping with the same keys
//! - [`types::Container::Deque`] and [`types::Container::Text`] are rebuilt as the same kind
//! - [`types::Container::Iter`] becomes a [`lazy::LazySeq`], evaluated on demand and single-pass
//! - [`types::Container::Scalar`] is rejected
//!
//! Elements are [`types::Value`]s: null, `i64`, `f64`, bool or text.
//!
//! ## Failures
//!
//! - Calls that cannot start return `Err(`[`ProcessingError`]`)`.
//! - Failures raised by the operation on an eager container come back as
//!   [`types::Outcome::Failed`], so printing a result shows either the data or the diagnostic.
//! - Lazy sequences yield failures when the failing element is pulled.
//!
//! ## Quick example
//!
//! ```rust
//! use rust_collection_processing::processing::builtins::{double, is_even, length};
//! use rust_collection_processing::processing::{
//!     combine_values, filter_data, process_data, CombineOptions,
//! };
//! use rust_collection_processing::types::{Container, Value};
//!
//! # fn main() -> Result<(), rust_collection_processing::ProcessingError> {
//! let doubled = process_data(Container::list([1_i64, 2, 3, 4, 5]), &double())?;
//! assert_eq!(doubled.to_string(), "[2, 4, 6, 8, 10]");
//!
//! let lengths = process_data(Container::tuple(["Alice", "Bob", "Charlie"]), &length())?;
//! assert_eq!(lengths.to_string(), "(5, 3, 7)");
//!
//! let evens = filter_data(Container::list([1_i64, 2, 3, 4, 5]), &is_even())?;
//! assert_eq!(evens.to_string(), "[2, 4]");
//!
//! let words = [Value::from("Hello"), Value::from("World")];
//! let joined = combine_values(&words, &CombineOptions::default().with_separator(" "));
//! assert_eq!(joined.to_string(), "Hello World");
//! # Ok(())
//! # }
//! ```
//!
//! ## Modules
//!
//! - [`processing`]: transform, filter and combine
//! - [`types`]: values, containers and outcomes
//! - [`lazy`]: single-pass lazy sequences
//! - [`ingestion`]: JSON to and from containers
//! - [`error`]: error types

pub mod error;
pub mod ingestion;
pub mod lazy;
pub mod processing;
pub mod types;

pub use error::{CombineError, DispatchFailure, OperationError, ProcessingError, ProcessingResult};
