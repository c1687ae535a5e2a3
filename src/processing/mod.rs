//! Shape-preserving collection processing.
//!
//! Currently implemented:
//!
//! - [`process_data()`]: apply an operation to every element, keeping the container's shape
//! - [`filter_data()`]: keep elements matching a predicate, keeping the container's shape
//! - [`combine_values()`] / [`combine()`]: fold several values into one
//!
//! Two failure channels coexist:
//!
//! - calls that cannot start (non-callable operation, non-iterable input) return
//!   `Err(ProcessingError)`;
//! - failures raised by the operation itself on an eager container are returned as data,
//!   inside [`crate::types::Outcome::Failed`]. Lazy sequences defer them to consumption.
//!
//! ## Example: transform → filter → combine
//!
//! ```rust
//! use rust_collection_processing::processing::builtins::{double, greater_than};
//! use rust_collection_processing::processing::{
//!     combine_values, filter_data, process_data, CombineOptions,
//! };
//! use rust_collection_processing::types::{Container, Value};
//!
//! let doubled = process_data(Container::list([1_i64, 2, 3, 4, 5]), &double())
//!     .unwrap()
//!     .done()
//!     .unwrap();
//! let big = filter_data(doubled, &greater_than(5.0)).unwrap().done().unwrap();
//! let total = combine_values(big.as_list().unwrap(), &CombineOptions::default());
//! assert_eq!(total.done(), Some(Value::Int64(24)));
//! ```

pub mod builtins;
pub mod combine;
mod dispatch;
pub mod filter;
pub mod map;
mod observer;
mod operation;

pub use combine::{Combinable, CombineOptions, Combined, combine, combine_values};
pub use dispatch::{Processed, ProcessingOptions, Stage};
pub use filter::{filter_data, filter_data_with_options};
pub use map::{process_data, process_data_with_options};
pub use observer::{CompositeObserver, ProcessingEvent, ProcessingObserver, StdErrObserver};
pub use operation::{Operation, OperationFn};
