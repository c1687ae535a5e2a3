//! Shape-preserving transform.

use std::collections::{BTreeMap, VecDeque};

use crate::error::{OperationError, ProcessingError, ProcessingResult};
use crate::types::{Container, Value};

use super::dispatch::{
    Processed, ProcessingOptions, Stage, finish, normalize, reject, require_callable,
};
use super::observer::ProcessingEvent;
use super::operation::Operation;

/// Apply `operation` to every element of `data`, keeping the container's shape.
///
/// | input            | output                                    |
/// |------------------|-------------------------------------------|
/// | `List`           | `List`, same order                        |
/// | `Tuple`          | `Tuple`, same order and length            |
/// | `Map`            | `Map`, same keys, transformed values      |
/// | `Deque` / `Text` | same kind, rebuilt from the results       |
/// | `Iter`           | `Iter`, evaluated when pulled             |
/// | `Scalar`         | [`ProcessingError::UnsupportedType`]      |
///
/// On eager shapes the first failing element aborts the call and the failure is returned as
/// [`crate::types::Outcome::Failed`]. On `Iter` nothing runs until the caller pulls an item.
///
/// A non-callable `operation` is rejected with [`ProcessingError::NotCallable`] before the
/// container is looked at.
///
/// ```rust
/// use rust_collection_processing::processing::{process_data, Operation};
/// use rust_collection_processing::types::{Container, Value};
///
/// let double = Operation::new(|v| match v {
///     Value::Int64(n) => Value::Int64(n * 2),
///     other => other.clone(),
/// });
/// let out = process_data(Container::list([1_i64, 2, 3]), &double).unwrap();
/// assert_eq!(out.done(), Some(Container::list([2_i64, 4, 6])));
/// ```
pub fn process_data(data: Container, operation: &Operation) -> ProcessingResult<Processed> {
    process_data_with_options(data, operation, &ProcessingOptions::default())
}

/// [`process_data`] with an observer attached via `options`.
pub fn process_data_with_options(
    data: Container,
    operation: &Operation,
    options: &ProcessingOptions,
) -> ProcessingResult<Processed> {
    const STAGE: Stage = Stage::Transform;

    let f = require_callable(STAGE, operation, options)?;
    let data = normalize(data);
    let shape = data.type_name();
    options.emit(ProcessingEvent::Started { stage: STAGE, shape });

    let result = match data {
        Container::List(items) => items
            .iter()
            .map(|v| f(v))
            .collect::<Result<Vec<_>, _>>()
            .map(Container::List),
        Container::Tuple(items) => items
            .iter()
            .map(|v| f(v))
            .collect::<Result<Box<[_]>, _>>()
            .map(Container::Tuple),
        Container::Map(entries) => entries
            .into_iter()
            .map(|(k, v)| f(&v).map(|v| (k, v)))
            .collect::<Result<BTreeMap<_, _>, _>>()
            .map(Container::Map),
        Container::Deque(items) => items
            .iter()
            .map(|v| f(v))
            .collect::<Result<VecDeque<_>, _>>()
            .map(Container::Deque),
        Container::Text(text) => text
            .chars()
            .map(|c| f(&Value::Utf8(c.to_string())).and_then(into_text))
            .collect::<Result<String, _>>()
            .map(Container::Text),
        Container::Iter(seq) => {
            options.emit(ProcessingEvent::Deferred { stage: STAGE, shape });
            let out = seq.map_values(move |v| f(&v));
            return Ok(Processed::Done(Container::Iter(out)));
        }
        Container::Scalar(_) => {
            return Err(reject(
                STAGE,
                options,
                ProcessingError::UnsupportedType { type_name: shape },
            ));
        }
    };

    Ok(finish(STAGE, shape, options, result))
}

fn into_text(value: Value) -> Result<String, OperationError> {
    match value {
        Value::Utf8(s) => Ok(s),
        other => Err(OperationError::Rebuild {
            container: "text",
            found: other.type_name(),
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::process_data;
    use crate::error::{OperationError, ProcessingError};
    use crate::processing::builtins::double;
    use crate::processing::{Operation, Stage};
    use crate::types::{Container, Outcome, Value};

    #[test]
    fn list_stays_list() {
        let out = process_data(Container::list([1_i64, 2, 3, 4, 5]), &double()).unwrap();
        assert_eq!(out, Outcome::Done(Container::list([2_i64, 4, 6, 8, 10])));
    }

    #[test]
    fn tuple_stays_tuple() {
        let length = Operation::new(|v| Value::Int64(v.as_str().map_or(0, |s| s.len() as i64)));
        let out = process_data(Container::tuple(["Alice", "Bob", "Charlie"]), &length).unwrap();
        assert_eq!(out, Outcome::Done(Container::tuple([5_i64, 3, 7])));
    }

    #[test]
    fn map_keeps_keys() {
        let input = Container::map([("a", 10_i64), ("b", 20), ("c", 30)]);
        let out = process_data(input, &double()).unwrap();
        assert_eq!(
            out,
            Outcome::Done(Container::map([("a", 20_i64), ("b", 40), ("c", 60)]))
        );
    }

    #[test]
    fn deque_is_rebuilt_as_deque() {
        let out = process_data(Container::deque([1.5_f64, 2.0]), &double()).unwrap();
        assert_eq!(out, Outcome::Done(Container::deque([3.0_f64, 4.0])));
    }

    #[test]
    fn text_is_rebuilt_from_text_results() {
        let upper = Operation::new(|v| Value::Utf8(v.as_str().unwrap_or_default().to_uppercase()));
        let out = process_data(Container::Text("abc".to_string()), &upper).unwrap();
        assert_eq!(out, Outcome::Done(Container::Text("ABC".to_string())));
    }

    #[test]
    fn text_scalar_is_processed_as_text() {
        let upper = Operation::new(|v| Value::Utf8(v.as_str().unwrap_or_default().to_uppercase()));
        let out = process_data(Container::Scalar(Value::from("ab")), &upper).unwrap();
        assert_eq!(out, Outcome::Done(Container::Text("AB".to_string())));
    }

    #[test]
    fn text_rebuild_fails_as_data_on_non_text_results() {
        let length = Operation::new(|v| Value::Int64(v.as_str().map_or(0, |s| s.len() as i64)));
        let out = process_data(Container::from(Value::from("ab")), &length).unwrap();
        let failure = out.failed().unwrap();
        assert_eq!(failure.stage, Stage::Transform);
        assert_eq!(
            failure.source,
            OperationError::Rebuild {
                container: "text",
                found: "int64"
            }
        );
    }

    #[test]
    fn eager_failure_is_returned_as_data() {
        let input = Container::list(vec![Value::Int64(1), Value::from("x")]);
        let out = process_data(input, &double()).unwrap();
        assert!(out.is_failed());
        assert_eq!(
            out.to_string(),
            "Data processing error: unsupported operand type for double: 'utf8'"
        );
    }

    #[test]
    fn lazy_failure_is_deferred_until_pulled() {
        let input = Container::lazy(vec![Value::Int64(1), Value::from("x")]);
        let out = process_data(input, &double()).unwrap();
        let mut seq = out.done().and_then(Container::into_lazy).unwrap();
        assert_eq!(seq.pulled(), 0);
        assert_eq!(seq.next(), Some(Ok(Value::Int64(2))));
        assert!(matches!(seq.next(), Some(Err(OperationError::UnsupportedOperand { .. }))));
    }

    #[test]
    fn scalar_is_rejected() {
        let err = process_data(Container::Scalar(Value::Int64(5)), &double()).unwrap_err();
        assert!(matches!(
            err,
            ProcessingError::UnsupportedType { type_name: "int64" }
        ));
    }

    #[test]
    fn non_callable_operation_fails_fast() {
        let op = Operation::from(Value::from("not_a_function"));
        let err = process_data(Container::list([1_i64, 2]), &op).unwrap_err();
        assert_eq!(
            err.to_string(),
            "argument 'operation' must be a function, got 'utf8'"
        );
    }
}
