//! Shape-preserving filter.

use std::collections::BTreeMap;

use crate::error::{OperationError, ProcessingError, ProcessingResult};
use crate::types::{Container, Value};

use super::dispatch::{
    Processed, ProcessingOptions, Stage, finish, normalize, reject, require_callable,
};
use super::observer::ProcessingEvent;
use super::operation::{Operation, OperationFn};

/// Keep the elements of `data` for which `predicate` returns a truthy value.
///
/// Dispatch and shape rules are the same as [`super::process_data`]. For `Map` inputs the
/// predicate sees each value and kept entries retain their key. Kept elements stay in their
/// original relative order, so the output never has more elements than the input.
///
/// A non-callable `predicate` is rejected with [`ProcessingError::NotCallable`].
pub fn filter_data(data: Container, predicate: &Operation) -> ProcessingResult<Processed> {
    filter_data_with_options(data, predicate, &ProcessingOptions::default())
}

/// [`filter_data`] with an observer attached via `options`.
pub fn filter_data_with_options(
    data: Container,
    predicate: &Operation,
    options: &ProcessingOptions,
) -> ProcessingResult<Processed> {
    const STAGE: Stage = Stage::Filter;

    let keep = require_callable(STAGE, predicate, options)?;
    let data = normalize(data);
    let shape = data.type_name();
    options.emit(ProcessingEvent::Started { stage: STAGE, shape });

    let result = match data {
        Container::List(items) => retain(items, &keep).map(Container::List),
        Container::Tuple(items) => retain(items.into_vec(), &keep).map(Container::Tuple),
        Container::Map(entries) => entries
            .into_iter()
            .filter_map(|(k, v)| match is_kept(&keep, &v) {
                Ok(true) => Some(Ok((k, v))),
                Ok(false) => None,
                Err(e) => Some(Err(e)),
            })
            .collect::<Result<BTreeMap<_, _>, _>>()
            .map(Container::Map),
        Container::Deque(items) => retain(items, &keep).map(Container::Deque),
        Container::Text(text) => {
            let chars = text.chars().map(|c| Value::Utf8(c.to_string()));
            retain(chars, &keep).map(|kept: Vec<Value>| {
                Container::Text(kept.iter().filter_map(Value::as_str).collect())
            })
        }
        Container::Iter(seq) => {
            options.emit(ProcessingEvent::Deferred { stage: STAGE, shape });
            let out = seq.filter_values(move |v| is_kept(&keep, v));
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

fn is_kept(keep: &OperationFn, value: &Value) -> Result<bool, OperationError> {
    keep(value).map(|verdict| verdict.is_truthy())
}

/// Collect the kept elements into any target collection, stopping at the first failure.
fn retain<I, C>(items: I, keep: &OperationFn) -> Result<C, OperationError>
where
    I: IntoIterator<Item = Value>,
    C: FromIterator<Value>,
{
    items
        .into_iter()
        .filter_map(|v| match is_kept(keep, &v) {
            Ok(true) => Some(Ok(v)),
            Ok(false) => None,
            Err(e) => Some(Err(e)),
        })
        .collect()
}
