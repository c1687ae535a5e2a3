//! JSON conversion for containers.
//!
//! Supported inputs:
//! - A JSON array of scalars: `[1, 2, 3]` becomes a `List`
//! - A JSON object of scalars: `{"a": 1}` becomes a `Map`
//! - A JSON string: `"abc"` becomes `Text`
//! - Any other JSON scalar becomes a `Scalar`
//! - Newline-delimited scalars (`1\n2\n`) become a `List`
//!
//! Nested arrays and objects are rejected; elements are flat [`Value`]s.

use crate::error::{ProcessingError, ProcessingResult};
use crate::types::{Container, Value};

/// Parse JSON text into a [`Container`].
pub fn container_from_json_str(input: &str) -> ProcessingResult<Container> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return Err(ProcessingError::InvalidInput {
            message: "json input is empty".to_string(),
        });
    }

    // First try parsing as a single JSON value.
    if let Ok(v) = serde_json::from_str::<serde_json::Value>(trimmed) {
        return container_from_json(v);
    }

    // Fall back to newline-delimited scalars.
    let mut items = Vec::new();
    for (i, line) in trimmed.lines().enumerate() {
        let line = line.trim();
        if line.is_empty() {
            continue;
        }
        let v = serde_json::from_str::<serde_json::Value>(line).map_err(|e| {
            ProcessingError::InvalidInput {
                message: format!("invalid ndjson at line {}: {}", i + 1, e),
            }
        })?;
        items.push(value_from_json(v)?);
    }
    Ok(Container::List(items))
}

/// Convert a parsed JSON document into a [`Container`].
pub fn container_from_json(value: serde_json::Value) -> ProcessingResult<Container> {
    match value {
        serde_json::Value::Array(items) => items
            .into_iter()
            .map(value_from_json)
            .collect::<ProcessingResult<Vec<_>>>()
            .map(Container::List),
        serde_json::Value::Object(entries) => entries
            .into_iter()
            .map(|(k, v)| value_from_json(v).map(|v| (k, v)))
            .collect::<ProcessingResult<_>>()
            .map(Container::Map),
        other => value_from_json(other).map(Container::from),
    }
}

/// Convert a JSON scalar into a [`Value`] through its `Deserialize` impl.
///
/// Integers that fit in `i64` become [`Value::Int64`]; other numbers become [`Value::Float64`].
pub fn value_from_json(value: serde_json::Value) -> ProcessingResult<Value> {
    if value.is_array() || value.is_object() {
        return Err(ProcessingError::InvalidInput {
            message: "nested arrays and objects are not supported as elements".to_string(),
        });
    }
    Ok(serde_json::from_value(value)?)
}

/// Render a [`Value`] as JSON through its `Serialize` impl. Non-finite floats become `null`.
pub fn value_to_json(value: &Value) -> ProcessingResult<serde_json::Value> {
    Ok(serde_json::to_value(value)?)
}

/// Render an eager container as JSON.
///
/// Lists, tuples and deques become arrays, maps become objects, text becomes a string.
/// Lazy sequences cannot be rendered without consuming them and are rejected with
/// [`ProcessingError::UnsupportedType`].
pub fn container_to_json(container: &Container) -> ProcessingResult<serde_json::Value> {
    match container {
        Container::List(items) => array(items.iter()),
        Container::Tuple(items) => array(items.iter()),
        Container::Deque(items) => array(items.iter()),
        Container::Map(entries) => entries
            .iter()
            .map(|(k, v)| value_to_json(v).map(|v| (k.clone(), v)))
            .collect::<ProcessingResult<serde_json::Map<_, _>>>()
            .map(serde_json::Value::Object),
        Container::Text(text) => Ok(serde_json::Value::String(text.clone())),
        Container::Scalar(value) => value_to_json(value),
        Container::Iter(_) => Err(ProcessingError::UnsupportedType {
            type_name: container.type_name(),
        }),
    }
}

fn array<'a>(items: impl Iterator<Item = &'a Value>) -> ProcessingResult<serde_json::Value> {
    items
        .map(value_to_json)
        .collect::<ProcessingResult<Vec<_>>>()
        .map(serde_json::Value::Array)
}

#[cfg(test)]
mod tests {
    use super::{container_from_json_str, container_to_json, value_from_json, value_to_json};
    use crate::error::ProcessingError;
    use crate::types::{Container, Value};

    #[test]
    fn arrays_become_lists_and_objects_become_maps() {
        assert_eq!(
            container_from_json_str("[1, 2.5, \"x\", null, true]").unwrap(),
            Container::List(vec![
                Value::Int64(1),
                Value::Float64(2.5),
                Value::from("x"),
                Value::Null,
                Value::Bool(true),
            ])
        );
        assert_eq!(
            container_from_json_str(r#"{"a": 10, "b": 20}"#).unwrap(),
            Container::map([("a", 10_i64), ("b", 20)])
        );
    }

    #[test]
    fn strings_become_text_and_numbers_scalars() {
        assert_eq!(
            container_from_json_str("\"abc\"").unwrap(),
            Container::Text("abc".to_string())
        );
        assert_eq!(
            container_from_json_str("42").unwrap(),
            Container::Scalar(Value::Int64(42))
        );
    }

    #[test]
    fn ndjson_scalars_become_a_list() {
        assert_eq!(
            container_from_json_str("1\n\n2\n").unwrap(),
            Container::list([1_i64, 2])
        );
    }

    #[test]
    fn nested_and_empty_inputs_are_rejected() {
        assert!(matches!(
            container_from_json_str("[[1]]"),
            Err(ProcessingError::InvalidInput { .. })
        ));
        assert!(matches!(
            container_from_json_str("   "),
            Err(ProcessingError::InvalidInput { .. })
        ));
    }

    #[test]
    fn renders_eager_containers() {
        let json = container_to_json(&Container::tuple([5_i64, 3, 7])).unwrap();
        assert_eq!(json, serde_json::json!([5, 3, 7]));
        let json = container_to_json(&Container::list([f64::NAN])).unwrap();
        assert_eq!(json, serde_json::json!([null]));
        assert!(container_to_json(&Container::lazy(Vec::new())).is_err());
    }

    #[test]
    fn values_round_trip_through_serde() {
        let values = vec![
            Value::Null,
            Value::Bool(false),
            Value::Int64(-3),
            Value::Int64(i64::MAX),
            Value::Float64(2.5),
            Value::Float64(1.0),
            Value::from("x"),
        ];
        for value in values {
            let json = value_to_json(&value).unwrap();
            assert_eq!(value_from_json(json).unwrap(), value);
        }
    }

    #[test]
    fn numbers_pick_int_before_float() {
        assert_eq!(value_from_json(serde_json::json!(7)).unwrap(), Value::Int64(7));
        assert_eq!(value_from_json(serde_json::json!(7.5)).unwrap(), Value::Float64(7.5));
        assert_eq!(
            value_from_json(serde_json::json!(u64::MAX)).unwrap(),
            Value::Float64(u64::MAX as f64)
        );
        assert_eq!(
            value_to_json(&Value::Float64(f64::INFINITY)).unwrap(),
            serde_json::Value::Null
        );
    }
}
