use rust_collection_processing::processing::builtins::{
    double, greater_than, is_even, length, longer_than,
};
use rust_collection_processing::processing::{
    CombineOptions, Operation, combine_values, filter_data, process_data,
};
use rust_collection_processing::types::{Container, Outcome, Value};
use rust_collection_processing::{CombineError, ProcessingError};

fn numbers() -> Container {
    Container::list([1_i64, 2, 3, 4, 5])
}

fn names() -> Container {
    Container::tuple(["Alice", "Bob", "Charlie"])
}

fn info() -> Container {
    Container::map([("a", 10_i64), ("b", 20), ("c", 30)])
}

fn done(out: Outcome<Container, rust_collection_processing::DispatchFailure>) -> Container {
    match out {
        Outcome::Done(c) => c,
        Outcome::Failed(e) => panic!("unexpected failure: {e}"),
    }
}

#[test]
fn doubles_a_list() {
    let out = done(process_data(numbers(), &double()).unwrap());
    assert_eq!(out, Container::list([2_i64, 4, 6, 8, 10]));
}

#[test]
fn maps_tuple_of_names_to_lengths() {
    let out = done(process_data(names(), &length()).unwrap());
    assert_eq!(out, Container::tuple([5_i64, 3, 7]));
}

#[test]
fn doubles_mapping_values() {
    let out = done(process_data(info(), &double()).unwrap());
    assert_eq!(out, Container::map([("a", 20_i64), ("b", 40), ("c", 60)]));
}

#[test]
fn filters_even_numbers() {
    let out = done(filter_data(numbers(), &is_even()).unwrap());
    assert_eq!(out, Container::list([2_i64, 4]));
}

#[test]
fn filters_long_names_and_large_values() {
    assert_eq!(
        done(filter_data(names(), &longer_than(3)).unwrap()),
        Container::tuple(["Alice", "Charlie"])
    );
    assert_eq!(
        done(filter_data(info(), &greater_than(15.0)).unwrap()),
        Container::map([("b", 20_i64), ("c", 30)])
    );
}

#[test]
fn sums_with_zero_start() {
    let values: Vec<Value> = [1_i64, 2, 3, 4].into_iter().map(Value::Int64).collect();
    let out = combine_values(&values, &CombineOptions::default().with_start_value(0_i64));
    assert_eq!(out, Outcome::Done(Value::Int64(10)));
}

#[test]
fn joins_words() {
    let out = combine_values(
        &[Value::from("Hello"), Value::from("World")],
        &CombineOptions::default().with_separator(" "),
    );
    assert_eq!(out, Outcome::Done(Value::from("Hello World")));
}

#[test]
fn mixed_combine_is_an_error_value() {
    let out = combine_values(&[Value::Int64(1), Value::from("a")], &CombineOptions::default());
    assert!(matches!(out, Outcome::Failed(CombineError::TypeMismatch { .. })));
}

#[test]
fn transform_preserves_length_and_elementwise_results() {
    let inputs: Vec<i64> = vec![-7, 0, 3, 1_000, i64::MAX / 2];
    let out = done(process_data(Container::list(inputs.clone()), &double()).unwrap());
    let items = out.as_list().unwrap();
    assert_eq!(items.len(), inputs.len());
    for (got, x) in items.iter().zip(&inputs) {
        assert_eq!(got, &Value::Int64(x * 2));
    }
}

#[test]
fn filter_never_grows_and_keeps_relative_order() {
    let inputs = vec![9_i64, 4, 7, 2, 2, 8, 1];
    let out = done(filter_data(Container::list(inputs.clone()), &is_even()).unwrap());
    let kept: Vec<i64> = out.as_list().unwrap().iter().filter_map(Value::as_i64).collect();
    assert!(kept.len() <= inputs.len());
    let expected: Vec<i64> = inputs.into_iter().filter(|n| n % 2 == 0).collect();
    assert_eq!(kept, expected);
}

#[test]
fn filtering_is_idempotent() {
    let deque: fn() -> Container = || Container::deque([3_i64, 6, 8]);
    for make in [numbers as fn() -> Container, deque, info] {
        let once = done(filter_data(make(), &greater_than(2.0)).unwrap());
        let again = done(filter_data(make(), &greater_than(2.0)).unwrap());
        let twice = done(filter_data(again, &greater_than(2.0)).unwrap());
        assert_eq!(twice, once);
    }
}

#[test]
fn lazy_result_is_empty_on_second_consumption() {
    let input = Container::lazy((1..=4).map(Value::Int64));
    let out = done(process_data(input, &double()).unwrap());
    let mut seq = out.into_lazy().unwrap();

    let first = seq.drain_values().unwrap();
    assert_eq!(first, [2_i64, 4, 6, 8].map(Value::Int64).to_vec());
    assert!(seq.drain_values().unwrap().is_empty());
    assert_eq!(seq.by_ref().count(), 0);
}

#[test]
fn transform_of_filtered_lazy_sequence_chains_without_evaluating() {
    let input = Container::lazy((1..).map(Value::Int64));
    let evens = done(filter_data(input, &is_even()).unwrap());
    let doubled = done(process_data(evens, &double()).unwrap());
    let seq = doubled.into_lazy().unwrap();
    let head: Vec<Value> = seq.take(3).map(Result::unwrap).collect();
    assert_eq!(head, [4_i64, 8, 12].map(Value::Int64).to_vec());
}

#[test]
fn invalid_operation_fails_fast_in_both_utilities() {
    let op = Operation::from(Value::from("not_a_function"));
    assert!(matches!(
        process_data(Container::list([1_i64, 2]), &op),
        Err(ProcessingError::NotCallable { argument: "operation", .. })
    ));
    assert!(matches!(
        filter_data(Container::list([1_i64, 2]), &op),
        Err(ProcessingError::NotCallable { argument: "predicate", .. })
    ));
}

#[test]
fn scalars_are_unsupported_by_both_utilities() {
    for op in [double(), is_even()] {
        let err = process_data(Container::Scalar(Value::Float64(1.0)), &op).unwrap_err();
        assert_eq!(err.to_string(), "collection type 'float64' is not supported");
        let err = filter_data(Container::Scalar(Value::Null), &op).unwrap_err();
        assert_eq!(err.to_string(), "collection type 'null' is not supported");
    }
}

#[test]
fn printed_results_show_data_or_diagnostic() {
    let ok = process_data(info(), &double()).unwrap();
    assert_eq!(ok.to_string(), r#"{"a": 20, "b": 40, "c": 60}"#);

    let failed = process_data(Container::list([i64::MAX]), &double()).unwrap();
    assert_eq!(failed.to_string(), "Data processing error: integer overflow in double");
}
