//! Prints the built-in scenarios, or runs the transform/filter over a JSON container.

use std::process::ExitCode;
use std::sync::Arc;

use clap::Parser;

use rust_collection_processing::ingestion::{container_from_json_str, container_to_json};
use rust_collection_processing::processing::builtins::{
    double, greater_than, is_even, length, longer_than,
};
use rust_collection_processing::processing::{
    CombineOptions, Operation, ProcessingOptions, StdErrObserver, combine_values,
    filter_data_with_options, process_data_with_options,
};
use rust_collection_processing::types::{Container, Value};
use rust_collection_processing::{ProcessingError, ProcessingResult};

#[derive(Debug, Parser)]
#[command(about = "Shape-preserving map/filter and variadic combine demo")]
struct Cli {
    /// Log processing events to stderr.
    #[arg(long)]
    observe: bool,

    /// Double every element of this JSON container and keep the even results,
    /// instead of printing the built-in scenarios.
    #[arg(long, value_name = "JSON")]
    input: Option<String>,
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    let mut options = ProcessingOptions::default();
    if cli.observe {
        options = options.with_observer(Arc::new(StdErrObserver));
    }

    let run = match &cli.input {
        Some(json) => run_input(json, &options),
        None => run_scenarios(&options),
    };
    match run {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {e}");
            ExitCode::FAILURE
        }
    }
}

fn run_input(json: &str, options: &ProcessingOptions) -> ProcessingResult<()> {
    let data = container_from_json_str(json)?;
    let doubled = process_data_with_options(data, &double(), options)?;
    println!("Doubled: {doubled}");
    let Some(doubled) = doubled.done() else {
        return Ok(());
    };
    let evens = filter_data_with_options(doubled, &is_even(), options)?;
    match evens.as_done().map(container_to_json) {
        Some(Ok(rendered)) => println!("Even results (json): {rendered}"),
        _ => println!("Even results: {evens}"),
    }
    Ok(())
}

fn run_scenarios(options: &ProcessingOptions) -> ProcessingResult<()> {
    let numbers = || Container::list([1_i64, 2, 3, 4, 5]);
    let names = || Container::tuple(["Alice", "Bob", "Charlie"]);
    let info = || Container::map([("a", 10_i64), ("b", 20), ("c", 30)]);

    let doubled_numbers = process_data_with_options(numbers(), &double(), options)?;
    println!("Doubled numbers: {doubled_numbers}");

    let lengths = process_data_with_options(names(), &length(), options)?;
    println!("Name lengths: {lengths}");

    let doubled_info = process_data_with_options(info(), &double(), options)?;
    println!("Doubled dictionary values: {doubled_info}");

    let even_numbers = filter_data_with_options(numbers(), &is_even(), options)?;
    println!("Even numbers: {even_numbers}");

    let long_names = filter_data_with_options(names(), &longer_than(3), options)?;
    println!("Long names: {long_names}");

    let big_info = filter_data_with_options(info(), &greater_than(15.0), options)?;
    println!("Dictionary values greater than 15: {big_info}");

    let ints = [1_i64, 2, 3, 4].map(Value::Int64);
    let sum = combine_values(&ints, &CombineOptions::default().with_start_value(0_i64));
    println!("Sum of numbers: {sum}");

    let words = [Value::from("Hello"), Value::from("World")];
    let sentence = combine_values(&words, &CombineOptions::default().with_separator(" "));
    println!("Combined string: {sentence}");

    let mixed = combine_values(
        &[Value::Int64(1), Value::from("a")],
        &CombineOptions::default(),
    );
    println!("Mixed type combination attempt: {mixed}");

    let not_a_function = Operation::from(Value::from("not_a_function"));
    match process_data_with_options(Container::list([1_i64, 2]), &not_a_function, options) {
        Ok(out) => println!("Invalid operation: {out}"),
        Err(e @ ProcessingError::NotCallable { .. }) => println!("Invalid operation: {e}"),
        Err(e) => return Err(e),
    }

    let mixed_sum = combine_values(
        &[Value::Int64(1), Value::Int64(2), Value::from("a")],
        &CombineOptions::default(),
    );
    println!("Attempt to sum with string: {mixed_sum}");

    Ok(())
}
