use criterion::{BatchSize, Criterion, black_box, criterion_group, criterion_main};
use rust_collection_processing::processing::builtins::{double, is_even};
use rust_collection_processing::processing::{
    CombineOptions, combine_values, filter_data, process_data,
};
use rust_collection_processing::types::{Container, Value};

fn bench_dispatch(c: &mut Criterion) {
    let mut group = c.benchmark_group("dispatch");
    let op = double();
    let pred = is_even();

    group.bench_function("transform_list_10k", |b| {
        b.iter_batched(
            || Container::list(0..10_000_i64),
            |data| black_box(process_data(data, &op)),
            BatchSize::SmallInput,
        );
    });

    group.bench_function("transform_map_1k", |b| {
        b.iter_batched(
            || Container::map((0..1_000_i64).map(|i| (format!("k{i}"), i))),
            |data| black_box(process_data(data, &op)),
            BatchSize::SmallInput,
        );
    });

    group.bench_function("filter_lazy_10k", |b| {
        b.iter(|| {
            let data = Container::lazy((0..10_000_i64).map(Value::Int64));
            let out = filter_data(data, &pred).ok().and_then(|o| o.done());
            black_box(out.and_then(Container::into_lazy).map(Iterator::count))
        });
    });

    group.finish();
}

fn bench_combine(c: &mut Criterion) {
    let ints: Vec<Value> = (0..10_000_i64).map(Value::Int64).collect();
    let words: Vec<Value> = (0..1_000).map(|i| Value::Utf8(format!("w{i}"))).collect();
    let sep = CombineOptions::default().with_separator(" ");

    c.bench_function("combine_ints_10k", |b| {
        b.iter(|| black_box(combine_values(&ints, &CombineOptions::default())))
    });
    c.bench_function("combine_words_1k", |b| {
        b.iter(|| black_box(combine_values(&words, &sep)))
    });
}

criterion_group!(benches, bench_dispatch, bench_combine);
criterion_main!(benches);
