use criterion::{black_box, criterion_group, Criterion};
use pprof::criterion::{Output, PProfProfiler};

use huffman_hff::huffman::{FrequencyList, HuffmanTree};

use crate::benchmarks::get_symbols;

fn tree_building_bench(c: &mut Criterion) {
    let symbols = get_symbols();
    let freqs = FrequencyList::from_bytes(&symbols);

    let mut group = c.benchmark_group("tree building");
    group.throughput(criterion::Throughput::Elements(symbols.len() as u64));
    group.bench_function("frequencies", |b| {
        b.iter(|| FrequencyList::from_bytes(black_box(&symbols)))
    });
    group.bench_function("code table", |b| {
        b.iter(|| HuffmanTree::build(black_box(&freqs)).into_code_table())
    });
    group.finish();
}

criterion_group! {
    name = tree_building_benches;
    config = Criterion::default().with_profiler(PProfProfiler::new(100, Output::Flamegraph(None)));
    targets = tree_building_bench
}
