use criterion::{black_box, criterion_group, BatchSize, Criterion};
use pprof::criterion::{Output, PProfProfiler};

use huffman_hff::huffman::encoder::HuffmanEncoder;
use huffman_hff::huffman::{CodeTable, FrequencyList, HuffmanTree};

use crate::benchmarks::get_symbols;

fn encoding_benchmark(c: &mut Criterion) {
    let symbols = get_symbols();
    let table: CodeTable = HuffmanTree::build(&FrequencyList::from_bytes(&symbols)).into_code_table();

    let mut group = c.benchmark_group("encoder benchmark");
    group.throughput(criterion::Throughput::Elements(symbols.len() as u64));
    group.sample_size(10);
    group.bench_function("encoding", |b| {
        b.iter_batched(
            || black_box(HuffmanEncoder::new(table.clone())),
            |mut encoder| encoder.encode_all(&symbols).map(|_| encoder.serialize()),
            BatchSize::SmallInput,
        )
    });
    group.finish();
}

criterion_group! {
    name = encoder_benches;
    config = Criterion::default().with_profiler(PProfProfiler::new(100, Output::Flamegraph(None)));
    targets = encoding_benchmark
}
