use criterion::{black_box, criterion_group, BatchSize, Criterion};
use pprof::criterion::{Output, PProfProfiler};

use huffman_hff::huffman::decoder::HuffmanDecoder;
use huffman_hff::huffman::encode;

use crate::benchmarks::get_symbols;

fn decode_benchmark(c: &mut Criterion) {
    let symbols = get_symbols();
    let prelude = encode(&symbols).unwrap();

    let mut group = c.benchmark_group("decoder benchmark");
    group.measurement_time(std::time::Duration::from_secs(10));
    group.throughput(criterion::Throughput::Elements(symbols.len() as u64));
    group.sample_size(10);
    group.bench_function("decoding", |b| {
        b.iter_batched(
            || black_box(HuffmanDecoder::new(&prelude.table)),
            |decoder| decoder.decode_all(&prelude.payload),
            BatchSize::SmallInput,
        )
    });
    group.finish();
}

criterion_group! {
    name = decoder_benches;
    config = Criterion::default().with_profiler(PProfProfiler::new(100, Output::Flamegraph(None)));
    targets = decode_benchmark
}
