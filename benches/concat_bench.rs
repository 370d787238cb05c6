//! Benchmarks for streamprobe.
//!
//! Run with:
//!     cargo bench

use std::any::Any;

use bytes::Bytes;
use criterion::{Criterion, Throughput, black_box, criterion_group, criterion_main};

use streamprobe::{ArrayStream, StreamClassifier, concat, concat_bytes, is_byte_array};

fn bench_concat(c: &mut Criterion) {
    let mut group = c.benchmark_group("concat");

    // Total of 1 MiB split into different part counts
    for parts in [2usize, 64, 4096] {
        let size = 1024 * 1024 / parts;
        let chunks: Vec<Bytes> = (0..parts)
            .map(|i| Bytes::from(vec![(i * 7 + 13) as u8; size]))
            .collect();
        let refs: Vec<&dyn Any> = chunks.iter().map(|b| b as &dyn Any).collect();

        group.throughput(Throughput::Bytes((size * parts) as u64));
        group.bench_function(format!("bytes_{}_parts", parts), |b| {
            b.iter(|| black_box(concat_bytes(black_box(&chunks))).len())
        });
        group.bench_function(format!("dyn_{}_parts", parts), |b| {
            b.iter(|| black_box(concat(black_box(&refs)).map(|out| out.len())))
        });
    }

    group.finish();
}

fn bench_detect(c: &mut Criterion) {
    let mut group = c.benchmark_group("detect");
    let bytes = Bytes::from_static(b"abc");
    let borrowed: &'static [u8] = b"abc";
    let text = "abc";

    group.bench_function("bytes", |b| b.iter(|| is_byte_array(black_box(&bytes))));
    group.bench_function("borrowed_slice", |b| {
        b.iter(|| is_byte_array(black_box(&borrowed)))
    });
    group.bench_function("not_bytes", |b| b.iter(|| is_byte_array(black_box(&text))));

    let classifier = StreamClassifier::default();
    let stream = ArrayStream::new();
    group.bench_function("classify_array", |b| {
        b.iter(|| classifier.classify(Some(black_box(&stream))).ok())
    });
    group.bench_function("classify_none", |b| {
        b.iter(|| classifier.classify(Some(black_box(&42i32))).ok())
    });

    group.finish();
}

criterion_group!(benches, bench_concat, bench_detect);
criterion_main!(benches);
