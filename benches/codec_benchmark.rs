// benches/codec_benchmark.rs
use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use fragment_header::bench_helpers::{header_stream, populated_header};
use fragment_header::*;

fn benchmark_encode(c: &mut Criterion) {
    let header = populated_header(12345);
    c.bench_function("encode_le", |b| b.iter(|| header.to_bytes()));
    c.bench_function("encode_be", |b| b.iter(|| header.to_bytes_with(Endianness::Big)));
}

fn benchmark_decode_stream(c: &mut Criterion) {
    let mut group = c.benchmark_group("decode_stream");

    for count in [100usize, 10_000].iter() {
        let stream = header_stream(*count);
        group.throughput(Throughput::Bytes(stream.len() as u64));
        group.bench_with_input(BenchmarkId::from_parameter(count), &stream, |b, stream| {
            b.iter(|| {
                stream
                    .chunks_exact(FragmentHeader::SIZE)
                    .map(|chunk| FragmentHeader::from_bytes(chunk).unwrap().trigger_number)
                    .sum::<u64>()
            });
        });
    }

    group.finish();
}

fn benchmark_scan(c: &mut Criterion) {
    let stream = header_stream(1000);
    c.bench_function("scan_markers", |b| b.iter(|| HeaderScanner::new(&stream).count()));
}

criterion_group!(benches, benchmark_encode, benchmark_decode_stream, benchmark_scan);
criterion_main!(benches);
