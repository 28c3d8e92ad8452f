use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use rand::{Rng, SeedableRng};

use wrapped_base64::{
    decode, decode_slice, decode_vec, decoded_len, encode, encode_slice, encoded_len,
};

const BYTE_SIZES: [usize; 5] = [3, 50, 100, 500, 3 * 1024];

// Benchmarks over these byte sizes take longer so we will run fewer samples.
const LARGE_BYTE_SIZES: [usize; 3] = [3 * 1024 * 1024, 10 * 1024 * 1024, 30 * 1024 * 1024];

fn do_decode_bench(c: &mut Criterion, label: &str, byte_sizes: &[usize], sample_size: usize) {
    let mut group = c.benchmark_group(label);
    let _ = group.sample_size(sample_size);

    for size in byte_sizes {
        let mut v: Vec<u8> = Vec::with_capacity(size * 3 / 4);
        fill(&mut v);
        let encoded = encode(&v).unwrap();

        let _ = group.throughput(Throughput::Bytes(encoded.len() as u64));

        let _ = group.bench_with_input(BenchmarkId::new("decode", size), &encoded, |b, encoded| {
            b.iter(|| {
                let orig = decode(encoded);
                black_box(&orig);
            });
        });

        let _ = group.bench_with_input(
            BenchmarkId::new("decode_reuse_buf", size),
            &encoded,
            |b, encoded| {
                let mut buf = Vec::new();
                b.iter(|| {
                    buf.clear();
                    decode_vec(encoded, &mut buf).unwrap();
                    black_box(&buf);
                });
            },
        );

        let _ = group.bench_with_input(
            BenchmarkId::new("decode_slice", size),
            &encoded,
            |b, encoded| {
                let mut buf = vec![0; decoded_len(encoded).unwrap()];
                b.iter(|| {
                    let _ = decode_slice(encoded, &mut buf).unwrap();
                    black_box(&buf);
                });
            },
        );
    }

    group.finish();
}

fn do_encode_bench(c: &mut Criterion, label: &str, byte_sizes: &[usize], sample_size: usize) {
    let mut group = c.benchmark_group(label);
    let _ = group.sample_size(sample_size);

    for size in byte_sizes {
        let mut v: Vec<u8> = Vec::with_capacity(*size);
        fill(&mut v);

        let _ = group.throughput(Throughput::Bytes(v.len() as u64));

        let _ = group.bench_with_input(BenchmarkId::new("encode", size), &v, |b, v| {
            b.iter(|| {
                let e = encode(v);
                black_box(&e);
            });
        });

        let _ = group.bench_with_input(BenchmarkId::new("encode_slice", size), &v, |b, v| {
            let mut buf = vec![0; encoded_len(v.len()).unwrap()];
            b.iter(|| {
                let _ = encode_slice(v, &mut buf).unwrap();
                black_box(&buf);
            });
        });
    }

    group.finish();
}

fn fill(v: &mut Vec<u8>) {
    let cap = v.capacity();
    // weak randomness is plenty; we just want to not be completely friendly to the branch predictor
    let mut r = rand::rngs::SmallRng::from_entropy();
    while v.len() < cap {
        v.push(r.gen::<u8>());
    }
}

fn bench(c: &mut Criterion) {
    do_encode_bench(c, "encode_small_input", &BYTE_SIZES[..], 100);
    do_encode_bench(c, "encode_large_input", &LARGE_BYTE_SIZES[..], 10);
    do_decode_bench(c, "decode_small_input", &BYTE_SIZES[..], 100);
    do_decode_bench(c, "decode_large_input", &LARGE_BYTE_SIZES[..], 10);
}

criterion_group!(benches, bench);
criterion_main!(benches);
