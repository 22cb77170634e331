use criterion::{black_box, criterion_group, criterion_main, Criterion};

use noncework_core::{Nonce, DEFAULT_LENGTH};
use noncework_testkit::TestFixture;

fn bench_search(c: &mut Criterion) {
    let fixture = TestFixture::with_seed(1);
    c.bench_function("search_8_bits", |b| {
        b.iter(|| {
            let effort = fixture.make_effort(8);
            black_box(effort.get_proof(0).unwrap().cloned())
        })
    });
}

fn bench_binary_codec(c: &mut Criterion) {
    let nonce = Nonce::new_random(DEFAULT_LENGTH).unwrap();
    let binary = nonce.to_binary();
    c.bench_function("binary_roundtrip", |b| {
        b.iter(|| Nonce::from_binary(black_box(&binary), 0).unwrap())
    });
    c.bench_function("equals_binary", |b| {
        b.iter(|| nonce.equals_binary(black_box(&binary), 0))
    });
}

criterion_group!(benches, bench_search, bench_binary_codec);
criterion_main!(benches);
