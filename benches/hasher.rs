//! benches/hasher.rs
//! End-to-end hash + verify at the lowest accepted cost, per variant
use argon2_params::{hash_encoded, verify_password, Argon2Params, Variant, MIN_PARAMS};
use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use std::hint::black_box;
use std::time::Duration;

const PASSWORD: &[u8] = b"benchmark-password";

fn hasher_benches(c: &mut Criterion) {
    let mut group = c.benchmark_group("hasher");
    // Each iteration fills 4 MiB three times
    group.measurement_time(Duration::from_secs(8));
    group.sample_size(20);

    for variant in Variant::ALL {
        let params = Argon2Params { variant, salt: [0x42; 16], ..MIN_PARAMS };

        group.bench_with_input(BenchmarkId::new("hash_encoded", variant), &params, |b, p| {
            b.iter(|| black_box(hash_encoded(black_box(p), PASSWORD).unwrap()));
        });

        let encoded = hash_encoded(&params, PASSWORD).unwrap();
        group.bench_with_input(BenchmarkId::new("verify", variant), &encoded, |b, e| {
            b.iter(|| black_box(verify_password(e.as_bytes(), PASSWORD).unwrap()));
        });
    }

    group.finish();
}

criterion_group!(benches, hasher_benches);
criterion_main!(benches);
