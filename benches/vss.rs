use criterion::{BenchmarkId, Criterion, black_box, criterion_group, criterion_main};
use rand::{SeedableRng, rngs::StdRng};

use feldman_vss::{
    DefaultBackend, SecretPolynomial, ShareIndex, encode_vector, read_vector, verify_share,
};

/// Per-index cost of each primitive for a few thresholds:
/// - scalar share evaluation (Horner over Fr)
/// - commitment evaluation (Horner over G2)
/// - share verification (one fixed-base multiplication)
/// - decoding a full commitment vector (subgroup checks dominate)
pub fn bench_vss(c: &mut Criterion) {
    let mut rng = StdRng::seed_from_u64(0xfe1d_3a11);
    let index = ShareIndex::new(200).expect("valid index");

    let mut group = c.benchmark_group("vss");
    for threshold in [3usize, 16, 64] {
        let poly = SecretPolynomial::<DefaultBackend>::random(&mut rng, threshold)
            .expect("valid threshold");
        let commitment = poly.commit();
        let share = poly.share(index);
        let public = commitment.evaluate(index);
        let bytes = encode_vector::<DefaultBackend>(commitment.points());

        group.bench_with_input(BenchmarkId::new("share", threshold), &poly, |b, poly| {
            b.iter(|| black_box(poly.evaluate(black_box(index))))
        });
        group.bench_with_input(
            BenchmarkId::new("public_share", threshold),
            &commitment,
            |b, commitment| b.iter(|| black_box(commitment.evaluate(black_box(index)))),
        );
        group.bench_function(BenchmarkId::new("read_vector", threshold), |b| {
            b.iter(|| black_box(read_vector::<DefaultBackend>(black_box(&bytes), threshold)))
        });
        if threshold == 3 {
            group.bench_function("verify_share", |b| {
                b.iter(|| {
                    black_box(verify_share::<DefaultBackend>(
                        black_box(&share.value),
                        black_box(&public.point),
                    ))
                })
            });
        }
    }
    group.finish();
}

criterion_group!(benches, bench_vss);
criterion_main!(benches);
