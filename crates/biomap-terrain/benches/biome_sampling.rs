use biomap_terrain::{SeedSession, generate_region, hashed_float};
use criterion::{Criterion, black_box, criterion_group, criterion_main};

fn seeded_session() -> SeedSession {
    let mut session = SeedSession::new();
    session.initialize("bench:2024-01-01");
    session
}

fn bench_hashed_float(c: &mut Criterion) {
    c.bench_function("hashed_float", |bencher| {
        bencher.iter(|| black_box(hashed_float("bench:2024-01-01", black_box(17), -4, "temp")))
    });
}

fn bench_get_biome_cold(c: &mut Criterion) {
    c.bench_function("get_biome_cold_cache", |bencher| {
        bencher.iter_batched(
            seeded_session,
            |session| black_box(session.get_biome(black_box(123), black_box(-45))),
            criterion::BatchSize::SmallInput,
        )
    });
}

fn bench_get_biome_warm(c: &mut Criterion) {
    let session = seeded_session();
    let _ = session.get_biome(123, -45);
    c.bench_function("get_biome_warm_cache", |bencher| {
        bencher.iter(|| black_box(session.get_biome(black_box(123), black_box(-45))))
    });
}

fn bench_region(c: &mut Criterion) {
    c.bench_function("generate_region_r32", |bencher| {
        bencher.iter_batched(
            seeded_session,
            |session| black_box(generate_region(&session, (0, 0), 32, 4)),
            criterion::BatchSize::LargeInput,
        )
    });
}

criterion_group!(
    benches,
    bench_hashed_float,
    bench_get_biome_cold,
    bench_get_biome_warm,
    bench_region
);
criterion_main!(benches);
