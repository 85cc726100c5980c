use cluster_life::{LifeConfig, World, scatter};
use criterion::{BatchSize, Criterion, criterion_group, criterion_main};
use rand::{SeedableRng, rngs::SmallRng};
use std::time::Duration;

fn env_or<T: std::str::FromStr>(name: &str, default: T) -> T {
    std::env::var(name)
        .ok()
        .and_then(|s| s.parse::<T>().ok())
        .unwrap_or(default)
}

fn bench_advance(c: &mut Criterion) {
    let mut group = c.benchmark_group("advance");
    group.sample_size(env_or("LIFE_BENCH_SAMPLES", 20_usize).max(10));
    group.measurement_time(Duration::from_secs(env_or("LIFE_BENCH_MEASURE_SECS", 5)));

    let steps: usize = env_or("LIFE_BENCH_STEPS", 10_usize).max(1);
    for &chunk in &[32_u32, 64] {
        group.bench_function(format!("chunk{chunk}_steps{steps}"), |b| {
            b.iter_batched(
                || {
                    let mut world: World =
                        World::new(LifeConfig::square(chunk)).expect("valid bench config");
                    let mut rng = SmallRng::seed_from_u64(0xC0FFEE);
                    scatter(&mut world, &mut rng, 4_000, 48);
                    world
                },
                |mut world| {
                    for _ in 0..steps {
                        world.advance();
                    }
                    world
                },
                BatchSize::LargeInput,
            );
        });
    }
    group.finish();
}

criterion_group!(benches, bench_advance);
criterion_main!(benches);
