/*
 * Flock Simulation Benchmark
 *
 * Benchmarks for the two hot paths of the simulation: the brute-force
 * neighbor scan (the O(n^2) bottleneck) and the full tick, sequential
 * versus parallel, across realistic population sizes.
 */

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use glam::Vec3;
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

use shoal::{spawn_boids, BoidSettings, BoundarySphere, NeighborScratch, Simulation};

fn populated_sim(count: usize, parallel: bool) -> Simulation {
    let mut settings = BoidSettings::default();
    settings.set_count(count);
    settings.enable_parallel = parallel;
    let mut sim = Simulation::new(settings, BoundarySphere::new(Vec3::ZERO, 10.0));
    let mut rng = SmallRng::seed_from_u64(99);
    spawn_boids(&mut sim, &mut rng).expect("benchmark spawn");
    sim
}

// Benchmark the neighbor scan over the whole population
fn bench_neighbor_scan(c: &mut Criterion) {
    let mut group = c.benchmark_group("neighbor_scan");

    for count in [100usize, 250, 500] {
        group.bench_with_input(BenchmarkId::from_parameter(count), &count, |b, &count| {
            let mut rng = SmallRng::seed_from_u64(123);
            let positions: Vec<Vec3> = (0..count)
                .map(|_| {
                    Vec3::new(
                        rng.gen_range(-9.0..9.0),
                        rng.gen_range(-9.0..9.0),
                        rng.gen_range(-9.0..9.0),
                    )
                })
                .collect();
            let velocities = vec![Vec3::X; count];
            let mut scratch = NeighborScratch::new();

            b.iter(|| {
                let mut found = 0usize;
                for index in 0..count {
                    found += scratch
                        .scan(index, &positions, &velocities, black_box(1.0))
                        .len();
                }
                black_box(found)
            });
        });
    }

    group.finish();
}

// Benchmark a complete tick, sequential and parallel
fn bench_step(c: &mut Criterion) {
    let mut group = c.benchmark_group("step");

    for count in [100usize, 250, 500] {
        for (label, parallel) in [("sequential", false), ("parallel", true)] {
            group.bench_with_input(BenchmarkId::new(label, count), &count, |b, &count| {
                let mut sim = populated_sim(count, parallel);
                b.iter(|| sim.step(black_box(1.0 / 60.0)));
            });
        }
    }

    group.finish();
}

criterion_group!(benches, bench_neighbor_scan, bench_step);
criterion_main!(benches);
