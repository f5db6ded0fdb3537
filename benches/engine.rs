//! Benchmarks for the Ising engine.

use criterion::{BenchmarkId, Criterion, black_box, criterion_group, criterion_main};

use ising_mc::{
    compute::{Lattice, SimulationEngine, Site, SpinRng, energy_delta},
    schema::{Seed, SimulationConfig},
};

fn bench_run(c: &mut Criterion) {
    let mut group = c.benchmark_group("run_10_mcs");

    for size in [16, 32, 64, 128] {
        let config = SimulationConfig {
            width: size,
            height: size,
            temperature: 1.0,
            boltzmann: 1.0,
            max_mcs: 10,
            rng_seed: None,
        };

        let mut engine = SimulationEngine::new(config, SpinRng::new(42));

        group.bench_with_input(
            BenchmarkId::from_parameter(format!("{}x{}", size, size)),
            &size,
            |b, _| {
                b.iter(|| black_box(engine.run(None).unwrap()));
            },
        );
    }

    group.finish();
}

fn bench_temperature(c: &mut Criterion) {
    let mut group = c.benchmark_group("temperature");

    for temperature in [0.0, 0.5, 2.0] {
        let config = SimulationConfig {
            width: 64,
            height: 64,
            temperature,
            boltzmann: 1.0,
            max_mcs: 10,
            rng_seed: None,
        };
        let initial = Seed::default().generate(64, 64).unwrap();
        let mut engine = SimulationEngine::new(config, SpinRng::new(7));

        group.bench_with_input(
            BenchmarkId::from_parameter(format!("T={}", temperature)),
            &temperature,
            |b, _| {
                b.iter(|| black_box(engine.run(Some(initial.clone())).unwrap()));
            },
        );
    }

    group.finish();
}

fn bench_energy_delta(c: &mut Criterion) {
    let lattice = Lattice::random(64, 64, &mut SpinRng::new(1));

    c.bench_function("energy_delta_sweep_64x64", |b| {
        b.iter(|| {
            let mut sum = 0i64;
            for row in 0..64 {
                for column in 0..64 {
                    sum += energy_delta(black_box(&lattice), Site::new(column, row)) as i64;
                }
            }
            sum
        });
    });
}

criterion_group!(benches, bench_run, bench_temperature, bench_energy_delta);
criterion_main!(benches);
