// Quad Bench - Free and Open Source Software Statement
//
// This project, quad-bench, is Free and Open Source Software (FOSS) licensed
// under the MIT License. You are free to use, modify, and distribute this
// software in accordance with the license terms. Contributions are welcome
// via pull requests to the project repository.
//
// File: benches/arithmetic.rs
// Version: 1.0.0
//
// Criterion driver for the eight probes. Criterion owns warm-up, timing and
// statistics; each measured call is exactly one probe invocation. Warm-up and
// measurement windows come from RunnerConfig (QUAD_BENCH_CONFIG if set).
//
// Run with: cargo bench --bench arithmetic [-- <probe name filter>]

use criterion::{Criterion, criterion_group, criterion_main};
use quad_bench::benchmark::{ArithmeticBench, Isolation, RunnerConfig};
use std::path::Path;
use std::time::Duration;

fn runner_config() -> RunnerConfig {
    match std::env::var_os("QUAD_BENCH_CONFIG") {
        Some(path) => RunnerConfig::from_json_file(Path::new(&path))
            .unwrap_or_else(|e| panic!("invalid QUAD_BENCH_CONFIG: {}", e)),
        None => RunnerConfig::default(),
    }
}

fn setup(config: &RunnerConfig) -> ArithmeticBench {
    ArithmeticBench::setup(&config.dataset).unwrap_or_else(|e| panic!("setup failed: {}", e))
}

fn array_operations(c: &mut Criterion) {
    let config = runner_config();
    let probes = config
        .selected_probes()
        .unwrap_or_else(|e| panic!("{}", e));

    let mut group = c.benchmark_group("array_operations");
    let mut shared = match config.isolation {
        Isolation::Shared => Some(setup(&config)),
        Isolation::FreshInstance => None,
    };

    for probe in probes {
        let mut fresh;
        let bench = match shared.as_mut() {
            Some(bench) => bench,
            None => {
                fresh = setup(&config);
                &mut fresh
            }
        };
        group.bench_function(probe.name(), |b| {
            b.iter(|| {
                // An arithmetic failure invalidates the measurement.
                if let Err(e) = bench.run(probe) {
                    panic!("{}", e);
                }
            })
        });
    }

    group.finish();
}

fn configure_criterion() -> Criterion {
    let config = runner_config();
    Criterion::default()
        .warm_up_time((config.warmup_time() * config.warmup_iterations).max(Duration::from_millis(1)))
        .measurement_time(config.measurement_time() * config.measurement_iterations)
        .sample_size(100)
}

criterion_group! {
    name = benches;
    config = configure_criterion();
    targets = array_operations
}
criterion_main!(benches);
