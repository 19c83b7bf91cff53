// Quad Bench - Free and Open Source Software Statement
//
// This project, quad-bench, is Free and Open Source Software (FOSS) licensed
// under the MIT License. You are free to use, modify, and distribute this
// software in accordance with the license terms. Contributions are welcome
// via pull requests to the project repository.
//
// File: src/benchmark/runner.rs
// Version: 1.0.0
//
// This file implements the measurement protocol and its configuration. Each
// selected probe gets discarded warm-up iterations followed by timed
// measurement iterations; an iteration calls the probe in batches until its
// time budget is spent and records calls and elapsed time. The average time
// per call is the reported figure.
//
// Tree Location:
// - src/benchmark/runner.rs (in-process measurement runner)
// - Depends on: benchmark/probes, serde, serde_json

use crate::benchmark::generator::DatasetConfig;
use crate::benchmark::probes::ArithmeticBench;
use crate::core::error::{HarnessError, HarnessResult};
use crate::core::types::ProbeId;
use log::{debug, info};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::{Duration, Instant};

const LOG_TARGET: &str = "quad_bench::runner";

/// Probe calls between two clock reads
const CALLS_PER_BATCH: u64 = 256;

/// Unit used when reporting average time per call
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TimeUnit {
    #[default]
    Nanoseconds,
    Microseconds,
    Milliseconds,
    Seconds,
}

impl TimeUnit {
    /// Convert a nanosecond figure into this unit.
    pub fn from_nanos(&self, nanos: f64) -> f64 {
        match self {
            TimeUnit::Nanoseconds => nanos,
            TimeUnit::Microseconds => nanos / 1_000.0,
            TimeUnit::Milliseconds => nanos / 1_000_000.0,
            TimeUnit::Seconds => nanos / 1_000_000_000.0,
        }
    }

    pub const fn suffix(&self) -> &'static str {
        match self {
            TimeUnit::Nanoseconds => "ns/op",
            TimeUnit::Microseconds => "us/op",
            TimeUnit::Milliseconds => "ms/op",
            TimeUnit::Seconds => "s/op",
        }
    }
}

/// How probes are kept apart from each other's execution history
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Isolation {
    /// Every probe runs against its own freshly set up benchmark instance
    #[default]
    FreshInstance,
    /// All probes share one instance and one cursor
    Shared,
}

/// Runner options. Defaults: 3 × 7 s warm-up, 5 × 10 s measurement,
/// one fresh instance per probe, nanoseconds.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RunnerConfig {
    pub warmup_iterations: u32,
    pub warmup_time_ms: u64,
    pub measurement_iterations: u32,
    pub measurement_time_ms: u64,
    pub isolation: Isolation,
    pub time_unit: TimeUnit,
    /// Probe name fragments; a probe runs if its name contains any of them.
    /// Empty selects every probe.
    pub include: Vec<String>,
    pub dataset: DatasetConfig,
    pub report_path: Option<PathBuf>,
}

impl Default for RunnerConfig {
    fn default() -> Self {
        Self {
            warmup_iterations: 3,
            warmup_time_ms: 7_000,
            measurement_iterations: 5,
            measurement_time_ms: 10_000,
            isolation: Isolation::default(),
            time_unit: TimeUnit::default(),
            include: Vec::new(),
            dataset: DatasetConfig::default(),
            report_path: None,
        }
    }
}

impl RunnerConfig {
    pub fn from_json_str(json: &str) -> HarnessResult<Self> {
        let config: RunnerConfig = serde_json::from_str(json)
            .map_err(|e| HarnessError::config(format!("malformed runner config: {}", e)))?;
        config.validate()?;
        Ok(config)
    }

    pub fn from_json_file(path: &Path) -> HarnessResult<Self> {
        let contents = std::fs::read_to_string(path).map_err(|e| {
            HarnessError::config(format!("cannot read runner config {:?}: {}", path, e))
        })?;
        Self::from_json_str(&contents)
    }

    pub fn warmup_time(&self) -> Duration {
        Duration::from_millis(self.warmup_time_ms)
    }

    pub fn measurement_time(&self) -> Duration {
        Duration::from_millis(self.measurement_time_ms)
    }

    pub fn validate(&self) -> HarnessResult<()> {
        if self.warmup_iterations > 0 && self.warmup_time_ms == 0 {
            return Err(HarnessError::config("warm-up iterations need a non-zero warm-up time"));
        }
        if self.measurement_iterations == 0 {
            return Err(HarnessError::config("at least one measurement iteration is required"));
        }
        if self.measurement_time_ms == 0 {
            return Err(HarnessError::config("measurement time must be non-zero"));
        }
        self.dataset.validate()?;
        self.selected_probes().map(|_| ())
    }

    /// Probes matching `include`, in declaration order.
    pub fn selected_probes(&self) -> HarnessResult<Vec<ProbeId>> {
        if self.include.is_empty() {
            return Ok(ProbeId::ALL.to_vec());
        }
        let selected: Vec<ProbeId> = ProbeId::ALL
            .iter()
            .copied()
            .filter(|probe| {
                let name = probe.name();
                self.include.iter().any(|pattern| name.contains(pattern.as_str()))
            })
            .collect();
        if selected.is_empty() {
            return Err(HarnessError::config(format!(
                "no probe matches {:?}",
                self.include
            )));
        }
        Ok(selected)
    }
}

/// One timed iteration: how many calls fit in the time budget
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct IterationSample {
    pub calls: u64,
    pub elapsed_ns: u64,
}

impl IterationSample {
    pub fn average_ns(&self) -> f64 {
        if self.calls == 0 {
            return 0.0;
        }
        self.elapsed_ns as f64 / self.calls as f64
    }
}

/// Measured result for one probe
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProbeSummary {
    pub probe: ProbeId,
    pub name: String,
    /// Calls made during warm-up; not part of any figure below
    pub warmup_calls: u64,
    pub samples: Vec<IterationSample>,
    pub average_ns: f64,
    pub best_ns: f64,
    pub worst_ns: f64,
}

impl ProbeSummary {
    pub fn from_samples(probe: ProbeId, warmup_calls: u64, samples: Vec<IterationSample>) -> Self {
        let calls: u64 = samples.iter().map(|s| s.calls).sum();
        let elapsed: u64 = samples.iter().map(|s| s.elapsed_ns).sum();
        let average_ns = if calls == 0 {
            0.0
        } else {
            elapsed as f64 / calls as f64
        };
        let best_ns = samples
            .iter()
            .map(IterationSample::average_ns)
            .fold(f64::INFINITY, f64::min);
        let worst_ns = samples
            .iter()
            .map(IterationSample::average_ns)
            .fold(0.0, f64::max);
        Self {
            probe,
            name: probe.name(),
            warmup_calls,
            samples,
            average_ns,
            best_ns: if best_ns.is_finite() { best_ns } else { 0.0 },
            worst_ns,
        }
    }

    pub fn measured_calls(&self) -> u64 {
        self.samples.iter().map(|s| s.calls).sum()
    }

    pub fn average(&self, unit: TimeUnit) -> f64 {
        unit.from_nanos(self.average_ns)
    }
}

/// In-process runner for the eight probes
pub struct BenchmarkRunner {
    config: RunnerConfig,
}

impl BenchmarkRunner {
    pub fn new(config: RunnerConfig) -> HarnessResult<Self> {
        config.validate()?;
        Ok(Self { config })
    }

    pub fn config(&self) -> &RunnerConfig {
        &self.config
    }

    /// Run every selected probe and return one summary per probe.
    ///
    /// The first error aborts the run.
    pub fn run(&self) -> HarnessResult<Vec<ProbeSummary>> {
        let probes = self.config.selected_probes()?;
        info!(target: LOG_TARGET,
            "🧪 Running {} probes: warm-up {} × {:?}, measurement {} × {:?}, isolation {:?}",
            probes.len(),
            self.config.warmup_iterations,
            self.config.warmup_time(),
            self.config.measurement_iterations,
            self.config.measurement_time(),
            self.config.isolation
        );

        let mut shared = match self.config.isolation {
            Isolation::Shared => Some(ArithmeticBench::setup(&self.config.dataset)?),
            Isolation::FreshInstance => None,
        };

        let mut summaries = Vec::with_capacity(probes.len());
        for probe in probes {
            let summary = match shared.as_mut() {
                Some(bench) => self.run_probe(bench, probe)?,
                None => {
                    let mut bench = ArithmeticBench::setup(&self.config.dataset)?;
                    self.run_probe(&mut bench, probe)?
                }
            };
            info!(target: LOG_TARGET,
                "📊 {}: {:.3} {}",
                summary.name,
                summary.average(self.config.time_unit),
                self.config.time_unit.suffix()
            );
            summaries.push(summary);
        }
        Ok(summaries)
    }

    /// Warm up, then measure, one probe against `bench`.
    pub fn run_probe(&self, bench: &mut ArithmeticBench, probe: ProbeId) -> HarnessResult<ProbeSummary> {
        let unit = self.config.time_unit;
        let mut warmup_calls = 0;
        for i in 0..self.config.warmup_iterations {
            let sample = run_iteration(bench, probe, self.config.warmup_time())?;
            warmup_calls += sample.calls;
            debug!(target: LOG_TARGET,
                "{} warm-up iteration {}: {:.3} {}",
                probe, i + 1, unit.from_nanos(sample.average_ns()), unit.suffix()
            );
        }

        let mut samples = Vec::with_capacity(self.config.measurement_iterations as usize);
        for i in 0..self.config.measurement_iterations {
            let sample = run_iteration(bench, probe, self.config.measurement_time())?;
            debug!(target: LOG_TARGET,
                "{} iteration {}: {:.3} {} ({} calls)",
                probe, i + 1, unit.from_nanos(sample.average_ns()), unit.suffix(), sample.calls
            );
            samples.push(sample);
        }
        Ok(ProbeSummary::from_samples(probe, warmup_calls, samples))
    }
}

/// Call `probe` in batches until `budget` has elapsed.
///
/// At least one batch always runs, so a sample is never empty.
pub fn run_iteration(
    bench: &mut ArithmeticBench,
    probe: ProbeId,
    budget: Duration,
) -> HarnessResult<IterationSample> {
    let mut calls = 0u64;
    let started = Instant::now();
    loop {
        for _ in 0..CALLS_PER_BATCH {
            bench.run(probe)?;
        }
        calls += CALLS_PER_BATCH;
        if started.elapsed() >= budget {
            break;
        }
    }
    let elapsed = started.elapsed();
    std::hint::black_box(&*bench);
    Ok(IterationSample {
        calls,
        elapsed_ns: elapsed.as_nanos() as u64,
    })
}


// Changelog:
// - v1.0.0 (2026-10-18): Initial measurement runner.
//   - Purpose: Warm-up and measurement phases per probe with average time per
//     call, configured through a serde-loadable RunnerConfig.
//   - Features: Probe filter, per-probe fresh instance or shared instance,
//     reporting time unit.
//   - Note: The runner is sequential; exactly one probe call is in flight.
