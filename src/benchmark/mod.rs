// Quad Bench - Free and Open Source Software Statement
//
// This project, quad-bench, is Free and Open Source Software (FOSS) licensed
// under the MIT License. You are free to use, modify, and distribute this
// software in accordance with the license terms. Contributions are welcome
// via pull requests to the project repository.
//
// File: src/benchmark/mod.rs
// Version: 1.0.0
//
// This file declares the benchmark module: operand generation, dataset
// storage, the shared cursor, the eight probes, and the runner that measures
// them.
//
// Tree Location:
// - src/benchmark/mod.rs (benchmark module entry point)
// - Submodules: generator, dataset, cursor, probes, runner, environment, report

pub mod cursor;
pub mod dataset;
pub mod environment;
pub mod generator;
pub mod probes;
pub mod report;
pub mod runner;

// Re-export key benchmark types and functions
pub use cursor::Cursor;
pub use dataset::Dataset;
pub use environment::EnvironmentInfo;
pub use generator::{DatasetConfig, OperandGenerator};
pub use probes::{ArithmeticBench, probe};
pub use report::{BenchmarkReport, Comparison, ReportError, ReportFile};
pub use runner::{BenchmarkRunner, Isolation, IterationSample, ProbeSummary, RunnerConfig, TimeUnit};

// Changelog:
// - v1.0.0 (2026-10-18): Benchmark module for the arithmetic harness.
//   - Purpose: Dataset, cursor and probe pipeline plus the runner,
//     environment capture and reporting.
