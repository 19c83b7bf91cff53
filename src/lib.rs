// Quad Bench - Free and Open Source Software Statement
//
// This project, quad-bench, is Free and Open Source Software (FOSS) licensed
// under the MIT License. You are free to use, modify, and distribute this
// software in accordance with the license terms. Contributions are welcome
// via pull requests to the project repository.
//
// File: src/lib.rs
// Version: 1.0.0
//
// This file serves as the main library entry point for quad-bench, a harness
// that measures per-operation latency of arbitrary-precision decimal and
// binary128 arithmetic. It exports all public modules and types used by the
// binary, the criterion benches and the tests.
//
// Tree Location:
// - src/lib.rs (root library file)
// - Exports modules: core, benchmark, utils

pub mod benchmark;
pub mod core;
pub mod utils;

// Re-export commonly used types at the crate root for convenience
pub use crate::benchmark::{
    ArithmeticBench, BenchmarkReport, BenchmarkRunner, Cursor, Dataset, DatasetConfig,
    RunnerConfig,
};
pub use crate::core::{
    DecimalValue, HarnessError, HarnessResult, Operation, ProbeId, QuadValue, Representation,
    RepresentationKind,
};

// Changelog:
// - v1.0.0 (2026-10-18): Library root for the arithmetic harness.
//   - Purpose: Organizes the project into core (representations, errors,
//     identifiers), benchmark (generator, dataset, cursor, probes, runner,
//     report) and utils (formatting, logging).
