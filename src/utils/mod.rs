// Quad Bench - Free and Open Source Software Statement
//
// This project, quad-bench, is Free and Open Source Software (FOSS) licensed
// under the MIT License. You are free to use, modify, and distribute this
// software in accordance with the license terms. Contributions are welcome
// via pull requests to the project repository.
//
// File: src/utils/mod.rs
// Version: 1.0.0
//
// This file is the module declaration for utility functions in quad-bench.
//
// Tree Location:
// - src/utils/mod.rs (utils module entry point)
// - Submodules: format, logging

pub mod format;
pub mod logging;

// Changelog:
// - v1.0.0 (2026-10-18): Utilities for the arithmetic harness.
//   - Features: format (latency, throughput, counts, bytes) and logging
//     (log4rs initialization).
