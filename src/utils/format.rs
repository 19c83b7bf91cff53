// Quad Bench - Free and Open Source Software Statement
//
// This project, quad-bench, is Free and Open Source Software (FOSS) licensed
// under the MIT License. You are free to use, modify, and distribute this
// software in accordance with the license terms. Contributions are welcome
// via pull requests to the project repository.
//
// File: src/utils/format.rs
// Version: 1.0.0
//
// This file provides formatting helpers for benchmark output: latency in the
// configured time unit, throughput, call counts and byte sizes.
//
// Tree Location:
// - src/utils/format.rs (formatting utilities)
// - Depends on: benchmark/runner (TimeUnit)

use crate::benchmark::runner::TimeUnit;

/// Utility functions for formatting benchmark figures
pub struct FormatUtils;

impl FormatUtils {
    /// Format a nanosecond latency in `unit`, e.g. "123.456 ns/op"
    pub fn format_latency(nanos: f64, unit: TimeUnit) -> String {
        format!("{:.3} {}", unit.from_nanos(nanos), unit.suffix())
    }

    /// Format calls per second (ops/s, Kops/s, Mops/s, Gops/s) from a
    /// nanosecond latency
    pub fn format_throughput(nanos_per_call: f64) -> String {
        if nanos_per_call <= 0.0 {
            return "n/a".to_string();
        }
        let ops = 1_000_000_000.0 / nanos_per_call;
        if ops >= 1_000_000_000.0 {
            format!("{:.2} Gops/s", ops / 1_000_000_000.0)
        } else if ops >= 1_000_000.0 {
            format!("{:.2} Mops/s", ops / 1_000_000.0)
        } else if ops >= 1_000.0 {
            format!("{:.2} Kops/s", ops / 1_000.0)
        } else {
            format!("{:.2} ops/s", ops)
        }
    }

    /// Format large numbers with suffixes (K, M, B)
    pub fn format_number(num: u64) -> String {
        if num >= 1_000_000_000 {
            format!("{:.1}B", num as f64 / 1_000_000_000.0)
        } else if num >= 1_000_000 {
            format!("{:.1}M", num as f64 / 1_000_000.0)
        } else if num >= 1_000 {
            format!("{:.1}K", num as f64 / 1_000.0)
        } else {
            num.to_string()
        }
    }

    /// Format a byte count in binary units
    pub fn format_bytes(bytes: u64) -> String {
        const GIB: u64 = 1 << 30;
        const MIB: u64 = 1 << 20;
        if bytes >= GIB {
            format!("{:.1} GiB", bytes as f64 / GIB as f64)
        } else if bytes >= MIB {
            format!("{:.1} MiB", bytes as f64 / MIB as f64)
        } else {
            format!("{} B", bytes)
        }
    }
}


// Changelog:
// - v1.0.0 (2026-10-18): Initial formatting helpers.
//   - Purpose: Latency in the configured unit, throughput in ops/s, grouped
//     call counts and memory sizes for the report table.
