// Quad Bench - Free and Open Source Software Statement
//
// This project, quad-bench, is Free and Open Source Software (FOSS) licensed
// under the MIT License. You are free to use, modify, and distribute this
// software in accordance with the license terms. Contributions are welcome
// via pull requests to the project repository.
//
// File: src/benchmark/environment.rs
// Version: 1.0.0
//
// This file captures the host a benchmark ran on. Latency figures are only
// comparable between runs on the same hardware, so every report carries this
// record.
//
// Tree Location:
// - src/benchmark/environment.rs (host metadata)
// - Depends on: sysinfo, num_cpus, serde

use serde::{Deserialize, Serialize};
use sysinfo::System;

/// Host metadata recorded next to benchmark results
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EnvironmentInfo {
    /// OS name and version, e.g. "Ubuntu 24.04"
    pub os: String,

    /// Kernel version if known
    pub kernel: Option<String>,

    /// CPU architecture (x86_64, aarch64, ...)
    pub arch: String,

    /// CPU brand string of the first core
    pub cpu_model: Option<String>,

    pub logical_cores: usize,

    pub physical_cores: usize,

    /// Total RAM in bytes
    pub total_memory_bytes: u64,

    /// Version of this harness
    pub harness_version: String,
}

impl EnvironmentInfo {
    /// Capture the current host. Fields that cannot be detected are `None`
    /// or "unknown".
    pub fn capture() -> Self {
        let system = System::new_all();
        let os = match (System::name(), System::os_version()) {
            (Some(name), Some(version)) => format!("{} {}", name, version),
            (Some(name), None) => name,
            _ => std::env::consts::OS.to_string(),
        };
        let cpu_model = system
            .cpus()
            .first()
            .map(|cpu| cpu.brand().trim().to_string())
            .filter(|brand| !brand.is_empty());

        Self {
            os,
            kernel: System::kernel_version(),
            arch: std::env::consts::ARCH.to_string(),
            cpu_model,
            logical_cores: num_cpus::get(),
            physical_cores: num_cpus::get_physical(),
            total_memory_bytes: system.total_memory(),
            harness_version: env!("CARGO_PKG_VERSION").to_string(),
        }
    }

    pub fn cpu_label(&self) -> &str {
        self.cpu_model.as_deref().unwrap_or("unknown CPU")
    }
}

// Changelog:
// - v1.0.0 (2026-10-18): Initial environment capture.
//   - Purpose: Replaces the placeholder resource monitor with a one-shot host
//     snapshot serialized into every report.
