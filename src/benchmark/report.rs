// Quad Bench - Free and Open Source Software Statement
//
// This project, quad-bench, is Free and Open Source Software (FOSS) licensed
// under the MIT License. You are free to use, modify, and distribute this
// software in accordance with the license terms. Contributions are welcome
// via pull requests to the project repository.
//
// File: src/benchmark/report.rs
// Version: 1.0.0
//
// This file assembles benchmark results into a report: per-probe summaries,
// a decimal-versus-quad comparison per operation, the runner configuration and
// the host environment. Reports are logged as a table and can be saved to and
// loaded from JSON. Saving writes a temporary file and renames it into place.
//
// Tree Location:
// - src/benchmark/report.rs (result report and persistence)
// - Depends on: serde, serde_json, thiserror, utils/format

use crate::benchmark::environment::EnvironmentInfo;
use crate::benchmark::runner::{ProbeSummary, RunnerConfig};
use crate::core::types::{Operation, RepresentationKind};
use crate::utils::format::FormatUtils;
use log::{debug, info};
use serde::{Deserialize, Serialize};
use std::fs::{self, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};
use thiserror::Error;

const LOG_TARGET: &str = "quad_bench::report";

#[derive(Error, Debug)]
pub enum ReportError {
    #[error("Path {path:?} is not a directory")]
    NotADirectory { path: PathBuf },

    #[error("Report file does not exist at {path:?}")]
    FileNotFound { path: PathBuf },

    #[error("Failed to serialize report")]
    SerializationError {
        #[from]
        source: serde_json::Error,
    },

    #[error("Failed to deserialize report: {message}")]
    DeserializationError { message: String },

    #[error("IO operation failed on {path:?}")]
    IoError {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to write temporary file for atomic save")]
    AtomicWriteError {
        #[source]
        source: std::io::Error,
    },
}

/// Decimal against quad for one operation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Comparison {
    pub operation: Operation,
    pub decimal_ns: f64,
    pub quad_ns: f64,
    /// decimal time / quad time; above 1 means quad is cheaper
    pub ratio: f64,
    pub faster: RepresentationKind,
}

impl Comparison {
    pub fn between(operation: Operation, decimal_ns: f64, quad_ns: f64) -> Self {
        let ratio = if quad_ns > 0.0 { decimal_ns / quad_ns } else { 0.0 };
        let faster = if quad_ns < decimal_ns {
            RepresentationKind::Quad
        } else {
            RepresentationKind::Decimal
        };
        Self {
            operation,
            decimal_ns,
            quad_ns,
            ratio,
            faster,
        }
    }

    /// Percentage change going from decimal to quad
    pub fn percentage_change(&self) -> f64 {
        if self.decimal_ns == 0.0 {
            return 0.0;
        }
        ((self.quad_ns - self.decimal_ns) / self.decimal_ns) * 100.0
    }
}

/// Everything a run produced
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BenchmarkReport {
    pub environment: EnvironmentInfo,
    pub config: RunnerConfig,
    pub summaries: Vec<ProbeSummary>,
    pub comparisons: Vec<Comparison>,
}

impl BenchmarkReport {
    pub fn new(
        config: RunnerConfig,
        environment: EnvironmentInfo,
        summaries: Vec<ProbeSummary>,
    ) -> Self {
        let comparisons = compare(&summaries);
        Self {
            environment,
            config,
            summaries,
            comparisons,
        }
    }

    pub fn summary_for(&self, name: &str) -> Option<&ProbeSummary> {
        self.summaries.iter().find(|s| s.name == name)
    }

    /// Header plus one line per probe: latency figures, throughput and
    /// measured call count.
    pub fn table_rows(&self) -> Vec<String> {
        let unit = self.config.time_unit;
        let mut rows = Vec::with_capacity(self.summaries.len() + 1);
        rows.push(format!(
            "{:<26} {:>14} {:>14} {:>14} {:>14} {:>10}",
            "Probe", "Average", "Best", "Worst", "Throughput", "Calls"
        ));
        for summary in &self.summaries {
            rows.push(format!(
                "{:<26} {:>14} {:>14} {:>14} {:>14} {:>10}",
                summary.name,
                FormatUtils::format_latency(summary.average_ns, unit),
                FormatUtils::format_latency(summary.best_ns, unit),
                FormatUtils::format_latency(summary.worst_ns, unit),
                FormatUtils::format_throughput(summary.average_ns),
                FormatUtils::format_number(summary.measured_calls())
            ));
        }
        rows
    }

    /// Log the results table and the comparison rows.
    pub fn log_summary(&self) {
        let unit = self.config.time_unit;
        info!(target: LOG_TARGET, "📊 Benchmark Complete!");
        info!(target: LOG_TARGET,
            "💻 {} | {} | {} logical / {} physical cores | {}",
            self.environment.cpu_label(),
            self.environment.os,
            self.environment.logical_cores,
            self.environment.physical_cores,
            FormatUtils::format_bytes(self.environment.total_memory_bytes)
        );
        for row in self.table_rows() {
            info!(target: LOG_TARGET, "{}", row);
        }
        for comparison in &self.comparisons {
            info!(target: LOG_TARGET,
                "⚖️ {}: decimal {} vs quad {} ({:.2}x, {} is cheaper, {:+.1}%)",
                comparison.operation.as_str(),
                FormatUtils::format_latency(comparison.decimal_ns, unit),
                FormatUtils::format_latency(comparison.quad_ns, unit),
                comparison.ratio,
                comparison.faster.as_str(),
                comparison.percentage_change()
            );
        }
    }
}

/// Pair decimal and quad summaries of the same operation.
///
/// Operations measured for only one representation get no row.
pub fn compare(summaries: &[ProbeSummary]) -> Vec<Comparison> {
    Operation::ALL
        .iter()
        .filter_map(|&operation| {
            let find = |kind: RepresentationKind| {
                summaries
                    .iter()
                    .find(|s| s.probe.operation == operation && s.probe.representation == kind)
            };
            let decimal = find(RepresentationKind::Decimal)?;
            let quad = find(RepresentationKind::Quad)?;
            Some(Comparison::between(operation, decimal.average_ns, quad.average_ns))
        })
        .collect()
}

/// JSON report file at a fixed path
#[derive(Debug, Clone)]
pub struct ReportFile {
    path: PathBuf,
}

impl ReportFile {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn save(&self, report: &BenchmarkReport) -> Result<(), ReportError> {
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            if parent.exists() && !parent.is_dir() {
                return Err(ReportError::NotADirectory {
                    path: parent.to_path_buf(),
                });
            }
            fs::create_dir_all(parent).map_err(|e| ReportError::IoError {
                path: parent.to_path_buf(),
                source: e,
            })?;
        }

        debug!(target: LOG_TARGET, "Writing report to {:?}", self.path);
        let contents = serde_json::to_vec_pretty(report)?;
        let temp_path = self.path.with_extension("tmp");
        {
            let mut temp_file = OpenOptions::new()
                .write(true)
                .create(true)
                .truncate(true)
                .open(&temp_path)
                .map_err(|e| ReportError::AtomicWriteError { source: e })?;
            temp_file
                .write_all(&contents)
                .map_err(|e| ReportError::AtomicWriteError { source: e })?;
            temp_file
                .flush()
                .map_err(|e| ReportError::AtomicWriteError { source: e })?;
        }
        fs::rename(&temp_path, &self.path)
            .map_err(|e| ReportError::AtomicWriteError { source: e })?;

        info!(target: LOG_TARGET, "💾 Saved report with {} probes to {:?}", report.summaries.len(), self.path);
        Ok(())
    }

    pub fn load(&self) -> Result<BenchmarkReport, ReportError> {
        if !self.path.exists() {
            return Err(ReportError::FileNotFound {
                path: self.path.clone(),
            });
        }
        let contents = fs::read_to_string(&self.path).map_err(|e| ReportError::IoError {
            path: self.path.clone(),
            source: e,
        })?;
        serde_json::from_str(&contents).map_err(|e| ReportError::DeserializationError {
            message: e.to_string(),
        })
    }
}

// Changelog:
// - v1.0.0 (2026-10-18): Initial report.
//   - Purpose: Comparison rows per operation, table logging, and atomic JSON
//     persistence following the status file manager's write pattern.
