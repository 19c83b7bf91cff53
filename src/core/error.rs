// Quad Bench - Free and Open Source Software Statement
//
// This project, quad-bench, is Free and Open Source Software (FOSS) licensed
// under the MIT License. You are free to use, modify, and distribute this
// software in accordance with the license terms. Contributions are welcome
// via pull requests to the project repository.
//
// File: src/core/error.rs
// Version: 1.0.0
//
// This file defines the error type shared by the operand generator, dataset
// store, cursor and probes. Every failure is fatal for the benchmark run.
//
// Tree Location:
// - src/core/error.rs (harness errors)
// - Depends on: thiserror

use thiserror::Error;

/// Why an arithmetic primitive refused to produce a result
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ArithmeticFailureKind {
    /// The divisor was exactly zero
    DivisionByZero,
    /// The result is NaN or infinite
    NonFinite,
}

impl std::fmt::Display for ArithmeticFailureKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ArithmeticFailureKind::DivisionByZero => write!(f, "division by zero"),
            ArithmeticFailureKind::NonFinite => write!(f, "non-finite result"),
        }
    }
}

#[derive(Error, Debug, Clone, PartialEq)]
pub enum HarnessError {
    #[error("Setup failed: {reason}")]
    SetupFailure { reason: String },

    #[error("Arithmetic failure in {probe} at index {index}: {kind}")]
    ArithmeticFailure {
        probe: String,
        index: usize,
        kind: ArithmeticFailureKind,
    },

    #[error("Dataset length {length} is not a non-zero power of two")]
    InvalidDatasetLength { length: usize },

    #[error("Operand columns differ in length: {first} vs {second}")]
    DatasetShape { first: usize, second: usize },

    #[error("Invalid runner configuration: {message}")]
    Config { message: String },
}

impl HarnessError {
    pub fn setup(reason: impl Into<String>) -> Self {
        HarnessError::SetupFailure {
            reason: reason.into(),
        }
    }

    pub fn config(message: impl Into<String>) -> Self {
        HarnessError::Config {
            message: message.into(),
        }
    }

    /// Attach the probe name and dataset position to a failure raised by a
    /// representation, which knows neither.
    pub fn at(self, probe: &str, index: usize) -> Self {
        match self {
            HarnessError::ArithmeticFailure { kind, .. } => HarnessError::ArithmeticFailure {
                probe: probe.to_string(),
                index,
                kind,
            },
            other => other,
        }
    }

    pub(crate) fn arithmetic(kind: ArithmeticFailureKind) -> Self {
        HarnessError::ArithmeticFailure {
            probe: String::new(),
            index: 0,
            kind,
        }
    }
}

pub type HarnessResult<T> = std::result::Result<T, HarnessError>;

// Changelog:
// - v1.0.0 (2026-10-18): Initial error type.
//   - Purpose: Single error enum for setup, arithmetic and configuration
//     failures, following the thiserror layout of the status file errors.
//   - Note: Arithmetic failures raised inside a representation are enriched
//     with probe name and index by the probe before propagation.
