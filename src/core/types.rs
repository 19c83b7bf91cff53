// Quad Bench - Free and Open Source Software Statement
//
// This project, quad-bench, is Free and Open Source Software (FOSS) licensed
// under the MIT License. You are free to use, modify, and distribute this
// software in accordance with the license terms. Contributions are welcome
// via pull requests to the project repository.
//
// File: src/core/types.rs
// Version: 1.0.0
//
// This file defines the small value types naming what is being measured:
// the arithmetic operation, the numeric representation, and the probe that
// combines the two.
//
// Tree Location:
// - src/core/types.rs (core identifiers)
// - Depends on: serde

use serde::{Deserialize, Serialize};
use std::fmt;

/// The four measured arithmetic operations
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Operation {
    Add,
    Subtract,
    Multiply,
    Divide,
}

impl Operation {
    pub const ALL: [Operation; 4] = [
        Operation::Add,
        Operation::Subtract,
        Operation::Multiply,
        Operation::Divide,
    ];

    pub const fn as_str(&self) -> &'static str {
        match self {
            Operation::Add => "addition",
            Operation::Subtract => "subtraction",
            Operation::Multiply => "multiplication",
            Operation::Divide => "division",
        }
    }
}

/// The two competing numeric representations
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RepresentationKind {
    /// Arbitrary-precision decimal rounded to 38 significant digits
    Decimal,
    /// IEEE binary128
    Quad,
}

impl RepresentationKind {
    pub const fn as_str(&self) -> &'static str {
        match self {
            RepresentationKind::Decimal => "decimal",
            RepresentationKind::Quad => "quad",
        }
    }
}

/// One benchmarked unit of work: a representation paired with an operation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ProbeId {
    pub representation: RepresentationKind,
    pub operation: Operation,
}

impl ProbeId {
    /// All eight probes, in declaration order (decimal before quad for each
    /// operation).
    pub const ALL: [ProbeId; 8] = [
        ProbeId::new(RepresentationKind::Decimal, Operation::Add),
        ProbeId::new(RepresentationKind::Quad, Operation::Add),
        ProbeId::new(RepresentationKind::Decimal, Operation::Subtract),
        ProbeId::new(RepresentationKind::Quad, Operation::Subtract),
        ProbeId::new(RepresentationKind::Decimal, Operation::Multiply),
        ProbeId::new(RepresentationKind::Quad, Operation::Multiply),
        ProbeId::new(RepresentationKind::Decimal, Operation::Divide),
        ProbeId::new(RepresentationKind::Quad, Operation::Divide),
    ];

    pub const fn new(representation: RepresentationKind, operation: Operation) -> Self {
        Self {
            representation,
            operation,
        }
    }

    /// Stable name, e.g. `decimal_addition`
    pub fn name(&self) -> String {
        self.to_string()
    }

    /// Look up a probe by its stable name
    pub fn from_name(name: &str) -> Option<ProbeId> {
        ProbeId::ALL.iter().copied().find(|probe| probe.name() == name)
    }
}

impl fmt::Display for ProbeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}_{}", self.representation.as_str(), self.operation.as_str())
    }
}


// Changelog:
// - v1.0.0 (2026-10-18): Initial identifiers.
//   - Purpose: Operation and representation axes of the arithmetic
//     benchmark and the eight probe identifiers built from them.
