// Quad Bench - Free and Open Source Software Statement
//
// This project, quad-bench, is Free and Open Source Software (FOSS) licensed
// under the MIT License. You are free to use, modify, and distribute this
// software in accordance with the license terms. Contributions are welcome
// via pull requests to the project repository.
//
// File: src/core/mod.rs
// Version: 1.0.0
//
// This file is the module declaration for the core of quad-bench. It declares
// the representation capability, its two implementations, the shared error
// type and the probe identifiers, and re-exports them.

pub mod decimal;
pub mod error;
pub mod quad;
pub mod representation;
pub mod types;

// Re-export the most commonly used items
pub use decimal::{DECIMAL_PRECISION, DecimalValue};
pub use error::{ArithmeticFailureKind, HarnessError, HarnessResult};
pub use quad::QuadValue;
pub use representation::{DRAW_BITS, Draw, Representation};
pub use types::{Operation, ProbeId, RepresentationKind};

// Changelog:
// - v1.0.0 (2026-10-18): Core of the arithmetic harness.
//   - Replaced the hashing and difficulty modules with the two numeric
//     representations behind one capability trait.
