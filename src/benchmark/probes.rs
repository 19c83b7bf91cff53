// Quad Bench - Free and Open Source Software Statement
//
// This project, quad-bench, is Free and Open Source Software (FOSS) licensed
// under the MIT License. You are free to use, modify, and distribute this
// software in accordance with the license terms. Contributions are welcome
// via pull requests to the project repository.
//
// File: src/benchmark/probes.rs
// Version: 1.0.0
//
// This file holds the benchmark instance and its eight operation probes. A
// probe reads the operand pair under the shared cursor, performs one
// arithmetic operation, stores the result in the same slot and advances the
// cursor. Runners call probes one at a time; nothing here measures time.
//
// Tree Location:
// - src/benchmark/probes.rs (benchmark instance and probes)
// - Depends on: benchmark/{cursor, dataset, generator}, core

use crate::benchmark::cursor::Cursor;
use crate::benchmark::dataset::Dataset;
use crate::benchmark::generator::{DatasetConfig, OperandGenerator};
use crate::core::error::HarnessResult;
use crate::core::representation::Representation;
use crate::core::types::{Operation, ProbeId, RepresentationKind};
use crate::core::{DecimalValue, QuadValue};
use log::{info, warn};
use std::time::Instant;

const LOG_TARGET: &str = "quad_bench::probes";

/// Run one probe step against `dataset`.
///
/// On failure nothing is stored and the cursor stays where it was.
#[inline]
pub fn probe<R: Representation>(
    dataset: &mut Dataset<R>,
    cursor: &mut Cursor,
    operation: Operation,
) -> HarnessResult<()> {
    let index = cursor.index();
    let (lhs, rhs) = dataset.operands(index);
    let result = lhs
        .apply(operation, rhs)
        .map_err(|e| e.at(&ProbeId::new(R::KIND, operation).name(), index))?;
    dataset.store_result(index, result);
    cursor.advance();
    Ok(())
}

/// Per-run benchmark state: one dataset per representation and the cursor
/// they share.
pub struct ArithmeticBench {
    decimal: Dataset<DecimalValue>,
    quad: Dataset<QuadValue>,
    cursor: Cursor,
}

impl ArithmeticBench {
    /// Populate both datasets from the seeded generator and put the cursor at 0.
    pub fn setup(config: &DatasetConfig) -> HarnessResult<Self> {
        config.validate()?;
        let cursor = Cursor::new(config.length)?;
        let started = Instant::now();

        let mut generator = OperandGenerator::from_config(config);
        let draws: Vec<_> = (0..config.length)
            .map(|_| (generator.next_draw(), generator.next_draw()))
            .collect();
        let decimal = Dataset::<DecimalValue>::from_draws(&generator, &draws)?;
        let quad = Dataset::<QuadValue>::from_draws(&generator, &draws)?;

        for (kind, zeros) in [
            (RepresentationKind::Decimal, decimal.zero_operands()),
            (RepresentationKind::Quad, quad.zero_operands()),
        ] {
            if zeros > 0 {
                warn!(target: LOG_TARGET,
                    "⚠️ {} zero {} operands generated; division probes will fail on them",
                    zeros, kind.as_str()
                );
            }
        }

        info!(target: LOG_TARGET,
            "📋 Datasets ready: {} pairs per representation, seed {}, scale {:e} ({:.2?})",
            config.length, config.seed, config.scale_factor, started.elapsed()
        );

        Ok(Self {
            decimal,
            quad,
            cursor,
        })
    }

    pub fn cursor(&self) -> &Cursor {
        &self.cursor
    }

    pub fn decimal_dataset(&self) -> &Dataset<DecimalValue> {
        &self.decimal
    }

    pub fn quad_dataset(&self) -> &Dataset<QuadValue> {
        &self.quad
    }

    /// Put the cursor back at 0 and forget stored results.
    pub fn reset(&mut self) {
        self.cursor.reset();
        self.decimal.clear_results();
        self.quad.clear_results();
    }

    /// Dispatch to the probe named by `id`.
    #[inline]
    pub fn run(&mut self, id: ProbeId) -> HarnessResult<()> {
        match id.representation {
            RepresentationKind::Decimal => probe(&mut self.decimal, &mut self.cursor, id.operation),
            RepresentationKind::Quad => probe(&mut self.quad, &mut self.cursor, id.operation),
        }
    }

    pub fn decimal_addition(&mut self) -> HarnessResult<()> {
        probe(&mut self.decimal, &mut self.cursor, Operation::Add)
    }

    pub fn quad_addition(&mut self) -> HarnessResult<()> {
        probe(&mut self.quad, &mut self.cursor, Operation::Add)
    }

    pub fn decimal_subtraction(&mut self) -> HarnessResult<()> {
        probe(&mut self.decimal, &mut self.cursor, Operation::Subtract)
    }

    pub fn quad_subtraction(&mut self) -> HarnessResult<()> {
        probe(&mut self.quad, &mut self.cursor, Operation::Subtract)
    }

    pub fn decimal_multiplication(&mut self) -> HarnessResult<()> {
        probe(&mut self.decimal, &mut self.cursor, Operation::Multiply)
    }

    pub fn quad_multiplication(&mut self) -> HarnessResult<()> {
        probe(&mut self.quad, &mut self.cursor, Operation::Multiply)
    }

    pub fn decimal_division(&mut self) -> HarnessResult<()> {
        probe(&mut self.decimal, &mut self.cursor, Operation::Divide)
    }

    pub fn quad_division(&mut self) -> HarnessResult<()> {
        probe(&mut self.quad, &mut self.cursor, Operation::Divide)
    }
}

// Changelog:
// - v1.0.0 (2026-10-18): Initial probes.
//   - Purpose: Eight named probes plus a ProbeId dispatch table over one
//     generic probe function that takes the cursor explicitly.
//   - Note: Both datasets are built from the same draw sequence; per pair the
//     first operand draw is taken before the second.
