// Quad Bench - Free and Open Source Software Statement
//
// This project, quad-bench, is Free and Open Source Software (FOSS) licensed
// under the MIT License. You are free to use, modify, and distribute this
// software in accordance with the license terms. Contributions are welcome
// via pull requests to the project repository.
//
// File: src/benchmark/dataset.rs
// Version: 1.0.0
//
// This file implements the dataset store: three fixed-length parallel columns
// (first operand, second operand, result) for one representation. Columns are
// filled once at setup and never resized; only result slots change afterwards.
//
// Tree Location:
// - src/benchmark/dataset.rs (operand and result storage)
// - Depends on: core/representation, benchmark/generator

use crate::benchmark::generator::OperandGenerator;
use crate::core::error::{HarnessError, HarnessResult};
use crate::core::representation::{Draw, Representation};

/// Operands and result slots for one representation
#[derive(Debug, Clone)]
pub struct Dataset<R> {
    first: Vec<R>,
    second: Vec<R>,
    results: Vec<Option<R>>,
}

impl<R: Representation> Dataset<R> {
    /// Build a dataset from two operand columns of equal power-of-two length.
    pub fn new(first: Vec<R>, second: Vec<R>) -> HarnessResult<Self> {
        if first.len() != second.len() {
            return Err(HarnessError::DatasetShape {
                first: first.len(),
                second: second.len(),
            });
        }
        if !first.len().is_power_of_two() {
            return Err(HarnessError::InvalidDatasetLength {
                length: first.len(),
            });
        }
        let results = vec![None; first.len()];
        Ok(Self {
            first,
            second,
            results,
        })
    }

    /// Build a dataset from pre-drawn operand pairs.
    pub fn from_draws(
        generator: &OperandGenerator,
        draws: &[(Draw, Draw)],
    ) -> HarnessResult<Self> {
        let mut first = Vec::with_capacity(draws.len());
        let mut second = Vec::with_capacity(draws.len());
        for (a, b) in draws {
            first.push(generator.operand::<R>(a)?);
            second.push(generator.operand::<R>(b)?);
        }
        Self::new(first, second)
    }

    pub fn len(&self) -> usize {
        self.first.len()
    }

    pub fn is_empty(&self) -> bool {
        self.first.is_empty()
    }

    /// Operand pair at `index`
    #[inline]
    pub fn operands(&self, index: usize) -> (&R, &R) {
        (&self.first[index], &self.second[index])
    }

    #[inline]
    pub fn store_result(&mut self, index: usize, value: R) {
        self.results[index] = Some(value);
    }

    pub fn result(&self, index: usize) -> Option<&R> {
        self.results[index].as_ref()
    }

    /// Number of result slots written so far
    pub fn written_results(&self) -> usize {
        self.results.iter().filter(|slot| slot.is_some()).count()
    }

    pub fn first_operands(&self) -> &[R] {
        &self.first
    }

    pub fn second_operands(&self) -> &[R] {
        &self.second
    }

    /// Number of zero operands; such operands make the matching division
    /// probe fail.
    pub fn zero_operands(&self) -> usize {
        self.first
            .iter()
            .chain(self.second.iter())
            .filter(|value| value.is_zero())
            .count()
    }

    /// Forget every stored result.
    pub fn clear_results(&mut self) {
        self.results.iter_mut().for_each(|slot| *slot = None);
    }
}


// Changelog:
// - v1.0.0 (2026-10-18): Initial dataset store.
//   - Purpose: Fixed-size operand columns plus result slots; writing results
//     keeps every computed value observable.
//   - Note: Result slots are Option so tests can see which positions a probe
//     wrote.
