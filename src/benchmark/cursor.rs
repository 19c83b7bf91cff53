// Quad Bench - Free and Open Source Software Statement
//
// This project, quad-bench, is Free and Open Source Software (FOSS) licensed
// under the MIT License. You are free to use, modify, and distribute this
// software in accordance with the license terms. Contributions are welcome
// via pull requests to the project repository.
//
// File: src/benchmark/cursor.rs
// Version: 1.0.0
//
// This file implements the circular cursor shared by all probes of a benchmark
// instance. Every probe call moves it one slot forward so consecutive calls
// never see the same operand pair until the dataset wraps.
//
// Tree Location:
// - src/benchmark/cursor.rs (circular dataset index)
// - Depends on: core/error

use crate::core::error::{HarnessError, HarnessResult};

/// Index into a power-of-two sized dataset, wrapped with a bitmask.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Cursor {
    position: usize,
    mask: usize,
}

impl Cursor {
    /// Create a cursor at position 0.
    ///
    /// The length must be a non-zero power of two; anything else would make
    /// the mask skip or repeat slots.
    pub fn new(length: usize) -> HarnessResult<Self> {
        if !length.is_power_of_two() {
            return Err(HarnessError::InvalidDatasetLength { length });
        }
        Ok(Self {
            position: 0,
            mask: length - 1,
        })
    }

    pub fn index(&self) -> usize {
        self.position
    }

    pub fn len(&self) -> usize {
        self.mask + 1
    }

    pub fn is_empty(&self) -> bool {
        false
    }

    /// Return the current position, then move to the next slot.
    #[inline]
    pub fn advance(&mut self) -> usize {
        let current = self.position;
        self.position = (current + 1) & self.mask;
        current
    }

    pub fn reset(&mut self) {
        self.position = 0;
    }
}

impl Iterator for Cursor {
    type Item = usize;

    /// Never returns `None`; the cursor wraps forever.
    #[inline]
    fn next(&mut self) -> Option<usize> {
        Some(self.advance())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_zero_and_non_power_of_two() {
        for length in [0, 3, 6, 65535, 65537] {
            assert_eq!(
                Cursor::new(length),
                Err(HarnessError::InvalidDatasetLength { length })
            );
        }
    }

    #[test]
    fn length_one_always_yields_zero() {
        let mut cursor = Cursor::new(1).unwrap();
        assert_eq!(cursor.by_ref().take(5).collect::<Vec<_>>(), vec![0; 5]);
        assert_eq!(cursor.index(), 0);
    }
}

// Changelog:
// - v1.0.0 (2026-10-18): Initial cursor.
//   - Purpose: Explicit cursor state passed by reference to every probe,
//     replacing an implicit field shared by benchmark methods.
//   - Note: The power-of-two requirement is checked at construction.
