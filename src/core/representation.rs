// Quad Bench - Free and Open Source Software Statement
//
// This project, quad-bench, is Free and Open Source Software (FOSS) licensed
// under the MIT License. You are free to use, modify, and distribute this
// software in accordance with the license terms. Contributions are welcome
// via pull requests to the project repository.
//
// File: src/core/representation.rs
// Version: 1.0.0
//
// This file defines the capability every benchmarked numeric type provides:
// construction from a shared random draw, scaling, and the four arithmetic
// operations. The harness never looks inside the concrete types.
//
// Tree Location:
// - src/core/representation.rs (representation trait and shared draw)
// - Implementations: core/decimal.rs, core/quad.rs

use crate::core::error::HarnessResult;
use crate::core::types::{Operation, RepresentationKind};

/// Number of significand bits carried by a draw (the binary128 precision)
pub const DRAW_BITS: u32 = 113;

const HIGH_BITS: u32 = 53;
const MIDDLE_BITS: u32 = 53;
const LOW_BITS: u32 = DRAW_BITS - HIGH_BITS - MIDDLE_BITS;

/// Random bits appended below a binary64 deviate's last significand bit
const TAIL_BITS: u32 = DRAW_BITS - HIGH_BITS;

const SIGNIFICAND_MASK: u128 = (1u128 << DRAW_BITS) - 1;
const BINARY64_FRACTION_MASK: u64 = (1u64 << 52) - 1;

/// Smallest biased binary64 exponent accepted by `Draw::from_normal`; keeps
/// every chunk of the draw in binary64's normal range.
const MIN_BIASED_EXPONENT: u64 = 128;

/// One signed random value with a 113-bit significand, shared by both
/// representations.
///
/// The draw denotes exactly `(-1)^negative * significand * 2^exponent`. The
/// significand is split into three chunks so each chunk fits a binary64
/// exactly.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Draw {
    negative: bool,
    significand: u128,
    exponent: i32,
}

impl Draw {
    /// Build a draw from its parts; significand bits above bit 112 are dropped.
    pub fn new(negative: bool, significand: u128, exponent: i32) -> Self {
        Self {
            negative,
            significand: significand & SIGNIFICAND_MASK,
            exponent,
        }
    }

    /// Extend a binary64 deviate to 113 bits with the top bits of `tail`.
    ///
    /// The deviate keeps its sign and its 53 significand bits; the remaining
    /// 60 bits come from `tail`. Returns `None` for zero, subnormal, tiny or
    /// non-finite deviates.
    pub fn from_normal(deviate: f64, tail: u64) -> Option<Self> {
        let bits = deviate.to_bits();
        let biased = (bits >> 52) & 0x7ff;
        if !deviate.is_normal() || biased < MIN_BIASED_EXPONENT {
            return None;
        }
        let mantissa = (bits & BINARY64_FRACTION_MASK) | (1u64 << 52);
        let significand = ((mantissa as u128) << TAIL_BITS) | (tail >> (64 - TAIL_BITS)) as u128;
        Some(Self {
            negative: deviate.is_sign_negative(),
            significand,
            exponent: biased as i32 - 1075 - TAIL_BITS as i32,
        })
    }

    pub fn is_negative(&self) -> bool {
        self.negative
    }

    /// The full 113-bit significand
    pub fn significand(&self) -> u128 {
        self.significand
    }

    /// Power of two of the significand's lowest bit
    pub fn exponent(&self) -> i32 {
        self.exponent
    }

    /// The draw as three signed binary64 terms whose exact sum is its value.
    pub fn binary64_terms(&self) -> [f64; 3] {
        let high = (self.significand >> (MIDDLE_BITS + LOW_BITS)) as f64;
        let middle = ((self.significand >> LOW_BITS) & ((1u128 << MIDDLE_BITS) - 1)) as f64;
        let low = (self.significand & ((1u128 << LOW_BITS) - 1)) as f64;
        let sign = if self.negative { -1.0 } else { 1.0 };
        [
            sign * high * 2f64.powi(self.exponent + (MIDDLE_BITS + LOW_BITS) as i32),
            sign * middle * 2f64.powi(self.exponent + LOW_BITS as i32),
            sign * low * 2f64.powi(self.exponent),
        ]
    }

    pub fn is_zero(&self) -> bool {
        self.significand == 0
    }
}

/// Capability of a benchmarked numeric type.
///
/// All methods return `HarnessResult` so that a failing primitive surfaces as
/// a `HarnessError` instead of a panic or a silently poisoned value.
pub trait Representation: Clone + Sized {
    const KIND: RepresentationKind;

    /// Exact conversion of a draw into this representation.
    fn from_draw(draw: &Draw) -> HarnessResult<Self>;

    /// Multiply by a constant factor, using this representation's arithmetic.
    fn scale(&self, factor: f64) -> HarnessResult<Self>;

    fn add(&self, rhs: &Self) -> HarnessResult<Self>;

    fn subtract(&self, rhs: &Self) -> HarnessResult<Self>;

    fn multiply(&self, rhs: &Self) -> HarnessResult<Self>;

    fn divide(&self, rhs: &Self) -> HarnessResult<Self>;

    fn is_zero(&self) -> bool;

    /// Approximate value, for magnitude checks and logging only.
    fn to_f64(&self) -> f64;

    fn apply(&self, operation: Operation, rhs: &Self) -> HarnessResult<Self> {
        match operation {
            Operation::Add => self.add(rhs),
            Operation::Subtract => self.subtract(rhs),
            Operation::Multiply => self.multiply(rhs),
            Operation::Divide => self.divide(rhs),
        }
    }
}


// Changelog:
// - v1.0.0 (2026-10-18): Initial representation capability.
//   - Purpose: One trait, two implementations, static dispatch through
//     generics; the probes are written once against this trait.
//   - Note: Draw is the canonical random source; both representations
//     convert it exactly so their operand distributions match. Draws are
//     signed standard-normal deviates carried at 113 bits.
