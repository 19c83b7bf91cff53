// Quad Bench - Free and Open Source Software Statement
//
// This project, quad-bench, is Free and Open Source Software (FOSS) licensed
// under the MIT License. You are free to use, modify, and distribute this
// software in accordance with the license terms. Contributions are welcome
// via pull requests to the project repository.
//
// File: src/core/decimal.rs
// Version: 1.0.0
//
// This file adapts bigdecimal's BigDecimal to the Representation capability.
// Every arithmetic result is rounded to 38 significant digits, half-even, which
// keeps the decimal close to binary128 precision (about 34 digits) so the two
// representations do comparable work.
//
// Tree Location:
// - src/core/decimal.rs (arbitrary-precision decimal representation)
// - Depends on: bigdecimal, num-bigint, num-traits

use crate::core::error::{ArithmeticFailureKind, HarnessError, HarnessResult};
use crate::core::representation::{Draw, Representation};
use crate::core::types::RepresentationKind;
use bigdecimal::{BigDecimal, RoundingMode};
use num_bigint::BigInt;
use num_traits::{FromPrimitive, ToPrimitive, Zero};
use std::fmt;
use std::num::NonZeroU64;

/// Significant digits kept after every decimal operation
pub const DECIMAL_PRECISION: NonZeroU64 = match NonZeroU64::new(38) {
    Some(precision) => precision,
    None => panic!("precision must be non-zero"),
};

fn round(value: BigDecimal) -> BigDecimal {
    value.with_precision_round(DECIMAL_PRECISION, RoundingMode::HalfEven)
}

/// Arbitrary-precision decimal operand
#[derive(Debug, Clone, PartialEq)]
pub struct DecimalValue(BigDecimal);

impl DecimalValue {
    pub fn new(value: BigDecimal) -> Self {
        Self(value)
    }

    pub fn as_big_decimal(&self) -> &BigDecimal {
        &self.0
    }

    /// Number of significant digits in the unscaled value
    pub fn digits(&self) -> u64 {
        self.0.digits()
    }
}

impl fmt::Display for DecimalValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl Representation for DecimalValue {
    const KIND: RepresentationKind = RepresentationKind::Decimal;

    fn from_draw(draw: &Draw) -> HarnessResult<Self> {
        let mut significand = BigInt::from(draw.significand());
        if draw.is_negative() {
            significand = -significand;
        }
        let exponent = draw.exponent();
        let value = if exponent >= 0 {
            BigDecimal::from(significand << exponent as usize)
        } else {
            // m * 2^-k == m * 5^k / 10^k
            let k = exponent.unsigned_abs();
            BigDecimal::new(significand * BigInt::from(5u32).pow(k), k as i64)
        };
        Ok(Self(value))
    }

    fn scale(&self, factor: f64) -> HarnessResult<Self> {
        if !factor.is_finite() {
            return Err(HarnessError::setup(format!(
                "scale factor {} has no decimal value",
                factor
            )));
        }
        let factor = BigDecimal::from_f64(factor).ok_or_else(|| {
            HarnessError::setup(format!("scale factor {} cannot be converted to decimal", factor))
        })?;
        Ok(Self(round(&self.0 * &factor)))
    }

    fn add(&self, rhs: &Self) -> HarnessResult<Self> {
        Ok(Self(round(&self.0 + &rhs.0)))
    }

    fn subtract(&self, rhs: &Self) -> HarnessResult<Self> {
        Ok(Self(round(&self.0 - &rhs.0)))
    }

    fn multiply(&self, rhs: &Self) -> HarnessResult<Self> {
        Ok(Self(round(&self.0 * &rhs.0)))
    }

    fn divide(&self, rhs: &Self) -> HarnessResult<Self> {
        if rhs.0.is_zero() {
            return Err(HarnessError::arithmetic(ArithmeticFailureKind::DivisionByZero));
        }
        Ok(Self(round(&self.0 / &rhs.0)))
    }

    fn is_zero(&self) -> bool {
        self.0.is_zero()
    }

    fn to_f64(&self) -> f64 {
        self.0.to_f64().unwrap_or(f64::NAN)
    }
}


// Changelog:
// - v1.0.0 (2026-10-18): Initial decimal representation.
//   - Purpose: Wraps BigDecimal with a 38-digit half-even rounding context
//     applied after every operation, including scaling.
//   - Note: Division checks for an exact zero divisor first because
//     BigDecimal division by zero panics.
