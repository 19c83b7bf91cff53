// Quad Bench - Free and Open Source Software Statement
//
// This project, quad-bench, is Free and Open Source Software (FOSS) licensed
// under the MIT License. You are free to use, modify, and distribute this
// software in accordance with the license terms. Contributions are welcome
// via pull requests to the project repository.
//
// File: src/core/quad.rs
// Version: 1.0.0
//
// This file adapts arpfloat's software binary128 (FP128) Float to the
// Representation capability. Results that come out NaN or infinite are
// reported as arithmetic failures instead of being stored.
//
// Tree Location:
// - src/core/quad.rs (extended-precision float representation)
// - Depends on: arpfloat

use crate::core::error::{ArithmeticFailureKind, HarnessError, HarnessResult};
use crate::core::representation::{Draw, Representation};
use crate::core::types::RepresentationKind;
use arpfloat::{FP128, Float};
use std::fmt;

/// IEEE binary128 operand
#[derive(Clone)]
pub struct QuadValue(Float);

impl QuadValue {
    pub fn new(value: Float) -> Self {
        Self(value.cast(FP128))
    }

    pub fn from_f64(value: f64) -> Self {
        Self(Float::from_f64(value).cast(FP128))
    }

    pub fn as_float(&self) -> &Float {
        &self.0
    }

    pub fn is_finite(&self) -> bool {
        !self.0.is_nan() && !self.0.is_inf()
    }

    fn checked(value: Float) -> HarnessResult<Self> {
        let value = Self(value);
        if value.is_finite() {
            Ok(value)
        } else {
            Err(HarnessError::arithmetic(ArithmeticFailureKind::NonFinite))
        }
    }
}

impl fmt::Display for QuadValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl fmt::Debug for QuadValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "QuadValue({})", self.0)
    }
}

impl Representation for QuadValue {
    const KIND: RepresentationKind = RepresentationKind::Quad;

    fn from_draw(draw: &Draw) -> HarnessResult<Self> {
        // Each term is exact in binary64 and the sum fits 113 bits, so no
        // rounding happens here.
        let [high, middle, low] = draw.binary64_terms();
        let sum = Float::from_f64(high).cast(FP128)
            + Float::from_f64(middle).cast(FP128)
            + Float::from_f64(low).cast(FP128);
        Ok(Self(sum))
    }

    fn scale(&self, factor: f64) -> HarnessResult<Self> {
        if !factor.is_finite() {
            return Err(HarnessError::setup(format!(
                "scale factor {} is not finite",
                factor
            )));
        }
        let scaled = &self.0 * Float::from_f64(factor).cast(FP128);
        Self::checked(scaled).map_err(|_| {
            HarnessError::setup(format!("scaling by {} left the binary128 range", factor))
        })
    }

    fn add(&self, rhs: &Self) -> HarnessResult<Self> {
        Self::checked(&self.0 + &rhs.0)
    }

    fn subtract(&self, rhs: &Self) -> HarnessResult<Self> {
        Self::checked(&self.0 - &rhs.0)
    }

    fn multiply(&self, rhs: &Self) -> HarnessResult<Self> {
        Self::checked(&self.0 * &rhs.0)
    }

    fn divide(&self, rhs: &Self) -> HarnessResult<Self> {
        if rhs.0.is_zero() {
            return Err(HarnessError::arithmetic(ArithmeticFailureKind::DivisionByZero));
        }
        Self::checked(&self.0 / &rhs.0)
    }

    fn is_zero(&self) -> bool {
        self.0.is_zero()
    }

    fn to_f64(&self) -> f64 {
        self.0.as_f64()
    }
}


// Changelog:
// - v1.0.0 (2026-10-18): Initial binary128 representation.
//   - Purpose: Wraps arpfloat's FP128 Float; round-to-nearest-even is the
//     semantics' default rounding mode.
//   - Note: Operands are borrowed into arpfloat's reference operator impls, so
//     no significand is copied inside a measured call.
