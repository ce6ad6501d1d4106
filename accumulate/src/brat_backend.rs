//! The exact [`BRat`]-backed [`Accumulator`].
//!
//! Serves two roles: a backend for division-bearing reductions this crate
//! does not yet expose (mean, variance), and the reference oracle the test
//! suite checks [`crate::BFltAccumulator`] against, since a binary rational
//! and a binary float agree on every value they can both represent.

use exactfp_base::Result;
use exactfp_rational::BRat;

use crate::accumulator::{require_finite, Accumulator};

/// Running exact sum held as a single [`BRat`].
#[derive(Clone, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BRatAccumulator {
    value: BRat,
}

impl BRatAccumulator {
    #[inline]
    pub fn new() -> Self {
        BRatAccumulator { value: BRat::zero() }
    }

    /// The exact running value, before rounding to `binary64`.
    #[inline]
    pub fn value(&self) -> &BRat {
        &self.value
    }
}

impl Accumulator for BRatAccumulator {
    fn clear(&mut self) -> Result<&mut Self> {
        self.value = BRat::zero();
        Ok(self)
    }

    fn add(&mut self, x: f64) -> Result<&mut Self> {
        require_finite(x, "BRatAccumulator::add: input is not finite")?;
        let term = BRat::from_f64(x)?;
        self.value = self.value.add(&term)?;
        Ok(self)
    }

    fn add_abs(&mut self, x: f64) -> Result<&mut Self> {
        self.add(x.abs())
    }

    fn add2(&mut self, x: f64) -> Result<&mut Self> {
        require_finite(x, "BRatAccumulator::add2: input is not finite")?;
        let term = BRat::from_f64(x)?;
        self.value = self.value.add(&term.mul(&term)?)?;
        Ok(self)
    }

    fn add_product(&mut self, a: f64, b: f64) -> Result<&mut Self> {
        require_finite(a, "BRatAccumulator::add_product: first input is not finite")?;
        require_finite(b, "BRatAccumulator::add_product: second input is not finite")?;
        let term = BRat::from_f64(a)?.mul(&BRat::from_f64(b)?)?;
        self.value = self.value.add(&term)?;
        Ok(self)
    }

    fn add_l1(&mut self, a: f64, b: f64) -> Result<&mut Self> {
        require_finite(a, "BRatAccumulator::add_l1: first input is not finite")?;
        require_finite(b, "BRatAccumulator::add_l1: second input is not finite")?;
        let diff = BRat::from_f64(a)?.sub(&BRat::from_f64(b)?)?.abs();
        self.value = self.value.add(&diff)?;
        Ok(self)
    }

    fn add_l2(&mut self, a: f64, b: f64) -> Result<&mut Self> {
        require_finite(a, "BRatAccumulator::add_l2: first input is not finite")?;
        require_finite(b, "BRatAccumulator::add_l2: second input is not finite")?;
        let diff = BRat::from_f64(a)?.sub(&BRat::from_f64(b)?)?;
        self.value = self.value.add(&diff.mul(&diff)?)?;
        Ok(self)
    }

    fn to_f64(&self) -> f64 {
        self.value.to_f64()
    }

    #[inline]
    fn is_exact(&self) -> bool {
        true
    }

    #[inline]
    fn no_overflow(&self) -> bool {
        true
    }
}
