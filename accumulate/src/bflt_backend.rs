//! The exact [`BFlt`]-backed [`Accumulator`].
//!
//! Preferred over the `BRat` backend for plain summation: the running
//! denominator never grows, since it lives in the exponent rather than a
//! multi-word integer.

use exactfp_base::Result;
use exactfp_float::BFlt;

use crate::accumulator::{require_finite, Accumulator};

/// Running exact sum held as a single [`BFlt`].
#[derive(Clone, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BFltAccumulator {
    value: BFlt,
}

impl BFltAccumulator {
    #[inline]
    pub fn new() -> Self {
        BFltAccumulator { value: BFlt::zero() }
    }

    /// The exact running value, before rounding to `binary64`.
    #[inline]
    pub fn value(&self) -> &BFlt {
        &self.value
    }
}

impl Accumulator for BFltAccumulator {
    fn clear(&mut self) -> Result<&mut Self> {
        self.value = BFlt::zero();
        Ok(self)
    }

    fn add(&mut self, x: f64) -> Result<&mut Self> {
        require_finite(x, "BFltAccumulator::add: input is not finite")?;
        let term = BFlt::from_f64(x)?;
        self.value = self.value.add(&term)?;
        Ok(self)
    }

    fn add_abs(&mut self, x: f64) -> Result<&mut Self> {
        self.add(x.abs())
    }

    fn add2(&mut self, x: f64) -> Result<&mut Self> {
        require_finite(x, "BFltAccumulator::add2: input is not finite")?;
        let term = BFlt::from_f64(x)?.sqr()?;
        self.value = self.value.add(&term)?;
        Ok(self)
    }

    fn add_product(&mut self, a: f64, b: f64) -> Result<&mut Self> {
        require_finite(a, "BFltAccumulator::add_product: first input is not finite")?;
        require_finite(b, "BFltAccumulator::add_product: second input is not finite")?;
        let term = BFlt::from_f64(a)?.mul(&BFlt::from_f64(b)?)?;
        self.value = self.value.add(&term)?;
        Ok(self)
    }

    fn add_l1(&mut self, a: f64, b: f64) -> Result<&mut Self> {
        require_finite(a, "BFltAccumulator::add_l1: first input is not finite")?;
        require_finite(b, "BFltAccumulator::add_l1: second input is not finite")?;
        let diff = BFlt::from_f64(a)?.sub(&BFlt::from_f64(b)?)?.abs();
        self.value = self.value.add(&diff)?;
        Ok(self)
    }

    fn add_l2(&mut self, a: f64, b: f64) -> Result<&mut Self> {
        require_finite(a, "BFltAccumulator::add_l2: first input is not finite")?;
        require_finite(b, "BFltAccumulator::add_l2: second input is not finite")?;
        let diff = BFlt::from_f64(a)?.sub(&BFlt::from_f64(b)?)?;
        self.value = self.value.add(&diff.sqr()?)?;
        Ok(self)
    }

    #[inline]
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

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn signed_zero_sum_cancels_exactly() {
        let mut acc = BFltAccumulator::new();
        acc.add(1.0).unwrap().add(-1.0).unwrap();
        assert_eq!(acc.to_f64().to_bits(), 0.0f64.to_bits());
    }

    #[test]
    fn catastrophic_cancellation_recovers_the_small_term() {
        let mut acc = BFltAccumulator::new();
        acc.add(1e20).unwrap().add(1.0).unwrap().add(-1e20).unwrap();
        assert_eq!(acc.to_f64(), 1.0);
    }

    #[test]
    fn subnormal_sum_is_exact() {
        let mut acc = BFltAccumulator::new();
        acc.add(f64::from_bits(1)).unwrap().add(f64::from_bits(1)).unwrap();
        assert_eq!(acc.to_f64().to_bits(), 2u64);
    }

    #[test]
    fn sum_of_squares_does_not_overflow_until_the_final_rounding() {
        let mut acc = BFltAccumulator::new();
        acc.add2_all(&[1e200, 1e200]).unwrap();
        assert_eq!(acc.to_f64(), f64::INFINITY);
    }

    #[test]
    fn l2_distance_of_equal_vectors_is_zero() {
        let v = [1.0, -2.5, 3.25, 0.0, 1e10];
        let mut acc = BFltAccumulator::new();
        acc.add_l2_distance(&v, &v).unwrap();
        assert_eq!(acc.to_f64(), 0.0);
    }

    #[test]
    fn add_rejects_non_finite_input() {
        let mut acc = BFltAccumulator::new();
        assert!(acc.add(f64::NAN).is_err());
        assert!(acc.add(f64::INFINITY).is_err());
    }

    #[test]
    fn empty_and_single_element_sums() {
        let mut acc = BFltAccumulator::new();
        acc.add_all(&[]).unwrap();
        assert_eq!(acc.to_f64(), 0.0);
        acc.clear().unwrap().add_all(&[42.5]).unwrap();
        assert_eq!(acc.to_f64(), 42.5);
    }
}
