//! Exact multiplication and squaring for [`BFlt`].

use core::ops::Mul;

use exactfp_base::{Error, Result};

use crate::repr::BFlt;

impl BFlt {
    /// `self * other`, exact.
    pub fn mul(&self, other: &BFlt) -> Result<BFlt> {
        let exponent = self
            .exponent()
            .checked_add(other.exponent())
            .ok_or_else(|| Error::overflow("BFlt::mul: exponent sum"))?;
        let significand = self.significand().mul(other.significand())?;
        Ok(BFlt::from_parts(significand, exponent))
    }

    /// `self * self`, exact. Cheaper than `self.mul(self)` since the
    /// underlying squaring routine skips the cross-term doubling that a
    /// general product needs.
    pub fn sqr(&self) -> Result<BFlt> {
        let exponent = self
            .exponent()
            .checked_mul(2)
            .ok_or_else(|| Error::overflow("BFlt::sqr: exponent doubling"))?;
        let significand = self.significand().sqr()?;
        Ok(BFlt::from_parts(significand, exponent))
    }
}

impl Mul for &BFlt {
    type Output = Result<BFlt>;
    #[inline]
    fn mul(self, other: &BFlt) -> Result<BFlt> {
        BFlt::mul(self, other)
    }
}
