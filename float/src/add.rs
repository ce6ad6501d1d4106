//! Exact addition and subtraction for [`BFlt`].
//!
//! Unlike a precision-bounded float, `BFlt` never rounds here: the operand
//! with the larger exponent is shifted up (an exact multiplication by a
//! power of two) so both significands share the smaller exponent, then the
//! aligned significands are added or subtracted outright.

use core::ops::{Add, Sub};

use exactfp_base::Result;
use exactfp_int::SBig;

use crate::repr::BFlt;

impl BFlt {
    /// `self + other`, exact.
    pub fn add(&self, other: &BFlt) -> Result<BFlt> {
        let (lhs, rhs, exponent) = align(self, other)?;
        Ok(BFlt::from_parts(lhs.add(&rhs)?, exponent))
    }

    /// `self - other`, exact.
    pub fn sub(&self, other: &BFlt) -> Result<BFlt> {
        self.add(&other.neg())
    }
}

/// Shift whichever operand has the larger exponent down to the smaller
/// exponent, returning the two aligned significands and their shared
/// exponent.
fn align(a: &BFlt, b: &BFlt) -> Result<(SBig, SBig, i64)> {
    use core::cmp::Ordering::*;
    match a.exponent().cmp(&b.exponent()) {
        Equal => Ok((a.significand().clone(), b.significand().clone(), a.exponent())),
        Greater => {
            let shifted = a.significand().shl((a.exponent() - b.exponent()) as usize)?;
            Ok((shifted, b.significand().clone(), b.exponent()))
        }
        Less => {
            let shifted = b.significand().shl((b.exponent() - a.exponent()) as usize)?;
            Ok((a.significand().clone(), shifted, a.exponent()))
        }
    }
}

impl Add for &BFlt {
    type Output = Result<BFlt>;
    #[inline]
    fn add(self, other: &BFlt) -> Result<BFlt> {
        BFlt::add(self, other)
    }
}

impl Sub for &BFlt {
    type Output = Result<BFlt>;
    #[inline]
    fn sub(self, other: &BFlt) -> Result<BFlt> {
        BFlt::sub(self, other)
    }
}
