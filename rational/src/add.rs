//! Exact addition and subtraction for [`BRat`].
//!
//! `a/b + c/d = (a*d + c*b) / (b*d)`, reduced afterward by the same lazy GCD
//! pass every other constructor goes through.

use core::ops::{Add, Sub};

use exactfp_base::Result;

use crate::rbig::BRat;
use crate::repr::Repr;

impl BRat {
    pub fn add(&self, other: &BRat) -> Result<BRat> {
        let a = &self.0.numerator;
        let b = &self.0.denominator;
        let c = &other.0.numerator;
        let d = &other.0.denominator;

        let numerator = a.mul(&exactfp_int::SBig::from_ubig(d.clone()))?
            .add(&c.mul(&exactfp_int::SBig::from_ubig(b.clone()))?)?;
        let denominator = b.mul(d)?;
        Ok(BRat(Repr { numerator, denominator }.reduce()))
    }

    pub fn sub(&self, other: &BRat) -> Result<BRat> {
        self.add(&other.neg())
    }
}

impl Add for &BRat {
    type Output = Result<BRat>;
    #[inline]
    fn add(self, other: &BRat) -> Result<BRat> {
        BRat::add(self, other)
    }
}

impl Sub for &BRat {
    type Output = Result<BRat>;
    #[inline]
    fn sub(self, other: &BRat) -> Result<BRat> {
        BRat::sub(self, other)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use exactfp_int::{SBig, UBig};

    #[test]
    fn add_matches_elementary_fraction_arithmetic() {
        let a = BRat::from_parts(SBig::from_i64(1), UBig::from_u64(2)).unwrap(); // 1/2
        let b = BRat::from_parts(SBig::from_i64(1), UBig::from_u64(3)).unwrap(); // 1/3
        let sum = a.add(&b).unwrap();
        assert_eq!(sum, BRat::from_parts(SBig::from_i64(5), UBig::from_u64(6)).unwrap());
    }

    #[test]
    fn sub_of_equal_values_is_zero() {
        let a = BRat::from_parts(SBig::from_i64(7), UBig::from_u64(11)).unwrap();
        assert!(a.sub(&a).unwrap().is_zero());
    }
}
