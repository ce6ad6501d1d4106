//! Exact multiplication and reciprocal for [`BRat`].

use core::ops::Mul;

use exactfp_base::{Error, Result};
use exactfp_int::SBig;

use crate::rbig::BRat;
use crate::repr::Repr;

impl BRat {
    pub fn mul(&self, other: &BRat) -> Result<BRat> {
        let numerator = self.0.numerator.mul(&other.0.numerator)?;
        let denominator = self.0.denominator.mul(&other.0.denominator)?;
        Ok(BRat(Repr { numerator, denominator }.reduce()))
    }

    /// `1 / self`. Fails with `Error::Domain` if `self` is zero.
    pub fn reciprocal(&self) -> Result<BRat> {
        if self.is_zero() {
            return Err(Error::domain("BRat::reciprocal: zero has no reciprocal"));
        }
        let sign_negative = self.is_negative();
        let new_numerator = SBig::from_ubig(self.0.denominator.clone());
        let new_numerator = if sign_negative { new_numerator.neg() } else { new_numerator };
        let new_denominator = self.0.numerator.magnitude().clone();
        // numerator and denominator were already coprime, so no reduction is needed.
        Ok(BRat(Repr { numerator: new_numerator, denominator: new_denominator }))
    }
}

impl Mul for &BRat {
    type Output = Result<BRat>;
    #[inline]
    fn mul(self, other: &BRat) -> Result<BRat> {
        BRat::mul(self, other)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use exactfp_int::UBig;

    #[test]
    fn mul_matches_elementary_fraction_arithmetic() {
        let a = BRat::from_parts(SBig::from_i64(2), UBig::from_u64(3)).unwrap(); // 2/3
        let b = BRat::from_parts(SBig::from_i64(3), UBig::from_u64(4)).unwrap(); // 3/4
        assert_eq!(a.mul(&b).unwrap(), BRat::from_parts(SBig::from_i64(1), UBig::from_u64(2)).unwrap());
    }

    #[test]
    fn reciprocal_of_reciprocal_is_self() {
        let a = BRat::from_parts(SBig::from_i64(-5), UBig::from_u64(7)).unwrap();
        assert_eq!(a.reciprocal().unwrap().reciprocal().unwrap(), a);
    }

    #[test]
    fn reciprocal_of_zero_is_a_domain_error() {
        assert!(BRat::zero().reciprocal().is_err());
    }
}
