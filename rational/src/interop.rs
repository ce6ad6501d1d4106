//! Exact conversions between [`BRat`] and [`BFlt`], gated on the
//! `exactfp-float` feature. A `BFlt` is always itself a dyadic rational
//! (`significand * 2^exponent`), so both directions are exact -- no rounding
//! bridge is involved here, unlike `to_f64`/`from_f64`.

use exactfp_base::Result;
use exactfp_float::BFlt;
use exactfp_int::UBig;

use crate::rbig::BRat;

impl BRat {
    /// The exact rational value of a `BFlt`.
    pub fn from_bflt(v: &BFlt) -> Result<BRat> {
        let significand = v.significand().clone();
        if v.exponent() >= 0 {
            let numerator = significand.shl(v.exponent() as usize)?;
            BRat::from_parts(numerator, UBig::one())
        } else {
            let denominator = UBig::one().shl((-v.exponent()) as usize)?;
            BRat::from_parts(significand, denominator)
        }
    }

    /// The exact `BFlt` value of this rational, if it has one -- i.e. if the
    /// denominator is a power of two. Fails with `Error::Domain` otherwise.
    pub fn to_bflt(&self) -> Result<BFlt> {
        let shift = self.denominator().trailing_zeros().unwrap_or(0);
        let remaining = self.denominator().shr(shift);
        if remaining != UBig::one() {
            return Err(exactfp_base::Error::domain(
                "BRat::to_bflt: denominator is not a power of two, no exact BFlt exists",
            ));
        }
        Ok(BFlt::from_parts(self.numerator().clone(), -(shift as i64)))
    }
}
