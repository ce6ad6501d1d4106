//! Conversion between [`BRat`] and native `binary64` (`f64`).
//!
//! `to_f64` is the rounding bridge: round `numerator / denominator` to the
//! nearest `binary64`, ties to even. The division is computed once, via
//! `UBig::div_rem` on a pre-shifted numerator -- the quotient carries far
//! more bits than a double ever keeps, and the division's remainder alone
//! decides the sticky bit for whatever those extra bits truncate away, so no
//! second comparison against the denominator is needed.

use exactfp_base::{Approximation, Error, Result, Rounded, Rounding, Sign};
use exactfp_int::{SBig, UBig};

use crate::rbig::BRat;

const F64_MAX_UNBIASED_EXPONENT: i64 = 1023;
const F64_MIN_NORMAL_UNBIASED_EXPONENT: i64 = -1022;
const F64_SUBNORMAL_EXPONENT: i64 = -1074;

/// Extra bits of quotient precision carried beyond the 53 a double keeps,
/// so the single division below always has enough headroom that its
/// quotient's own low bits (not just the division remainder) supply the
/// guard and sticky information -- see the `debug_assert` in
/// [`round_ratio_to_f64`].
const EXTRA_QUOTIENT_BITS: i64 = 64;

impl BRat {
    /// Decompose a finite `f64` into the exact `BRat` it represents.
    /// Fails with `Error::Domain` for NaN or infinite input.
    pub fn from_f64(x: f64) -> Result<BRat> {
        if !x.is_finite() {
            return Err(Error::domain("BRat::from_f64: input is not finite"));
        }
        if x == 0.0 {
            return Ok(BRat::zero());
        }

        let bits = x.to_bits();
        let sign = if bits >> 63 == 0 { Sign::Positive } else { Sign::Negative };
        let biased_exp = (bits >> 52) & 0x7ff;
        let fraction = bits & 0x000f_ffff_ffff_ffff;

        let (mantissa, exponent) = if biased_exp == 0 {
            (fraction, F64_SUBNORMAL_EXPONENT)
        } else {
            (fraction | 0x0010_0000_0000_0000, biased_exp as i64 - (1023 + 52))
        };

        let magnitude = SBig::from_ubig(UBig::from_u64(mantissa));
        let numerator = if matches!(sign, Sign::Negative) { magnitude.neg() } else { magnitude };

        if exponent >= 0 {
            let numerator = numerator.shl(exponent as usize)?;
            BRat::from_parts(numerator, UBig::one())
        } else {
            let denominator = UBig::one().shl((-exponent) as usize)?;
            BRat::from_parts(numerator, denominator)
        }
    }

    /// The `binary64` nearest this exact value, ties to even.
    pub fn to_f64(&self) -> f64 {
        if self.is_zero() {
            return 0.0;
        }
        let negative = self.is_negative();
        let unsigned = round_ratio_to_f64(self.numerator().magnitude(), self.denominator()).value();
        let bits = unsigned.to_bits() | if negative { 1u64 << 63 } else { 0 };
        f64::from_bits(bits)
    }
}

/// Round `q`, with an extra out-of-band `sticky_extra` bit (the division
/// remainder from computing `q`), to a multiple of `2^discard` using
/// round-half-to-even. Returns `Exact` when the discarded bits and
/// `sticky_extra` were all zero (no information lost), `Inexact` with the
/// [`Rounding`] direction otherwise.
fn round_quotient_half_even(q: &UBig, discard: usize, sticky_extra: bool) -> Rounded<UBig> {
    let truncated = q.shr(discard);
    let guard = q.guard_bit_set(discard);
    let sticky = (discard >= 1 && q.sticky_below(discard - 1)) || sticky_extra;
    if !guard && !sticky {
        return Approximation::Exact(truncated);
    }
    let round_up = guard && (sticky || truncated.bit(0));
    if round_up {
        let rounded = truncated.add(&UBig::one()).expect("rounding up by one unit never overflows here");
        Approximation::Inexact(rounded, Rounding::AddOne)
    } else {
        Approximation::Inexact(truncated, Rounding::NoOp)
    }
}

/// Round `n / d` to the nearest `binary64` magnitude, ties to even. The
/// private digit-rounding step ([`round_quotient_half_even`]) is what
/// actually decides exactness; this wrapper carries that [`Rounding`]
/// verdict through the exponent-range bookkeeping around it.
fn round_ratio_to_f64(n: &UBig, d: &UBig) -> Rounded<f64> {
    let hn = n.hi_bit() as i64;
    let hd = d.hi_bit() as i64;
    let k = hd - hn + EXTRA_QUOTIENT_BITS;

    let (q, r) = if k >= 0 {
        let shifted_n = n.shl(k as usize).expect("k is bounded by hi_bit arithmetic plus a fixed constant");
        shifted_n.div_rem(d).expect("denominator is nonzero")
    } else {
        let shifted_d = d.shl((-k) as usize).expect("k is bounded by hi_bit arithmetic plus a fixed constant");
        n.div_rem(&shifted_d).expect("shifted denominator is nonzero since d is nonzero")
    };
    let remainder_nonzero = !r.is_zero();

    let qb = q.hi_bit() as i64;
    let target_exp = qb - k - 1;

    if target_exp > F64_MAX_UNBIASED_EXPONENT {
        return Approximation::Exact(f64::INFINITY);
    }
    if target_exp < F64_SUBNORMAL_EXPONENT {
        return Approximation::Exact(0.0);
    }

    let q_weight = (target_exp - 52).max(F64_SUBNORMAL_EXPONENT);
    let shift = -k - q_weight;
    debug_assert!(shift < 0, "EXTRA_QUOTIENT_BITS leaves enough headroom that bits are always discarded here");
    let discard = (-shift) as usize;

    let digits = round_quotient_half_even(&q, discard, remainder_nonzero);
    let rounding = match &digits {
        Approximation::Exact(_) => Rounding::NoOp,
        Approximation::Inexact(_, r) => *r,
    };
    let n_rounded = digits.value();

    if n_rounded.is_zero() {
        return Approximation::Inexact(0.0, rounding);
    }

    let nb = n_rounded.hi_bit() as i64;
    let final_exp = q_weight + nb - 1;
    if final_exp > F64_MAX_UNBIASED_EXPONENT {
        return Approximation::Inexact(f64::INFINITY, rounding);
    }

    let bits = if final_exp >= F64_MIN_NORMAL_UNBIASED_EXPONENT {
        let implicit = UBig::one().shl((nb - 1) as usize).expect("nb bounded by a binary64 mantissa");
        let fraction = n_rounded.sub(&implicit).expect("n_rounded's top bit is at position nb - 1");
        let biased_exp = (final_exp + 1023) as u64;
        (biased_exp << 52) | fraction.to_u64().expect("fraction fits in 52 bits")
    } else {
        n_rounded.to_u64().expect("subnormal fraction fits in 52 bits")
    };
    let value = f64::from_bits(bits);
    if rounding == Rounding::NoOp {
        Approximation::Exact(value)
    } else {
        Approximation::Inexact(value, rounding)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_f64_round_trips_through_to_f64() {
        for x in [1.0, -1.0, 0.5, 123.456, 1e20, 1e-20, f64::MIN_POSITIVE, -f64::MIN_POSITIVE, 1.0 / 3.0] {
            let r = BRat::from_f64(x).unwrap();
            assert_eq!(r.to_f64(), x, "round trip failed for {x}");
        }
    }

    #[test]
    fn from_f64_rejects_non_finite() {
        assert!(BRat::from_f64(f64::NAN).is_err());
        assert!(BRat::from_f64(f64::INFINITY).is_err());
    }

    #[test]
    fn one_third_rounds_to_nearest_double() {
        let third = BRat::from_parts(SBig::from_i64(1), UBig::from_u64(3)).unwrap();
        assert_eq!(third.to_f64(), 1.0 / 3.0);
    }

    #[test]
    fn large_numerator_over_small_denominator_overflows_to_infinity() {
        let huge = BRat::from_parts(SBig::from_u64(u64::MAX), UBig::one()).unwrap();
        let mut v = huge;
        for _ in 0..20 {
            v = v.mul(&v).unwrap();
        }
        assert_eq!(v.to_f64(), f64::INFINITY);
    }

    #[test]
    fn tiny_fraction_underflows_to_zero() {
        let tiny = BRat::from_parts(SBig::one(), UBig::one().shl(2000).unwrap()).unwrap();
        assert_eq!(tiny.to_f64(), 0.0);
    }
}
