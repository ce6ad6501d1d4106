//! Conversion between [`BFlt`] and native `binary64` (`f64`).
//!
//! `from_f64` decomposes the IEEE-754 bit pattern into an exact
//! `significand * 2^exponent` pair, the same bias arithmetic the teacher
//! workspace's own `From<f64>` impl uses. `to_f64` is the reverse direction,
//! the rounding bridge: there is no teacher implementation to start from (the
//! workspace this design grows out of left it `unimplemented!()`), so it is
//! built directly from the exact value using round-half-to-even.

use exactfp_base::{Approximation, Error, Result, Rounded, Rounding, Sign};
use exactfp_int::{SBig, UBig};

use crate::repr::BFlt;

/// Bias of a `binary64` exponent field, plus the 52 fraction bits: subtracting
/// this from the biased exponent field gives the exponent of the implicit
/// leading bit's weight.
const F64_EXP_BIAS_PLUS_FRACTION: i64 = 1023 + 52;

/// Exponent assigned to a subnormal `binary64` (the weight of its lowest bit).
const F64_SUBNORMAL_EXPONENT: i64 = -1074;

/// Largest finite `binary64` exponent of the value's leading bit (`2^1023`
/// is representable, `2^1024` overflows to infinity).
const F64_MAX_UNBIASED_EXPONENT: i64 = 1023;

/// Smallest `binary64` exponent of the leading bit of a normal number.
const F64_MIN_NORMAL_UNBIASED_EXPONENT: i64 = -1022;

impl BFlt {
    /// Decompose a finite `f64` into its exact `BFlt` value. Fails with
    /// `Error::Domain` for NaN or infinite input.
    pub fn from_f64(x: f64) -> Result<BFlt> {
        if !x.is_finite() {
            return Err(Error::domain("BFlt::from_f64: input is not finite"));
        }
        if x == 0.0 {
            return Ok(BFlt::zero());
        }

        let bits = x.to_bits();
        let sign = if bits >> 63 == 0 { Sign::Positive } else { Sign::Negative };
        let biased_exp = (bits >> 52) & 0x7ff;
        let fraction = bits & 0x000f_ffff_ffff_ffff;

        let (mantissa, exponent) = if biased_exp == 0 {
            (fraction, F64_SUBNORMAL_EXPONENT)
        } else {
            (fraction | 0x0010_0000_0000_0000, biased_exp as i64 - F64_EXP_BIAS_PLUS_FRACTION)
        };

        let magnitude = SBig::from_ubig(UBig::from_u64(mantissa));
        let significand = if matches!(sign, Sign::Negative) { magnitude.neg() } else { magnitude };
        Ok(BFlt::from_parts(significand, exponent))
    }

    /// The `binary64` nearest this exact value, ties to even. Overflow
    /// rounds to an infinity of the appropriate sign; underflow rounds to a
    /// (sign-preserving, though `BFlt` does not itself track a signed zero)
    /// zero.
    pub fn to_f64(&self) -> f64 {
        if self.is_zero() {
            return 0.0;
        }
        let negative = self.is_negative();
        let unsigned = round_magnitude_to_f64(self.significand().magnitude(), self.exponent()).value();
        let bits = unsigned.to_bits() | if negative { 1u64 << 63 } else { 0 };
        f64::from_bits(bits)
    }
}

/// Round `|value| = m * 2^e` (`m` nonzero) to the nearest `binary64`
/// magnitude, ties to even. The private digit-rounding step
/// ([`round_to_multiple_of_pow2`]) is what actually decides exactness; this
/// wrapper just carries that [`Rounding`] verdict through the exponent-range
/// bookkeeping (overflow to infinity, underflow to zero) on either side of it.
fn round_magnitude_to_f64(m: &UBig, e: i64) -> Rounded<f64> {
    let h = m.hi_bit() as i64; // 1-based index of m's top bit
    let target_exp = e + h - 1; // order of magnitude of m * 2^e

    if target_exp > F64_MAX_UNBIASED_EXPONENT {
        return Approximation::Exact(f64::INFINITY);
    }
    if target_exp < F64_SUBNORMAL_EXPONENT {
        return Approximation::Exact(0.0);
    }

    // `q` is the weight of the last bit binary64 can keep for this
    // magnitude: 52 below the leading bit in the normal range, clamped to
    // the fixed subnormal weight once the leading bit drops below it.
    let q = (target_exp - 52).max(F64_SUBNORMAL_EXPONENT);
    let digits = round_to_multiple_of_pow2(m, e - q);
    let rounding = match &digits {
        Approximation::Exact(_) => Rounding::NoOp,
        Approximation::Inexact(_, r) => *r,
    };
    let n = digits.value();

    if n.is_zero() {
        return Approximation::Inexact(0.0, rounding);
    }

    let nb = n.hi_bit() as i64;
    let final_exp = q + nb - 1;
    if final_exp > F64_MAX_UNBIASED_EXPONENT {
        return Approximation::Inexact(f64::INFINITY, rounding);
    }

    let bits = if final_exp >= F64_MIN_NORMAL_UNBIASED_EXPONENT {
        let implicit = UBig::one().shl((nb - 1) as usize).expect("nb bounded by a binary64 mantissa");
        let fraction = n.sub(&implicit).expect("n's top bit is at position nb - 1");
        let biased_exp = (final_exp + 1023) as u64;
        (biased_exp << 52) | fraction.to_u64().expect("fraction fits in 52 bits")
    } else {
        // subnormal: `n` itself is the 52-bit trailing field, no implicit bit
        n.to_u64().expect("subnormal fraction fits in 52 bits")
    };
    let value = f64::from_bits(bits);
    if rounding == Rounding::NoOp {
        Approximation::Exact(value)
    } else {
        Approximation::Inexact(value, rounding)
    }
}

/// Round `m * 2^shift` to the nearest integer, ties to even. `shift` may be
/// positive (exact left shift, no rounding needed) or negative (the low
/// `-shift` bits of `m` are discarded using round-half-to-even). The
/// returned [`Approximation`] is `Exact` whenever no discarded bit was set
/// (the shift lost no information) and `Inexact` with the [`Rounding`]
/// direction otherwise.
fn round_to_multiple_of_pow2(m: &UBig, shift: i64) -> Rounded<UBig> {
    if shift >= 0 {
        return Approximation::Exact(m.shl(shift as usize).expect("shift bounded by the target binary64 exponent range"));
    }
    let k = (-shift) as usize;
    let truncated = m.shr(k);
    let guard = m.guard_bit_set(k);
    let sticky = k >= 1 && m.sticky_below(k - 1);
    if !guard && !sticky {
        return Approximation::Exact(truncated);
    }
    let round_up = guard && (sticky || truncated.bit(0));
    if round_up {
        let rounded = truncated.add(&UBig::one()).expect("rounding up by one unit never overflows the word budget here");
        Approximation::Inexact(rounded, Rounding::AddOne)
    } else {
        Approximation::Inexact(truncated, Rounding::NoOp)
    }
}
