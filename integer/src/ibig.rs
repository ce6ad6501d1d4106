//! [`SBig`]: a signed arbitrary-precision integer, layered as sign +
//! [`UBig`] magnitude.

use alloc::vec::Vec;
use core::cmp::Ordering;
use core::fmt;

use exactfp_base::{Error, Result, Sign};

use crate::ubig::UBig;

/// An arbitrary-precision signed integer: a [`Sign`] paired with a
/// non-negative [`UBig`] magnitude. Zero is always stored with
/// `Sign::Positive` (`sign = 0 <=> magnitude = 0` from the data model, with
/// "positive" standing in for the base crate's two-variant `Sign`).
#[derive(Clone, Eq, PartialEq, Hash)]
pub struct SBig {
    sign: Sign,
    mag: UBig,
}

impl SBig {
    #[inline]
    fn new(sign: Sign, mag: UBig) -> Self {
        if mag.is_zero() {
            SBig { sign: Sign::Positive, mag }
        } else {
            SBig { sign, mag }
        }
    }

    #[inline]
    pub fn zero() -> Self {
        SBig { sign: Sign::Positive, mag: UBig::zero() }
    }

    #[inline]
    pub fn one() -> Self {
        SBig::new(Sign::Positive, UBig::one())
    }

    #[inline]
    pub fn from_ubig(mag: UBig) -> Self {
        SBig::new(Sign::Positive, mag)
    }

    pub fn from_u64(u: u64) -> Self {
        SBig::new(Sign::Positive, UBig::from_u64(u))
    }

    pub fn from_i64(x: i64) -> Self {
        if x >= 0 {
            SBig::new(Sign::Positive, UBig::from_u64(x as u64))
        } else {
            // `x.unsigned_abs()` handles `i64::MIN` correctly (its magnitude
            // does not fit in `i64`).
            SBig::new(Sign::Negative, UBig::from_u64(x.unsigned_abs()))
        }
    }

    #[inline]
    pub fn is_zero(&self) -> bool {
        self.mag.is_zero()
    }

    #[inline]
    pub fn is_negative(&self) -> bool {
        matches!(self.sign, Sign::Negative)
    }

    #[inline]
    pub fn is_positive(&self) -> bool {
        !self.is_zero() && !self.is_negative()
    }

    /// `-1`, `0`, or `+1`.
    pub fn signum(&self) -> i32 {
        if self.is_zero() {
            0
        } else if self.is_negative() {
            -1
        } else {
            1
        }
    }

    #[inline]
    pub fn sign(&self) -> Sign {
        self.sign
    }

    #[inline]
    pub fn magnitude(&self) -> &UBig {
        &self.mag
    }

    #[inline]
    pub fn into_magnitude(self) -> UBig {
        self.mag
    }

    /// The magnitude, as a non-negative `SBig`.
    pub fn abs(&self) -> Self {
        SBig::new(Sign::Positive, self.mag.clone())
    }

    pub fn neg(&self) -> Self {
        SBig::new(-self.sign, self.mag.clone())
    }

    pub fn add(&self, other: &SBig) -> Result<Self> {
        if self.sign == other.sign {
            Ok(SBig::new(self.sign, self.mag.add(&other.mag)?))
        } else {
            match self.mag.cmp_ubig(&other.mag) {
                Ordering::Equal => Ok(SBig::zero()),
                Ordering::Greater => Ok(SBig::new(self.sign, self.mag.sub(&other.mag)?)),
                Ordering::Less => Ok(SBig::new(other.sign, other.mag.sub(&self.mag)?)),
            }
        }
    }

    pub fn sub(&self, other: &SBig) -> Result<Self> {
        self.add(&other.neg())
    }

    pub fn mul(&self, other: &SBig) -> Result<Self> {
        Ok(SBig::new(self.sign * other.sign, self.mag.mul(&other.mag)?))
    }

    /// Truncating division and remainder (quotient rounds toward zero,
    /// remainder takes the sign of `self`), matching the semantics of
    /// primitive signed integer division.
    pub fn div_rem(&self, other: &SBig) -> Result<(Self, Self)> {
        if other.is_zero() {
            return Err(Error::domain("SBig::div_rem: zero divisor"));
        }
        let (q_mag, r_mag) = self.mag.div_rem(&other.mag)?;
        let q = SBig::new(self.sign * other.sign, q_mag);
        let r = SBig::new(self.sign, r_mag);
        Ok((q, r))
    }

    #[inline]
    pub fn div(&self, other: &SBig) -> Result<Self> {
        Ok(self.div_rem(other)?.0)
    }

    #[inline]
    pub fn rem(&self, other: &SBig) -> Result<Self> {
        Ok(self.div_rem(other)?.1)
    }

    /// `hi_bit` of the magnitude: the 1-based index of the most significant
    /// set bit, `0` for zero.
    #[inline]
    pub fn hi_bit(&self) -> usize {
        self.mag.hi_bit()
    }

    /// Number of trailing zero bits in the magnitude. `None` for zero.
    #[inline]
    pub fn trailing_zeros(&self) -> Option<usize> {
        self.mag.trailing_zeros()
    }

    /// `self * 2^k`, preserving sign.
    #[inline]
    pub fn shl(&self, k: usize) -> Result<Self> {
        Ok(SBig::new(self.sign, self.mag.shl(k)?))
    }

    /// `self / 2^k` rounded toward zero (magnitude floor-shifted), preserving
    /// sign.
    #[inline]
    pub fn shr(&self, k: usize) -> Self {
        SBig::new(self.sign, self.mag.shr(k))
    }

    /// `self * self`. Always non-negative.
    #[inline]
    pub fn sqr(&self) -> Result<Self> {
        Ok(SBig::new(Sign::Positive, self.mag.sqr()?))
    }

    pub fn cmp_sbig(&self, other: &SBig) -> Ordering {
        match (self.is_negative(), other.is_negative()) {
            (false, false) => self.mag.cmp_ubig(&other.mag),
            (true, true) => other.mag.cmp_ubig(&self.mag),
            (false, true) => Ordering::Greater,
            (true, false) => Ordering::Less,
        }
    }

    /// Two's-complement big-endian byte encoding (bit-exact with the host
    /// runtime's own arbitrary-precision integer type, per the interop
    /// contract).
    pub fn to_be_bytes(&self) -> Vec<u8> {
        if self.is_zero() {
            return alloc::vec![0];
        }
        if !self.is_negative() {
            let mut bytes = self.mag.to_be_bytes();
            if bytes.first().map_or(false, |&b| b & 0x80 != 0) {
                bytes.insert(0, 0);
            }
            bytes
        } else {
            let out_len = twos_complement_len(&self.mag);
            let modulus = UBig::one().shl(out_len * 8).expect("twos-complement length is bounded");
            let complement = modulus.sub(&self.mag).expect("magnitude fits below the chosen modulus");
            let mut bytes = complement.to_be_bytes();
            while bytes.len() < out_len {
                bytes.insert(0, 0);
            }
            bytes
        }
    }

    /// Inverse of [`to_be_bytes`](Self::to_be_bytes).
    pub fn from_be_bytes(bytes: &[u8]) -> Result<Self> {
        if bytes.is_empty() || bytes.iter().all(|&b| b == 0) {
            return Ok(SBig::zero());
        }
        if bytes[0] & 0x80 == 0 {
            Ok(SBig::new(Sign::Positive, UBig::from_be_bytes(bytes)?))
        } else {
            let len = bytes.len();
            let raw = UBig::from_be_bytes(bytes)?;
            let modulus = UBig::one().shl(len * 8)?;
            let mag = modulus.sub(&raw)?;
            Ok(SBig::new(Sign::Negative, mag))
        }
    }
}

/// Minimal byte length of the two's-complement encoding of `-mag` (`mag` is
/// the magnitude of a negative `SBig`).
fn twos_complement_len(mag: &UBig) -> usize {
    let bytes = mag.to_be_bytes();
    if bytes.is_empty() {
        return 1;
    }
    let len = bytes.len();
    let is_exact_negative_pow2 = bytes[0] == 0x80 && bytes[1..].iter().all(|&b| b == 0);
    if is_exact_negative_pow2 || bytes[0] & 0x80 == 0 {
        len
    } else {
        len + 1
    }
}

impl PartialOrd for SBig {
    #[inline]
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for SBig {
    #[inline]
    fn cmp(&self, other: &Self) -> Ordering {
        self.cmp_sbig(other)
    }
}

impl From<UBig> for SBig {
    #[inline]
    fn from(mag: UBig) -> Self {
        SBig::from_ubig(mag)
    }
}

impl From<i64> for SBig {
    #[inline]
    fn from(x: i64) -> Self {
        SBig::from_i64(x)
    }
}

impl fmt::Display for SBig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_negative() {
            write!(f, "-")?;
        }
        write!(f, "{}", self.mag)
    }
}

impl fmt::Debug for SBig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "SBig({self})")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn shl_shr_preserve_sign() {
        let neg = SBig::from_i64(-7);
        let shifted = neg.shl(4).unwrap();
        assert_eq!(shifted, SBig::from_i64(-112));
        assert_eq!(shifted.shr(4), neg);
    }

    #[test]
    fn sqr_is_always_nonnegative() {
        assert_eq!(SBig::from_i64(-6).sqr().unwrap(), SBig::from_i64(36));
        assert_eq!(SBig::from_i64(6).sqr().unwrap(), SBig::from_i64(36));
    }

    #[test]
    fn zero_is_canonically_positive() {
        let z = SBig::from_i64(5).sub(&SBig::from_i64(5)).unwrap();
        assert!(z.is_zero());
        assert!(!z.is_negative());
    }

    #[test]
    fn add_and_sub_match_i64_arithmetic() {
        for (a, b) in [(5i64, 3i64), (-5, 3), (5, -3), (-5, -3), (0, 7), (7, 0)] {
            let sum = SBig::from_i64(a).add(&SBig::from_i64(b)).unwrap();
            assert_eq!(sum, SBig::from_i64(a + b));
            let diff = SBig::from_i64(a).sub(&SBig::from_i64(b)).unwrap();
            assert_eq!(diff, SBig::from_i64(a - b));
        }
    }

    #[test]
    fn mul_matches_i64_arithmetic() {
        for (a, b) in [(6i64, 7i64), (-6, 7), (6, -7), (-6, -7)] {
            assert_eq!(SBig::from_i64(a).mul(&SBig::from_i64(b)).unwrap(), SBig::from_i64(a * b));
        }
    }

    #[test]
    fn div_rem_truncates_toward_zero_like_i64() {
        for (a, b) in [(7i64, 2i64), (-7, 2), (7, -2), (-7, -2)] {
            let (q, r) = SBig::from_i64(a).div_rem(&SBig::from_i64(b)).unwrap();
            assert_eq!(q, SBig::from_i64(a / b));
            assert_eq!(r, SBig::from_i64(a % b));
        }
    }

    #[test]
    fn ordering_accounts_for_sign() {
        assert!(SBig::from_i64(-5) < SBig::from_i64(-3));
        assert!(SBig::from_i64(-1) < SBig::from_i64(1));
        assert!(SBig::from_i64(3) < SBig::from_i64(5));
    }

    #[test]
    fn be_bytes_round_trip_signed_values() {
        for x in [0i64, 1, -1, 127, 128, -128, -129, 255, -255, i64::MAX, i64::MIN + 1] {
            let s = SBig::from_i64(x);
            let bytes = s.to_be_bytes();
            assert_eq!(SBig::from_be_bytes(&bytes).unwrap(), s, "round trip failed for {x}");
        }
    }

    #[test]
    fn be_bytes_match_twos_complement_reference() {
        assert_eq!(SBig::from_i64(-1).to_be_bytes(), alloc::vec![0xff]);
        assert_eq!(SBig::from_i64(-128).to_be_bytes(), alloc::vec![0x80]);
        assert_eq!(SBig::from_i64(-129).to_be_bytes(), alloc::vec![0xff, 0x7f]);
        assert_eq!(SBig::from_i64(127).to_be_bytes(), alloc::vec![0x7f]);
        assert_eq!(SBig::from_i64(128).to_be_bytes(), alloc::vec![0x00, 0x80]);
    }
}
