//! Multiplication of word sequences: schoolbook, Karatsuba and Toom-Cook-3,
//! selected by the smaller operand's word count.

mod karatsuba;
mod toom3;

use alloc::vec;
use alloc::vec::Vec;

use crate::math::mul_add_2carry;
use crate::{Word, MAX_WORDS};

/// Below this word count of the smaller operand, schoolbook multiplication
/// is used.
pub(crate) const THRESHOLD_KARATSUBA: usize = 32;

/// Below this word count of the smaller operand, Karatsuba multiplication is
/// used; at or above it, Toom-Cook-3.
pub(crate) const THRESHOLD_TOOM3: usize = 128;

/// Multiply two canonical word slices, returning an un-trimmed result of
/// length `a.len() + b.len()`.
pub(crate) fn mul_words(a: &[Word], b: &[Word]) -> Vec<Word> {
    if a.is_empty() || b.is_empty() {
        return Vec::new();
    }
    let n = a.len().min(b.len());
    if n <= THRESHOLD_KARATSUBA {
        schoolbook(a, b)
    } else if n <= THRESHOLD_TOOM3 {
        karatsuba::mul(a, b)
    } else {
        toom3::mul(a, b)
    }
}

/// Schoolbook O(n*m) multiplication.
pub(crate) fn schoolbook(a: &[Word], b: &[Word]) -> Vec<Word> {
    let mut out = vec![0 as Word; a.len() + b.len()];
    for (i, &ai) in a.iter().enumerate() {
        if ai == 0 {
            continue;
        }
        let mut carry: Word = 0;
        for (j, &bj) in b.iter().enumerate() {
            let (lo, hi) = mul_add_2carry(ai, bj, out[i + j], carry);
            out[i + j] = lo;
            carry = hi;
        }
        // The carry chain out of a row can itself ripple through several
        // already-populated higher words.
        let mut k = i + b.len();
        let mut c = carry;
        while c != 0 {
            let (s, overflowed) = out[k].overflowing_add(c);
            out[k] = s;
            c = overflowed as Word;
            k += 1;
        }
    }
    out
}

impl crate::UBig {
    /// `self * v`.
    pub fn mul(&self, v: &UBig) -> crate::Result<Self> {
        if self.is_zero() || v.is_zero() {
            return Ok(UBig::zero());
        }
        if self.words().len() + v.words().len() > MAX_WORDS + 1 {
            return Err(exactfp_base::Error::overflow("UBig::mul"));
        }
        let out = mul_words(self.words(), v.words());
        UBig::from_words(&out)
    }

    /// `self * u` for a plain 64-bit multiplier.
    pub fn mul_u64(&self, u: u64) -> crate::Result<Self> {
        self.mul(&UBig::from_u64(u))
    }
}

use crate::UBig;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::UBig;

    #[test]
    fn schoolbook_matches_u64_multiplication() {
        let a = UBig::from_u64(123_456);
        let b = UBig::from_u64(987_654);
        assert_eq!(a.mul(&b).unwrap().to_u64().unwrap(), 123_456u64 * 987_654);
    }

    #[test]
    fn mul_by_zero_is_zero() {
        let a = UBig::from_u64(999);
        assert!(a.mul(&UBig::zero()).unwrap().is_zero());
    }

    #[test]
    fn mul_is_commutative() {
        let a = UBig::from_u64(0xdead_beef);
        let b = UBig::from_u64(0x1234_5678_9abc);
        assert_eq!(a.mul(&b).unwrap(), b.mul(&a).unwrap());
    }

    #[test]
    fn mul_matches_repeated_addition_for_small_values() {
        let a = UBig::from_u64(17);
        let mut acc = UBig::zero();
        for _ in 0..23 {
            acc = acc.add(&a).unwrap();
        }
        assert_eq!(a.mul(&UBig::from_u64(23)).unwrap(), acc);
    }
}
