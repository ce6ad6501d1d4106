//! Addition and subtraction for [`UBig`], including operand-shifted and
//! plain-`u64`-operand variants that avoid materializing an intermediate
//! shifted copy of the right-hand side.

use alloc::vec::Vec;

use exactfp_base::{Error, Result};

use crate::math::{add_carry, sub_borrow};
use crate::ubig::UBig;
use crate::MAX_WORDS;

impl UBig {
    /// `self + v`.
    pub fn add(&self, v: &UBig) -> Result<Self> {
        let (shorter, longer) = if self.words().len() <= v.words().len() {
            (self.words(), v.words())
        } else {
            (v.words(), self.words())
        };
        let mut out = Vec::with_capacity(longer.len() + 1);
        let mut carry = false;
        for i in 0..longer.len() {
            let a = longer[i];
            let b = *shorter.get(i).unwrap_or(&0);
            let (s, c) = add_carry(a, b, carry);
            out.push(s);
            carry = c;
        }
        if carry {
            if out.len() >= MAX_WORDS {
                return Err(Error::overflow("UBig::add"));
            }
            out.push(1);
        }
        UBig::from_words(&out)
    }

    /// `self - v`, requiring `self >= v`.
    pub fn sub(&self, v: &UBig) -> Result<Self> {
        if self.cmp_ubig(v) == core::cmp::Ordering::Less {
            return Err(Error::domain("UBig::sub: self < v"));
        }
        let mut out = self.words().to_vec();
        let mut borrow = false;
        for (i, &b) in v.words().iter().enumerate() {
            let (d, bw) = sub_borrow(out[i], b, borrow);
            out[i] = d;
            borrow = bw;
        }
        if borrow {
            let mut i = v.words().len();
            while borrow {
                let (d, bw) = sub_borrow(out[i], 0, borrow);
                out[i] = d;
                borrow = bw;
                i += 1;
            }
        }
        UBig::from_words(&out)
    }

    /// `self + v * 2^up_shift`.
    pub fn add_shifted(&self, v: &UBig, up_shift: usize) -> Result<Self> {
        if v.is_zero() {
            return Ok(self.clone());
        }
        let shifted = v.shl(up_shift)?;
        self.add(&shifted)
    }

    /// `self - v * 2^up_shift`, requiring `self >= v * 2^up_shift`.
    pub fn sub_shifted(&self, v: &UBig, up_shift: usize) -> Result<Self> {
        if v.is_zero() {
            return Ok(self.clone());
        }
        let shifted = v.shl(up_shift)?;
        self.sub(&shifted)
    }

    /// `self + u`.
    #[inline]
    pub fn add_u64(&self, u: u64) -> Result<Self> {
        self.add(&UBig::from_u64(u))
    }

    /// `self + u * 2^up_shift`.
    #[inline]
    pub fn add_u64_shifted(&self, u: u64, up_shift: usize) -> Result<Self> {
        self.add_shifted(&UBig::from_u64(u), up_shift)
    }

    /// `self - u`, requiring `self >= u`.
    #[inline]
    pub fn sub_u64(&self, u: u64) -> Result<Self> {
        self.sub(&UBig::from_u64(u))
    }

    /// `self - u * 2^up_shift`, requiring `self >= u * 2^up_shift`.
    #[inline]
    pub fn sub_u64_shifted(&self, u: u64, up_shift: usize) -> Result<Self> {
        self.sub_shifted(&UBig::from_u64(u), up_shift)
    }

    /// `u - self`, requiring `self <= u`.
    #[inline]
    pub fn sub_from_u64(&self, u: u64) -> Result<Self> {
        UBig::from_u64(u).sub(self)
    }

    /// `u * 2^up_shift - self`, requiring `self <= u * 2^up_shift`.
    #[inline]
    pub fn sub_from_u64_shifted(&self, u: u64, up_shift: usize) -> Result<Self> {
        UBig::from_u64(u).shl(up_shift)?.sub(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::UBig;

    #[test]
    fn add_is_commutative_and_matches_u64() {
        let a = UBig::from_u64(123_456_789);
        let b = UBig::from_u64(987_654_321);
        assert_eq!(a.add(&b).unwrap(), b.add(&a).unwrap());
        assert_eq!(a.add(&b).unwrap().to_u64().unwrap(), 123_456_789 + 987_654_321);
    }

    #[test]
    fn add_carries_across_word_boundary() {
        let a = UBig::from_u64(u64::MAX);
        let b = UBig::one();
        let sum = a.add(&b).unwrap();
        assert!(sum.to_u64().is_err());
        assert_eq!(sum.bit_len(), 65);
    }

    #[test]
    fn sub_is_inverse_of_add() {
        let a = UBig::from_u64(999_999);
        let b = UBig::from_u64(123);
        let sum = a.add(&b).unwrap();
        assert_eq!(sum.sub(&b).unwrap(), a);
    }

    #[test]
    fn sub_requires_self_ge_v() {
        let a = UBig::from_u64(1);
        let b = UBig::from_u64(2);
        assert!(a.sub(&b).is_err());
    }

    #[test]
    fn shifted_add_matches_explicit_shift_then_add() {
        let a = UBig::from_u64(7);
        let b = UBig::from_u64(9);
        let shifted_then_added = a.add(&b.shl(64).unwrap()).unwrap();
        assert_eq!(a.add_shifted(&b, 64).unwrap(), shifted_then_added);
    }

    #[test]
    fn u64_shifted_helpers_agree_with_ubig_variants() {
        let a = UBig::from_u64(5);
        assert_eq!(a.add_u64_shifted(3, 10).unwrap(), a.add_shifted(&UBig::from_u64(3), 10).unwrap());
        let big = a.add_u64_shifted(3, 10).unwrap();
        assert_eq!(big.sub_u64_shifted(3, 10).unwrap(), a);
    }
}
