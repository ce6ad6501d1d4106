//! Division with remainder for [`UBig`].
//!
//! A single-word divisor uses plain schoolbook short division. Larger
//! divisors use Knuth's Algorithm D (TAOCP vol. 2, 4.3.1): normalize so the
//! divisor's top word has its high bit set, estimate each quotient word from
//! the top two-and-a-bit words, then correct by at most one unit.
//!
//! `Burnikel-Ziegler` recursive division is not implemented: Algorithm D is
//! quadratic in the divisor's word count, which is acceptable for the
//! operand sizes this crate's accumulators produce (see `DESIGN.md`).

use alloc::vec;
use alloc::vec::Vec;
use core::cmp::Ordering;

use exactfp_base::{DivRem, Error, Result};

use crate::ubig::UBig;
use crate::{DoubleWord, Word};

impl UBig {
    /// `(self / v, self % v)`. Fails with `Error::Domain` if `v` is zero.
    pub fn div_rem(&self, v: &UBig) -> Result<(Self, Self)> {
        if v.is_zero() {
            return Err(Error::domain("UBig::div_rem: zero divisor"));
        }
        if self.cmp_ubig(v) == Ordering::Less {
            return Ok((UBig::zero(), self.clone()));
        }
        if v.words().len() == 1 {
            let (q, r) = div_rem_small(self.words(), v.words()[0]);
            return Ok((UBig::from_words(&q)?, UBig::from_word(r)));
        }
        let (q, r) = div_rem_knuth(self.words(), v.words());
        Ok((UBig::from_words(&q)?, UBig::from_words(&r)?))
    }

    /// `self / v`, discarding the remainder.
    #[inline]
    pub fn div(&self, v: &UBig) -> Result<Self> {
        Ok(self.div_rem(v)?.0)
    }

    /// `self % v`, discarding the quotient.
    #[inline]
    pub fn rem(&self, v: &UBig) -> Result<Self> {
        Ok(self.div_rem(v)?.1)
    }
}

/// The base crate's generic ring vocabulary, for code written against
/// `DivRem` rather than `UBig`'s own `Result`-returning inherent method.
/// Panics on a zero divisor, matching the primitive-integer impls this
/// mirrors (and `Gcd`'s documented panic-on-both-zero contract) rather than
/// returning a `Result`.
impl DivRem for UBig {
    type OutputDiv = UBig;
    type OutputRem = UBig;

    fn div_rem(self, rhs: UBig) -> (UBig, UBig) {
        UBig::div_rem(&self, &rhs).expect("UBig::div_rem: zero divisor")
    }
}

/// Short division of a multi-word dividend by a single-word divisor.
fn div_rem_small(u: &[Word], d: Word) -> (Vec<Word>, Word) {
    debug_assert!(d != 0);
    let mut q = vec![0 as Word; u.len()];
    let mut rem: DoubleWord = 0;
    for i in (0..u.len()).rev() {
        let cur = (rem << Word::BITS) | u[i] as DoubleWord;
        q[i] = (cur / d as DoubleWord) as Word;
        rem = cur % d as DoubleWord;
    }
    (q, rem as Word)
}

/// Knuth's Algorithm D. `v` has at least two words and is already the
/// canonical (no leading zero word) divisor; `u` is the dividend, at least
/// as long as `v`.
fn div_rem_knuth(u: &[Word], v: &[Word]) -> (Vec<Word>, Vec<Word>) {
    let n = v.len();
    let m = u.len() - n;
    let shift = v[n - 1].leading_zeros() as usize;

    let vn = shl_into(v, shift, n);
    let mut un = shl_into(u, shift, u.len() + 1);

    let mut q = vec![0 as Word; m + 1];
    let base: u64 = 1 << Word::BITS;

    for j in (0..=m).rev() {
        let top = ((un[j + n] as u64) << Word::BITS) | un[j + n - 1] as u64;
        let mut qhat = top / vn[n - 1] as u64;
        let mut rhat = top % vn[n - 1] as u64;

        while qhat >= base
            || (n >= 2 && qhat * vn[n - 2] as u64 > (rhat << Word::BITS) | un[j + n - 2] as u64)
        {
            qhat -= 1;
            rhat += vn[n - 1] as u64;
            if rhat >= base {
                break;
            }
        }

        // Multiply `qhat * vn` and subtract from `un[j..=j+n]`.
        let mut borrow: i64 = 0;
        let mut carry: u64 = 0;
        for i in 0..n {
            let p = qhat * vn[i] as u64 + carry;
            carry = p >> Word::BITS;
            let sub = un[j + i] as i64 - (p as Word) as i64 - borrow;
            if sub < 0 {
                un[j + i] = (sub + base as i64) as Word;
                borrow = 1;
            } else {
                un[j + i] = sub as Word;
                borrow = 0;
            }
        }
        let sub = un[j + n] as i64 - carry as i64 - borrow;
        if sub < 0 {
            un[j + n] = (sub + base as i64) as Word;
            borrow = 1;
        } else {
            un[j + n] = sub as Word;
            borrow = 0;
        }

        if borrow != 0 {
            // qhat was one too large: add `vn` back once.
            qhat -= 1;
            let mut carry2: u64 = 0;
            for i in 0..n {
                let sum = un[j + i] as u64 + vn[i] as u64 + carry2;
                un[j + i] = sum as Word;
                carry2 = sum >> Word::BITS;
            }
            un[j + n] = un[j + n].wrapping_add(carry2 as Word);
        }

        q[j] = qhat as Word;
    }

    let rem = shr_words(&un[..n], shift);
    (q, rem)
}

/// Left-shift `words` by `shift` bits (`0..32`), zero-extended/truncated to
/// exactly `out_len` words.
fn shl_into(words: &[Word], shift: usize, out_len: usize) -> Vec<Word> {
    let mut out = vec![0 as Word; out_len];
    if shift == 0 {
        let n = words.len().min(out_len);
        out[..n].copy_from_slice(&words[..n]);
        return out;
    }
    let mut carry: Word = 0;
    for (i, &w) in words.iter().enumerate() {
        if i >= out_len {
            break;
        }
        out[i] = (w << shift) | carry;
        carry = w >> (Word::BITS as usize - shift);
    }
    if words.len() < out_len {
        out[words.len()] = carry;
    }
    out
}

fn shr_words(words: &[Word], shift: usize) -> Vec<Word> {
    if shift == 0 {
        return words.to_vec();
    }
    let mut out = vec![0 as Word; words.len()];
    for i in 0..words.len() {
        let lo = words[i] >> shift;
        let hi = if i + 1 < words.len() { words[i + 1] << (Word::BITS as usize - shift) } else { 0 };
        out[i] = lo | hi;
    }
    out
}
