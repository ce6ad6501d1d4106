//! Uniform random generation for [`UBig`]/[`SBig`], gated behind the `rand`
//! feature. Intended for randomized property tests, not for cryptographic
//! use.

use alloc::vec;
use alloc::vec::Vec;

use rand_v08::{Rng, RngCore};

use crate::ubig::UBig;
use crate::{SBig, Word};

impl UBig {
    /// A uniformly random value with exactly `bits` bits (the top bit is
    /// always set, unless `bits == 0`, in which case the result is zero).
    pub fn random_with_bit_len<R: RngCore + ?Sized>(rng: &mut R, bits: usize) -> Self {
        if bits == 0 {
            return UBig::zero();
        }
        let n_words = (bits + 31) / 32;
        let mut words: Vec<Word> = vec![0; n_words];
        rng.fill(words.as_mut_slice());
        let top_bits_used = bits - (n_words - 1) * 32;
        if top_bits_used < 32 {
            words[n_words - 1] &= (1u32 << top_bits_used) - 1;
        }
        words[n_words - 1] |= 1u32 << (top_bits_used - 1);
        UBig::from_words(&words).expect("bit length is caller-bounded")
    }

    /// A uniformly random value in `[0, bound)`. Panics if `bound` is zero.
    pub fn random_below<R: RngCore + ?Sized>(rng: &mut R, bound: &UBig) -> Self {
        assert!(!bound.is_zero(), "UBig::random_below: bound must be nonzero");
        let bits = bound.bit_len();
        loop {
            let candidate = UBig::random_with_bit_len_inclusive(rng, bits);
            if candidate.cmp_ubig(bound) == core::cmp::Ordering::Less {
                return candidate;
            }
        }
    }

    /// A uniformly random value with at most `bits` bits (unlike
    /// [`random_with_bit_len`](Self::random_with_bit_len), the top bit need
    /// not be set).
    fn random_with_bit_len_inclusive<R: RngCore + ?Sized>(rng: &mut R, bits: usize) -> Self {
        if bits == 0 {
            return UBig::zero();
        }
        let n_words = (bits + 31) / 32;
        let mut words: Vec<Word> = vec![0; n_words];
        rng.fill(words.as_mut_slice());
        let top_bits_used = bits - (n_words - 1) * 32;
        if top_bits_used < 32 {
            words[n_words - 1] &= (1u32 << top_bits_used) - 1;
        }
        UBig::from_words(&words).expect("bit length is caller-bounded")
    }
}

impl SBig {
    /// A uniformly random value with the given sign and magnitude bit
    /// length. `negative` is ignored for a zero-bit magnitude (the result is
    /// always the canonical, positively-signed zero).
    pub fn random_with_bit_len<R: RngCore + ?Sized>(rng: &mut R, bits: usize, negative: bool) -> Self {
        let mag = UBig::random_with_bit_len(rng, bits);
        if negative {
            SBig::from_ubig(mag).neg()
        } else {
            SBig::from_ubig(mag)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand_v08::SeedableRng;
    use rand_v08::rngs::StdRng;

    #[test]
    fn random_with_bit_len_has_exact_bit_length() {
        let mut rng = StdRng::seed_from_u64(42);
        for bits in [1, 7, 32, 33, 64, 100, 257] {
            let u = UBig::random_with_bit_len(&mut rng, bits);
            assert_eq!(u.bit_len(), bits);
        }
    }

    #[test]
    fn random_below_is_always_smaller() {
        let mut rng = StdRng::seed_from_u64(7);
        let bound = UBig::from_u64(1_000_000_007);
        for _ in 0..200 {
            let x = UBig::random_below(&mut rng, &bound);
            assert!(x.cmp_ubig(&bound) == core::cmp::Ordering::Less);
        }
    }

    #[test]
    fn signed_random_respects_requested_sign() {
        let mut rng = StdRng::seed_from_u64(11);
        let neg = SBig::random_with_bit_len(&mut rng, 40, true);
        assert!(neg.is_negative());
        let pos = SBig::random_with_bit_len(&mut rng, 40, false);
        assert!(!pos.is_negative());
    }
}
