//! [`UBig`]: an immutable arbitrary-precision non-negative integer.

use alloc::vec;
use alloc::vec::Vec;

use exactfp_base::{BitTest, Error, Result};

use crate::buffer::Buffer;
use crate::{DoubleWord, Word, MAX_WORDS};

/// An arbitrary-precision non-negative integer.
///
/// Represented as a canonical little-endian sequence of 32-bit words (the
/// empty sequence is zero, and the top word of a nonzero value is never
/// zero). `UBig` is immutable: every operation returns a new value.
#[derive(Clone, Default, Eq, PartialEq, Hash)]
pub struct UBig(pub(crate) Buffer);

impl UBig {
    /// The value zero.
    #[inline]
    pub fn zero() -> Self {
        UBig(Buffer::zero())
    }

    /// The value one.
    #[inline]
    pub fn one() -> Self {
        UBig::from_word(1)
    }

    #[inline]
    pub fn is_zero(&self) -> bool {
        self.0.is_zero()
    }

    #[inline]
    pub(crate) fn words(&self) -> &[Word] {
        self.0.as_words()
    }

    #[inline]
    pub(crate) fn from_word(w: Word) -> Self {
        if w == 0 {
            UBig::zero()
        } else {
            UBig(Buffer::from_words(vec![w]))
        }
    }

    /// Construct from a little-endian word sequence, checking the
    /// [`MAX_WORDS`] budget.
    pub fn from_words(words: &[Word]) -> Result<Self> {
        let mut v = words.to_vec();
        Buffer::trim(&mut v);
        if v.len() > MAX_WORDS {
            return Err(Error::overflow("UBig::from_words"));
        }
        Ok(UBig(Buffer::from_words(v)))
    }

    pub(crate) fn from_words_unchecked(words: Vec<Word>) -> Self {
        debug_assert!(words.len() <= MAX_WORDS || {
            let mut v = words.clone();
            Buffer::trim(&mut v);
            v.len() <= MAX_WORDS
        });
        UBig(Buffer::from_words(words))
    }

    /// Construct from a 64-bit unsigned integer.
    #[inline]
    pub fn from_u64(x: u64) -> Self {
        let lo = x as Word;
        let hi = (x >> Word::BITS) as Word;
        if hi == 0 {
            UBig::from_word(lo)
        } else {
            UBig(Buffer::from_words(vec![lo, hi]))
        }
    }

    /// Construct `x * 2^up_shift`, i.e. a 64-bit unsigned integer shifted
    /// left by a non-negative amount.
    pub fn from_u64_shifted(x: u64, up_shift: usize) -> Result<Self> {
        if x == 0 {
            return Ok(UBig::zero());
        }
        UBig::from_u64(x).shl(up_shift)
    }

    /// The value as a `u64`, failing if it does not fit.
    pub fn to_u64(&self) -> Result<u64> {
        match self.words() {
            [] => Ok(0),
            [a] => Ok(*a as u64),
            [a, b] => Ok((*a as u64) | ((*b as u64) << Word::BITS)),
            _ => Err(Error::domain("UBig::to_u64: value out of range")),
        }
    }

    /// The value as a `u32`, failing if it does not fit.
    pub fn to_u32(&self) -> Result<u32> {
        match self.words() {
            [] => Ok(0),
            [a] => Ok(*a),
            _ => Err(Error::domain("UBig::to_u32: value out of range")),
        }
    }

    /// Big-endian byte representation, with no leading zero byte (the empty
    /// vector represents zero).
    pub fn to_be_bytes(&self) -> Vec<u8> {
        let words = self.words();
        if words.is_empty() {
            return Vec::new();
        }
        let mut bytes = Vec::with_capacity(words.len() * 4);
        for &w in words.iter().rev() {
            bytes.extend_from_slice(&w.to_be_bytes());
        }
        // strip leading zero bytes (from the top word's high zero bytes)
        let first_nonzero = bytes.iter().position(|&b| b != 0).unwrap_or(bytes.len());
        bytes.drain(..first_nonzero);
        bytes
    }

    /// Construct from a big-endian byte sequence.
    pub fn from_be_bytes(bytes: &[u8]) -> Result<Self> {
        if bytes.is_empty() {
            return Ok(UBig::zero());
        }
        let mut words = vec![0 as Word; (bytes.len() + 3) / 4];
        // process from the least significant byte
        for (i, &b) in bytes.iter().rev().enumerate() {
            let word_idx = i / 4;
            let shift = (i % 4) * 8;
            words[word_idx] |= (b as Word) << shift;
        }
        UBig::from_words(&words)
    }

    /// Number of bits required to represent this value (`0` for zero).
    pub fn bit_len(&self) -> usize {
        match self.words().last() {
            None => 0,
            Some(&top) => (self.words().len() - 1) * Word::BITS as usize + top.bit_len(),
        }
    }

    /// `hi_bit`: the 1-based index of the most significant set bit. `0` for
    /// zero.
    #[inline]
    pub fn hi_bit(&self) -> usize {
        self.bit_len()
    }
}

impl From<u64> for UBig {
    #[inline]
    fn from(x: u64) -> Self {
        UBig::from_u64(x)
    }
}

impl From<u32> for UBig {
    #[inline]
    fn from(x: u32) -> Self {
        UBig::from_word(x)
    }
}

pub(crate) fn double_word_at(words: &[Word], i: usize) -> DoubleWord {
    let lo = *words.get(i).unwrap_or(&0) as DoubleWord;
    let hi = *words.get(i + 1).unwrap_or(&0) as DoubleWord;
    lo | (hi << Word::BITS)
}
