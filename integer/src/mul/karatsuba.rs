//! Karatsuba multiplication: O(n^1.585) by splitting each operand into a
//! high and low half and trading one multiplication for two extra additions
//! and a subtraction.
//!
//! `a = a1 * B^h + a0`, `b = b1 * B^h + b0` (`B = 2^32`, `h` the half-point).
//! `a*b = a0*b0 + (a0*b0 + a1*b1 - (a1-a0)*(b1-b0)) * B^h + a1*b1 * B^2h`,
//! rearranged here as the textbook `z0 + z1*B^h + z2*B^2h` with
//! `z1 = (a0+a1)*(b0+b1) - z0 - z2`.

use alloc::vec;
use alloc::vec::Vec;

use crate::math::{add_carry, sub_borrow};
use crate::mul::mul_words;
use crate::Word;

/// Multiply two word slices via one level of Karatsuba splitting, recursing
/// into [`mul_words`] (which re-selects schoolbook/Karatsuba/Toom-3 by size)
/// for the three half-sized products. Returns an untrimmed result of length
/// `a.len() + b.len()`.
pub(crate) fn mul(a: &[Word], b: &[Word]) -> Vec<Word> {
    let n = a.len().min(b.len());
    let half = (n + 1) / 2;

    let (a0, a1) = split_at(a, half);
    let (b0, b1) = split_at(b, half);

    let z0 = mul_words(a0, b0);
    let z2 = mul_words(a1, b1);

    let a_sum = add_words(a0, a1);
    let b_sum = add_words(b0, b1);
    let mut z1 = mul_words(&a_sum, &b_sum);
    // z1 = (a0+a1)(b0+b1) - z0 - z2 = a0*b1 + a1*b0 >= 0, so plain unsigned
    // subtraction never borrows past the top of z1.
    sub_assign(&mut z1, &z0);
    sub_assign(&mut z1, &z2);

    let mut out = vec![0 as Word; a.len() + b.len()];
    add_at(&mut out, &z0, 0);
    add_at(&mut out, &z1, half);
    add_at(&mut out, &z2, half * 2);
    out
}

fn split_at(words: &[Word], mid: usize) -> (&[Word], &[Word]) {
    if mid >= words.len() {
        (words, &[])
    } else {
        (&words[..mid], &words[mid..])
    }
}

fn add_words(a: &[Word], b: &[Word]) -> Vec<Word> {
    let (shorter, longer) = if a.len() <= b.len() { (a, b) } else { (b, a) };
    let mut out = Vec::with_capacity(longer.len() + 1);
    let mut carry = false;
    for i in 0..longer.len() {
        let (s, c) = add_carry(longer[i], *shorter.get(i).unwrap_or(&0), carry);
        out.push(s);
        carry = c;
    }
    if carry {
        out.push(1);
    }
    out
}

/// `out -= v`, where `out` (interpreted as an unsigned integer, zero
/// extended) is always `>= v` for the call sites in this module.
fn sub_assign(out: &mut Vec<Word>, v: &[Word]) {
    let mut borrow = false;
    for (i, &vi) in v.iter().enumerate() {
        let (d, b) = sub_borrow(out[i], vi, borrow);
        out[i] = d;
        borrow = b;
    }
    let mut i = v.len();
    while borrow {
        let (d, b) = sub_borrow(out[i], 0, borrow);
        out[i] = d;
        borrow = b;
        i += 1;
    }
}

/// `out[offset..] += v`, propagating carry within `out`'s existing length.
/// Callers size `out` so the carry never runs past its end.
fn add_at(out: &mut [Word], v: &[Word], offset: usize) {
    let mut carry = false;
    for (i, &vi) in v.iter().enumerate() {
        let (s, c) = add_carry(out[offset + i], vi, carry);
        out[offset + i] = s;
        carry = c;
    }
    let mut i = offset + v.len();
    while carry && i < out.len() {
        let (s, c) = add_carry(out[i], 0, carry);
        out[i] = s;
        carry = c;
        i += 1;
    }
}
