//! Greatest common divisor for [`UBig`], and the extended (Bézout) variant
//! for [`crate::SBig`].

use core::cmp::Ordering;

use exactfp_base::{Error, ExtendedGcd, Gcd, Result};

use crate::ubig::UBig;
use crate::SBig;

impl UBig {
    /// `gcd(self, v)` via the binary (Stein's) algorithm. Fails with
    /// `Error::Domain` if both operands are zero (the GCD is undefined
    /// there); `gcd(0, v) = v` and `gcd(u, 0) = u` otherwise.
    pub fn gcd(&self, v: &UBig) -> Result<Self> {
        if self.is_zero() && v.is_zero() {
            return Err(Error::domain("UBig::gcd: both operands are zero"));
        }
        if self.is_zero() {
            return Ok(v.clone());
        }
        if v.is_zero() {
            return Ok(self.clone());
        }

        let za = self.trailing_zeros().unwrap_or(0);
        let zb = v.trailing_zeros().unwrap_or(0);
        let shift = za.min(zb);

        let mut a = self.shr(za);
        let mut b = v.shr(zb);
        while a.cmp_ubig(&b) != Ordering::Equal {
            if a.cmp_ubig(&b) == Ordering::Greater {
                core::mem::swap(&mut a, &mut b);
            }
            b = b.sub(&a).expect("binary gcd invariant: a < b here");
            let zb = b.trailing_zeros().unwrap_or(0);
            b = b.shr(zb);
        }
        a.shl(shift)
    }
}

/// The base crate's generic ring vocabulary, for code written against `Gcd`
/// rather than `UBig`'s own `Result`-returning inherent method. Panics if
/// both operands are zero, per the trait's documented contract (matching
/// the primitive-integer impls in `exactfp-base`).
impl Gcd for UBig {
    type Output = UBig;

    fn gcd(self, rhs: UBig) -> UBig {
        UBig::gcd(&self, &rhs).expect("UBig::gcd: both operands are zero")
    }
}

impl SBig {
    /// Extended Euclidean algorithm: returns `(g, x, y)` with
    /// `g = gcd(|self|, |v|) = self*x + v*y`. Not required to be
    /// asymptotically optimal (the reference scheme here is plain iterative
    /// long division); used by the accumulate crate's oracle tests only.
    pub fn gcd_ext(&self, v: &SBig) -> Result<(SBig, SBig, SBig)> {
        if self.is_zero() && v.is_zero() {
            return Err(Error::domain("SBig::gcd_ext: both operands are zero"));
        }
        let (mut old_r, mut r) = (self.clone(), v.clone());
        let (mut old_s, mut s) = (SBig::one(), SBig::zero());
        let (mut old_t, mut t) = (SBig::zero(), SBig::one());

        while !r.is_zero() {
            let (quo, rem) = old_r.div_rem(&r)?;
            let new_r = rem;
            old_r = core::mem::replace(&mut r, new_r);
            let new_s = old_s.sub(&quo.mul(&s)?)?;
            old_s = core::mem::replace(&mut s, new_s);
            let new_t = old_t.sub(&quo.mul(&t)?)?;
            old_t = core::mem::replace(&mut t, new_t);
        }

        // old_r may be negative if both inputs were negative throughout;
        // normalize the GCD to be non-negative, flipping the coefficients.
        if old_r.is_negative() {
            Ok((old_r.neg(), old_s.neg(), old_t.neg()))
        } else {
            Ok((old_r, old_s, old_t))
        }
    }
}

/// The base crate's generic ring vocabulary, for code written against
/// `ExtendedGcd` rather than `SBig`'s own `Result`-returning inherent
/// method. Panics if both operands are zero, per the trait's documented
/// contract.
impl ExtendedGcd for SBig {
    type OutputGcd = SBig;
    type OutputCoeff = SBig;

    fn gcd_ext(self, rhs: SBig) -> (SBig, SBig, SBig) {
        SBig::gcd_ext(&self, &rhs).expect("SBig::gcd_ext: both operands are zero")
    }
}
