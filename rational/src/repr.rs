//! The `numerator / denominator` pair underlying [`crate::BRat`].

use exactfp_int::{SBig, UBig};

#[derive(Clone, Debug, Eq, PartialEq)]
pub(crate) struct Repr {
    pub(crate) numerator: SBig,
    pub(crate) denominator: UBig,
}

impl Repr {
    #[inline]
    pub(crate) fn zero() -> Self {
        Repr { numerator: SBig::zero(), denominator: UBig::one() }
    }

    #[inline]
    pub(crate) fn one() -> Self {
        Repr { numerator: SBig::one(), denominator: UBig::one() }
    }

    /// Divide numerator and denominator by their GCD. The denominator is
    /// assumed nonzero (an invariant every public constructor enforces), so
    /// `gcd` only fails when both operands are zero, which cannot happen
    /// here since `denominator >= 1`.
    pub(crate) fn reduce(self) -> Self {
        if self.numerator.is_zero() {
            return Repr::zero();
        }
        let g = self
            .numerator
            .magnitude()
            .gcd(&self.denominator)
            .expect("denominator is never zero, so the gcd is always defined");
        if g == UBig::one() {
            return self;
        }
        let reduced_mag = self.numerator.magnitude().div(&g).expect("g divides the numerator's magnitude");
        let numerator = if self.numerator.is_negative() {
            SBig::from_ubig(reduced_mag).neg()
        } else {
            SBig::from_ubig(reduced_mag)
        };
        let denominator = self.denominator.div(&g).expect("g divides the denominator");
        Repr { numerator, denominator }
    }
}
