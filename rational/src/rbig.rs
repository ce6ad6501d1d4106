//! [`BRat`]: an exact arbitrary-precision rational number.

use exactfp_base::{Error, Result};
use exactfp_int::{SBig, UBig};

use crate::repr::Repr;

/// `numerator / denominator`, always kept reduced to lowest terms with a
/// positive denominator; the sign of the fraction lives entirely in
/// `numerator`'s sign.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct BRat(pub(crate) Repr);

impl BRat {
    #[inline]
    pub fn zero() -> Self {
        BRat(Repr::zero())
    }

    #[inline]
    pub fn one() -> Self {
        BRat(Repr::one())
    }

    /// Construct `numerator / denominator`, reduced to lowest terms. Fails
    /// with `Error::Domain` if `denominator` is zero.
    pub fn from_parts(numerator: SBig, denominator: UBig) -> Result<Self> {
        if denominator.is_zero() {
            return Err(Error::domain("BRat::from_parts: zero denominator"));
        }
        Ok(BRat(Repr { numerator, denominator }.reduce()))
    }

    /// Construct an integer-valued rational `n / 1`.
    #[inline]
    pub fn from_sbig(n: SBig) -> Self {
        BRat(Repr { numerator: n, denominator: UBig::one() })
    }

    #[inline]
    pub fn numerator(&self) -> &SBig {
        &self.0.numerator
    }

    #[inline]
    pub fn denominator(&self) -> &UBig {
        &self.0.denominator
    }

    #[inline]
    pub fn is_zero(&self) -> bool {
        self.0.numerator.is_zero()
    }

    #[inline]
    pub fn is_negative(&self) -> bool {
        self.0.numerator.is_negative()
    }

    /// Re-reduce to lowest terms. A no-op for a value produced by any public
    /// constructor or arithmetic operation in this crate, but exposed since
    /// `Relaxed`-style intermediate values are not part of this design --
    /// every `BRat` is always already reduced.
    #[inline]
    pub fn reduce(self) -> Self {
        BRat(self.0.reduce())
    }
}

impl Default for BRat {
    #[inline]
    fn default() -> Self {
        BRat::zero()
    }
}
