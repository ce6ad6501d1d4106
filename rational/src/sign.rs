//! Sign and negation for [`BRat`].

use core::ops::Neg;

use crate::rbig::BRat;
use crate::repr::Repr;

impl BRat {
    #[inline]
    pub fn neg(&self) -> BRat {
        BRat(Repr { numerator: self.0.numerator.neg(), denominator: self.0.denominator.clone() })
    }

    #[inline]
    pub fn abs(&self) -> BRat {
        BRat(Repr { numerator: self.0.numerator.abs(), denominator: self.0.denominator.clone() })
    }
}

impl Neg for BRat {
    type Output = BRat;
    #[inline]
    fn neg(self) -> BRat {
        BRat::neg(&self)
    }
}

impl Neg for &BRat {
    type Output = BRat;
    #[inline]
    fn neg(self) -> BRat {
        BRat::neg(self)
    }
}
