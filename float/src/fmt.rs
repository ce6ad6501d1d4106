//! `Display`/`Debug` for [`BFlt`].

use core::fmt;

use crate::repr::BFlt;

impl fmt::Display for BFlt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_zero() {
            return write!(f, "0");
        }
        write!(f, "{} * 2^{}", self.significand(), self.exponent())
    }
}

impl fmt::Debug for BFlt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "BFlt({self})")
    }
}
