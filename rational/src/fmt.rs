//! `Display`/`Debug` for [`BRat`], plus `FromStr` parsing.
//!
//! Accepted formats: `numerator/denominator` and a bare integer (denominator
//! implicitly `1`).

use core::fmt;
use core::str::FromStr;

use exactfp_base::Error;
use exactfp_int::{SBig, UBig};

use crate::rbig::BRat;

impl fmt::Display for BRat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.denominator() == &UBig::one() {
            write!(f, "{}", self.numerator())
        } else {
            write!(f, "{}/{}", self.numerator(), self.denominator())
        }
    }
}

impl fmt::Debug for BRat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "BRat({self})")
    }
}

impl FromStr for BRat {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Error> {
        match s.split_once('/') {
            Some((num, den)) => {
                let numerator = SBig::from_str(num)?;
                let denominator = UBig::from_str(den)?;
                BRat::from_parts(numerator, denominator)
            }
            None => {
                let numerator = SBig::from_str(s)?;
                Ok(BRat::from_sbig(numerator))
            }
        }
    }
}
