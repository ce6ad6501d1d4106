//! Exact ordering for [`BRat`], by cross-multiplication.

use core::cmp::Ordering;

use exactfp_int::SBig;

use crate::rbig::BRat;

impl PartialOrd for BRat {
    #[inline]
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for BRat {
    fn cmp(&self, other: &Self) -> Ordering {
        // short-circuit on sign before paying for a multiplication; avoids a
        // spurious division or the multiplication entirely when the signs
        // already decide the comparison.
        let ord = self.0.numerator.signum().cmp(&other.0.numerator.signum());
        if ord != Ordering::Equal {
            return ord;
        }

        // both denominators are positive, so multiplying each numerator by
        // the other side's denominator preserves sign and compares exactly.
        let lhs = self.0.numerator.mul(&SBig::from_ubig(other.0.denominator.clone())).expect(
            "cross-multiplication stays within the word budget for comparable BRat magnitudes",
        );
        let rhs = other.0.numerator.mul(&SBig::from_ubig(self.0.denominator.clone())).expect(
            "cross-multiplication stays within the word budget for comparable BRat magnitudes",
        );
        lhs.cmp(&rhs)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use exactfp_int::UBig;

    #[test]
    fn orders_by_cross_multiplication() {
        let a = BRat::from_parts(SBig::from_i64(1), UBig::from_u64(3)).unwrap(); // 1/3
        let b = BRat::from_parts(SBig::from_i64(1), UBig::from_u64(2)).unwrap(); // 1/2
        assert!(a < b);
    }

    #[test]
    fn negative_values_order_below_positive() {
        let neg = BRat::from_parts(SBig::from_i64(-1), UBig::from_u64(2)).unwrap();
        let pos = BRat::from_parts(SBig::from_i64(1), UBig::from_u64(1000)).unwrap();
        assert!(neg < pos);
    }

    #[test]
    fn equal_fractions_in_different_terms_compare_equal() {
        let a = BRat::from_parts(SBig::from_i64(2), UBig::from_u64(4)).unwrap();
        let b = BRat::from_parts(SBig::from_i64(1), UBig::from_u64(2)).unwrap();
        assert_eq!(a.cmp(&b), Ordering::Equal);
    }
}
