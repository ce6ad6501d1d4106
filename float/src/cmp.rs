//! Exact ordering for [`BFlt`].

use core::cmp::Ordering;

use crate::repr::BFlt;

impl PartialOrd for BFlt {
    #[inline]
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for BFlt {
    fn cmp(&self, other: &Self) -> Ordering {
        // case 1: zero is handled separately from the sign comparison below,
        // since `SBig::signum` already reports zero as neither negative nor
        // positive.
        match (self.is_zero(), other.is_zero()) {
            (true, true) => return Ordering::Equal,
            (true, false) => return if other.is_negative() { Ordering::Greater } else { Ordering::Less },
            (false, true) => return if self.is_negative() { Ordering::Less } else { Ordering::Greater },
            (false, false) => {}
        }

        // case 2: compare sign
        let (lhs_neg, rhs_neg) = (self.is_negative(), other.is_negative());
        if lhs_neg != rhs_neg {
            return if lhs_neg { Ordering::Less } else { Ordering::Greater };
        }
        let flip = lhs_neg; // both negative: magnitude order is reversed

        // case 3: bound the magnitude by exponent + bit length before paying
        // for an exact shift. A value with `b` significand bits lies in
        // `[2^(e+b-1), 2^(e+b))`, so if one interval's lower bound already
        // exceeds the other's upper bound the comparison is decided.
        let (lhs_exp, rhs_exp) = (self.exponent(), other.exponent());
        let (lhs_bits, rhs_bits) = (self.significand().hi_bit() as i64, other.significand().hi_bit() as i64);
        if lhs_exp >= rhs_exp + rhs_bits {
            return flip_if(Ordering::Greater, flip);
        }
        if rhs_exp >= lhs_exp + lhs_bits {
            return flip_if(Ordering::Less, flip);
        }

        // case 4: compare exact magnitudes by aligning to the smaller
        // exponent.
        let ord = match lhs_exp.cmp(&rhs_exp) {
            Ordering::Equal => self.significand().magnitude().cmp_ubig(other.significand().magnitude()),
            Ordering::Greater => {
                let shifted = self.significand().magnitude().shl((lhs_exp - rhs_exp) as usize).expect(
                    "exponent gap bounded by case 3 above fits the magnitude budget",
                );
                shifted.cmp_ubig(other.significand().magnitude())
            }
            Ordering::Less => {
                let shifted = other.significand().magnitude().shl((rhs_exp - lhs_exp) as usize).expect(
                    "exponent gap bounded by case 3 above fits the magnitude budget",
                );
                self.significand().magnitude().cmp_ubig(&shifted)
            }
        };
        flip_if(ord, flip)
    }
}

#[inline]
fn flip_if(ord: Ordering, flip: bool) -> Ordering {
    if flip {
        ord.reverse()
    } else {
        ord
    }
}
