//! Algebraic law checks for [`UBig`]/[`SBig`] over a small fixed corpus of
//! values spanning single-word, multi-word, and multiplication-threshold
//! boundary sizes.

use exactfp_int::{SBig, UBig};

fn ubig_corpus() -> Vec<UBig> {
    let mut values = vec![UBig::zero(), UBig::one(), UBig::from_u64(2), UBig::from_u64(u64::MAX)];
    for bits in [31, 32, 33, 1024, 4096] {
        let words = (bits + 31) / 32;
        let words: Vec<u32> = (0..words as u32).map(|i| i.wrapping_mul(2654435761).wrapping_add(1)).collect();
        values.push(UBig::from_words(&words).unwrap());
    }
    values
}

fn sbig_corpus() -> Vec<SBig> {
    ubig_corpus()
        .into_iter()
        .flat_map(|u| [SBig::from_ubig(u.clone()), SBig::from_ubig(u).neg()])
        .collect()
}

#[test]
fn addition_is_commutative_and_associative() {
    let values = sbig_corpus();
    for a in &values {
        for b in &values {
            assert_eq!(a.add(b).unwrap(), b.add(a).unwrap());
        }
    }
    let (a, b, c) = (&values[2], &values[5], &values[8]);
    assert_eq!(a.add(b).unwrap().add(c).unwrap(), a.add(&b.add(c).unwrap()).unwrap());
}

#[test]
fn multiplication_is_commutative_and_distributes_over_addition() {
    let values = sbig_corpus();
    for a in &values {
        for b in &values {
            assert_eq!(a.mul(b).unwrap(), b.mul(a).unwrap());
        }
    }
    let (a, b, c) = (&values[1], &values[4], &values[7]);
    let lhs = a.mul(&b.add(c).unwrap()).unwrap();
    let rhs = a.mul(b).unwrap().add(&a.mul(c).unwrap()).unwrap();
    assert_eq!(lhs, rhs);
}

#[test]
fn division_law_holds_across_the_corpus() {
    let values = ubig_corpus();
    for a in &values {
        for b in &values {
            if b.is_zero() {
                continue;
            }
            let (q, r) = a.div_rem(b).unwrap();
            assert!(r.cmp_ubig(b) == std::cmp::Ordering::Less);
            assert_eq!(q.mul(b).unwrap().add(&r).unwrap(), *a);
        }
    }
}

#[test]
fn sqr_matches_self_multiply_across_the_corpus() {
    for u in ubig_corpus() {
        assert_eq!(u.sqr().unwrap(), u.mul(&u).unwrap());
    }
}

#[test]
fn shift_then_shift_back_is_identity() {
    for u in ubig_corpus() {
        for shift in [0usize, 1, 17, 63, 128] {
            let shifted = u.shl(shift).unwrap();
            assert_eq!(shifted.shr(shift), u);
        }
    }
}

#[test]
fn gcd_divides_both_operands_across_the_corpus() {
    let values = ubig_corpus();
    for a in &values {
        for b in &values {
            if a.is_zero() && b.is_zero() {
                continue;
            }
            let g = a.gcd(b).unwrap();
            if !a.is_zero() {
                assert!(a.rem(&g).unwrap().is_zero());
            }
            if !b.is_zero() {
                assert!(b.rem(&g).unwrap().is_zero());
            }
        }
    }
}

#[test]
fn decimal_and_hex_parsing_round_trip_across_the_corpus() {
    for u in ubig_corpus() {
        let dec = u.to_string();
        assert_eq!(UBig::from_str_radix(&dec, 10).unwrap(), u);
        let hex = u.to_hex_string();
        assert_eq!(UBig::from_str_radix(&hex, 16).unwrap(), u);
    }
}
