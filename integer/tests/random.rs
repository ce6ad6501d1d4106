//! Randomized property checks, run only when the `rand` feature is enabled.

use exactfp_int::{SBig, UBig};
use rand::rngs::StdRng;
use rand::SeedableRng;

fn rng() -> StdRng {
    StdRng::seed_from_u64(0x5eed_c0de)
}

#[test]
fn random_division_law_holds() {
    let mut rng = rng();
    for _ in 0..500 {
        let a = UBig::random_with_bit_len(&mut rng, 1 + (rng_bits(&mut rng) % 512));
        let b_bits = 1 + (rng_bits(&mut rng) % 256);
        let b = UBig::random_with_bit_len(&mut rng, b_bits);
        if b.is_zero() {
            continue;
        }
        let (q, r) = a.div_rem(&b).unwrap();
        assert!(r.cmp_ubig(&b) == std::cmp::Ordering::Less);
        assert_eq!(q.mul(&b).unwrap().add(&r).unwrap(), a);
    }
}

#[test]
fn random_gcd_divides_both_operands() {
    let mut rng = rng();
    for _ in 0..500 {
        let a = UBig::random_with_bit_len(&mut rng, 1 + (rng_bits(&mut rng) % 300));
        let b = UBig::random_with_bit_len(&mut rng, 1 + (rng_bits(&mut rng) % 300));
        let g = a.gcd(&b).unwrap();
        assert!(a.rem(&g).unwrap().is_zero());
        assert!(b.rem(&g).unwrap().is_zero());
    }
}

#[test]
fn random_mul_matches_across_multiplication_regimes() {
    let mut rng = rng();
    // Bit lengths chosen to straddle the schoolbook/Karatsuba/Toom-3
    // thresholds (32 and 128 words, i.e. 1024 and 4096 bits).
    for bits in [16, 1000, 1024, 1050, 4000, 4096, 4200] {
        let a = UBig::random_with_bit_len(&mut rng, bits);
        let b = UBig::random_with_bit_len(&mut rng, bits / 2 + 1);
        let via_mul = a.mul(&b).unwrap();
        let (q, r) = via_mul.div_rem(&b).unwrap();
        assert!(r.is_zero());
        assert_eq!(q, a);
    }
}

#[test]
fn signed_add_sub_round_trips() {
    let mut rng = rng();
    for _ in 0..300 {
        let a = SBig::random_with_bit_len(&mut rng, 1 + (rng_bits(&mut rng) % 400), rng_bits(&mut rng) % 2 == 0);
        let b = SBig::random_with_bit_len(&mut rng, 1 + (rng_bits(&mut rng) % 400), rng_bits(&mut rng) % 2 == 1);
        let sum = a.add(&b).unwrap();
        assert_eq!(sum.sub(&b).unwrap(), a);
    }
}

fn rng_bits(rng: &mut StdRng) -> usize {
    use rand::RngCore;
    (rng.next_u32() % 1024) as usize
}
