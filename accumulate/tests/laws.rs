//! Accumulator laws over a small fixed corpus: order-independence and
//! agreement between the two exact backends.

use exactfp_accumulate::{Accumulator, BFltAccumulator, BRatAccumulator};

fn corpus() -> Vec<f64> {
    vec![1.0, -1.0, 0.5, -0.5, 1e300, -1e300, 1e-300, -1e-300, 0.1, 0.2, 3.0, -7.25, f64::MIN_POSITIVE, -f64::MIN_POSITIVE]
}

#[test]
fn bflt_and_brat_agree_bit_for_bit_on_sum() {
    let v = corpus();
    let mut bflt = BFltAccumulator::new();
    let mut brat = BRatAccumulator::new();
    bflt.add_all(&v).unwrap();
    brat.add_all(&v).unwrap();
    assert_eq!(bflt.to_f64().to_bits(), brat.to_f64().to_bits());
}

#[test]
fn bflt_and_brat_agree_bit_for_bit_on_sum_of_squares() {
    let v = corpus();
    let mut bflt = BFltAccumulator::new();
    let mut brat = BRatAccumulator::new();
    bflt.add2_all(&v).unwrap();
    brat.add2_all(&v).unwrap();
    assert_eq!(bflt.to_f64().to_bits(), brat.to_f64().to_bits());
}

#[test]
fn bflt_and_brat_agree_bit_for_bit_on_dot_product() {
    let a = corpus();
    let b: Vec<f64> = a.iter().rev().copied().collect();
    let mut bflt = BFltAccumulator::new();
    let mut brat = BRatAccumulator::new();
    bflt.add_products(&a, &b).unwrap();
    brat.add_products(&a, &b).unwrap();
    assert_eq!(bflt.to_f64().to_bits(), brat.to_f64().to_bits());
}

#[test]
fn sum_is_order_independent() {
    let mut v = corpus();
    let mut baseline = BFltAccumulator::new();
    baseline.add_all(&v).unwrap();
    let expected = baseline.to_f64().to_bits();

    // A handful of fixed permutations stand in for "any" permutation; exact
    // addition is associative, so the rounded result never depends on order.
    for rotation in 1..v.len() {
        v.rotate_left(rotation);
        let mut acc = BFltAccumulator::new();
        acc.add_all(&v).unwrap();
        assert_eq!(acc.to_f64().to_bits(), expected, "rotation {rotation} changed the rounded sum");
    }
}

#[test]
fn operations_on_zero_are_identities() {
    let mut acc = BFltAccumulator::new();
    acc.add(0.0).unwrap();
    assert_eq!(acc.to_f64().to_bits(), 0.0f64.to_bits());

    let mut acc = BFltAccumulator::new();
    acc.add(5.5).unwrap().add_product(3.0, 0.0).unwrap();
    assert_eq!(acc.to_f64(), 5.5);
}
