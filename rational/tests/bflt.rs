//! `BRat <-> BFlt` conversions, run only when the `exactfp-float` feature is
//! enabled.

use exactfp_float::BFlt;
use exactfp_int::{SBig, UBig};
use exactfp_rational::BRat;

#[test]
fn every_f64_round_trips_through_bflt_and_brat() {
    for x in [1.0, -1.0, 0.5, 123.456, 1e10, 1e-10, f64::MIN_POSITIVE] {
        let v = BFlt::from_f64(x).unwrap();
        let r = BRat::from_bflt(&v).unwrap();
        assert_eq!(r.to_f64(), x);
        assert_eq!(r.to_bflt().unwrap().to_f64(), x);
    }
}

#[test]
fn dyadic_rational_converts_exactly_both_ways() {
    let r = BRat::from_parts(SBig::from_i64(-13), UBig::from_u64(16)).unwrap();
    let v = r.to_bflt().unwrap();
    assert_eq!(BRat::from_bflt(&v).unwrap(), r);
}

#[test]
fn non_dyadic_rational_has_no_exact_bflt() {
    let r = BRat::from_parts(SBig::from_i64(1), UBig::from_u64(5)).unwrap();
    assert!(r.to_bflt().is_err());
}
