use exactfp_float::BFlt;
use exactfp_int::SBig;

#[test]
fn bflt_round_trips_through_json() {
    let values = [
        BFlt::zero(),
        BFlt::from_parts(SBig::from_i64(0x1d), -1),
        BFlt::from_parts(SBig::from_i64(-0x23), -1),
        BFlt::from_f64(123.456).unwrap(),
        BFlt::from_f64(-1e20).unwrap(),
    ];
    for v in values {
        let json = serde_json::to_string(&v).unwrap();
        let parsed: BFlt = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, v);
    }
}
